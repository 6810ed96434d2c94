// Asset Loading
// Reads the profile photo from local storage as an opaque byte blob

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors reading a local asset
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("photo '{path}' not found")]
    Missing { path: String },

    #[error("photo '{path}' could not be read: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A loaded profile photo
/// The bytes are opaque to this crate; the UI layer decides how to present them
#[derive(Debug, Clone)]
pub struct PhotoBlob {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Read a photo file at render time
/// A missing file is a visible, non-fatal rendering error for the About panel
pub fn load_photo(path: &Path) -> Result<PhotoBlob, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing {
            path: path.display().to_string(),
        });
    }

    let bytes = fs::read(path).map_err(|source| AssetError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    Ok(PhotoBlob {
        path: path.to_path_buf(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_photo() {
        let err = load_photo(Path::new("no-such-photo.jpeg")).unwrap_err();
        assert!(matches!(err, AssetError::Missing { .. }));
        assert!(err.to_string().contains("no-such-photo.jpeg"));
    }

    #[test]
    fn test_load_photo_bytes() {
        let path = std::env::temp_dir().join(format!("portfolio-photo-{}.jpeg", std::process::id()));
        fs::write(&path, b"not really a jpeg").unwrap();

        let blob = load_photo(&path).unwrap();
        assert_eq!(blob.bytes.len(), 17);
        assert_eq!(blob.path, path);

        let _ = fs::remove_file(&path);
    }
}
