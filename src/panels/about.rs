// About Panel
// Biography, focus areas, social links, and the profile photo

use std::path::Path;

use super::{ImageBlock, PanelBody};
use crate::assets;
use crate::content::Portfolio;

/// Build the About panel body
pub fn build(portfolio: &Portfolio) -> PanelBody {
    let profile = &portfolio.profile;

    let mut left = PanelBody::new();
    left.paragraph(&profile.intro);
    left.bullets(profile.focus.clone());
    left.blank();
    left.paragraph(&profile.summary);
    left.blank();
    left.link("📱 LinkedIn", &portfolio.social.linkedin);
    left.link("💻 GitHub", &portfolio.social.github);

    let mut right = PanelBody::new();
    right.image(load_photo_block(&profile.photo_path));

    let mut body = PanelBody::new();
    body.heading(&profile.name);
    body.subheading(&profile.headline);
    body.blank();
    body.columns(vec![left, right]);
    body
}

/// Read the photo bytes at render time
/// A missing file becomes a visible error block rather than a failed pass
fn load_photo_block(photo_path: &str) -> ImageBlock {
    match assets::load_photo(Path::new(photo_path)) {
        Ok(blob) => ImageBlock::Loaded {
            source: photo_path.to_string(),
            bytes: blob.bytes.len(),
        },
        Err(err) => ImageBlock::Missing {
            source: photo_path.to_string(),
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panels::ContentBlock;

    fn image_block(body: &PanelBody) -> Option<ImageBlock> {
        fn find(blocks: &[ContentBlock]) -> Option<ImageBlock> {
            for block in blocks {
                match block {
                    ContentBlock::Image(image) => return Some(image.clone()),
                    ContentBlock::Columns(columns) => {
                        if let Some(image) = columns.iter().find_map(|c| find(c.blocks())) {
                            return Some(image);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        find(body.blocks())
    }

    #[test]
    fn test_about_contains_social_urls() {
        let portfolio = Portfolio::default();
        let body = build(&portfolio);

        assert!(body.contains_text("https://www.linkedin.com/in/shashank-garimella-27a4b6193/"));
        assert!(body.contains_text("https://github.com/shashank10081999"));
        assert!(body.contains_text(&portfolio.profile.name));
        assert!(body.contains_text(&portfolio.profile.headline));
    }

    #[test]
    fn test_missing_photo_is_visible_error() {
        let mut portfolio = Portfolio::default();
        portfolio.profile.photo_path = "definitely-absent.jpeg".to_string();

        let body = build(&portfolio);
        match image_block(&body) {
            Some(ImageBlock::Missing { source, reason }) => {
                assert_eq!(source, "definitely-absent.jpeg");
                assert!(reason.contains("definitely-absent.jpeg"));
            }
            other => panic!("expected missing image block, got {:?}", other),
        }
    }

    #[test]
    fn test_present_photo_is_loaded() {
        let path = std::env::temp_dir().join(format!("about-photo-{}.jpeg", std::process::id()));
        std::fs::write(&path, b"jpeg bytes here").unwrap();

        let mut portfolio = Portfolio::default();
        portfolio.profile.photo_path = path.display().to_string();

        let body = build(&portfolio);
        match image_block(&body) {
            Some(ImageBlock::Loaded { bytes, .. }) => assert_eq!(bytes, 15),
            other => panic!("expected loaded image block, got {:?}", other),
        }

        let _ = std::fs::remove_file(&path);
    }
}
