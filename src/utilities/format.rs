// Formatting Utilities
// Human-readable values for the UI

/// Format a byte count for display, e.g. "43.1 KB"
pub fn human_size(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;

    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes() {
        assert_eq!(human_size(0), "0 B");
        assert_eq!(human_size(512), "512 B");
    }

    #[test]
    fn test_kilobytes() {
        assert_eq!(human_size(2048), "2.0 KB");
        assert_eq!(human_size(44134), "43.1 KB");
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(human_size(3 * 1024 * 1024), "3.0 MB");
    }
}
