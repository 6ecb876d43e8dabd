//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// The line printed for `-version`.
pub fn version_line() -> String {
    format!(
        "Monster stats version: {} ({} {})",
        env!("CARGO_PKG_VERSION"),
        BUILD_DATE,
        BUILD_COMMIT
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_not_empty() {
        assert!(!BUILD_COMMIT.is_empty());
        assert!(!BUILD_DATE.is_empty());
    }

    #[test]
    fn test_build_date_format() {
        // YYYY-MM-DD or "unknown"
        assert!(BUILD_DATE.len() == 10 || BUILD_DATE == "unknown");
    }

    #[test]
    fn test_version_line_prefix() {
        let line = version_line();
        assert!(line.starts_with("Monster stats version: "));
        assert!(line.contains(BUILD_COMMIT));
    }
}
