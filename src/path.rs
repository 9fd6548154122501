//! UTF-8 path operations.
//!
//! Single abstraction over camino and path-clean. No other module in the
//! crate imports these crates directly. Public API is `&str` → `String` /
//! `&str` / `bool` / `Result`.

use camino::{Utf8Path, Utf8PathBuf};

/// Join path components. Absolute components replace the prefix.
pub fn join(components: &[&str]) -> String {
    let mut buf = Utf8PathBuf::new();
    for c in components {
        buf.push(c);
    }
    buf.into_string()
}

/// File name (last component). Returns `None` for root or empty.
pub fn filename(path: &str) -> Option<&str> {
    Utf8Path::new(path).file_name()
}

/// Lexical normalization: resolve `.` and `..` without filesystem access.
pub fn normalize(path: &str) -> String {
    use path_clean::PathClean;
    // path-clean operates on std::path::Path. Round-trip is safe:
    // input is UTF-8, clean() only rearranges components.
    let std_path = Utf8Path::new(path).as_std_path();
    let cleaned = std_path.clean();
    cleaned
        .to_str()
        .expect("path-clean cannot introduce non-UTF-8 bytes from UTF-8 input")
        .to_string()
}

/// True if path is absolute.
pub fn is_absolute(path: &str) -> bool {
    Utf8Path::new(path).is_absolute()
}

/// Current working directory.
pub fn cwd() -> Result<String, String> {
    std::env::current_dir()
        .map_err(|e| format!("failed to get current directory: {}", e))
        .and_then(|p| {
            p.to_str()
                .map(|s| s.to_string())
                .ok_or_else(|| "current directory is not valid UTF-8".to_string())
        })
}

/// True if path exists and is a regular file.
pub fn is_file(path: &str) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_file())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_basic() {
        assert_eq!(join(&["a", "b", "c"]), "a/b/c");
    }

    #[test]
    fn test_join_absolute_replaces() {
        assert_eq!(join(&["a", "/b"]), "/b");
    }

    #[test]
    fn test_join_empty_components() {
        assert_eq!(join(&["a", "", "b"]), "a/b");
    }

    #[test]
    fn test_filename_with_dir() {
        assert_eq!(filename("/home/user/data.txt"), Some("data.txt"));
    }

    #[test]
    fn test_filename_bare() {
        assert_eq!(filename("data.txt"), Some("data.txt"));
    }

    #[test]
    fn test_normalize_dots() {
        assert_eq!(normalize("./a/../b"), "b");
    }

    #[test]
    fn test_normalize_absolute() {
        assert_eq!(normalize("/a/./b/../c"), "/a/c");
    }

    #[test]
    fn test_is_absolute() {
        assert!(is_absolute("/foo"));
        assert!(!is_absolute("foo"));
    }

    #[test]
    fn test_cwd_nonempty() {
        let c = cwd().unwrap();
        assert!(!c.is_empty());
    }

    #[test]
    fn test_is_file_on_dir() {
        assert!(!is_file("."));
    }
}
