//! Archive-aware source file location.
//!
//! Walks an ordered root list and reports the first root containing the
//! requested path, either as a plain file under a directory root or as an
//! entry inside a zip/jar container. Failing to open a root as an archive
//! is the liveness probe for "is this root an archive" and is swallowed,
//! never surfaced.

use std::fs::File;

use crate::path;
use crate::search_path::SearchRoot;

/// Where a source file was found, or why it was not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A plain file on disk.
    File { path: String, line: Option<u32> },
    /// An entry inside an archive container.
    Archive { archive: String, entry: String },
    /// Nothing matched; carries a human-readable reason.
    NotFound { reason: String },
}

impl Location {
    pub fn file(path: impl Into<String>) -> Self {
        Location::File {
            path: path.into(),
            line: None,
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Location::NotFound {
            reason: reason.into(),
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Location::NotFound { .. })
    }

    /// Copy with the line number set; archive and not-found locations are
    /// returned unchanged.
    pub fn at_line(self, line: Option<u32>) -> Self {
        match self {
            Location::File { path, .. } => Location::File { path, line },
            other => other,
        }
    }
}

/// Find `relative` under the ordered `roots`. First match wins; later
/// roots are not consulted after a hit.
pub fn locate(relative: &str, roots: &[SearchRoot]) -> Location {
    if path::is_absolute(relative) {
        return Location::file(relative);
    }

    for root in roots {
        let candidate = path::normalize(&path::join(&[root.as_str(), relative]));
        if path::is_file(&candidate) {
            return Location::file(candidate);
        }
        if archive_contains(root, relative) {
            return Location::Archive {
                archive: root.as_str().to_string(),
                entry: relative.to_string(),
            };
        }
    }

    Location::not_found(format!("{} not found on the source search path", relative))
}

/// Probe a root as a zip/jar container for an entry named exactly
/// `relative`. Any failure to open or read the container means "no match
/// in this root". The handle is dropped before returning either way.
fn archive_contains(root: &SearchRoot, relative: &str) -> bool {
    let file = match File::open(root.as_str()) {
        Ok(f) => f,
        Err(_) => return false,
    };
    match zip::ZipArchive::new(file) {
        Ok(archive) => archive.index_for_name(relative).is_some(),
        Err(_) => {
            log::debug!("root {} is not a readable archive", root);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_path_short_circuits() {
        let roots = vec![SearchRoot::new("/does/not/exist")];
        let loc = locate("/abs/file.opal", &roots);
        assert_eq!(loc, Location::file("/abs/file.opal"));
    }

    #[test]
    fn test_absolute_path_with_empty_roots() {
        let loc = locate("/abs/file.opal", &[]);
        assert_eq!(loc, Location::file("/abs/file.opal"));
    }

    #[test]
    fn test_miss_reports_not_found() {
        let loc = locate("no/such/file.opal", &[SearchRoot::new("/nonexistent")]);
        assert!(!loc.is_found());
    }

    #[test]
    fn test_unreadable_archive_root_swallowed() {
        // A directory is not an archive; probing it must not surface an
        // error, just a miss.
        let loc = locate("missing.opal", &[SearchRoot::new("/")]);
        assert!(matches!(loc, Location::NotFound { .. }));
    }

    #[test]
    fn test_at_line_on_file() {
        let loc = Location::file("f.opal").at_line(Some(7));
        assert_eq!(
            loc,
            Location::File {
                path: "f.opal".into(),
                line: Some(7)
            }
        );
    }

    #[test]
    fn test_at_line_on_archive_unchanged() {
        let loc = Location::Archive {
            archive: "lib.jar".into(),
            entry: "f.opal".into(),
        };
        assert_eq!(loc.clone().at_line(Some(7)), loc);
    }
}
