//! Assembly of the ordered source search path.
//!
//! Roots come from four provenance sources, concatenated in a fixed order
//! that defines lookup priority: working directory, load-path list,
//! boot-path list, loader-exposed roots. Absent sources contribute nothing.

use crate::path;

/// Environment variable holding the load-path list.
pub const LOAD_PATH_VAR: &str = "OPAL_LOAD_PATH";
/// Environment variable holding the boot-path list.
pub const BOOT_PATH_VAR: &str = "OPAL_BOOT_PATH";

/// Separator between entries in a path list.
pub const PATH_LIST_SEPARATOR: char = if cfg!(windows) { ';' } else { ':' };

/// One candidate location for source lookup: a directory or an archive
/// container. Which one it is gets probed at locate time, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRoot {
    path: String,
}

impl SearchRoot {
    pub fn new(path: impl Into<String>) -> Self {
        SearchRoot { path: path.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }
}

impl std::fmt::Display for SearchRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path)
    }
}

/// The four provenance sources the search path is assembled from.
#[derive(Debug, Clone, Default)]
pub struct SearchPathConfig {
    /// Working directory of the backend process.
    pub working_dir: Option<String>,
    /// Separator-joined load-path list, usually from [`LOAD_PATH_VAR`].
    pub load_path: Option<String>,
    /// Separator-joined boot-path list, usually from [`BOOT_PATH_VAR`].
    pub boot_path: Option<String>,
    /// Roots exposed by the runtime's primary loader, already split.
    pub loader_roots: Vec<String>,
}

impl SearchPathConfig {
    pub fn new() -> Self {
        SearchPathConfig::default()
    }

    /// Read the ambient configuration: process working directory plus the
    /// two path-list environment variables. Loader roots are supplied by
    /// the embedding runtime via [`SearchPathConfig::with_loader_roots`].
    pub fn from_env() -> Self {
        SearchPathConfig {
            working_dir: path::cwd().ok(),
            load_path: std::env::var(LOAD_PATH_VAR).ok(),
            boot_path: std::env::var(BOOT_PATH_VAR).ok(),
            loader_roots: Vec::new(),
        }
    }

    pub fn with_loader_roots(mut self, roots: Vec<String>) -> Self {
        self.loader_roots = roots;
        self
    }

    /// The ordered search roots. Order is significant: it is the lookup
    /// priority for the file locator, and duplicates are not removed.
    pub fn roots(&self) -> Vec<SearchRoot> {
        let mut roots = Vec::new();
        extend_from_list(&mut roots, self.working_dir.as_deref());
        extend_from_list(&mut roots, self.load_path.as_deref());
        extend_from_list(&mut roots, self.boot_path.as_deref());
        for entry in &self.loader_roots {
            if !entry.is_empty() {
                roots.push(SearchRoot::new(entry.clone()));
            }
        }
        log::debug!("assembled {} search roots", roots.len());
        roots
    }
}

fn extend_from_list(roots: &mut Vec<SearchRoot>, list: Option<&str>) {
    if let Some(list) = list {
        for entry in list.split(PATH_LIST_SEPARATOR) {
            if !entry.is_empty() {
                roots.push(SearchRoot::new(entry));
            }
        }
    }
}
