//! Jump-to-definition: from identifier to concrete source location.
//!
//! Combines the resolver, the search path, and the file locator. The
//! declaring namespace maps to a directory path (`.` → `/`, `-` → `_`),
//! joined with the file recorded at definition time; a bare-filename retry
//! covers sources that were loaded from a root directly.

use crate::locate::{locate, Location};
use crate::namespace::{Binding, NamespaceTable};
use crate::path;
use crate::resolve::resolve;
use crate::search_path::SearchRoot;

/// One definition lookup outcome for the editor.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionResult {
    /// Located source, labelled with a printed definition signature.
    Found { label: String, location: Location },
    /// The identifier resolved but its source could not be located.
    NotFound { name: String, reason: String },
}

/// Find the definition of `ident` as seen from `scope`.
///
/// An identifier that does not resolve yields an empty list; a resolved
/// binding without locatable source yields a single not-found record.
pub fn find_definition(
    table: &NamespaceTable,
    roots: &[SearchRoot],
    scope: &str,
    ident: &str,
) -> Vec<DefinitionResult> {
    let Some(binding) = resolve(table, scope, ident) else {
        return Vec::new();
    };

    let Some(file) = binding.file.clone() else {
        return vec![DefinitionResult::NotFound {
            name: binding.name.clone(),
            reason: format!("No source file recorded for {}", binding.qualified_name()),
        }];
    };

    let candidate = path::join(&[&namespace_dir(&binding.namespace), &file]);
    let mut location = locate(&candidate, roots);
    if !location.is_found() {
        let bare = path::filename(&file).unwrap_or(&file);
        location = locate(bare, roots);
    }

    match location {
        Location::NotFound { .. } => vec![DefinitionResult::NotFound {
            name: binding.name.clone(),
            reason: format!("Source definition not found: {}", file),
        }],
        found => vec![DefinitionResult::Found {
            label: definition_label(&binding),
            location: found.at_line(binding.line),
        }],
    }
}

/// Map a namespace name to its source directory: segment separators become
/// path separators and word separators become underscores.
fn namespace_dir(namespace: &str) -> String {
    namespace.replace('.', "/").replace('-', "_")
}

/// Printed definition signature used as the result label.
fn definition_label(binding: &Binding) -> String {
    if binding.arglists.is_empty() {
        format!("(def {})", binding.name)
    } else {
        format!("(defn {})", binding.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::VarMeta;

    fn table() -> NamespaceTable {
        let mut t = NamespaceTable::new();
        let core = t.ensure("app.data-model");
        core.intern(
            "parse",
            VarMeta::new()
                .with_source("model.opal", 12)
                .with_arglists(vec!["[text]".into()]),
        );
        core.intern("no-source", VarMeta::new());
        t
    }

    #[test]
    fn test_unresolvable_is_empty_not_notfound() {
        let results = find_definition(&table(), &[], "app.data-model", "missing");
        assert!(results.is_empty());
    }

    #[test]
    fn test_namespace_dir_mapping() {
        assert_eq!(namespace_dir("app.data-model"), "app/data_model");
    }

    #[test]
    fn test_resolved_without_file_is_notfound() {
        let results = find_definition(&table(), &[], "app.data-model", "no-source");
        assert_eq!(results.len(), 1);
        assert!(matches!(results[0], DefinitionResult::NotFound { .. }));
    }

    #[test]
    fn test_locator_miss_is_single_notfound_record() {
        let results = find_definition(&table(), &[], "app.data-model", "parse");
        match &results[..] {
            [DefinitionResult::NotFound { name, reason }] => {
                assert_eq!(name, "parse");
                assert!(reason.contains("model.opal"));
            }
            other => panic!("expected one not-found record, got {:?}", other),
        }
    }

    #[test]
    fn test_labels() {
        let b = resolve(&table(), "app.data-model", "parse").unwrap();
        assert_eq!(definition_label(&b), "(defn parse)");
        let b = resolve(&table(), "app.data-model", "no-source").unwrap();
        assert_eq!(definition_label(&b), "(def no-source)");
    }
}
