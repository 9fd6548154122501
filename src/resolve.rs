//! Symbol resolution against the live namespace table.
//!
//! An identifier is an optional namespace qualifier and a name, split on
//! `/`. The qualifier resolves first as a namespace name, then as an alias
//! local to the current namespace. Resolution failures are `None`, never a
//! fault.

use crate::namespace::{Binding, NamespaceTable};

/// Parsed form of a possibly-qualified identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
    pub namespace: Option<&'a str>,
    pub name: &'a str,
}

/// Split an identifier on the first `/`.
///
/// `/` alone is the division symbol, and `ns//` names `/` inside `ns`, so
/// neither is treated as an empty name.
pub fn parse_ident(text: &str) -> QualifiedName<'_> {
    if text == "/" {
        return QualifiedName {
            namespace: None,
            name: "/",
        };
    }
    match text.split_once('/') {
        Some((ns, name)) => QualifiedName {
            namespace: Some(ns),
            name,
        },
        None => QualifiedName {
            namespace: None,
            name: text,
        },
    }
}

/// Resolve a qualifier to a canonical namespace name: direct name first,
/// then as an alias registered in the current namespace.
pub fn resolve_namespace_name(
    table: &NamespaceTable,
    current: &str,
    qualifier: &str,
) -> Option<String> {
    if table.get(qualifier).is_some() {
        return Some(qualifier.to_string());
    }
    let target = table.get(current)?.alias_target(qualifier)?;
    if table.get(target).is_some() {
        Some(target.to_string())
    } else {
        None
    }
}

/// Resolve an identifier against the current namespace.
///
/// Unqualified names look up in the current namespace's visible set;
/// qualified names in the target namespace's visible set. Returns a
/// [`Binding`] snapshot, or `None` for anything that does not resolve.
pub fn resolve(table: &NamespaceTable, current: &str, ident: &str) -> Option<Binding> {
    let parsed = parse_ident(ident);
    if parsed.name.is_empty() {
        return None;
    }
    let ns_name = match parsed.namespace {
        Some(qualifier) => resolve_namespace_name(table, current, qualifier)?,
        None => current.to_string(),
    };
    table.lookup_visible(&ns_name, parsed.name)
}
