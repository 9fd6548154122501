//! Prefix completion over visible and exported vars.
//!
//! Qualified prefixes complete against the target namespace's exported
//! vars and come back re-qualified; unqualified prefixes complete against
//! everything visible in the current namespace. Anything that fails to
//! resolve degrades to an empty match set echoing the typed text.

use crate::namespace::NamespaceTable;
use crate::resolve::{parse_ident, resolve_namespace_name};

/// Result of a completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// Matching identifiers, lexicographically sorted.
    pub matches: Vec<String>,
    /// Longest common prefix of the matches, or the original input when
    /// nothing matched, so the editor can insert the typed text unchanged.
    pub prefix: String,
}

impl Completion {
    fn echo(input: &str) -> Self {
        Completion {
            matches: Vec::new(),
            prefix: input.to_string(),
        }
    }
}

/// Complete `input` against the namespace table, with `scope` as the
/// current namespace.
pub fn complete(table: &NamespaceTable, scope: &str, input: &str) -> Completion {
    let parsed = parse_ident(input);

    let candidates = match parsed.namespace {
        Some(qualifier) => match resolve_namespace_name(table, scope, qualifier) {
            Some(ns) => table.public_names(&ns),
            None => return Completion::echo(input),
        },
        None => table.visible_names(scope),
    };

    let mut matches: Vec<String> = candidates
        .into_iter()
        .filter(|name| !name.is_empty() && name.starts_with(parsed.name))
        .collect();
    matches.sort();
    // A var both interned and referred under the same name is one candidate.
    matches.dedup();

    if matches.is_empty() {
        return Completion::echo(input);
    }

    let mut prefix = longest_common_prefix(&matches);
    if let Some(qualifier) = parsed.namespace {
        for m in &mut matches {
            *m = format!("{}/{}", qualifier, m);
        }
        prefix = format!("{}/{}", qualifier, prefix);
    }

    Completion { matches, prefix }
}

/// Running longest common prefix, by left-to-right character comparison.
fn longest_common_prefix(names: &[String]) -> String {
    let mut iter = names.iter();
    let mut prefix: &str = match iter.next() {
        Some(first) => first,
        None => return String::new(),
    };
    for name in iter {
        let common = prefix
            .char_indices()
            .zip(name.chars())
            .find(|&((_, a), b)| a != b)
            .map(|((i, _), _)| i)
            .unwrap_or_else(|| prefix.len().min(name.len()));
        prefix = &prefix[..common];
        if prefix.is_empty() {
            break;
        }
    }
    prefix.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::VarMeta;

    fn table() -> NamespaceTable {
        let mut table = NamespaceTable::new();
        let core = table.ensure("app.core");
        core.intern("foo", VarMeta::new());
        core.intern("foobar", VarMeta::new());
        core.intern("baz", VarMeta::new());
        core.intern("hidden", VarMeta::new().private());
        let web = table.ensure("app.web");
        web.alias("core", "app.core");
        web.refer("foo", "app.core", "foo");
        web.intern("handler", VarMeta::new());
        table
    }

    #[test]
    fn test_unqualified_prefix() {
        let c = complete(&table(), "app.core", "foo");
        assert_eq!(c.matches, vec!["foo", "foobar"]);
        assert_eq!(c.prefix, "foo");
    }

    #[test]
    fn test_no_match_echoes_input() {
        let c = complete(&table(), "app.core", "zzz");
        assert!(c.matches.is_empty());
        assert_eq!(c.prefix, "zzz");
    }

    #[test]
    fn test_private_var_visible_in_own_namespace() {
        let c = complete(&table(), "app.core", "hid");
        assert_eq!(c.matches, vec!["hidden"]);
    }

    #[test]
    fn test_qualified_draws_from_publics_only() {
        let c = complete(&table(), "app.web", "app.core/h");
        // "hidden" is private, so a qualified prefix cannot see it.
        assert!(c.matches.is_empty());
        assert_eq!(c.prefix, "app.core/h");
    }

    #[test]
    fn test_qualified_matches_requalified() {
        let c = complete(&table(), "app.web", "app.core/fo");
        assert_eq!(c.matches, vec!["app.core/foo", "app.core/foobar"]);
        assert_eq!(c.prefix, "app.core/foo");
    }

    #[test]
    fn test_alias_qualifier_keeps_alias_in_output() {
        let c = complete(&table(), "app.web", "core/fo");
        assert_eq!(c.matches, vec!["core/foo", "core/foobar"]);
        assert_eq!(c.prefix, "core/foo");
    }

    #[test]
    fn test_unknown_qualifier_echoes() {
        let c = complete(&table(), "app.core", "nope/fo");
        assert!(c.matches.is_empty());
        assert_eq!(c.prefix, "nope/fo");
    }

    #[test]
    fn test_unqualified_sees_refers() {
        let c = complete(&table(), "app.web", "f");
        assert_eq!(c.matches, vec!["foo"]);
    }

    #[test]
    fn test_empty_prefix_lists_all_publics() {
        let c = complete(&table(), "app.web", "core/");
        assert_eq!(c.matches, vec!["core/baz", "core/foo", "core/foobar"]);
        assert_eq!(c.prefix, "core/");
    }

    #[test]
    fn test_common_prefix_is_longest() {
        // Brute-force check of the longest-common-prefix property.
        let names: Vec<String> = vec!["reduce".into(), "reductions".into(), "redo".into()];
        let lcp = longest_common_prefix(&names);
        assert_eq!(lcp, "red");
        for name in &names {
            assert!(name.starts_with(&lcp));
        }
        // One character longer is no longer common.
        let longer: String = names[0].chars().take(lcp.chars().count() + 1).collect();
        assert!(!names.iter().all(|n| n.starts_with(&longer)));
    }

    #[test]
    fn test_common_prefix_multibyte_safe() {
        let names: Vec<String> = vec!["λ-calc".into(), "λ-cons".into()];
        assert_eq!(longest_common_prefix(&names), "λ-c");
    }
}
