//! The dispatcher-facing operation set.
//!
//! `Backend` owns a runtime handle, the live namespace table, the session
//! context, and the search-path configuration, and exposes one method per
//! editor operation. Each method catches domain failures at its own
//! boundary and converts them into result values; only load and eval
//! failures propagate, as typed errors for the dispatcher to report.

use crate::complete::{complete, Completion};
use crate::definition::{find_definition, DefinitionResult};
use crate::diagnostics::{compile_unit, CompilationResult};
use crate::error::LoadError;
use crate::namespace::NamespaceTable;
use crate::resolve::resolve;
use crate::runtime::{FormReader, Runtime, Session};
use crate::search_path::SearchPathConfig;

/// Token shape of an operator-lookup argument.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Keyword,
    Symbol(String),
    Other,
}

/// Classify the printed token the editor sent. Keywords and non-symbol
/// tokens carry no parameter lists.
fn classify_token(text: &str) -> Token {
    let text = text.trim();
    if text.starts_with(':') {
        return Token::Keyword;
    }
    let mut chars = text.chars();
    let Some(first) = chars.next() else {
        return Token::Other;
    };
    // A leading sign or dot followed by a digit reads as a number.
    if "+-.".contains(first) && chars.next().is_some_and(|c| c.is_ascii_digit()) {
        return Token::Other;
    }
    let symbol_start = first.is_alphabetic() || "*+!-_?<>=./$%&".contains(first);
    let symbol_rest = text
        .chars()
        .all(|c| c.is_alphanumeric() || "*+!-_?<>=./$%&#'".contains(c));
    if symbol_start && symbol_rest {
        Token::Symbol(text.to_string())
    } else {
        Token::Other
    }
}

/// The backend command layer over one live runtime.
pub struct Backend<R: Runtime> {
    runtime: R,
    namespaces: NamespaceTable,
    session: Session,
    search: SearchPathConfig,
}

impl<R: Runtime> Backend<R> {
    pub fn new(runtime: R, search: SearchPathConfig) -> Self {
        let mut namespaces = NamespaceTable::new();
        let session = Session::default();
        namespaces.ensure(&session.current_ns);
        Backend {
            runtime,
            namespaces,
            session,
            search,
        }
    }

    /// The live namespace table, for the embedding runtime to populate.
    pub fn namespaces_mut(&mut self) -> &mut NamespaceTable {
        &mut self.namespaces
    }

    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Read and evaluate every form in `text`, returning the printed last
    /// value. An empty region prints as `nil`.
    pub fn eval_region(&mut self, text: &str) -> Result<String, LoadError> {
        let mut reader = FormReader::new(text);
        let mut last: Option<String> = None;
        while let Some(form) = self.runtime.read_next(&mut reader)? {
            last = Some(self.runtime.eval(&form)?);
        }
        Ok(last.unwrap_or_else(|| "nil".to_string()))
    }

    /// Expand the first form in `text` by one macroexpansion step and
    /// return its printed shape.
    pub fn macroexpand_once(&mut self, text: &str) -> Result<String, LoadError> {
        let mut reader = FormReader::new(text);
        let form = self
            .runtime
            .read_next(&mut reader)?
            .ok_or_else(|| LoadError::new("No form to expand"))?;
        let expanded = self.runtime.macroexpand1(&form)?;
        Ok(expanded.to_string())
    }

    /// Load a source file and translate the outcome into diagnostics.
    /// Returns `None` when loading was not requested.
    pub fn compile_file(&mut self, file_path: &str, load: bool) -> Option<CompilationResult> {
        if !load {
            return None;
        }
        log::debug!("loading {}", file_path);
        let result = compile_unit(|| {
            let text = std::fs::read_to_string(file_path)
                .map_err(|e| LoadError::file_read(file_path, e))?;
            self.eval_region(&text)
        });
        Some(result)
    }

    /// Documentation block for a symbol, or an unknown-symbol notice.
    pub fn describe_symbol(&self, name: &str) -> String {
        match resolve(&self.namespaces, &self.session.current_ns, name) {
            Some(binding) => {
                let mut out = binding.qualified_name();
                if !binding.arglists.is_empty() {
                    out.push('\n');
                    out.push_str(&printed_arglists(&binding.arglists));
                }
                if let Some(doc) = &binding.doc {
                    out.push_str("\n  ");
                    out.push_str(doc);
                }
                out
            }
            None => format!("Unknown symbol {}", name),
        }
    }

    /// Printed parameter lists for an operator, dispatched on token shape.
    pub fn operator_arglists(&self, name: &str, scope: &str) -> Option<String> {
        match classify_token(name) {
            Token::Keyword => None,
            Token::Other => None,
            Token::Symbol(sym) => {
                let binding = resolve(&self.namespaces, scope, &sym)?;
                if binding.arglists.is_empty() {
                    None
                } else {
                    Some(printed_arglists(&binding.arglists))
                }
            }
        }
    }

    /// Prefix completion in `scope`.
    pub fn completions(&self, prefix: &str, scope: &str) -> Completion {
        complete(&self.namespaces, scope, prefix)
    }

    /// All live namespace names, sorted.
    pub fn list_namespaces(&self) -> Vec<String> {
        self.namespaces.names()
    }

    /// Switch the current namespace, creating it on first reference, and
    /// echo the confirmed name twice.
    pub fn set_namespace(&mut self, name: &str) -> (String, String) {
        self.namespaces.ensure(name);
        self.session.current_ns = name.to_string();
        (name.to_string(), name.to_string())
    }

    /// Definition lookup against the current namespace and search path.
    pub fn find_definition(&self, ident: &str) -> Vec<DefinitionResult> {
        find_definition(
            &self.namespaces,
            &self.search.roots(),
            &self.session.current_ns,
            ident,
        )
    }
}

fn printed_arglists(arglists: &[String]) -> String {
    format!("({})", arglists.join(" "))
}
