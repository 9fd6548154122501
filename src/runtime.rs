//! The seam to the host language runtime.
//!
//! Reading, evaluating, and single-step macro expansion are primitives the
//! runtime supplies; this crate drives them but never reimplements them.
//! Forms stay opaque on this side of the seam.

use crate::error::LoadError;

/// An expression as the runtime handed it back. Opaque to the backend,
/// printable for the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    text: String,
}

impl Form {
    pub fn new(text: impl Into<String>) -> Self {
        Form { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Cursor over a region of source text, advanced by the runtime's reader.
#[derive(Debug)]
pub struct FormReader<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> FormReader<'a> {
    pub fn new(src: &'a str) -> Self {
        FormReader { src, pos: 0 }
    }

    /// Unconsumed remainder of the region.
    pub fn remaining(&self) -> &'a str {
        &self.src[self.pos..]
    }

    /// Consume `len` bytes of the remainder.
    pub fn advance(&mut self, len: usize) {
        self.pos = (self.pos + len).min(self.src.len());
    }

    pub fn is_empty(&self) -> bool {
        self.remaining().trim().is_empty()
    }
}

/// Read-eval primitives supplied by the host runtime.
pub trait Runtime {
    /// Parse the next form off the reader; `Ok(None)` at end of input.
    fn read_next(&mut self, reader: &mut FormReader<'_>) -> Result<Option<Form>, LoadError>;

    /// Evaluate one form, returning its printed value.
    fn eval(&mut self, form: &Form) -> Result<String, LoadError>;

    /// Expand the outermost macro call of a form by one step.
    fn macroexpand1(&mut self, form: &Form) -> Result<Form, LoadError>;
}

/// Ambient per-session context: owned by the surrounding dispatcher,
/// passed into every operation rather than living in process globals.
#[derive(Debug, Clone)]
pub struct Session {
    /// Name of the current namespace.
    pub current_ns: String,
    /// Most recent load failure text, written by the debugger loop.
    pub last_failure: Option<String>,
}

impl Session {
    pub fn new(current_ns: impl Into<String>) -> Self {
        Session {
            current_ns: current_ns.into(),
            last_failure: None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new("user")
    }
}
