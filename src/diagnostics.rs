//! Translation of load failures into structured diagnostics.
//!
//! A failed load surfaces as a chain of causally linked errors. Each link
//! becomes one diagnostic record, outermost failure first, with a
//! best-effort source location pattern-matched out of the failure text.

use std::error::Error as StdError;
use std::time::Instant;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::LoadError;
use crate::locate::Location;

/// Diagnostic severity. Load failures are always errors; the translator
/// has no other level to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// One structured, user-facing failure description.
#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    pub message: String,
    pub severity: Severity,
    /// Best-effort source location; `None` when no location is available.
    pub location: Option<Location>,
    /// Reserved; nothing populates references yet.
    pub references: Vec<String>,
    pub short_message: String,
}

impl DiagnosticRecord {
    /// Build a record from one failure's full textual description.
    pub fn from_failure(message: &str) -> Self {
        DiagnosticRecord {
            message: message.to_string(),
            severity: Severity::Error,
            location: parse_error_location(message),
            references: Vec::new(),
            short_message: message.to_string(),
        }
    }
}

/// Outcome of one compile/load attempt. The three sequences are aligned
/// 1:1 on the failure path; on success there is exactly one result slot
/// and zero diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationResult {
    pub diagnostics: Vec<DiagnosticRecord>,
    /// Per-unit load results; `None` marks a failure slot with no value.
    pub results: Vec<Option<String>>,
    /// Elapsed seconds, one slot per result.
    pub durations: Vec<f64>,
}

impl CompilationResult {
    pub fn succeeded(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Time one load attempt and translate its outcome.
///
/// On failure every cause in the chain yields one diagnostic; the elapsed
/// time is measured once after the failure is caught and repeated per slot.
pub fn compile_unit<F>(load: F) -> CompilationResult
where
    F: FnOnce() -> Result<String, LoadError>,
{
    let start = Instant::now();
    match load() {
        Ok(value) => CompilationResult {
            diagnostics: Vec::new(),
            results: vec![Some(value)],
            durations: vec![start.elapsed().as_secs_f64()],
        },
        Err(err) => {
            let elapsed = start.elapsed().as_secs_f64();
            let diagnostics: Vec<DiagnosticRecord> = cause_chain(&err)
                .into_iter()
                .map(|cause| DiagnosticRecord::from_failure(&cause.to_string()))
                .collect();
            let count = diagnostics.len();
            CompilationResult {
                diagnostics,
                results: vec![None; count],
                durations: vec![elapsed; count],
            }
        }
    }
}

/// Walk the cause chain outermost-first. A link whose source is itself
/// ends the walk, so a self-referential chain has length one.
pub fn cause_chain<'a>(err: &'a (dyn StdError + 'static)) -> Vec<&'a (dyn StdError + 'static)> {
    let mut chain = vec![err];
    let mut current = err;
    while let Some(next) = current.source() {
        if std::ptr::eq(
            next as *const dyn StdError as *const (),
            current as *const dyn StdError as *const (),
        ) {
            break;
        }
        chain.push(next);
        current = next;
    }
    chain
}

/// The compiler-exception shape: `<exception-type>: <file>:<line>:`.
static COMPILER_EXCEPTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+: ([^\s:]+):(\d+):").expect("compiler exception pattern"));

/// Extract a source location from a failure's text, when it carries the
/// compiler-exception shape.
pub fn parse_error_location(message: &str) -> Option<Location> {
    let captures = COMPILER_EXCEPTION.captures(message)?;
    let file = captures.get(1)?.as_str().to_string();
    let line: u32 = captures.get(2)?.as_str().parse().ok()?;
    Some(Location::File {
        path: file,
        line: Some(line),
    })
}
