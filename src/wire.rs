//! Wire-format encoding of operation results.
//!
//! The transport that frames and ships these payloads is not this crate's
//! concern; the dispatcher asks for a `serde_json::Value` per result and
//! serializes it however its protocol demands.

use serde_json::{json, Value};

use crate::complete::Completion;
use crate::definition::DefinitionResult;
use crate::diagnostics::{CompilationResult, DiagnosticRecord};
use crate::locate::Location;

/// Encode a location. Not-found carries its reason; a missing location is
/// the caller's `null`.
pub fn location_to_wire(location: &Location) -> Value {
    match location {
        Location::File { path, line } => json!({ "file": path, "line": line }),
        Location::Archive { archive, entry } => json!({ "zip": archive, "entry": entry }),
        Location::NotFound { reason } => json!({ "error": reason }),
    }
}

pub fn completion_to_wire(completion: &Completion) -> Value {
    json!({
        "matches": completion.matches,
        "prefix": completion.prefix,
    })
}

pub fn definitions_to_wire(results: &[DefinitionResult]) -> Value {
    let encoded: Vec<Value> = results
        .iter()
        .map(|result| match result {
            DefinitionResult::Found { label, location } => {
                json!([label, { "location": location_to_wire(location) }])
            }
            DefinitionResult::NotFound { name, reason } => {
                json!([name, { "error": reason }])
            }
        })
        .collect();
    Value::Array(encoded)
}

fn diagnostic_to_wire(record: &DiagnosticRecord) -> Value {
    json!({
        "message": record.message,
        "severity": record.severity.to_string(),
        "location": record.location.as_ref().map(location_to_wire),
        "references": record.references,
        "short_message": record.short_message,
    })
}

pub fn compilation_to_wire(result: &CompilationResult) -> Value {
    json!({
        "diagnostics": result.diagnostics.iter().map(diagnostic_to_wire).collect::<Vec<_>>(),
        "results": result.results,
        "durations": result.durations,
    })
}
