//! # opal-backend - Interactive Development Backend for Opal
//!
//! The command layer that lets an editor drive a live Opal runtime:
//! evaluate regions, expand macros one step, load files, describe symbols,
//! enumerate namespaces, complete partial identifiers, and jump to
//! definitions.
//!
//! ## Quick Start
//!
//! ```
//! use opal_backend::{Backend, SearchPathConfig, VarMeta};
//! # use opal_backend::{Form, FormReader, LoadError, Runtime};
//! # struct Rt;
//! # impl Runtime for Rt {
//! #     fn read_next(&mut self, _: &mut FormReader<'_>) -> Result<Option<Form>, LoadError> { Ok(None) }
//! #     fn eval(&mut self, f: &Form) -> Result<String, LoadError> { Ok(f.text().to_string()) }
//! #     fn macroexpand1(&mut self, f: &Form) -> Result<Form, LoadError> { Ok(f.clone()) }
//! # }
//!
//! let mut backend = Backend::new(Rt, SearchPathConfig::from_env());
//! backend
//!     .namespaces_mut()
//!     .ensure("app.core")
//!     .intern("frobnicate", VarMeta::new().with_doc("Frobnicates."));
//!
//! let completion = backend.completions("app.core/fro", "user");
//! assert_eq!(completion.matches, vec!["app.core/frobnicate"]);
//! ```
//!
//! ## Architecture
//!
//! Requests flow one way: dispatcher → operation → structured result.
//!
//! 1. **Resolver** - qualified identifiers against the live namespace table
//! 2. **Completion** - prefix matches plus their longest common prefix
//! 3. **Locator** - source files across directory and archive search roots
//! 4. **Diagnostics** - load failure cause chains as ordered records
//!
//! The runtime's reader, evaluator, and macro expander stay behind the
//! [`Runtime`] trait; the wire transport stays behind the dispatcher. The
//! only cross-request state is the live namespace table and the session's
//! current namespace, and mutating those is serialized by the dispatcher,
//! not here.

pub mod backend;
pub mod complete;
pub mod definition;
pub mod diagnostics;
pub mod error;
pub mod locate;
pub mod namespace;
pub mod path;
pub mod resolve;
pub mod runtime;
pub mod search_path;
pub mod wire;

pub use backend::Backend;
pub use complete::{complete, Completion};
pub use definition::{find_definition, DefinitionResult};
pub use diagnostics::{compile_unit, CompilationResult, DiagnosticRecord, Severity};
pub use error::LoadError;
pub use locate::{locate, Location};
pub use namespace::{Binding, Namespace, NamespaceTable, VarMeta};
pub use resolve::resolve;
pub use runtime::{Form, FormReader, Runtime, Session};
pub use search_path::{SearchPathConfig, SearchRoot};
