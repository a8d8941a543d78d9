//! Argument tree model and usage-syntax rendering.
//!
//! This crate defines the foundational types for command specification
//! documents and the rules that turn them into human-readable syntax:
//!
//! - [`ArgumentNode`] / [`ArgumentKind`]: one node of a recursive argument
//!   grammar (`oneof` alternatives, blocks, pure tokens, plain values).
//! - [`CommandDescriptor`]: container, metadata and top-level arguments of a
//!   command.
//! - [`CommandDocument`]: a validated single-command document.
//! - [`render`] / [`flatten`]: usage-syntax rendering.
//! - [`natural_cmp`]: numeric-aware string ordering for command names.
//!
//! Validation ([`validate_document`]) enforces that a document defines
//! exactly one command.
//!
//! # Example
//!
//! ```
//! use command_syntax_core::*;
//!
//! let doc = CommandDocument::from_json_str(r#"{
//!     "SET": {
//!         "arguments": [
//!             {"name": "key", "type": "key"},
//!             {"name": "value", "type": "string"},
//!             {"name": "condition", "type": "oneof", "optional": true, "arguments": [
//!                 {"name": "nx", "type": "pure-token", "token": "NX"},
//!                 {"name": "xx", "type": "pure-token", "token": "XX"}
//!             ]}
//!         ]
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(doc.command_name(), "SET");
//! assert_eq!(doc.flatten(), vec!["key", "value", "[{NX|XX}]"]);
//! ```

mod document;
mod natural;
mod render;
mod types;
mod validate;

pub use document::{CommandDocument, DocumentError};
pub use natural::{natural_cmp, natural_less};
pub use render::{ALTERNATIVE_SEPARATOR, ELLIPSIS, flatten, render};
pub use types::*;
pub use validate::{ValidationError, validate_document};
