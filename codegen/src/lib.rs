//! Usage-syntax extraction and code generation.
//!
//! This crate turns a directory of command specification documents into an
//! ordered table of `(command, [syntax...])` entries and writes it out as
//! generated source text.
//!
//! # Main entry points
//!
//! - [`generate_entries`]: discover documents, extract and sort commands.
//! - [`extract`] / [`extract_str`]: extract a single document.
//! - [`sort_entries`]: descending natural order on command names.
//! - [`emit`]: write entries as Go literals, JSON, YAML or usage lines.
//!
//! # Example
//!
//! ```
//! use command_syntax_codegen::{EmitOptions, emit, extract_str, sort_entries};
//!
//! let mut entries = vec![
//!     extract_str(r#"{"GET": {"arguments": [{"name": "key"}]}}"#).unwrap(),
//!     extract_str(r#"{"PING": {}}"#).unwrap(),
//! ];
//! sort_entries(&mut entries);
//!
//! let mut out = Vec::new();
//! emit(&mut out, &entries, &EmitOptions::default()).unwrap();
//! let text = String::from_utf8(out).unwrap();
//!
//! assert!(text.contains(r#"{ "PING", nil, false },"#));
//! assert!(text.contains(r#"{ "GET", []string{"key"}, false },"#));
//! ```
//!
//! The `syntax-gen` binary in the `command-syntax-cli` crate wraps these
//! APIs.

pub mod collect;
pub mod config;
pub mod discover;
pub mod emit;
pub mod error;
pub mod extract;

pub use collect::{extract_all, generate_entries, sort_entries};
pub use config::GeneratorConfig;
pub use discover::collect_document_paths;
pub use emit::{EmitOptions, OutputFormat, emit, go_literal, go_quote};
pub use error::{ConfigError, GenerateError, LoadError, Result};
pub use extract::{CommandEntry, extract, extract_str};
