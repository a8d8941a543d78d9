//! Validated single-command documents.

use serde_json::Value;
use thiserror::Error;

use crate::validate::{ValidationError, validate_document};
use crate::{ArgumentNode, CommandDescriptor};

/// Failure to turn raw JSON into a [`CommandDocument`].
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Not valid JSON, or the descriptor has the wrong shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Valid JSON that breaks the single-command rule.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// One command specification: a base name and its descriptor.
///
/// # Examples
///
/// ```
/// use command_syntax_core::CommandDocument;
///
/// let doc = CommandDocument::from_json_str(
///     r#"{"GET": {"container": "CONFIG", "arguments": [{"name": "parameter"}]}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(doc.name, "GET");
/// assert_eq!(doc.command_name(), "CONFIG GET");
/// assert_eq!(doc.flatten(), vec!["parameter"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDocument {
    /// Base command name (the document's only key).
    pub name: String,
    /// Descriptor stored under that key.
    pub descriptor: CommandDescriptor,
}

impl CommandDocument {
    /// Creates a document from already-built parts.
    pub fn new(name: &str, descriptor: CommandDescriptor) -> Self {
        Self {
            name: name.to_string(),
            descriptor,
        }
    }

    /// Parses and validates a JSON document.
    pub fn from_json_str(source: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Validates an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let (name, descriptor) = validate_document(&value)?;
        let descriptor = CommandDescriptor::deserialize_value(descriptor)?;
        Ok(Self::new(name, descriptor))
    }

    /// Effective command name: `container + " " + name` when the descriptor
    /// has a non-empty container, otherwise the base name.
    pub fn command_name(&self) -> String {
        match self.descriptor.container.as_deref() {
            Some(container) if !container.is_empty() => format!("{container} {}", self.name),
            _ => self.name.clone(),
        }
    }

    /// Top-level arguments in declaration order.
    pub fn arguments(&self) -> &[ArgumentNode] {
        &self.descriptor.arguments
    }

    /// Renders every top-level argument.
    pub fn flatten(&self) -> Vec<String> {
        crate::render::flatten(self.arguments())
    }
}

impl CommandDescriptor {
    fn deserialize_value(value: &Value) -> Result<Self, serde_json::Error> {
        // `null` descriptors (`{"PING": null}`) are treated as empty.
        if value.is_null() {
            return Ok(Self::default());
        }
        serde::Deserialize::deserialize(value)
    }
}
