//! Per-document command extraction.

use std::fmt;
use std::fs;
use std::path::Path;

use command_syntax_core::CommandDocument;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerateError, LoadError, Result};

/// A command's effective name and its rendered top-level arguments.
///
/// `Display` yields the command's usage line.
///
/// # Examples
///
/// ```
/// use command_syntax_codegen::extract_str;
///
/// let entry = extract_str(r#"{"EXPIRE": {"arguments": [
///     {"name": "key", "type": "key"},
///     {"name": "seconds", "type": "integer"},
///     {"name": "condition", "type": "oneof", "optional": true, "arguments": [
///         {"name": "nx", "type": "pure-token", "token": "NX"},
///         {"name": "xx", "type": "pure-token", "token": "XX"}
///     ]}
/// ]}}"#).unwrap();
///
/// assert_eq!(entry.to_string(), "EXPIRE key seconds [{NX|XX}]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// Effective name, including the container when present.
    pub name: String,
    /// Rendered top-level arguments in declaration order.
    pub arguments: Vec<String>,
    /// One-line description, when the document provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Version that introduced the command.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Command group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl CommandEntry {
    /// Creates an entry without metadata.
    pub fn new(name: &str, arguments: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            arguments,
            summary: None,
            since: None,
            group: None,
        }
    }
}

impl From<&CommandDocument> for CommandEntry {
    fn from(doc: &CommandDocument) -> Self {
        Self {
            name: doc.command_name(),
            arguments: doc.flatten(),
            summary: doc.descriptor.summary.clone(),
            since: doc.descriptor.since.clone(),
            group: doc.descriptor.group.clone(),
        }
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.arguments.is_empty() {
            return f.write_str(&self.name);
        }
        write!(f, "{} {}", self.name, self.arguments.join(" "))
    }
}

/// Extracts one command from document text.
pub fn extract_str(source: &str) -> std::result::Result<CommandEntry, LoadError> {
    let doc = CommandDocument::from_json_str(source)?;
    Ok(CommandEntry::from(&doc))
}

/// Reads and extracts one command document.
///
/// # Errors
///
/// [`GenerateError::Load`] naming `path` when the file cannot be read,
/// parsed, or validated.
pub fn extract(path: &Path) -> Result<CommandEntry> {
    let raw = fs::read_to_string(path).map_err(|err| GenerateError::load(path, err))?;
    let entry = extract_str(&raw).map_err(|err| GenerateError::load(path, err))?;

    debug!(
        path = %path.display(),
        command = %entry.name,
        arguments = entry.arguments.len(),
        "Extracted command"
    );

    Ok(entry)
}
