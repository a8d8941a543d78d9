//! Structural validation of specification documents.
//!
//! A document must be a JSON object with exactly one entry whose key is the
//! command's base name. Anything else is rejected before the descriptor is
//! deserialized.
//!
//! # Examples
//!
//! ```
//! use command_syntax_core::{ValidationError, validate_document};
//! use serde_json::json;
//!
//! let doc = json!({"GET": {"arguments": []}});
//! let (name, _) = validate_document(&doc).unwrap();
//! assert_eq!(name, "GET");
//!
//! let doc = json!({"GET": {}, "SET": {}});
//! assert!(matches!(
//!     validate_document(&doc),
//!     Err(ValidationError::MultipleCommands(_))
//! ));
//! ```

use serde_json::Value;
use thiserror::Error;

/// Document validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Top level is not a JSON object.
    #[error("document must be a JSON object keyed by command name")]
    NotAnObject,
    /// Object has no entries.
    #[error("document does not define a command")]
    MissingCommand,
    /// Object has more than one entry.
    #[error("document defines more than one command: {}", .0.join(", "))]
    MultipleCommands(Vec<String>),
    /// The single key is empty or whitespace-only.
    #[error("command name cannot be empty")]
    EmptyCommandName,
}

/// Checks the single-command rule and returns the command name together with
/// its (not yet deserialized) descriptor.
pub fn validate_document(document: &Value) -> Result<(&str, &Value), ValidationError> {
    let Value::Object(entries) = document else {
        return Err(ValidationError::NotAnObject);
    };

    let mut iter = entries.iter();
    let Some((name, descriptor)) = iter.next() else {
        return Err(ValidationError::MissingCommand);
    };

    if iter.next().is_some() {
        return Err(ValidationError::MultipleCommands(
            entries.keys().cloned().collect(),
        ));
    }

    if name.trim().is_empty() {
        return Err(ValidationError::EmptyCommandName);
    }

    Ok((name.as_str(), descriptor))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_validate_document_accepts_single_command() {
        let doc = json!({"EXPIRE": {"arguments": [{"name": "key"}]}});
        let (name, descriptor) = validate_document(&doc).unwrap();
        assert_eq!(name, "EXPIRE");
        assert!(descriptor["arguments"].is_array());
    }

    #[test]
    fn test_validate_document_rejects_empty_object() {
        assert_eq!(
            validate_document(&json!({})),
            Err(ValidationError::MissingCommand)
        );
    }

    #[test]
    fn test_validate_document_rejects_multiple_commands() {
        let doc = json!({"SET": {}, "GET": {}});
        let errors = validate_document(&doc);
        assert_eq!(
            errors,
            Err(ValidationError::MultipleCommands(vec![
                "GET".to_string(),
                "SET".to_string()
            ]))
        );
    }

    #[test]
    fn test_validate_document_rejects_non_object() {
        assert_eq!(
            validate_document(&json!(["GET"])),
            Err(ValidationError::NotAnObject)
        );
    }

    #[test]
    fn test_validate_document_rejects_blank_name() {
        assert_eq!(
            validate_document(&json!({"  ": {}})),
            Err(ValidationError::EmptyCommandName)
        );
    }
}
