//! Generator configuration.
//!
//! Every field has a default, so an empty YAML file is a valid
//! configuration.
//!
//! # Example YAML
//!
//! ```yaml
//! source_dir: redis/src/commands
//! extension: json
//! recursive: false
//! include_hidden: false
//! jobs: 4
//! indent: "  "
//! ```

use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Directory searched when no source is configured.
pub const DEFAULT_SOURCE_DIR: &str = "redis/src/commands";

/// Extension of specification documents.
pub const DEFAULT_EXTENSION: &str = "json";

/// Indentation before each emitted entry.
pub const DEFAULT_INDENT: &str = "  ";

/// Settings for one generation run.
///
/// # Examples
///
/// ```
/// use command_syntax_codegen::GeneratorConfig;
///
/// let config: GeneratorConfig = serde_yaml::from_str("recursive: true").unwrap();
/// assert!(config.recursive);
/// assert_eq!(config.extension, "json");
/// assert_eq!(config.source_dir.to_str(), Some("redis/src/commands"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the specification documents.
    pub source_dir: PathBuf,
    /// Document extension, without the leading dot.
    pub extension: String,
    /// Descend into subdirectories.
    pub recursive: bool,
    /// Include files and directories whose name starts with `.`.
    pub include_hidden: bool,
    /// Parallel extraction jobs (`None` = adaptive default).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<usize>,
    /// Indentation before each emitted entry.
    pub indent: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            recursive: false,
            include_hidden: false,
            jobs: None,
            indent: DEFAULT_INDENT.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a default configuration reading from `source_dir`.
    pub fn with_source_dir(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            ..Self::default()
        }
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if parsing fails.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = std::fs::File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }

    /// Saves the configuration as YAML.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let file = std::fs::File::create(path)?;
        let writer = BufWriter::new(file);
        serde_yaml::to_writer(writer, self)?;
        Ok(())
    }

    /// Returns `true` if `path` has the configured document extension.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.extension.trim_start_matches('.'))
    }
}
