//! Argument tree type definitions.
//!
//! This module defines the data model for one command specification
//! document: a [`CommandDescriptor`] holding an ordered list of
//! [`ArgumentNode`]s, each of which may nest further nodes. The types
//! deserialize directly from the JSON documents with [`serde`]; every field
//! is optional in the source and unknown fields are ignored.

use serde::{Deserialize, Serialize};

/// `type` value for a node whose children are mutually exclusive alternatives.
pub const TYPE_ONEOF: &str = "oneof";

/// `type` value for a literal grouping of child arguments.
pub const TYPE_BLOCK: &str = "block";

/// `type` value for a node whose token is its whole rendered value.
pub const TYPE_PURE_TOKEN: &str = "pure-token";

/// Structural kind of an argument node.
///
/// Only [`OneOf`](ArgumentKind::OneOf) influences how children are rendered.
/// [`Block`](ArgumentKind::Block) keeps its children for completeness but
/// renders from its own fields, like every other kind.
///
/// # Examples
///
/// ```
/// use command_syntax_core::ArgumentKind;
///
/// let kind = ArgumentKind::from_type_name("pure-token", Vec::new());
/// assert_eq!(kind, ArgumentKind::PureToken);
///
/// let kind = ArgumentKind::from_type_name("integer", Vec::new());
/// assert_eq!(kind.type_name(), "integer");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgumentKind {
    /// Mutually exclusive alternatives, one per child.
    OneOf(Vec<ArgumentNode>),
    /// Literal grouping of child arguments.
    Block(Vec<ArgumentNode>),
    /// The token is the entire value.
    PureToken,
    /// Any other value type (`key`, `string`, `integer`, ...), including an
    /// empty or unrecognized type string.
    Value(String),
}

impl ArgumentKind {
    /// Maps a raw `type` string and its children to a kind.
    ///
    /// Children are dropped for kinds that cannot carry them.
    pub fn from_type_name(type_name: &str, children: Vec<ArgumentNode>) -> Self {
        match type_name {
            TYPE_ONEOF => Self::OneOf(children),
            TYPE_BLOCK => Self::Block(children),
            TYPE_PURE_TOKEN => Self::PureToken,
            other => Self::Value(other.to_string()),
        }
    }

    /// Returns the `type` string this kind was read from.
    pub fn type_name(&self) -> &str {
        match self {
            Self::OneOf(_) => TYPE_ONEOF,
            Self::Block(_) => TYPE_BLOCK,
            Self::PureToken => TYPE_PURE_TOKEN,
            Self::Value(name) => name,
        }
    }

    /// Returns nested arguments, empty for leaf kinds.
    pub fn children(&self) -> &[ArgumentNode] {
        match self {
            Self::OneOf(children) | Self::Block(children) => children,
            Self::PureToken | Self::Value(_) => &[],
        }
    }
}

impl Default for ArgumentKind {
    fn default() -> Self {
        Self::Value(String::new())
    }
}

/// One node of a command's argument grammar.
///
/// Nodes are normally deserialized from a specification document, but can
/// also be assembled with the constructor and builder methods.
///
/// # Examples
///
/// ```
/// use command_syntax_core::ArgumentNode;
///
/// let condition = ArgumentNode::one_of(
///     "condition",
///     vec![ArgumentNode::pure_token("NX"), ArgumentNode::pure_token("XX")],
/// )
/// .optional();
///
/// assert_eq!(condition.kind.children().len(), 2);
/// assert_eq!(condition.to_string(), "[{NX|XX}]");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawArgument")]
pub struct ArgumentNode {
    /// Fallback identifier used when no display label is set.
    pub name: String,
    /// Introducing keyword rendered before the value (may be empty).
    pub token: String,
    /// Human-facing label overriding `name`.
    pub display: String,
    /// The argument may be omitted.
    pub optional: bool,
    /// The argument may repeat.
    pub multiple: bool,
    /// Structural kind, carrying children where applicable.
    pub kind: ArgumentKind,
}

impl ArgumentNode {
    /// Creates a plain value argument with no type information.
    pub fn value(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// Creates a value argument with an explicit value type (e.g. `"key"`).
    pub fn typed(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: ArgumentKind::from_type_name(type_name, Vec::new()),
            ..Self::default()
        }
    }

    /// Creates a pure-token argument; the token doubles as its name.
    pub fn pure_token(token: &str) -> Self {
        Self {
            name: token.to_ascii_lowercase(),
            token: token.to_string(),
            kind: ArgumentKind::PureToken,
            ..Self::default()
        }
    }

    /// Creates a set of mutually exclusive alternatives.
    pub fn one_of(name: &str, alternatives: Vec<ArgumentNode>) -> Self {
        Self {
            name: name.to_string(),
            kind: ArgumentKind::OneOf(alternatives),
            ..Self::default()
        }
    }

    /// Creates a literal grouping of arguments.
    pub fn block(name: &str, arguments: Vec<ArgumentNode>) -> Self {
        Self {
            name: name.to_string(),
            kind: ArgumentKind::Block(arguments),
            ..Self::default()
        }
    }

    /// Sets the introducing token.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = token.to_string();
        self
    }

    /// Sets the display label.
    pub fn with_display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    /// Marks as omittable.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Marks as repeatable.
    pub fn multiple(mut self) -> Self {
        self.multiple = true;
        self
    }
}

/// Wire shape of an argument node. Absent and `null` fields both read as
/// their empty value.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawArgument {
    name: Option<String>,
    token: Option<String>,
    #[serde(rename = "type")]
    type_name: Option<String>,
    display: Option<String>,
    multiple: Option<bool>,
    optional: Option<bool>,
    arguments: Option<Vec<RawArgument>>,
}

impl From<RawArgument> for ArgumentNode {
    fn from(raw: RawArgument) -> Self {
        let children = raw
            .arguments
            .unwrap_or_default()
            .into_iter()
            .map(ArgumentNode::from)
            .collect();
        let type_name = raw.type_name.unwrap_or_default();

        Self {
            name: raw.name.unwrap_or_default(),
            token: raw.token.unwrap_or_default(),
            display: raw.display.unwrap_or_default(),
            optional: raw.optional.unwrap_or(false),
            multiple: raw.multiple.unwrap_or(false),
            kind: ArgumentKind::from_type_name(&type_name, children),
        }
    }
}

/// Per-command record stored under the command's name in a document.
///
/// Only `container` and `arguments` affect rendering; `summary`, `since` and
/// `group` are carried through as metadata; a non-string metadata value is
/// dropped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDescriptor")]
pub struct CommandDescriptor {
    /// Parent command for subcommands (e.g. `"CONFIG"` for `CONFIG GET`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container: Option<String>,
    /// One-line description of the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Version that introduced the command.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    /// Command group (e.g. `"string"`, `"generic"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Top-level arguments in declaration order.
    #[serde(skip_serializing)]
    pub arguments: Vec<ArgumentNode>,
}

/// Wire shape of a descriptor. `null` arguments read as an empty list.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDescriptor {
    container: Option<String>,
    summary: Option<serde_json::Value>,
    since: Option<serde_json::Value>,
    group: Option<serde_json::Value>,
    arguments: Option<Vec<ArgumentNode>>,
}

impl From<RawDescriptor> for CommandDescriptor {
    fn from(raw: RawDescriptor) -> Self {
        Self {
            container: raw.container,
            summary: metadata_string(raw.summary),
            since: metadata_string(raw.since),
            group: metadata_string(raw.group),
            arguments: raw.arguments.unwrap_or_default(),
        }
    }
}

fn metadata_string(value: Option<serde_json::Value>) -> Option<String> {
    match value {
        Some(serde_json::Value::String(text)) => Some(text),
        _ => None,
    }
}

impl CommandDescriptor {
    /// Creates a descriptor with the given top-level arguments.
    pub fn with_arguments(arguments: Vec<ArgumentNode>) -> Self {
        Self {
            arguments,
            ..Self::default()
        }
    }

    /// Sets the container command.
    pub fn in_container(mut self, container: &str) -> Self {
        self.container = Some(container.to_string());
        self
    }
}
