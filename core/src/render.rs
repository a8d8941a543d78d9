//! Usage-syntax rendering for argument trees.
//!
//! [`render`] turns one [`ArgumentNode`] into a single display string:
//!
//! | Node | Rendering |
//! |------|-----------|
//! | plain value `key` | `key` |
//! | token `EX` + name `seconds` | `EX seconds` |
//! | pure token `NX` | `NX` |
//! | oneof of `NX`, `XX` | `{NX\|XX}` |
//! | optional | `[...]` |
//! | multiple | `...…` |
//!
//! # Examples
//!
//! ```
//! use command_syntax_core::{ArgumentNode, render};
//!
//! let expiration = ArgumentNode::typed("seconds", "integer").with_token("EX").optional();
//! assert_eq!(render(&expiration), "[EX seconds]");
//!
//! let keys = ArgumentNode::typed("key", "key").multiple();
//! assert_eq!(render(&keys), "key…");
//! ```

use std::fmt;

use crate::{ArgumentKind, ArgumentNode};

/// Marker appended to repeatable arguments (U+2026 HORIZONTAL ELLIPSIS).
pub const ELLIPSIS: char = '\u{2026}';

/// Separator between `oneof` alternatives.
pub const ALTERNATIVE_SEPARATOR: &str = "|";

/// Renders a node and its alternatives into usage syntax.
///
/// Never fails: a node without any label renders as an empty string (still
/// wrapped or suffixed when `optional`/`multiple` are set).
pub fn render(node: &ArgumentNode) -> String {
    let mut rendered = match &node.kind {
        ArgumentKind::OneOf(alternatives) => {
            let joined = alternatives
                .iter()
                .map(render)
                .collect::<Vec<_>>()
                .join(ALTERNATIVE_SEPARATOR);

            if node.token.is_empty() {
                format!("{{{joined}}}")
            } else {
                format!("{} {{{joined}}}", node.token)
            }
        }
        ArgumentKind::PureToken => preferred_label(node).to_string(),
        ArgumentKind::Block(_) | ArgumentKind::Value(_) => {
            if node.token.is_empty() {
                preferred_label(node).to_string()
            } else {
                format!(
                    "{} {}",
                    node.token,
                    first_non_empty(&[node.display.as_str(), node.name.as_str()])
                )
            }
        }
    };

    if node.optional {
        rendered = format!("[{rendered}]");
    }

    if node.multiple {
        rendered.push(ELLIPSIS);
    }

    rendered
}

/// Renders each top-level argument in order.
///
/// # Examples
///
/// ```
/// use command_syntax_core::{ArgumentNode, flatten};
///
/// let args = vec![
///     ArgumentNode::typed("key", "key"),
///     ArgumentNode::pure_token("NX").optional(),
/// ];
/// assert_eq!(flatten(&args), vec!["key", "[NX]"]);
/// ```
pub fn flatten(arguments: &[ArgumentNode]) -> Vec<String> {
    arguments.iter().map(render).collect()
}

/// First non-empty of display, token and name.
fn preferred_label(node: &ArgumentNode) -> &str {
    first_non_empty(&[
        node.display.as_str(),
        node.token.as_str(),
        node.name.as_str(),
    ])
}

fn first_non_empty<'a>(candidates: &[&'a str]) -> &'a str {
    candidates
        .iter()
        .copied()
        .find(|candidate| !candidate.is_empty())
        .unwrap_or("")
}

impl fmt::Display for ArgumentNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain_value_uses_name() {
        assert_eq!(render(&ArgumentNode::typed("key", "key")), "key");
    }

    #[test]
    fn test_render_display_overrides_name() {
        let node = ArgumentNode::typed("unix-time-seconds", "unix-time").with_display("timestamp");
        assert_eq!(render(&node), "timestamp");
    }

    #[test]
    fn test_render_token_prefixes_label() {
        let node = ArgumentNode::typed("milliseconds", "integer").with_token("PX");
        assert_eq!(render(&node), "PX milliseconds");
    }

    #[test]
    fn test_render_token_prefixes_display_over_name() {
        let node = ArgumentNode::typed("count", "integer")
            .with_token("COUNT")
            .with_display("n");
        assert_eq!(render(&node), "COUNT n");
    }

    #[test]
    fn test_render_token_without_name_leaves_trailing_space() {
        let node = ArgumentNode::default().with_token("WITHSCORES");
        assert_eq!(render(&node), "WITHSCORES ");
    }

    #[test]
    fn test_render_pure_token_is_token_only() {
        assert_eq!(render(&ArgumentNode::pure_token("NX")), "NX");
    }

    #[test]
    fn test_render_pure_token_prefers_display() {
        let node = ArgumentNode::pure_token("NX").with_display("nx-flag");
        assert_eq!(render(&node), "nx-flag");
    }

    #[test]
    fn test_render_oneof_without_token() {
        let node = ArgumentNode::one_of(
            "condition",
            vec![
                ArgumentNode::pure_token("NX"),
                ArgumentNode::pure_token("XX"),
                ArgumentNode::pure_token("GT"),
                ArgumentNode::pure_token("LT"),
            ],
        );
        assert_eq!(render(&node), "{NX|XX|GT|LT}");
    }

    #[test]
    fn test_render_oneof_with_token() {
        let node = ArgumentNode::one_of(
            "order",
            vec![ArgumentNode::pure_token("ASC"), ArgumentNode::pure_token("DESC")],
        )
        .with_token("ORDER");
        assert_eq!(render(&node), "ORDER {ASC|DESC}");
    }

    #[test]
    fn test_render_nested_oneof() {
        let expiration = ArgumentNode::one_of(
            "expiration",
            vec![
                ArgumentNode::typed("seconds", "integer").with_token("EX"),
                ArgumentNode::typed("milliseconds", "integer").with_token("PX"),
                ArgumentNode::pure_token("KEEPTTL"),
            ],
        )
        .optional();
        assert_eq!(render(&expiration), "[{EX seconds|PX milliseconds|KEEPTTL}]");
    }

    #[test]
    fn test_render_empty_oneof() {
        assert_eq!(render(&ArgumentNode::one_of("nothing", Vec::new())), "{}");
    }

    #[test]
    fn test_render_block_ignores_children() {
        let node = ArgumentNode::block(
            "limit",
            vec![
                ArgumentNode::typed("offset", "integer"),
                ArgumentNode::typed("count", "integer"),
            ],
        )
        .with_token("LIMIT")
        .optional();
        assert_eq!(render(&node), "[LIMIT limit]");
    }

    #[test]
    fn test_render_optional_and_multiple_compose() {
        let node = ArgumentNode::typed("field", "string").optional().multiple();
        assert_eq!(render(&node), "[field]\u{2026}");
    }

    #[test]
    fn test_render_multiple_oneof_children() {
        let node = ArgumentNode::one_of(
            "data",
            vec![
                ArgumentNode::typed("field", "string").multiple(),
                ArgumentNode::pure_token("ALL"),
            ],
        );
        assert_eq!(render(&node), "{field…|ALL}");
    }

    #[test]
    fn test_render_without_labels_is_empty() {
        assert_eq!(render(&ArgumentNode::default()), "");
        assert_eq!(render(&ArgumentNode::default().optional()), "[]");
    }

    #[test]
    fn test_render_unknown_type_uses_default_path() {
        let node = ArgumentNode::typed("thing", "no-such-type").with_token("T");
        assert_eq!(render(&node), "T thing");
    }

    #[test]
    fn test_display_matches_render() {
        let node = ArgumentNode::pure_token("NX").optional();
        assert_eq!(node.to_string(), render(&node));
    }
}
