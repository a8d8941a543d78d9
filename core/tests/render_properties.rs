//! Property-based tests for rendering and natural ordering.

use std::cmp::Ordering;

use command_syntax_core::{
    ArgumentKind, ArgumentNode, CommandDocument, ELLIPSIS, natural_cmp, render,
};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn label() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9-]{0,11}"
}

fn token() -> impl Strategy<Value = String> {
    "[A-Z][A-Z0-9]{0,7}"
}

fn maybe(strategy: impl Strategy<Value = String>) -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), strategy]
}

fn leaf() -> impl Strategy<Value = ArgumentNode> {
    (
        maybe(label()),
        maybe(token()),
        maybe(label()),
        any::<bool>(),
        any::<bool>(),
        prop_oneof![
            Just(ArgumentKind::PureToken),
            Just(ArgumentKind::Value("key".to_string())),
            Just(ArgumentKind::Value(String::new())),
            Just(ArgumentKind::Block(Vec::new())),
        ],
    )
        .prop_map(|(name, token, display, optional, multiple, kind)| ArgumentNode {
            name,
            token,
            display,
            optional,
            multiple,
            kind,
        })
}

fn tree() -> impl Strategy<Value = ArgumentNode> {
    leaf().prop_recursive(3, 24, 4, |inner| {
        (
            label(),
            maybe(token()),
            any::<bool>(),
            any::<bool>(),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(name, token, optional, multiple, children)| ArgumentNode {
                name,
                token,
                display: String::new(),
                optional,
                multiple,
                kind: ArgumentKind::OneOf(children),
            })
    })
}

fn command_name() -> impl Strategy<Value = String> {
    "[A-Z]{1,4}[0-9]{0,3}[A-Z]{0,2}[0-9]{0,2}"
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn pure_token_renders_as_token(tok in token()) {
        let node = ArgumentNode {
            token: tok.clone(),
            kind: ArgumentKind::PureToken,
            ..ArgumentNode::default()
        };
        prop_assert_eq!(render(&node), tok);
    }

    #[test]
    fn tokenless_value_renders_as_label(name in label(), display in maybe(label())) {
        let node = ArgumentNode::value(&name).with_display(&display);
        let expected = if display.is_empty() { name } else { display };
        prop_assert_eq!(render(&node), expected);
    }

    #[test]
    fn optional_and_multiple_wrap_base_rendering(node in tree()) {
        let base = ArgumentNode { optional: false, multiple: false, ..node.clone() };
        let both = ArgumentNode { optional: true, multiple: true, ..node };
        prop_assert_eq!(render(&both), format!("[{}]{}", render(&base), ELLIPSIS));
    }

    #[test]
    fn oneof_preserves_child_order(children in prop::collection::vec(leaf(), 1..6)) {
        let expected = format!(
            "{{{}}}",
            children.iter().map(render).collect::<Vec<_>>().join("|")
        );
        let node = ArgumentNode::one_of("choice", children);
        prop_assert_eq!(render(&node), expected);
    }

    #[test]
    fn rendering_is_deterministic(node in tree()) {
        prop_assert_eq!(render(&node), render(&node.clone()));
    }

    #[test]
    fn flatten_renders_one_string_per_argument(args in prop::collection::vec(tree(), 0..6)) {
        let doc = CommandDocument::new(
            "CMD",
            command_syntax_core::CommandDescriptor::with_arguments(args.clone()),
        );
        let flat = doc.flatten();
        prop_assert_eq!(flat.len(), args.len());
        for (rendered, node) in flat.iter().zip(&args) {
            prop_assert_eq!(rendered, &render(node));
        }
    }
}

// ---------------------------------------------------------------------------
// Natural ordering
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn natural_cmp_is_reflexive(s in command_name()) {
        prop_assert_eq!(natural_cmp(&s, &s), Ordering::Equal);
    }

    #[test]
    fn natural_cmp_is_antisymmetric(a in command_name(), b in command_name()) {
        prop_assert_eq!(natural_cmp(&a, &b), natural_cmp(&b, &a).reverse());
    }

    #[test]
    fn natural_cmp_orders_numeric_suffix_by_value(prefix in "[A-Z]{1,6}", x in 0u32..100_000, y in 0u32..100_000) {
        let left = format!("{prefix}{x}");
        let right = format!("{prefix}{y}");
        prop_assert_eq!(natural_cmp(&left, &right), x.cmp(&y));
    }

    #[test]
    fn natural_sort_is_total(mut names in prop::collection::vec(command_name(), 0..20)) {
        names.sort_by(|a, b| natural_cmp(a, b));
        for pair in names.windows(2) {
            prop_assert_ne!(natural_cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
    }
}

#[test]
fn descending_natural_order_example() {
    let mut names = vec!["SET10", "SET2", "SET1"];
    names.sort_by(|a, b| natural_cmp(b, a));
    assert_eq!(names, vec!["SET10", "SET2", "SET1"]);
}
