//! Predicates that recognize tagged placeholder nodes.
//!
//! The builders return plain closures, so a predicate can be stored and
//! reused across any number of traversals. Node kinds other than structured
//! tags are rejected by the match arms, never by a failed downcast.

use docstamp_tree::{DocNode, NodeKind};

/// Matches structured-tag nodes carrying any tag marker.
///
/// Untagged structured tags and every other node kind are non-matches.
pub fn with_any_tag() -> impl Fn(&DocNode) -> bool {
    |node| matches!(&node.kind, NodeKind::StructuredTag { tag: Some(_) })
}

/// Matches structured-tag nodes whose tag marker exactly equals `value`.
///
/// Equality is byte-for-byte; there is no normalization or case folding. A
/// node with no tag never matches.
pub fn with_tag_value(value: impl Into<String>) -> impl Fn(&DocNode) -> bool {
    let value = value.into();
    move |node| match &node.kind {
        NodeKind::StructuredTag { tag: Some(tag) } => *tag == value,
        _ => false,
    }
}

/// Projects a matched structured-tag node to its tag marker.
pub fn tag_value_of(node: &DocNode) -> Option<&str> {
    node.tag()
}
