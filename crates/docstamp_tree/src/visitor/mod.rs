//! Depth-first traversal over document trees.
//!
//! This module provides the walk functions and the two search modes used to
//! locate placeholder nodes.
//!
//! # Overview
//!
//! - [`TreeVisitor`] - traversal callback with a pruning hook
//! - [`walk_node`] - depth-first pre-order walk with wrapper unwrapping
//! - [`collect_all`] - every matching node, in document order
//! - [`find_first`] - the first matching node, with early termination
//!
//! # Examples
//!
//! ## Collecting matches
//!
//! ```rust
//! use docstamp_tree::{DocTree, NodeKind, collect_all};
//!
//! let mut tree = DocTree::new();
//! let first = tree.push_node(NodeKind::StructuredTag {
//!     tag: Some("A".to_string()),
//! });
//! let second = tree.push_node(NodeKind::StructuredTag {
//!     tag: Some("B".to_string()),
//! });
//! let body = tree.push_with_children(NodeKind::Body, &[first, second]);
//!
//! let tagged = collect_all(&tree, body, |node| node.tag().is_some());
//! assert_eq!(tagged, vec![first, second]);
//! ```
//!
//! ## Early termination
//!
//! ```rust
//! use docstamp_tree::{DocTree, NodeKind, find_first};
//!
//! let mut tree = DocTree::new();
//! let first = tree.push_node(NodeKind::StructuredTag {
//!     tag: Some("A".to_string()),
//! });
//! let second = tree.push_node(NodeKind::StructuredTag {
//!     tag: Some("A".to_string()),
//! });
//! let body = tree.push_with_children(NodeKind::Body, &[first, second]);
//!
//! // Only the first "A" is returned; nothing after it is visited.
//! assert_eq!(find_first(&tree, body, |node| node.tag() == Some("A")), Some(first));
//! ```

mod search;
mod walk;

pub use search::{AllMatches, FirstMatch, collect_all, find_first};
pub use walk::{TreeVisitor, VisitResult, walk_children, walk_node};
