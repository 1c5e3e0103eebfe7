//! # docstamp_tree
//!
//! Document tree and traversal engine for docstamp.
//!
//! This crate provides the node abstraction and the generic tree search used
//! to locate placeholder nodes inside a template document:
//!
//! - [`DocTree`] owns every node of one document and hands out opaque
//!   [`NodeId`] handles
//! - [`NodeKind`] is the closed set of node kinds the merge core interprets
//! - [`visitor`] contains the depth-first walk, the pruning hook, and the two
//!   search modes ([`collect_all`] and [`find_first`])
//!
//! ## Example
//!
//! ```rust
//! use docstamp_tree::{DocTree, NodeKind, collect_all};
//!
//! let mut tree = DocTree::new();
//! let greeting = tree.push_node(NodeKind::Text {
//!     value: "hello".to_string(),
//! });
//! let body = tree.push_with_children(NodeKind::Body, &[greeting]);
//!
//! let texts = collect_all(&tree, body, |node| node.text().is_some());
//! assert_eq!(texts, vec![greeting]);
//! ```

mod node;
mod tree;
pub mod visitor;

pub use node::{DocNode, NodeKind};
pub use tree::{DocTree, NodeId};

// Re-export commonly used visitor items for convenience
pub use visitor::{TreeVisitor, VisitResult, collect_all, find_first};
