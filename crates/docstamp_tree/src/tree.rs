//! Id-indexed document tree.
//!
//! All nodes of one document live in a single [`DocTree`] and are referenced
//! through [`NodeId`] handles. Keeping ownership in one place lets searches
//! return plain ids while the text accessor mutates matched nodes in place,
//! and the whole tree is freed at once when the merge is done.

use serde::{Deserialize, Serialize};

use crate::node::{DocNode, NodeKind};

/// Opaque handle to a node in a [`DocTree`].
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    const fn new(index: usize) -> Self {
        debug_assert!(index <= u32::MAX as usize);
        Self(index as u32)
    }

    #[inline]
    const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A document tree holding every node of one template.
///
/// Trees are built bottom-up: allocate children first, then parents with
/// [`DocTree::push_with_children`], or top-down with
/// [`DocTree::append_child`].
///
/// # Example
///
/// ```rust
/// use docstamp_tree::{DocTree, NodeKind};
///
/// let mut tree = DocTree::new();
/// let run = tree.run_with_text("template default");
/// let sdt = tree.push_with_children(
///     NodeKind::StructuredTag {
///         tag: Some("orderDate".to_string()),
///     },
///     &[run],
/// );
/// let body = tree.push_with_children(NodeKind::Body, &[sdt]);
///
/// assert_eq!(tree.children(body), &[sdt]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocTree {
    nodes: Vec<DocNode>,
}

impl DocTree {
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty tree with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Allocates a childless node and returns its handle.
    pub fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.nodes.push(DocNode::new(kind));
        id
    }

    /// Allocates a node with the given children, in document order.
    pub fn push_with_children(&mut self, kind: NodeKind, children: &[NodeId]) -> NodeId {
        let id = self.push_node(kind);
        self.nodes[id.index()].children.extend_from_slice(children);
        id
    }

    /// Appends `child` as the last child of `parent`.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.index()].children.push(child);
    }

    /// Allocates a text node wrapped in a transport wrapper, returning the
    /// wrapper's handle.
    pub fn wrapped_text(&mut self, value: impl Into<String>) -> NodeId {
        let payload = self.push_node(NodeKind::Text {
            value: value.into(),
        });
        self.push_node(NodeKind::Wrapper {
            payload: Some(payload),
        })
    }

    /// Allocates a run whose content is a single wrapped text node.
    ///
    /// This is the leaf shape the text accessor expects.
    pub fn run_with_text(&mut self, value: impl Into<String>) -> NodeId {
        let wrapper = self.wrapped_text(value);
        self.push_with_children(NodeKind::Run, &[wrapper])
    }

    /// Borrows the node behind a handle.
    #[inline]
    pub fn node(&self, id: NodeId) -> &DocNode {
        &self.nodes[id.index()]
    }

    /// Mutably borrows the node behind a handle.
    #[inline]
    pub fn node_mut(&mut self, id: NodeId) -> &mut DocNode {
        &mut self.nodes[id.index()]
    }

    /// Child handles of a node, in document order.
    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Unwraps a transport wrapper to its concrete payload.
    ///
    /// This is the only operation that looks inside a wrapper. A direct node
    /// unwraps to itself; a wrapper unwraps to its payload, or to `None` when
    /// the wrapper is malformed.
    #[inline]
    pub fn unwrap_payload(&self, id: NodeId) -> Option<NodeId> {
        match self.node(id).kind {
            NodeKind::Wrapper { payload } => payload,
            _ => Some(id),
        }
    }

    /// Number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
