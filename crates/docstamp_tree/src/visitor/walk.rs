//! Walk functions for tree traversal.
//!
//! The walk is depth-first and pre-order. Each visited node is first
//! unwrapped, so visitors always see the concrete payload, and descent is
//! gated by the visitor's pruning hook.

use std::ops::ControlFlow;

use crate::{DocTree, NodeId};

/// Result type for visitor methods to control traversal.
///
/// - `ControlFlow::Continue(())` - keep walking
/// - `ControlFlow::Break(())` - stop traversal early
pub type VisitResult = ControlFlow<()>;

/// Traversal callback with a pruning hook.
///
/// [`TreeVisitor::visit`] receives the *unwrapped* node: for a transport
/// wrapper that is the payload, for anything else the node itself. A wrapper
/// that unwraps to nothing is skipped (not a match) but its subtree is still
/// walked.
///
/// [`TreeVisitor::should_descend`] is consulted before descending into a
/// node's children. It is evaluated locally at each node rather than acting
/// as a global abort, which keeps the walk referentially transparent; a
/// visitor that wants to stop the whole traversal returns
/// `ControlFlow::Break` from `visit`.
pub trait TreeVisitor: Sized {
    /// Called once per visited node with the unwrapped target.
    fn visit(&mut self, tree: &DocTree, unwrapped: NodeId) -> VisitResult;

    /// Pruning hook: whether to descend into the children of `id`.
    #[inline]
    fn should_descend(&self, _tree: &DocTree, _id: NodeId) -> bool {
        true
    }
}

/// Walks a node and its subtree in depth-first pre-order.
///
/// The node is unwrapped and handed to the visitor, then - if the pruning
/// hook agrees - its children are walked in document order. Descent follows
/// the unwrapped payload's children when a payload exists, and falls back to
/// the wrapper's own children otherwise, so wrapping never blocks structural
/// descent.
pub fn walk_node<V>(visitor: &mut V, tree: &DocTree, id: NodeId) -> VisitResult
where
    V: TreeVisitor,
{
    let unwrapped = tree.unwrap_payload(id);
    if let Some(target) = unwrapped {
        visitor.visit(tree, target)?;
    }

    if !visitor.should_descend(tree, id) {
        return ControlFlow::Continue(());
    }

    walk_children(visitor, tree, unwrapped.unwrap_or(id))
}

/// Walks all children of a node.
///
/// Supports early termination via `ControlFlow::Break`.
#[inline]
pub fn walk_children<V>(visitor: &mut V, tree: &DocTree, id: NodeId) -> VisitResult
where
    V: TreeVisitor,
{
    for &child in tree.children(id) {
        walk_node(visitor, tree, child)?;
    }
    ControlFlow::Continue(())
}
