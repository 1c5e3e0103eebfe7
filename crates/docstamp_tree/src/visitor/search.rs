//! The two search modes: collect-all and find-first.
//!
//! Both run the same depth-first walk and test a caller-supplied predicate
//! against each unwrapped node. [`collect_all`] walks the whole tree;
//! [`find_first`] records the first match and prunes everything after it.
//! Predicates are plain `Fn(&DocNode) -> bool` closures, pure and reusable
//! across traversals.

use std::ops::ControlFlow;

use crate::{DocNode, DocTree, NodeId};

use super::walk::{TreeVisitor, VisitResult, walk_node};

/// Collects every node satisfying a predicate, in document order.
pub struct AllMatches<P> {
    predicate: P,
    matches: Vec<NodeId>,
}

impl<P> AllMatches<P>
where
    P: Fn(&DocNode) -> bool,
{
    /// Creates a collector for the given predicate.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            matches: Vec::new(),
        }
    }

    /// Consumes the collector, returning the matches in visitation order.
    pub fn into_matches(self) -> Vec<NodeId> {
        self.matches
    }
}

impl<P> TreeVisitor for AllMatches<P>
where
    P: Fn(&DocNode) -> bool,
{
    fn visit(&mut self, tree: &DocTree, unwrapped: NodeId) -> VisitResult {
        if (self.predicate)(tree.node(unwrapped)) {
            self.matches.push(unwrapped);
        }
        ControlFlow::Continue(())
    }
}

/// Records the first node satisfying a predicate, then stops.
///
/// Once a result exists the pruning hook refuses descent and the walk breaks,
/// so no node after the first match in document order is visited.
pub struct FirstMatch<P> {
    predicate: P,
    result: Option<NodeId>,
}

impl<P> FirstMatch<P>
where
    P: Fn(&DocNode) -> bool,
{
    /// Creates a finder for the given predicate.
    pub fn new(predicate: P) -> Self {
        Self {
            predicate,
            result: None,
        }
    }

    /// Consumes the finder, returning the match if one was recorded.
    pub fn into_result(self) -> Option<NodeId> {
        self.result
    }
}

impl<P> TreeVisitor for FirstMatch<P>
where
    P: Fn(&DocNode) -> bool,
{
    fn visit(&mut self, tree: &DocTree, unwrapped: NodeId) -> VisitResult {
        if self.result.is_none() && (self.predicate)(tree.node(unwrapped)) {
            self.result = Some(unwrapped);
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    }

    fn should_descend(&self, _tree: &DocTree, _id: NodeId) -> bool {
        self.result.is_none()
    }
}

/// Returns every node under `root` (after unwrapping) satisfying the
/// predicate, in document (pre-order) order.
///
/// A tree with no matches yields an empty vec, never an error.
pub fn collect_all<P>(tree: &DocTree, root: NodeId, predicate: P) -> Vec<NodeId>
where
    P: Fn(&DocNode) -> bool,
{
    let mut search = AllMatches::new(predicate);
    let _ = walk_node(&mut search, tree, root);
    search.into_matches()
}

/// Returns the first node under `root` (after unwrapping) satisfying the
/// predicate, or `None` when nothing matches.
pub fn find_first<P>(tree: &DocTree, root: NodeId, predicate: P) -> Option<NodeId>
where
    P: Fn(&DocNode) -> bool,
{
    let mut search = FirstMatch::new(predicate);
    let _ = walk_node(&mut search, tree, root);
    search.into_result()
}
