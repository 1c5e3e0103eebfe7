//! Text accessor for run-like leaf nodes.
//!
//! Both operations defensively check the node's shape before touching it. A
//! slot that does not look exactly as expected is skipped, not failed, so a
//! batch population loop can keep going past malformed slots.

use docstamp_tree::{DocTree, NodeId, NodeKind};

/// Replaces the text payload of a run.
///
/// Succeeds (returns true) only when the run's content starts with a
/// transport wrapper whose payload is a plain text node - the shape the
/// document library produces for a filled placeholder. Any deviation (empty
/// content, wrong wrapper kind, wrong payload kind) leaves the tree untouched
/// and returns false.
pub fn set_text(tree: &mut DocTree, run: NodeId, value: &str) -> bool {
    let Some(&first) = tree.children(run).first() else {
        return false;
    };
    let payload = match &tree.node(first).kind {
        NodeKind::Wrapper {
            payload: Some(payload),
        } => *payload,
        _ => return false,
    };
    match &mut tree.node_mut(payload).kind {
        NodeKind::Text { value: text } => {
            *text = value.to_string();
            true
        }
        _ => false,
    }
}

/// Extracts the text value of a node's first child.
///
/// Returns the value with consecutive whitespace runs collapsed to a single
/// space, or `None` when there is no first child or it is not a text node.
pub fn text_value_of(tree: &DocTree, id: NodeId) -> Option<String> {
    let &first = tree.children(id).first()?;
    tree.node(first).text().map(normalized)
}

fn normalized(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut in_whitespace = false;
    for c in value.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    out
}
