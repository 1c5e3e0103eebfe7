//! Document node definitions.
//!
//! The node kinds form a closed set so that shape checks are exhaustive
//! matches rather than runtime type tests.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NodeId;

/// The kind of a document node.
///
/// Each kind carries the data the merge core interprets; everything the host
/// document format defines beyond these is [`NodeKind::Other`] and is walked
/// but never matched or mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Document body container.
    Body,
    /// Block of inline content.
    Paragraph,
    /// A marked location intended to be replaced with caller data.
    ///
    /// The tag is the string marker; `None` means the node is untagged.
    StructuredTag { tag: Option<String> },
    /// A run of literal content inside a paragraph or structured tag.
    Run,
    /// Plain text payload.
    Text { value: String },
    /// Transport wrapper around a payload node.
    ///
    /// A wrapper with no payload is malformed but still walkable.
    Wrapper { payload: Option<NodeId> },
    /// Any node kind the merge core does not interpret.
    Other,
}

impl NodeKind {
    /// Returns true if this is a structured tag node.
    #[inline]
    pub const fn is_structured_tag(&self) -> bool {
        matches!(self, NodeKind::StructuredTag { .. })
    }

    /// Returns true if this is a run node.
    #[inline]
    pub const fn is_run(&self) -> bool {
        matches!(self, NodeKind::Run)
    }

    /// Returns true if this is a text node.
    #[inline]
    pub const fn is_text(&self) -> bool {
        matches!(self, NodeKind::Text { .. })
    }

    /// Returns true if this is a transport wrapper.
    #[inline]
    pub const fn is_wrapper(&self) -> bool {
        matches!(self, NodeKind::Wrapper { .. })
    }

    /// Returns the kind name, without any carried data.
    pub const fn name(&self) -> &'static str {
        match self {
            NodeKind::Body => "Body",
            NodeKind::Paragraph => "Paragraph",
            NodeKind::StructuredTag { .. } => "StructuredTag",
            NodeKind::Run => "Run",
            NodeKind::Text { .. } => "Text",
            NodeKind::Wrapper { .. } => "Wrapper",
            NodeKind::Other => "Other",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A node in the document tree.
///
/// Nodes are owned by their [`crate::DocTree`] and referenced through
/// [`NodeId`] handles; children are stored in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocNode {
    /// The kind of this node.
    pub kind: NodeKind,
    pub(crate) children: Vec<NodeId>,
}

impl DocNode {
    pub(crate) fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    /// Child node ids in document order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns true if this node has children.
    #[inline]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the tag marker for a tagged structured-tag node.
    ///
    /// `None` for untagged structured tags and for every other kind.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::StructuredTag { tag } => tag.as_deref(),
            _ => None,
        }
    }

    /// Returns the raw text value for a text node, `None` otherwise.
    #[inline]
    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Text { value } => Some(value),
            _ => None,
        }
    }
}
