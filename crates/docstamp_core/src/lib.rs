//! # docstamp_core
//!
//! Placeholder location and template merge core for docstamp.
//!
//! This crate provides:
//! - Predicates that recognize tagged placeholder nodes ([`locator`])
//! - The text accessor that fills matched slots ([`text`])
//! - Form templates with a defensive copy ([`FormTemplate`], [`clone_form`])
//! - Merge orchestration over both ([`populate_tags`], [`merge_form`])
//!
//! Loading template bytes into a tree and serializing the populated result
//! back out belong to the host document library; the core's responsibility
//! starts at a loaded tree and ends at a populated one.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use docstamp_core::populate_tags;
//! use docstamp_tree::{DocTree, NodeKind};
//!
//! let mut tree = DocTree::new();
//! let run = tree.run_with_text("");
//! let sdt = tree.push_with_children(
//!     NodeKind::StructuredTag {
//!         tag: Some("orderNumber".to_string()),
//!     },
//!     &[run],
//! );
//! let body = tree.push_with_children(NodeKind::Body, &[sdt]);
//!
//! let values = HashMap::from([("orderNumber".to_string(), "1234".to_string())]);
//! let outcome = populate_tags(&mut tree, body, &values);
//! assert!(outcome.is_complete());
//! ```

mod error;
mod form;
pub mod locator;
mod merge;
pub mod text;

pub use error::{CopyStage, MergeError};
pub use form::{FormField, FormSnapshot, FormTemplate, clone_form};
pub use locator::{tag_value_of, with_any_tag, with_tag_value};
pub use merge::{
    MergeOutcome, body_of, merge_form, populate_fields, populate_rows, populate_tags,
    row_field_name,
};
pub use text::{set_text, text_value_of};
