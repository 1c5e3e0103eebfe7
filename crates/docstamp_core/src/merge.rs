//! Merge orchestration.
//!
//! A merge moves through three states: template loaded, placeholders located,
//! slots populated. Location runs the locator predicates over the tree;
//! population applies the text accessor to each matched slot. Slots that fail
//! the accessor's shape check, and tags with no matching placeholder, are
//! skipped and reported - they never abort the batch. Serializing the
//! populated result is the document library's job, so the core stops at
//! populated.

use std::collections::HashMap;

use tracing::{debug, warn};

use docstamp_tree::visitor::find_first;
use docstamp_tree::{DocNode, DocTree, NodeId, NodeKind};

use crate::error::MergeError;
use crate::form::{FormTemplate, clone_form};
use crate::locator::with_tag_value;
use crate::text::set_text;

/// Outcome of populating a template's placeholder slots.
///
/// Skipped entries kept their template-default value; the merge as a whole
/// still completed.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Names whose slots were filled.
    pub populated: Vec<String>,
    /// Names that had no placeholder or a malformed slot.
    pub skipped: Vec<String>,
}

impl MergeOutcome {
    /// Returns true if every requested name was populated.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    fn populate(&mut self, name: &str) {
        self.populated.push(name.to_string());
    }

    fn skip(&mut self, name: &str) {
        self.skipped.push(name.to_string());
    }
}

/// Locates the body node under `root`.
///
/// Fails with a load-class error when the tree has no body, mirroring how a
/// malformed input document is reported by the loader.
pub fn body_of(tree: &DocTree, root: NodeId) -> Result<NodeId, MergeError> {
    find_first(tree, root, |node: &DocNode| {
        matches!(node.kind, NodeKind::Body)
    })
    .ok_or_else(|| MergeError::load("cannot locate body element within the input tree"))
}

/// Fills tagged placeholder slots in a template tree.
///
/// For each (tag, value) pair the first structured tag with that marker is
/// located, the first run inside it found, and the run's text replaced.
/// Tags are processed in sorted order so logs and outcomes are
/// deterministic. The tree passed here should be a per-request copy; the
/// shared template must stay untouched.
pub fn populate_tags(
    tree: &mut DocTree,
    root: NodeId,
    values: &HashMap<String, String>,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    let mut tags: Vec<&String> = values.keys().collect();
    tags.sort();

    for tag in tags {
        let Some(sdt) = find_first(tree, root, with_tag_value(tag.as_str())) else {
            warn!("no placeholder tagged '{tag}' in template");
            outcome.skip(tag);
            continue;
        };
        let Some(run) = find_first(tree, sdt, |node: &DocNode| node.kind.is_run()) else {
            warn!("placeholder '{tag}' holds no run");
            outcome.skip(tag);
            continue;
        };
        if set_text(tree, run, &values[tag.as_str()]) {
            debug!("populated '{tag}'");
            outcome.populate(tag);
        } else {
            warn!("placeholder '{tag}' has an unexpected content shape, keeping template default");
            outcome.skip(tag);
        }
    }

    outcome
}

/// Fills named fields on a form.
///
/// Names are processed in sorted order; names with no matching field are
/// skipped, not failed.
pub fn populate_fields(form: &mut FormTemplate, values: &HashMap<String, String>) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    let mut names: Vec<&String> = values.keys().collect();
    names.sort();

    for name in names {
        if form.set_value(name, values[name.as_str()].clone()) {
            debug!("populated field '{name}'");
            outcome.populate(name);
        } else {
            warn!("form has no field named '{name}'");
            outcome.skip(name);
        }
    }

    outcome
}

/// Merges caller values into a shared form template.
///
/// The shared template is defensively copied first and only the copy is
/// populated; a failed copy aborts the merge before any mutation happens.
pub fn merge_form(
    template: &FormTemplate,
    values: &HashMap<String, String>,
) -> Result<(FormTemplate, MergeOutcome), MergeError> {
    let mut copy = clone_form(template)?;
    let outcome = populate_fields(&mut copy, values);
    Ok((copy, outcome))
}

/// Builds the fully-qualified name of a repeating-row field.
///
/// Row indexes are 1-based: `row_field_name("orderLine", 1, "desc")` is
/// `"orderLine|1|desc"`.
pub fn row_field_name(group: &str, index: usize, column: &str) -> String {
    format!("{group}|{index}|{column}")
}

/// Fills repeating-row fields from tabular data.
///
/// Each row is a list of (column, value) pairs applied to the fields named
/// `"<group>|<index>|<column>"`. Rows beyond `max_rows` - the caller-chosen
/// bound on how many rows the template provides - are dropped. Returns the
/// number of rows applied.
pub fn populate_rows(
    form: &mut FormTemplate,
    group: &str,
    rows: &[Vec<(String, String)>],
    max_rows: usize,
) -> usize {
    for (i, row) in rows.iter().take(max_rows).enumerate() {
        let index = i + 1;
        for (column, value) in row {
            let name = row_field_name(group, index, column);
            if !form.set_value(&name, value.clone()) {
                warn!("form has no row field named '{name}'");
            }
        }
    }

    let applied = rows.len().min(max_rows);
    if rows.len() > max_rows {
        debug!(
            "dropped {} overflow rows for group '{group}'",
            rows.len() - max_rows
        );
    }
    applied
}
