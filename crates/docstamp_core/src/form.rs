//! Form templates and the defensive copy.
//!
//! A [`FormTemplate`] is a long-lived, possibly shared handle to a fillable
//! document: an insertion-ordered mapping from fully-qualified field name to
//! value. A merge never mutates a shared template directly - it operates on
//! the independent clone produced by [`clone_form`], whose lifetime is scoped
//! to the single merge request.

use serde::{Deserialize, Serialize};

use crate::error::MergeError;

/// A single fillable field, keyed by its fully-qualified name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormField {
    /// Fully-qualified field name, e.g. `"orderDate"` or `"orderLine|1|desc"`.
    pub name: String,
    /// Current field value.
    pub value: String,
}

/// A stateful handle to a fillable document.
///
/// Field order is insertion order and is preserved by snapshots and clones.
/// Lookup by name yields `Option` - a missing field is a non-fatal no-match,
/// never an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormTemplate {
    fields: Vec<FormField>,
}

impl FormTemplate {
    /// Creates a form with no fields.
    #[inline]
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Appends a field with the given template-default value.
    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push(FormField {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Looks up a field by its fully-qualified name.
    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Current value of the named field.
    pub fn value_of(&self, name: &str) -> Option<&str> {
        self.field(name).map(|field| field.value.as_str())
    }

    /// Sets the named field's value, returning false when no such field
    /// exists.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|field| field.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    /// All fields, in insertion order.
    #[inline]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Number of fields.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the form has no fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Exports the form's field values to an interchange snapshot.
    pub fn snapshot(&self) -> Result<FormSnapshot, MergeError> {
        let payload = serde_json::to_string(&self.fields).map_err(MergeError::copy_export)?;
        Ok(FormSnapshot { payload })
    }

    /// Re-applies a snapshot's field values by name.
    ///
    /// Snapshot entries with no matching field are ignored; fields absent
    /// from the snapshot keep their current value.
    pub fn restore(&mut self, snapshot: &FormSnapshot) -> Result<(), MergeError> {
        let fields: Vec<FormField> =
            serde_json::from_str(&snapshot.payload).map_err(MergeError::copy_import)?;
        for field in fields {
            self.set_value(&field.name, field.value);
        }
        Ok(())
    }

    /// A new form over the same field structure with unpopulated values.
    fn fresh(&self) -> FormTemplate {
        FormTemplate {
            fields: self
                .fields
                .iter()
                .map(|field| FormField {
                    name: field.name.clone(),
                    value: String::new(),
                })
                .collect(),
        }
    }
}

/// Interchange snapshot of a form's field values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    payload: String,
}

/// Produces an independent clone of a form by round-tripping its field
/// values through the interchange snapshot.
///
/// Mutating the clone never affects the source, and vice versa. A failed
/// export or import surfaces as [`MergeError::Copy`]; the caller must not
/// fall back to mutating the shared original.
pub fn clone_form(form: &FormTemplate) -> Result<FormTemplate, MergeError> {
    let snapshot = form.snapshot()?;
    let mut copy = form.fresh();
    copy.restore(&snapshot)?;
    Ok(copy)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn order_form() -> FormTemplate {
        let mut form = FormTemplate::new();
        form.add_field("orderDate", "2014-05-01");
        form.add_field("orderNumber", "1234");
        form.add_field("customerName", "");
        form
    }

    #[test]
    fn lookup_is_by_fully_qualified_name() {
        let form = order_form();

        assert_eq!(form.value_of("orderNumber"), Some("1234"));
        assert_eq!(form.value_of("orderdate"), None);
        assert_eq!(form.value_of("missing"), None);
    }

    #[test]
    fn set_value_reports_missing_fields() {
        let mut form = order_form();

        assert!(form.set_value("customerName", "Fred"));
        assert!(!form.set_value("nope", "x"));
        assert_eq!(form.value_of("customerName"), Some("Fred"));
    }

    #[test]
    fn clone_preserves_all_field_values() {
        let form = order_form();
        let copy = clone_form(&form).unwrap();

        assert_eq!(copy.len(), form.len());
        for field in form.fields() {
            assert_eq!(copy.value_of(&field.name), Some(field.value.as_str()));
        }
    }

    #[test]
    fn clone_preserves_field_order() {
        let form = order_form();
        let copy = clone_form(&form).unwrap();

        let names: Vec<&str> = copy.fields().iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["orderDate", "orderNumber", "customerName"]);
    }

    #[test]
    fn mutating_the_clone_leaves_the_original_untouched() {
        let form = order_form();
        let mut copy = clone_form(&form).unwrap();

        copy.set_value("orderNumber", "9999");

        assert_eq!(copy.value_of("orderNumber"), Some("9999"));
        assert_eq!(form.value_of("orderNumber"), Some("1234"));
    }

    #[test]
    fn mutating_the_original_leaves_the_clone_untouched() {
        let mut form = order_form();
        let copy = clone_form(&form).unwrap();

        form.set_value("orderDate", "2099-01-01");

        assert_eq!(form.value_of("orderDate"), Some("2099-01-01"));
        assert_eq!(copy.value_of("orderDate"), Some("2014-05-01"));
    }

    #[test]
    fn snapshot_restore_round_trip() {
        let form = order_form();
        let snapshot = form.snapshot().unwrap();

        let mut other = order_form();
        other.set_value("orderNumber", "changed");
        other.restore(&snapshot).unwrap();

        assert_eq!(other, form);
    }

    #[test]
    fn restore_ignores_unknown_snapshot_entries() {
        let mut donor = FormTemplate::new();
        donor.add_field("orderNumber", "1234");
        donor.add_field("unknownField", "x");
        let snapshot = donor.snapshot().unwrap();

        let mut form = FormTemplate::new();
        form.add_field("orderNumber", "");
        form.restore(&snapshot).unwrap();

        assert_eq!(form.value_of("orderNumber"), Some("1234"));
        assert_eq!(form.len(), 1);
    }

    #[test]
    fn cloning_an_empty_form() {
        let form = FormTemplate::new();
        let copy = clone_form(&form).unwrap();

        assert!(copy.is_empty());
    }
}
