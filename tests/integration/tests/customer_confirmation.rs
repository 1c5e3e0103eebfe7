//! End-to-end merge scenarios.
//!
//! Exercises the full pipeline over a customer-confirmation style template:
//! locate tagged placeholders, populate them, and keep the shared template
//! untouched behind the defensive copy.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use docstamp_core::{
    FormTemplate, clone_form, merge_form, populate_rows, populate_tags, row_field_name, set_text,
    with_any_tag, with_tag_value,
};
use docstamp_tree::{DocNode, DocTree, NodeId, NodeKind, collect_all, find_first};

/// Builds a confirmation template: a body of paragraphs, each holding one
/// tagged placeholder whose run carries the template-default text.
fn confirmation_template() -> (DocTree, NodeId) {
    let mut tree = DocTree::new();
    let mut paragraphs = Vec::new();
    for tag in ["orderDate", "orderNumber", "customerName", "message"] {
        let run = tree.run_with_text("");
        let sdt = tree.push_with_children(
            NodeKind::StructuredTag {
                tag: Some(tag.to_string()),
            },
            &[run],
        );
        paragraphs.push(tree.push_with_children(NodeKind::Paragraph, &[sdt]));
    }
    let body = tree.push_with_children(NodeKind::Body, &paragraphs);
    (tree, body)
}

fn slot_text(tree: &DocTree, root: NodeId, tag: &str) -> String {
    let sdt = find_first(tree, root, with_tag_value(tag)).unwrap();
    let run = find_first(tree, sdt, |node: &DocNode| node.kind.is_run()).unwrap();
    let wrapper = tree.children(run)[0];
    let payload = tree.unwrap_payload(wrapper).unwrap();
    tree.node(payload).text().unwrap().to_string()
}

#[test]
fn merge_populates_a_confirmation_document() {
    let (mut tree, body) = confirmation_template();

    let values = HashMap::from([
        ("orderDate".to_string(), "2014-05-01".to_string()),
        ("orderNumber".to_string(), "1234".to_string()),
        ("customerName".to_string(), "Fred Smith".to_string()),
        ("message".to_string(), "You have ordered 3 products".to_string()),
    ]);
    let outcome = populate_tags(&mut tree, body, &values);

    assert!(outcome.is_complete());
    assert_eq!(outcome.populated.len(), 4);
    assert_eq!(slot_text(&tree, body, "orderNumber"), "1234");
    assert_eq!(slot_text(&tree, body, "customerName"), "Fred Smith");
}

#[test]
fn unmatched_tags_are_skipped_and_slots_keep_their_defaults() {
    let (mut tree, body) = confirmation_template();

    let values = HashMap::from([
        ("orderNumber".to_string(), "1234".to_string()),
        ("notInTemplate".to_string(), "x".to_string()),
    ]);
    let outcome = populate_tags(&mut tree, body, &values);

    assert_eq!(outcome.populated, vec!["orderNumber"]);
    assert_eq!(outcome.skipped, vec!["notInTemplate"]);
    // Untouched slots still hold the template default.
    assert_eq!(slot_text(&tree, body, "customerName"), "");
}

#[test]
fn three_tagged_nodes_a_b_a() {
    let mut tree = DocTree::new();
    let mut children = Vec::new();
    for tag in ["A", "B", "A"] {
        children.push(tree.push_node(NodeKind::StructuredTag {
            tag: Some(tag.to_string()),
        }));
    }
    let body = tree.push_with_children(NodeKind::Body, &children);

    let all_a = collect_all(&tree, body, with_tag_value("A"));
    assert_eq!(all_a, vec![children[0], children[2]]);

    let first_a = find_first(&tree, body, with_tag_value("A"));
    assert_eq!(first_a, Some(children[0]));

    let any = collect_all(&tree, body, with_any_tag());
    assert_eq!(any.len(), 3);
}

#[test]
fn form_merge_with_repeating_order_lines() {
    // The shared template: header fields plus six repeating rows of three
    // columns each, the way the confirmation form lays them out.
    let mut template = FormTemplate::new();
    for name in ["orderDate", "orderNumber", "customerName", "preferences"] {
        template.add_field(name, "");
    }
    for i in 1..=6 {
        for column in ["desc", "cost", "quantity"] {
            template.add_field(row_field_name("orderLine", i, column), "");
        }
    }

    let values = HashMap::from([
        ("orderDate".to_string(), "2014-05-01".to_string()),
        ("orderNumber".to_string(), "1234".to_string()),
    ]);
    let (mut merged, outcome) = merge_form(&template, &values).unwrap();
    assert!(outcome.is_complete());

    let rows: Vec<Vec<(String, String)>> = (0..8)
        .map(|i| {
            vec![
                ("desc".to_string(), format!("Product {i}")),
                ("cost".to_string(), "4.50".to_string()),
                ("quantity".to_string(), "2".to_string()),
            ]
        })
        .collect();
    // Eight order lines against a six-row template: the bound wins.
    let applied = populate_rows(&mut merged, "orderLine", &rows, 6);

    assert_eq!(applied, 6);
    assert_eq!(merged.value_of("orderLine|1|desc"), Some("Product 0"));
    assert_eq!(merged.value_of("orderLine|6|desc"), Some("Product 5"));
    assert_eq!(merged.value_of("orderNumber"), Some("1234"));

    // Everything happened on the copy; the shared template is pristine.
    for field in template.fields() {
        assert_eq!(field.value, "");
    }
}

#[test]
fn concurrent_style_merges_stay_isolated() {
    let mut template = FormTemplate::new();
    template.add_field("orderNumber", "");

    // Two independent requests against the same shared template.
    let first = merge_form(
        &template,
        &HashMap::from([("orderNumber".to_string(), "1111".to_string())]),
    )
    .unwrap()
    .0;
    let second = merge_form(
        &template,
        &HashMap::from([("orderNumber".to_string(), "2222".to_string())]),
    )
    .unwrap()
    .0;

    assert_eq!(first.value_of("orderNumber"), Some("1111"));
    assert_eq!(second.value_of("orderNumber"), Some("2222"));
    assert_eq!(template.value_of("orderNumber"), Some(""));

    let clone = clone_form(&template).unwrap();
    assert_eq!(clone, template);
    template.add_field("extra", "x");
    assert_eq!(clone.len(), 1);
}

#[test]
fn direct_accessor_use_over_a_located_slot() {
    let (mut tree, body) = confirmation_template();

    let sdt = find_first(&tree, body, with_tag_value("message")).unwrap();
    let run = find_first(&tree, sdt, |node: &DocNode| node.kind.is_run()).unwrap();

    assert!(set_text(&mut tree, run, "You have ordered 3 products"));
    assert_eq!(
        slot_text(&tree, body, "message"),
        "You have ordered 3 products"
    );
}
