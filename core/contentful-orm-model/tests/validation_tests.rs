use contentful_orm_model::{Mark, NodeType, Regexp, Validation, ValidationRule};
use pretty_assertions::assert_eq;
use serde_json::json;

// ── Wire shape ───────────────────────────────────────────────────

#[test]
fn size_serializes_as_single_key_object() {
    let v = Validation::size(2, 50);
    assert_eq!(serde_json::to_value(&v).unwrap(), json!({"size": {"min": 2, "max": 50}}));
}

#[test]
fn open_bounds_are_omitted() {
    assert_eq!(
        serde_json::to_value(Validation::max_size(200)).unwrap(),
        json!({"size": {"max": 200}})
    );
    assert_eq!(
        serde_json::to_value(Validation::min(0.0)).unwrap(),
        json!({"range": {"min": 0.0}})
    );
}

#[test]
fn unique_and_in_use_platform_keys() {
    assert_eq!(serde_json::to_value(Validation::unique()).unwrap(), json!({"unique": true}));
    assert_eq!(
        serde_json::to_value(Validation::one_of(["draft", "live"])).unwrap(),
        json!({"in": ["draft", "live"]})
    );
}

#[test]
fn link_constraints_use_camel_case_keys() {
    assert_eq!(
        serde_json::to_value(Validation::link_content_type(["author"])).unwrap(),
        json!({"linkContentType": ["author"]})
    );
    assert_eq!(
        serde_json::to_value(Validation::link_mimetype_group(["image"])).unwrap(),
        json!({"linkMimetypeGroup": ["image"]})
    );
}

#[test]
fn rich_text_allow_lists_use_kebab_names() {
    let nodes = Validation::enabled_node_types([
        NodeType::Paragraph,
        NodeType::Heading1,
        NodeType::EmbeddedEntryBlock,
    ]);
    assert_eq!(
        serde_json::to_value(nodes).unwrap(),
        json!({"enabledNodeTypes": ["paragraph", "heading-1", "embedded-entry-block"]})
    );

    let marks = Validation::enabled_marks([Mark::Bold, Mark::Code]);
    assert_eq!(
        serde_json::to_value(marks).unwrap(),
        json!({"enabledMarks": ["bold", "code"]})
    );
}

#[test]
fn message_is_carried_next_to_the_rule() {
    let v = Validation::regexp("^[a-z]+$").with_message("lowercase only");
    assert_eq!(
        serde_json::to_value(v).unwrap(),
        json!({"regexp": {"pattern": "^[a-z]+$"}, "message": "lowercase only"})
    );
}

#[test]
fn deserializes_platform_shape() {
    let v: Validation =
        serde_json::from_value(json!({"size": {"min": 3}, "message": "too short"})).unwrap();
    assert_eq!(v, Validation::min_size(3).with_message("too short"));

    let v: Validation = serde_json::from_value(json!({"linkContentType": ["category"]})).unwrap();
    assert_eq!(v.rule, ValidationRule::LinkContentType(vec!["category".into()]));
    assert_eq!(v.message, None);
}

// ── Normalization ────────────────────────────────────────────────

#[test]
fn regexp_without_flags_gets_empty_flags() {
    let v = Validation::regexp("^[a-z]+$").normalized();
    assert_eq!(
        serde_json::to_value(v).unwrap(),
        json!({"regexp": {"pattern": "^[a-z]+$", "flags": ""}})
    );
}

#[test]
fn regexp_flags_are_preserved() {
    let v = Validation::regexp_with_flags("^[a-z0-9-]+$", "i").normalized();
    assert_eq!(
        v.rule,
        ValidationRule::Regexp(Regexp {
            pattern: "^[a-z0-9-]+$".into(),
            flags: Some("i".into()),
        })
    );
}

#[test]
fn normalization_keeps_message() {
    let v = Validation::regexp("x").with_message("m").normalized();
    assert_eq!(v.message.as_deref(), Some("m"));
}

#[test]
fn other_rules_normalize_to_themselves() {
    let v = Validation::size(1, 2);
    assert_eq!(v.normalized(), v);
}

#[test]
fn normalization_is_idempotent() {
    let once = Validation::regexp("a+").normalized();
    assert_eq!(once.normalized(), once);
}
