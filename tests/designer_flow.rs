//! End-to-end designer session: build a document from the palette, edit
//! properties, serialize for storage, reload, and validate a submission.

use std::collections::HashMap;

use formforge::{
    validate_all, FieldAttributes, FieldId, FieldRegistry, FieldType, FormDocument,
    PropertiesUpdate,
};

#[test]
fn designer_session_builds_a_validatable_form() {
    let registry = FieldRegistry::standard();

    // Palette covers the whole closed set.
    assert_eq!(registry.iter().count(), FieldType::ALL.len());

    let mut doc = FormDocument::new();

    let title = registry
        .construct(FieldType::Title, FieldId::from("f2"))
        .unwrap();
    doc.insert_at(0, title);

    let name_field = registry
        .construct(FieldType::Text, FieldId::from("f1"))
        .unwrap();
    doc.insert_at(0, name_field);

    // Mark the text field required through the properties editor.
    let mut update = PropertiesUpdate::from_instance(doc.get(&FieldId::from("f1")).unwrap());
    update.label = "Your name".to_string();
    if let FieldAttributes::Text(attrs) = &mut update.attributes {
        attrs.required = true;
    }
    doc.apply_properties(&FieldId::from("f1"), update).unwrap();

    // Persist and reload, as save and publish do.
    let stored = doc.serialize().unwrap();
    let reloaded = FormDocument::deserialize(&stored).unwrap();
    assert_eq!(reloaded, doc);

    // An empty submission fails on the required field only.
    let outcome = validate_all(&reloaded, &HashMap::new());
    assert!(!outcome.is_valid());
    assert_eq!(outcome.invalid_ids(), &[FieldId::from("f1")]);

    // A filled submission passes.
    let values = HashMap::from([(FieldId::from("f1"), "hello".to_string())]);
    let outcome = validate_all(&reloaded, &values);
    assert!(outcome.is_valid());
}

#[test]
fn reordering_respects_insertion_semantics() {
    let registry = FieldRegistry::standard();
    let mut doc = FormDocument::new();

    for id in ["a", "b", "c"] {
        let field = registry
            .construct(FieldType::Text, FieldId::from(id))
            .unwrap();
        doc.push(field);
    }

    // Drag "c" to the front: remove then re-insert.
    let moved = doc.remove_by_id(&FieldId::from("c")).unwrap();
    doc.insert_at(0, moved);

    let order: Vec<&str> = doc.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(order, ["c", "a", "b"]);
}
