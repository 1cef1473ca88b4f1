use jotpad_core::Note;

#[test]
fn note_new_sets_title_and_body() {
    let note = Note::new("Groceries", "Milk, eggs");

    assert_eq!(note.title, "Groceries");
    assert_eq!(note.body, "Milk, eggs");
}

#[test]
fn note_fields_are_mutable_in_place() {
    let mut note = Note::default();

    note.title = "Todo".to_string();
    note.body = "Call Bob".to_string();

    assert_eq!(note, Note::new("Todo", "Call Bob"));
}

#[test]
fn note_serialization_uses_expected_wire_fields() {
    let note = Note::new("Groceries", "Milk, eggs");

    let json = serde_json::to_value(&note).unwrap();
    assert_eq!(json["title"], "Groceries");
    assert_eq!(json["body"], "Milk, eggs");
    assert_eq!(json.as_object().unwrap().len(), 2);

    let decoded: Note = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, note);
}
