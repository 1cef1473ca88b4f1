use jotpad_core::db::open_db_in_memory;
use jotpad_core::{Note, NoteRenderer, NoteStore, SaveOutcome, SqlitePrefsRepository, StoreError};

#[derive(Default)]
struct RecordingRenderer {
    rendered: Vec<Note>,
}

impl NoteRenderer for RecordingRenderer {
    fn render_note(&mut self, note: &Note) {
        self.rendered.push(note.clone());
    }
}

#[test]
fn save_appends_notes_in_order_and_renders_each() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqlitePrefsRepository::try_new(&mut conn).unwrap();
    let mut store = NoteStore::open(repo).unwrap();
    let mut view = RecordingRenderer::default();

    let first = store.save("Groceries", "Milk, eggs", &mut view).unwrap();
    let second = store.save("Todo", "Call Bob", &mut view).unwrap();

    assert_eq!(
        first,
        SaveOutcome::Saved(Note::new("Groceries", "Milk, eggs"))
    );
    assert_eq!(second, SaveOutcome::Saved(Note::new("Todo", "Call Bob")));
    assert_eq!(
        store.notes(),
        [
            Note::new("Groceries", "Milk, eggs"),
            Note::new("Todo", "Call Bob"),
        ]
    );
    assert_eq!(view.rendered, store.notes());
}

#[test]
fn empty_title_or_body_is_rejected_without_mutation() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let repo = SqlitePrefsRepository::try_new(&mut conn).unwrap();
        let mut store = NoteStore::open(repo).unwrap();
        let mut view = RecordingRenderer::default();

        assert_eq!(
            store.save("", "Milk, eggs", &mut view).unwrap(),
            SaveOutcome::EmptyInput
        );
        assert_eq!(
            store.save("Groceries", "", &mut view).unwrap(),
            SaveOutcome::EmptyInput
        );
        assert!(store.is_empty());
        assert!(view.rendered.is_empty());
    }

    // Storage was never touched either; a fresh store still sees nothing.
    let repo = SqlitePrefsRepository::try_new(&mut conn).unwrap();
    let store = NoteStore::open(repo).unwrap();
    assert!(store.is_empty());
}

#[test]
fn reopened_store_reloads_identical_content_and_order() {
    let mut conn = open_db_in_memory().unwrap();

    {
        let repo = SqlitePrefsRepository::try_new(&mut conn).unwrap();
        let mut store = NoteStore::open(repo).unwrap();
        let mut view = RecordingRenderer::default();
        store.save("Groceries", "Milk, eggs", &mut view).unwrap();
        store.save("Todo", "Call Bob", &mut view).unwrap();
        store.save("Ideas", "Note pad in Rust", &mut view).unwrap();
    }

    let repo = SqlitePrefsRepository::try_new(&mut conn).unwrap();
    let store = NoteStore::open(repo).unwrap();
    assert_eq!(
        store.notes(),
        [
            Note::new("Groceries", "Milk, eggs"),
            Note::new("Todo", "Call Bob"),
            Note::new("Ideas", "Note pad in Rust"),
        ]
    );

    let mut view = RecordingRenderer::default();
    store.display(&mut view);
    assert_eq!(view.rendered, store.notes());
}

#[test]
fn delete_is_an_unsupported_extension_point() {
    let mut conn = open_db_in_memory().unwrap();
    let repo = SqlitePrefsRepository::try_new(&mut conn).unwrap();
    let mut store = NoteStore::open(repo).unwrap();
    let mut view = RecordingRenderer::default();
    store.save("keep", "me", &mut view).unwrap();

    let err = store.delete(0).unwrap_err();
    assert!(matches!(err, StoreError::DeleteUnsupported));
    assert_eq!(store.len(), 1);
}
