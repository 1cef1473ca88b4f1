//! Note domain model.

use serde::{Deserialize, Serialize};

/// A user-entered note: a short title plus a free-form body.
///
/// Notes carry no identity field and no timestamp; a note is identified by
/// its position in the note list, and that position doubles as its
/// persistence index.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Short heading shown in the list.
    pub title: String,
    /// Free-form note text.
    pub body: String,
}

impl Note {
    /// Creates a note from title and body text.
    ///
    /// The entity accepts any input, including empty strings; callers that
    /// require non-empty fields enforce that before constructing.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn new_sets_both_fields() {
        let note = Note::new("Groceries", "Milk, eggs");
        assert_eq!(note.title, "Groceries");
        assert_eq!(note.body, "Milk, eggs");
    }

    #[test]
    fn default_note_is_empty() {
        let note = Note::default();
        assert!(note.title.is_empty());
        assert!(note.body.is_empty());
    }
}
