//! Note store/controller: the in-memory note list plus its persistence.
//!
//! # Responsibility
//! - Own the ordered in-memory note list for one storage handle.
//! - Validate save input, persist the full list, and request rendering.
//!
//! # Invariants
//! - Insertion order equals display order equals persistence order.
//! - `save` either appends exactly one note or changes nothing.
//! - Log events carry metadata only; note text never reaches the log.

use crate::model::note::Note;
use crate::repo::prefs_repo::{NoteRepository, RepoError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for note list operations.
#[derive(Debug)]
pub enum StoreError {
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Note deletion is a declared extension point with no behavior yet.
    DeleteUnsupported,
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Repo(err) => write!(f, "{err}"),
            Self::DeleteUnsupported => write!(f, "deleting notes is not supported yet"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::DeleteUnsupported => None,
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Non-error result of a save attempt.
///
/// Rejected input is an expected outcome, not a failure: the original flow
/// silently ignores incomplete notes, so the caller gets a value to branch
/// on instead of an error to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The note was appended and persisted; carries the stored note.
    Saved(Note),
    /// Title or body was empty; nothing changed.
    EmptyInput,
}

/// Presentation seam: the store asks the view to append one note element.
///
/// Implementations are side-effect only (stdout line, UI widget, test
/// recorder); the store never inspects the result.
pub trait NoteRenderer {
    fn render_note(&mut self, note: &Note);
}

/// Ordered note list bound to a persistence backend.
///
/// Construct one per storage handle and pass it to the UI layer by value or
/// reference; there is no process-wide singleton. All access is expected on
/// a single thread.
#[derive(Debug)]
pub struct NoteStore<R: NoteRepository> {
    repo: R,
    notes: Vec<Note>,
}

impl<R: NoteRepository> NoteStore<R> {
    /// Creates a store and rebuilds the list from the repository.
    pub fn open(repo: R) -> StoreResult<Self> {
        let mut store = Self {
            repo,
            notes: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Replaces the in-memory list with the persisted image.
    ///
    /// Missing entries have already defaulted inside the repository, so a
    /// sparse persisted image still loads without an error.
    pub fn load(&mut self) -> StoreResult<()> {
        self.notes = self.repo.load_all()?;
        info!(
            "event=notes_load module=store status=ok count={}",
            self.notes.len()
        );
        Ok(())
    }

    /// Appends a note, persists the full list, and renders the new entry.
    ///
    /// Empty input (title or body) is rejected before any mutation and
    /// reported as [`SaveOutcome::EmptyInput`]. When persistence fails the
    /// in-memory append is undone, keeping list and storage consistent.
    pub fn save<V: NoteRenderer>(
        &mut self,
        title: &str,
        body: &str,
        view: &mut V,
    ) -> StoreResult<SaveOutcome> {
        if title.is_empty() || body.is_empty() {
            debug!("event=note_save module=store status=rejected reason=empty_input");
            return Ok(SaveOutcome::EmptyInput);
        }

        let note = Note::new(title, body);
        self.notes.push(note.clone());
        if let Err(err) = self.repo.replace_all(&self.notes) {
            self.notes.pop();
            return Err(StoreError::Repo(err));
        }

        info!(
            "event=note_save module=store status=ok count={}",
            self.notes.len()
        );
        view.render_note(&note);
        Ok(SaveOutcome::Saved(note))
    }

    /// Renders every note in list order; the startup display path.
    pub fn display<V: NoteRenderer>(&self, view: &mut V) {
        for note in &self.notes {
            view.render_note(note);
        }
    }

    /// Declared-but-unsupported deletion hook.
    ///
    /// Selecting a note for deletion is wired through to here, but no
    /// deletion semantics exist yet; the call never mutates anything.
    pub fn delete(&mut self, _index: usize) -> StoreResult<()> {
        debug!("event=note_delete module=store status=unsupported");
        Err(StoreError::DeleteUnsupported)
    }

    /// Returns the notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the number of notes in the list.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
