//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the note save/load/delete use-cases to Dart via FRB.
//! - Keep error semantics simple for the single-screen UI.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Responses are envelopes with stable, UI-consumable messages.

use jotpad_core::db::open_db;
use jotpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Note, NoteRenderer, NoteStore, SaveOutcome, SqlitePrefsRepository, StoreError,
};
use log::error;
use std::path::PathBuf;
use std::sync::OnceLock;

const NOTES_DB_FILE_NAME: &str = "jotpad_notes.sqlite3";
static NOTES_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Exposes the core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One note element for the UI list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    /// Note heading.
    pub title: String,
    /// Note text.
    pub body: String,
}

/// Response envelope for the startup list rebuild.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteListResponse {
    /// Notes in insertion order (empty when storage holds none).
    pub items: Vec<NoteItem>,
    /// Human-readable response message for diagnostics.
    pub message: String,
}

/// Response envelope for note commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the operation changed anything.
    pub ok: bool,
    /// The note element to append to the list, when one was created.
    pub note: Option<NoteItem>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note: Option<NoteItem>) -> Self {
        Self {
            ok: true,
            note,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note: None,
            message: message.into(),
        }
    }
}

/// Rebuilds the note list from storage for display.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Returns every persisted note in insertion order.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_load() -> NoteListResponse {
    let mut view = CollectingRenderer::default();
    match with_note_store(|store| {
        store.display(&mut view);
        Ok(())
    }) {
        Ok(()) => {
            let message = if view.rendered.is_empty() {
                "No notes yet.".to_string()
            } else {
                format!("Loaded {} note(s).", view.rendered.len())
            };
            NoteListResponse {
                items: view.rendered,
                message,
            }
        }
        Err(message) => {
            error!("event=notes_load module=ffi status=error error={message}");
            NoteListResponse {
                items: Vec::new(),
                message: format!("notes_load failed: {message}"),
            }
        }
    }
}

/// Saves one note from the input fields.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
/// - Empty title or body yields `ok=false` without touching storage; the
///   UI decides whether to surface that.
#[flutter_rust_bridge::frb(sync)]
pub fn note_save(title: String, body: String) -> NoteActionResponse {
    let mut view = CollectingRenderer::default();
    let outcome = with_note_store(|store| store.save(&title, &body, &mut view));
    match outcome {
        Ok(SaveOutcome::Saved(_)) => NoteActionResponse::success("Note saved.", view.rendered.pop()),
        Ok(SaveOutcome::EmptyInput) => {
            NoteActionResponse::failure("Both a title and a body are required.")
        }
        Err(message) => {
            error!("event=note_save module=ffi status=error error={message}");
            NoteActionResponse::failure(format!("note_save failed: {message}"))
        }
    }
}

/// Deletion hook for a selected note.
///
/// # FFI contract
/// - Sync call.
/// - Never panics.
/// - Deletion has no semantics yet; the response reports that with a
///   stable message and `ok=false`.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(index: u32) -> NoteActionResponse {
    let result = with_note_store(|store| match store.delete(index as usize) {
        Ok(()) => Ok(true),
        Err(StoreError::DeleteUnsupported) => Ok(false),
        Err(err) => Err(err),
    });
    match result {
        Ok(true) => NoteActionResponse::success("Note deleted.", None),
        Ok(false) => NoteActionResponse::failure("Deleting notes is not supported yet."),
        Err(message) => {
            error!("event=note_delete module=ffi status=error error={message}");
            NoteActionResponse::failure(format!("note_delete failed: {message}"))
        }
    }
}

#[derive(Default)]
struct CollectingRenderer {
    rendered: Vec<NoteItem>,
}

impl NoteRenderer for CollectingRenderer {
    fn render_note(&mut self, note: &Note) {
        self.rendered.push(NoteItem {
            title: note.title.clone(),
            body: note.body.clone(),
        });
    }
}

fn resolve_notes_db_path() -> PathBuf {
    NOTES_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("JOTPAD_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(NOTES_DB_FILE_NAME)
        })
        .clone()
}

fn with_note_store<T>(
    f: impl FnOnce(&mut NoteStore<SqlitePrefsRepository<'_>>) -> Result<T, StoreError>,
) -> Result<T, String> {
    let db_path = resolve_notes_db_path();
    let mut conn = open_db(&db_path).map_err(|err| format!("notes DB open failed: {err}"))?;
    let repo = SqlitePrefsRepository::try_new(&mut conn)
        .map_err(|err| format!("notes repo init failed: {err}"))?;
    let mut store = NoteStore::open(repo).map_err(|err| err.to_string())?;
    f(&mut store).map_err(|err| err.to_string())
}
