//! Note persistence contract and SQLite key/value implementation.
//!
//! # Responsibility
//! - Map the note list onto flat preference rows: one `NoteCount` entry and
//!   `title_<i>` / `body_<i>` entries per index.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `NoteCount` gates every read; rows above it are invisible.
//! - Absent rows default silently (count to 0, entries to "").
//! - `replace_all` rewrites the full image in a single transaction.

use crate::db::DbError;
use crate::model::note::Note;
use rusqlite::{params, Connection, OptionalExtension, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Key holding the number of persisted notes.
pub const KEY_NOTE_COUNT: &str = "NoteCount";
/// Key prefix for note titles; the note index is appended.
pub const KEY_TITLE_PREFIX: &str = "title_";
/// Key prefix for note bodies; the note index is appended.
pub const KEY_BODY_PREFIX: &str = "body_";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for note persistence operations.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidData(String),
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted note data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence contract for the note list.
///
/// The persisted unit is the whole list: reads reconstruct it in index
/// order, writes replace the full image. There is no per-note update.
pub trait NoteRepository {
    /// Loads every persisted note in index order.
    ///
    /// An absent count means zero notes; an absent title or body row means
    /// an empty string for that field.
    fn load_all(&self) -> RepoResult<Vec<Note>>;

    /// Replaces the persisted note image with `notes`, atomically.
    ///
    /// Writes `NoteCount` plus every `title_<i>` / `body_<i>` entry in one
    /// transaction. Stale rows above the new count are not removed; the
    /// count makes them unreachable.
    fn replace_all(&mut self, notes: &[Note]) -> RepoResult<()>;
}

/// SQLite-backed key/value note repository.
#[derive(Debug)]
pub struct SqlitePrefsRepository<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqlitePrefsRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        ensure_prefs_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl NoteRepository for SqlitePrefsRepository<'_> {
    fn load_all(&self) -> RepoResult<Vec<Note>> {
        let count = read_note_count(self.conn)?;

        let mut notes = Vec::with_capacity(count);
        for index in 0..count {
            let title = read_value(self.conn, &title_key(index))?.unwrap_or_default();
            let body = read_value(self.conn, &body_key(index))?.unwrap_or_default();
            notes.push(Note::new(title, body));
        }

        Ok(notes)
    }

    fn replace_all(&mut self, notes: &[Note]) -> RepoResult<()> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        put_value(&tx, KEY_NOTE_COUNT, &notes.len().to_string())?;
        for (index, note) in notes.iter().enumerate() {
            put_value(&tx, &title_key(index), &note.title)?;
            put_value(&tx, &body_key(index), &note.body)?;
        }

        tx.commit()?;
        Ok(())
    }
}

/// Returns the preference key for the title at `index`.
pub fn title_key(index: usize) -> String {
    format!("{KEY_TITLE_PREFIX}{index}")
}

/// Returns the preference key for the body at `index`.
pub fn body_key(index: usize) -> String {
    format!("{KEY_BODY_PREFIX}{index}")
}

fn read_value(conn: &Connection, key: &str) -> RepoResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM prefs WHERE key = ?1;", [key], |row| {
            row.get(0)
        })
        .optional()?;
    Ok(value)
}

fn put_value(conn: &Connection, key: &str, value: &str) -> RepoResult<()> {
    conn.execute(
        "INSERT INTO prefs (key, value) VALUES (?1, ?2)
         ON CONFLICT (key) DO UPDATE SET value = excluded.value;",
        params![key, value],
    )?;
    Ok(())
}

fn read_note_count(conn: &Connection) -> RepoResult<usize> {
    let raw = match read_value(conn, KEY_NOTE_COUNT)? {
        Some(raw) => raw,
        None => return Ok(0),
    };

    let parsed = raw.trim().parse::<i64>().map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid note count `{raw}` under key `{KEY_NOTE_COUNT}`"
        ))
    })?;

    // A negative count cannot address any entry; treat it like zero.
    Ok(usize::try_from(parsed).unwrap_or(0))
}

fn ensure_prefs_connection_ready(conn: &Connection) -> RepoResult<()> {
    let table_exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'prefs'
        );",
        [],
        |row| row.get(0),
    )?;
    if table_exists != 1 {
        return Err(RepoError::MissingRequiredTable("prefs"));
    }

    for column in ["key", "value"] {
        if !prefs_has_column(conn, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: "prefs",
                column,
            });
        }
    }

    Ok(())
}

fn prefs_has_column(conn: &Connection, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info(prefs);")?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == column {
            return Ok(true);
        }
    }
    Ok(false)
}
