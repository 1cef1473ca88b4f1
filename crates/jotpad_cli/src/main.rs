//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `jotpad_core` linkage.
//! - Exercise the save/display flow against an in-memory database so the
//!   output stays deterministic for quick local sanity checks.

use jotpad_core::db::open_db_in_memory;
use jotpad_core::{Note, NoteRenderer, NoteStore, SqlitePrefsRepository};

struct StdoutRenderer;

impl NoteRenderer for StdoutRenderer {
    fn render_note(&mut self, note: &Note) {
        println!("- {}: {}", note.title, note.body);
    }
}

fn main() {
    println!("jotpad_core ping={}", jotpad_core::ping());
    println!("jotpad_core version={}", jotpad_core::core_version());

    if let Err(err) = smoke_run() {
        eprintln!("jotpad smoke run failed: {err}");
        std::process::exit(1);
    }
}

fn smoke_run() -> Result<(), Box<dyn std::error::Error>> {
    let mut conn = open_db_in_memory()?;
    let repo = SqlitePrefsRepository::try_new(&mut conn)?;
    let mut store = NoteStore::open(repo)?;
    let mut view = StdoutRenderer;

    store.save("Groceries", "Milk, eggs", &mut view)?;
    store.save("Todo", "Call Bob", &mut view)?;
    println!("jotpad_core notes={}", store.len());

    Ok(())
}
