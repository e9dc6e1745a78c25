//! bearbundle library
//!
//! Exports a single Bear note, addressed by a `bear://` deep link, into a
//! TextBundle directory, optionally keeping the bundle in sync by polling
//! the note database for changes.
//!
//! # Modules
//!
//! - `core::link`: note id extraction from deep links
//! - `core::store`: read-only lookup against the Bear SQLite database
//! - `core::transform`: header stripping and image-reference rewriting
//! - `core::bundle`: TextBundle serialization
//! - `core::pipeline`: one full export, link to bundle
//! - `core::watcher`: change-detection polling state machine

pub mod core;

// Re-exports for convenience
pub use core::config::Config;
pub use core::error::ExportError;
pub use core::link::note_id_from_link;
pub use core::pipeline::export_note;
pub use core::store::{NoteRecord, NoteSource, NoteStore};
pub use core::watcher::{ChangeWatcher, TickOutcome, WatchState, POLL_INTERVAL_MS};
