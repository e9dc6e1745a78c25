use std::path::PathBuf;

use super::config::Config;
use super::error::ExportError;
use super::pipeline::write_record;
use super::store::{NoteRecord, NoteSource};

/// Poll interval between ticks.
pub const POLL_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchState {
    /// Constructed but not yet started.
    Idle,
    /// First tick pending: record the marker, export nothing (the initial
    /// export already ran before the watcher started).
    Baseline,
    /// Steady state: compare markers, re-export on change.
    Polling,
    /// Terminal, reached only through [`ChangeWatcher::stop`].
    Stopped,
}

/// What one tick did. Returned to the caller instead of firing callbacks,
/// so the driving loop decides how to report it.
#[derive(Debug)]
pub enum TickOutcome {
    BaselineRecorded,
    Unchanged,
    /// The note changed and was re-exported; carries the fresh record.
    Exported(NoteRecord),
    /// The tick failed. The recorded marker is untouched and polling
    /// continues; a single failed tick never stops the watcher.
    Failed(ExportError),
    Stopped,
}

/// Change-detection state machine for one note.
///
/// Generic over the note source so ticks can be driven against a stub in
/// tests; production hands it a [`crate::core::store::NoteStore`].
pub struct ChangeWatcher<'a, S: NoteSource> {
    source: S,
    config: &'a Config,
    identifier: String,
    bundle_path: PathBuf,
    state: WatchState,
    last_marker: Option<String>,
}

impl<'a, S: NoteSource> ChangeWatcher<'a, S> {
    pub fn new(source: S, config: &'a Config, identifier: String, bundle_path: PathBuf) -> Self {
        Self {
            source,
            config,
            identifier,
            bundle_path,
            state: WatchState::Idle,
            last_marker: None,
        }
    }

    pub fn state(&self) -> WatchState {
        self.state
    }

    pub fn start(&mut self) {
        if self.state == WatchState::Idle {
            self.state = WatchState::Baseline;
        }
    }

    pub fn stop(&mut self) {
        self.state = WatchState::Stopped;
    }

    /// Run one fetch-compare-maybe-write cycle.
    pub fn tick(&mut self) -> TickOutcome {
        match self.state {
            WatchState::Idle | WatchState::Stopped => return TickOutcome::Stopped,
            WatchState::Baseline | WatchState::Polling => {}
        }

        let record = match self.source.fetch(&self.identifier) {
            Ok(record) => record,
            Err(e) => return TickOutcome::Failed(e),
        };

        if self.state == WatchState::Baseline {
            self.last_marker = Some(record.modification_marker);
            self.state = WatchState::Polling;
            return TickOutcome::BaselineRecorded;
        }

        if self.last_marker.as_deref() == Some(record.modification_marker.as_str()) {
            return TickOutcome::Unchanged;
        }

        match write_record(self.config, &record, &self.bundle_path) {
            Ok(_) => {
                self.last_marker = Some(record.modification_marker.clone());
                TickOutcome::Exported(record)
            }
            Err(e) => TickOutcome::Failed(e),
        }
    }
}
