//! Export command - one-shot export and the watch loop

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tokio::time::MissedTickBehavior;

use crate::core::bundle::UNTITLED;
use crate::core::config::Config;
use crate::core::link::note_id_from_link;
use crate::core::pipeline::export_note;
use crate::core::store::NoteStore;
use crate::core::watcher::{ChangeWatcher, TickOutcome, POLL_INTERVAL_MS};

/// Run one export, then optionally keep polling for changes.
///
/// The initial export is fatal on any failure; once watching, tick failures
/// are printed and swallowed so a transient problem never stops the watch.
pub fn run(link: &str, output: &Path, watch: bool, config: &Config) -> Result<()> {
    let (record, bundle) = export_note(config, link, output)?;

    let title = record.title.as_deref().unwrap_or(UNTITLED).to_string();
    println!(
        "{} Exported {} to {}",
        "✓".green().bold(),
        title.cyan(),
        bundle.display()
    );

    if watch {
        let id = note_id_from_link(link)?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;
        runtime.block_on(watch_loop(config, id, bundle))?;
    }

    Ok(())
}

/// Poll every [`POLL_INTERVAL_MS`] until Ctrl-C.
///
/// Ticks run to completion inside this single task, so two export cycles
/// never interleave; a tick that outruns the interval delays the next one,
/// and missed ticks are skipped rather than bursted.
async fn watch_loop(config: &Config, id: String, bundle: PathBuf) -> Result<()> {
    let mut watcher = ChangeWatcher::new(NoteStore::new(config), config, id, bundle);
    watcher.start();

    let mut ticker = tokio::time::interval(Duration::from_millis(POLL_INTERVAL_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    println!(
        "{} Watching for changes every {}s (Ctrl-C to stop)",
        "→".dimmed(),
        POLL_INTERVAL_MS / 1000
    );

    loop {
        tokio::select! {
            _ = ticker.tick() => match watcher.tick() {
                TickOutcome::Exported(record) => {
                    let title = record.title.as_deref().unwrap_or(UNTITLED);
                    println!(
                        "{} {} Re-exported {}",
                        timestamp().dimmed(),
                        "✓".green().bold(),
                        title.cyan()
                    );
                }
                TickOutcome::Failed(e) => {
                    eprintln!("{} {} {}", timestamp().dimmed(), "!".yellow().bold(), e);
                }
                TickOutcome::BaselineRecorded | TickOutcome::Unchanged => {}
                TickOutcome::Stopped => break,
            },
            _ = tokio::signal::ctrl_c() => {
                watcher.stop();
                break;
            }
        }
    }

    println!("{} Stopped watching", "→".dimmed());
    Ok(())
}

fn timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}
