use std::path::{Path, PathBuf};

use super::bundle::{self, UNTITLED};
use super::config::Config;
use super::error::ExportError;
use super::link::note_id_from_link;
use super::store::{NoteRecord, NoteSource, NoteStore};
use super::transform;

/// One full export: link → lookup → transform → bundle on disk.
///
/// The first failing stage propagates unchanged; nothing is retried and no
/// partial fallback is attempted.
pub fn export_note(
    config: &Config,
    link: &str,
    output: &Path,
) -> Result<(NoteRecord, PathBuf), ExportError> {
    let id = note_id_from_link(link)?;
    let record = NoteStore::new(config).fetch(&id)?;
    let bundle = write_record(config, &record, output)?;
    Ok((record, bundle))
}

/// Transform and write an already-fetched record. Shared with the watcher,
/// which re-exports on every detected change.
pub fn write_record(
    config: &Config,
    record: &NoteRecord,
    output: &Path,
) -> Result<PathBuf, ExportError> {
    let content = transform::render(record.body.as_deref().unwrap_or(""), config.asset_root.as_deref());
    let title = record.title.as_deref().unwrap_or(UNTITLED);
    bundle::write_bundle(output, &content, title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::tests::seed_database;
    use std::fs;

    #[test]
    fn exports_note_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("notes.sqlite");
        seed_database(
            &db,
            &[(
                "ABC123",
                Some("My Note"),
                Some("meta\n---\n# Hi\n![p](file:///tmp/p.png)"),
                "t1",
            )],
        );

        let config = Config {
            database: Some(db),
            asset_root: Some(dir.path().to_path_buf()),
        };

        let (record, bundle) = export_note(
            &config,
            "bear://x-callback-url/open-note?id=ABC123",
            &dir.path().join("out"),
        )
        .unwrap();

        assert_eq!(record.modification_marker, "t1");
        assert!(bundle.ends_with("out.textbundle"));
        assert_eq!(
            fs::read_to_string(bundle.join("text.md")).unwrap(),
            "---\n# Hi\n![p](assets/p.png)"
        );

        let info: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(bundle.join("info.json")).unwrap()).unwrap();
        assert_eq!(info["displayName"], "My Note");
    }

    #[test]
    fn bad_link_fails_before_touching_the_store() {
        let config = Config::default();
        let dir = tempfile::tempdir().unwrap();
        let err = export_note(&config, "???", &dir.path().join("out")).unwrap_err();
        assert!(matches!(err, ExportError::InvalidLink(_)));
    }

    #[test]
    fn absent_body_exports_an_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let db = dir.path().join("notes.sqlite");
        seed_database(&db, &[("EMPTY", None, None, "t1")]);

        let config = Config {
            database: Some(db),
            asset_root: None,
        };

        let (_, bundle) = export_note(
            &config,
            "bear://x-callback-url/open-note?id=EMPTY",
            &dir.path().join("out"),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(bundle.join("text.md")).unwrap(), "");
        let info: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(bundle.join("info.json")).unwrap()).unwrap();
        assert_eq!(info["displayName"], "Untitled Note");
    }
}
