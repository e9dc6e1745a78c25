use rusqlite::{params, Connection, OpenFlags};

use super::config::Config;
use super::error::ExportError;

/// One note row as Bear stores it.
///
/// The modification marker is opaque: it is read as text straight out of the
/// database and only ever compared for equality, never ordered.
#[derive(Debug, Clone)]
pub struct NoteRecord {
    pub identifier: String,
    pub title: Option<String>,
    pub body: Option<String>,
    pub modification_marker: String,
}

/// Anything the watcher can poll a fresh [`NoteRecord`] from.
pub trait NoteSource {
    fn fetch(&self, id: &str) -> Result<NoteRecord, ExportError>;
}

/// Read-only lookup against the Bear SQLite database.
///
/// Every fetch opens and drops its own connection. Bear itself writes to the
/// same file while we poll, and a long-lived reader would hold locks and see
/// stale snapshots, so no handle survives across calls.
pub struct NoteStore<'a> {
    config: &'a Config,
}

impl<'a> NoteStore<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    fn open(&self) -> Result<Connection, ExportError> {
        let path = self
            .config
            .database
            .as_ref()
            .ok_or_else(|| ExportError::Configuration("note database location is not set".into()))?;

        Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|source| ExportError::StoreUnavailable {
            path: path.clone(),
            source,
        })
    }
}

impl NoteSource for NoteStore<'_> {
    fn fetch(&self, id: &str) -> Result<NoteRecord, ExportError> {
        let conn = self.open()?;

        let result = conn.query_row(
            "SELECT ZUNIQUEIDENTIFIER, ZTITLE, ZTEXT, CAST(ZMODIFICATIONDATE AS TEXT) \
             FROM ZSFNOTE WHERE ZUNIQUEIDENTIFIER = ?1",
            params![id],
            |row| {
                Ok(NoteRecord {
                    identifier: row.get(0)?,
                    title: row.get(1)?,
                    body: row.get(2)?,
                    modification_marker: row.get(3)?,
                })
            },
        );

        match result {
            Ok(record) => Ok(record),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(ExportError::NotFound(id.to_string())),
            Err(e) => Err(ExportError::Query(e)),
        }
    }
}
