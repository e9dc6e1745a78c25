use std::path::PathBuf;

/// Where Bear keeps its database inside the user's home directory.
const DEFAULT_DATABASE: &str =
    "Library/Group Containers/9K33E3U3T4.net.shinyfrog.bear/Application Data/database.sqlite";

/// Resolved once in `main` and passed by reference into the pipeline,
/// so tests can inject their own locations.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Note database file. Exports fail without one.
    pub database: Option<PathBuf>,
    /// Directory Bear stores local images in. Absent disables image
    /// reference rewriting.
    pub asset_root: Option<PathBuf>,
}

impl Config {
    /// Flag values win over environment variables; the database falls back
    /// to the well-known Bear location when the home directory is known.
    pub fn resolve(database: Option<PathBuf>, asset_root: Option<PathBuf>) -> Self {
        let database = database
            .or_else(|| std::env::var_os("BEAR_DATABASE").map(PathBuf::from))
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(DEFAULT_DATABASE)));

        let asset_root = asset_root.or_else(|| std::env::var_os("BEAR_ASSETS").map(PathBuf::from));

        Self {
            database,
            asset_root,
        }
    }
}
