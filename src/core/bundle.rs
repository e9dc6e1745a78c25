use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::error::ExportError;

pub const BUNDLE_EXTENSION: &str = "textbundle";
pub const UNTITLED: &str = "Untitled Note";

/// `info.json` as the TextBundle spec defines it, version 2 with a
/// markdown payload.
#[derive(Debug, Serialize)]
struct BundleInfo<'a> {
    version: u32,
    #[serde(rename = "type")]
    content_type: &'static str,
    transient: bool,
    #[serde(rename = "displayName")]
    display_name: &'a str,
}

/// Append the `.textbundle` extension unless the target already carries it.
pub fn bundle_path(target: &Path) -> PathBuf {
    if target.extension().map(|e| e == BUNDLE_EXTENSION).unwrap_or(false) {
        target.to_path_buf()
    } else {
        let mut name = target.as_os_str().to_os_string();
        name.push(".");
        name.push(BUNDLE_EXTENSION);
        PathBuf::from(name)
    }
}

/// Materialize the bundle: `info.json`, `text.md` and an `assets/` directory.
///
/// Existing bundle contents are overwritten file by file, never reconciled:
/// assets left over from an earlier export stay where they are, and a failed
/// write leaves whatever partial state it got to.
pub fn write_bundle(target: &Path, content: &str, title: &str) -> Result<PathBuf, ExportError> {
    let bundle = bundle_path(target);

    fs::create_dir_all(bundle.join("assets"))?;

    let display_name = if title.is_empty() { UNTITLED } else { title };
    let info = BundleInfo {
        version: 2,
        content_type: "net.daringfireball.markdown",
        transient: false,
        display_name,
    };
    fs::write(bundle.join("info.json"), serde_json::to_string_pretty(&info)?)?;
    fs::write(bundle.join("text.md"), content)?;

    Ok(bundle)
}
