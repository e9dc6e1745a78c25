use std::path::Path;

use lazy_static::lazy_static;
use regex::{Captures, Regex};

lazy_static! {
    // ![alt](source)
    static ref IMAGE_RE: Regex = Regex::new(r"!\[([^\]]*)\]\(([^)]+)\)").unwrap();
}

/// Drop everything above the first `---` separator line.
///
/// Bear prefixes exported note text with a metadata block; the separator
/// itself is kept so the exported markdown still opens with `---`. Content
/// without a separator is passed through untouched, and later `---` lines
/// stay where they are.
pub fn strip_header(body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();

    match lines.iter().position(|line| line.trim() == "---") {
        Some(idx) => lines[idx..].join("\n"),
        None => body.to_string(),
    }
}

/// Rewrite local-file image references to point into the bundle's `assets/`
/// directory, e.g. `![p](file:///tmp/p.png)` becomes `![p](assets/p.png)`.
///
/// Remote and already-relative references are left alone, and nothing is
/// copied; placing the files under `assets/` is someone else's job. With no
/// asset root configured this is a passthrough.
pub fn rewrite_images(content: &str, asset_root: Option<&Path>) -> String {
    if asset_root.is_none() {
        return content.to_string();
    }

    IMAGE_RE
        .replace_all(content, |caps: &Captures| {
            let alt = &caps[1];
            let source = &caps[2];
            match source.strip_prefix("file://") {
                Some(path) => {
                    let basename = path.rsplit('/').next().unwrap_or(path);
                    format!("![{}](assets/{})", alt, basename)
                }
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Full transform for one note body: header stripped, images rewritten.
pub fn render(body: &str, asset_root: Option<&Path>) -> String {
    rewrite_images(&strip_header(body), asset_root)
}
