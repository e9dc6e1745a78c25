use url::Url;

use super::error::ExportError;

/// Extract the note id from a deep link such as
/// `bear://x-callback-url/open-note?id=ABC123`.
///
/// A malformed URI and a link without an `id` parameter are the same
/// failure as far as callers care: the link does not address a note.
pub fn note_id_from_link(link: &str) -> Result<String, ExportError> {
    let url = Url::parse(link).map_err(|_| ExportError::InvalidLink(link.to_string()))?;

    url.query_pairs()
        .find(|(key, _)| key == "id")
        .map(|(_, value)| value.into_owned())
        .ok_or_else(|| ExportError::InvalidLink(link.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_open_note_link() {
        let id = note_id_from_link("bear://x-callback-url/open-note?id=ABC123").unwrap();
        assert_eq!(id, "ABC123");
    }

    #[test]
    fn extracts_id_among_other_parameters() {
        let id =
            note_id_from_link("bear://x-callback-url/open-note?new_window=yes&id=X-9&edit=no")
                .unwrap();
        assert_eq!(id, "X-9");
    }

    #[test]
    fn rejects_link_without_id() {
        let err = note_id_from_link("bear://x-callback-url/open-note?title=Hi").unwrap_err();
        assert!(matches!(err, ExportError::InvalidLink(_)));
    }

    #[test]
    fn rejects_malformed_uri() {
        let err = note_id_from_link("not a link at all").unwrap_err();
        assert!(matches!(err, ExportError::InvalidLink(_)));
    }
}
