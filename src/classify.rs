//! Cheap pre-check for vector drawable documents
//!
//! Callers use this to decide whether to attempt conversion at all. It admits
//! false positives (`<vector>` inside a comment, say); those are rejected or
//! rendered empty by the converter itself.

/// Check if `text` looks like an Android vector drawable.
///
/// True iff the text contains `<vector` immediately followed by whitespace
/// or `>`.
pub fn looks_like_vector_drawable(text: &str) -> bool {
    const MARKER: &str = "<vector";

    text.match_indices(MARKER).any(|(i, _)| {
        text.as_bytes()
            .get(i + MARKER.len())
            .is_some_and(|&b| b.is_ascii_whitespace() || b == b'>')
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_vector_root() {
        assert!(looks_like_vector_drawable("<vector>"));
        assert!(looks_like_vector_drawable("<vector android:width=\"24dp\">"));
        assert!(looks_like_vector_drawable("<?xml version=\"1.0\"?>\n<vector\n  xmlns:android=\"\">"));
        assert!(looks_like_vector_drawable("<vector\tandroid:width=\"24dp\">"));
    }

    #[test]
    fn test_rejects_other_documents() {
        assert!(!looks_like_vector_drawable(""));
        assert!(!looks_like_vector_drawable("<svg viewBox=\"0 0 24 24\"></svg>"));
        assert!(!looks_like_vector_drawable("<shape android:shape=\"rectangle\"/>"));
        assert!(!looks_like_vector_drawable("<vectorDrawable>"));
        assert!(!looks_like_vector_drawable("<vector"));
        // Self-closing roots are not admitted by the marker
        assert!(!looks_like_vector_drawable("<vector/>"));
    }

    #[test]
    fn test_later_marker_counts() {
        assert!(looks_like_vector_drawable("<vectorX/><vector >"));
    }

    #[test]
    fn test_classifier_and_converter_agree_on_missing_root() {
        let text = "<selector><item android:drawable=\"@drawable/a\"/></selector>";
        assert!(!looks_like_vector_drawable(text));
        assert_eq!(crate::convert(text), None);
    }
}
