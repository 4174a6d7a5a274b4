//! `data:` URIs for embedding converted SVG in HTML or markdown images.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// MIME type of the converted output
pub const SVG_MIME: &str = "image/svg+xml";

/// Encode SVG text as a base64 `data:image/svg+xml` URI.
pub fn svg_data_uri(svg: &str) -> String {
    format!("data:{SVG_MIME};base64,{}", STANDARD.encode(svg))
}

/// Convert a vector drawable straight to a `data:` URI.
///
/// Returns `None` when conversion fails.
pub fn vector_data_uri(source: &str) -> Option<String> {
    crate::convert(source).map(|svg| svg_data_uri(&svg))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_data_uri() {
        assert_eq!(svg_data_uri("<svg/>"), "data:image/svg+xml;base64,PHN2Zy8+");
    }

    #[test]
    fn test_vector_data_uri() {
        let uri = vector_data_uri(r#"<vector><path android:pathData="M0 0"/></vector>"#).unwrap();
        let encoded = uri.strip_prefix("data:image/svg+xml;base64,").unwrap();
        let decoded = String::from_utf8(STANDARD.decode(encoded).unwrap()).unwrap();
        assert!(decoded.starts_with("<?xml"));
        assert!(decoded.contains(r#"d="M0 0""#));

        assert_eq!(vector_data_uri("not a drawable"), None);
    }
}
