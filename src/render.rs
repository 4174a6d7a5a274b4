//! SVG Rendering
//!
//! Holds the normalized output model ([`SvgDocument`], [`SvgPath`]) and
//! renders it to SVG text.

use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::color::{FALLBACK_COLOR, THEME_PLACEHOLDER};

// =============================================================================
// RenderConfig
// =============================================================================

/// SVG namespace written on the root element
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// XML declaration written before the root element
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

/// Configuration for conversion and SVG rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Whether to write everything on one line.
    pub minify: bool,
    /// Color substituted for `@color/` and `?` references
    /// (empty: [`THEME_PLACEHOLDER`]).
    pub theme_color: String,
    /// Fill for paths with neither `fillColor` nor a root tint
    /// (empty: [`FALLBACK_COLOR`]).
    pub fallback_fill: String,
}

impl RenderConfig {
    /// Readable output: attributes of the root on their own lines, one path per line.
    pub const PRETTY: Self = Self {
        minify: false,
        theme_color: String::new(),
        fallback_fill: String::new(),
    };

    /// Compact single-line output, e.g. for data URIs.
    pub const MINIFIED: Self = Self {
        minify: true,
        theme_color: String::new(),
        fallback_fill: String::new(),
    };

    /// Create a new config.
    pub fn new(minify: bool) -> Self {
        Self {
            minify,
            ..Self::PRETTY
        }
    }

    /// Set a custom placeholder for unresolved theme colors.
    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }

    /// Set a custom fallback fill.
    pub fn with_fallback_fill(mut self, color: impl Into<String>) -> Self {
        self.fallback_fill = color.into();
        self
    }

    /// Get the placeholder for unresolved theme colors.
    pub fn theme_color(&self) -> &str {
        if self.theme_color.is_empty() {
            THEME_PLACEHOLDER
        } else {
            &self.theme_color
        }
    }

    /// Get the fallback fill.
    pub fn fallback_fill(&self) -> &str {
        if self.fallback_fill.is_empty() {
            FALLBACK_COLOR
        } else {
            &self.fallback_fill
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::PRETTY
    }
}

// =============================================================================
// Output model
// =============================================================================

/// One `<path>` of the output document, with colors already translated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgPath {
    /// Path commands (`d`), verbatim from the source
    pub d: String,
    /// `fill`; `None` omits the attribute
    pub fill: Option<String>,
    /// `fill-opacity`
    pub fill_opacity: Option<String>,
    /// `stroke`; `None` means fill-only
    pub stroke: Option<String>,
    /// `stroke-width`
    pub stroke_width: Option<String>,
    /// `stroke-opacity`
    pub stroke_opacity: Option<String>,
}

impl SvgPath {
    /// Attributes in output order, skipping absent ones.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("d", Some(self.d.as_str())),
            ("fill", self.fill.as_deref()),
            ("fill-opacity", self.fill_opacity.as_deref()),
            ("stroke", self.stroke.as_deref()),
            ("stroke-width", self.stroke_width.as_deref()),
            ("stroke-opacity", self.stroke_opacity.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
    }
}

/// A complete output document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SvgDocument {
    /// Root `width`, without unit suffix when the source used `dp`
    pub width: String,
    /// Root `height`
    pub height: String,
    /// Second-to-last `viewBox` component
    pub viewport_width: String,
    /// Last `viewBox` component
    pub viewport_height: String,
    /// Paths in source order
    pub paths: SmallVec<[SvgPath; 8]>,
}

impl SvgDocument {
    /// The `viewBox` value
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.viewport_width, self.viewport_height)
    }

    /// Numeric width and height, if both parse as plain numbers.
    pub fn size(&self) -> Option<(f64, f64)> {
        Some((parse_size(&self.width)?, parse_size(&self.height)?))
    }
}

/// Parse a dimension string as a finite number.
pub fn parse_size(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

// =============================================================================
// Document Rendering
// =============================================================================

/// Render a document to an SVG string.
pub fn render_document(doc: &SvgDocument, config: &RenderConfig) -> String {
    let mut output = String::with_capacity(160 + doc.paths.iter().map(|p| p.d.len() + 48).sum::<usize>());
    output.push_str(XML_DECLARATION);
    if !config.minify {
        output.push('\n');
    }

    let sep = if config.minify { " " } else { "\n     " };
    let _ = write!(
        output,
        r#"<svg xmlns="{SVG_NAMESPACE}"{sep}width="{}"{sep}height="{}"{sep}viewBox="{}">"#,
        escape_attr(&doc.width),
        escape_attr(&doc.height),
        escape_attr(&doc.view_box()),
    );
    if !config.minify {
        output.push('\n');
    }

    for path in &doc.paths {
        render_path(path, config, &mut output);
    }

    output.push_str("</svg>");
    output
}

/// Render one path element.
fn render_path(path: &SvgPath, config: &RenderConfig, output: &mut String) {
    output.push_str("<path");
    for (name, value) in path.attributes() {
        output.push(' ');
        output.push_str(name);
        output.push_str("=\"");
        output.push_str(&escape_attr(value));
        output.push('"');
    }
    if config.minify {
        output.push_str("/>");
    } else {
        output.push_str(" />\n");
    }
}

/// Escape characters that cannot appear in a double-quoted attribute value.
///
/// `&` is left alone: values come from XML source, where entities are
/// already escaped, and path data must stay byte-for-byte.
fn escape_attr(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            _ => result.push(c),
        }
    }
    result
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(paths: Vec<SvgPath>) -> SvgDocument {
        SvgDocument {
            width: "48".into(),
            height: "48".into(),
            viewport_width: "24".into(),
            viewport_height: "24".into(),
            paths: SmallVec::from_vec(paths),
        }
    }

    #[test]
    fn test_render_pretty() {
        let svg = render_document(
            &doc(vec![SvgPath {
                d: "M0 0L10 10".into(),
                fill: Some("#112233FF".into()),
                ..Default::default()
            }]),
            &RenderConfig::PRETTY,
        );
        assert_eq!(
            svg,
            "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\"\n     width=\"48\"\n     height=\"48\"\n     viewBox=\"0 0 24 24\">\n\
             <path d=\"M0 0L10 10\" fill=\"#112233FF\" />\n\
             </svg>"
        );
    }

    #[test]
    fn test_render_minified() {
        let svg = render_document(&doc(vec![]), &RenderConfig::MINIFIED);
        assert_eq!(
            svg,
            r#"<?xml version="1.0" encoding="utf-8"?><svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24"></svg>"#
        );
    }

    #[test]
    fn test_attribute_order() {
        let path = SvgPath {
            d: "M1 1".into(),
            fill: Some("red".into()),
            fill_opacity: Some("0.5".into()),
            stroke: Some("blue".into()),
            stroke_width: Some("2".into()),
            stroke_opacity: Some("0.25".into()),
        };
        let names: Vec<_> = path.attributes().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            ["d", "fill", "fill-opacity", "stroke", "stroke-width", "stroke-opacity"]
        );
    }

    #[test]
    fn test_absent_attributes_skipped() {
        let svg = render_document(
            &doc(vec![SvgPath {
                d: "M1 1".into(),
                ..Default::default()
            }]),
            &RenderConfig::MINIFIED,
        );
        assert!(svg.contains(r#"<path d="M1 1"/>"#));
        assert!(!svg.contains("fill"));
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
        assert_eq!(escape_attr("a<b"), "a&lt;b");
        assert_eq!(escape_attr("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn test_config() {
        let config = RenderConfig::default();
        assert_eq!(config.theme_color(), THEME_PLACEHOLDER);
        assert_eq!(config.fallback_fill(), FALLBACK_COLOR);

        let config = RenderConfig::new(true)
            .with_theme_color("#9E9E9E")
            .with_fallback_fill("currentColor");
        assert!(config.minify);
        assert_eq!(config.theme_color(), "#9E9E9E");
        assert_eq!(config.fallback_fill(), "currentColor");
    }

    #[test]
    fn test_size() {
        let mut d = doc(vec![]);
        assert_eq!(d.size(), Some((48.0, 48.0)));
        d.height = "48sp".into();
        assert_eq!(d.size(), None);
        assert_eq!(parse_size(" 12.5 "), Some(12.5));
        assert_eq!(parse_size("inf"), None);
    }
}
