//! Root and path descriptors
//!
//! Descriptors are built from tokenized tags. Values that are present but
//! empty are treated as absent throughout, so `android:tint=""` means no tint.

use compact_str::CompactString;

use crate::attr::{self, AttrsExt};
use crate::span::SourceSpan;
use crate::tokenize::Tag;

/// Viewport size used when `viewportWidth`/`viewportHeight` are missing
pub const DEFAULT_VIEWPORT: &str = "24";

// =============================================================================
// RootDescriptor
// =============================================================================

/// Sizing and tint of the `<vector>` root element
///
/// All dimensions are resolved: defaults applied and the `dp` suffix removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootDescriptor {
    /// Width of the drawing coordinate space
    pub viewport_width: CompactString,
    /// Height of the drawing coordinate space
    pub viewport_height: CompactString,
    /// Output width, defaulting to the viewport width
    pub width: CompactString,
    /// Output height, defaulting to the viewport height
    pub height: CompactString,
    /// Default fill for paths without their own `fillColor`
    pub tint: Option<CompactString>,
    /// Location of the `<vector>` tag
    pub span: SourceSpan,
}

impl RootDescriptor {
    /// Build from the `<vector>` opening tag
    pub fn from_tag(tag: &Tag<'_>) -> Self {
        let attrs = &tag.attrs;
        let viewport_width = attrs.get_present(attr::VIEWPORT_WIDTH).unwrap_or(DEFAULT_VIEWPORT);
        let viewport_height = attrs.get_present(attr::VIEWPORT_HEIGHT).unwrap_or(DEFAULT_VIEWPORT);

        // `width="dp"` strips to nothing and falls back like a missing width
        let width = attrs
            .get_present(attr::WIDTH)
            .map(strip_dp)
            .filter(|w| !w.is_empty())
            .unwrap_or(viewport_width);
        let height = attrs
            .get_present(attr::HEIGHT)
            .map(strip_dp)
            .filter(|h| !h.is_empty())
            .unwrap_or(viewport_height);

        Self {
            viewport_width: viewport_width.into(),
            viewport_height: viewport_height.into(),
            width: width.into(),
            height: height.into(),
            tint: attrs.get_present(attr::TINT).map(CompactString::from),
            span: tag.span,
        }
    }
}

/// Remove one trailing `dp` density suffix.
///
/// Only `dp` is stripped, and only in lowercase. `48sp`, `48px` and `48DP`
/// pass through unchanged.
pub fn strip_dp(value: &str) -> &str {
    value.strip_suffix("dp").unwrap_or(value)
}

// =============================================================================
// PathDescriptor
// =============================================================================

/// Geometry and paint attributes of one `<path>` element, unresolved
///
/// Colors are kept as written; tint fallback and color translation happen
/// when the drawable is lowered to SVG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathDescriptor {
    /// Path commands, copied verbatim
    pub path_data: CompactString,
    /// Fill color token, if set on the path itself
    pub fill_color: Option<CompactString>,
    /// Stroke color token
    pub stroke_color: Option<CompactString>,
    /// Stroke width
    pub stroke_width: Option<CompactString>,
    /// Fill opacity
    pub fill_alpha: Option<CompactString>,
    /// Stroke opacity
    pub stroke_alpha: Option<CompactString>,
    /// Location of the `<path>` tag
    pub span: SourceSpan,
}

impl PathDescriptor {
    /// Build from a `<path>` tag.
    ///
    /// Returns `None` when the tag has no `pathData`; such a path draws nothing.
    pub fn from_tag(tag: &Tag<'_>) -> Option<Self> {
        let attrs = &tag.attrs;
        let get = |name| attrs.get_present(name).map(CompactString::from);

        Some(Self {
            path_data: get(attr::PATH_DATA)?,
            fill_color: get(attr::FILL_COLOR),
            stroke_color: get(attr::STROKE_COLOR),
            stroke_width: get(attr::STROKE_WIDTH),
            fill_alpha: get(attr::FILL_ALPHA),
            stroke_alpha: get(attr::STROKE_ALPHA),
            span: tag.span,
        })
    }

    /// Whether the path is stroked
    pub fn has_stroke(&self) -> bool {
        self.stroke_color.is_some()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::find_tag;

    fn root(source: &str) -> RootDescriptor {
        RootDescriptor::from_tag(&find_tag(source, "vector").unwrap().unwrap())
    }

    fn path(source: &str) -> Option<PathDescriptor> {
        PathDescriptor::from_tag(&find_tag(source, "path").unwrap().unwrap())
    }

    #[test]
    fn test_root_defaults() {
        let r = root("<vector>");
        assert_eq!(r.viewport_width, "24");
        assert_eq!(r.viewport_height, "24");
        assert_eq!(r.width, "24");
        assert_eq!(r.height, "24");
        assert_eq!(r.tint, None);
    }

    #[test]
    fn test_root_size_defaults_to_viewport() {
        let r = root(r#"<vector android:viewportWidth="108" android:viewportHeight="54">"#);
        assert_eq!(r.width, "108");
        assert_eq!(r.height, "54");
    }

    #[test]
    fn test_root_strips_dp_only() {
        let r = root(r#"<vector android:width="48dp" android:height="32sp">"#);
        assert_eq!(r.width, "48");
        assert_eq!(r.height, "32sp");

        let r = root(r#"<vector android:width="10px" android:height="10DP">"#);
        assert_eq!(r.width, "10px");
        assert_eq!(r.height, "10DP");
    }

    #[test]
    fn test_root_empty_values_fall_back() {
        let r = root(
            r#"<vector android:width="dp" android:height="" android:viewportWidth="" android:tint="">"#,
        );
        assert_eq!(r.viewport_width, "24");
        assert_eq!(r.width, "24");
        assert_eq!(r.height, "24");
        assert_eq!(r.tint, None);
    }

    #[test]
    fn test_strip_dp() {
        assert_eq!(strip_dp("24dp"), "24");
        assert_eq!(strip_dp("24.5dp"), "24.5");
        assert_eq!(strip_dp("24dpdp"), "24dp");
        assert_eq!(strip_dp("24"), "24");
    }

    #[test]
    fn test_path_requires_path_data() {
        assert!(path(r##"<path android:fillColor="#FFF"/>"##).is_none());
        assert!(path(r#"<path android:pathData=""/>"#).is_none());
    }

    #[test]
    fn test_path_attributes() {
        let p = path(
            r##"<path android:pathData="M1 1" android:strokeColor="#000" android:strokeWidth="2" android:fillAlpha="0.5"/>"##,
        )
        .unwrap();
        assert_eq!(p.path_data, "M1 1");
        assert_eq!(p.fill_color, None);
        assert_eq!(p.stroke_color.as_deref(), Some("#000"));
        assert_eq!(p.stroke_width.as_deref(), Some("2"));
        assert_eq!(p.fill_alpha.as_deref(), Some("0.5"));
        assert_eq!(p.stroke_alpha, None);
        assert!(p.has_stroke());
    }
}
