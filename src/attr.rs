//! Attribute lists for vector drawable elements
//!
//! Attributes are kept as an ordered `Vec` of name/value pairs exactly as they
//! appear in the tag. Lookups match names ASCII case-insensitively and the
//! first occurrence wins, so a repeated attribute never overrides an earlier one.

use compact_str::CompactString;

use crate::tokenize::parse_attributes;

// =============================================================================
// Attribute names
// =============================================================================

/// `<vector>` viewport width
pub const VIEWPORT_WIDTH: &str = "android:viewportWidth";
/// `<vector>` viewport height
pub const VIEWPORT_HEIGHT: &str = "android:viewportHeight";
/// `<vector>` intrinsic width, usually with a `dp` suffix
pub const WIDTH: &str = "android:width";
/// `<vector>` intrinsic height, usually with a `dp` suffix
pub const HEIGHT: &str = "android:height";
/// `<vector>` tint, used as the default fill of every path
pub const TINT: &str = "android:tint";

/// `<path>` path commands
pub const PATH_DATA: &str = "android:pathData";
/// `<path>` fill color
pub const FILL_COLOR: &str = "android:fillColor";
/// `<path>` stroke color
pub const STROKE_COLOR: &str = "android:strokeColor";
/// `<path>` stroke width
pub const STROKE_WIDTH: &str = "android:strokeWidth";
/// `<path>` fill opacity, 0.0 to 1.0
pub const FILL_ALPHA: &str = "android:fillAlpha";
/// `<path>` stroke opacity, 0.0 to 1.0
pub const STROKE_ALPHA: &str = "android:strokeAlpha";

// =============================================================================
// Attrs
// =============================================================================

/// Element attributes as ordered name/value pairs
pub type Attrs = Vec<(CompactString, CompactString)>;

/// Extension trait for attribute lookups on [`Attrs`]
pub trait AttrsExt {
    /// Get the first attribute value whose name matches, ignoring ASCII case
    fn get_attr(&self, name: &str) -> Option<&str>;

    /// Like [`get_attr`](Self::get_attr), but an empty value counts as absent
    fn get_present(&self, name: &str) -> Option<&str> {
        self.get_attr(name).filter(|value| !value.is_empty())
    }

    /// Check if an attribute exists
    fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }
}

impl AttrsExt for Attrs {
    fn get_attr(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Extract one attribute value from a raw attribute block.
///
/// `block` is the text between a tag name and its closing `>`, for example
/// `android:width="24dp" android:height="24dp"`. Returns the first value for
/// `name` with its quotes removed, or `None` when the attribute is absent.
pub fn extract_attribute(block: &str, name: &str) -> Option<CompactString> {
    parse_attributes(block)
        .into_iter()
        .find(|(k, _)| k.eq_ignore_ascii_case(name))
        .map(|(_, v)| v)
}

// =============================================================================
// Tests
// =============================================================================
