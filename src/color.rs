//! Color token translation
//!
//! Android colors put alpha first (`#AARRGGBB`) while CSS/SVG puts it last
//! (`#RRGGBBAA`). Resource and theme references (`@color/accent`,
//! `?attr/colorControlNormal`) cannot be resolved here and become a neutral
//! placeholder.

/// Color used when no color is given at all
pub const FALLBACK_COLOR: &str = "#000000";

/// Placeholder for `@color/` and `?` references (Material grey 600)
pub const THEME_PLACEHOLDER: &str = "#757575";

/// Translate an Android color token to its SVG form.
///
/// Total over all input:
/// - `""` becomes [`FALLBACK_COLOR`]
/// - `@color/…` and `?…` become [`THEME_PLACEHOLDER`]
/// - `#AARRGGBB` becomes `#RRGGBBAA`
/// - anything else (`#RRGGBB`, `#RGB`, named colors) is returned unchanged
pub fn translate_color(token: &str) -> String {
    translate_color_with(token, THEME_PLACEHOLDER)
}

/// Like [`translate_color`], with a custom placeholder for theme references.
pub fn translate_color_with(token: &str, placeholder: &str) -> String {
    if token.is_empty() {
        return FALLBACK_COLOR.to_string();
    }
    if is_theme_reference(token) {
        return placeholder.to_string();
    }
    if let Some(hex) = token.strip_prefix('#')
        && hex.len() == 8
        && hex.bytes().all(|b| b.is_ascii_hexdigit())
    {
        let (alpha, rgb) = hex.split_at(2);
        return format!("#{rgb}{alpha}");
    }
    token.to_string()
}

/// Check if a token names an external resource or theme attribute
pub fn is_theme_reference(token: &str) -> bool {
    token.starts_with("@color/") || token.starts_with('?')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argb_reordered() {
        assert_eq!(translate_color("#FF112233"), "#112233FF");
        assert_eq!(translate_color("#80abcdef"), "#abcdef80");
        assert_eq!(translate_color("#00000000"), "#00000000");
    }

    #[test]
    fn test_argb_round_trip_all_alphas() {
        for alpha in ["00", "7F", "80", "ff", "Aa"] {
            let token = format!("#{alpha}1A2b3C");
            assert_eq!(translate_color(&token), format!("#1A2b3C{alpha}"));
        }
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(translate_color("#112233"), "#112233");
        assert_eq!(translate_color("#FFF"), "#FFF");
        assert_eq!(translate_color("red"), "red");
        assert_eq!(translate_color("none"), "none");
        // Nine digits and non-hex eight-character tokens are not ARGB
        assert_eq!(translate_color("#FF1122334"), "#FF1122334");
        assert_eq!(translate_color("#GG112233"), "#GG112233");
    }

    #[test]
    fn test_idempotent_on_compatible_tokens() {
        for token in ["#112233", "#abcdef", "red", "transparent", "#FFF"] {
            let once = translate_color(token);
            assert_eq!(translate_color(&once), once);
        }
    }

    #[test]
    fn test_theme_references() {
        assert_eq!(translate_color("@color/foo"), THEME_PLACEHOLDER);
        assert_eq!(translate_color("@color/colorPrimaryDark"), THEME_PLACEHOLDER);
        assert_eq!(translate_color("?attr/bar"), THEME_PLACEHOLDER);
        assert_eq!(translate_color("?android:attr/textColorPrimary"), THEME_PLACEHOLDER);
        assert_eq!(translate_color_with("@color/foo", "#FF00FF"), "#FF00FF");
        // Other resource types are not color references
        assert_eq!(translate_color("@drawable/foo"), "@drawable/foo");
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(translate_color(""), FALLBACK_COLOR);
    }
}
