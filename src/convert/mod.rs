//! Vector drawable to SVG conversion
//!
//! # Flow
//!
//! ```text
//! source text
//!     │
//!     ▼ parse_drawable()
//! VectorDrawable   (root sizing + every <path>, unresolved)
//!     │
//!     ▼ lower()
//! SvgDocument      (fills resolved, colors translated)
//!     │
//!     ▼ render_document()
//! SVG text
//! ```
//!
//! The public entry point [`convert`] folds every failure into `None`.
//! [`try_convert`] keeps the reason.

mod vector;

pub use self::vector::{lower, parse_drawable};

use tracing::debug;

use crate::error::ConvertResult;
use crate::render::{render_document, RenderConfig};

// =============================================================================
// Public API
// =============================================================================

/// Convert a vector drawable to SVG text.
///
/// Returns `None` if the text has no `<vector>` root or is malformed.
///
/// # Example
///
/// ```
/// let xml = r##"<vector android:viewportWidth="24" android:viewportHeight="24">
///     <path android:pathData="M0 0L10 10" android:fillColor="#FF112233"/>
/// </vector>"##;
///
/// let svg = vector2svg::convert(xml).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 24 24""#));
/// assert!(svg.contains(r##"<path d="M0 0L10 10" fill="#112233FF" />"##));
/// ```
pub fn convert(source: &str) -> Option<String> {
    convert_with_config(source, &RenderConfig::default())
}

/// Convert with a custom render configuration.
pub fn convert_with_config(source: &str, config: &RenderConfig) -> Option<String> {
    match try_convert_with_config(source, config) {
        Ok(svg) => Some(svg),
        Err(err) => {
            debug!(%err, "vector drawable conversion failed");
            None
        }
    }
}

/// Convert, keeping the failure reason.
///
/// # Errors
///
/// [`ConvertError::NotRecognized`](crate::ConvertError::NotRecognized) when
/// there is no `<vector>` root, and
/// [`ConvertError::UnterminatedTag`](crate::ConvertError::UnterminatedTag)
/// when the root tag is never closed.
pub fn try_convert(source: &str) -> ConvertResult<String> {
    try_convert_with_config(source, &RenderConfig::default())
}

/// Convert with a custom render configuration, keeping the failure reason.
///
/// # Errors
///
/// See [`try_convert`].
pub fn try_convert_with_config(source: &str, config: &RenderConfig) -> ConvertResult<String> {
    let drawable = parse_drawable(source)?;
    let svg = lower(&drawable, config);
    Ok(render_document(&svg, config))
}
