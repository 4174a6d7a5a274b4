//! Parsing and lowering of Android vector drawables
//!
//! Parsing finds the first `<vector>` tag for sizing and then scans the whole
//! text for `<path>` tags. The scan is not scoped to the root's children:
//! paths outside the root, or inside groups and comments, are picked up too.

use tracing::{debug, trace};

use crate::color::translate_color_with;
use crate::error::{ConvertError, ConvertResult};
use crate::node::{PathDescriptor, RootDescriptor, VectorDrawable};
use crate::render::{RenderConfig, SvgDocument, SvgPath};
use crate::tokenize::{find_tag, TagScanner};

/// Root element name
pub(crate) const VECTOR_TAG: &str = "vector";
/// Path element name
pub(crate) const PATH_TAG: &str = "path";

// =============================================================================
// Parsing
// =============================================================================

/// Parse source text into a [`VectorDrawable`].
///
/// # Errors
///
/// `NotRecognized` without a `<vector>` tag; `UnterminatedTag` if the root
/// tag has no closing `>`. A path tag cut off at end of input ends the scan
/// and keeps the paths found before it.
pub fn parse_drawable(source: &str) -> ConvertResult<VectorDrawable> {
    let root_tag = find_tag(source, VECTOR_TAG)?.ok_or(ConvertError::NotRecognized)?;
    let mut drawable = VectorDrawable::new(RootDescriptor::from_tag(&root_tag));

    for tag in TagScanner::new(source, PATH_TAG) {
        let tag = match tag {
            Ok(tag) => tag,
            Err(err) => {
                debug!(%err, "stopping path scan");
                break;
            }
        };
        match PathDescriptor::from_tag(&tag) {
            Some(path) => drawable.paths.push(path),
            None => {
                debug!(span = %tag.span, "skipping <path> without pathData");
                drawable.skipped += 1;
            }
        }
    }

    debug!(
        paths = drawable.path_count(),
        skipped = drawable.skipped,
        "parsed vector drawable"
    );
    Ok(drawable)
}

// =============================================================================
// Lowering
// =============================================================================

/// `fillColor` value that disables the fill
const NO_FILL: &str = "none";

/// Internal state for lowering
struct Converter<'a> {
    config: &'a RenderConfig,
    tint: Option<&'a str>,
}

impl<'a> Converter<'a> {
    fn new(drawable: &'a VectorDrawable, config: &'a RenderConfig) -> Self {
        Self {
            config,
            tint: drawable.root.tint.as_deref(),
        }
    }

    fn color(&self, token: &str) -> String {
        translate_color_with(token, self.config.theme_color())
    }

    /// Resolve paint for one path.
    ///
    /// Fill falls back to the root tint and then to the configured fallback.
    /// A literal `none` omits the fill attribute, and its opacity with it.
    fn convert_path(&self, path: &PathDescriptor) -> SvgPath {
        let fill = path
            .fill_color
            .as_deref()
            .or(self.tint)
            .unwrap_or_else(|| self.config.fallback_fill());

        let mut out = SvgPath {
            d: path.path_data.to_string(),
            ..SvgPath::default()
        };

        if fill != NO_FILL {
            out.fill = Some(self.color(fill));
            out.fill_opacity = path.fill_alpha.as_deref().map(str::to_string);
        }

        if let Some(stroke) = path.stroke_color.as_deref() {
            out.stroke = Some(self.color(stroke));
            out.stroke_width = path.stroke_width.as_deref().map(str::to_string);
            out.stroke_opacity = path.stroke_alpha.as_deref().map(str::to_string);
        }

        trace!(span = %path.span, d = %out.d, "converted path");
        out
    }
}

/// Lower a parsed drawable to the SVG output model.
pub fn lower(drawable: &VectorDrawable, config: &RenderConfig) -> SvgDocument {
    let converter = Converter::new(drawable, config);
    let root = &drawable.root;

    SvgDocument {
        width: root.width.to_string(),
        height: root.height.to_string(),
        viewport_width: root.viewport_width.to_string(),
        viewport_height: root.viewport_height.to_string(),
        paths: drawable.iter().map(|p| converter.convert_path(p)).collect(),
    }
}

// =============================================================================
// Tests
// =============================================================================
