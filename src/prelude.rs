//! Prelude module for common imports.
//!
//! ```
//! use vector2svg::prelude::*;
//!
//! assert!(looks_like_vector_drawable("<vector>"));
//! ```

// Entry points
pub use crate::classify::looks_like_vector_drawable;
pub use crate::convert::{
    convert, convert_with_config, lower, parse_drawable, try_convert, try_convert_with_config,
};

// Attributes
pub use crate::attr::{extract_attribute, Attrs, AttrsExt};

// Colors
pub use crate::color::{translate_color, translate_color_with};

// Model
pub use crate::node::{PathDescriptor, RootDescriptor, VectorDrawable};

// Render
pub use crate::render::{render_document, RenderConfig, SvgDocument, SvgPath};

// Span
pub use crate::span::SourceSpan;

// Error
pub use crate::error::{ConvertError, ConvertResult};

// Preview
pub use crate::data_uri::{svg_data_uri, vector_data_uri};
pub use crate::preview::{Axis, PreviewConfig, PreviewKey, RulerTick, Viewport};

// Cache
#[cfg(feature = "cache")]
pub use crate::cache::{CacheEntry, CacheKey, SharedSvgCache};

// Batch
#[cfg(feature = "parallel")]
pub use crate::batch::{convert_all, convert_all_with_config, try_convert_all};
