//! vector2svg - Android vector drawable to SVG conversion
//!
//! ## Core Concepts
//!
//! **Tolerant conversion**: the input is scanned for a `<vector>` root and
//! `<path>` elements rather than parsed as strict XML, so half-edited files
//! still convert. Everything the SVG needs is always present: missing sizes
//! default to the viewport and missing fills fall back to the root tint.
//!
//! **Folded failure**: [`convert`] returns `Option<String>`. Use
//! [`try_convert`] to see why a document was rejected.
//!
//! ## Modules
//! - `classify`: cheap `<vector` pre-check
//! - `tokenize` / `attr`: tag scanning and attribute lookup
//! - `color`: `#AARRGGBB` → `#RRGGBBAA` and theme references
//! - `node`: parsed root and path descriptors
//! - `convert`: parsing and lowering to the SVG model
//! - `render`: SVG output model and text rendering
//! - `preview`: zoom/ruler/crosshair state for interactive previews
//! - `cache`, `data_uri`, `batch`: helpers for callers
//!
//! ## Usage
//!
//! ```
//! use vector2svg::{convert, looks_like_vector_drawable};
//!
//! let xml = r#"<vector android:width="48dp" android:height="48dp"
//!                      android:viewportWidth="48" android:viewportHeight="48">
//!     <path android:pathData="M1 1" android:fillColor="none"/>
//! </vector>"#;
//!
//! assert!(looks_like_vector_drawable(xml));
//! let svg = convert(xml).unwrap();
//! assert!(svg.contains(r#"width="48""#));
//! assert!(svg.contains(r#"<path d="M1 1" />"#));
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Attribute names and lookups
pub mod attr;

/// Document pre-check
pub mod classify;

/// Color token translation
pub mod color;

/// Conversion engine
pub mod convert;

/// Error types
pub mod error;

/// Parsed drawable model
pub mod node;

/// SVG output model and rendering
pub mod render;

/// Source span information
pub mod span;

/// Tag scanning
pub mod tokenize;

// =============================================================================
// Caller helpers
// =============================================================================

/// Preview viewport state
pub mod preview;

/// `data:` URI encoding
pub mod data_uri;

/// Content hashing for cache keys
#[cfg(feature = "cache")]
pub mod hash;

/// Conversion cache
#[cfg(feature = "cache")]
pub mod cache;

/// Parallel batch conversion
#[cfg(feature = "parallel")]
pub mod batch;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Entry points
pub use classify::looks_like_vector_drawable;
pub use convert::{convert, convert_with_config, try_convert, try_convert_with_config};

// Model
pub use node::{PathDescriptor, RootDescriptor, VectorDrawable};
pub use render::{RenderConfig, SvgDocument, SvgPath};

// Building blocks
pub use attr::{extract_attribute, Attrs, AttrsExt};
pub use color::translate_color;

// Span
pub use span::SourceSpan;

// Error types
pub use error::{ConvertError, ConvertResult};

// Helpers
pub use data_uri::svg_data_uri;
pub use preview::{PreviewConfig, Viewport};

#[cfg(feature = "cache")]
pub use cache::{CacheEntry, CacheKey, SharedSvgCache};

#[cfg(feature = "parallel")]
pub use batch::convert_all;

// =============================================================================
// Tests
// =============================================================================
