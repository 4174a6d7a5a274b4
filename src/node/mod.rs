//! Parsed vector drawable model.
//!
//! A [`VectorDrawable`] is the normalized view of one source document: the
//! sizing attributes of the `<vector>` root and every `<path>` found in the
//! text, in document order. Descriptors are built fresh for each conversion
//! and hold only owned strings, so they can outlive the source buffer.

mod document;
mod element;

pub use document::VectorDrawable;
pub use element::{strip_dp, PathDescriptor, RootDescriptor, DEFAULT_VIEWPORT};

use smallvec::SmallVec;

/// Paths of one drawable. Icons rarely have more than a handful.
pub type Paths = SmallVec<[PathDescriptor; 8]>;
