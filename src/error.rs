//! Error types for vector drawable conversion.
//!
//! The public [`convert`](crate::convert) entry point folds every variant into
//! `None`; the variants stay distinguishable through
//! [`try_convert`](crate::try_convert) for diagnostics and tests.

use compact_str::CompactString;
use thiserror::Error;

use crate::span::SourceSpan;

/// Errors that can occur while converting a vector drawable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    /// No `<vector` root tag was found in the input
    #[error("not a vector drawable: no <vector> root element found")]
    NotRecognized,

    /// An opening tag ran to end of input without a closing `>`
    #[error("unterminated <{tag}> tag at {span}")]
    UnterminatedTag {
        /// Tag name (`vector` or `path`)
        tag: CompactString,
        /// Span from the tag's `<` to end of input
        span: SourceSpan,
    },
}

/// Result type alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;

impl ConvertError {
    /// Create an unterminated tag error.
    pub fn unterminated(tag: &str, span: SourceSpan) -> Self {
        Self::UnterminatedTag {
            tag: CompactString::from(tag),
            span,
        }
    }

    /// Whether this error means the input is not a vector drawable at all,
    /// as opposed to a recognized but malformed one.
    pub fn is_not_recognized(&self) -> bool {
        matches!(self, Self::NotRecognized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::NotRecognized;
        assert_eq!(
            err.to_string(),
            "not a vector drawable: no <vector> root element found"
        );

        let err = ConvertError::unterminated("path", SourceSpan::new(12, 40));
        assert_eq!(err.to_string(), "unterminated <path> tag at 12..40");
        assert!(!err.is_not_recognized());
    }

    #[test]
    fn test_error_is_send_sync() {
        static_assertions::assert_impl_all!(ConvertError: Send, Sync);
    }
}
