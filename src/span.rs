//! Source span for tags found in the input text
//!
//! A `SourceSpan` is the byte range of one opening tag, from its `<` to its
//! closing `>` inclusive. Spans are carried on parsed descriptors and errors
//! so diagnostics can point back into the original buffer.

use std::fmt;

/// Byte range of a tag in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceSpan {
    start: usize,
    end: usize,
}

impl SourceSpan {
    /// Create a span covering `start..end`
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create an open span starting at `start` and running to end of input
    pub const fn open(start: usize, input_len: usize) -> Self {
        Self { start, end: input_len }
    }

    /// Byte offset of the first character (`<`)
    pub fn start(&self) -> usize {
        self.start
    }

    /// Byte offset one past the last character
    pub fn end(&self) -> usize {
        self.end
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Slice the spanned text out of `source`
    ///
    /// Returns `None` if the span does not lie on character boundaries of `source`.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
