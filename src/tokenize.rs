//! Lightweight markup tokenizer
//!
//! This is not an XML parser. It finds opening tags by name anywhere in the
//! text and splits their attribute blocks into ordered name/value pairs.
//! Nesting, comments and closing tags are ignored, which keeps the converter
//! tolerant of partial documents while editing.
//!
//! Tag ends are found quote-aware: a `>` inside a quoted attribute value does
//! not terminate the tag. A tag whose quotes never balance (usually one being
//! typed) ends at the first plain `>` instead.

use compact_str::CompactString;

use crate::attr::Attrs;
use crate::error::{ConvertError, ConvertResult};
use crate::span::SourceSpan;

// =============================================================================
// Tag
// =============================================================================

/// One opening (or self-closing) tag found in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name as matched
    pub name: &'a str,
    /// Raw attribute block between the name and the closing `>` (or `/>`)
    pub block: &'a str,
    /// Parsed attributes in source order
    pub attrs: Attrs,
    /// Byte range of the whole tag
    pub span: SourceSpan,
    /// Whether the tag ended with `/>`
    pub self_closing: bool,
}

/// Find the first opening tag named `name`.
///
/// Returns `Ok(None)` if there is no such tag, and an error if the tag is
/// found but no `>` follows it.
pub fn find_tag<'a>(source: &'a str, name: &'a str) -> ConvertResult<Option<Tag<'a>>> {
    TagScanner::new(source, name).next().transpose()
}

// =============================================================================
// TagScanner
// =============================================================================

/// Iterator over every opening tag with a given name, in document order
///
/// After an unterminated tag is reported the scanner is exhausted.
#[derive(Debug, Clone)]
pub struct TagScanner<'a> {
    source: &'a str,
    name: &'a str,
    pos: usize,
}

impl<'a> TagScanner<'a> {
    /// Scan `source` for tags named `name` (case-sensitive, like XML)
    pub fn new(source: &'a str, name: &'a str) -> Self {
        Self { source, name, pos: 0 }
    }

    /// Find the next `<name` whose name is followed by a tag boundary.
    ///
    /// Returns the offset of `<` and the offset just past the name.
    fn next_start(&mut self) -> Option<(usize, usize)> {
        let bytes = self.source.as_bytes();
        while self.pos < bytes.len() {
            let rel = self.source[self.pos..].find('<')?;
            let start = self.pos + rel;
            let name_end = start + 1 + self.name.len();
            self.pos = start + 1;

            if !self.source[start + 1..].starts_with(self.name) {
                continue;
            }
            // `<pathology` is not `<path`; end of input is left to the caller
            match bytes.get(name_end) {
                None => return Some((start, name_end)),
                Some(&b) if is_name_boundary(b) => return Some((start, name_end)),
                Some(_) => continue,
            }
        }
        None
    }
}

impl<'a> Iterator for TagScanner<'a> {
    type Item = ConvertResult<Tag<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, name_end) = self.next_start()?;
        let source = self.source;

        let Some(close) = find_tag_end(source, name_end) else {
            self.pos = source.len();
            return Some(Err(ConvertError::unterminated(
                self.name,
                SourceSpan::open(start, source.len()),
            )));
        };
        self.pos = close + 1;

        let inner = &source[name_end..close];
        let (block, self_closing) = match inner.strip_suffix('/') {
            Some(block) => (block, true),
            None => (inner, false),
        };

        Some(Ok(Tag {
            name: &source[start + 1..name_end],
            block,
            attrs: parse_attributes(block),
            span: SourceSpan::new(start, close + 1),
            self_closing,
        }))
    }
}

/// Characters that may follow a tag name
fn is_name_boundary(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b'>' || b == b'/'
}

/// Find the `>` that closes a tag, skipping quoted values.
///
/// Falls back to the first `>` when a quote is left open.
fn find_tag_end(source: &str, from: usize) -> Option<usize> {
    let tail = &source.as_bytes()[from..];
    let mut quote: Option<u8> = None;
    for (offset, &b) in tail.iter().enumerate() {
        match (quote, b) {
            (Some(q), _) if b == q => quote = None,
            (Some(_), _) => {}
            (None, b'"' | b'\'') => quote = Some(b),
            (None, b'>') => return Some(from + offset),
            (None, _) => {}
        }
    }
    tail.iter().position(|&b| b == b'>').map(|offset| from + offset)
}

// =============================================================================
// Attribute parsing
// =============================================================================

/// Parse a markup attribute block into ordered name/value pairs
///
/// Input: `android:width="24dp" android:tint='#FFF' flag`
/// Output: `[("android:width", "24dp"), ("android:tint", "#FFF"), ("flag", "")]`
///
/// Whitespace around `=` is allowed and unquoted values run to the next
/// whitespace. An attribute whose quoted value is never closed is dropped.
pub fn parse_attributes(s: &str) -> Attrs {
    let mut attrs = Attrs::new();
    let mut chars = s.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() || c == '/' {
            chars.next();
            continue;
        }

        // Attribute name
        let mut end = start;
        while let Some(&(i, c)) = chars.peek() {
            if c == '=' || c.is_whitespace() {
                break;
            }
            end = i + c.len_utf8();
            chars.next();
        }
        let name = CompactString::from(&s[start..end]);

        skip_whitespace(&mut chars);
        if chars.peek().map(|&(_, c)| c) != Some('=') {
            // Boolean attribute
            attrs.push((name, CompactString::default()));
            continue;
        }
        chars.next();
        skip_whitespace(&mut chars);

        let value = match chars.peek().copied() {
            Some((i, quote @ ('"' | '\''))) => {
                chars.next();
                let value_start = i + 1;
                let Some((value_end, _)) = chars.by_ref().find(|&(_, c)| c == quote) else {
                    break;
                };
                &s[value_start..value_end]
            }
            Some((i, _)) => {
                let mut value_end = s.len();
                while let Some(&(j, c)) = chars.peek() {
                    if c.is_whitespace() {
                        value_end = j;
                        break;
                    }
                    chars.next();
                }
                &s[i..value_end]
            }
            None => "",
        };

        attrs.push((name, CompactString::from(value)));
    }

    attrs
}

fn skip_whitespace(chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>) {
    while chars.peek().is_some_and(|&(_, c)| c.is_whitespace()) {
        chars.next();
    }
}

// =============================================================================
// Tests
// =============================================================================
