//! Deterministic content hashing
//!
//! Provides cross-process deterministic hashing using blake3, used to key
//! the conversion cache by source text.

// =============================================================================
// StableHasher - Builder Pattern
// =============================================================================

/// A deterministic hasher using blake3
///
/// Unlike `std::hash::Hasher`, this produces the same output across
/// process restarts for the same input.
#[derive(Debug, Clone)]
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    /// Create a new StableHasher
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: blake3::Hasher::new(),
        }
    }

    /// Update with raw bytes
    #[inline]
    pub fn update(mut self, data: &[u8]) -> Self {
        self.inner.update(data);
        self
    }

    /// Update with a string, length-prefixed so adjacent strings cannot collide
    #[inline]
    pub fn update_str(self, s: &str) -> Self {
        self.update_usize(s.len()).update(s.as_bytes())
    }

    /// Update with a usize value (little-endian, widened to 64 bits)
    #[inline]
    pub fn update_usize(self, v: usize) -> Self {
        self.update(&(v as u64).to_le_bytes())
    }

    /// Finish and return the full 32-byte digest
    #[inline]
    pub fn finish(self) -> [u8; 32] {
        *self.inner.finalize().as_bytes()
    }
}

impl Default for StableHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = StableHasher::new().update_str("<vector>").finish();
        let b = StableHasher::new().update_str("<vector>").finish();
        assert_eq!(a, b);
    }

    #[test]
    fn test_length_prefix_separates_fields() {
        let a = StableHasher::new().update_str("ab").update_str("c").finish();
        let b = StableHasher::new().update_str("a").update_str("bc").finish();
        assert_ne!(a, b);
    }
}
