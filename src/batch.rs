//! Parallel batch conversion (feature `parallel`).
//!
//! Each document is converted independently on the rayon pool. Results come
//! back in input order.

use rayon::prelude::*;

use crate::convert::{convert_with_config, try_convert_with_config};
use crate::error::ConvertResult;
use crate::render::RenderConfig;

/// Convert many documents in parallel with the default config.
pub fn convert_all<S: AsRef<str> + Sync>(sources: &[S]) -> Vec<Option<String>> {
    convert_all_with_config(sources, &RenderConfig::default())
}

/// Convert many documents in parallel.
pub fn convert_all_with_config<S: AsRef<str> + Sync>(
    sources: &[S],
    config: &RenderConfig,
) -> Vec<Option<String>> {
    sources
        .par_iter()
        .map(|source| convert_with_config(source.as_ref(), config))
        .collect()
}

/// Convert many documents in parallel, keeping failure reasons.
pub fn try_convert_all<S: AsRef<str> + Sync>(
    sources: &[S],
    config: &RenderConfig,
) -> Vec<ConvertResult<String>> {
    sources
        .par_iter()
        .map(|source| try_convert_with_config(source.as_ref(), config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;

    #[test]
    fn test_convert_all_preserves_order() {
        let sources: Vec<String> = (0..32)
            .map(|i| format!(r#"<vector><path android:pathData="M{i} {i}"/></vector>"#))
            .collect();
        let results = convert_all(&sources);
        assert_eq!(results.len(), 32);
        for (i, svg) in results.iter().enumerate() {
            assert!(svg.as_deref().unwrap().contains(&format!(r#"d="M{i} {i}""#)));
        }
    }

    #[test]
    fn test_failures_stay_in_place() {
        let results = try_convert_all(&["<vector>", "<svg/>"], &RenderConfig::MINIFIED);
        assert!(results[0].is_ok());
        assert_eq!(results[1], Err(ConvertError::NotRecognized));
    }
}
