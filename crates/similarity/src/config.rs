//! Configuration for similarity scoring.

use serde::{Deserialize, Serialize};

/// Knobs for [`similarity_with`](crate::similarity_with).
///
/// The default scores the normalized strings exactly as given, spaces
/// included.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Remove all whitespace before building bigrams.
    ///
    /// Word boundaries then stop contributing bigrams of their own, so a
    /// text whose words were merged or split by the extractor still scores
    /// as identical.
    pub ignore_whitespace: bool,
}

impl SimilarityConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_ignore_whitespace(mut self, enabled: bool) -> Self {
        self.ignore_whitespace = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_and_defaults() {
        let cfg = SimilarityConfig::new().with_ignore_whitespace(true);
        let json = serde_json::to_string(&cfg).expect("serialize");
        assert_eq!(json, r#"{"ignore_whitespace":true}"#);
        let back: SimilarityConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, cfg);

        let empty: SimilarityConfig = serde_json::from_str("{}").expect("defaults");
        assert_eq!(empty, SimilarityConfig::default());
    }
}
