//! The normalized form of a document's text.
//!
//! [`NormalizedText`] is what every downstream stage consumes: the scorer
//! reads [`NormalizedText::as_str`], the diff engine walks its tokens.
//!
//! # Invariants
//!
//! For any value produced by [`normalize`](crate::normalize):
//!
//! - no run of two or more whitespace characters, and no leading or
//!   trailing whitespace
//! - every character lower-cased (with the default configuration)
//! - every `NN/NN/NNNN` substring replaced by the date sentinel
//! - `tokens` are exactly the space-separated words of `text`, with byte
//!   offsets into `text`
//!
//! ```rust
//! use canonical::{normalize, NormalizeConfig};
//!
//! let out = normalize("Total:  123,45  01/02/2023", &NormalizeConfig::default()).unwrap();
//! assert_eq!(out.as_str(), "total: 123,45 date");
//! assert_eq!(out.tokens.len(), 3);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::token::Token;

/// Document text after normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NormalizedText {
    /// The normalized text.
    pub text: String,
    /// Space-separated words of `text` with their byte offsets.
    pub tokens: Vec<Token>,
    /// Version of the [`NormalizeConfig`](crate::NormalizeConfig) that
    /// produced this text.
    pub config_version: u32,
}

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of words in the text.
    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for NormalizedText {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for NormalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
