//! Configuration types for the normalization pipeline.
//!
//! This module defines [`NormalizeConfig`], which controls how raw document
//! text is canonicalized before it is scored and diffed.
//!
//! # Versioning
//!
//! The `version` field tracks normalization behavior. Any change that can
//! alter normalized output (even a bug fix) must come with a version bump so
//! that stored comparison baselines can tell which rules produced them.
//!
//! # Examples
//!
//! ## Default Configuration
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.lowercase);
//! assert!(config.mask_dates);
//! assert!(!config.normalize_unicode);
//! assert_eq!(config.date_sentinel, "DATE");
//! ```
//!
//! ## Keeping Dates Visible
//!
//! ```rust
//! use canonical::NormalizeConfig;
//!
//! let config = NormalizeConfig::default().with_mask_dates(false);
//! assert!(!config.mask_dates);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Sentinel substituted for every date-shaped substring by default.
pub const DEFAULT_DATE_SENTINEL: &str = "DATE";

/// Configuration for the normalization pipeline.
///
/// The defaults collapse whitespace, lower-case everything and mask
/// `DD/MM/YYYY`-shaped dates. Unicode normalization and punctuation
/// stripping are opt-in.
///
/// # Serialization
///
/// ```json
/// {
///   "version": 1,
///   "normalize_unicode": false,
///   "lowercase": true,
///   "strip_punctuation": false,
///   "mask_dates": true,
///   "date_sentinel": "DATE"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Version of the normalization rules.
    ///
    /// Must be >= 1; version 0 is reserved and rejected with
    /// [`CanonicalError::InvalidConfig`].
    pub version: u32,

    /// If true, apply Unicode NFKC normalization before any other step.
    ///
    /// Useful when the two texts come from different extractors that emit
    /// composed and decomposed forms of the same characters. NFKC also folds
    /// full-width digits to ASCII, so it runs before date masking.
    ///
    /// # Default
    ///
    /// `false`
    pub normalize_unicode: bool,

    /// If true, lower-case every character.
    ///
    /// # Default
    ///
    /// `true`
    pub lowercase: bool,

    /// If true, treat Unicode punctuation as a word delimiter and drop it.
    ///
    /// Stripping punctuation hides real differences such as `1,000` vs
    /// `1.000`, so it stays off unless a caller explicitly wants it.
    ///
    /// # Default
    ///
    /// `false`
    pub strip_punctuation: bool,

    /// If true, replace every `NN/NN/NNNN` substring with `date_sentinel`.
    ///
    /// Only this narrow shape is recognised. Other date formats stay visible
    /// so that genuine content changes are never masked.
    ///
    /// # Default
    ///
    /// `true`
    pub mask_dates: bool,

    /// Replacement token for masked dates.
    ///
    /// Lower-casing runs after masking, so with the default settings the
    /// sentinel appears as `date` in normalized output.
    ///
    /// # Requirements
    ///
    /// Non-empty, with no whitespace, ASCII digits or `/`.
    pub date_sentinel: String,
}

impl NormalizeConfig {
    /// Create a new configuration with the default rules.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: u32) -> Self {
        self.version = version;
        self
    }

    pub fn with_unicode_normalization(mut self, enabled: bool) -> Self {
        self.normalize_unicode = enabled;
        self
    }

    pub fn with_lowercase(mut self, enabled: bool) -> Self {
        self.lowercase = enabled;
        self
    }

    pub fn with_strip_punctuation(mut self, enabled: bool) -> Self {
        self.strip_punctuation = enabled;
        self
    }

    pub fn with_mask_dates(mut self, enabled: bool) -> Self {
        self.mask_dates = enabled;
        self
    }

    pub fn with_date_sentinel(mut self, sentinel: impl Into<String>) -> Self {
        self.date_sentinel = sentinel.into();
        self
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        if self.mask_dates {
            if self.date_sentinel.is_empty() {
                return Err(CanonicalError::InvalidConfig(
                    "date_sentinel must not be empty".into(),
                ));
            }
            // A sentinel that could itself look like a date, or be split by
            // whitespace collapsing, would make normalization non-idempotent.
            if self
                .date_sentinel
                .chars()
                .any(|c| c.is_whitespace() || c.is_ascii_digit() || c == '/')
            {
                return Err(CanonicalError::InvalidConfig(format!(
                    "date_sentinel {:?} must not contain whitespace, digits or '/'",
                    self.date_sentinel
                )));
            }
        }
        Ok(())
    }
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: false,
            lowercase: true,
            strip_punctuation: false,
            mask_dates: true,
            date_sentinel: DEFAULT_DATE_SENTINEL.to_string(),
        }
    }
}
