//! Text normalization for document comparison.
//!
//! Raw text extracted from rendered reports differs in ways nobody cares
//! about: layout-driven whitespace, capitalisation, and the date the report
//! was printed. This crate canonicalizes those away before two documents are
//! scored and diffed.
//!
//! ## What we do
//!
//! - Collapse every whitespace run to a single space and trim the ends
//! - Lower-case every character
//! - Replace `NN/NN/NNNN` dates with a fixed sentinel
//! - Optionally apply Unicode NFKC and strip punctuation
//! - Record word tokens with byte offsets for the diff stage
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Same text and config give
//! the same output on any machine, and normalizing already-normalized text
//! is a no-op.

mod config;
mod dates;
mod document;
mod error;
mod pipeline;
mod token;
mod whitespace;

pub use crate::config::{NormalizeConfig, DEFAULT_DATE_SENTINEL};
pub use crate::dates::mask_dates;
pub use crate::document::NormalizedText;
pub use crate::error::CanonicalError;
pub use crate::pipeline::{normalize, normalize_bytes};
pub use crate::token::{tokenize, Token};
pub use crate::whitespace::collapse_whitespace;
