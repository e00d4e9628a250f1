use std::borrow::Cow;

use unicode_categories::UnicodeCategories;
use unicode_normalization::UnicodeNormalization;

use crate::config::NormalizeConfig;
use crate::dates::mask_dates;
use crate::document::NormalizedText;
use crate::error::CanonicalError;
use crate::token::Token;

/// Main entry point. Takes raw document text and a config and returns the
/// normalized text with its word tokens.
///
/// Steps, in order:
///
/// 1. optional Unicode NFKC normalization
/// 2. date masking (`NN/NN/NNNN` → sentinel)
/// 3. lower-casing, whitespace collapsing and trimming in a single pass
///
/// Masked dates contain no whitespace and lower-casing never touches digits
/// or `/`, so running the masking first gives the same result as masking
/// last while letting the sentinel follow the configured case.
pub fn normalize(input: &str, cfg: &NormalizeConfig) -> Result<NormalizedText, CanonicalError> {
    cfg.validate()?;

    // Unicode normalization can change character boundaries and fold
    // full-width digits, so it comes before everything else.
    let unicode_text: Cow<str> = if cfg.normalize_unicode {
        Cow::Owned(input.nfkc().collect::<String>())
    } else {
        Cow::Borrowed(input)
    };

    // Only holds a value when at least one date was replaced.
    let masked_owned: Option<String> = if cfg.mask_dates {
        match mask_dates(unicode_text.as_ref(), &cfg.date_sentinel) {
            Cow::Owned(text) => Some(text),
            Cow::Borrowed(_) => None,
        }
    } else {
        None
    };
    let masked: &str = masked_owned.as_deref().unwrap_or(unicode_text.as_ref());

    let mut text = String::with_capacity(masked.len());
    let mut tokens: Vec<Token> = Vec::with_capacity((masked.len() / 4).saturating_add(1));
    let mut state = ScanState::default();

    for ch in masked.chars() {
        if cfg.lowercase {
            // Lower-casing can expand a single character into several.
            for lower in ch.to_lowercase() {
                dispatch_char(lower, cfg, &mut text, &mut tokens, &mut state);
            }
        } else {
            dispatch_char(ch, cfg, &mut text, &mut tokens, &mut state);
        }
    }

    // The last token needs to be finalized after the loop.
    finalize_token(&mut tokens, &text, &mut state.token_start);

    Ok(NormalizedText {
        text,
        tokens,
        config_version: cfg.version,
    })
}

/// Normalize raw bytes, rejecting anything that is not valid UTF-8.
///
/// Undecodable input fails with [`CanonicalError::InvalidInput`]; it is never
/// decoded lossily.
pub fn normalize_bytes(
    input: &[u8],
    cfg: &NormalizeConfig,
) -> Result<NormalizedText, CanonicalError> {
    let text = std::str::from_utf8(input).map_err(|err| {
        CanonicalError::InvalidInput(format!(
            "input is not valid UTF-8 text (first invalid byte at offset {})",
            err.valid_up_to()
        ))
    })?;
    normalize(text, cfg)
}

#[derive(Default)]
struct ScanState {
    pending_space: bool,
    token_start: Option<usize>,
}

/// Decides whether a character is part of a token or a delimiter.
fn dispatch_char(
    ch: char,
    cfg: &NormalizeConfig,
    text: &mut String,
    tokens: &mut Vec<Token>,
    state: &mut ScanState,
) {
    let is_delim = ch.is_whitespace() || (cfg.strip_punctuation && ch.is_punctuation());
    if is_delim {
        finalize_token(tokens, text, &mut state.token_start);
        // Leading delimiters never produce a space.
        if !text.is_empty() {
            state.pending_space = true;
        }
    } else {
        append_char(ch, text, state);
    }
}

fn append_char(ch: char, text: &mut String, state: &mut ScanState) {
    if state.pending_space {
        text.push(' ');
        state.pending_space = false;
        state.token_start = Some(text.len());
    } else if state.token_start.is_none() {
        state.token_start = Some(text.len());
    }
    text.push(ch);
}

fn finalize_token(tokens: &mut Vec<Token>, text: &str, token_start: &mut Option<usize>) {
    if let Some(start) = token_start.take() {
        if start < text.len() {
            let end = text.len();
            tokens.push(Token {
                text: text[start..end].to_string(),
                start,
                end,
            });
        }
    }
}
