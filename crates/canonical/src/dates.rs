//! Masking of date-shaped substrings.
//!
//! Generated reports stamp the day they were produced, so two otherwise
//! identical documents rarely agree on their dates. Only the
//! `two digits / two digits / four digits` shape is recognised; `2023-01-02`
//! or `Jan 2, 2023` are left untouched.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};

// ASCII digits only: `\d` would also match other Unicode decimal digits.
static DATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]{2}/[0-9]{2}/[0-9]{4}").expect("date pattern is a valid regex")
});

/// Replace every date-shaped substring of `text` with `sentinel`.
///
/// Matches are leftmost and non-overlapping. Borrows the input when nothing
/// matched.
///
/// ```rust
/// use canonical::mask_dates;
///
/// assert_eq!(mask_dates("printed 01/02/2023", "DATE"), "printed DATE");
/// assert_eq!(mask_dates("printed 2023-02-01", "DATE"), "printed 2023-02-01");
/// ```
pub fn mask_dates<'a>(text: &'a str, sentinel: &str) -> Cow<'a, str> {
    DATE_PATTERN.replace_all(text, NoExpand(sentinel))
}
