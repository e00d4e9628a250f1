//! Whitespace collapsing.
//!
//! Whitespace follows Unicode's definition (`char::is_whitespace`): spaces,
//! tabs, newlines, carriage returns, non-breaking spaces and the rest.
//! Text extracted from PDFs is full of layout-driven runs of these, none of
//! which carry meaning for a textual comparison.

/// Collapses every run of whitespace into a single ASCII space and trims
/// both ends.
///
/// This is the whitespace step of [`normalize`](crate::normalize) on its own,
/// for callers that want to keep case and dates intact (for example, to show
/// a readable excerpt of the raw input next to a report).
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  Page 1\r\n\r\n  of   3 "), "Page 1 of 3");
/// assert_eq!(collapse_whitespace("a\u{00A0}b"), "a b");
/// assert_eq!(collapse_whitespace(" \t\n "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut collapsed = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !collapsed.is_empty() {
            collapsed.push(' ');
        }
        collapsed.push_str(segment);
    }
    collapsed
}
