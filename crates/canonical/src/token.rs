use serde::{Deserialize, Serialize};

/// A word of normalized text with its UTF-8 byte offsets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Byte offset (inclusive) in the normalized text.
    pub start: usize,
    /// Byte offset (exclusive) in the normalized text.
    pub end: usize,
}

impl Token {
    /// Borrow this token's word back out of the text it was cut from.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Words of `text` split on Unicode whitespace, with byte offsets.
///
/// On normalized text this yields the same tokens
/// [`normalize`](crate::normalize) records.
pub fn tokenize(text: &str) -> Vec<Token> {
    WordSpans::new(text)
        .map(|(start, end)| Token {
            text: text[start..end].to_string(),
            start,
            end,
        })
        .collect()
}

/// Byte ranges of the whitespace-separated words of a string.
struct WordSpans<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> WordSpans<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl Iterator for WordSpans<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let skipped = rest.find(|c: char| !c.is_whitespace())?;
        let start = self.pos + skipped;
        let len = self.text[start..]
            .find(char::is_whitespace)
            .unwrap_or(self.text.len() - start);
        self.pos = start + len;
        Some((start, self.pos))
    }
}
