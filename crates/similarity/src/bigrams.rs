//! Character-bigram multisets.
//!
//! A bigram is a pair of adjacent characters. Repeated bigrams are counted,
//! so `"aaa"` holds `('a', 'a')` twice.

use fxhash::FxHashMap;

/// Multiset of adjacent-character pairs of a string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bigrams {
    counts: FxHashMap<(char, char), usize>,
    total: usize,
}

impl Bigrams {
    /// Collect the bigrams of `text`.
    pub fn from_text(text: &str) -> Self {
        Self::from_chars(text.chars())
    }

    /// Collect the bigrams of a character stream.
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut counts: FxHashMap<(char, char), usize> = FxHashMap::default();
        let mut total = 0usize;
        let mut prev: Option<char> = None;
        for ch in chars {
            if let Some(p) = prev {
                *counts.entry((p, ch)).or_insert(0) += 1;
                total += 1;
            }
            prev = Some(ch);
        }
        Self { counts, total }
    }

    /// Number of bigrams, counting repeats.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct bigrams.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// How many times `pair` occurs.
    pub fn count(&self, pair: (char, char)) -> usize {
        self.counts.get(&pair).copied().unwrap_or(0)
    }

    /// Size of the multiset intersection: each shared bigram counts up to
    /// the smaller of its two multiplicities.
    pub fn intersection(&self, other: &Bigrams) -> usize {
        let (small, large) = if self.counts.len() <= other.counts.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(pair, &n)| n.min(large.count(*pair)))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_repeated_pairs() {
        let b = Bigrams::from_text("aaaa");
        assert_eq!(b.len(), 3);
        assert_eq!(b.distinct(), 1);
        assert_eq!(b.count(('a', 'a')), 3);
    }

    #[test]
    fn short_strings_have_no_bigrams() {
        assert!(Bigrams::from_text("").is_empty());
        assert!(Bigrams::from_text("x").is_empty());
    }

    #[test]
    fn intersection_uses_minimum_multiplicity() {
        let a = Bigrams::from_text("aaaa"); // aa x3
        let b = Bigrams::from_text("aab"); // aa x1, ab x1
        assert_eq!(a.intersection(&b), 1);
        assert_eq!(b.intersection(&a), 1);
    }

    #[test]
    fn multibyte_characters_are_single_units() {
        let b = Bigrams::from_text("été");
        assert_eq!(b.len(), 2);
        assert_eq!(b.count(('é', 't')), 1);
    }
}
