//! Word-level diffing of normalized text.
//!
//! Both inputs are split on whitespace into words, and a shortest edit
//! script between the two word sequences is computed with
//! [`similar`]'s linear-space Myers diff, so the words marked kept form a
//! longest common subsequence. The script is then folded into
//! [`DiffSegment`]s:
//!
//! - consecutive kept words become one `Kept` segment
//! - between two kept runs, all deleted words come first as one `Deleted`
//!   segment, followed by all inserted words as one `Inserted` segment
//!
//! Concatenating the `Kept` and `Deleted` segments in order (joined by single
//! spaces) gives back the first text; `Kept` and `Inserted` give back the
//! second.
//!
//! ```
//! use worddiff::{diff_words, DiffSegment};
//!
//! let segments = diff_words("the cat sat", "the dog sat");
//! assert_eq!(
//!     segments,
//!     vec![
//!         DiffSegment::kept("the"),
//!         DiffSegment::deleted("cat"),
//!         DiffSegment::inserted("dog"),
//!         DiffSegment::kept("sat"),
//!     ]
//! );
//! ```

mod segment;

use canonical::{tokenize, NormalizedText, Token};
use similar::{capture_diff_slices, Algorithm, ChangeTag};

pub use crate::segment::{DiffSegment, SegmentKind};

/// Diff two texts word by word.
///
/// The texts are expected to be normalized already; any whitespace run is
/// treated as a single word boundary either way.
pub fn diff_words(a: &str, b: &str) -> Vec<DiffSegment> {
    diff_tokens(&tokenize(a), &tokenize(b))
}

/// Diff two normalized texts, reusing the tokens recorded by normalization.
pub fn diff_normalized(a: &NormalizedText, b: &NormalizedText) -> Vec<DiffSegment> {
    diff_tokens(&a.tokens, &b.tokens)
}

/// Diff two token sequences.
pub fn diff_tokens(a: &[Token], b: &[Token]) -> Vec<DiffSegment> {
    let left: Vec<&str> = a.iter().map(|t| t.text.as_str()).collect();
    let right: Vec<&str> = b.iter().map(|t| t.text.as_str()).collect();
    let mut builder = SegmentBuilder::default();
    for op in capture_diff_slices(Algorithm::Myers, &left, &right) {
        for change in op.iter_changes(&left, &right) {
            match change.tag() {
                ChangeTag::Equal => builder.keep(change.value()),
                ChangeTag::Delete => builder.delete(change.value()),
                ChangeTag::Insert => builder.insert(change.value()),
            }
        }
    }
    builder.finish()
}

/// Rebuild the first text from a segment sequence.
pub fn reconstruct_left(segments: &[DiffSegment]) -> String {
    join_where(segments, SegmentKind::in_left)
}

/// Rebuild the second text from a segment sequence.
pub fn reconstruct_right(segments: &[DiffSegment]) -> String {
    join_where(segments, SegmentKind::in_right)
}

fn join_where(segments: &[DiffSegment], keep: fn(SegmentKind) -> bool) -> String {
    segments
        .iter()
        .filter(|s| keep(s.kind))
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Default)]
struct SegmentBuilder<'a> {
    segments: Vec<DiffSegment>,
    kept: Vec<&'a str>,
    deleted: Vec<&'a str>,
    inserted: Vec<&'a str>,
}

impl<'a> SegmentBuilder<'a> {
    fn keep(&mut self, word: &'a str) {
        self.flush_changes();
        self.kept.push(word);
    }

    fn delete(&mut self, word: &'a str) {
        self.flush_kept();
        self.deleted.push(word);
    }

    fn insert(&mut self, word: &'a str) {
        self.flush_kept();
        self.inserted.push(word);
    }

    fn flush_kept(&mut self) {
        push_run(&mut self.segments, SegmentKind::Kept, &mut self.kept);
    }

    // Deletions always precede insertions within one run of changes.
    fn flush_changes(&mut self) {
        push_run(&mut self.segments, SegmentKind::Deleted, &mut self.deleted);
        push_run(&mut self.segments, SegmentKind::Inserted, &mut self.inserted);
    }

    fn finish(mut self) -> Vec<DiffSegment> {
        self.flush_kept();
        self.flush_changes();
        self.segments
    }
}

fn push_run(segments: &mut Vec<DiffSegment>, kind: SegmentKind, words: &mut Vec<&str>) {
    if !words.is_empty() {
        segments.push(DiffSegment::new(kind, words.join(" ")));
        words.clear();
    }
}
