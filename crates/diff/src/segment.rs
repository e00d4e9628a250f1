//! Diff segment types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// How a run of words relates the first text to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    /// Present in both texts.
    Kept,
    /// Present only in the second text.
    Inserted,
    /// Present only in the first text.
    Deleted,
}

impl SegmentKind {
    /// Marker used in line-oriented reports.
    pub fn marker(self) -> &'static str {
        match self {
            SegmentKind::Kept => "[ ]",
            SegmentKind::Inserted => "[+]",
            SegmentKind::Deleted => "[-]",
        }
    }

    /// Whether segments of this kind belong to the first text.
    pub fn in_left(self) -> bool {
        !matches!(self, SegmentKind::Inserted)
    }

    /// Whether segments of this kind belong to the second text.
    pub fn in_right(self) -> bool {
        !matches!(self, SegmentKind::Deleted)
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SegmentKind::Kept => "kept",
            SegmentKind::Inserted => "inserted",
            SegmentKind::Deleted => "deleted",
        };
        f.write_str(name)
    }
}

/// A contiguous run of words sharing one [`SegmentKind`].
///
/// `text` holds the words joined by single spaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffSegment {
    pub kind: SegmentKind,
    pub text: String,
}

impl DiffSegment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn kept(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Kept, text)
    }

    pub fn inserted(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Inserted, text)
    }

    pub fn deleted(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Deleted, text)
    }

    /// The words of the segment.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    pub fn word_count(&self) -> usize {
        self.words().count()
    }
}

impl fmt::Display for DiffSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.marker(), self.text)
    }
}
