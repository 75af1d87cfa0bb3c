use std::fmt;

use crate::error::{BumpError, Result};

/// Length of the short commit hash carried in a pseudo-version.
pub const SHORT_HASH_LEN: usize = 12;

/// Which side of the manifest diff a line belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// `+` lines, the new revision
    Added,
    /// `-` lines, the old revision
    Removed,
}

impl Polarity {
    /// The diff marker character for this side.
    pub fn marker(self) -> char {
        match self {
            Polarity::Added => '+',
            Polarity::Removed => '-',
        }
    }

    /// Marker followed by the tab that go.mod indents requirements with.
    pub fn line_prefix(self) -> &'static str {
        match self {
            Polarity::Added => "+\t",
            Polarity::Removed => "-\t",
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Polarity::Added => write!(f, "new"),
            Polarity::Removed => write!(f, "old"),
        }
    }
}

/// A 12 character commit hash prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortHash(String);

impl ShortHash {
    /// Accepts exactly [`SHORT_HASH_LEN`] characters, otherwise reports
    /// "version information not found" with the rejected text attached.
    pub fn parse(candidate: &str) -> Result<Self> {
        if candidate.chars().count() != SHORT_HASH_LEN {
            let partial = (!candidate.is_empty()).then(|| candidate.to_string());
            return Err(BumpError::not_found(partial));
        }
        Ok(ShortHash(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ShortHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Old and new pinned revisions of one dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionPair {
    pub old: ShortHash,
    pub new: ShortHash,
}

impl RevisionPair {
    pub fn new(old: ShortHash, new: ShortHash) -> Self {
        RevisionPair { old, new }
    }

    /// The hash for one side of the diff.
    pub fn get(&self, polarity: Polarity) -> &ShortHash {
        match polarity {
            Polarity::Added => &self.new,
            Polarity::Removed => &self.old,
        }
    }
}

impl fmt::Display for RevisionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.old, self.new)
    }
}
