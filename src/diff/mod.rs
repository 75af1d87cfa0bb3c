//! Manifest diff sources
//!
//! Revisions are read out of a unified diff of the Go module manifest. The
//! [DiffSource] trait hides where that diff text comes from, so the
//! extraction logic can run against a real repository, a pipe, or a fixture.
//!
//! - [staged::StagedManifest]: the staged (index vs HEAD) diff of `go.mod`, via `git2`
//! - [piped::PipedDiff]: diff text read from any [std::io::BufRead], usually stdin
//! - [mock::MockDiffSource]: canned lines for tests
//!
//! ```rust
//! # use gomod_bump::diff::{DiffSource, PipedDiff};
//! let text = "-\tgithub.com/foo/bar v0.0.0-20210101000000-abcdef123456\n";
//! let mut source = PipedDiff::new(text.as_bytes());
//! let lines = source.diff_lines().unwrap();
//! assert_eq!(lines.len(), 1);
//! ```

pub mod mock;
pub mod piped;
pub mod staged;

pub use mock::MockDiffSource;
pub use piped::PipedDiff;
pub use staged::StagedManifest;

use crate::domain::Polarity;
use crate::error::Result;

/// Anything that can produce the lines of a manifest diff.
///
/// Sources are consumed by reading, hence `&mut self`: a pipe can only be
/// drained once.
pub trait DiffSource {
    /// Every line of the diff, without trailing newlines.
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Lines in the order they appear in the diff
    /// * `Err` - If the diff cannot be produced or read
    fn diff_lines(&mut self) -> Result<Vec<String>>;

    /// Short label for log output.
    fn describe(&self) -> String;
}

/// Change polarity of a single diff line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineChange {
    Added,
    Removed,
    Unchanged,
}

/// A line of manifest diff text tagged with its change polarity.
///
/// Only `+<TAB>` and `-<TAB>` count as changes, which is how a requirement
/// inside a go.mod `require ( ... )` block shows up in a patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffLine<'a> {
    pub change: LineChange,
    pub text: &'a str,
}

impl<'a> DiffLine<'a> {
    pub fn classify(text: &'a str) -> Self {
        let change = if text.starts_with(Polarity::Added.line_prefix()) {
            LineChange::Added
        } else if text.starts_with(Polarity::Removed.line_prefix()) {
            LineChange::Removed
        } else {
            LineChange::Unchanged
        };

        DiffLine { change, text }
    }

    pub fn polarity(&self) -> Option<Polarity> {
        match self.change {
            LineChange::Added => Some(Polarity::Added),
            LineChange::Removed => Some(Polarity::Removed),
            LineChange::Unchanged => None,
        }
    }

    /// Whether the line mentions the given module path anywhere.
    pub fn mentions(&self, module_path: &str) -> bool {
        self.text.contains(module_path)
    }
}
