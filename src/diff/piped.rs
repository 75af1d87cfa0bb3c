use std::io::BufRead;

use crate::diff::DiffSource;
use crate::error::Result;

/// Diff text produced elsewhere and fed in through a reader,
/// e.g. `git diff --cached go.mod | gomod-bump --stdin foo bar`.
pub struct PipedDiff<R: BufRead> {
    reader: R,
}

impl<R: BufRead> PipedDiff<R> {
    pub fn new(reader: R) -> Self {
        PipedDiff { reader }
    }
}

impl<R: BufRead> DiffSource for PipedDiff<R> {
    fn diff_lines(&mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();

        for line in (&mut self.reader).lines() {
            let line = line?;
            lines.push(line.trim_end_matches('\r').to_string());
        }

        Ok(lines)
    }

    fn describe(&self) -> String {
        "piped diff".to_string()
    }
}
