//! Commit message rendering for a dependency bump.
//!
//! Formatting is a pure string builder; [print_report] is the only part that
//! touches stdout.

use std::fmt::Write;

use crate::compare::CompareResult;
use crate::domain::{Dependency, RevisionPair};

/// Render the bump message.
///
/// ```text
/// Bump github.com/foo/bar
///
/// abcdef123456 -> 123456abcdef
///
/// Commits:
///   - <sha>
///     <first line of message>
///
///   - <sha>
///     <first line of message>
/// ```
///
/// Entries are separated by a blank line. The `Commits:` header is written
/// even when there are no commits. Every line ends in `\n`.
pub fn format_report(dependency: &Dependency, pair: &RevisionPair, result: &CompareResult) -> String {
    let mut out = String::new();

    // writing into a String cannot fail
    let _ = writeln!(out, "Bump {}", dependency.module_path());
    out.push('\n');
    let _ = writeln!(out, "{} -> {}", pair.old, pair.new);
    out.push('\n');
    out.push_str("Commits:\n");

    for (i, commit) in result.commits.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let _ = writeln!(out, "  - {}", commit.sha);
        if let Some(line) = &commit.message_first_line {
            let _ = writeln!(out, "    {}", line);
        }
    }

    out
}

/// Print the rendered report to stdout, followed by a blank line.
pub fn print_report(report: &str) {
    println!("{}", report);
}
