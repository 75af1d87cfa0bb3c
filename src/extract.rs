//! Pulling the old and new pinned revisions out of a manifest diff.
//!
//! Two strategies are supported:
//!
//! - [Strategy::ColumnCut] mirrors the classic shell pipeline
//!   `grep <module> | grep -- "<marker>\t" | cut -f2 | cut -d" " -f2 | cut -d- -f3`,
//!   done in-process with the same field semantics as `cut(1)`.
//! - [Strategy::LastMatch] scans line by line, keeps the last matching line
//!   per polarity, then splits it into path and version.

use tracing::{debug, trace};

use crate::diff::{DiffLine, DiffSource};
use crate::domain::{Dependency, Polarity, PseudoVersion, RevisionPair, ShortHash};
use crate::error::{BumpError, Result};

/// How revisions are located in the diff text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// cut(1)-style column extraction; used for the staged manifest
    ColumnCut,
    /// last matching line per polarity wins; used for piped input
    LastMatch,
}

/// Read the diff from `source` and extract both revisions.
///
/// The old revision is resolved first, so when both sides are broken the
/// error names the old side.
pub fn extract_revisions<S: DiffSource + ?Sized>(
    source: &mut S,
    dependency: &Dependency,
    strategy: Strategy,
) -> Result<RevisionPair> {
    debug!(source = %source.describe(), ?strategy, "reading manifest diff");

    let lines = match source.diff_lines() {
        Ok(lines) => lines,
        // the diff feeds both sides, a read failure is reported against the first
        Err(e) => return Err(BumpError::extraction(Polarity::Removed, e)),
    };

    revisions_from_lines(&lines, dependency, strategy)
}

/// Extract both revisions from already-read diff lines.
pub fn revisions_from_lines<L: AsRef<str>>(
    lines: &[L],
    dependency: &Dependency,
    strategy: Strategy,
) -> Result<RevisionPair> {
    let old = find_revision(lines, dependency, Polarity::Removed, strategy)
        .map_err(|e| BumpError::extraction(Polarity::Removed, e))?;
    let new = find_revision(lines, dependency, Polarity::Added, strategy)
        .map_err(|e| BumpError::extraction(Polarity::Added, e))?;

    debug!(old = %old, new = %new, "extracted revisions");
    Ok(RevisionPair::new(old, new))
}

fn find_revision<L: AsRef<str>>(
    lines: &[L],
    dependency: &Dependency,
    polarity: Polarity,
    strategy: Strategy,
) -> Result<ShortHash> {
    match strategy {
        Strategy::ColumnCut => column_cut(lines, dependency, polarity),
        Strategy::LastMatch => last_match(lines, dependency, polarity),
    }
}

fn column_cut<L: AsRef<str>>(
    lines: &[L],
    dependency: &Dependency,
    polarity: Polarity,
) -> Result<ShortHash> {
    let module_path = dependency.module_path();
    let marker = polarity.line_prefix();

    let hashes: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| line.contains(&module_path))
        .filter(|line| line.contains(marker))
        .map(|line| {
            let path_and_version = cut_field(line, '\t', 2);
            let version = cut_field(path_and_version, ' ', 2);
            cut_field(version, '-', 3)
        })
        .collect();

    trace!(%polarity, ?hashes, "column cut output");

    // more than one match joins into something that is not a single hash
    let output = hashes.join("\n");
    ShortHash::parse(output.trim())
}

fn last_match<L: AsRef<str>>(
    lines: &[L],
    dependency: &Dependency,
    polarity: Polarity,
) -> Result<ShortHash> {
    let module_path = dependency.module_path();

    let candidate = lines
        .iter()
        .map(|line| DiffLine::classify(line.as_ref()))
        .filter(|line| line.mentions(&module_path))
        .filter(|line| line.polarity() == Some(polarity))
        .last()
        .ok_or_else(|| BumpError::not_found(None))?;

    trace!(%polarity, line = candidate.text, "last matching line");
    parse_requirement(candidate.text)
}

/// Parse a `+\tpath version` / `-\tpath version` line down to its hash.
pub fn parse_requirement(line: &str) -> Result<ShortHash> {
    let body = line
        .strip_prefix('+')
        .or_else(|| line.strip_prefix('-'))
        .unwrap_or(line)
        .trim();

    let fields: Vec<&str> = body.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(BumpError::splitting_into_parts(body));
    }

    Ok(PseudoVersion::parse(fields[1])?.hash)
}

/// One field of `line` as `cut -d<delimiter> -f<field>` would print it:
/// a line without the delimiter passes through whole, a missing field is empty.
fn cut_field(line: &str, delimiter: char, field: usize) -> &str {
    if !line.contains(delimiter) {
        return line;
    }
    line.split(delimiter).nth(field - 1).unwrap_or("")
}
