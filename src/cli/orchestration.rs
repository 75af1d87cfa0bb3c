//! Main workflow orchestration logic
//!
//! Extract → Fetch → Format, kept out of main.rs so it can be driven
//! programmatically and from tests without clap.

use std::io;

use tracing::info;

use crate::compare::{CompareClient, CompareResult};
use crate::config::Config;
use crate::diff::{DiffSource, PipedDiff, StagedManifest};
use crate::domain::{Dependency, Polarity, RevisionPair};
use crate::error::{BumpError, Result};
use crate::extract::{extract_revisions, Strategy};
use crate::report::format_report;

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
#[derive(Debug, Clone, PartialEq)]
pub struct BumpWorkflowArgs {
    /// Owner of the dependency repository
    pub owner: String,

    /// Project (repository) name
    pub project: String,

    /// Read diff text from stdin instead of the staged manifest
    pub from_stdin: bool,
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub dependency: Dependency,
    pub revisions: RevisionPair,
    pub comparison: CompareResult,
    /// The rendered commit message
    pub report: String,
}

/// Main bump workflow
///
/// 1. Validate owner and project
/// 2. Open the diff source (staged manifest, or stdin)
/// 3. Extract the old and new revisions
/// 4. Fetch the commits between them
/// 5. Render the report
///
/// Nothing is printed here; the caller decides what to do with the report.
pub fn run_bump_workflow(args: &BumpWorkflowArgs, config: &Config) -> Result<BumpOutcome> {
    let dependency = Dependency::new(config.module_host.as_str(), &args.owner, &args.project)?;
    let client = CompareClient::new(config.api_base.as_str(), config.timeout(), config.check_status)?;

    if args.from_stdin {
        let stdin = io::stdin();
        let mut source = PipedDiff::new(stdin.lock());
        run_with_source(&mut source, Strategy::LastMatch, &dependency, &client)
    } else {
        let mut source = StagedManifest::discover(".", &config.manifest)
            .map_err(|e| BumpError::extraction(Polarity::Removed, e))?;
        run_with_source(&mut source, Strategy::ColumnCut, &dependency, &client)
    }
}

/// Run the pipeline against an already-open diff source.
pub fn run_with_source<S: DiffSource + ?Sized>(
    source: &mut S,
    strategy: Strategy,
    dependency: &Dependency,
    client: &CompareClient,
) -> Result<BumpOutcome> {
    let revisions = extract_revisions(source, dependency, strategy)?;
    info!(dependency = %dependency, %revisions, "found revision change");

    let comparison = client.compare(dependency, &revisions)?;
    let report = format_report(dependency, &revisions, &comparison);

    Ok(BumpOutcome {
        dependency: dependency.clone(),
        revisions,
        comparison,
        report,
    })
}
