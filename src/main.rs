use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;

use gomod_bump::cli::{run_bump_workflow, BumpWorkflowArgs};
use gomod_bump::{config, logging, report, ui};

#[derive(clap::Parser)]
#[command(
    name = "gomod-bump",
    version,
    about = "Write a commit message for bumping a Go module dependency"
)]
struct Args {
    #[arg(help = "Owner of the dependency repository (e.g. golang)")]
    owner: String,

    #[arg(help = "Project name of the dependency repository (e.g. protobuf)")]
    project: String,

    #[arg(long, help = "Read the go.mod diff from stdin instead of the staged change")]
    stdin: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // wrong arity and friends: usage on stderr, exit 1
            let _ = e.print();
            std::process::exit(1);
        }
    };

    logging::setup_logger(args.verbose);

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let workflow_args = BumpWorkflowArgs {
        owner: args.owner,
        project: args.project,
        from_stdin: args.stdin,
    };

    let outcome = match run_bump_workflow(&workflow_args, &config) {
        Ok(outcome) => outcome,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if outcome.comparison.commits.is_empty() {
        ui::display_status(&format!(
            "No commits reported between {}",
            outcome.revisions
        ));
    }

    report::print_report(&outcome.report);
    Ok(())
}
