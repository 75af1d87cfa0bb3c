pub mod orchestration;

pub use orchestration::{run_bump_workflow, run_with_source, BumpOutcome, BumpWorkflowArgs};
