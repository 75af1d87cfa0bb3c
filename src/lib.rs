pub mod cli;
pub mod compare;
pub mod config;
pub mod diff;
pub mod domain;
pub mod error;
pub mod extract;
pub mod logging;
pub mod report;
pub mod ui;

pub use error::{BumpError, Result};
