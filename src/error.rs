use std::fmt;

use thiserror::Error;

use crate::domain::Polarity;

/// Why a version token taken from the manifest diff was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatProblem {
    /// No 12 character hash could be recovered. Carries the malformed
    /// hash when one was found, so the caller can see what was there.
    NotFound { partial: Option<String> },
    /// The version token is not a pseudo-version (not three dash parts).
    InvalidLength,
    /// The dependency line did not split into path and version.
    SplittingIntoParts { line: String },
}

impl fmt::Display for FormatProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatProblem::NotFound { partial: None } => {
                write!(f, "version information not found")
            }
            FormatProblem::NotFound {
                partial: Some(hash),
            } => write!(f, "version information not found (got '{}')", hash),
            FormatProblem::InvalidLength => write!(f, "invalid length"),
            FormatProblem::SplittingIntoParts { line } => {
                write!(f, "splitting into parts: '{}'", line)
            }
        }
    }
}

/// Unified error type for gomod-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("error checking {phase} version in diff: {source}")]
    VersionExtractionFailed {
        phase: Polarity,
        source: Box<BumpError>,
    },

    #[error("{0}")]
    VersionFormat(FormatProblem),

    #[error("git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("http get failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("read all error: {0}")]
    ResponseRead(#[source] reqwest::Error),

    #[error("json unmarshal failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in gomod-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        BumpError::InvalidArguments(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Wrap an extraction failure with the side of the diff it came from.
    pub fn extraction(phase: Polarity, cause: BumpError) -> Self {
        BumpError::VersionExtractionFailed {
            phase,
            source: Box::new(cause),
        }
    }

    pub fn not_found(partial: Option<String>) -> Self {
        BumpError::VersionFormat(FormatProblem::NotFound { partial })
    }

    pub fn invalid_length() -> Self {
        BumpError::VersionFormat(FormatProblem::InvalidLength)
    }

    pub fn splitting_into_parts(line: impl Into<String>) -> Self {
        BumpError::VersionFormat(FormatProblem::SplittingIntoParts { line: line.into() })
    }

    /// The format problem behind this error, looking through extraction wrappers.
    pub fn format_problem(&self) -> Option<&FormatProblem> {
        match self {
            BumpError::VersionFormat(problem) => Some(problem),
            BumpError::VersionExtractionFailed { source, .. } => source.format_problem(),
            _ => None,
        }
    }

    /// Which side of the diff failed, if this is an extraction error.
    pub fn phase(&self) -> Option<Polarity> {
        match self {
            BumpError::VersionExtractionFailed { phase, .. } => Some(*phase),
            _ => None,
        }
    }
}
