use crate::diff::DiffSource;
use crate::error::{BumpError, Result};

/// Mock diff source for testing without a repository or a pipe
pub struct MockDiffSource {
    lines: Vec<String>,
    failure: Option<String>,
}

impl MockDiffSource {
    /// Create a source that yields the given lines
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MockDiffSource {
            lines: lines.into_iter().map(Into::into).collect(),
            failure: None,
        }
    }

    /// Create a source whose read always fails with an I/O error
    pub fn failing(message: impl Into<String>) -> Self {
        MockDiffSource {
            lines: Vec::new(),
            failure: Some(message.into()),
        }
    }
}

impl DiffSource for MockDiffSource {
    fn diff_lines(&mut self) -> Result<Vec<String>> {
        match &self.failure {
            Some(message) => Err(BumpError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                message.clone(),
            ))),
            None => Ok(self.lines.clone()),
        }
    }

    fn describe(&self) -> String {
        "mock diff".to_string()
    }
}
