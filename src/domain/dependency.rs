use std::fmt;

use regex::Regex;

use crate::error::{BumpError, Result};

/// A Go module dependency hosted at `host/owner/project`.
///
/// Owner and project end up in a URL path, so both are checked against a
/// conservative character set when the dependency is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    pub host: String,
    pub owner: String,
    pub project: String,
}

impl Dependency {
    pub fn new(host: impl Into<String>, owner: &str, project: &str) -> Result<Self> {
        validate_identifier("owner", owner)?;
        validate_identifier("project", project)?;

        Ok(Dependency {
            host: host.into(),
            owner: owner.to_string(),
            project: project.to_string(),
        })
    }

    /// Module path as it appears in go.mod (e.g., "github.com/foo/bar")
    pub fn module_path(&self) -> String {
        format!("{}/{}/{}", self.host, self.owner, self.project)
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.module_path())
    }
}

fn validate_identifier(kind: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(BumpError::invalid_arguments(format!("{} must not be empty", kind)));
    }

    if value == "." || value == ".." {
        return Err(BumpError::invalid_arguments(format!(
            "{} '{}' is not a valid name",
            kind, value
        )));
    }

    let valid = Regex::new(r"^[A-Za-z0-9._-]+$")
        .map(|re| re.is_match(value))
        .unwrap_or(false);
    if !valid {
        return Err(BumpError::invalid_arguments(format!(
            "{} '{}' may only contain letters, digits, '-', '_' and '.'",
            kind, value
        )));
    }

    Ok(())
}
