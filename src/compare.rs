//! Client for the repository host's compare endpoint.
//!
//! `GET <api_base>/repos/<owner>/<project>/compare/<old>...<new>` returns the
//! commits between two revisions. Only `commits[].sha` and
//! `commits[].commit.message` are read; everything else is ignored.

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::domain::{Dependency, RevisionPair};
use crate::error::{BumpError, Result};

/// Public GitHub REST API
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// One commit between the two revisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    pub sha: String,
    /// First line of the commit message, `None` when the message is empty
    pub message_first_line: Option<String>,
}

impl CommitRecord {
    pub fn new(sha: impl Into<String>, message: &str) -> Self {
        CommitRecord {
            sha: sha.into(),
            message_first_line: message.lines().next().map(str::to_string),
        }
    }
}

/// Commits in the order the API returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompareResult {
    pub commits: Vec<CommitRecord>,
}

#[derive(Debug, Deserialize)]
struct CompareResponse {
    #[serde(default)]
    commits: Vec<ResponseCommit>,
}

#[derive(Debug, Deserialize)]
struct ResponseCommit {
    #[serde(default)]
    sha: String,
    #[serde(default)]
    commit: ResponseCommitDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseCommitDetail {
    #[serde(default)]
    message: String,
}

/// Build the compare URL, e.g.
/// `https://api.github.com/repos/foo/bar/compare/abcdef123456...123456abcdef`
pub fn compare_url(api_base: &str, owner: &str, project: &str, old: &str, new: &str) -> String {
    format!(
        "{}/repos/{}/{}/compare/{}...{}",
        api_base.trim_end_matches('/'),
        owner,
        project,
        old,
        new
    )
}

/// Decode a compare response body.
///
/// Missing fields decode to empty values, so an error document such as
/// `{"message": "Not Found"}` yields an empty commit list.
pub fn decode_compare(body: &[u8]) -> Result<CompareResult> {
    let response: CompareResponse = serde_json::from_slice(body)?;

    let commits = response
        .commits
        .into_iter()
        .map(|c| CommitRecord::new(c.sha, &c.commit.message))
        .collect();

    Ok(CompareResult { commits })
}

/// Blocking HTTP client for the compare endpoint. No authentication, no retries.
pub struct CompareClient {
    http: Client,
    api_base: String,
    check_status: bool,
}

impl CompareClient {
    /// Create a client against `api_base`.
    ///
    /// # Arguments
    /// * `api_base` - Base URL of the REST API (e.g., "https://api.github.com")
    /// * `timeout` - Whole-request timeout, `None` to wait indefinitely
    /// * `check_status` - Reject non-2xx responses instead of decoding them
    pub fn new(
        api_base: impl Into<String>,
        timeout: Option<Duration>,
        check_status: bool,
    ) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(BumpError::Network)?;

        Ok(CompareClient {
            http,
            api_base: api_base.into(),
            check_status,
        })
    }

    pub fn url_for(&self, dependency: &Dependency, pair: &RevisionPair) -> String {
        compare_url(
            &self.api_base,
            &dependency.owner,
            &dependency.project,
            pair.old.as_str(),
            pair.new.as_str(),
        )
    }

    /// Fetch the commits between `pair.old` and `pair.new`.
    ///
    /// # Returns
    /// * `Ok(CompareResult)` - Decoded commits
    /// * `Err(Network)` - Transport failure
    /// * `Err(HttpStatus)` - Non-2xx status while status checking is on
    /// * `Err(ResponseRead)` - Body could not be read
    /// * `Err(Decode)` - Body is not valid JSON
    pub fn compare(&self, dependency: &Dependency, pair: &RevisionPair) -> Result<CompareResult> {
        let url = self.url_for(dependency, pair);
        info!(%url, "requesting commit comparison");

        let response = self.http.get(&url).send().map_err(BumpError::Network)?;

        let status = response.status();
        debug!(status = status.as_u16(), "compare endpoint responded");

        if !status.is_success() {
            if self.check_status {
                return Err(BumpError::HttpStatus {
                    status: status.as_u16(),
                    url,
                });
            }
            warn!(status = status.as_u16(), "ignoring unsuccessful status");
        }

        let body = response.bytes().map_err(BumpError::ResponseRead)?;
        let result = decode_compare(&body)?;

        debug!(commits = result.commits.len(), "decoded compare response");
        Ok(result)
    }
}
