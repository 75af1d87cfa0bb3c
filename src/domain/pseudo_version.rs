use crate::domain::revision::ShortHash;
use crate::error::{BumpError, Result};

/// Go module pseudo-version, `vX.Y.Z-<timestamp>-<hash>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoVersion {
    pub base: String,
    pub timestamp: String,
    pub hash: ShortHash,
}

impl PseudoVersion {
    /// Parse a version token (e.g., "v0.0.0-20210101000000-abcdef123456").
    ///
    /// The token must split on `-` into exactly three parts; anything else
    /// (a tagged release such as "v1.2.3", or a pre-release with extra
    /// dashes) is "invalid length". A third part that is not 12 characters
    /// is "version information not found" and carries the bad hash.
    pub fn parse(token: &str) -> Result<Self> {
        let parts: Vec<&str> = token.split('-').collect();
        if parts.len() != 3 {
            return Err(BumpError::invalid_length());
        }

        let hash = ShortHash::parse(parts[2])?;

        Ok(PseudoVersion {
            base: parts[0].to_string(),
            timestamp: parts[1].to_string(),
            hash,
        })
    }
}
