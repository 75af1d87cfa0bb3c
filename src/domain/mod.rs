//! Domain types - pure values independent of git and HTTP

pub mod dependency;
pub mod pseudo_version;
pub mod revision;

pub use dependency::Dependency;
pub use pseudo_version::PseudoVersion;
pub use revision::{Polarity, RevisionPair, ShortHash, SHORT_HASH_LEN};
