use std::path::{Path, PathBuf};

use git2::{DiffFormat, DiffOptions, ErrorCode, Repository};
use tracing::debug;

use crate::diff::DiffSource;
use crate::error::{BumpError, Result};

/// The staged change to the manifest file, equivalent to
/// `git diff --cached <manifest>` but read through libgit2.
pub struct StagedManifest {
    repo: Repository,
    manifest: PathBuf,
}

impl StagedManifest {
    /// Discover the repository containing `dir` and resolve `manifest`
    /// relative to `dir`, the way the git CLI resolves a pathspec.
    pub fn discover<P: AsRef<Path>>(dir: P, manifest: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().canonicalize()?;
        let repo = Repository::discover(&dir)?;

        let workdir = repo
            .workdir()
            .ok_or_else(|| git2::Error::from_str("bare repository has no working tree"))?
            .canonicalize()?;

        let manifest = manifest.as_ref();
        let relative = match dir.join(manifest).strip_prefix(&workdir) {
            Ok(path) => path.to_path_buf(),
            Err(_) => {
                return Err(BumpError::config(format!(
                    "manifest '{}' is outside the repository at '{}'",
                    manifest.display(),
                    workdir.display()
                )))
            }
        };

        Ok(StagedManifest {
            repo,
            manifest: relative,
        })
    }

    /// Create from existing git2::Repository; `manifest` is relative to the work tree
    pub fn from_git2(repo: Repository, manifest: impl Into<PathBuf>) -> Self {
        StagedManifest {
            repo,
            manifest: manifest.into(),
        }
    }

    fn head_tree(&self) -> Result<Option<git2::Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_tree()?)),
            // nothing committed yet, diff the index against an empty tree
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl DiffSource for StagedManifest {
    fn diff_lines(&mut self) -> Result<Vec<String>> {
        let head_tree = self.head_tree()?;
        let index = self.repo.index()?;

        let mut options = DiffOptions::new();
        options
            .pathspec(self.manifest.as_path())
            .disable_pathspec_match(true);

        let diff = self
            .repo
            .diff_tree_to_index(head_tree.as_ref(), Some(&index), Some(&mut options))?;

        let mut lines = Vec::new();
        diff.print(DiffFormat::Patch, |_delta, _hunk, line| {
            let content = String::from_utf8_lossy(line.content());
            match line.origin() {
                origin @ ('+' | '-' | ' ') => {
                    lines.push(format!("{}{}", origin, content.trim_end_matches('\n')));
                }
                // file and hunk headers arrive as ready-made text
                _ => lines.extend(content.lines().map(str::to_string)),
            }
            true
        })?;

        debug!(
            manifest = %self.manifest.display(),
            lines = lines.len(),
            "read staged manifest diff"
        );

        Ok(lines)
    }

    fn describe(&self) -> String {
        format!("staged diff of {}", self.manifest.display())
    }
}
