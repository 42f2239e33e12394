use crate::error::{GitError, GitResult};
use crate::git::executor::GitExecutor;
use crate::git::parser::{self, FileStatus};
use crate::report::Reporter;
use std::path::{Path, PathBuf};

/// Reads the changed-file set of a git working tree.
///
/// Opening validates the location in order: the path must exist on disk,
/// the resolved absolute path must contain a `.git` marker, and the
/// repository must actually open (`rev-parse` probe) — corrupt metadata is
/// indistinguishable from "not a repository" for callers.
pub struct Repository<'a> {
    path: PathBuf,
    executor: GitExecutor,
    reporter: &'a dyn Reporter,
}

impl std::fmt::Debug for Repository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("path", &self.path)
            .field("executor", &self.executor)
            .finish_non_exhaustive()
    }
}

impl<'a> Repository<'a> {
    /// Open the repository at `location`.
    pub fn open<P: AsRef<Path>>(location: P, reporter: &'a dyn Reporter) -> GitResult<Self> {
        let location = location.as_ref();

        if !location.exists() {
            return Err(GitError::LocationUnavailable(location.to_path_buf()));
        }

        let resolved = location.canonicalize()?;
        if !resolved.join(".git").exists() {
            return Err(GitError::NotARepository(resolved));
        }

        let executor = GitExecutor::new(&resolved);

        // A .git marker can exist without resolving to an openable repository
        if executor.run(&["rev-parse", "--git-dir"]).is_err() {
            return Err(GitError::NotARepository(resolved));
        }

        Ok(Self {
            path: resolved,
            executor,
            reporter,
        })
    }

    /// The resolved repository root.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Paths whose working-tree state differs from the last commit.
    ///
    /// Ordered as git reports them; not sorted, not deduplicated. Untracked
    /// files count as changed. Renames are reported under the new path.
    pub fn changed_files(&self) -> GitResult<Vec<String>> {
        let output = self.executor.run(&["status", "--porcelain=v2"])?;
        let entries = parser::parse_status_porcelain_v2(&output.stdout)?;

        let changed: Vec<String> = entries
            .into_iter()
            .filter(|entry| entry.status != FileStatus::Current)
            .map(|entry| entry.path)
            .collect();

        self.reporter.debug(&format!(
            "Found {} changed file(s) in {}",
            changed.len(),
            self.path.display()
        ));

        Ok(changed)
    }
}
