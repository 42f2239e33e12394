use crate::error::{GitError, GitResult};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Result of executing a git command
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub success: bool,
}

/// Executes git subcommands within a repository directory
#[derive(Debug)]
pub struct GitExecutor {
    repo_path: PathBuf,
}

impl GitExecutor {
    /// Create a new GitExecutor for the given repository path
    pub fn new<P: AsRef<Path>>(repo_path: P) -> Self {
        Self {
            repo_path: repo_path.as_ref().to_path_buf(),
        }
    }

    /// Run a git subcommand and return its output
    ///
    /// Arguments are passed through verbatim, without the "git" prefix:
    /// `executor.run(&["status", "--porcelain=v2"])`
    pub fn run(&self, args: &[&str]) -> GitResult<CommandOutput> {
        if args.is_empty() {
            return Err(GitError::CommandFailed("empty git invocation".to_string()));
        }

        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(|e| GitError::CommandFailed(format!("Failed to execute git: {}", e)))?;

        self.process_output(output, args)
    }

    fn process_output(&self, output: Output, args: &[&str]) -> GitResult<CommandOutput> {
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();
        let exit_code = output.status.code().unwrap_or(-1);
        let success = output.status.success();

        if !success {
            return Err(GitError::CommandFailed(format!(
                "Command 'git {}' failed with exit code {}: {}",
                args.join(" "),
                exit_code,
                stderr.trim()
            )));
        }

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_code,
            success,
        })
    }

    /// Get the repository path
    pub fn repo_path(&self) -> &Path {
        &self.repo_path
    }
}
