use crate::error::{GitError, GitResult};
use std::process::Command;

/// Minimum git version with `status --porcelain=v2` support
const MIN_GIT_VERSION: (u32, u32) = (2, 11);

/// Represents an installed git version
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GitVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl GitVersion {
    /// Detect the installed git version
    pub fn detect() -> GitResult<Self> {
        let output = Command::new("git")
            .arg("--version")
            .output()
            .map_err(|e| {
                GitError::VersionDetectionFailed(format!("Failed to execute git: {}", e))
            })?;

        if !output.status.success() {
            return Err(GitError::VersionDetectionFailed(
                "git --version command failed".to_string(),
            ));
        }

        let version_string = String::from_utf8_lossy(&output.stdout);
        Self::parse(&version_string)
    }

    /// Parse a version from a string like "git version 2.39.2"
    pub fn parse(version_str: &str) -> GitResult<Self> {
        let parts: Vec<&str> = version_str.split_whitespace().collect();

        if parts.len() < 3 || parts[0] != "git" || parts[1] != "version" {
            return Err(GitError::ParseError(format!(
                "Unexpected git version format: {}",
                version_str
            )));
        }

        let nums: Vec<&str> = parts[2].split('.').collect();
        if nums.len() < 2 {
            return Err(GitError::ParseError(format!(
                "Invalid version number format: {}",
                parts[2]
            )));
        }

        let major = nums[0]
            .parse::<u32>()
            .map_err(|_| GitError::ParseError(format!("Invalid major version: {}", nums[0])))?;

        let minor = nums[1]
            .parse::<u32>()
            .map_err(|_| GitError::ParseError(format!("Invalid minor version: {}", nums[1])))?;

        // Patch may carry non-numeric suffixes ("2.39.2.windows.1")
        let patch = if nums.len() >= 3 {
            nums[2].parse::<u32>().unwrap_or(0)
        } else {
            0
        };

        Ok(GitVersion {
            major,
            minor,
            patch,
        })
    }

    /// Check if this version meets the minimum requirement
    pub fn is_supported(&self) -> bool {
        self.major > MIN_GIT_VERSION.0
            || (self.major == MIN_GIT_VERSION.0 && self.minor >= MIN_GIT_VERSION.1)
    }

    /// Detect the installed version and fail if it is too old
    pub fn validate() -> GitResult<Self> {
        let version = Self::detect()?;
        if !version.is_supported() {
            return Err(GitError::VersionTooOld(version.to_string()));
        }
        Ok(version)
    }
}

impl std::fmt::Display for GitVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
