pub mod allowlist;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod report;

// Re-export commonly used types for convenience
pub use allowlist::{
    AllowListValidator, Outcome, PathMatcher, SegmentMatcher, SubstringMatcher, ValidationMode,
    split_entries,
};
pub use config::{MatcherKind, Settings};
pub use error::{AppError, AppResult, GitError, GitResult};
pub use git::{GitVersion, Repository};
pub use report::{RecordingReporter, Reporter, TracingReporter};
