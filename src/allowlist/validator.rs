use crate::allowlist::matcher::{PathMatcher, SubstringMatcher};
use crate::report::Reporter;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    /// An empty change set means the invocation is misconfigured (wrong
    /// repository location, stale checkout), not that the tree is clean.
    #[error("No changed files found")]
    NoChangedFiles,
}

/// How the allow-list is applied to the changed-file set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Any single match per file is enough; each match is reported.
    PermissiveAnyMatch,
    /// Every changed file must be accounted for before declaring success.
    StrictAllMustMatch,
}

/// Terminal result of a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Strict mode: the match counter reached the changed-file total;
    /// `entry` is the allow-list entry that closed the count.
    AllMatched { entry: String },
    /// Permissive mode ran to completion; `matched` files were reported.
    /// Unmatched files are skipped silently.
    Reported { matched: usize },
    /// Strict mode finished without the counter ever reaching the total.
    /// Not an error, but not an explicit success either.
    Indeterminate,
}

/// Decides whether a changed-file set stays within an allow-list.
pub struct AllowListValidator<'a> {
    matcher: Box<dyn PathMatcher>,
    reporter: &'a dyn Reporter,
}

impl<'a> AllowListValidator<'a> {
    /// Validator with the default substring containment matcher.
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self::with_matcher(Box::new(SubstringMatcher), reporter)
    }

    pub fn with_matcher(matcher: Box<dyn PathMatcher>, reporter: &'a dyn Reporter) -> Self {
        Self { matcher, reporter }
    }

    /// Check every changed file against the allow-list entries.
    ///
    /// Files are taken in reader order, entries in declaration order. The
    /// two modes are deliberately asymmetric: strict mode keeps testing
    /// further entries for a file it already matched (so one file matching
    /// several entries inflates the counter), while permissive mode stops at
    /// the first matching entry per file. Strict success fires only at the
    /// match event where the counter equals the changed-file total;
    /// otherwise the run ends as [`Outcome::Indeterminate`].
    ///
    /// The match counter is local to this call; the validator carries no
    /// state between runs.
    pub fn validate(
        &self,
        changed_files: &[String],
        allow_list: &[String],
        mode: ValidationMode,
    ) -> Result<Outcome, ValidationError> {
        if changed_files.is_empty() {
            return Err(ValidationError::NoChangedFiles);
        }

        let mut matched: usize = 0;

        for changed_file in changed_files {
            for entry in allow_list {
                if !self.matcher.matches(changed_file, entry) {
                    continue;
                }

                match mode {
                    ValidationMode::StrictAllMustMatch => {
                        matched += 1;
                        if matched == changed_files.len() {
                            self.reporter.info(&format!(
                                "All changed files are allowed in checked location {entry}."
                            ));
                            return Ok(Outcome::AllMatched {
                                entry: entry.clone(),
                            });
                        }
                    }
                    ValidationMode::PermissiveAnyMatch => {
                        self.reporter.info(&format!(
                            "Changed file {changed_file} is allowed in checked location {entry}."
                        ));
                        matched += 1;
                        break;
                    }
                }
            }
        }

        Ok(match mode {
            ValidationMode::StrictAllMustMatch => Outcome::Indeterminate,
            ValidationMode::PermissiveAnyMatch => Outcome::Reported { matched },
        })
    }
}

/// Split a semicolon-separated allow-list specification into its entries.
///
/// Verbatim split: no trimming, no empty-fragment filtering. A trailing
/// semicolon therefore yields an empty entry, which the substring matcher
/// treats as match-everything.
pub fn split_entries(spec: &str) -> Vec<String> {
    spec.split(';').map(str::to_string).collect()
}
