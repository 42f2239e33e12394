pub mod matcher;
pub mod validator;

// Re-export commonly used types
pub use matcher::{PathMatcher, SegmentMatcher, SubstringMatcher};
pub use validator::{AllowListValidator, Outcome, ValidationError, ValidationMode, split_entries};
