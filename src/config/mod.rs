pub mod settings;

pub use settings::{ConfigError, DEFAULT_CONFIG_FILE, MatcherKind, Settings};
