use crate::allowlist::{PathMatcher, SegmentMatcher, SubstringMatcher};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Settings file looked up in the working directory when no --config is given
pub const DEFAULT_CONFIG_FILE: &str = ".changeguard.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Optional TOML settings, merged beneath CLI arguments.
///
/// Every key is optional; the CLI always wins. A missing file yields
/// defaults.
#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct Settings {
    pub scan: ScanSettings,
    pub allowlist: AllowlistSettings,
    pub matching: MatchingSettings,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct ScanSettings {
    pub git_location: Option<PathBuf>,
    pub check_all_files: Option<bool>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct AllowlistSettings {
    pub entries: Vec<String>,
}

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct MatchingSettings {
    pub matcher: MatcherKind,
}

/// Which `PathMatcher` the validator is built with
#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    #[default]
    Substring,
    Segment,
}

impl MatcherKind {
    pub fn build(self) -> Box<dyn PathMatcher> {
        match self {
            MatcherKind::Substring => Box::new(SubstringMatcher),
            MatcherKind::Segment => Box::new(SegmentMatcher),
        }
    }
}

impl Settings {
    /// Load settings from an explicit file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let settings: Settings = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Load `.changeguard.toml` from the current directory if present,
    /// defaults otherwise.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
