use std::fmt;

use thiserror::Error;

/// A single problem found while checking whitelist entries against the name map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhitelistIssue {
    /// The entry at `index` contains no names at all.
    EmptyEntry { index: usize },
    /// A whitelisted name does not exist in the name map.
    UnknownName { entry: Vec<String>, name: String },
    /// A whitelisted name resolves to a different codepoint than the entry's first name.
    CodepointMismatch {
        entry: Vec<String>,
        name: String,
        expected: String,
        found: String,
    },
}

impl fmt::Display for WhitelistIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WhitelistIssue::EmptyEntry { index } => {
                write!(f, "whitelist entry #{index} is empty")
            }
            WhitelistIssue::UnknownName { entry, name } => {
                write!(f, "{entry:?}: '{name}' is not a known emoji name")
            }
            WhitelistIssue::CodepointMismatch {
                entry,
                name,
                expected,
                found,
            } => write!(
                f,
                "{entry:?}: '{name}' maps to {found}, expected {expected}"
            ),
        }
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Inconsistent whitelist ({} problem(s)): {}", .issues.len(), format_issues(.issues))]
    WhitelistInconsistent { issues: Vec<WhitelistIssue> },

    #[error("Failed to parse emoji map: {0}")]
    EmojiMapParse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

fn format_issues(issues: &[WhitelistIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// Create a whitelist consistency error from the collected issues
    pub fn whitelist_inconsistent(issues: Vec<WhitelistIssue>) -> Self {
        Self::WhitelistInconsistent { issues }
    }

    /// Returns the whitelist problems carried by this error, if any.
    pub fn whitelist_issues(&self) -> Option<&[WhitelistIssue]> {
        match self {
            AppError::WhitelistInconsistent { issues } => Some(issues),
            _ => None,
        }
    }
}
