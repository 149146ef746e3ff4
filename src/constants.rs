//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed names, tokens and file locations used across
//! the crate so the reduction rules and the CLI agree on them.

/// Separator between the words of an emoji short name
pub const NAME_TOKEN_SEPARATOR: char = '_';

/// Tokens that mark a name as explicitly naming an ideographic or katakana character
pub const IDEOGRAPH_TOKENS: [&str; 2] = ["ideograph", "katakana"];

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "emoji_names";

/// File name of the configuration file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name
pub const LOG_FILE_NAME: &str = "emoji_names.log";

/// Default tracing filter directive for this crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "emoji_names=info";

/// Environment variables read by the configuration layer
pub mod env {
    /// Overrides the log file path from the config file
    pub const LOG_FILE: &str = "EMOJI_NAMES_LOG_FILE";
}
