//! Emoji short-name reduction for name pickers
//!
//! Many short names can alias one emoji codepoint (`+1`, `thumbsup`, `thumbs_up`). This
//! library reduces every codepoint's candidates to the names worth showing in a picker
//! or autocomplete, using a fixed sequence of rules plus hand-curated overrides.
//!
//! # Examples
//!
//! ```rust
//! use emoji_names::picker::{NameMap, emoji_names_for_picker};
//! use emoji_names::tables::NameTables;
//! use emoji_names::error::AppError;
//!
//! fn main() -> Result<(), AppError> {
//!     let name_map: NameMap = serde_json::from_str(
//!         r#"{"a": "1f170", "a_button": "1f170", "uk": "1f1ec-1f1e7", "gb": "1f1ec-1f1e7"}"#,
//!     )?;
//!
//!     let tables = NameTables::from_strs(&["ab"], &[&["uk", "gb"]]);
//!     let names = emoji_names_for_picker(&name_map, &tables)?;
//!     assert_eq!(names, vec!["a_button", "gb", "uk"]);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod picker;
pub mod tables;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, WhitelistIssue};
pub use picker::{NameMap, emoji_names_for_picker, reduce_with_report};
pub use tables::NameTables;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
