use crate::error::AppError;
use std::collections::HashSet;

/// Validates the configuration settings
///
/// # Arguments
/// * `blacklist` - Names excluded from automatic selection
/// * `whitelist` - Manual per-codepoint name lists
/// * `log_file_path` - Optional log file path to validate
///
/// # Validation Rules
/// - Blacklisted names cannot be empty
/// - Whitelist entries cannot be empty, contain empty names, or repeat a name
/// - If log file path is provided, it cannot be empty
///
/// Whether whitelist names agree on a codepoint depends on the emoji data and is
/// checked by the reduction pipeline, not here.
pub fn validate_config(
    blacklist: &[String],
    whitelist: &[Vec<String>],
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if blacklist.iter().any(|name| name.trim().is_empty()) {
        return Err(AppError::config_error("Blacklisted names cannot be empty"));
    }

    for (index, entry) in whitelist.iter().enumerate() {
        if entry.is_empty() {
            return Err(AppError::config_error(format!(
                "Whitelist entry #{index} has no names"
            )));
        }

        let mut seen = HashSet::with_capacity(entry.len());
        for name in entry {
            if name.trim().is_empty() {
                return Err(AppError::config_error(format!(
                    "Whitelist entry #{index} contains an empty name"
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(AppError::config_error(format!(
                    "Whitelist entry #{index} lists '{name}' more than once"
                )));
            }
        }
    }

    if let Some(log_path) = log_file_path
        && log_path.is_empty()
    {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    Ok(())
}
