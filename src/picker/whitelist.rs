//! Hand-curated overrides that bypass the heuristics for specific codepoints.

use tracing::debug;

use super::grouping::{CodepointGroups, NameMap};
use crate::error::{AppError, WhitelistIssue};
use crate::tables::WhitelistEntry;

/// Collects every problem in `whitelist` instead of stopping at the first one.
///
/// An entry is consistent when it is non-empty and every name maps to the same
/// codepoint as its first name.
pub fn whitelist_issues(name_map: &NameMap, whitelist: &[WhitelistEntry]) -> Vec<WhitelistIssue> {
    let mut issues = Vec::new();

    for (index, entry) in whitelist.iter().enumerate() {
        let Some(first) = entry.first() else {
            issues.push(WhitelistIssue::EmptyEntry { index });
            continue;
        };

        let expected = name_map.get(first);
        if expected.is_none() {
            issues.push(WhitelistIssue::UnknownName {
                entry: entry.clone(),
                name: first.clone(),
            });
        }

        for name in entry.iter().skip(1) {
            match (name_map.get(name), expected) {
                (None, _) => issues.push(WhitelistIssue::UnknownName {
                    entry: entry.clone(),
                    name: name.clone(),
                }),
                (Some(found), Some(expected)) if found != expected => {
                    issues.push(WhitelistIssue::CodepointMismatch {
                        entry: entry.clone(),
                        name: name.clone(),
                        expected: expected.clone(),
                        found: found.clone(),
                    })
                }
                _ => {}
            }
        }
    }

    issues
}

/// Checks the whitelist against the name map.
///
/// # Returns
/// * `Ok(())` - Every entry is consistent
/// * `Err(AppError::WhitelistInconsistent)` - Carries all problems found
pub fn validate_whitelist(name_map: &NameMap, whitelist: &[WhitelistEntry]) -> Result<(), AppError> {
    let issues = whitelist_issues(name_map, whitelist);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(AppError::whitelist_inconsistent(issues))
    }
}

/// Replaces the survivors of each whitelisted codepoint with the entry's names.
///
/// The whitelist is validated first; nothing is overridden if any entry is
/// inconsistent. A later entry for the same codepoint replaces an earlier one.
///
/// # Examples
/// ```
/// use emoji_names::picker::{CodepointGroups, NameMap, apply_whitelist};
///
/// let name_map: NameMap = [("+1", "1f44d"), ("thumbsup", "1f44d"), ("thumbs_up", "1f44d")]
///     .into_iter()
///     .map(|(name, codepoint)| (name.to_string(), codepoint.to_string()))
///     .collect();
/// let groups: CodepointGroups = [("1f44d".to_string(), vec!["+1".to_string()])]
///     .into_iter()
///     .collect();
/// let whitelist = vec![vec!["+1".to_string(), "thumbs_up".to_string()]];
///
/// let groups = apply_whitelist(groups, &name_map, &whitelist).unwrap();
/// assert_eq!(groups["1f44d"], vec!["+1".to_string(), "thumbs_up".to_string()]);
/// ```
pub fn apply_whitelist(
    groups: CodepointGroups,
    name_map: &NameMap,
    whitelist: &[WhitelistEntry],
) -> Result<CodepointGroups, AppError> {
    validate_whitelist(name_map, whitelist)?;
    Ok(override_groups(groups, name_map, whitelist))
}

/// Applies an already validated whitelist.
pub(super) fn override_groups(
    mut groups: CodepointGroups,
    name_map: &NameMap,
    whitelist: &[WhitelistEntry],
) -> CodepointGroups {
    for entry in whitelist {
        let Some(codepoint) = entry.first().and_then(|first| name_map.get(first)) else {
            continue;
        };

        if let Some(previous) = groups.insert(codepoint.clone(), entry.clone()) {
            debug!("Whitelist sets {codepoint} to {entry:?} (heuristics chose {previous:?})");
        }
    }
    groups
}
