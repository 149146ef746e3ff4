use std::collections::HashMap;

/// Candidate name → codepoint, as supplied by the emoji data source.
pub type NameMap = HashMap<String, String>;

/// Codepoint → names currently surviving for it.
pub type CodepointGroups = HashMap<String, Vec<String>>;

/// Groups candidate names by the codepoint they map to.
///
/// Names keep the order in which the map yields them; that order carries no meaning
/// because the final output is sorted.
///
/// # Examples
/// ```
/// use emoji_names::picker::{NameMap, group_by_codepoint};
///
/// let name_map: NameMap = [
///     ("cat".to_string(), "1f408".to_string()),
///     ("cat2".to_string(), "1f408".to_string()),
///     ("dog".to_string(), "1f415".to_string()),
/// ]
/// .into_iter()
/// .collect();
///
/// let groups = group_by_codepoint(&name_map);
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups["1f408"].len(), 2);
/// assert_eq!(groups["1f415"], vec!["dog".to_string()]);
/// ```
pub fn group_by_codepoint(name_map: &NameMap) -> CodepointGroups {
    let mut groups: CodepointGroups = HashMap::new();

    for (name, codepoint) in name_map {
        groups
            .entry(codepoint.clone())
            .or_default()
            .push(name.clone());
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_map_has_no_groups() {
        assert!(group_by_codepoint(&NameMap::new()).is_empty());
    }

    #[test]
    fn test_every_name_lands_in_exactly_one_group() {
        let name_map: NameMap = [
            ("+1", "1f44d"),
            ("thumbsup", "1f44d"),
            ("thumbs_up", "1f44d"),
            ("-1", "1f44e"),
            ("a", "1f170"),
        ]
        .into_iter()
        .map(|(name, codepoint)| (name.to_string(), codepoint.to_string()))
        .collect();

        let groups = group_by_codepoint(&name_map);

        let total: usize = groups.values().map(Vec::len).sum();
        assert_eq!(total, name_map.len());

        let mut thumbs = groups["1f44d"].clone();
        thumbs.sort();
        assert_eq!(thumbs, vec!["+1", "thumbs_up", "thumbsup"]);
        assert_eq!(groups["1f44e"], vec!["-1"]);
        assert_eq!(groups["1f170"], vec!["a"]);
    }
}
