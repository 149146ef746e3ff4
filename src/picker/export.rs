use super::grouping::CodepointGroups;

/// Flattens every group's survivors into a single lexicographically sorted list.
pub fn flatten_sorted(groups: CodepointGroups) -> Vec<String> {
    let mut names: Vec<String> = groups.into_values().flatten().collect();
    names.sort_unstable();
    names
}
