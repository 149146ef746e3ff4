//! Reduction rules applied to every codepoint's candidate names.
//!
//! Each rule looks at the whole current name list of one codepoint and returns the
//! names to drop. [`FILTER_PIPELINE`] fixes the order: a rule always sees the lists
//! already narrowed by the rules before it, across every codepoint.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use super::grouping::CodepointGroups;
use crate::constants::{IDEOGRAPH_TOKENS, NAME_TOKEN_SEPARATOR};
use crate::tables::BlacklistSet;

/// One reduction heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterRule {
    /// Drops names found in the blacklist.
    Blacklisted,
    /// Drops single-character names when a longer alternative exists.
    OneLettered,
    /// When some name carries an `ideograph`/`katakana` token, drops the names that don't.
    Ideographless,
    /// Drops names whose word set strictly contains another name's word set.
    WordSuperset,
    /// Drops names that start with another name.
    Superstring,
    /// Keeps only the shortest names.
    Longer,
}

/// The rules in the order they run. Blacklist first so manual exclusions always win;
/// the length-based tie-breakers last.
pub const FILTER_PIPELINE: [FilterRule; 6] = [
    FilterRule::Blacklisted,
    FilterRule::OneLettered,
    FilterRule::Ideographless,
    FilterRule::WordSuperset,
    FilterRule::Superstring,
    FilterRule::Longer,
];

/// Names removed from each codepoint by a single rule. Codepoints that lost nothing
/// are absent.
pub type StageRemovals = HashMap<String, Vec<String>>;

impl FilterRule {
    pub fn name(&self) -> &'static str {
        match self {
            FilterRule::Blacklisted => "blacklisted",
            FilterRule::OneLettered => "one_lettered",
            FilterRule::Ideographless => "ideographless",
            FilterRule::WordSuperset => "word_superset",
            FilterRule::Superstring => "superstring",
            FilterRule::Longer => "longer",
        }
    }

    /// Returns the subset of `names` this rule removes.
    ///
    /// # Examples
    /// ```
    /// use emoji_names::picker::FilterRule;
    /// use emoji_names::tables::BlacklistSet;
    ///
    /// let names = vec!["cat".to_string(), "cat_face".to_string()];
    /// let removed = FilterRule::WordSuperset.names_to_remove(&names, &BlacklistSet::new());
    /// assert!(removed.contains("cat_face"));
    /// assert_eq!(removed.len(), 1);
    /// ```
    pub fn names_to_remove<'a>(
        &self,
        names: &'a [String],
        blacklist: &BlacklistSet,
    ) -> HashSet<&'a str> {
        match self {
            FilterRule::Blacklisted => blacklisted(names, blacklist),
            FilterRule::OneLettered => one_lettered(names),
            FilterRule::Ideographless => ideographless(names),
            FilterRule::WordSuperset => word_superset(names),
            FilterRule::Superstring => superstring(names),
            FilterRule::Longer => longer(names),
        }
    }
}

fn name_len(name: &str) -> usize {
    name.chars().count()
}

fn tokens(name: &str) -> impl Iterator<Item = &str> {
    name.split(NAME_TOKEN_SEPARATOR)
}

fn blacklisted<'a>(names: &'a [String], blacklist: &BlacklistSet) -> HashSet<&'a str> {
    names
        .iter()
        .filter(|name| blacklist.contains(name.as_str()))
        .map(String::as_str)
        .collect()
}

// A group made only of one-letter names is left alone.
fn one_lettered(names: &[String]) -> HashSet<&str> {
    if names.len() <= 1 {
        return HashSet::new();
    }

    let single: HashSet<&str> = names
        .iter()
        .filter(|name| name_len(name) == 1)
        .map(String::as_str)
        .collect();

    if single.len() == names.len() {
        return HashSet::new();
    }
    single
}

fn ideographless(names: &[String]) -> HashSet<&str> {
    let marked: Vec<bool> = names
        .iter()
        .map(|name| tokens(name).any(|token| IDEOGRAPH_TOKENS.contains(&token)))
        .collect();

    if !marked.iter().any(|&has_token| has_token) {
        return HashSet::new();
    }

    names
        .iter()
        .zip(marked)
        .filter(|(_, has_token)| !has_token)
        .map(|(name, _)| name.as_str())
        .collect()
}

fn word_superset(names: &[String]) -> HashSet<&str> {
    let bags: Vec<HashSet<&str>> = names.iter().map(|name| tokens(name).collect()).collect();
    let mut removed = HashSet::new();

    for (i, smaller) in bags.iter().enumerate() {
        for (j, larger) in bags.iter().enumerate() {
            if i != j && smaller.len() < larger.len() && smaller.is_subset(larger) {
                removed.insert(names[j].as_str());
            }
        }
    }

    removed
}

fn superstring(names: &[String]) -> HashSet<&str> {
    let mut removed = HashSet::new();

    for (i, prefix) in names.iter().enumerate() {
        for (j, name) in names.iter().enumerate() {
            if i != j && name.starts_with(prefix.as_str()) {
                removed.insert(name.as_str());
            }
        }
    }

    removed
}

fn longer(names: &[String]) -> HashSet<&str> {
    let Some(min_length) = names.iter().map(|name| name_len(name)).min() else {
        return HashSet::new();
    };

    names
        .iter()
        .filter(|name| name_len(name) > min_length)
        .map(String::as_str)
        .collect()
}

/// Runs one rule over every group and returns the narrowed groups as a fresh map
/// together with what was removed.
pub fn apply_rule(
    rule: FilterRule,
    groups: &CodepointGroups,
    blacklist: &BlacklistSet,
) -> (CodepointGroups, StageRemovals) {
    let mut narrowed = HashMap::with_capacity(groups.len());
    let mut removals = StageRemovals::new();

    for (codepoint, names) in groups {
        let to_remove = rule.names_to_remove(names, blacklist);
        if to_remove.is_empty() {
            narrowed.insert(codepoint.clone(), names.clone());
            continue;
        }

        let (removed, kept): (Vec<String>, Vec<String>) = names
            .iter()
            .cloned()
            .partition(|name| to_remove.contains(name.as_str()));

        if kept.is_empty() {
            warn!(
                "Rule {} removed every name of codepoint {codepoint}: {removed:?}",
                rule.name()
            );
        }

        narrowed.insert(codepoint.clone(), kept);
        removals.insert(codepoint.clone(), removed);
    }

    (narrowed, removals)
}

/// Runs every rule of [`FILTER_PIPELINE`] in order. A stage completes for all groups
/// before the next one starts. `observe` sees each stage's removals.
pub fn apply_filters(
    groups: CodepointGroups,
    blacklist: &BlacklistSet,
    mut observe: impl FnMut(FilterRule, &StageRemovals),
) -> CodepointGroups {
    FILTER_PIPELINE
        .iter()
        .fold(groups, |current, &rule| {
            let (narrowed, removals) = apply_rule(rule, &current, blacklist);
            debug!(
                "Rule {} removed {} name(s) from {} codepoint(s)",
                rule.name(),
                removals.values().map(Vec::len).sum::<usize>(),
                removals.len()
            );
            observe(rule, &removals);
            narrowed
        })
}
