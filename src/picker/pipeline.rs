//! Entry points running the full reduction: grouping, the filter stages, the whitelist
//! override and the sorted export.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::info;

use super::export::flatten_sorted;
use super::filters::{FilterRule, StageRemovals, apply_filters};
use super::grouping::{CodepointGroups, NameMap, group_by_codepoint};
use super::whitelist::{override_groups, validate_whitelist};
use crate::error::AppError;
use crate::tables::NameTables;

/// Produces the sorted list of names to offer in the emoji picker.
///
/// The whitelist is validated against `name_map` before any reduction happens; an
/// inconsistent entry aborts the run with every problem listed in the error.
///
/// # Examples
/// ```
/// use emoji_names::picker::{NameMap, emoji_names_for_picker};
/// use emoji_names::tables::NameTables;
///
/// let name_map: NameMap = [
///     ("cat", "1f408"),
///     ("cat_face", "1f408"),
///     ("+1", "1f44d"),
///     ("thumbsup", "1f44d"),
///     ("thumbs_up", "1f44d"),
/// ]
/// .into_iter()
/// .map(|(name, codepoint)| (name.to_string(), codepoint.to_string()))
/// .collect();
/// let tables = NameTables::from_strs(&[], &[&["+1", "thumbs_up"]]);
///
/// let names = emoji_names_for_picker(&name_map, &tables).unwrap();
/// assert_eq!(names, vec!["+1", "cat", "thumbs_up"]);
/// ```
pub fn emoji_names_for_picker(
    name_map: &NameMap,
    tables: &NameTables,
) -> Result<Vec<String>, AppError> {
    validate_whitelist(name_map, &tables.whitelist)?;

    let groups = group_by_codepoint(name_map);
    let groups = apply_filters(groups, &tables.blacklist, |_, _| {});
    let groups = override_groups(groups, name_map, &tables.whitelist);
    let names = flatten_sorted(groups);

    info!(
        "Reduced {} candidate names to {} picker names",
        name_map.len(),
        names.len()
    );
    Ok(names)
}

/// Names removed from one codepoint by one rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleRemoval {
    pub rule: FilterRule,
    pub names: Vec<String>,
}

/// How a single codepoint's candidates were narrowed down.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CodepointReport {
    /// All candidate names, sorted
    pub candidates: Vec<String>,
    /// Removals in pipeline order; rules that removed nothing are omitted
    pub removals: Vec<RuleRemoval>,
    /// Whether a whitelist entry replaced the heuristic result
    pub whitelisted: bool,
    /// Final names, sorted
    pub survivors: Vec<String>,
}

/// Per-codepoint trace of a reduction run, keyed by codepoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReductionReport {
    pub codepoints: BTreeMap<String, CodepointReport>,
}

impl ReductionReport {
    fn from_groups(groups: &CodepointGroups) -> Self {
        let codepoints = groups
            .iter()
            .map(|(codepoint, names)| {
                let mut candidates = names.clone();
                candidates.sort();
                (
                    codepoint.clone(),
                    CodepointReport {
                        candidates,
                        ..Default::default()
                    },
                )
            })
            .collect();
        Self { codepoints }
    }

    fn record_removals(&mut self, rule: FilterRule, removals: &StageRemovals) {
        for (codepoint, names) in removals {
            if let Some(entry) = self.codepoints.get_mut(codepoint) {
                let mut names = names.clone();
                names.sort();
                entry.removals.push(RuleRemoval { rule, names });
            }
        }
    }

    fn record_survivors(&mut self, groups: &CodepointGroups, whitelisted: &HashSet<&String>) {
        for (codepoint, names) in groups {
            let entry = self.codepoints.entry(codepoint.clone()).or_default();
            let mut survivors = names.clone();
            survivors.sort();
            entry.survivors = survivors;
            entry.whitelisted = whitelisted.contains(codepoint);
        }
    }

    pub fn get(&self, codepoint: &str) -> Option<&CodepointReport> {
        self.codepoints.get(codepoint)
    }

    /// Codepoints that had more than one candidate name.
    pub fn ambiguous(&self) -> impl Iterator<Item = (&String, &CodepointReport)> {
        self.codepoints
            .iter()
            .filter(|(_, report)| report.candidates.len() > 1)
    }
}

/// Result of [`reduce_with_report`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    /// Sorted picker names, identical to [`emoji_names_for_picker`]'s output
    pub names: Vec<String>,
    pub report: ReductionReport,
}

/// Same reduction as [`emoji_names_for_picker`], also recording which rule removed which
/// names for every codepoint. Useful when reviewing blacklist and whitelist decisions.
pub fn reduce_with_report(name_map: &NameMap, tables: &NameTables) -> Result<Reduction, AppError> {
    validate_whitelist(name_map, &tables.whitelist)?;

    let groups = group_by_codepoint(name_map);
    let mut report = ReductionReport::from_groups(&groups);

    let groups = apply_filters(groups, &tables.blacklist, |rule, removals| {
        report.record_removals(rule, removals)
    });

    let whitelisted: HashSet<&String> = tables
        .whitelist
        .iter()
        .filter_map(|entry| entry.first().and_then(|first| name_map.get(first)))
        .collect();
    let groups = override_groups(groups, name_map, &tables.whitelist);
    report.record_survivors(&groups, &whitelisted);

    let names = flatten_sorted(groups);
    info!(
        "Reduced {} candidate names over {} codepoints to {} picker names ({} whitelisted)",
        name_map.len(),
        report.codepoints.len(),
        names.len(),
        whitelisted.len()
    );

    Ok(Reduction { names, report })
}
