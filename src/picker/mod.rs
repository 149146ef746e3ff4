//! Emoji short-name reduction for the name picker.
//!
//! This module turns a name → codepoint map into the sorted list of names shown to users:
//! - `grouping`: Inverts the map into codepoint → candidate names
//! - `filters`: The six ordered reduction rules and the staged driver that runs them
//! - `whitelist`: Validation and application of hand-curated overrides
//! - `export`: Flattening of the surviving names into sorted output
//! - `pipeline`: Entry points tying the stages together

mod export;
mod filters;
mod grouping;
mod pipeline;
mod whitelist;

pub use export::flatten_sorted;
pub use filters::{FILTER_PIPELINE, FilterRule, StageRemovals, apply_filters, apply_rule};
pub use grouping::{CodepointGroups, NameMap, group_by_codepoint};
pub use pipeline::{
    CodepointReport, Reduction, ReductionReport, RuleRemoval, emoji_names_for_picker,
    reduce_with_report,
};
pub use whitelist::{apply_whitelist, validate_whitelist, whitelist_issues};
