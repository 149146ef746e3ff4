//! Curated blacklist and whitelist tables that steer the name reduction.
//!
//! The tables are plain data: they are loaded once (built-in defaults or a config
//! file) and handed to the pipeline as a [`NameTables`] value.

use std::collections::HashSet;

/// Names globally excluded from automatic selection.
pub type BlacklistSet = HashSet<String>;

/// Ordered names that replace a codepoint's survivors wholesale. Every member must map
/// to the same codepoint as the first one.
pub type WhitelistEntry = Vec<String>;

/// Blacklist and whitelist passed together into the reduction pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameTables {
    pub blacklist: BlacklistSet,
    pub whitelist: Vec<WhitelistEntry>,
}

impl NameTables {
    pub fn new(blacklist: BlacklistSet, whitelist: Vec<WhitelistEntry>) -> Self {
        Self {
            blacklist,
            whitelist,
        }
    }

    /// Builds tables from borrowed string data.
    ///
    /// # Example
    /// ```
    /// use emoji_names::tables::NameTables;
    ///
    /// let tables = NameTables::from_strs(&["knife"], &[&["+1", "thumbs_up"]]);
    /// assert!(tables.blacklist.contains("knife"));
    /// assert_eq!(tables.whitelist[0], vec!["+1".to_string(), "thumbs_up".to_string()]);
    /// ```
    pub fn from_strs(blacklist: &[&str], whitelist: &[&[&str]]) -> Self {
        Self {
            blacklist: blacklist.iter().map(|name| name.to_string()).collect(),
            whitelist: whitelist
                .iter()
                .map(|entry| entry.iter().map(|name| name.to_string()).collect())
                .collect(),
        }
    }

    /// The hand-curated tables shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_strs(DEFAULT_BLACKLIST, DEFAULT_WHITELIST)
    }
}

/// Default whitelist. A codepoint covered here ends up with exactly these names.
pub const DEFAULT_WHITELIST: &[&[&str]] = &[
    &["date", "calendar"],
    &["shirt", "tshirt"],
    &["cupid", "heart_with_arrow"],
    &["tada", "party_popper"],
    &["parking", "p_button"],
    &["car", "automobile"],
    &["mortar_board", "graduation_cap"],
    &["cd", "optical_disc"],
    &["tv", "television"],
    &["sound", "speaker_on"],
    &["mute", "speaker_off"],
    &["antenna_bars", "signal_strength"],
    &["mag_right", "right_pointing_magnifying_glass"],
    &["mag", "left_pointing_magnifying_glass"],
    &["loud_sound", "speaker_loud"],
    &["rice_scene", "moon_ceremony"],
    &["fast_up_button", "arrow_double_up"],
    &["fast_down_button", "arrow_double_down"],
    &["rewind", "fast_reverse_button"],
    &["100", "hundred_points"],
    &["muscle", "flexed_biceps"],
    &["walking", "pedestrian"],
    &["email", "envelope"],
    &["dart", "direct_hit"],
    &["wc", "water_closet"],
    &["zap", "high_voltage"],
    &["underage", "no_one_under_eighteen"],
    &["vhs", "videocassette"],
    &["bangbang", "double_exclamation_mark"],
    &["gun", "pistol"],
    &["hocho", "kitchen_knife"],
    &["8ball", "billiards"],
    &["pray", "folded_hands"],
    &["cop", "police_officer"],
    &["phone", "telephone"],
    &["bee", "honeybee"],
    &["lips", "mouth"],
    &["boat", "sailboat"],
    &["feet", "paw_prints"],
    &["uk", "gb"],
    &["alien_monster", "space_invader"],
    &["reverse_button", "arrow_backward"],
    &["play_button", "arrow_forward"],
    &["shuffle_tracks_button", "twisted_rightwards_arrows"],
    &["iphone", "mobile_phone"],
    &["heartpulse", "growing_heart"],
    &["heartbeat", "beating_heart"],
    // cityscape_at_dusk is dropped on purpose
    &["sunset", "city_sunrise"],
    // no facepunch
    &["punch", "oncoming_fist"],
    // no thumbsup / thumbsdown
    &["+1", "thumbs_up"],
    &["-1", "thumbs_down"],
    &["poop", "pile_of_poo"],
    &["egg", "cooking"],
];

/// Default blacklist.
pub const DEFAULT_BLACKLIST: &[&str] = &[
    // would otherwise win through word_superset or superstring
    "football",
    "post_office",
    "castle",
    "chart",
    "loop",
    "massage",
    "bulb",
    "barber",
    "mens",
    "womens",
    "knife",
    "notes",
    "beetle",
    "ab", // a_button survives one_lettered, keep ab_button alongside it
    "headphone",
    "mega",
    "ski",
    "high_heel",
    "dolls",
    "moon",
    "clapper",
    "traffic_light",
    "lantern",
    "red_paper_lantern",
    // would otherwise win through longer
    "down_button",
    "running_shoe",
    "running",
    "o2",
    "star2",
    "bright",
    "dim_button",
    "stars",
    "nail_care",
    "busstop",
    "tophat",
    "old_woman",
    "old_man",
    "blue_car",
    "litter_in_bin_sign",
    "moai",
    "fuelpump",
    // not caught by any rule
    "left_arrow",
    "right_arrow",
    "up_arrow",
    "down_arrow",
    "chequered_flag",
    "e_mail",
    "non_potable_water",
    "flipper",
];
