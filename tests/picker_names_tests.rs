//! Integration tests for the complete emoji picker name reduction.
//!
//! These tests drive the public API end to end: name map in, sorted picker names out,
//! with synthetic tables as well as the built-in curated ones.

use std::collections::HashSet;

use emoji_names::picker::{FILTER_PIPELINE, NameMap, apply_rule, group_by_codepoint};
use emoji_names::tables::{DEFAULT_WHITELIST, NameTables};
use emoji_names::{AppError, WhitelistIssue, emoji_names_for_picker, reduce_with_report};

fn name_map(pairs: &[(&str, &str)]) -> NameMap {
    pairs
        .iter()
        .map(|(name, codepoint)| (name.to_string(), codepoint.to_string()))
        .collect()
}

fn names_for(codepoint: &str, map: &NameMap, output: &[String]) -> Vec<String> {
    output
        .iter()
        .filter(|name| map.get(*name).map(String::as_str) == Some(codepoint))
        .cloned()
        .collect()
}

/// Every built-in whitelist entry on its own codepoint, plus the aliases the entries
/// are meant to beat.
fn builtin_fixture() -> NameMap {
    let mut map = NameMap::new();
    for (index, entry) in DEFAULT_WHITELIST.iter().enumerate() {
        for name in entry.iter() {
            map.insert(name.to_string(), format!("w{index}"));
        }
    }

    let plus_one = map["+1"].clone();
    let punch = map["punch"].clone();
    let sunset = map["sunset"].clone();
    map.insert("thumbsup".to_string(), plus_one);
    map.insert("facepunch".to_string(), punch);
    map.insert("cityscape_at_dusk".to_string(), sunset);

    for (name, codepoint) in [
        ("football", "1f3c8"),
        ("american_football", "1f3c8"),
        ("a", "1f170"),
        ("a_button", "1f170"),
        ("ab", "1f18e"),
        ("ab_button", "1f18e"),
        ("u6e80", "1f235"),
        ("full", "1f235"),
        ("ideograph_full", "1f235"),
        ("x", "274c"),
    ] {
        map.insert(name.to_string(), codepoint.to_string());
    }
    map
}

#[test]
fn test_word_superset_scenario() {
    let map = name_map(&[("cat", "C1"), ("cat_face", "C1")]);
    let names = emoji_names_for_picker(&map, &NameTables::default()).unwrap();
    assert_eq!(names, vec!["cat"]);
}

#[test]
fn test_whitelist_scenario() {
    let map = name_map(&[("+1", "C2"), ("thumbsup", "C2"), ("thumbs_up", "C2")]);
    let tables = NameTables::from_strs(&[], &[&["+1", "thumbs_up"]]);

    let names = emoji_names_for_picker(&map, &tables).unwrap();
    assert_eq!(names, vec!["+1", "thumbs_up"]);
}

#[test]
fn test_single_letter_singleton_scenario() {
    let map = name_map(&[("a", "C3")]);
    let names = emoji_names_for_picker(&map, &NameTables::default()).unwrap();
    assert_eq!(names, vec!["a"]);
}

#[test]
fn test_one_lettered_scenario() {
    let map = name_map(&[("a", "C4"), ("alpha", "C4")]);
    let names = emoji_names_for_picker(&map, &NameTables::default()).unwrap();
    assert_eq!(names, vec!["alpha"]);
}

#[test]
fn test_singletons_survive_untouched() {
    let map = name_map(&[
        ("x", "C1"),
        ("knife_but_longer_than_anything_else", "C2"),
        ("a_katakana_free_name", "C3"),
    ]);
    let names = emoji_names_for_picker(&map, &NameTables::default()).unwrap();

    let mut expected: Vec<String> = map.keys().cloned().collect();
    expected.sort();
    assert_eq!(names, expected);
}

#[test]
fn test_builtin_tables_on_realistic_map() {
    let map = builtin_fixture();
    let tables = NameTables::builtin();

    let names = emoji_names_for_picker(&map, &tables).unwrap();

    // whitelist exactness
    for entry in DEFAULT_WHITELIST {
        let codepoint = &map[entry[0]];
        let mut expected: Vec<String> = entry.iter().map(|name| name.to_string()).collect();
        expected.sort();
        assert_eq!(names_for(codepoint, &map, &names), expected);
    }

    // blacklist exclusivity
    for name in &tables.blacklist {
        assert!(!names.contains(name), "blacklisted '{name}' survived");
    }

    assert_eq!(names_for("1f3c8", &map, &names), vec!["american_football"]);
    assert_eq!(names_for("1f170", &map, &names), vec!["a_button"]);
    assert_eq!(names_for("1f18e", &map, &names), vec!["ab_button"]);
    assert_eq!(names_for("1f235", &map, &names), vec!["ideograph_full"]);
    assert_eq!(names_for("274c", &map, &names), vec!["x"]);
    assert!(!names.contains(&"thumbsup".to_string()));
    assert!(!names.contains(&"facepunch".to_string()));
    assert!(!names.contains(&"cityscape_at_dusk".to_string()));
}

#[test]
fn test_output_is_sorted_and_deterministic() {
    let map = builtin_fixture();
    let tables = NameTables::builtin();

    let first = emoji_names_for_picker(&map, &tables).unwrap();
    let second = emoji_names_for_picker(&map, &tables).unwrap();

    assert_eq!(first, second);
    assert!(first.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_every_stage_only_narrows() {
    let map = builtin_fixture();
    let tables = NameTables::builtin();

    let mut groups = group_by_codepoint(&map);
    for rule in FILTER_PIPELINE {
        let (narrowed, _) = apply_rule(rule, &groups, &tables.blacklist);
        for (codepoint, names) in &narrowed {
            let before: HashSet<&String> = groups[codepoint].iter().collect();
            assert!(
                names.iter().all(|name| before.contains(name)),
                "{} added names to {codepoint}",
                rule.name()
            );
            assert!(
                !names.is_empty(),
                "{} emptied {codepoint}",
                rule.name()
            );
        }
        groups = narrowed;
    }
}

#[test]
fn test_inconsistent_whitelist_halts_with_every_issue() {
    let map = name_map(&[
        ("uk", "gb-flag"),
        ("gb", "gb-flag"),
        ("us", "us-flag"),
        ("+1", "1f44d"),
    ]);
    let tables = NameTables::from_strs(&[], &[&["uk", "us"], &["+1", "thumbs_upp"]]);

    let error = emoji_names_for_picker(&map, &tables).unwrap_err();

    let AppError::WhitelistInconsistent { issues } = &error else {
        panic!("expected whitelist error, got {error:?}");
    };
    assert_eq!(issues.len(), 2);
    assert!(matches!(
        &issues[0],
        WhitelistIssue::CodepointMismatch { name, .. } if name == "us"
    ));
    assert!(matches!(
        &issues[1],
        WhitelistIssue::UnknownName { name, .. } if name == "thumbs_upp"
    ));
    assert!(reduce_with_report(&map, &tables).is_err());
}

#[test]
fn test_whitelist_can_reinclude_blacklisted_name() {
    let map = name_map(&[("knife", "1f52a"), ("hocho", "1f52a"), ("kitchen_knife", "1f52a")]);
    let tables = NameTables::from_strs(&["knife"], &[&["knife", "hocho"]]);

    let names = emoji_names_for_picker(&map, &tables).unwrap();
    assert_eq!(names, vec!["hocho", "knife"]);
}

#[test]
fn test_fully_blacklisted_group_is_dropped() {
    let map = name_map(&[("moai", "1f5ff"), ("cat", "1f408")]);
    let tables = NameTables::from_strs(&["moai"], &[]);

    let reduction = reduce_with_report(&map, &tables).unwrap();
    assert_eq!(reduction.names, vec!["cat"]);
    assert!(reduction.report.get("1f5ff").unwrap().survivors.is_empty());
}
