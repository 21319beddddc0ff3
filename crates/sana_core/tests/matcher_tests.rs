//! Fixture-based matcher tests.
//!
//! Uses a small substitute knowledge base (not the built-in pack) to pin
//! down ordering, dedup, and tie-break behavior.

use sana_core::config::EngineConfig;
use sana_core::knowledge::{Condition, KnowledgeBase};
use sana_core::matcher::{find_matches, MatchOrigin};

fn condition(id: &str, keywords: &[&str]) -> Condition {
    Condition {
        id: id.to_string(),
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        medicines: vec![format!("{} remedy", id)],
        advice: format!("advice for {}", id),
    }
}

fn fixture_kb() -> KnowledgeBase {
    KnowledgeBase::new(
        vec![
            condition("alpha", &["alpha", "first sign", "cart"]),
            condition("beta", &["beta", "card"]),
            condition("gamma", &["gamma"]),
        ],
        vec!["red alert".to_string()],
    )
    .expect("fixture must validate")
}

fn ids(matches: &[sana_core::matcher::ConditionMatch]) -> Vec<String> {
    matches.iter().map(|m| m.condition.clone()).collect()
}

#[test]
fn test_exact_hits_follow_declaration_order() {
    let matches = find_matches(&fixture_kb(), &EngineConfig::default(), "gamma then alpha");
    assert_eq!(ids(&matches), vec!["alpha", "gamma"]);
}

#[test]
fn test_fuzzy_only_hits_follow_token_order() {
    // "bet" -> beta (0.75), "alph" -> alpha (0.8); beta appears first in input
    let matches = find_matches(&fixture_kb(), &EngineConfig::default(), "bet alph");
    assert_eq!(ids(&matches), vec!["beta", "alpha"]);
    assert!(matches
        .iter()
        .all(|m| matches!(m.origin, MatchOrigin::Fuzzy { .. })));
}

#[test]
fn test_exact_hits_precede_fuzzy_hits() {
    let matches = find_matches(&fixture_kb(), &EngineConfig::default(), "bet gamma");
    assert_eq!(ids(&matches), vec!["gamma", "beta"]);
    assert!(matches!(matches[0].origin, MatchOrigin::Exact { .. }));
    assert!(matches!(matches[1].origin, MatchOrigin::Fuzzy { .. }));
}

#[test]
fn test_fuzzy_never_duplicates_an_exact_hit() {
    // "alph" would fuzzy-match alpha, but alpha is already an exact hit
    let matches = find_matches(&fixture_kb(), &EngineConfig::default(), "alpha alph");
    assert_eq!(ids(&matches), vec!["alpha"]);
    assert!(matches!(matches[0].origin, MatchOrigin::Exact { .. }));
}

#[test]
fn test_fuzzy_tie_breaks_to_earlier_index_entry() {
    // "carx" is distance 1 from both "cart" (alpha) and "card" (beta);
    // the earlier declared entry must win deterministically
    let matches = find_matches(&fixture_kb(), &EngineConfig::default(), "carx");
    assert_eq!(ids(&matches), vec!["alpha"]);
    match &matches[0].origin {
        MatchOrigin::Fuzzy { keyword, .. } => assert_eq!(keyword, "cart"),
        other => panic!("expected fuzzy origin, got {other:?}"),
    }
}

#[test]
fn test_multi_token_keyword_is_never_fuzzy_matched() {
    // "first sing" is one edit from "first sign" but phrases are excluded
    // from the fuzzy index; only substring matching applies to them
    let matches = find_matches(&fixture_kb(), &EngineConfig::default(), "first sing");
    assert!(matches.is_empty());
}

#[test]
fn test_multi_token_keyword_substring_match() {
    let matches = find_matches(
        &fixture_kb(),
        &EngineConfig::default(),
        "noticed the first sign today",
    );
    assert_eq!(ids(&matches), vec!["alpha"]);
}

#[test]
fn test_cutoff_gates_fuzzy_candidates() {
    let relaxed = EngineConfig {
        fuzzy_cutoff: 0.5,
        ..Default::default()
    };
    let strict = EngineConfig {
        fuzzy_cutoff: 0.9,
        ..Default::default()
    };

    // "gama" vs "gamma": similarity 0.8
    assert_eq!(
        ids(&find_matches(&fixture_kb(), &relaxed, "gama")),
        vec!["gamma"]
    );
    assert!(find_matches(&fixture_kb(), &strict, "gama").is_empty());
}
