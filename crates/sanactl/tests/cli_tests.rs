//! Tests for the sanactl shell helpers.

use sana_core::{Engine, EngineConfig};
use sanactl::commands::conditions_listing;
use sanactl::output::wrapped_lines;

fn engine() -> Engine {
    Engine::with_builtin_pack(EngineConfig::default()).unwrap()
}

#[test]
fn test_conditions_listing_covers_the_whole_pack() {
    let listing = conditions_listing(&engine());

    assert!(listing.starts_with("KNOWN CONDITIONS\n"));
    for id in ["fever", "headache", "sore throat", "cough", "stomach pain"] {
        assert!(listing.contains(&format!("{}\n", id)), "missing {id}");
    }
    assert!(listing.contains("keywords: fever, high temperature"));
}

#[test]
fn test_wrapped_lines_preserves_short_lines_and_blanks() {
    let text = "Condition: Fever\n\nAdvice: rest";
    let lines = wrapped_lines(text);
    assert_eq!(lines, vec!["Condition: Fever", "", "Advice: rest"]);
}

#[test]
fn test_wrapped_lines_indents_bullet_continuations() {
    let long_bullet = format!("  * Medicine: {}", "x".repeat(100));
    let lines = wrapped_lines(&long_bullet);

    assert!(lines.len() > 1);
    assert!(lines[0].starts_with("  * Medicine:"));
    assert!(lines[1].starts_with("    "));
}

#[test]
fn test_structured_reply_serializes_for_json_mode() {
    let reply = engine().respond("feaver");
    let json = serde_json::to_string(&reply).unwrap();
    assert!(json.contains("\"type\":\"advice\""));
    assert!(json.contains("fever"));
}
