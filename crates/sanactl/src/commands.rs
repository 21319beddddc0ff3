//! Command implementations for sanactl.

use anyhow::{Context, Result};
use sana_core::{Engine, EngineConfig};
use std::path::Path;
use tracing::debug;

/// Build the engine: explicit config path if given, else the discovery
/// chain ($SANA_CONFIG, then XDG), else defaults. Configuration and
/// knowledge-base integrity errors surface here, before any input.
pub fn build_engine(config_path: Option<&Path>) -> Result<Engine> {
    let config = match config_path {
        Some(path) => EngineConfig::load_from_path(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => EngineConfig::load().context("failed to load configuration")?,
    };

    debug!(
        fuzzy_cutoff = config.fuzzy_cutoff,
        reply_cap = config.reply_cap,
        "engine configuration loaded"
    );

    Engine::with_builtin_pack(config).context("failed to build knowledge base")
}

/// One-shot classification
pub fn ask(engine: &Engine, text: &str, json: bool) -> Result<()> {
    let reply = engine.respond(text);

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
    } else {
        crate::output::print_reply(&reply);
    }

    Ok(())
}

/// List built-in conditions
pub fn conditions(engine: &Engine) -> Result<()> {
    print!("{}", conditions_listing(engine));
    Ok(())
}

/// Render the conditions listing as plain text
pub fn conditions_listing(engine: &Engine) -> String {
    let kb = engine.knowledge();
    let mut out = String::new();
    out.push_str("KNOWN CONDITIONS\n");
    out.push_str("================\n\n");

    for condition in kb.conditions() {
        out.push_str(&format!("{}\n", condition.id));
        out.push_str(&format!("  keywords: {}\n", condition.keywords.join(", ")));
        out.push_str(&format!("  medicines: {}\n", condition.medicines.len()));
        out.push('\n');
    }

    out
}
