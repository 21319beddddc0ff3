//! Reply formatting.
//!
//! Plain ASCII text; any markup escaping for user-echoed content is the
//! presentation shell's responsibility.

use crate::knowledge::KnowledgeBase;
use crate::matcher::ConditionMatch;

/// Fixed fallback when nothing matched confidently
pub const NO_MATCH_REPLY: &str = "I couldn't confidently match your symptom. \
     Try adding more detail (e.g. 'sore throat' or 'fever 2 days').";

/// Format the advice reply for the top matches.
///
/// Covers at most `cap` conditions, each as the capitalized condition name,
/// one bullet per medicine, and the advice line. Conditions are separated by
/// a blank line. Empty matches produce the fixed fallback message.
pub fn format_reply(kb: &KnowledgeBase, matches: &[ConditionMatch], cap: usize) -> String {
    if matches.is_empty() {
        return NO_MATCH_REPLY.to_string();
    }

    let mut blocks: Vec<String> = Vec::new();
    for m in matches.iter().take(cap) {
        let Some(condition) = kb.get(&m.condition) else {
            continue;
        };

        let mut block = String::new();
        block.push_str(&format!("Condition: {}\n", capitalize(&condition.id)));
        for medicine in &condition.medicines {
            block.push_str(&format!("  * Medicine: {}\n", medicine));
        }
        block.push_str(&format!("Advice: {}", condition.advice));
        blocks.push(block);
    }

    blocks.join("\n\n")
}

/// Format the urgent reply for a detected emergency phrase.
///
/// Embeds the phrase verbatim and directs the user to immediate care. Never
/// includes medicines or advice; emergency replies do not recommend
/// self-medication.
pub fn format_emergency(phrase: &str) -> String {
    format!(
        "[EMERGENCY] '{}' detected. Please seek immediate medical care or call \
         your local emergency number.",
        phrase
    )
}

/// Uppercase the first character for display
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
