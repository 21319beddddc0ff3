//! Two-pass condition matcher: exact first, fuzzy second.
//!
//! The exact pass guarantees precise matches are never shadowed by fuzzy
//! noise; the fuzzy pass only adds conditions the exact pass missed, which
//! recovers single-token typos without overriding a clean hit.

use crate::config::EngineConfig;
use crate::knowledge::KnowledgeBase;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};

/// How a condition earned its place in the match list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchOrigin {
    /// A keyword hit in the exact pass
    Exact { keyword: String },
    /// A typo-tolerant hit in the fuzzy pass
    Fuzzy {
        token: String,
        keyword: String,
        similarity: f64,
    },
}

/// A matched condition with its provenance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub condition: String,
    pub origin: MatchOrigin,
}

/// Match normalized input against the knowledge base.
///
/// Returns distinct condition ids in discovery order: exact hits in
/// knowledge-base declaration order, then fuzzy-only hits in input token
/// order. Total; empty or whitespace-only input yields an empty result.
pub fn find_matches(
    kb: &KnowledgeBase,
    config: &EngineConfig,
    text: &str,
) -> Vec<ConditionMatch> {
    let normalized = normalize(text);
    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    let mut matches: Vec<ConditionMatch> = Vec::new();

    // Pass 1: exact keyword hits. Multi-token keywords match as contiguous
    // substrings of the normalized text; single tokens must equal a token
    // exactly, so short keywords cannot over-match inside longer words.
    for condition in kb.conditions() {
        for keyword in &condition.keywords {
            let hit = if keyword.contains(' ') {
                normalized.contains(keyword.as_str())
            } else {
                tokens.iter().any(|t| *t == keyword.as_str())
            };

            if hit && !already_matched(&matches, &condition.id) {
                matches.push(ConditionMatch {
                    condition: condition.id.clone(),
                    origin: MatchOrigin::Exact {
                        keyword: keyword.clone(),
                    },
                });
            }
        }
    }

    // Pass 2: fuzzy single-token hits against the keyword index.
    for token in &tokens {
        if let Some(candidate) = best_fuzzy_candidate(kb, config.fuzzy_cutoff, token) {
            if !already_matched(&matches, candidate.owner) {
                matches.push(ConditionMatch {
                    condition: candidate.owner.to_string(),
                    origin: MatchOrigin::Fuzzy {
                        token: (*token).to_string(),
                        keyword: candidate.keyword.to_string(),
                        similarity: candidate.similarity,
                    },
                });
            }
        }
    }

    matches
}

fn already_matched(matches: &[ConditionMatch], condition: &str) -> bool {
    matches.iter().any(|m| m.condition == condition)
}

struct FuzzyCandidate<'a> {
    keyword: &'a str,
    owner: &'a str,
    similarity: f64,
}

/// Single best index entry at or above the cutoff.
/// Earlier index entries win ties, keeping results deterministic.
fn best_fuzzy_candidate<'a>(
    kb: &'a KnowledgeBase,
    cutoff: f64,
    token: &str,
) -> Option<FuzzyCandidate<'a>> {
    let mut best: Option<FuzzyCandidate<'a>> = None;

    for (keyword, owner) in kb.index().entries() {
        let similarity = strsim::normalized_levenshtein(token, keyword);
        if similarity < cutoff {
            continue;
        }
        let better = match &best {
            Some(current) => similarity > current.similarity,
            None => true,
        };
        if better {
            best = Some(FuzzyCandidate {
                keyword,
                owner,
                similarity,
            });
        }
    }

    best
}
