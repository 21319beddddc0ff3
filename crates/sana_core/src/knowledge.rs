//! Built-in symptom knowledge pack and derived keyword index.
//!
//! Static, curated data loaded once at startup and immutable afterwards.
//! The pack content is illustrative, not a maintained clinical source.

use crate::error::SanaError;
use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A static condition entry
pub struct PackCondition {
    pub id: &'static str,
    pub keywords: &'static [&'static str],
    pub medicines: &'static [&'static str],
    pub advice: &'static str,
}

/// Built-in condition entries
pub const CONDITION_PACK: &[PackCondition] = &[
    PackCondition {
        id: "fever",
        keywords: &["fever", "high temperature", "temperature", "flu", "shivering"],
        medicines: &["Paracetamol 500-1000 mg as needed"],
        advice: "Rest, hydrate. See doctor if fever > 3 days or temp >= 39 C.",
    },
    PackCondition {
        id: "headache",
        keywords: &["headache", "migraine", "head pain"],
        medicines: &["Ibuprofen 200-400 mg", "Paracetamol 500-1000 mg"],
        advice: "Rest in a quiet place. See doctor if severe or new neurological signs.",
    },
    PackCondition {
        id: "sore throat",
        keywords: &["sore throat", "throat pain", "scratchy throat"],
        medicines: &["Lozenges or throat spray", "Paracetamol for pain"],
        advice: "Gargle with warm salt water and stay hydrated.",
    },
    PackCondition {
        id: "cough",
        keywords: &["cough", "dry cough", "productive cough", "phlegm"],
        medicines: &["Dextromethorphan (dry cough)", "Guaifenesin (productive cough)"],
        advice: "Hydrate well. See a doctor if cough > 2 weeks or blood is present.",
    },
    PackCondition {
        id: "stomach pain",
        keywords: &["stomach pain", "abdominal pain", "stomach ache"],
        medicines: &["Antacid for mild indigestion"],
        advice: "Avoid heavy meals. See doctor for severe/persistent pain.",
    },
];

/// Critical phrases that bypass ordinary matching for the turn.
/// Checked by substring containment only, no fuzz: a false negative here is
/// the higher-risk failure.
pub const EMERGENCY_PHRASES: &[&str] = &[
    "chest pain",
    "severe difficulty breathing",
    "loss of consciousness",
    "unconscious",
    "severe bleeding",
    "blood in vomit",
    "blood in stool",
    "blue lips",
    "anaphylaxis",
];

/// Owned runtime form of a pack entry.
/// Test suites substitute smaller fixture knowledge bases through this type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Condition {
    pub id: String,
    pub keywords: Vec<String>,
    pub medicines: Vec<String>,
    pub advice: String,
}

/// Convert a pack entry to its owned runtime form
pub fn pack_to_condition(entry: &PackCondition) -> Condition {
    Condition {
        id: entry.id.to_string(),
        keywords: entry.keywords.iter().map(|s| s.to_string()).collect(),
        medicines: entry.medicines.iter().map(|s| s.to_string()).collect(),
        advice: entry.advice.to_string(),
    }
}

/// Derived single-token keyword index.
///
/// Maps each whitespace-free keyword to its owning condition, preserving
/// declaration order for deterministic fuzzy tie-breaking. Multi-token
/// keywords are excluded; they are substring-matched, never fuzzy-matched.
#[derive(Debug, Clone, Default)]
pub struct KeywordIndex {
    /// (keyword, condition id) in knowledge-base declaration order
    entries: Vec<(String, String)>,
    owners: BTreeMap<String, String>,
}

impl KeywordIndex {
    /// Build the index, validating that no keyword is claimed by two conditions.
    pub fn build(conditions: &[Condition]) -> Result<Self, SanaError> {
        let mut entries: Vec<(String, String)> = Vec::new();
        let mut owners: BTreeMap<String, String> = BTreeMap::new();
        let mut claimed: BTreeMap<String, String> = BTreeMap::new();

        for condition in conditions {
            for keyword in &condition.keywords {
                let keyword = normalize(keyword);
                if keyword.is_empty() {
                    continue;
                }

                match claimed.get(&keyword) {
                    Some(owner) if owner != &condition.id => {
                        return Err(SanaError::DuplicateKeyword {
                            keyword,
                            first: owner.clone(),
                            second: condition.id.clone(),
                        });
                    }
                    Some(_) => continue, // same condition listed it twice
                    None => {
                        claimed.insert(keyword.clone(), condition.id.clone());
                    }
                }

                if !keyword.contains(' ') {
                    owners.insert(keyword.clone(), condition.id.clone());
                    entries.push((keyword, condition.id.clone()));
                }
            }
        }

        Ok(Self { entries, owners })
    }

    /// Owning condition of a single-token keyword
    pub fn owner_of(&self, keyword: &str) -> Option<&str> {
        self.owners.get(keyword).map(String::as_str)
    }

    /// All (keyword, condition id) entries in declaration order
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, c)| (k.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Immutable knowledge base: conditions in declaration order, emergency
/// phrases, and the derived keyword index. Built once at startup; shared
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    conditions: Vec<Condition>,
    emergency_phrases: Vec<String>,
    index: KeywordIndex,
}

impl KnowledgeBase {
    /// Build a knowledge base from owned entries, normalizing keywords and
    /// phrases and validating keyword ownership.
    pub fn new(
        conditions: Vec<Condition>,
        emergency_phrases: Vec<String>,
    ) -> Result<Self, SanaError> {
        let conditions: Vec<Condition> = conditions
            .into_iter()
            .map(|mut c| {
                c.keywords = c.keywords.iter().map(|k| normalize(k)).collect();
                c
            })
            .collect();

        let index = KeywordIndex::build(&conditions)?;

        let emergency_phrases = emergency_phrases
            .iter()
            .map(|p| normalize(p))
            .filter(|p| !p.is_empty())
            .collect();

        Ok(Self {
            conditions,
            emergency_phrases,
            index,
        })
    }

    /// Build the knowledge base from the built-in pack
    pub fn builtin() -> Result<Self, SanaError> {
        Self::new(
            CONDITION_PACK.iter().map(pack_to_condition).collect(),
            EMERGENCY_PHRASES.iter().map(|s| s.to_string()).collect(),
        )
    }

    /// Conditions in declaration order
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Look up a condition by id
    pub fn get(&self, id: &str) -> Option<&Condition> {
        self.conditions.iter().find(|c| c.id == id)
    }

    /// Emergency phrases in declaration order
    pub fn emergency_phrases(&self) -> &[String] {
        &self.emergency_phrases
    }

    /// The derived single-token keyword index
    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_pack_loads() {
        let kb = KnowledgeBase::builtin().expect("builtin pack must validate");
        assert_eq!(kb.len(), 5);
        assert!(kb.get("fever").is_some());
        assert!(kb.get("sore throat").is_some());
        assert!(!kb.emergency_phrases().is_empty());
    }

    #[test]
    fn test_index_excludes_multi_token_keywords() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert!(kb.index().owner_of("fever").is_some());
        assert!(kb.index().owner_of("sore throat").is_none());
        assert!(kb.index().owner_of("high temperature").is_none());
    }

    #[test]
    fn test_index_preserves_declaration_order() {
        let kb = KnowledgeBase::builtin().unwrap();
        let first = kb.index().entries().next().unwrap();
        assert_eq!(first, ("fever", "fever"));
    }

    #[test]
    fn test_duplicate_keyword_across_conditions_fails() {
        let conditions = vec![
            Condition {
                id: "a".to_string(),
                keywords: vec!["shared".to_string()],
                medicines: vec![],
                advice: String::new(),
            },
            Condition {
                id: "b".to_string(),
                keywords: vec!["Shared".to_string()],
                medicines: vec![],
                advice: String::new(),
            },
        ];

        let err = KnowledgeBase::new(conditions, vec![]).unwrap_err();
        match err {
            SanaError::DuplicateKeyword { keyword, first, second } => {
                assert_eq!(keyword, "shared");
                assert_eq!(first, "a");
                assert_eq!(second, "b");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_repeated_keyword_within_one_condition_is_tolerated() {
        let conditions = vec![Condition {
            id: "a".to_string(),
            keywords: vec!["twice".to_string(), "twice".to_string()],
            medicines: vec![],
            advice: String::new(),
        }];

        let kb = KnowledgeBase::new(conditions, vec![]).unwrap();
        assert_eq!(kb.index().len(), 1);
    }

    #[test]
    fn test_keywords_are_normalized() {
        let conditions = vec![Condition {
            id: "a".to_string(),
            keywords: vec!["  Sore   Throat! ".to_string()],
            medicines: vec![],
            advice: String::new(),
        }];

        let kb = KnowledgeBase::new(conditions, vec!["Chest PAIN".to_string()]).unwrap();
        assert_eq!(kb.conditions()[0].keywords[0], "sore throat");
        assert_eq!(kb.emergency_phrases()[0], "chest pain");
    }
}
