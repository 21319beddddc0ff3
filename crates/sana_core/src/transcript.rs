//! Caller-owned conversation transcript.
//!
//! The engine is stateless per call; the presentation shell owns the session
//! log. Append-only, in-memory only, discarded when the session ends.
//! Enforces a size cap with a dropped-turn diagnostic.

use crate::engine::TurnReply;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum turns kept in one session transcript
pub const MAX_TRANSCRIPT_TURNS: usize = 500;

/// Who is speaking in a rendered transcript
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    You,
    Sana,
}

impl std::fmt::Display for Speaker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::You => write!(f, "you"),
            Self::Sana => write!(f, "sana"),
        }
    }
}

/// One user message and its reply
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub asked_at: DateTime<Utc>,
    pub user_text: String,
    pub reply: TurnReply,
}

impl ConversationTurn {
    pub fn new(user_text: impl Into<String>, reply: TurnReply) -> Self {
        Self {
            asked_at: Utc::now(),
            user_text: user_text.into(),
            reply,
        }
    }
}

/// Append-only session transcript
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    /// Turns in chronological order
    pub turns: Vec<ConversationTurn>,
    /// Number of turns dropped due to cap (not serialized)
    #[serde(skip)]
    dropped_turns: usize,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            turns: Vec::new(),
            dropped_turns: 0,
        }
    }

    /// Push a turn, enforcing the cap. Returns true if the turn was kept.
    /// Never silently truncates; the dropped count stays visible.
    pub fn push(&mut self, turn: ConversationTurn) -> bool {
        if self.turns.len() >= MAX_TRANSCRIPT_TURNS {
            self.dropped_turns += 1;
            false
        } else {
            self.turns.push(turn);
            true
        }
    }

    /// Check if turns were dropped
    pub fn was_capped(&self) -> bool {
        self.dropped_turns > 0
    }

    /// Number of dropped turns
    pub fn dropped_count(&self) -> usize {
        self.dropped_turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }
}
// Tests are in tests/transcript_tests.rs
