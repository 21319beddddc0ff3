//! Interactive chat loop.
//!
//! Reads stdin lines, answers each one independently, and keeps the session
//! transcript. The transcript never leaves the process and is discarded when
//! the session ends.

use anyhow::Result;
use sana_core::transcript::{ConversationTurn, Transcript};
use sana_core::Engine;
use std::io::{self, BufRead};
use tracing::debug;

const EXIT_WORDS: &[&str] = &["exit", "quit", "bye"];

/// Run the chat session until EOF or an exit word
pub fn run_chat(engine: &Engine) -> Result<()> {
    crate::output::print_welcome();

    let mut transcript = Transcript::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        crate::output::print_prompt();

        let input = match lines.next() {
            Some(Ok(line)) => line.trim().to_string(),
            Some(Err(e)) => {
                eprintln!("Error reading input: {}", e);
                continue;
            }
            None => break, // EOF
        };

        if input.is_empty() {
            continue;
        }

        let lowered = input.to_lowercase();
        if EXIT_WORDS.contains(&lowered.as_str()) {
            crate::output::print_goodbye();
            break;
        }

        let reply = engine.respond(&input);
        debug!(kind = ?reply.kind, "turn answered");
        crate::output::print_reply(&reply);
        transcript.push(ConversationTurn::new(input, reply));
    }

    if transcript.was_capped() {
        eprintln!(
            "Note: session transcript capped, {} turns dropped",
            transcript.dropped_count()
        );
    }

    Ok(())
}
