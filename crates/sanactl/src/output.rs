//! Terminal rendering for sanactl - clean, ASCII-first output.

use owo_colors::OwoColorize;
use sana_core::{ReplyKind, TurnReply};
use std::io::{self, Write};

const WRAP_WIDTH: usize = 78;

/// Welcome banner for the chat session
pub fn print_welcome() {
    println!();
    println!("{}", "Sana - symptom advice assistant".bold());
    println!("Describe a symptom and I'll suggest what it could be.");
    println!(
        "{}",
        "Tip: try 'headache', 'dry cough', or 'stomach pain'. Type 'exit' to leave.".dimmed()
    );
    println!();
}

pub fn print_goodbye() {
    println!();
    println!("Take care. Sana is not a doctor; see one if symptoms persist.");
    println!();
}

/// Prompt for the next user line
pub fn print_prompt() {
    print!("{} ", "you>".bold());
    let _ = io::stdout().flush();
}

/// Render one reply with severity coloring:
/// emergency in red, fallback in yellow, advice plain
pub fn print_reply(reply: &TurnReply) {
    println!();
    match &reply.kind {
        ReplyKind::Emergency { .. } => {
            for line in wrapped_lines(&reply.text) {
                println!("{}", line.bright_red());
            }
        }
        ReplyKind::NoMatch => {
            for line in wrapped_lines(&reply.text) {
                println!("{}", line.yellow());
            }
        }
        ReplyKind::Advice { .. } => {
            for line in wrapped_lines(&reply.text) {
                println!("{}", line);
            }
        }
    }
    println!();
}

/// Wrap long lines to the terminal width, keeping bullet continuation
/// lines indented past the bullet
pub fn wrapped_lines(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.lines() {
        if line.len() <= WRAP_WIDTH {
            out.push(line.to_string());
            continue;
        }
        let indent = if line.starts_with("  * ") { "    " } else { "" };
        let options = textwrap::Options::new(WRAP_WIDTH).subsequent_indent(indent);
        out.extend(textwrap::wrap(line, options).into_iter().map(|c| c.into_owned()));
    }
    out
}
