//! Sana Control - CLI shell for the Sana symptom assistant.
//!
//! Thin presentation layer over sana_core: reads raw text, renders replies.
//! All classification logic lives in the core crate.

pub mod commands;
pub mod output;
pub mod repl;
