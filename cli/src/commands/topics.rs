//! # PyChat Topics Command
//!
//! File: cli/src/commands/topics.rs
//! Author: PyChat Maintainers
//!
//! `pychat topics` lists every topic the tutor knows with its explanation,
//! in the order the classifier checks them.
//!
use crate::core::error::Result;
use crate::tutor::topics::TOPICS;

pub async fn handle_topics() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    TOPICS
        .iter()
        .map(|(name, explanation)| format!("{name:<12}{explanation}\n"))
        .collect()
}
