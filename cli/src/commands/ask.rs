//! # PyChat Ask Command
//!
//! File: cli/src/commands/ask.rs
//! Author: PyChat Maintainers
//!
//! `pychat ask <message...>` runs a single message through the tutor and
//! prints the response. Nothing is recorded; the history only exists inside a
//! running server.
//!
//! ```bash
//! pychat ask tell me about lists
//! pychat ask "show me an example"
//! ```
//!
use crate::core::error::Result;
use crate::tutor::{RandomPicker, Tutor};
use clap::Parser;
use tracing::debug;

#[derive(Parser, Debug)]
pub struct AskArgs {
    /// The message to send. Multiple words are joined with spaces.
    #[arg(required = true, num_args = 1.., trailing_var_arg = true)]
    pub message: Vec<String>,
}

pub async fn handle_ask(args: AskArgs) -> Result<()> {
    let reply = respond(&Tutor::new(RandomPicker), &args.message);
    println!("{}", reply);
    Ok(())
}

/// Joins and lowercases the words the way `/chat` lowercases its query.
fn respond(tutor: &Tutor, words: &[String]) -> String {
    let message = words.join(" ").to_lowercase();
    debug!("Classifying {:?}", message);
    tutor.classify(&message)
}
