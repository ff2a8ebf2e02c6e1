//! # Message Classifier
//!
//! File: cli/src/tutor/classifier.rs
//! Author: PyChat Maintainers
//!
//! ## Overview
//!
//! The `Tutor` maps a free-text message to exactly one response string and
//! answers direct topic lookups. Matching is plain substring containment over
//! already-lowercased input, checked in this order:
//!
//! 1. Any topic name, in dictionary order
//! 2. `"hello"` or `"hi"` (greeting)
//! 3. `"help"` (guidance)
//! 4. `"example"` (a snippet chosen by the `ExamplePicker`)
//! 5. Anything else echoes the message back
//!
//! Containment is not word-aware, so "looping" matches `loop` and "this"
//! counts as a greeting.
//!
//! ```rust,ignore
//! let tutor = Tutor::new(RandomPicker);
//! let reply = tutor.classify("tell me about lists");
//! assert!(reply.starts_with("Let me teach you about list:"));
//! ```
//!
use super::picker::ExamplePicker;
use super::topics::{self, EXAMPLES, TOPICS};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub const GREETING: &str = "Hello! What would you like to learn about Python today?";

pub const GUIDANCE: &str = "I can help you learn about Python concepts! Try asking about: loops, lists, dictionaries, functions, or classes.";

pub const TOPIC_NOT_FOUND: &str = "Topic not found";

/// Result of a direct topic lookup, serialized as-is by `GET /learn`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Lesson {
    Found {
        topic: String,
        explanation: String,
    },
    NotFound {
        error: String,
        available_topics: Vec<String>,
    },
}

/// # Python Tutor (`Tutor`)
///
/// Stateless apart from the example picker, which is shared so the tutor can
/// be cloned into every request handler.
#[derive(Clone)]
pub struct Tutor {
    picker: Arc<dyn ExamplePicker>,
}

impl fmt::Debug for Tutor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tutor").finish_non_exhaustive()
    }
}

impl Tutor {
    /// Creates a tutor that draws examples from `picker`.
    pub fn new(picker: impl ExamplePicker + 'static) -> Self {
        Self {
            picker: Arc::new(picker),
        }
    }

    /// Responds to a message. The caller lowercases the input; every input,
    /// the empty string included, gets a response.
    pub fn classify(&self, message: &str) -> String {
        if let Some((topic, explanation)) =
            TOPICS.iter().find(|(topic, _)| message.contains(topic))
        {
            return format!("Let me teach you about {topic}: {explanation}");
        }

        if message.contains("hello") || message.contains("hi") {
            GREETING.to_string()
        } else if message.contains("help") {
            GUIDANCE.to_string()
        } else if message.contains("example") {
            self.random_example().to_string()
        } else {
            format!(
                "You said: {message}. Try asking about Python concepts or type 'help' for guidance!"
            )
        }
    }

    /// Looks up a topic by name, ignoring case.
    pub fn lookup(&self, topic: &str) -> Lesson {
        let topic = topic.to_lowercase();
        match topics::explanation(&topic) {
            Some(explanation) => Lesson::Found {
                topic,
                explanation: explanation.to_string(),
            },
            None => Lesson::NotFound {
                error: TOPIC_NOT_FOUND.to_string(),
                available_topics: topics::names().into_iter().map(String::from).collect(),
            },
        }
    }

    fn random_example(&self) -> &'static str {
        // Clamp in case a picker ignores its contract.
        let index = self.picker.pick(EXAMPLES.len()).min(EXAMPLES.len() - 1);
        EXAMPLES[index]
    }
}
