//! # Topic Dictionary
//!
//! File: cli/src/tutor/topics.rs
//! Author: PyChat Maintainers
//!
//! The fixed set of Python concepts the tutor knows about, plus the pool of
//! example snippets handed out for "example" requests. Order matters: the
//! classifier scans `TOPICS` front to back and the first hit wins.

/// Topic name and explanation pairs, in lookup order.
pub const TOPICS: [(&str, &str); 5] = [
    (
        "loop",
        "In Python, loops (for and while) are used for iteration. Example: for i in range(5): print(i)",
    ),
    (
        "list",
        "Lists are ordered collections in Python. Example: my_list = [1, 2, 3]. You can append, remove, and modify elements.",
    ),
    (
        "dictionary",
        "Dictionaries store key-value pairs. Example: my_dict = {'name': 'John', 'age': 25}",
    ),
    (
        "function",
        "Functions are defined using 'def'. Example: def greet(name): return f'Hello {name}!'",
    ),
    (
        "class",
        "Classes are blueprints for objects. Example: class Dog: def bark(self): return 'Woof!'",
    ),
];

/// Snippets returned for messages asking for an example.
pub const EXAMPLES: [&str; 4] = [
    "Here's a list comprehension example: squares = [x**2 for x in range(5)]",
    "Here's a lambda function example: add = lambda x, y: x + y",
    "Here's a string formatting example: name = 'World'; print(f'Hello {name}!')",
    "Here's a try/except example: try:\n    result = 10/0\nexcept ZeroDivisionError:\n    print('Cannot divide by zero')",
];

/// Returns the explanation for an exact topic name.
pub fn explanation(topic: &str) -> Option<&'static str> {
    TOPICS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, text)| *text)
}

/// All topic names, in dictionary order.
pub fn names() -> Vec<&'static str> {
    TOPICS.iter().map(|(name, _)| *name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_keep_dictionary_order() {
        assert_eq!(names(), ["loop", "list", "dictionary", "function", "class"]);
    }

    #[test]
    fn explanation_requires_exact_name() {
        assert!(explanation("class").is_some());
        assert!(explanation("classes").is_none());
        assert!(explanation("Class").is_none());
    }

    #[test]
    fn try_except_example_is_multiline() {
        assert_eq!(EXAMPLES[3].lines().count(), 4);
        assert!(EXAMPLES[3].contains("\n    print('Cannot divide by zero')"));
    }
}
