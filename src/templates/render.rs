use std::collections::HashMap;

use super::tokens::{Token, tokenize};

/// Placeholder values for one rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: HashMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

/// Substitute every bound placeholder. Unbound placeholders stay in the
/// output verbatim, so a content pack with a typo still renders.
pub fn render(text: &str, bindings: &Bindings) -> String {
    let mut out = String::with_capacity(text.len() + 32);
    for token in tokenize(text) {
        match token {
            Token::Literal(s) => out.push_str(s),
            Token::Placeholder(name) => match bindings.get(name) {
                Some(value) => out.push_str(value),
                None => {
                    out.push('{');
                    out.push_str(name);
                    out.push('}');
                }
            },
        }
    }
    out
}
