//! Single-pass tokenizer over `{identifier}` placeholder spans.
//!
//! Anything that is not a well-formed placeholder (`{}`, `{ two words }`,
//! an unmatched brace) is literal text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

/// Iterator over the tokens of a template. Concatenating the literals and
/// `{name}` for each placeholder reproduces the input exactly.
pub struct Tokens<'a> {
    rest: &'a str,
}

pub fn tokenize(text: &str) -> Tokens<'_> {
    Tokens { rest: text }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.rest.is_empty() {
            return None;
        }
        if let Some(name) = leading_placeholder(self.rest) {
            self.rest = &self.rest[name.len() + 2..];
            return Some(Token::Placeholder(name));
        }
        let end = self
            .rest
            .match_indices('{')
            .map(|(i, _)| i)
            .find(|&i| i > 0 && leading_placeholder(&self.rest[i..]).is_some())
            .unwrap_or(self.rest.len());
        let (literal, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(Token::Literal(literal))
    }
}

/// Distinct placeholder names in order of first appearance.
pub fn placeholders(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for token in tokenize(text) {
        if let Token::Placeholder(name) = token {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}

/// Position of a victim placeholder: `victim` is 1, `victimN` is N for N >= 2.
pub fn victim_index(name: &str) -> Option<usize> {
    let suffix = name.strip_prefix("victim")?;
    if suffix.is_empty() {
        return Some(1);
    }
    if !suffix.bytes().all(|b| b.is_ascii_digit()) || suffix.starts_with('0') {
        return None;
    }
    suffix.parse::<usize>().ok().filter(|&n| n >= 2)
}

/// Canonical victim placeholder for a 1-based position.
pub fn victim_slot(position: usize) -> String {
    if position <= 1 {
        "victim".to_string()
    } else {
        format!("victim{position}")
    }
}

fn leading_placeholder(s: &str) -> Option<&str> {
    let inner = s.strip_prefix('{')?;
    let close = inner.find('}')?;
    let name = &inner[..close];
    is_identifier(name).then_some(name)
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
