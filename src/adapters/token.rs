//! # Token List Adapter
//!
//! Classlist-style collaborator over `String` tokens, modeled on the
//! membership semantics of an element's class attribute: an ordered set of
//! whitespace-free tokens serialized as one space-joined string.
//!
//! This adapter overrides both optional primitives:
//! - `sanitize` splits candidates on ASCII whitespace, drops empties and
//!   deduplicates while keeping first-occurrence order, so `"btn active"`
//!   arrives at the derived layer as two tokens
//! - `clear` truncates in one call instead of deleting token by token

use crate::ports::ListStore;

/// Ordered set of string tokens with attribute-string parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<String>,
}

impl TokenList {
    /// Create an empty token list.
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Parse a space-joined attribute string into a token list.
    pub fn from_attr(attr: &str) -> Self {
        let mut list = Self::new();
        for token in attr.split_ascii_whitespace() {
            ListStore::insert(&mut list, token.to_string());
        }
        list
    }

    /// Serialize back to a space-joined attribute string.
    pub fn to_attr(&self) -> String {
        self.tokens.join(" ")
    }
}

impl ListStore<String> for TokenList {
    fn insert(&mut self, token: String) {
        if !self.tokens.contains(&token) {
            self.tokens.push(token);
        }
    }

    fn delete(&mut self, token: &String) {
        self.tokens.retain(|t| t != token);
    }

    fn contains(&self, token: &String) -> bool {
        self.tokens.contains(token)
    }

    fn values(&self) -> Vec<String> {
        self.tokens.clone()
    }

    fn item(&self, index: usize) -> Option<String> {
        self.tokens.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn clear(&mut self) {
        self.tokens.clear();
    }

    fn sanitize(&self, tokens: Vec<String>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for token in tokens {
            for piece in token.split_ascii_whitespace() {
                if !out.iter().any(|t| t == piece) {
                    out.push(piece.to_string());
                }
            }
        }
        out
    }
}
