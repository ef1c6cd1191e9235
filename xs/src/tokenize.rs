//! Tokenization and index construction
//!
//! A token is a maximal run of non-whitespace characters. Its position is its
//! zero-based index in the token sequence, counting tokens that normalize to
//! nothing. Every operation that changes content goes through `tokenize`,
//! `join_tokens` and `build_index` so positions mean the same thing everywhere.

use std::collections::BTreeMap;

/// Normalized word -> ascending token positions
pub type References = BTreeMap<String, Vec<usize>>;

/// Split content into raw tokens on runs of whitespace
pub fn tokenize(content: &str) -> Vec<&str> {
    content.split_whitespace().collect()
}

/// Number of whitespace-delimited tokens in content
pub fn token_count(content: &str) -> usize {
    content.split_whitespace().count()
}

/// Strip every non-alphabetic character and lowercase the rest
pub fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Join tokens with a single space
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(token.as_ref());
    }
    out
}

/// Build the inverted index for content from scratch
pub fn build_index(content: &str) -> References {
    let mut references = References::new();
    for (position, token) in content.split_whitespace().enumerate() {
        let word = normalize(token);
        if !word.is_empty() {
            references.entry(word).or_default().push(position);
        }
    }
    references
}

/// Text names are non-empty and made of alphanumerics, `_` and `-`
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

/// Insertable words are non-empty and purely alphabetic
pub fn is_valid_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(char::is_alphabetic)
}
