//! Core XrefStore implementation

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, XrefError};
use crate::export;
use crate::tokenize::{self, References};

/// Number of ranked words reported by `stats`
pub const DEFAULT_TOP_WORDS: usize = 5;

/// A named text and its inverted index
///
/// Records are immutable once built. Mutations build a replacement record and
/// swap it into the store, so content and references never diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRecord {
    content: String,
    references: References,
    token_count: usize,
}

impl TextRecord {
    /// Tokenize content and index it from scratch
    pub fn new(content: String) -> Self {
        let references = tokenize::build_index(&content);
        let token_count = tokenize::token_count(&content);
        Self {
            content,
            references,
            token_count,
        }
    }

    fn from_parts(content: String, references: References) -> Self {
        let token_count = tokenize::token_count(&content);
        Self {
            content,
            references,
            token_count,
        }
    }

    /// Raw content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Normalized word -> ascending positions
    pub fn references(&self) -> &References {
        &self.references
    }

    /// Number of tokens in content, including ones absent from the index
    pub fn token_count(&self) -> usize {
        self.token_count
    }

    fn positions_of(&self, word: &str) -> Option<&[usize]> {
        let key = tokenize::normalize(word);
        if key.is_empty() {
            return None;
        }
        self.references.get(&key).map(Vec::as_slice)
    }

    /// Record with every listed token overwritten by `replacement`
    fn with_tokens_replaced(&self, positions: &[usize], replacement: &str) -> Self {
        let mut tokens = tokenize::tokenize(&self.content);
        for &pos in positions {
            if let Some(token) = tokens.get_mut(pos) {
                *token = replacement;
            }
        }
        Self::new(tokenize::join_tokens(&tokens))
    }
}

/// Summary of one text's index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextStats {
    /// Distinct normalized words
    pub unique_words: usize,
    /// All tokens, including ones that normalize to nothing
    pub total_words: usize,
    /// Most frequent words, count descending then word ascending
    pub top_words: Vec<(String, usize)>,
}

/// In-memory store of named texts
#[derive(Debug, Default)]
pub struct XrefStore {
    texts: BTreeMap<String, TextRecord>,
}

impl XrefStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored texts
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// True when no text is stored
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// True when a text with this name exists
    pub fn contains(&self, name: &str) -> bool {
        self.texts.contains_key(name)
    }

    /// Look up a text
    pub fn get(&self, name: &str) -> Result<&TextRecord> {
        self.texts.get(name).ok_or_else(|| XrefError::NotFound {
            name: name.to_string(),
        })
    }

    /// All text names in lexical order
    pub fn names(&self) -> Vec<&str> {
        self.texts.keys().map(String::as_str).collect()
    }

    fn commit(&mut self, name: &str, record: TextRecord) {
        debug!(
            name,
            tokens = record.token_count,
            words = record.references.len(),
            "Committed text"
        );
        self.texts.insert(name.to_string(), record);
    }

    /// Validate a name for a text about to be created
    fn check_new_name(&self, name: &str) -> Result<()> {
        if !tokenize::is_valid_name(name) {
            return Err(XrefError::InvalidName { name: name.to_string() });
        }
        if self.texts.contains_key(name) {
            return Err(XrefError::AlreadyExists { name: name.to_string() });
        }
        Ok(())
    }

    /// Create a text from raw content
    pub fn build(&mut self, name: &str, content: &str) -> Result<()> {
        if !tokenize::is_valid_name(name) {
            return Err(XrefError::InvalidName { name: name.to_string() });
        }
        if content.is_empty() {
            return Err(XrefError::EmptyContent { name: name.to_string() });
        }
        if self.texts.contains_key(name) {
            return Err(XrefError::AlreadyExists { name: name.to_string() });
        }

        self.commit(name, TextRecord::new(content.to_string()));
        Ok(())
    }

    /// Insert a word as a new token at `position`; `position == token_count` appends
    pub fn insert(&mut self, name: &str, position: usize, word: &str) -> Result<()> {
        let record = self.get(name)?;
        if !tokenize::is_valid_word(word) {
            return Err(XrefError::InvalidWord { word: word.to_string() });
        }

        let mut tokens = tokenize::tokenize(&record.content);
        if position > tokens.len() {
            return Err(XrefError::InvalidPosition {
                position,
                token_count: tokens.len(),
            });
        }
        tokens.insert(position, word);

        let updated = TextRecord::new(tokenize::join_tokens(&tokens));
        self.commit(name, updated);
        Ok(())
    }

    /// Remove the inclusive token range `start..=end`
    pub fn remove(&mut self, name: &str, start: usize, end: usize) -> Result<()> {
        let record = self.get(name)?;

        let mut tokens = tokenize::tokenize(&record.content);
        if start > end || end >= tokens.len() {
            return Err(XrefError::InvalidRange {
                start,
                end,
                token_count: tokens.len(),
            });
        }
        tokens.drain(start..=end);

        let updated = TextRecord::new(tokenize::join_tokens(&tokens));
        self.commit(name, updated);
        Ok(())
    }

    /// Overwrite every occurrence of `old_word` with the literal `new_word`
    pub fn replace(&mut self, name: &str, old_word: &str, new_word: &str) -> Result<()> {
        let record = self.get(name)?;
        if old_word.is_empty() || new_word.is_empty() {
            return Err(XrefError::EmptyWord);
        }

        let positions = record.positions_of(old_word).ok_or_else(|| XrefError::WordNotFound {
            word: old_word.to_string(),
            name: name.to_string(),
        })?;

        let updated = record.with_tokens_replaced(positions, new_word);
        self.commit(name, updated);
        Ok(())
    }

    fn sources(&self, name1: &str, name2: &str) -> Result<(&TextRecord, &TextRecord)> {
        Ok((self.get(name1)?, self.get(name2)?))
    }

    /// Create a text from two others joined by a space, re-indexed from scratch
    pub fn concat(&mut self, new_name: &str, name1: &str, name2: &str) -> Result<()> {
        self.check_new_name(new_name)?;
        let (first, second) = self.sources(name1, name2)?;

        let content = format!("{} {}", first.content, second.content);
        self.commit(new_name, TextRecord::new(content));
        Ok(())
    }

    /// Create a text from two others by shifting the second index
    ///
    /// The second text's positions are offset by the first text's token count,
    /// which is exactly where its first token lands after concatenation, so the
    /// result equals `concat` over the same inputs.
    pub fn merge(&mut self, new_name: &str, name1: &str, name2: &str) -> Result<()> {
        self.check_new_name(new_name)?;
        let (first, second) = self.sources(name1, name2)?;

        let offset = first.token_count;
        let mut references = first.references.clone();
        for (word, positions) in &second.references {
            references
                .entry(word.clone())
                .or_default()
                .extend(positions.iter().map(|pos| pos + offset));
        }

        let content = format!("{} {}", first.content, second.content);
        self.commit(new_name, TextRecord::from_parts(content, references));
        Ok(())
    }

    /// Swap two words across two texts
    ///
    /// In `text1` every `word1` becomes `word2`, in `text2` every `word2`
    /// becomes `word1`. Both lookups are checked before either text changes.
    pub fn double_replace(&mut self, text1: &str, text2: &str, word1: &str, word2: &str) -> Result<()> {
        if text1 == text2 {
            return Err(XrefError::SameText { name: text1.to_string() });
        }
        let (first, second) = self.sources(text1, text2)?;
        if word1.is_empty() || word2.is_empty() {
            return Err(XrefError::EmptyWord);
        }

        let positions1 = first.positions_of(word1).ok_or_else(|| XrefError::WordNotFoundInText1 {
            word: word1.to_string(),
            name: text1.to_string(),
        })?;
        let positions2 = second.positions_of(word2).ok_or_else(|| XrefError::WordNotFoundInText2 {
            word: word2.to_string(),
            name: text2.to_string(),
        })?;

        let updated1 = first.with_tokens_replaced(positions1, word2);
        let updated2 = second.with_tokens_replaced(positions2, word1);
        self.commit(text1, updated1);
        self.commit(text2, updated2);
        Ok(())
    }

    /// Positions of a word, empty when it does not occur
    pub fn search(&self, name: &str, word: &str) -> Result<&[usize]> {
        let record = self.get(name)?;
        if word.is_empty() {
            return Err(XrefError::EmptyWord);
        }
        Ok(record.positions_of(word).unwrap_or(&[]))
    }

    fn check_integrity(&self, name: &str) -> Result<&TextRecord> {
        let record = self.get(name)?;
        let token_count = tokenize::token_count(&record.content);
        let max = record.references.values().filter_map(|positions| positions.last()).max();
        if let Some(&position) = max
            && position >= token_count
        {
            return Err(XrefError::CorruptedIndex {
                name: name.to_string(),
                position,
                token_count,
            });
        }
        Ok(record)
    }

    /// Verify the index against content and return the content
    pub fn reconstruct(&self, name: &str) -> Result<&str> {
        let record = self.check_integrity(name)?;
        Ok(&record.content)
    }

    /// Verify the index and write it to a file that must not exist yet
    pub fn reconstruct_to(&self, name: &str, output: &Path) -> Result<()> {
        let record = self.check_integrity(name)?;
        export::write_new(output, &record.references)
    }

    /// Write a text's index to a file, replacing whatever is there
    pub fn export(&self, name: &str, output: &Path) -> Result<()> {
        let record = self.get(name)?;
        export::write_truncate(output, &record.references)
    }

    /// Word counts with the default top-N
    pub fn stats(&self, name: &str) -> Result<TextStats> {
        self.stats_with_limit(name, DEFAULT_TOP_WORDS)
    }

    /// Word counts with a custom top-N
    pub fn stats_with_limit(&self, name: &str, limit: usize) -> Result<TextStats> {
        let record = self.get(name)?;

        let mut counts: Vec<(String, usize)> = record
            .references
            .iter()
            .map(|(word, positions)| (word.clone(), positions.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        counts.truncate(limit);

        Ok(TextStats {
            unique_words: record.references.len(),
            total_words: tokenize::token_count(&record.content),
            top_words: counts,
        })
    }

    /// Read a file and build a text named after its stem
    ///
    /// Returns the name of the new text.
    pub fn import(&mut self, path: &Path) -> Result<String> {
        let content = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::InvalidData => XrefError::InvalidFormat {
                path: path.to_path_buf(),
            },
            _ => XrefError::FileNotFound {
                path: path.to_path_buf(),
                source,
            },
        })?;
        if content.is_empty() {
            return Err(XrefError::InvalidFormat {
                path: path.to_path_buf(),
            });
        }

        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| XrefError::InvalidName {
                name: path.display().to_string(),
            })?
            .to_string();

        self.build(&name, &content)?;
        info!(name = %name, path = %path.display(), "Imported text");
        Ok(name)
    }

    /// Drop a text
    pub fn delete(&mut self, name: &str) -> Result<()> {
        self.texts.remove(name).ok_or_else(|| XrefError::NotFound {
            name: name.to_string(),
        })?;
        debug!(name, "Deleted text");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_with(texts: &[(&str, &str)]) -> XrefStore {
        let mut store = XrefStore::new();
        for (name, content) in texts {
            store.build(name, content).unwrap();
        }
        store
    }

    #[test]
    fn test_build_and_search() {
        let store = store_with(&[("a", "The cat sat on the Cat mat")]);
        let record = store.get("a").unwrap();
        assert_eq!(record.references()["the"], vec![0, 4]);
        assert_eq!(record.references()["cat"], vec![1, 5]);
        assert_eq!(store.search("a", "CAT").unwrap(), &[1, 5]);
        assert_eq!(store.search("a", "cat!").unwrap(), &[1, 5]);
        assert!(store.search("a", "dog").unwrap().is_empty());
        assert!(store.search("a", "123").unwrap().is_empty());
    }

    #[test]
    fn test_build_validation_order() {
        let mut store = store_with(&[("a", "x")]);
        assert!(matches!(store.build("bad name", ""), Err(XrefError::InvalidName { .. })));
        assert!(matches!(store.build("", "x"), Err(XrefError::InvalidName { .. })));
        assert!(matches!(store.build("a", ""), Err(XrefError::EmptyContent { .. })));
        assert!(matches!(store.build("a", "y"), Err(XrefError::AlreadyExists { .. })));
        assert_eq!(store.get("a").unwrap().content(), "x");
    }

    #[test]
    fn test_build_whitespace_only_content() {
        let mut store = XrefStore::new();
        store.build("blank", "  \t ").unwrap();
        let record = store.get("blank").unwrap();
        assert_eq!(record.token_count(), 0);
        assert!(record.references().is_empty());
        assert_eq!(store.reconstruct("blank").unwrap(), "  \t ");
    }

    #[test]
    fn test_build_keeps_raw_content() {
        let store = store_with(&[("a", "Hello,   world!")]);
        assert_eq!(store.reconstruct("a").unwrap(), "Hello,   world!");
        assert_eq!(store.get("a").unwrap().token_count(), 2);
    }

    #[test]
    fn test_insert_middle() {
        let mut store = store_with(&[("a", "The cat sat on the Cat mat")]);
        store.insert("a", 2, "big").unwrap();
        assert_eq!(store.reconstruct("a").unwrap(), "The cat big sat on the Cat mat");
        let refs = store.get("a").unwrap().references();
        assert_eq!(refs["sat"], vec![3]);
        assert_eq!(refs["big"], vec![2]);
        assert_eq!(refs["cat"], vec![1, 6]);
    }

    #[test]
    fn test_insert_at_end_and_beyond() {
        let mut store = store_with(&[("a", "one two")]);
        store.insert("a", 2, "three").unwrap();
        assert_eq!(store.reconstruct("a").unwrap(), "one two three");

        let err = store.insert("a", 4, "five").unwrap_err();
        assert!(matches!(
            err,
            XrefError::InvalidPosition {
                position: 4,
                token_count: 3
            }
        ));
        assert_eq!(store.reconstruct("a").unwrap(), "one two three");
    }

    #[test]
    fn test_insert_rejects_bad_input() {
        let mut store = store_with(&[("a", "one")]);
        assert!(matches!(store.insert("zz", 0, "w"), Err(XrefError::NotFound { .. })));
        assert!(matches!(store.insert("a", 0, "w1"), Err(XrefError::InvalidWord { .. })));
        assert!(matches!(store.insert("a", 0, ""), Err(XrefError::InvalidWord { .. })));
    }

    #[test]
    fn test_remove_range() {
        let mut store = store_with(&[("a", "one two three four five")]);
        store.remove("a", 0, 1).unwrap();
        assert_eq!(store.reconstruct("a").unwrap(), "three four five");
        assert_eq!(store.get("a").unwrap().references()["three"], vec![0]);
    }

    #[test]
    fn test_remove_bounds() {
        let mut store = store_with(&[("a", "one two three")]);
        assert!(matches!(store.remove("a", 2, 1), Err(XrefError::InvalidRange { .. })));
        assert!(matches!(store.remove("a", 0, 3), Err(XrefError::InvalidRange { .. })));
        assert!(matches!(store.remove("a", 3, 3), Err(XrefError::InvalidRange { .. })));
        assert!(matches!(store.remove("b", 0, 0), Err(XrefError::NotFound { .. })));
        assert_eq!(store.reconstruct("a").unwrap(), "one two three");

        store.remove("a", 2, 2).unwrap();
        assert_eq!(store.reconstruct("a").unwrap(), "one two");
    }

    #[test]
    fn test_remove_everything() {
        let mut store = store_with(&[("a", "one two")]);
        store.remove("a", 0, 1).unwrap();
        let record = store.get("a").unwrap();
        assert_eq!(record.content(), "");
        assert_eq!(record.token_count(), 0);
        assert!(record.references().is_empty());
    }

    #[test]
    fn test_replace_literal() {
        let mut store = store_with(&[("a", "The cat sat on the Cat mat")]);
        store.replace("a", "CAT", "Dog!").unwrap();
        assert_eq!(store.reconstruct("a").unwrap(), "The Dog! sat on the Dog! mat");
        let refs = store.get("a").unwrap().references();
        assert_eq!(refs["dog"], vec![1, 5]);
        assert!(!refs.contains_key("cat"));
    }

    #[test]
    fn test_replace_failures_leave_text() {
        let mut store = store_with(&[("a", "alpha beta")]);
        assert!(matches!(store.replace("a", "", "x"), Err(XrefError::EmptyWord)));
        assert!(matches!(store.replace("a", "alpha", ""), Err(XrefError::EmptyWord)));
        assert!(matches!(
            store.replace("a", "gamma", "x"),
            Err(XrefError::WordNotFound { .. })
        ));
        assert!(matches!(store.replace("a", "12", "x"), Err(XrefError::WordNotFound { .. })));
        assert!(matches!(store.replace("q", "alpha", "x"), Err(XrefError::NotFound { .. })));
        assert_eq!(store.reconstruct("a").unwrap(), "alpha beta");
    }

    #[test]
    fn test_concat() {
        let mut store = store_with(&[("a", "one two three"), ("b", "x y")]);
        store.concat("c", "a", "b").unwrap();
        assert_eq!(store.reconstruct("c").unwrap(), "one two three x y");
        assert_eq!(store.get("c").unwrap().references()["x"], vec![3]);
    }

    #[test]
    fn test_concat_failures() {
        let mut store = store_with(&[("a", "one"), ("b", "two")]);
        assert!(matches!(store.concat("c d", "a", "b"), Err(XrefError::InvalidName { .. })));
        assert!(matches!(store.concat("a", "a", "b"), Err(XrefError::AlreadyExists { .. })));
        match store.concat("c", "a", "zz") {
            Err(XrefError::NotFound { name }) => assert_eq!(name, "zz"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(!store.contains("c"));
    }

    #[test]
    fn test_merge_shifts_positions() {
        let mut store = store_with(&[("a", "one two three"), ("b", "x")]);
        store.merge("c", "a", "b").unwrap();
        assert_eq!(store.get("c").unwrap().references()["x"], vec![3]);
        assert_eq!(store.reconstruct("c").unwrap(), "one two three x");
    }

    #[test]
    fn test_merge_matches_concat() {
        let mut store = store_with(&[
            ("a", "The cat, 42 sat -- on the mat"),
            ("b", "the CAT ran 7 away from the mat!"),
        ]);
        store.merge("m", "a", "b").unwrap();
        store.concat("c", "a", "b").unwrap();
        assert_eq!(
            store.get("m").unwrap().references(),
            store.get("c").unwrap().references()
        );
        assert_eq!(store.get("m").unwrap(), store.get("c").unwrap());
    }

    #[test]
    fn test_merge_with_emptied_first_text() {
        let mut store = store_with(&[("a", "gone"), ("b", "kept words")]);
        store.remove("a", 0, 0).unwrap();
        store.merge("m", "a", "b").unwrap();
        store.concat("c", "a", "b").unwrap();
        assert_eq!(store.get("m").unwrap().references()["kept"], vec![0]);
        assert_eq!(
            store.get("m").unwrap().references(),
            store.get("c").unwrap().references()
        );
    }

    #[test]
    fn test_double_replace_swaps() {
        let mut store = store_with(&[("t1", "red fish red"), ("t2", "blue sky")]);
        store.double_replace("t1", "t2", "red", "blue").unwrap();
        assert_eq!(store.reconstruct("t1").unwrap(), "blue fish blue");
        assert_eq!(store.reconstruct("t2").unwrap(), "red sky");
        assert_eq!(store.search("t1", "blue").unwrap(), &[0, 2]);
        assert_eq!(store.search("t2", "red").unwrap(), &[0]);
    }

    #[test]
    fn test_double_replace_is_atomic() {
        let mut store = store_with(&[("t1", "red fish"), ("t2", "blue sky")]);

        assert!(matches!(
            store.double_replace("t1", "t2", "green", "blue"),
            Err(XrefError::WordNotFoundInText1 { .. })
        ));
        assert!(matches!(
            store.double_replace("t1", "t2", "red", "green"),
            Err(XrefError::WordNotFoundInText2 { .. })
        ));
        assert!(matches!(
            store.double_replace("t1", "t1", "red", "fish"),
            Err(XrefError::SameText { .. })
        ));
        assert!(matches!(
            store.double_replace("t1", "nope", "red", "blue"),
            Err(XrefError::NotFound { .. })
        ));
        assert!(matches!(
            store.double_replace("t1", "t2", "", "blue"),
            Err(XrefError::EmptyWord)
        ));

        assert_eq!(store.reconstruct("t1").unwrap(), "red fish");
        assert_eq!(store.reconstruct("t2").unwrap(), "blue sky");
    }

    #[test]
    fn test_search_requires_word() {
        let store = store_with(&[("a", "one")]);
        assert!(matches!(store.search("a", ""), Err(XrefError::EmptyWord)));
        assert!(matches!(store.search("b", "one"), Err(XrefError::NotFound { .. })));
    }

    #[test]
    fn test_reconstruct_detects_corruption() {
        let mut store = store_with(&[("a", "one two")]);
        let mut references = References::new();
        references.insert("one".to_string(), vec![0]);
        references.insert("ghost".to_string(), vec![2]);
        store
            .texts
            .insert("a".to_string(), TextRecord::from_parts("one two".to_string(), references));

        match store.reconstruct("a") {
            Err(XrefError::CorruptedIndex {
                position, token_count, ..
            }) => {
                assert_eq!(position, 2);
                assert_eq!(token_count, 2);
            }
            other => panic!("expected CorruptedIndex, got {:?}", other),
        }
    }

    #[test]
    fn test_reconstruct_to_file() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("index.txt");
        let store = store_with(&[("a", "b a b")]);

        store.reconstruct_to("a", &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "a:1\nb:0,2\n");

        assert!(matches!(store.reconstruct_to("a", &out), Err(XrefError::IoExists { .. })));
        assert!(matches!(store.reconstruct_to("x", &out), Err(XrefError::NotFound { .. })));
    }

    #[test]
    fn test_export_overwrites() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("index.txt");
        fs::write(&out, "stale").unwrap();
        let store = store_with(&[("a", "Cat cat dog")]);

        store.export("a", &out).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap(), "cat:0,1\ndog:2\n");
    }

    #[test]
    fn test_export_unwritable_target() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("missing").join("out.txt");
        let store = store_with(&[("a", "Cat cat dog")]);

        assert!(matches!(store.export("a", &out), Err(XrefError::IoError { .. })));
        assert!(matches!(store.export("b", &out), Err(XrefError::NotFound { .. })));
    }

    #[test]
    fn test_stats_ranking() {
        let store = store_with(&[("a", "b a c b a d 99 e f b")]);
        let stats = store.stats("a").unwrap();
        assert_eq!(stats.unique_words, 6);
        assert_eq!(stats.total_words, 10);
        assert_eq!(
            stats.top_words,
            vec![
                ("b".to_string(), 3),
                ("a".to_string(), 2),
                ("c".to_string(), 1),
                ("d".to_string(), 1),
                ("e".to_string(), 1),
            ]
        );

        let stats = store.stats_with_limit("a", 1).unwrap();
        assert_eq!(stats.top_words, vec![("b".to_string(), 3)]);
    }

    #[test]
    fn test_import_uses_file_stem() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("notes.txt");
        fs::write(&path, "Some imported words").unwrap();

        let mut store = XrefStore::new();
        assert_eq!(store.import(&path).unwrap(), "notes");
        assert_eq!(store.search("notes", "words").unwrap(), &[2]);
        assert!(matches!(store.import(&path), Err(XrefError::AlreadyExists { .. })));
    }

    #[test]
    fn test_import_failures() {
        let temp = TempDir::new().unwrap();
        let mut store = XrefStore::new();

        let missing = temp.path().join("missing.txt");
        assert!(matches!(store.import(&missing), Err(XrefError::FileNotFound { .. })));

        let empty = temp.path().join("empty.txt");
        fs::write(&empty, "").unwrap();
        assert!(matches!(store.import(&empty), Err(XrefError::InvalidFormat { .. })));

        let binary = temp.path().join("binary.txt");
        fs::write(&binary, [0xff, 0xfe]).unwrap();
        assert!(matches!(store.import(&binary), Err(XrefError::InvalidFormat { .. })));

        let bad_name = temp.path().join("bad name.txt");
        fs::write(&bad_name, "words").unwrap();
        assert!(matches!(store.import(&bad_name), Err(XrefError::InvalidName { .. })));

        assert!(store.is_empty());
    }

    #[test]
    fn test_import_whitespace_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("spaces.txt");
        fs::write(&path, " \n\n ").unwrap();

        let mut store = XrefStore::new();
        assert_eq!(store.import(&path).unwrap(), "spaces");
        assert_eq!(store.get("spaces").unwrap().token_count(), 0);
    }

    #[test]
    fn test_delete_and_names() {
        let mut store = store_with(&[("b", "x"), ("a", "y")]);
        assert_eq!(store.names(), vec!["a", "b"]);
        store.delete("a").unwrap();
        assert_eq!(store.names(), vec!["b"]);
        assert!(matches!(store.delete("a"), Err(XrefError::NotFound { .. })));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_search_then_replace_same_word_keeps_content() {
        let mut store = store_with(&[("a", "one two one three")]);
        for word in ["one", "two", "three"] {
            let before = store.search("a", word).unwrap().to_vec();
            store.replace("a", word, word).unwrap();
            assert_eq!(store.search("a", word).unwrap(), before.as_slice());
        }
        assert_eq!(store.reconstruct("a").unwrap(), "one two one three");
    }
}
