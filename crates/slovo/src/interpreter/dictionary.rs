//! The word store.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use log::warn;

use crate::interpreter::LoadError;
use crate::types::{Word, normalize_key};

/// Words keyed by normalized lemma.
///
/// The first word stored under a key wins; later additions are ignored
/// unless they explicitly replace it. Lookups never fail: a missing key
/// yields a [`Word::Fake`] marker.
///
/// # Example
///
/// ```
/// use slovo::{Dictionary, Word};
///
/// let mut dictionary = Dictionary::new();
/// assert!(dictionary.add(Word::fake("Ёж")));
/// assert!(!dictionary.add(Word::fake("еж")));
///
/// assert_eq!(dictionary.get("ЕЖ").lemma(), "ёж");
/// assert_eq!(dictionary.get("кот").lemma(), "<word not found: кот>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashMap<String, Word>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `word` unless its key is already taken. Returns whether it was
    /// stored.
    pub fn add(&mut self, word: Word) -> bool {
        let key = word.key();
        if self.words.contains_key(&key) {
            return false;
        }
        self.words.insert(key, word);
        true
    }

    /// Store `word`, returning the word it displaced.
    pub fn replace(&mut self, word: Word) -> Option<Word> {
        self.words.insert(word.key(), word)
    }

    /// The word stored under `key`, or a fake word naming the miss.
    pub fn get(&self, key: &str) -> Cow<'_, Word> {
        let key = normalize_key(key);
        match self.words.get(&key) {
            Some(word) => Cow::Borrowed(word),
            None => {
                warn!("word '{key}' is not in the dictionary");
                Cow::Owned(Word::fake(format!("<word not found: {key}>")))
            }
        }
    }

    pub fn find(&self, key: &str) -> Option<&Word> {
        self.words.get(&normalize_key(key))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.words.contains_key(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }

    /// Entries sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Word)> {
        let sorted: BTreeMap<&str, &Word> =
            self.words.iter().map(|(k, w)| (k.as_str(), w)).collect();
        sorted.into_iter()
    }

    /// Keys of words without a form table, sorted.
    pub fn undefined_words(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .words
            .iter()
            .filter(|(_, word)| !word.has_forms())
            .map(|(key, _)| key.as_str())
            .collect();
        keys.sort_unstable();
        keys
    }

    /// Write the dictionary as a JSON object keyed by normalized lemma.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let sorted: BTreeMap<&String, &Word> = self.words.iter().collect();
        let content = serde_json::to_string_pretty(&sorted).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, content).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Add the words stored at `path`, keeping existing entries.
    ///
    /// An empty file adds nothing. Returns the number of words added.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(0);
        }

        let stored: BTreeMap<String, Word> =
            serde_json::from_str(&content).map_err(|e| LoadError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut added = 0;
        for word in stored.into_values() {
            if self.add(word) {
                added += 1;
            }
        }
        Ok(added)
    }
}
