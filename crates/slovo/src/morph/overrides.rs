//! Curated per-lemma corrections applied on top of analyzer readings.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::interpreter::LoadError;
use crate::types::{Grammeme, PartOfSpeech, normalize_key, resolve_grammeme};

/// A manual correction for one lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Override {
    /// Only readings of this part of speech are considered.
    pub part_of_speech: Option<PartOfSpeech>,
    /// Applied to the winning reading's attributes.
    pub grammemes: Vec<Grammeme>,
}

impl Override {
    /// Parse a comma-separated entry such as `"noun,plural,plural"`.
    ///
    /// The first token naming a part of speech becomes the class hint; every
    /// other token must be a grammeme. Returns the offending token on failure.
    pub fn parse(entry: &str) -> Result<Override, String> {
        let mut result = Override::default();
        for token in entry.split(',').map(str::trim).filter(|t| !t.is_empty()) {
            if result.part_of_speech.is_none() {
                if let Some(pos) = PartOfSpeech::resolve(token) {
                    result.part_of_speech = Some(pos);
                    continue;
                }
            }
            let grammeme = resolve_grammeme(token).ok_or_else(|| token.to_string())?;
            result.grammemes.push(grammeme);
        }
        Ok(result)
    }
}

/// The override table, keyed by normalized lemma.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    entries: HashMap<String, Override>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load overrides from a JSON object mapping lemma to entry string.
    ///
    /// A missing file yields an empty table.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw: BTreeMap<String, String> =
            serde_json::from_str(&content).map_err(|e| LoadError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut overrides = Self::new();
        for (lemma, entry) in raw {
            let parsed = Override::parse(&entry).map_err(|tag| LoadError::UnknownTag {
                path: path.to_path_buf(),
                lemma: lemma.clone(),
                tag,
            })?;
            overrides.insert(&lemma, parsed);
        }
        Ok(overrides)
    }

    pub fn insert(&mut self, lemma: &str, entry: Override) {
        self.entries.insert(normalize_key(lemma), entry);
    }

    pub fn get(&self, lemma: &str) -> Option<&Override> {
        self.entries.get(&normalize_key(lemma))
    }

    /// Lemmas with an entry, in unspecified order.
    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
