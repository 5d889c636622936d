//! The morphological analyzer boundary.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::interpreter::LoadError;
use crate::types::{Grammeme, PartOfSpeech, normalize_key, resolve_grammeme};

/// One candidate reading of a word form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub grammemes: Vec<Grammeme>,
    /// Readings as a personal name are never chosen.
    #[serde(default)]
    pub proper_name: bool,
}

impl Reading {
    pub fn new(part_of_speech: PartOfSpeech, grammemes: &[Grammeme]) -> Self {
        Self {
            part_of_speech,
            grammemes: grammemes.to_vec(),
            proper_name: false,
        }
    }

    pub fn proper_name(mut self) -> Self {
        self.proper_name = true;
        self
    }
}

/// A morphological analyzer.
///
/// Implementations enumerate readings for a word and perform letter-level
/// inflection. Readings must come back in a stable order: ties during
/// disambiguation keep the first one.
pub trait Analyzer {
    /// Candidate readings for `word`, in the analyzer's enumeration order.
    fn readings(&self, word: &str) -> Vec<Reading>;

    /// Inflect `lemma`, read as `part_of_speech`, into the form carrying
    /// `grammemes`.
    fn inflect(&self, lemma: &str, part_of_speech: PartOfSpeech, grammemes: &[Grammeme]) -> String;
}

/// A table-driven analyzer backed by explicit readings and forms.
///
/// Form lookups ignore the order of the requested grammemes. A missing form
/// inflects to the lemma itself.
///
/// # Example
///
/// ```
/// use slovo::morph::{Analyzer, Reading, TableAnalyzer};
/// use slovo::{Grammeme, PartOfSpeech};
///
/// let mut analyzer = TableAnalyzer::new();
/// analyzer.add_reading(
///     "монета",
///     Reading::new(PartOfSpeech::Noun, &[Grammeme::Nominative, Grammeme::Singular]),
/// );
/// analyzer.add_form("монета", &[Grammeme::Genitive, Grammeme::Plural], "монет");
///
/// let form = analyzer.inflect("монета", PartOfSpeech::Noun, &[Grammeme::Plural, Grammeme::Genitive]);
/// assert_eq!(form, "монет");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableAnalyzer {
    entries: HashMap<String, TableEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TableEntry {
    #[serde(default)]
    readings: Vec<Reading>,
    #[serde(default)]
    forms: BTreeMap<String, String>,
}

impl TableAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a table from a JSON file.
    ///
    /// The file maps each word to `{"readings": [...], "forms": {...}}`,
    /// where form keys are comma-separated grammeme names.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let raw: BTreeMap<String, TableEntry> =
            serde_json::from_str(&content).map_err(|e| LoadError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut analyzer = TableAnalyzer::new();
        for (word, entry) in raw {
            let mut forms = BTreeMap::new();
            for (key, form) in entry.forms {
                let grammemes = parse_form_key(&key).map_err(|tag| LoadError::UnknownTag {
                    path: path.to_path_buf(),
                    lemma: word.clone(),
                    tag,
                })?;
                forms.insert(form_key(&grammemes), form);
            }
            analyzer.entries.insert(
                normalize_key(&word),
                TableEntry {
                    readings: entry.readings,
                    forms,
                },
            );
        }
        Ok(analyzer)
    }

    pub fn add_reading(&mut self, word: &str, reading: Reading) {
        self.entries
            .entry(normalize_key(word))
            .or_default()
            .readings
            .push(reading);
    }

    pub fn add_form(&mut self, lemma: &str, grammemes: &[Grammeme], form: &str) {
        self.entries
            .entry(normalize_key(lemma))
            .or_default()
            .forms
            .insert(form_key(grammemes), form.to_string());
    }
}

impl Analyzer for TableAnalyzer {
    fn readings(&self, word: &str) -> Vec<Reading> {
        self.entries
            .get(&normalize_key(word))
            .map(|entry| entry.readings.clone())
            .unwrap_or_default()
    }

    fn inflect(&self, lemma: &str, _part_of_speech: PartOfSpeech, grammemes: &[Grammeme]) -> String {
        self.entries
            .get(&normalize_key(lemma))
            .and_then(|entry| entry.forms.get(&form_key(grammemes)))
            .cloned()
            .unwrap_or_else(|| lemma.to_string())
    }
}

/// Order-independent key for a grammeme combination.
fn form_key(grammemes: &[Grammeme]) -> String {
    let mut sorted = grammemes.to_vec();
    sorted.sort();
    sorted.dedup();
    sorted
        .iter()
        .map(|g| g.name())
        .collect::<Vec<_>>()
        .join(",")
}

fn parse_form_key(key: &str) -> Result<Vec<Grammeme>, String> {
    key.split(',')
        .filter(|tag| !tag.trim().is_empty())
        .map(|tag| resolve_grammeme(tag).ok_or_else(|| tag.trim().to_string()))
        .collect()
}
