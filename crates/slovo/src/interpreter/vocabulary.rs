//! The phrase store: named phrase types, each with its templates.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::interpreter::{CompileError, LoadError, Template};
use crate::types::PhraseTypeId;

/// Templates grouped by phrase type.
///
/// Types must be registered before phrases are added to them.
///
/// # Example
///
/// ```
/// use slovo::{Template, Vocabulary};
///
/// let mut vocabulary = Vocabulary::new();
/// vocabulary.register_type("battle_hit").unwrap();
/// vocabulary
///     .add_phrase("battle_hit", Template::compile("[[hero]] бьёт").unwrap())
///     .unwrap();
///
/// assert!(vocabulary.contains("battle_hit"));
/// assert!(vocabulary.random_phrase("battle_hit").is_some());
/// assert!(vocabulary.random_phrase("battle_miss").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    phrases: BTreeMap<String, Vec<Template>>,
    ids: HashMap<PhraseTypeId, String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a phrase type.
    pub fn register_type(&mut self, name: &str) -> Result<(), CompileError> {
        if self.phrases.contains_key(name) {
            return Err(CompileError::TypeAlreadyRegistered {
                name: name.to_string(),
            });
        }

        if let Some(existing) = colliding_name(&self.ids, name) {
            return Err(CompileError::TypeIdCollision {
                existing: existing.to_string(),
                name: name.to_string(),
            });
        }

        self.ids.insert(PhraseTypeId::from_name(name), name.to_string());
        self.phrases.insert(name.to_string(), Vec::new());
        Ok(())
    }

    /// Append a template to a registered type.
    pub fn add_phrase(&mut self, name: &str, template: Template) -> Result<(), CompileError> {
        let phrases = self
            .phrases
            .get_mut(name)
            .ok_or_else(|| CompileError::TypeNotRegistered {
                name: name.to_string(),
            })?;
        phrases.push(template);
        Ok(())
    }

    /// Drop a type and its templates, returning the templates.
    pub fn remove_type(&mut self, name: &str) -> Option<Vec<Template>> {
        self.ids.remove(&PhraseTypeId::from_name(name));
        self.phrases.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.phrases.contains_key(name)
    }

    /// Templates of a type, in insertion order.
    pub fn phrases(&self, name: &str) -> &[Template] {
        self.phrases.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    /// Registered type names, sorted.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.phrases.keys().map(String::as_str)
    }

    pub fn name_for_id(&self, id: PhraseTypeId) -> Option<&str> {
        self.ids.get(&id).map(String::as_str)
    }

    /// A uniformly chosen template of `name`, or `None` for an unknown or
    /// empty type.
    pub fn random_phrase(&self, name: &str) -> Option<&Template> {
        self.random_phrase_with(name, &mut rand::thread_rng())
    }

    pub fn random_phrase_with<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> Option<&Template> {
        self.phrases.get(name)?.choose(rng)
    }

    /// Like [`Vocabulary::random_phrase`], falling back to `default`.
    pub fn random_phrase_or<'a>(&'a self, name: &str, default: &'a Template) -> &'a Template {
        self.random_phrase(name).unwrap_or(default)
    }

    pub fn random_phrase_by_id(&self, id: PhraseTypeId) -> Option<&Template> {
        self.random_phrase(self.name_for_id(id)?)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn clear(&mut self) {
        self.phrases.clear();
        self.ids.clear();
    }

    /// Write all types and their templates as JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), LoadError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(&self.phrases).map_err(|e| LoadError::Json {
            path: path.to_path_buf(),
            source: e,
        })?;
        fs::write(path, content).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Load types stored at `path`.
    ///
    /// A stored type replaces a type of the same name. A stored type whose id
    /// belongs to another type fails the whole load. An empty file loads
    /// nothing. Returns the number of types loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        if content.trim().is_empty() {
            return Ok(0);
        }

        let stored: BTreeMap<String, Vec<Template>> =
            serde_json::from_str(&content).map_err(|e| LoadError::Json {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut ids = self.ids.clone();
        for name in stored.keys() {
            if let Some(existing) = colliding_name(&ids, name) {
                return Err(LoadError::TypeIdCollision {
                    path: path.to_path_buf(),
                    existing: existing.to_string(),
                    name: name.clone(),
                });
            }
            ids.insert(PhraseTypeId::from_name(name), name.clone());
        }

        let count = stored.len();
        self.ids = ids;
        self.phrases.extend(stored);
        Ok(count)
    }
}

/// The type already holding the id of `name`, unless it is `name` itself.
fn colliding_name<'a>(ids: &'a HashMap<PhraseTypeId, String>, name: &str) -> Option<&'a str> {
    ids.get(&PhraseTypeId::from_name(name))
        .map(String::as_str)
        .filter(|existing| *existing != name)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A vocabulary where `battle_hit`'s id already belongs to another type.
    fn vocabulary_with_taken_id() -> Vocabulary {
        let mut vocabulary = Vocabulary::new();
        vocabulary.register_type("battle_miss").unwrap();
        vocabulary.ids.insert(
            PhraseTypeId::from_name("battle_hit"),
            "battle_miss".to_string(),
        );
        vocabulary
    }

    #[test]
    fn test_register_rejects_taken_id() {
        let mut vocabulary = vocabulary_with_taken_id();
        let err = vocabulary.register_type("battle_hit").unwrap_err();
        assert!(matches!(
            err,
            CompileError::TypeIdCollision { ref existing, ref name }
                if existing == "battle_miss" && name == "battle_hit"
        ));
    }

    #[test]
    fn test_load_rejects_taken_id() {
        let mut stored = Vocabulary::new();
        stored.register_type("battle_hit").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        stored.save(&path).unwrap();

        let mut vocabulary = vocabulary_with_taken_id();
        let err = vocabulary.load(&path).unwrap_err();
        assert!(matches!(
            err,
            LoadError::TypeIdCollision { ref existing, ref name, .. }
                if existing == "battle_miss" && name == "battle_hit"
        ));
        assert!(!vocabulary.contains("battle_hit"));
        assert_eq!(
            vocabulary.name_for_id(PhraseTypeId::from_name("battle_hit")),
            Some("battle_miss")
        );
    }

    #[test]
    fn test_load_replaces_same_named_type() {
        let mut stored = Vocabulary::new();
        stored.register_type("battle_hit").unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vocabulary.json");
        stored.save(&path).unwrap();

        let mut vocabulary = Vocabulary::new();
        vocabulary.register_type("battle_hit").unwrap();
        assert_eq!(vocabulary.load(&path).unwrap(), 1);
        assert_eq!(
            vocabulary.name_for_id(PhraseTypeId::from_name("battle_hit")),
            Some("battle_hit")
        );
    }
}
