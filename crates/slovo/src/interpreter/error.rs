//! Error types for word construction, template compilation, rendering and
//! persistence.

use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::types::{AttributeSet, WordClass};

/// Errors raised while building a word from a lemma.
#[derive(Debug, Error)]
pub enum WordError {
    /// The analyzer produced no usable reading.
    #[error("can not find grammar for word '{lemma}'")]
    NoGrammarFound { lemma: String },

    /// An inflected form was supplied where a citation form is required.
    #[error("word '{lemma}' is not in normal form: {attributes}")]
    NormalFormNeeded {
        lemma: String,
        attributes: AttributeSet,
    },
}

/// Errors raised while compiling templates or registering them in a
/// vocabulary.
#[derive(Debug, Error)]
pub enum CompileError {
    /// A placeholder with nothing before its first `|`.
    #[error("empty identifier in placeholder '{placeholder}' of template '{template}'")]
    EmptyIdentifier {
        placeholder: String,
        template: String,
    },

    /// A literal tag that is not a known grammeme.
    #[error(
        "unknown tag '{tag}' in placeholder '{placeholder}' of template '{template}'{}",
        suggestion_hint(suggestions)
    )]
    UnknownTag {
        tag: String,
        placeholder: String,
        template: String,
        suggestions: Vec<String>,
    },

    /// Identifiers used by the template that the caller did not declare.
    #[error("undeclared variables in template '{template}': [{}]", names.join(", "))]
    UndeclaredVariables {
        names: Vec<String>,
        template: String,
    },

    #[error("phrase type '{name}' is already registered")]
    TypeAlreadyRegistered { name: String },

    #[error("phrase type '{name}' is not registered")]
    TypeNotRegistered { name: String },

    #[error("hash collision: phrase types '{existing}' and '{name}' produce the same id")]
    TypeIdCollision { existing: String, name: String },
}

/// Errors raised while substituting variables into a compiled template.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A placeholder or dependency names a variable that was not supplied.
    #[error("variable '{name}' is not supplied for template '{template}'")]
    MissingVariable { name: String, template: String },
}

/// A persisted word or template record is malformed.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("word '{lemma}' of class {class:?} has {got} forms, expected {expected}")]
    Arity {
        lemma: String,
        class: WordClass,
        expected: usize,
        got: usize,
    },

    #[error("numeral record '{text}' is not an integer")]
    InvalidNumeral { text: String },

    #[error("unknown slot '{slot}' in stored template '{template}'")]
    UnknownSlot { slot: String, template: String },

    #[error("malformed stored template '{template}' at byte {offset}")]
    Syntax { template: String, offset: usize },
}

/// Errors that occur while reading or writing persisted stores.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to access '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A stored phrase type hashes to the id of a different type.
    #[error("hash collision in '{path}': phrase types '{existing}' and '{name}' produce the same id")]
    TypeIdCollision {
        path: PathBuf,
        existing: String,
        name: String,
    },

    /// An override entry names something that is neither a part of speech
    /// nor a grammeme.
    #[error("unknown tag '{tag}' for '{lemma}' in '{path}'")]
    UnknownTag {
        path: PathBuf,
        lemma: String,
        tag: String,
    },
}

/// Errors raised while importing a phrase corpus.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Word(#[from] WordError),

    #[error(transparent)]
    Render(#[from] RenderError),

    /// The module file name and its declared prefix differ.
    #[error("module '{path}' declares prefix '{prefix}', file name requires '{expected}'")]
    PrefixMismatch {
        path: PathBuf,
        prefix: String,
        expected: String,
    },

    #[error("module '{prefix}' declares a phrase type with an empty suffix")]
    EmptyTypeSuffix { prefix: String },

    #[error("no verbose name for variable '{variable}' in module '{prefix}'")]
    MissingVariableDescription { prefix: String, variable: String },

    /// A template rendered differently from the fixture's expected text.
    #[error(
        "wrong render for phrase '{template}' at char {position}: expected '{expected}', got '{actual}'"
    )]
    RenderMismatch {
        template: String,
        expected: String,
        actual: String,
        position: usize,
    },
}

/// Compute typo suggestions for an unknown name.
///
/// Returns up to three candidates within Levenshtein distance 1 (names of
/// three characters or fewer) or 2, closest first.
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

fn suggestion_hint(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}
