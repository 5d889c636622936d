use std::collections::HashMap;

use super::{Grammeme, Word};

/// What a caller binds to an external placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// A lemma looked up in the dictionary.
    Lemma(String),
    /// A count; agrees dependent words through pluralization.
    Number(i64),
    /// A word passed through as is.
    Word(Word),
}

/// A bound value plus extra grammemes applied to its baseline attributes.
///
/// # Example
///
/// ```
/// use slovo::{Grammeme, Value, Variable};
///
/// let hero = Variable::from("обезьянка").with(&[Grammeme::Plural]);
/// assert_eq!(hero.value, Value::Lemma("обезьянка".to_string()));
/// assert_eq!(hero.grammemes, vec![Grammeme::Plural]);
///
/// let count: Variable = 5.into();
/// assert_eq!(count.value, Value::Number(5));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub value: Value,
    pub grammemes: Vec<Grammeme>,
}

impl Variable {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            grammemes: Vec::new(),
        }
    }

    /// Add grammemes applied after the word's own properties.
    pub fn with(mut self, grammemes: &[Grammeme]) -> Self {
        self.grammemes.extend_from_slice(grammemes);
        self
    }
}

/// Caller-supplied bindings, keyed by external placeholder id.
pub type Variables = HashMap<String, Variable>;

impl From<&str> for Variable {
    fn from(lemma: &str) -> Self {
        Variable::new(Value::Lemma(lemma.to_string()))
    }
}

impl From<String> for Variable {
    fn from(lemma: String) -> Self {
        Variable::new(Value::Lemma(lemma))
    }
}

impl From<i64> for Variable {
    fn from(n: i64) -> Self {
        Variable::new(Value::Number(n))
    }
}

impl From<i32> for Variable {
    fn from(n: i32) -> Self {
        Variable::new(Value::Number(i64::from(n)))
    }
}

impl From<u32> for Variable {
    fn from(n: u32) -> Self {
        Variable::new(Value::Number(i64::from(n)))
    }
}

impl From<Word> for Variable {
    fn from(word: Word) -> Self {
        Variable::new(Value::Word(word))
    }
}
