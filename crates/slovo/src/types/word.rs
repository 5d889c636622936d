use std::borrow::Cow;
use std::fmt::{Display, Formatter, Result as FmtResult};

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::{AttributeSet, Case, Gender, Grammeme, LetterCase, Number, Person, Tense};
use crate::interpreter::{RecordError, pluralize};

/// Storage tag identifying a [`Word`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordClass {
    Noun,
    Adjective,
    Pronoun,
    Verb,
    Participle,
    ShortParticiple,
    NounGroup,
    Numeral,
    Fake,
}

impl WordClass {
    /// Length of a populated paradigm table, or `None` for classes that do
    /// not inflect.
    pub const fn arity(self) -> Option<usize> {
        match self {
            WordClass::Noun | WordClass::NounGroup => Some(12),
            WordClass::Adjective | WordClass::Pronoun => Some(24),
            WordClass::Verb => Some(16),
            WordClass::Participle => Some(48),
            WordClass::ShortParticiple => Some(8),
            WordClass::Numeral | WordClass::Fake => None,
        }
    }
}

/// Lemma, pre-rendered surface forms and intrinsic properties of an
/// inflecting word.
///
/// An empty form table means the analyzer knew nothing about the word; such
/// words render as their lemma.
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder)]
#[builder(on(String, into))]
pub struct Paradigm {
    lemma: String,
    #[builder(default)]
    forms: Vec<String>,
    #[builder(default)]
    properties: Vec<Grammeme>,
}

impl Paradigm {
    /// A paradigm with no forms: renders as `lemma` in every slot.
    pub fn unknown(lemma: impl Into<String>) -> Self {
        Paradigm::builder().lemma(lemma).build()
    }

    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    pub fn forms(&self) -> &[String] {
        &self.forms
    }

    pub fn properties(&self) -> &[Grammeme] {
        &self.properties
    }

    fn form(&self, index: usize) -> String {
        self.forms
            .get(index)
            .cloned()
            .unwrap_or_else(|| self.lemma.clone())
    }
}

/// A dictionary word, one variant per word class.
///
/// Rendering and agreement are exhaustive matches over the variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WordRecord", into = "WordRecord")]
pub enum Word {
    /// 12 forms: number × case.
    Noun(Paradigm),
    /// 24 forms: gender × case singular, then plural cases.
    Adjective(Paradigm),
    /// Same table shape as `Adjective`.
    Pronoun(Paradigm),
    /// 16 forms: past (three genders, plural), then present and future by
    /// person × number.
    Verb(Paradigm),
    /// 48 forms: an adjective table per tense (present, past).
    Participle(Paradigm),
    /// 8 forms: three genders and plural per tense (present, past).
    ShortParticiple(Paradigm),
    /// A multi-word phrase inflected like a noun.
    NounGroup(Paradigm),
    /// A literal count; renders as its decimal text.
    Numeral(i64),
    /// A literal stand-in that renders as itself.
    Fake(String),
}

impl Word {
    /// Build a word of `class`, checking the form table arity.
    pub fn new(
        class: WordClass,
        lemma: impl Into<String>,
        forms: Vec<String>,
        properties: Vec<Grammeme>,
    ) -> Result<Word, RecordError> {
        let lemma = lemma.into();
        if let Some(arity) = class.arity() {
            if !forms.is_empty() && forms.len() != arity {
                return Err(RecordError::Arity {
                    lemma,
                    class,
                    expected: arity,
                    got: forms.len(),
                });
            }
        }

        let paradigm = Paradigm {
            lemma,
            forms,
            properties,
        };
        let word = match class {
            WordClass::Noun => Word::Noun(paradigm),
            WordClass::Adjective => Word::Adjective(paradigm),
            WordClass::Pronoun => Word::Pronoun(paradigm),
            WordClass::Verb => Word::Verb(paradigm),
            WordClass::Participle => Word::Participle(paradigm),
            WordClass::ShortParticiple => Word::ShortParticiple(paradigm),
            WordClass::NounGroup => Word::NounGroup(paradigm),
            WordClass::Numeral => {
                let value = paradigm.lemma.trim().parse::<i64>().map_err(|_| {
                    RecordError::InvalidNumeral {
                        text: paradigm.lemma.clone(),
                    }
                })?;
                Word::Numeral(value)
            }
            WordClass::Fake => Word::Fake(paradigm.lemma),
        };
        Ok(word)
    }

    /// A stand-in word that renders `text` lower-cased.
    pub fn fake(text: impl AsRef<str>) -> Word {
        Word::Fake(text.as_ref().to_lowercase())
    }

    pub fn numeral(value: i64) -> Word {
        Word::Numeral(value)
    }

    pub fn class(&self) -> WordClass {
        match self {
            Word::Noun(_) => WordClass::Noun,
            Word::Adjective(_) => WordClass::Adjective,
            Word::Pronoun(_) => WordClass::Pronoun,
            Word::Verb(_) => WordClass::Verb,
            Word::Participle(_) => WordClass::Participle,
            Word::ShortParticiple(_) => WordClass::ShortParticiple,
            Word::NounGroup(_) => WordClass::NounGroup,
            Word::Numeral(_) => WordClass::Numeral,
            Word::Fake(_) => WordClass::Fake,
        }
    }

    pub fn paradigm(&self) -> Option<&Paradigm> {
        match self {
            Word::Noun(p)
            | Word::Adjective(p)
            | Word::Pronoun(p)
            | Word::Verb(p)
            | Word::Participle(p)
            | Word::ShortParticiple(p)
            | Word::NounGroup(p) => Some(p),
            Word::Numeral(_) | Word::Fake(_) => None,
        }
    }

    /// The display lemma.
    pub fn lemma(&self) -> Cow<'_, str> {
        match self {
            Word::Numeral(n) => Cow::Owned(n.to_string()),
            Word::Fake(text) => Cow::Borrowed(text),
            Word::Noun(p)
            | Word::Adjective(p)
            | Word::Pronoun(p)
            | Word::Verb(p)
            | Word::Participle(p)
            | Word::ShortParticiple(p)
            | Word::NounGroup(p) => Cow::Borrowed(&p.lemma),
        }
    }

    /// Dictionary key under which this word is stored.
    pub fn key(&self) -> String {
        normalize_key(&self.lemma())
    }

    pub fn forms(&self) -> &[String] {
        self.paradigm().map(Paradigm::forms).unwrap_or_default()
    }

    pub fn properties(&self) -> &[Grammeme] {
        self.paradigm().map(Paradigm::properties).unwrap_or_default()
    }

    /// True when the word has a populated paradigm table.
    pub fn has_forms(&self) -> bool {
        !self.forms().is_empty()
    }

    /// Baseline attributes: defaults updated with the word's properties.
    pub fn attributes(&self) -> AttributeSet {
        AttributeSet::from_grammemes(self.properties())
    }

    /// Surface form for `attrs`.
    ///
    /// Paradigm words with an empty table render their lemma. A
    /// `Capitalized` letter case upper-cases the first character.
    pub fn render(&self, attrs: &AttributeSet) -> String {
        let form = match self {
            Word::Numeral(n) => return n.to_string(),
            Word::Fake(text) => return text.clone(),
            Word::Noun(p) | Word::NounGroup(p) => p.form(noun_index(attrs)),
            Word::Adjective(p) | Word::Pronoun(p) => p.form(adjective_index(attrs)),
            Word::Verb(p) => p.form(verb_index(attrs)),
            Word::Participle(p) => p.form(participle_index(attrs)),
            Word::ShortParticiple(p) => p.form(short_participle_index(attrs)),
        };

        match attrs.letter_case {
            LetterCase::Lower => form,
            LetterCase::Capitalized => capitalize(&form),
        }
    }

    /// Make `target` agree with `dependency`, which is rendered at
    /// `dependency_attrs`.
    ///
    /// Agreement only flows from nouns (and noun groups). A numeral
    /// dependency applies the pluralization rule instead of copying.
    pub fn propagate_from(
        &self,
        target: &mut AttributeSet,
        dependency: &Word,
        dependency_attrs: &AttributeSet,
    ) {
        match dependency {
            Word::Numeral(count) => match self {
                Word::Noun(_)
                | Word::NounGroup(_)
                | Word::Adjective(_)
                | Word::Pronoun(_)
                | Word::Verb(_)
                | Word::Participle(_)
                | Word::ShortParticiple(_) => pluralize(*count, target),
                Word::Numeral(_) | Word::Fake(_) => {}
            },
            Word::Noun(_) | Word::NounGroup(_) => match self {
                Word::Noun(_) | Word::NounGroup(_) => {
                    target.number = dependency_attrs.number;
                }
                Word::Adjective(_) | Word::Pronoun(_) | Word::Participle(_) => {
                    target.number = dependency_attrs.number;
                    target.gender = dependency_attrs.gender;
                    target.case = dependency_attrs.case;
                }
                Word::Verb(_) | Word::ShortParticiple(_) => {
                    target.number = dependency_attrs.number;
                    target.gender = dependency_attrs.gender;
                }
                Word::Numeral(_) | Word::Fake(_) => {}
            },
            Word::Adjective(_)
            | Word::Pronoun(_)
            | Word::Verb(_)
            | Word::Participle(_)
            | Word::ShortParticiple(_)
            | Word::Fake(_) => {}
        }
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.lemma())
    }
}

/// Normalize a lemma into a dictionary key: lower case, with ё folded to е.
pub fn normalize_key(text: &str) -> String {
    text.to_lowercase().replace('ё', "е")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn noun_index(attrs: &AttributeSet) -> usize {
    attrs.number.index() * Case::ALL.len() + attrs.case.index()
}

fn adjective_index(attrs: &AttributeSet) -> usize {
    let cases = Case::ALL.len();
    match attrs.gender.index() {
        Some(gender) if attrs.number == Number::Singular => gender * cases + attrs.case.index(),
        _ => Gender::ALL.len() * cases + attrs.case.index(),
    }
}

fn verb_index(attrs: &AttributeSet) -> usize {
    let past_forms = Gender::ALL.len() + 1;
    let personal = Number::ALL.len() * attrs.person.index() + attrs.number.index();
    match attrs.tense {
        Tense::Past => short_gender_index(attrs),
        Tense::Present => past_forms + personal,
        Tense::Future => past_forms + Person::ALL.len() * Number::ALL.len() + personal,
    }
}

fn participle_index(attrs: &AttributeSet) -> usize {
    let block = Gender::ALL.len() * Case::ALL.len() + Case::ALL.len();
    tense_block(attrs.tense) * block + adjective_index(attrs)
}

fn short_participle_index(attrs: &AttributeSet) -> usize {
    tense_block(attrs.tense) * (Gender::ALL.len() + 1) + short_gender_index(attrs)
}

/// Gender slot in a three-genders-plus-plural row.
fn short_gender_index(attrs: &AttributeSet) -> usize {
    match attrs.gender.index() {
        Some(gender) if attrs.number == Number::Singular => gender,
        _ => Gender::ALL.len(),
    }
}

fn tense_block(tense: Tense) -> usize {
    match tense {
        Tense::Present | Tense::Future => 0,
        Tense::Past => 1,
    }
}

/// Persisted shape of a [`Word`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct WordRecord {
    normalized: String,
    #[serde(rename = "type")]
    class: WordClass,
    #[serde(default)]
    forms: Vec<String>,
    #[serde(default)]
    properties: Vec<Grammeme>,
}

impl From<Word> for WordRecord {
    fn from(word: Word) -> Self {
        let class = word.class();
        match word {
            Word::Numeral(n) => WordRecord {
                normalized: n.to_string(),
                class,
                forms: Vec::new(),
                properties: Vec::new(),
            },
            Word::Fake(text) => WordRecord {
                normalized: text,
                class,
                forms: Vec::new(),
                properties: Vec::new(),
            },
            Word::Noun(p)
            | Word::Adjective(p)
            | Word::Pronoun(p)
            | Word::Verb(p)
            | Word::Participle(p)
            | Word::ShortParticiple(p)
            | Word::NounGroup(p) => WordRecord {
                normalized: p.lemma,
                class,
                forms: p.forms,
                properties: p.properties,
            },
        }
    }
}

impl TryFrom<WordRecord> for Word {
    type Error = RecordError;

    fn try_from(record: WordRecord) -> Result<Self, Self::Error> {
        Word::new(
            record.class,
            record.normalized,
            record.forms,
            record.properties,
        )
    }
}
