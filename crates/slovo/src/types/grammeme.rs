//! The closed set of grammatical tags accepted by templates and analyzers.
//!
//! Every tag belongs to exactly one [`Category`]. Tags have a canonical English
//! name used for storage and several accepted aliases: short English forms and
//! the Russian abbreviations common in morphological dictionaries.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The grammatical dimension a [`Grammeme`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Case,
    Number,
    Gender,
    Tense,
    Person,
    LetterCase,
    /// Accepted in templates, not tracked by `AttributeSet`.
    Animacy,
}

/// A single grammatical tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Grammeme {
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
    Singular,
    Plural,
    Masculine,
    Feminine,
    Neuter,
    Present,
    Past,
    Future,
    First,
    Second,
    Third,
    Lower,
    Capitalized,
    Animate,
    Inanimate,
}

impl Grammeme {
    /// All grammemes in category order.
    pub const ALL: [Grammeme; 21] = [
        Grammeme::Nominative,
        Grammeme::Genitive,
        Grammeme::Dative,
        Grammeme::Accusative,
        Grammeme::Instrumental,
        Grammeme::Prepositional,
        Grammeme::Singular,
        Grammeme::Plural,
        Grammeme::Masculine,
        Grammeme::Feminine,
        Grammeme::Neuter,
        Grammeme::Present,
        Grammeme::Past,
        Grammeme::Future,
        Grammeme::First,
        Grammeme::Second,
        Grammeme::Third,
        Grammeme::Lower,
        Grammeme::Capitalized,
        Grammeme::Animate,
        Grammeme::Inanimate,
    ];

    /// Canonical name, used when serializing.
    pub const fn name(self) -> &'static str {
        match self {
            Grammeme::Nominative => "nominative",
            Grammeme::Genitive => "genitive",
            Grammeme::Dative => "dative",
            Grammeme::Accusative => "accusative",
            Grammeme::Instrumental => "instrumental",
            Grammeme::Prepositional => "prepositional",
            Grammeme::Singular => "singular",
            Grammeme::Plural => "plural",
            Grammeme::Masculine => "masculine",
            Grammeme::Feminine => "feminine",
            Grammeme::Neuter => "neuter",
            Grammeme::Present => "present",
            Grammeme::Past => "past",
            Grammeme::Future => "future",
            Grammeme::First => "first",
            Grammeme::Second => "second",
            Grammeme::Third => "third",
            Grammeme::Lower => "lower",
            Grammeme::Capitalized => "capitalized",
            Grammeme::Animate => "animate",
            Grammeme::Inanimate => "inanimate",
        }
    }

    pub const fn category(self) -> Category {
        match self {
            Grammeme::Nominative
            | Grammeme::Genitive
            | Grammeme::Dative
            | Grammeme::Accusative
            | Grammeme::Instrumental
            | Grammeme::Prepositional => Category::Case,
            Grammeme::Singular | Grammeme::Plural => Category::Number,
            Grammeme::Masculine | Grammeme::Feminine | Grammeme::Neuter => Category::Gender,
            Grammeme::Present | Grammeme::Past | Grammeme::Future => Category::Tense,
            Grammeme::First | Grammeme::Second | Grammeme::Third => Category::Person,
            Grammeme::Lower | Grammeme::Capitalized => Category::LetterCase,
            Grammeme::Animate | Grammeme::Inanimate => Category::Animacy,
        }
    }
}

/// Resolve a tag name or alias to a grammeme.
///
/// Matching is exact after trimming surrounding whitespace; aliases are
/// listed in [`accepted_grammeme_names`].
pub fn resolve_grammeme(name: &str) -> Option<Grammeme> {
    let grammeme = match canonicalize_alias(name.trim()) {
        "nominative" => Grammeme::Nominative,
        "genitive" => Grammeme::Genitive,
        "dative" => Grammeme::Dative,
        "accusative" => Grammeme::Accusative,
        "instrumental" => Grammeme::Instrumental,
        "prepositional" => Grammeme::Prepositional,
        "singular" => Grammeme::Singular,
        "plural" => Grammeme::Plural,
        "masculine" => Grammeme::Masculine,
        "feminine" => Grammeme::Feminine,
        "neuter" => Grammeme::Neuter,
        "present" => Grammeme::Present,
        "past" => Grammeme::Past,
        "future" => Grammeme::Future,
        "first" => Grammeme::First,
        "second" => Grammeme::Second,
        "third" => Grammeme::Third,
        "lower" => Grammeme::Lower,
        "capitalized" => Grammeme::Capitalized,
        "animate" => Grammeme::Animate,
        "inanimate" => Grammeme::Inanimate,
        _ => return None,
    };
    Some(grammeme)
}

/// Every accepted tag spelling, canonical names first.
///
/// Used for diagnostics and typo suggestions.
pub fn accepted_grammeme_names() -> &'static [&'static str] {
    ACCEPTED_NAMES
}

fn canonicalize_alias(name: &str) -> &str {
    match name {
        "nom" | "им" => "nominative",
        "gen" | "рд" => "genitive",
        "dat" | "дт" => "dative",
        "acc" | "вн" => "accusative",
        "ins" | "тв" => "instrumental",
        "prep" | "пр" => "prepositional",
        "sg" | "ед" => "singular",
        "pl" | "мн" => "plural",
        "masc" | "мр" => "masculine",
        "fem" | "жр" => "feminine",
        "neut" | "ср" => "neuter",
        "pres" | "нст" => "present",
        "прш" => "past",
        "fut" | "буд" => "future",
        "1st" | "1л" => "first",
        "2nd" | "2л" => "second",
        "3rd" | "3л" => "third",
        "строч" => "lower",
        "cap" | "загл" => "capitalized",
        "anim" | "од" => "animate",
        "inan" | "но" => "inanimate",
        other => other,
    }
}

const ACCEPTED_NAMES: &[&str] = &[
    "nominative",
    "genitive",
    "dative",
    "accusative",
    "instrumental",
    "prepositional",
    "singular",
    "plural",
    "masculine",
    "feminine",
    "neuter",
    "present",
    "past",
    "future",
    "first",
    "second",
    "third",
    "lower",
    "capitalized",
    "animate",
    "inanimate",
    "nom",
    "gen",
    "dat",
    "acc",
    "ins",
    "prep",
    "sg",
    "pl",
    "masc",
    "fem",
    "neut",
    "pres",
    "fut",
    "1st",
    "2nd",
    "3rd",
    "cap",
    "anim",
    "inan",
    "им",
    "рд",
    "дт",
    "вн",
    "тв",
    "пр",
    "ед",
    "мн",
    "мр",
    "жр",
    "ср",
    "нст",
    "прш",
    "буд",
    "1л",
    "2л",
    "3л",
    "строч",
    "загл",
    "од",
    "но",
];

impl Display for Grammeme {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

impl Serialize for Grammeme {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for Grammeme {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        resolve_grammeme(&name)
            .ok_or_else(|| D::Error::custom(format!("unknown grammeme '{name}'")))
    }
}
