use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Word classes an analyzer reports for a reading.
///
/// Analyzer-native class names are mapped to this set at the analyzer
/// boundary and never travel further.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartOfSpeech {
    Noun,
    Adjective,
    Pronoun,
    Verb,
    Infinitive,
    Participle,
    ShortParticiple,
}

impl PartOfSpeech {
    pub const fn name(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Pronoun => "pronoun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Infinitive => "infinitive",
            PartOfSpeech::Participle => "participle",
            PartOfSpeech::ShortParticiple => "short_participle",
        }
    }

    /// Resolve a class name, accepting the Russian dictionary abbreviations.
    ///
    /// Substantive pronouns (`МС`) inflect like nouns. Short adjectives
    /// (`КР_ПРИЛ`) have no paradigm table and are rejected.
    pub fn resolve(name: &str) -> Option<PartOfSpeech> {
        let pos = match name.trim() {
            "noun" | "С" | "сущ" | "МС" => PartOfSpeech::Noun,
            "adjective" | "П" | "прил" => PartOfSpeech::Adjective,
            "pronoun" | "МС-П" => PartOfSpeech::Pronoun,
            "verb" | "Г" | "гл" => PartOfSpeech::Verb,
            "infinitive" | "ИНФИНИТИВ" => PartOfSpeech::Infinitive,
            "participle" | "ПРИЧАСТИЕ" => PartOfSpeech::Participle,
            "short_participle" | "КР_ПРИЧАСТИЕ" => PartOfSpeech::ShortParticiple,
            _ => return None,
        };
        Some(pos)
    }
}

impl Display for PartOfSpeech {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}
