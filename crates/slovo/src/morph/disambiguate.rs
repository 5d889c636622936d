//! Choosing the canonical reading of a lemma among analyzer candidates.
//!
//! Each reading is scored by how far it is from the citation form of its
//! class; the closest wins and ties keep the analyzer's order.

use log::debug;

use super::{Analyzer, Overrides, Reading};
use crate::interpreter::WordError;
use crate::types::{AttributeSet, Case, Gender, Number, PartOfSpeech, Tense};

/// Score given to infinitive readings so they lose to any other class.
pub const INFINITIVE_DISTANCE: u32 = 666;

/// The reading chosen for a lemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grammar {
    pub part_of_speech: PartOfSpeech,
    pub attributes: AttributeSet,
}

/// Number of attribute dimensions in which `attrs` differs from the citation
/// form of `part_of_speech`.
pub fn citation_distance(part_of_speech: PartOfSpeech, attrs: &AttributeSet) -> u32 {
    let differs = |condition: bool| u32::from(condition);
    let case = differs(attrs.case != Case::Nominative);
    let gender = differs(attrs.gender != Gender::Masculine);
    let plural = differs(attrs.number == Number::Plural);
    let tense = differs(attrs.tense != Tense::Past);

    match part_of_speech {
        // Pluralia tantum count as citation forms
        PartOfSpeech::Noun => {
            case + differs(attrs.number == Number::Plural && attrs.gender != Gender::PluralOnly)
        }
        PartOfSpeech::Verb => tense + gender + plural,
        PartOfSpeech::Adjective | PartOfSpeech::Pronoun => case + gender + plural,
        PartOfSpeech::Participle | PartOfSpeech::ShortParticiple => tense + case + gender + plural,
        PartOfSpeech::Infinitive => INFINITIVE_DISTANCE,
    }
}

/// Pick the closest reading to a citation form.
///
/// Proper-name readings are skipped. With a `hint`, only readings of that
/// part of speech are considered. Returns `None` when nothing survives.
pub fn select_reading(readings: &[Reading], hint: Option<PartOfSpeech>) -> Option<Grammar> {
    let mut best: Option<(u32, Grammar)> = None;

    for reading in readings {
        if reading.proper_name {
            continue;
        }
        if hint.is_some_and(|pos| pos != reading.part_of_speech) {
            continue;
        }

        let attributes = AttributeSet::from_grammemes(&reading.grammemes);
        let distance = citation_distance(reading.part_of_speech, &attributes);
        if best.is_none_or(|(best_distance, _)| distance < best_distance) {
            best = Some((
                distance,
                Grammar {
                    part_of_speech: reading.part_of_speech,
                    attributes,
                },
            ));
        }
    }

    best.map(|(_, grammar)| grammar)
}

/// Disambiguate `word` using the analyzer's readings and the override table.
///
/// Override grammemes are applied to the winner after selection.
pub fn disambiguate<A: Analyzer + ?Sized>(
    analyzer: &A,
    word: &str,
    overrides: &Overrides,
) -> Result<Grammar, WordError> {
    let correction = overrides.get(word);
    let hint = correction.and_then(|o| o.part_of_speech);

    let readings = analyzer.readings(word);
    let mut grammar =
        select_reading(&readings, hint).ok_or_else(|| WordError::NoGrammarFound {
            lemma: word.to_string(),
        })?;

    if let Some(correction) = correction {
        grammar.attributes.update(&correction.grammemes);
    }

    debug!(
        "disambiguated '{word}' as {} {} out of {} readings",
        grammar.part_of_speech,
        grammar.attributes,
        readings.len()
    );
    Ok(grammar)
}
