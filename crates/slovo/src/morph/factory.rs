//! Paradigm construction: turning a citation form into a [`Word`] with its
//! full form table.

use log::{debug, warn};

use super::{Analyzer, Grammar, Overrides, disambiguate};
use crate::interpreter::WordError;
use crate::types::{
    AttributeSet, Case, Gender, Grammeme, Number, Paradigm, PartOfSpeech, Person, Tense, Word,
    normalize_key,
};

/// Tense blocks of participle paradigms, in table order.
const PARTICIPLE_TENSES: [Tense; 2] = [Tense::Present, Tense::Past];

/// Builds words by consulting an analyzer and the override table.
///
/// Class-specific builders degrade to an empty form table when the analyzer
/// knows nothing about a word. [`WordFactory::create`] does not: it needs a
/// reading to pick the class.
pub struct WordFactory<'a, A: Analyzer + ?Sized> {
    analyzer: &'a A,
    overrides: &'a Overrides,
}

impl<'a, A: Analyzer + ?Sized> WordFactory<'a, A> {
    pub fn new(analyzer: &'a A, overrides: &'a Overrides) -> Self {
        Self {
            analyzer,
            overrides,
        }
    }

    /// Build a word, choosing its class from the disambiguated reading.
    ///
    /// Text containing a space becomes a noun group. An infinitive reading is
    /// rejected: verbs are registered by their past masculine singular form.
    pub fn create(&self, text: &str) -> Result<Word, WordError> {
        if text.contains(' ') {
            return self.noun_group(text);
        }

        let grammar = disambiguate(self.analyzer, text, self.overrides)?;
        match grammar.part_of_speech {
            PartOfSpeech::Noun => self.noun_from(text, grammar),
            PartOfSpeech::Adjective => self.adjective_from(text, grammar).map(Word::Adjective),
            PartOfSpeech::Pronoun => self.adjective_from(text, grammar).map(Word::Pronoun),
            PartOfSpeech::Verb => self.verb_from(text, grammar),
            PartOfSpeech::Participle => self.participle_from(text, grammar),
            PartOfSpeech::ShortParticiple => self.short_participle_from(text, grammar),
            PartOfSpeech::Infinitive => Err(normal_form_needed(text, grammar)),
        }
    }

    /// Like [`WordFactory::create`], but a word without any reading degrades
    /// to a [`Word::Fake`] of itself.
    pub fn create_lenient(&self, text: &str) -> Result<Word, WordError> {
        match self.create(text) {
            Err(WordError::NoGrammarFound { lemma }) => {
                warn!("no grammar found for '{lemma}', storing it as a literal");
                Ok(Word::fake(text))
            }
            other => other,
        }
    }

    pub fn noun(&self, text: &str) -> Result<Word, WordError> {
        match self.grammar(text) {
            Some(grammar) => self.noun_from(text, grammar),
            None => Ok(Word::Noun(Paradigm::unknown(text))),
        }
    }

    pub fn adjective(&self, text: &str) -> Result<Word, WordError> {
        match self.grammar(text) {
            Some(grammar) => self.adjective_from(text, grammar).map(Word::Adjective),
            None => Ok(Word::Adjective(Paradigm::unknown(text))),
        }
    }

    pub fn pronoun(&self, text: &str) -> Result<Word, WordError> {
        match self.grammar(text) {
            Some(grammar) => self.adjective_from(text, grammar).map(Word::Pronoun),
            None => Ok(Word::Pronoun(Paradigm::unknown(text))),
        }
    }

    pub fn verb(&self, text: &str) -> Result<Word, WordError> {
        match self.grammar(text) {
            Some(grammar) => self.verb_from(text, grammar),
            None => Ok(Word::Verb(Paradigm::unknown(text))),
        }
    }

    pub fn participle(&self, text: &str) -> Result<Word, WordError> {
        match self.grammar(text) {
            Some(grammar) => self.participle_from(text, grammar),
            None => Ok(Word::Participle(Paradigm::unknown(text))),
        }
    }

    pub fn short_participle(&self, text: &str) -> Result<Word, WordError> {
        match self.grammar(text) {
            Some(grammar) => self.short_participle_from(text, grammar),
            None => Ok(Word::ShortParticiple(Paradigm::unknown(text))),
        }
    }

    /// Build a multi-word phrase inflected like a noun.
    ///
    /// A noun token in nominative singular (or a pluralia tantum in
    /// nominative) is a head; heads and non-noun tokens inflect by number and
    /// case, other nouns are frozen. The last head supplies the group's
    /// gender. An unknown token leaves the whole group without forms.
    pub fn noun_group(&self, text: &str) -> Result<Word, WordError> {
        let mut tokens = Vec::new();
        let mut head: Option<AttributeSet> = None;

        for token in text.split(' ').filter(|t| !t.is_empty()) {
            let Some(grammar) = self.grammar(token) else {
                return Ok(Word::NounGroup(Paradigm::unknown(text)));
            };

            let frozen = if grammar.part_of_speech == PartOfSpeech::Noun {
                let is_head = is_head_noun(&grammar.attributes);
                if is_head {
                    head = Some(grammar.attributes);
                }
                !is_head
            } else {
                false
            };
            tokens.push((normalize_key(token), grammar.part_of_speech, frozen));
        }

        let Some(head) = head else {
            return Err(WordError::NormalFormNeeded {
                lemma: text.to_string(),
                attributes: AttributeSet::default(),
            });
        };

        let mut forms = Vec::with_capacity(Number::ALL.len() * Case::ALL.len());
        for number in Number::ALL {
            for case in Case::ALL {
                let phrase = tokens
                    .iter()
                    .map(|(token, pos, frozen)| {
                        if *frozen {
                            token.clone()
                        } else {
                            self.inflect(token, *pos, &[case.grammeme(), number.grammeme()])
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(" ");
                forms.push(phrase);
            }
        }

        debug!("built noun group '{text}' with {} tokens", tokens.len());
        Ok(Word::NounGroup(
            Paradigm::builder()
                .lemma(text)
                .forms(forms)
                .properties(head.gender.grammemes())
                .build(),
        ))
    }

    fn grammar(&self, text: &str) -> Option<Grammar> {
        disambiguate(self.analyzer, text, self.overrides).ok()
    }

    fn inflect(&self, lemma: &str, part_of_speech: PartOfSpeech, grammemes: &[Grammeme]) -> String {
        self.analyzer
            .inflect(lemma, part_of_speech, grammemes)
            .to_lowercase()
    }

    fn noun_from(&self, text: &str, grammar: Grammar) -> Result<Word, WordError> {
        let attrs = grammar.attributes;
        let plural_with_gender = attrs.number == Number::Plural && attrs.gender != Gender::PluralOnly;
        if attrs.case != Case::Nominative || plural_with_gender {
            return Err(normal_form_needed(text, grammar));
        }

        let mut forms = Vec::with_capacity(12);
        for number in Number::ALL {
            for case in Case::ALL {
                forms.push(self.inflect(
                    text,
                    grammar.part_of_speech,
                    &[case.grammeme(), number.grammeme()],
                ));
            }
        }

        debug!("built noun '{text}' ({:?})", attrs.gender);
        Ok(Word::Noun(
            Paradigm::builder()
                .lemma(text)
                .forms(forms)
                .properties(attrs.gender.grammemes())
                .build(),
        ))
    }

    fn adjective_from(&self, text: &str, grammar: Grammar) -> Result<Paradigm, WordError> {
        let attrs = grammar.attributes;
        if attrs.case != Case::Nominative || attrs.number != Number::Singular {
            return Err(normal_form_needed(text, grammar));
        }

        let forms = self.adjective_table(text, grammar.part_of_speech, &[]);
        debug!("built adjective '{text}'");
        Ok(Paradigm::builder().lemma(text).forms(forms).build())
    }

    fn verb_from(&self, text: &str, grammar: Grammar) -> Result<Word, WordError> {
        let attrs = grammar.attributes;
        if attrs.tense != Tense::Past
            || attrs.number != Number::Singular
            || attrs.gender != Gender::Masculine
        {
            return Err(normal_form_needed(text, grammar));
        }

        let pos = grammar.part_of_speech;
        let mut forms = self.short_table(text, pos, Tense::Past);
        for tense in [Tense::Present, Tense::Future] {
            for person in Person::ALL {
                for number in Number::ALL {
                    forms.push(self.inflect(
                        text,
                        pos,
                        &[tense.grammeme(), person.grammeme(), number.grammeme()],
                    ));
                }
            }
        }

        debug!("built verb '{text}'");
        Ok(Word::Verb(Paradigm::builder().lemma(text).forms(forms).build()))
    }

    fn participle_from(&self, text: &str, grammar: Grammar) -> Result<Word, WordError> {
        let attrs = grammar.attributes;
        if !is_participle_citation(&attrs) || attrs.case != Case::Nominative {
            return Err(normal_form_needed(text, grammar));
        }

        let mut forms = Vec::with_capacity(48);
        for tense in PARTICIPLE_TENSES {
            forms.extend(self.adjective_table(text, grammar.part_of_speech, &[tense.grammeme()]));
        }

        debug!("built participle '{text}'");
        Ok(Word::Participle(
            Paradigm::builder().lemma(text).forms(forms).build(),
        ))
    }

    fn short_participle_from(&self, text: &str, grammar: Grammar) -> Result<Word, WordError> {
        if !is_participle_citation(&grammar.attributes) {
            return Err(normal_form_needed(text, grammar));
        }

        let mut forms = Vec::with_capacity(8);
        for tense in PARTICIPLE_TENSES {
            forms.extend(self.short_table(text, grammar.part_of_speech, tense));
        }

        debug!("built short participle '{text}'");
        Ok(Word::ShortParticiple(
            Paradigm::builder().lemma(text).forms(forms).build(),
        ))
    }

    /// Singular gender × case forms followed by plural cases.
    fn adjective_table(&self, text: &str, pos: PartOfSpeech, extra: &[Grammeme]) -> Vec<String> {
        let mut forms = Vec::with_capacity(24);
        for gender in Gender::ALL {
            for case in Case::ALL {
                let mut grammemes = extra.to_vec();
                grammemes.extend([case.grammeme(), gender.grammemes()[0], Grammeme::Singular]);
                forms.push(self.inflect(text, pos, &grammemes));
            }
        }
        for case in Case::ALL {
            let mut grammemes = extra.to_vec();
            grammemes.extend([case.grammeme(), Grammeme::Plural]);
            forms.push(self.inflect(text, pos, &grammemes));
        }
        forms
    }

    /// Three singular genders followed by the plural, all in `tense`.
    fn short_table(&self, text: &str, pos: PartOfSpeech, tense: Tense) -> Vec<String> {
        let mut forms = Vec::with_capacity(4);
        for gender in Gender::ALL {
            forms.push(self.inflect(
                text,
                pos,
                &[tense.grammeme(), gender.grammemes()[0], Grammeme::Singular],
            ));
        }
        forms.push(self.inflect(text, pos, &[tense.grammeme(), Grammeme::Plural]));
        forms
    }
}

fn is_head_noun(attrs: &AttributeSet) -> bool {
    attrs.case == Case::Nominative
        && (attrs.number == Number::Singular || attrs.gender == Gender::PluralOnly)
}

fn is_participle_citation(attrs: &AttributeSet) -> bool {
    matches!(attrs.tense, Tense::Past | Tense::Present)
        && attrs.gender == Gender::Masculine
        && attrs.number == Number::Singular
}

fn normal_form_needed(text: &str, grammar: Grammar) -> WordError {
    WordError::NormalFormNeeded {
        lemma: text.to_string(),
        attributes: grammar.attributes,
    }
}
