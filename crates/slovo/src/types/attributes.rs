use std::fmt::{Display, Formatter, Result as FmtResult};

use super::Grammeme;

/// Grammatical case, in paradigm table order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Case {
    #[default]
    Nominative,
    Genitive,
    Dative,
    Accusative,
    Instrumental,
    Prepositional,
}

impl Case {
    pub const ALL: [Case; 6] = [
        Case::Nominative,
        Case::Genitive,
        Case::Dative,
        Case::Accusative,
        Case::Instrumental,
        Case::Prepositional,
    ];

    /// Position of this case within a paradigm row.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn grammeme(self) -> Grammeme {
        match self {
            Case::Nominative => Grammeme::Nominative,
            Case::Genitive => Grammeme::Genitive,
            Case::Dative => Grammeme::Dative,
            Case::Accusative => Grammeme::Accusative,
            Case::Instrumental => Grammeme::Instrumental,
            Case::Prepositional => Grammeme::Prepositional,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Number {
    #[default]
    Singular,
    Plural,
}

impl Number {
    pub const ALL: [Number; 2] = [Number::Singular, Number::Plural];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn grammeme(self) -> Grammeme {
        match self {
            Number::Singular => Grammeme::Singular,
            Number::Plural => Grammeme::Plural,
        }
    }
}

/// Grammatical gender.
///
/// `PluralOnly` marks pluralia tantum nouns ("ножницы"), which have no gender
/// of their own. It is never spelled in templates; it only arises when a word's
/// tags carry `plural` twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Gender {
    #[default]
    Masculine,
    Feminine,
    Neuter,
    PluralOnly,
}

impl Gender {
    /// The three real genders, in paradigm table order.
    pub const ALL: [Gender; 3] = [Gender::Masculine, Gender::Feminine, Gender::Neuter];

    /// Position within a singular paradigm block, or `None` for `PluralOnly`.
    pub const fn index(self) -> Option<usize> {
        match self {
            Gender::Masculine => Some(0),
            Gender::Feminine => Some(1),
            Gender::Neuter => Some(2),
            Gender::PluralOnly => None,
        }
    }

    /// Tags that reproduce this gender through `AttributeSet::update`.
    pub fn grammemes(self) -> Vec<Grammeme> {
        match self {
            Gender::Masculine => vec![Grammeme::Masculine],
            Gender::Feminine => vec![Grammeme::Feminine],
            Gender::Neuter => vec![Grammeme::Neuter],
            Gender::PluralOnly => vec![Grammeme::Plural, Grammeme::Plural],
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tense {
    #[default]
    Present,
    Past,
    Future,
}

impl Tense {
    pub const ALL: [Tense; 3] = [Tense::Present, Tense::Past, Tense::Future];

    pub const fn grammeme(self) -> Grammeme {
        match self {
            Tense::Present => Grammeme::Present,
            Tense::Past => Grammeme::Past,
            Tense::Future => Grammeme::Future,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Person {
    #[default]
    First,
    Second,
    Third,
}

impl Person {
    pub const ALL: [Person; 3] = [Person::First, Person::Second, Person::Third];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn grammeme(self) -> Grammeme {
        match self {
            Person::First => Grammeme::First,
            Person::Second => Grammeme::Second,
            Person::Third => Grammeme::Third,
        }
    }
}

/// Whether the rendered form gets an upper-case first letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LetterCase {
    #[default]
    Lower,
    Capitalized,
}

/// The grammatical state a word is rendered in.
///
/// Holds exactly one value per category. Instances are created per render
/// call and mutated only within it.
///
/// # Example
///
/// ```
/// use slovo::{AttributeSet, Case, Gender, Grammeme, Number};
///
/// let attrs = AttributeSet::from_grammemes(&[Grammeme::Genitive, Grammeme::Plural]);
/// assert_eq!(attrs.case, Case::Genitive);
/// assert_eq!(attrs.number, Number::Plural);
///
/// // A word that is lexically plural-only carries `plural` twice
/// let scissors = AttributeSet::from_grammemes(&[Grammeme::Plural, Grammeme::Plural]);
/// assert_eq!(scissors.gender, Gender::PluralOnly);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct AttributeSet {
    pub case: Case,
    pub number: Number,
    pub gender: Gender,
    pub tense: Tense,
    pub person: Person,
    pub letter_case: LetterCase,
}

impl AttributeSet {
    /// Defaults updated with `grammemes`.
    pub fn from_grammemes(grammemes: &[Grammeme]) -> Self {
        let mut attrs = Self::default();
        attrs.update(grammemes);
        attrs
    }

    /// Apply each tag to the category it belongs to.
    ///
    /// Animacy tags are ignored. Seeing `plural` more than once in one call
    /// forces the gender to [`Gender::PluralOnly`].
    pub fn update(&mut self, grammemes: &[Grammeme]) {
        for grammeme in grammemes {
            match grammeme {
                Grammeme::Nominative => self.case = Case::Nominative,
                Grammeme::Genitive => self.case = Case::Genitive,
                Grammeme::Dative => self.case = Case::Dative,
                Grammeme::Accusative => self.case = Case::Accusative,
                Grammeme::Instrumental => self.case = Case::Instrumental,
                Grammeme::Prepositional => self.case = Case::Prepositional,
                Grammeme::Singular => self.number = Number::Singular,
                Grammeme::Plural => self.number = Number::Plural,
                Grammeme::Masculine => self.gender = Gender::Masculine,
                Grammeme::Feminine => self.gender = Gender::Feminine,
                Grammeme::Neuter => self.gender = Gender::Neuter,
                Grammeme::Present => self.tense = Tense::Present,
                Grammeme::Past => self.tense = Tense::Past,
                Grammeme::Future => self.tense = Tense::Future,
                Grammeme::First => self.person = Person::First,
                Grammeme::Second => self.person = Person::Second,
                Grammeme::Third => self.person = Person::Third,
                Grammeme::Lower => self.letter_case = LetterCase::Lower,
                Grammeme::Capitalized => self.letter_case = LetterCase::Capitalized,
                Grammeme::Animate | Grammeme::Inanimate => {}
            }
        }

        if grammemes.iter().filter(|g| **g == Grammeme::Plural).count() > 1 {
            self.gender = Gender::PluralOnly;
        }
    }

    /// A copy of this set with `grammemes` applied.
    pub fn with(mut self, grammemes: &[Grammeme]) -> Self {
        self.update(grammemes);
        self
    }

    /// True when rendering should use a plural slot: plural number, or a
    /// plural-only gender.
    pub fn is_plural_slot(&self) -> bool {
        self.number == Number::Plural || self.gender == Gender::PluralOnly
    }
}

impl Display for AttributeSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "<{:?}, {:?}, {:?}, {:?}, {:?}, {:?}>",
            self.case, self.number, self.gender, self.tense, self.person, self.letter_case
        )
    }
}
