mod attributes;
mod grammeme;
mod part_of_speech;
mod phrase_type_id;
mod variable;
mod word;

pub use attributes::{AttributeSet, Case, Gender, LetterCase, Number, Person, Tense};
pub use grammeme::{Category, Grammeme, accepted_grammeme_names, resolve_grammeme};
pub use part_of_speech::PartOfSpeech;
pub use phrase_type_id::PhraseTypeId;
pub use variable::{Value, Variable, Variables};
pub use word::{Paradigm, Word, WordClass, normalize_key};
