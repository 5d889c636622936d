pub mod interpreter;
pub mod morph;
pub mod parser;
pub mod types;

pub use interpreter::{
    CompileError, Dictionary, ImportError, LoadError, RecordError, RenderError, Template,
    Vocabulary, WordError, compute_suggestions,
};
pub use types::{
    AttributeSet, Case, Gender, Grammeme, LetterCase, Number, PartOfSpeech, Person, PhraseTypeId,
    Tense, Value, Variable, Variables, Word, WordClass, normalize_key, resolve_grammeme,
};

/// Creates a [`Variables`] map from name/value pairs.
///
/// Values are converted via `Into<Variable>`, so lemmas, counts, words and
/// prepared [`Variable`]s can be mixed.
///
/// # Example
///
/// ```
/// use slovo::{Grammeme, Value, Variable, variables};
///
/// let vars = variables! {
///     "hero" => "обезьянка",
///     "count" => 5,
///     "enemy" => Variable::from("крыса").with(&[Grammeme::Plural]),
/// };
/// assert_eq!(vars.len(), 3);
/// assert_eq!(vars["count"].value, Value::Number(5));
/// ```
#[macro_export]
macro_rules! variables {
    {} => {
        $crate::Variables::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Variables::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Variable>::into($value));
            )+
            map
        }
    };
}
