//! Template compilation, substitution and the word and phrase stores.

mod dictionary;
mod error;
mod evaluator;
mod import;
mod plural;
mod template;
mod vocabulary;

pub use dictionary::Dictionary;
pub use error::{
    CompileError, ImportError, LoadError, RecordError, RenderError, WordError, compute_suggestions,
};
pub use evaluator::substitute;
pub use import::{Corpus, ImportOptions, ImportSummary, ModuleSummary, TypeSummary, import_texts};
pub use plural::{PluralClass, plural_class, pluralize, pluralized};
pub use template::{Placeholder, Template};
pub use vocabulary::Vocabulary;
