//! The boundary to the morphological analyzer: readings, disambiguation and
//! paradigm construction.

mod analyzer;
mod disambiguate;
mod factory;
mod overrides;

pub use analyzer::{Analyzer, Reading, TableAnalyzer};
pub use disambiguate::{Grammar, INFINITIVE_DISTANCE, citation_distance, disambiguate, select_reading};
pub use factory::WordFactory;
pub use overrides::{Override, Overrides};
