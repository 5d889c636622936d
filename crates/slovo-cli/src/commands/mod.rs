//! CLI command implementations.

mod check;
mod import;
mod render;
mod words;

pub use check::{run_check, CheckArgs};
pub use import::{run_import, ImportArgs};
pub use render::{run_render, RenderArgs};
pub use words::{run_words, WordsArgs};
