use thiserror::Error;

/// An error that occurred while parsing stored template text.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("syntax error at byte {offset}: {message}")]
    Syntax { offset: usize, message: String },
}
