//! Miette diagnostic wrapper for template compile errors.
//!
//! Note: This module has an exception for `unused_assignments` because miette
//! derive macros read struct fields in generated code that rustc cannot track.
#![allow(unused_assignments)]

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use slovo::CompileError;
use thiserror::Error;

/// A miette-compatible diagnostic pointing at the offending placeholder.
///
/// Note: Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(slovo::compile))]
pub struct TemplateDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label(collection)]
    labels: Vec<LabeledSpan>,

    message: String,

    #[help]
    help: Option<String>,
}

impl TemplateDiagnostic {
    /// Create a diagnostic from a CompileError raised for `template`.
    pub fn from_compile_error(name: &str, template: &str, err: &CompileError) -> Self {
        let (span, label, help) = match err {
            CompileError::EmptyIdentifier { placeholder, .. } => (
                locate(template, placeholder),
                "placeholder without an identifier".to_string(),
                Some("start the placeholder with a variable name or a lemma".to_string()),
            ),
            CompileError::UnknownTag {
                tag,
                placeholder,
                suggestions,
                ..
            } => {
                let help = if suggestions.is_empty() {
                    None
                } else {
                    Some(format!("did you mean: {}?", suggestions.join(", ")))
                };
                (
                    locate_within(template, placeholder, tag),
                    format!("unknown tag '{}'", tag),
                    help,
                )
            }
            CompileError::UndeclaredVariables { names, .. } => {
                let first = names.first().map(String::as_str).unwrap_or_default();
                (
                    locate(template, first),
                    "not a declared variable".to_string(),
                    Some(format!("declare: {}", names.join(", "))),
                )
            }
            CompileError::TypeAlreadyRegistered { .. }
            | CompileError::TypeNotRegistered { .. }
            | CompileError::TypeIdCollision { .. } => {
                ((0, template.len()).into(), "here".to_string(), None)
            }
        };

        TemplateDiagnostic {
            src: NamedSource::new(name, template.to_string()),
            labels: vec![LabeledSpan::new_with_span(Some(label), span)],
            message: err.to_string(),
            help,
        }
    }
}

/// Span of the first occurrence of `needle`, or the whole template.
fn locate(template: &str, needle: &str) -> SourceSpan {
    match template.find(needle) {
        Some(offset) if !needle.is_empty() => (offset, needle.len()).into(),
        _ => (0, template.len()).into(),
    }
}

/// Span of `needle` inside the first occurrence of `outer`.
fn locate_within(template: &str, outer: &str, needle: &str) -> SourceSpan {
    let Some(start) = template.find(outer) else {
        return locate(template, needle);
    };
    match outer.find(needle) {
        Some(offset) => (start + offset, needle.len()).into(),
        None => (start, outer.len()).into(),
    }
}
