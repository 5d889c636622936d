//! Template parsers using winnow.
//!
//! Two grammars live here:
//! - template sources, where placeholders are `[[id|dep|tags]]` (external) or
//!   `[{id|dep|tags}]` (internal) and everything else is literal text;
//! - stored template text, where placeholders were replaced by `{slot}`
//!   references and literal braces are escaped as `{{` and `}}`.

use super::ast::*;
use super::error::ParseError;
use winnow::combinator::{alt, delimited, repeat};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{none_of, take_till, take_while};

/// Parse a template source into literal text and placeholders.
///
/// Never fails: a bracket that does not open a well-formed placeholder is
/// literal text.
pub fn parse_source(input: &str) -> Vec<SourceSegment> {
    let mut remaining = input;
    let mut segments: Vec<SourceSegment> = Vec::new();

    while !remaining.is_empty() {
        let offset = input.len() - remaining.len();
        let start = remaining;
        let parsed = alt((
            external.map(|body| (PlaceholderKind::External, body)),
            internal.map(|body| (PlaceholderKind::Internal, body)),
        ))
        .with_taken()
        .parse_next(&mut remaining);

        match parsed {
            Ok(((kind, body), source)) => {
                segments.push(SourceSegment::Placeholder(split_placeholder(
                    kind, body, source, offset,
                )));
            }
            Err(_) => {
                let mut chars = start.chars();
                let Some(c) = chars.next() else {
                    break;
                };
                remaining = chars.as_str();
                push_literal(&mut segments, c);
            }
        }
    }

    segments
}

/// Parse stored template text into literal text and slot references.
pub fn parse_slots(input: &str) -> Result<Vec<SlotSegment>, ParseError> {
    let mut remaining = input;
    match slot_text(&mut remaining) {
        Ok(segments) if remaining.is_empty() => Ok(segments),
        Ok(_) => Err(ParseError::Syntax {
            offset: input.len() - remaining.len(),
            message: format!(
                "unexpected character: '{}'",
                remaining.chars().next().unwrap_or('?')
            ),
        }),
        Err(e) => Err(ParseError::Syntax {
            offset: input.len() - remaining.len(),
            message: format!("parse error: {e}"),
        }),
    }
}

/// Escape literal text so that [`parse_slots`] reads it back verbatim.
pub fn escape_literal(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// `[[` body `]]`, where the body is at least one character and has no `]`.
fn external<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited("[[", take_till(1.., ']'), "]]").parse_next(input)
}

/// `[{` body `}]`, where the body is at least one character and has no `]`.
fn internal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let content: &str = delimited("[{", take_till(1.., ']'), ']').parse_next(input)?;
    match content.strip_suffix('}') {
        Some(body) if !body.is_empty() => Ok(body),
        _ => Err(ErrMode::Backtrack(ContextError::new())),
    }
}

/// Split `id|dep|...|tags` into its parts.
///
/// With a single segment there are no dependencies and no tags. A lone empty
/// dependency or tag segment means "none".
fn split_placeholder(kind: PlaceholderKind, body: &str, source: &str, offset: usize) -> PlaceholderSyntax {
    let parts: Vec<&str> = body.split('|').collect();
    let id = parts[0].trim().to_string();

    let (dependencies, tags) = if parts.len() > 1 {
        let dependencies = parts[1..parts.len() - 1]
            .iter()
            .map(|d| d.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
        let tags = parts[parts.len() - 1]
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        (dependencies, tags)
    } else {
        (Vec::new(), Vec::new())
    };

    PlaceholderSyntax {
        kind,
        id,
        dependencies,
        tags,
        source: source.to_string(),
        offset,
    }
}

fn push_literal(segments: &mut Vec<SourceSegment>, c: char) {
    if let Some(SourceSegment::Literal(prev)) = segments.last_mut() {
        prev.push(c);
    } else {
        segments.push(SourceSegment::Literal(c.to_string()));
    }
}

/// Parse stored text, merging adjacent literals.
fn slot_text(input: &mut &str) -> ModalResult<Vec<SlotSegment>> {
    let segments: Vec<SlotSegment> = repeat(0.., slot_segment).parse_next(input)?;

    let mut merged: Vec<SlotSegment> = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            SlotSegment::Literal(text) => {
                if let Some(SlotSegment::Literal(prev)) = merged.last_mut() {
                    prev.push_str(&text);
                } else {
                    merged.push(SlotSegment::Literal(text));
                }
            }
            other => merged.push(other),
        }
    }
    Ok(merged)
}

fn slot_segment(input: &mut &str) -> ModalResult<SlotSegment> {
    alt((escape_sequence, slot, literal_char)).parse_next(input)
}

/// `{{` -> `{`, `}}` -> `}`
fn escape_sequence(input: &mut &str) -> ModalResult<SlotSegment> {
    alt((
        "{{".value(SlotSegment::Literal("{".to_string())),
        "}}".value(SlotSegment::Literal("}".to_string())),
    ))
    .parse_next(input)
}

fn slot(input: &mut &str) -> ModalResult<SlotSegment> {
    delimited('{', slot_name, '}')
        .map(|name: &str| SlotSegment::Slot(name.to_string()))
        .parse_next(input)
}

fn slot_name<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| c.is_ascii_alphanumeric() || c == '_').parse_next(input)
}

fn literal_char(input: &mut &str) -> ModalResult<SlotSegment> {
    none_of(['{', '}'])
        .map(|c: char| SlotSegment::Literal(c.to_string()))
        .parse_next(input)
}
