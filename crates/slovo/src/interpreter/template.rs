//! Compiled templates.
//!
//! Compilation replaces every placeholder with a named slot (`e_N` for
//! externals, `i_N` for internals) and records what each slot renders.
//! Identical placeholder texts share one slot.

use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

use crate::interpreter::error::{CompileError, RecordError, compute_suggestions};
use crate::parser::{
    ParseError, PlaceholderKind, PlaceholderSyntax, SlotSegment, SourceSegment, escape_literal, parse_slots,
    parse_source,
};
use crate::types::{Grammeme, accepted_grammeme_names, resolve_grammeme};

/// Persisted shape of a [`Placeholder`]: id, dependencies, slot, tags, source.
type PlaceholderRecord = (String, Vec<String>, String, Vec<Grammeme>, String);

/// One compiled placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PlaceholderRecord", into = "PlaceholderRecord")]
pub struct Placeholder {
    /// External variable name, or the lemma of an internal word.
    pub id: String,
    /// External ids whose words this one agrees with, in application order.
    pub dependencies: Vec<String>,
    /// Slot name in the stored text.
    pub slot: String,
    /// Literal grammemes applied after all dependencies.
    pub grammemes: Vec<Grammeme>,
    /// The placeholder as written.
    pub source: String,
}

impl From<PlaceholderRecord> for Placeholder {
    fn from((id, dependencies, slot, grammemes, source): PlaceholderRecord) -> Self {
        Self {
            id,
            dependencies,
            slot,
            grammemes,
            source,
        }
    }
}

impl From<Placeholder> for PlaceholderRecord {
    fn from(p: Placeholder) -> Self {
        (p.id, p.dependencies, p.slot, p.grammemes, p.source)
    }
}

/// A compiled template.
///
/// # Example
///
/// ```
/// use slovo::Template;
///
/// let template = Template::compile("ударить [[hero|acc]] и [{тень|hero|ins}]").unwrap();
/// assert_eq!(template.text(), "ударить {e_0} и {i_0}");
/// assert_eq!(template.externals()[0].id, "hero");
/// assert_eq!(template.internal_words(), vec!["тень"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TemplateRecord", into = "TemplateRecord")]
pub struct Template {
    text: String,
    segments: Vec<SlotSegment>,
    externals: Vec<Placeholder>,
    internals: Vec<Placeholder>,
}

impl Template {
    /// Compile a template source without restricting its variables.
    pub fn compile(source: &str) -> Result<Template, CompileError> {
        Self::build(source, None)
    }

    /// Compile a template source, requiring every external id and every
    /// dependency to be one of `variables`.
    pub fn compile_with_variables(
        source: &str,
        variables: &[&str],
    ) -> Result<Template, CompileError> {
        Self::build(source, Some(variables))
    }

    /// Stored text with `{slot}` references.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn segments(&self) -> &[SlotSegment] {
        &self.segments
    }

    pub fn externals(&self) -> &[Placeholder] {
        &self.externals
    }

    pub fn internals(&self) -> &[Placeholder] {
        &self.internals
    }

    /// Lemmas of internal placeholders, which must be in the dictionary
    /// before rendering.
    pub fn internal_words(&self) -> Vec<&str> {
        self.internals.iter().map(|p| p.id.as_str()).collect()
    }

    /// Every external id the template reads, sorted.
    pub fn variable_names(&self) -> BTreeSet<&str> {
        let mut names = BTreeSet::new();
        for placeholder in &self.externals {
            names.insert(placeholder.id.as_str());
        }
        for placeholder in self.externals.iter().chain(&self.internals) {
            names.extend(placeholder.dependencies.iter().map(String::as_str));
        }
        names
    }

    fn build(source: &str, declared: Option<&[&str]>) -> Result<Template, CompileError> {
        let mut text = String::with_capacity(source.len());
        let mut segments = Vec::new();
        let mut externals: Vec<Placeholder> = Vec::new();
        let mut internals: Vec<Placeholder> = Vec::new();

        for segment in parse_source(source) {
            match segment {
                SourceSegment::Literal(literal) => {
                    text.push_str(&escape_literal(&literal));
                    segments.push(SlotSegment::Literal(literal));
                }
                SourceSegment::Placeholder(syntax) => {
                    let (list, prefix) = match syntax.kind {
                        PlaceholderKind::External => (&mut externals, "e"),
                        PlaceholderKind::Internal => (&mut internals, "i"),
                    };

                    let existing = list
                        .iter()
                        .find(|p| p.source == syntax.source)
                        .map(|p| p.slot.clone());
                    let slot = match existing {
                        Some(slot) => slot,
                        None => {
                            let slot = format!("{prefix}_{}", list.len());
                            list.push(compile_placeholder(syntax, slot.clone(), source)?);
                            slot
                        }
                    };

                    text.push('{');
                    text.push_str(&slot);
                    text.push('}');
                    segments.push(SlotSegment::Slot(slot));
                }
            }
        }

        let template = Template {
            text,
            segments,
            externals,
            internals,
        };

        if let Some(declared) = declared {
            let declared: HashSet<&str> = declared.iter().copied().collect();
            let undeclared: Vec<String> = template
                .variable_names()
                .into_iter()
                .filter(|name| !declared.contains(name))
                .map(str::to_string)
                .collect();
            if !undeclared.is_empty() {
                return Err(CompileError::UndeclaredVariables {
                    names: undeclared,
                    template: source.to_string(),
                });
            }
        }

        Ok(template)
    }
}

fn compile_placeholder(
    syntax: PlaceholderSyntax,
    slot: String,
    template: &str,
) -> Result<Placeholder, CompileError> {
    if syntax.id.is_empty() {
        return Err(CompileError::EmptyIdentifier {
            placeholder: syntax.source,
            template: template.to_string(),
        });
    }

    let mut grammemes = Vec::with_capacity(syntax.tags.len());
    for tag in &syntax.tags {
        match resolve_grammeme(tag) {
            Some(grammeme) => grammemes.push(grammeme),
            None => {
                return Err(CompileError::UnknownTag {
                    tag: tag.clone(),
                    suggestions: compute_suggestions(tag, accepted_grammeme_names()),
                    placeholder: syntax.source,
                    template: template.to_string(),
                });
            }
        }
    }

    Ok(Placeholder {
        id: syntax.id,
        dependencies: syntax.dependencies,
        slot,
        grammemes,
        source: syntax.source,
    })
}

/// Persisted shape of a [`Template`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TemplateRecord {
    template: String,
    externals: Vec<Placeholder>,
    internals: Vec<Placeholder>,
}

impl From<Template> for TemplateRecord {
    fn from(template: Template) -> Self {
        Self {
            template: template.text,
            externals: template.externals,
            internals: template.internals,
        }
    }
}

impl TryFrom<TemplateRecord> for Template {
    type Error = RecordError;

    fn try_from(record: TemplateRecord) -> Result<Self, Self::Error> {
        let segments = parse_slots(&record.template).map_err(|e| match e {
            ParseError::Syntax { offset, .. } => RecordError::Syntax {
                template: record.template.clone(),
                offset,
            },
        })?;

        for segment in &segments {
            if let SlotSegment::Slot(slot) = segment {
                let known = record
                    .externals
                    .iter()
                    .chain(&record.internals)
                    .any(|p| &p.slot == slot);
                if !known {
                    return Err(RecordError::UnknownSlot {
                        slot: slot.clone(),
                        template: record.template,
                    });
                }
            }
        }

        Ok(Template {
            text: record.template,
            segments,
            externals: record.externals,
            internals: record.internals,
        })
    }
}
