//! Substitution: rendering a compiled template against caller variables.

use std::borrow::Cow;
use std::collections::HashMap;

use log::trace;

use crate::interpreter::{Dictionary, RenderError, Template};
use crate::parser::SlotSegment;
use crate::types::{AttributeSet, Grammeme, Value, Variables, Word};

impl Template {
    /// Render this template. See [`substitute`].
    pub fn substitute(
        &self,
        dictionary: &Dictionary,
        variables: &Variables,
    ) -> Result<String, RenderError> {
        substitute(self, dictionary, variables)
    }
}

/// A variable resolved to its word and baseline attributes.
struct Resolved<'a> {
    word: Cow<'a, Word>,
    attributes: AttributeSet,
}

/// Render `template` with `variables`, looking words up in `dictionary`.
///
/// Each external placeholder starts from its variable's baseline attributes,
/// each internal one from the defaults. Dependencies apply in declaration
/// order, then literal tags, then the last numeral dependency, if any.
pub fn substitute(
    template: &Template,
    dictionary: &Dictionary,
    variables: &Variables,
) -> Result<String, RenderError> {
    let resolved = resolve_variables(template, dictionary, variables);
    let mut rendered: HashMap<&str, String> = HashMap::new();

    for placeholder in template.externals() {
        let variable = resolved
            .get(placeholder.id.as_str())
            .ok_or_else(|| missing(&placeholder.id, template))?;
        let form = render_placeholder(
            &variable.word,
            variable.attributes,
            &placeholder.dependencies,
            &placeholder.grammemes,
            &resolved,
            template,
        )?;
        rendered.insert(&placeholder.slot, form);
    }

    for placeholder in template.internals() {
        let word = dictionary.get(&placeholder.id);
        let form = render_placeholder(
            &word,
            AttributeSet::default(),
            &placeholder.dependencies,
            &placeholder.grammemes,
            &resolved,
            template,
        )?;
        rendered.insert(&placeholder.slot, form);
    }

    let mut output = String::new();
    for segment in template.segments() {
        match segment {
            SlotSegment::Literal(text) => output.push_str(text),
            SlotSegment::Slot(slot) => {
                if let Some(form) = rendered.get(slot.as_str()) {
                    output.push_str(form);
                }
            }
        }
    }

    trace!("rendered '{}' as '{output}'", template.text());
    Ok(output)
}

/// Resolve the variables `template` refers to. Unreferenced variables are
/// never looked up; missing ones are reported when a placeholder needs them.
fn resolve_variables<'a>(
    template: &'a Template,
    dictionary: &'a Dictionary,
    variables: &'a Variables,
) -> HashMap<&'a str, Resolved<'a>> {
    template
        .variable_names()
        .into_iter()
        .filter_map(|name| variables.get(name).map(|variable| (name, variable)))
        .map(|(name, variable)| {
            let (word, mut attributes) = match &variable.value {
                Value::Number(n) => (Cow::Owned(Word::numeral(*n)), AttributeSet::default()),
                Value::Word(word) => (Cow::Borrowed(word), word.attributes()),
                Value::Lemma(lemma) => {
                    let word = dictionary.get(lemma);
                    let attributes = word.attributes();
                    (word, attributes)
                }
            };
            attributes.update(&variable.grammemes);
            (name, Resolved { word, attributes })
        })
        .collect()
}

fn render_placeholder(
    word: &Word,
    mut attributes: AttributeSet,
    dependencies: &[String],
    grammemes: &[Grammeme],
    resolved: &HashMap<&str, Resolved<'_>>,
    template: &Template,
) -> Result<String, RenderError> {
    let mut count: Option<&Word> = None;

    for dependency in dependencies {
        let dependency = resolved
            .get(dependency.as_str())
            .ok_or_else(|| missing(dependency, template))?;
        match dependency.word.as_ref() {
            numeral @ Word::Numeral(_) => count = Some(numeral),
            other => word.propagate_from(&mut attributes, other, &dependency.attributes),
        }
    }

    attributes.update(grammemes);

    if let Some(numeral) = count {
        let before = attributes;
        word.propagate_from(&mut attributes, numeral, &before);
    }

    Ok(word.render(&attributes))
}

fn missing(name: &str, template: &Template) -> RenderError {
    RenderError::MissingVariable {
        name: name.to_string(),
        template: template.text().to_string(),
    }
}
