//! Implementation of the `slovo render` command.

use std::path::PathBuf;

use miette::Report;
use serde::Serialize;
use slovo::{resolve_grammeme, Dictionary, Template, Variable, Variables, Vocabulary};

use crate::output::diagnostic::TemplateDiagnostic;
use crate::output::print_json;

/// Arguments for the render command.
#[derive(Debug, clap::Args)]
pub struct RenderArgs {
    /// Template string to render
    #[arg(long, conflicts_with = "phrase_type", required_unless_present = "phrase_type")]
    pub template: Option<String>,

    /// Render a random phrase of this type from the vocabulary
    #[arg(long = "type", requires = "vocabulary")]
    pub phrase_type: Option<String>,

    /// Dictionary store
    #[arg(long, env = "SLOVO_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Vocabulary store
    #[arg(long, env = "SLOVO_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,

    /// Variables in name=value or name=value|tag,tag format (repeatable)
    #[arg(short = 'a', long = "var", value_parser = parse_variable)]
    pub variables: Vec<(String, Variable)>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for render results.
#[derive(Serialize)]
pub struct RenderResult {
    pub template: String,
    pub result: String,
}

/// Parse a `name=value|tags` variable. Integer values become counts.
fn parse_variable(s: &str) -> Result<(String, Variable), String> {
    let (name, rest) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid variable format '{}': expected name=value", s))?;
    let (value, tags) = rest.split_once('|').unwrap_or((rest, ""));

    let mut variable = match value.parse::<i64>() {
        Ok(n) => Variable::from(n),
        Err(_) => Variable::from(value),
    };
    for tag in tags.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let grammeme = resolve_grammeme(tag).ok_or_else(|| format!("unknown tag '{}'", tag))?;
        variable = variable.with(&[grammeme]);
    }
    Ok((name.to_string(), variable))
}

/// Run the render command.
pub fn run_render(args: RenderArgs) -> miette::Result<i32> {
    let mut dictionary = Dictionary::new();
    if let Some(path) = &args.dictionary {
        dictionary
            .load(path)
            .map_err(|e| miette::miette!("Cannot load dictionary: {}", e))?;
    }

    let template = match (&args.template, &args.phrase_type, &args.vocabulary) {
        (Some(source), _, _) => match Template::compile(source) {
            Ok(template) => template,
            Err(e) => {
                let diagnostic = TemplateDiagnostic::from_compile_error("template", source, &e);
                eprintln!("{:?}", Report::new(diagnostic));
                return Ok(exitcode::DATAERR);
            }
        },
        (None, Some(phrase_type), Some(path)) => {
            let mut vocabulary = Vocabulary::new();
            vocabulary
                .load(path)
                .map_err(|e| miette::miette!("Cannot load vocabulary: {}", e))?;
            match vocabulary.random_phrase(phrase_type) {
                Some(template) => template.clone(),
                None => {
                    eprintln!("No phrases of type '{}'", phrase_type);
                    return Ok(exitcode::DATAERR);
                }
            }
        }
        _ => return Ok(exitcode::USAGE),
    };

    let variables: Variables = args.variables.into_iter().collect();
    match template.substitute(&dictionary, &variables) {
        Ok(result) => {
            if args.json {
                print_json(&RenderResult {
                    template: template.text().to_string(),
                    result,
                })?;
            } else {
                println!("{}", result);
            }
            Ok(exitcode::OK)
        }
        Err(e) => {
            if args.json {
                print_json(&serde_json::json!({ "error": e.to_string() }))?;
            } else {
                eprintln!("Render error: {}", e);
            }
            Ok(exitcode::DATAERR)
        }
    }
}
