//! Implementation of the `slovo check` command.

use miette::Report;
use serde::Serialize;
use slovo::Template;

use crate::output::diagnostic::TemplateDiagnostic;
use crate::output::print_json;

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Templates to compile
    #[arg(required = true)]
    pub templates: Vec<String>,

    /// Declared variable names; every external and dependency must be one
    #[arg(long, value_delimiter = ',')]
    pub variables: Option<Vec<String>>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked template.
#[derive(Serialize)]
pub struct CheckResult {
    pub template: String,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub internal_words: Vec<String>,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> miette::Result<i32> {
    let declared: Option<Vec<&str>> = args
        .variables
        .as_ref()
        .map(|names| names.iter().map(String::as_str).collect());

    let mut results = Vec::with_capacity(args.templates.len());
    for (index, source) in args.templates.iter().enumerate() {
        let compiled = match &declared {
            Some(names) => Template::compile_with_variables(source, names),
            None => Template::compile(source),
        };

        match compiled {
            Ok(template) => results.push(CheckResult {
                template: source.clone(),
                ok: true,
                error: None,
                internal_words: template
                    .internal_words()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            }),
            Err(e) => {
                if !args.json {
                    let name = format!("template #{}", index + 1);
                    let diagnostic = TemplateDiagnostic::from_compile_error(&name, source, &e);
                    eprintln!("{:?}", Report::new(diagnostic));
                }
                results.push(CheckResult {
                    template: source.clone(),
                    ok: false,
                    error: Some(e.to_string()),
                    internal_words: Vec::new(),
                });
            }
        }
    }

    let failed = results.iter().filter(|r| !r.ok).count();
    if args.json {
        print_json(&results)?;
    } else if failed == 0 {
        println!("{} templates OK", results.len());
    } else {
        eprintln!("{} of {} templates failed", failed, results.len());
    }

    Ok(if failed == 0 {
        exitcode::OK
    } else {
        exitcode::DATAERR
    })
}
