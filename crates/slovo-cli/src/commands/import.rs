//! Implementation of the `slovo import` command.

use std::path::PathBuf;

use slovo::interpreter::{import_texts, ImportOptions};
use slovo::morph::TableAnalyzer;

use crate::output::print_json;
use crate::output::table::format_import_table;

/// Arguments for the import command.
#[derive(Debug, clap::Args)]
pub struct ImportArgs {
    /// Directory with phrase modules (*.json)
    pub source_dir: PathBuf,

    /// Morphology table used to build paradigms
    #[arg(long, env = "SLOVO_MORPH")]
    pub morph: PathBuf,

    /// Override table (lemma -> comma-separated class and tags)
    #[arg(long)]
    pub overrides: Option<PathBuf>,

    /// Dictionary store
    #[arg(long, env = "SLOVO_DICTIONARY")]
    pub dictionary: Option<PathBuf>,

    /// Vocabulary store
    #[arg(long, env = "SLOVO_VOCABULARY")]
    pub vocabulary: Option<PathBuf>,

    /// Validate only, do not write stores
    #[arg(long)]
    pub check: bool,

    /// Fail on words missing from the morphology table
    #[arg(long)]
    pub strict: bool,

    /// Print undefined dictionary words after import
    #[arg(long)]
    pub undefined: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Run the import command.
pub fn run_import(args: ImportArgs) -> miette::Result<i32> {
    let analyzer = TableAnalyzer::load(&args.morph)
        .map_err(|e| miette::miette!("Cannot load morphology table: {}", e))?;

    let options = ImportOptions::builder()
        .source_dir(args.source_dir)
        .maybe_overrides_path(args.overrides)
        .maybe_dictionary_path(args.dictionary)
        .maybe_vocabulary_path(args.vocabulary)
        .check(args.check)
        .strict(args.strict)
        .build();

    let corpus = match import_texts(&analyzer, &options) {
        Ok(corpus) => corpus,
        Err(e) => {
            if args.json {
                print_json(&serde_json::json!({ "error": e.to_string() }))?;
            } else {
                eprintln!("Import failed: {}", e);
            }
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        print_json(&serde_json::json!({
            "summary": corpus.summary,
            "words": corpus.dictionary.len(),
            "undefined": corpus.dictionary.undefined_words(),
        }))?;
        return Ok(exitcode::OK);
    }

    if !corpus.summary.modules.is_empty() {
        println!("{}", format_import_table(&corpus.summary));
    }
    println!(
        "{} phrases in {} modules, {} words",
        corpus.summary.phrases,
        corpus.summary.files,
        corpus.dictionary.len()
    );
    if args.undefined {
        for key in corpus.dictionary.undefined_words() {
            println!("undefined: {}", key);
        }
    }
    Ok(exitcode::OK)
}
