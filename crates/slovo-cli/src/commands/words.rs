//! Implementation of the `slovo words` command.

use std::path::PathBuf;

use serde::Serialize;
use slovo::Dictionary;

use crate::output::print_json;
use crate::output::table::format_words_table;

/// Arguments for the words command.
#[derive(Debug, clap::Args)]
pub struct WordsArgs {
    /// Dictionary store
    #[arg(long, env = "SLOVO_DICTIONARY")]
    pub dictionary: PathBuf,

    /// Only list words without a form table
    #[arg(long)]
    pub undefined: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one dictionary entry.
#[derive(Serialize)]
pub struct WordEntry<'a> {
    pub key: &'a str,
    pub class: slovo::WordClass,
    pub forms: &'a [String],
}

/// Run the words command.
pub fn run_words(args: WordsArgs) -> miette::Result<i32> {
    let mut dictionary = Dictionary::new();
    dictionary
        .load(&args.dictionary)
        .map_err(|e| miette::miette!("Cannot load dictionary: {}", e))?;

    let entries: Vec<_> = dictionary
        .iter()
        .filter(|(_, word)| !args.undefined || !word.has_forms())
        .collect();

    if args.json {
        let output: Vec<WordEntry<'_>> = entries
            .iter()
            .map(|(key, word)| WordEntry {
                key: *key,
                class: word.class(),
                forms: word.forms(),
            })
            .collect();
        print_json(&output)?;
    } else {
        println!("{}", format_words_table(entries.into_iter()));
    }
    Ok(exitcode::OK)
}
