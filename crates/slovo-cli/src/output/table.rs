//! Table formatting utilities for CLI output.

use comfy_table::{presets, ContentArrangement, Table};
use slovo::interpreter::ImportSummary;
use slovo::Word;

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

/// One row per described phrase type.
pub fn format_import_table(summary: &ImportSummary) -> Table {
    let mut table = new_table(vec!["Module", "Type", "Name", "Example"]);

    for (prefix, module) in &summary.modules {
        for (type_name, phrase_type) in &module.types {
            table.add_row(vec![
                prefix.clone(),
                type_name.clone(),
                phrase_type.name.clone(),
                phrase_type.example.clone(),
            ]);
        }
    }

    table
}

/// One row per dictionary entry.
pub fn format_words_table<'a>(words: impl Iterator<Item = (&'a str, &'a Word)>) -> Table {
    let mut table = new_table(vec!["Key", "Class", "Forms", "Properties"]);

    for (key, word) in words {
        let properties = word
            .properties()
            .iter()
            .map(|g| g.name())
            .collect::<Vec<_>>()
            .join(",");
        table.add_row(vec![
            key.to_string(),
            format!("{:?}", word.class()),
            word.forms().len().to_string(),
            properties,
        ]);
    }

    table
}
