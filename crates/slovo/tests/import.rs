//! Tests for corpus import.

mod common;

use std::fs;
use std::path::Path;

use serde_json::json;
use slovo::interpreter::{ImportOptions, import_texts};
use slovo::{
    CompileError, Dictionary, ImportError, LoadError, Template, Vocabulary, WordClass, WordError,
};
use tempfile::TempDir;

fn battle_module() -> serde_json::Value {
    json!({
        "prefix": "battle",
        "name": "Бой",
        "description": "Фразы о сражениях",
        "variables_verbose": {"hero": "герой", "number": "число"},
        "variables": {"hero": "обезьянка"},
        "types": {
            "hit": [
                ["ударить [[hero|вн]]", "ударить обезьянку"],
                ["[[hero|загл]] бьёт [{глупый|hero|вн}] крысу", "Обезьянка бьет глупую крысу"]
            ],
            "shadow": {
                "name": "Тени",
                "description": "Счёт теней",
                "variables": {"number": 5},
                "phrases": [["[[number||]] [{тень|number|}]", "5 теней"]]
            }
        }
    })
}

fn write_module(dir: &Path, name: &str, module: &serde_json::Value) {
    let texts = dir.join("texts");
    fs::create_dir_all(&texts).unwrap();
    fs::write(texts.join(format!("{name}.json")), module.to_string()).unwrap();
}

fn options(dir: &TempDir) -> ImportOptions {
    ImportOptions::builder()
        .source_dir(dir.path().join("texts"))
        .dictionary_path(dir.path().join("dictionary.json"))
        .vocabulary_path(dir.path().join("vocabulary.json"))
        .build()
}

// =============================================================================
// Successful imports
// =============================================================================

#[test]
fn import_builds_and_saves_stores() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "battle", &battle_module());

    let corpus = import_texts(&common::analyzer(), &options(&dir)).unwrap();
    assert_eq!(corpus.summary.files, 1);
    assert_eq!(corpus.summary.phrases, 3);
    assert_eq!(
        corpus.vocabulary.types().collect::<Vec<_>>(),
        vec!["battle_hit", "battle_shadow"]
    );
    assert_eq!(corpus.vocabulary.phrases("battle_hit").len(), 2);
    for lemma in ["обезьянка", "глупый", "тень"] {
        assert!(corpus.dictionary.contains(lemma), "{lemma} should be stored");
    }

    let mut dictionary = Dictionary::new();
    dictionary.load(dir.path().join("dictionary.json")).unwrap();
    assert_eq!(dictionary, corpus.dictionary);

    let mut vocabulary = Vocabulary::new();
    vocabulary.load(dir.path().join("vocabulary.json")).unwrap();
    assert_eq!(vocabulary, corpus.vocabulary);
}

#[test]
fn summary_describes_named_modules_and_types() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "battle", &battle_module());

    let corpus = import_texts(&common::analyzer(), &options(&dir)).unwrap();
    let module = &corpus.summary.modules["battle"];
    assert_eq!(module.name, "Бой");
    assert_eq!(module.variables_verbose["hero"], "герой");

    // Only described types are listed
    assert_eq!(module.types.len(), 1);
    let shadow = &module.types["battle_shadow"];
    assert_eq!(shadow.name, "Тени");
    assert_eq!(shadow.example, "5 теней");
    assert_eq!(shadow.variables, vec!["hero", "number"]);
}

#[test]
fn unnamed_module_is_imported_but_not_summarized() {
    let dir = tempfile::tempdir().unwrap();
    let module = json!({
        "prefix": "misc",
        "types": {"greeting": [["привет", "привет"]]}
    });
    write_module(dir.path(), "misc", &module);

    let corpus = import_texts(&common::analyzer(), &options(&dir)).unwrap();
    assert!(corpus.summary.modules.is_empty());
    assert!(corpus.vocabulary.contains("misc_greeting"));
}

#[test]
fn check_mode_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "battle", &battle_module());

    let mut options = options(&dir);
    options.check = true;
    let corpus = import_texts(&common::analyzer(), &options).unwrap();
    assert_eq!(corpus.summary.phrases, 3);
    assert!(!dir.path().join("dictionary.json").exists());
    assert!(!dir.path().join("vocabulary.json").exists());
}

#[test]
fn stored_types_are_replaced_and_others_kept() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "battle", &battle_module());

    let mut stored = Vocabulary::new();
    stored.register_type("battle_hit").unwrap();
    stored
        .add_phrase("battle_hit", Template::compile("старая фраза").unwrap())
        .unwrap();
    stored.register_type("travel_walk").unwrap();
    stored.save(dir.path().join("vocabulary.json")).unwrap();

    let corpus = import_texts(&common::analyzer(), &options(&dir)).unwrap();
    assert!(corpus.vocabulary.contains("travel_walk"));
    let texts: Vec<&str> = corpus
        .vocabulary
        .phrases("battle_hit")
        .iter()
        .map(Template::text)
        .collect();
    assert_eq!(texts, vec!["ударить {e_0}", "{e_0} бьёт {i_0} крысу"]);
}

#[test]
fn override_lemmas_join_the_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "battle", &battle_module());
    let overrides = dir.path().join("overrides.json");
    fs::write(&overrides, r#"{"ножницы": "noun,plural,plural"}"#).unwrap();

    let mut options = options(&dir);
    options.overrides_path = Some(overrides);
    let corpus = import_texts(&common::analyzer(), &options).unwrap();
    assert_eq!(corpus.dictionary.get("ножницы").class(), WordClass::Noun);
}

#[test]
fn unknown_words_become_literals_unless_strict() {
    let dir = tempfile::tempdir().unwrap();
    let module = json!({
        "prefix": "odd",
        "variables_verbose": {"beast": "зверь"},
        "variables": {"beast": "бармаглот"},
        "types": {"roar": [["[[beast|рд]] рёв", "бармаглот рев"]]}
    });
    write_module(dir.path(), "odd", &module);

    let corpus = import_texts(&common::analyzer(), &options(&dir)).unwrap();
    assert_eq!(corpus.dictionary.get("бармаглот").class(), WordClass::Fake);

    let mut strict = options(&dir);
    strict.strict = true;
    let err = import_texts(&common::analyzer(), &strict).unwrap_err();
    assert!(matches!(err, ImportError::Word(WordError::NoGrammarFound { .. })));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn render_mismatch_reports_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut module = battle_module();
    module["types"]["hit"] = json!([["ударить [[hero|вн]]", "ударить обезьяну"]]);
    write_module(dir.path(), "battle", &module);

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    match err {
        ImportError::RenderMismatch {
            expected,
            actual,
            position,
            ..
        } => {
            assert_eq!(expected, "ударить обезьяну");
            assert_eq!(actual, "ударить обезьянку");
            assert_eq!(position, 15);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("dictionary.json").exists());
}

#[test]
fn prefix_must_match_file_name() {
    let dir = tempfile::tempdir().unwrap();
    write_module(dir.path(), "fight", &battle_module());

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    assert!(matches!(
        err,
        ImportError::PrefixMismatch { ref prefix, ref expected, .. } if prefix == "battle" && expected == "fight"
    ));
}

#[test]
fn empty_type_suffix_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut module = battle_module();
    module["types"][""] = json!([["привет", "привет"]]);
    write_module(dir.path(), "battle", &module);

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    assert!(matches!(err, ImportError::EmptyTypeSuffix { .. }));
}

#[test]
fn every_variable_needs_a_description() {
    let dir = tempfile::tempdir().unwrap();
    let mut module = battle_module();
    module["variables_verbose"] = json!({"hero": "герой", "number": ""});
    write_module(dir.path(), "battle", &module);

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    assert!(matches!(
        err,
        ImportError::MissingVariableDescription { ref variable, .. } if variable == "number"
    ));
}

#[test]
fn undeclared_variable_fails_compilation() {
    let dir = tempfile::tempdir().unwrap();
    let mut module = battle_module();
    module["types"]["hit"] = json!([["ударить [[villain|вн]]", "ударить злодея"]]);
    write_module(dir.path(), "battle", &module);

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    assert!(matches!(err, ImportError::Compile(_)));
}

#[test]
fn type_names_clashing_across_modules_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    write_module(
        dir.path(),
        "a",
        &json!({"prefix": "a", "types": {"b_c": [["один", "один"]]}}),
    );
    write_module(
        dir.path(),
        "a_b",
        &json!({"prefix": "a_b", "types": {"c": [["два", "два"]]}}),
    );

    let mut options = options(&dir);
    options.check = true;
    let err = import_texts(&common::analyzer(), &options).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Compile(CompileError::TypeAlreadyRegistered { ref name }) if name == "a_b_c"
    ));
}

#[test]
fn stored_type_is_replaced_only_once() {
    let dir = tempfile::tempdir().unwrap();
    write_module(
        dir.path(),
        "a",
        &json!({"prefix": "a", "types": {"b_c": [["один", "один"]]}}),
    );
    write_module(
        dir.path(),
        "a_b",
        &json!({"prefix": "a_b", "types": {"c": [["два", "два"]]}}),
    );

    let mut stored = Vocabulary::new();
    stored.register_type("a_b_c").unwrap();
    stored.save(dir.path().join("vocabulary.json")).unwrap();

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    assert!(matches!(
        err,
        ImportError::Compile(CompileError::TypeAlreadyRegistered { ref name }) if name == "a_b_c"
    ));
}

#[test]
fn malformed_module_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let texts = dir.path().join("texts");
    fs::create_dir_all(&texts).unwrap();
    fs::write(texts.join("broken.json"), "{ not json").unwrap();
    fs::write(texts.join("notes.txt"), "ignored").unwrap();

    let err = import_texts(&common::analyzer(), &options(&dir)).unwrap_err();
    assert!(matches!(err, ImportError::Load(LoadError::Json { .. })));
}
