//! Corpus import: building the dictionary and vocabulary from phrase modules.
//!
//! A source directory holds one JSON module per phrase group. Each module
//! declares its prefix (equal to the file name), describes its variables and
//! lists phrase types, each with `[template, expected rendering]` pairs. Every
//! template is compiled against the declared variables and rendered with
//! their sample values; a rendering that differs from the expected text
//! aborts the import.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};

use bon::Builder;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::interpreter::{Dictionary, ImportError, LoadError, Template, Vocabulary};
use crate::morph::{Analyzer, Overrides, WordFactory};
use crate::types::{Variable, Variables, Word};

/// Settings for [`import_texts`].
///
/// # Example
///
/// ```
/// use slovo::interpreter::ImportOptions;
///
/// let options = ImportOptions::builder()
///     .source_dir("fixtures/texts")
///     .dictionary_path("/tmp/dictionary.json")
///     .check(true)
///     .build();
/// assert!(options.check);
/// assert!(options.vocabulary_path.is_none());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct ImportOptions {
    /// Directory scanned for `*.json` modules.
    #[builder(into)]
    pub source_dir: PathBuf,

    /// Override table; every lemma in it is added to the dictionary.
    #[builder(into)]
    pub overrides_path: Option<PathBuf>,

    #[builder(into)]
    pub vocabulary_path: Option<PathBuf>,

    #[builder(into)]
    pub dictionary_path: Option<PathBuf>,

    /// Validate only: the vocabulary store is neither loaded nor saved, and
    /// the dictionary store is not saved.
    #[builder(default)]
    pub check: bool,

    /// Fail on words the analyzer does not know instead of storing them as
    /// literals.
    #[builder(default)]
    pub strict: bool,
}

/// The stores built by an import, and a description of what was imported.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub dictionary: Dictionary,
    pub vocabulary: Vocabulary,
    pub summary: ImportSummary,
}

/// Human-facing description of the imported modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    /// Modules carrying a name and description, by prefix.
    pub modules: BTreeMap<String, ModuleSummary>,
    /// Number of module files processed.
    pub files: usize,
    /// Number of templates compiled and verified.
    pub phrases: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleSummary {
    pub name: String,
    pub description: String,
    /// Described types, by full type name.
    pub types: BTreeMap<String, TypeSummary>,
    pub variables_verbose: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TypeSummary {
    pub name: String,
    pub description: String,
    /// Expected rendering of the type's first phrase.
    pub example: String,
    pub variables: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModuleFile {
    prefix: String,
    name: Option<String>,
    description: Option<String>,
    #[serde(default)]
    variables_verbose: BTreeMap<String, String>,
    #[serde(default)]
    variables: BTreeMap<String, SampleValue>,
    #[serde(default)]
    types: BTreeMap<String, TypeEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TypeEntry {
    Phrases(Vec<(String, String)>),
    Described {
        name: Option<String>,
        description: Option<String>,
        #[serde(default)]
        variables: BTreeMap<String, SampleValue>,
        phrases: Vec<(String, String)>,
    },
}

impl TypeEntry {
    fn phrases(&self) -> &[(String, String)] {
        match self {
            TypeEntry::Phrases(phrases) | TypeEntry::Described { phrases, .. } => phrases,
        }
    }

    fn variables(&self) -> Option<&BTreeMap<String, SampleValue>> {
        match self {
            TypeEntry::Phrases(_) => None,
            TypeEntry::Described { variables, .. } => Some(variables),
        }
    }
}

/// A sample variable value in a module file.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum SampleValue {
    Number(i64),
    Lemma(String),
}

impl From<&SampleValue> for Variable {
    fn from(value: &SampleValue) -> Self {
        match value {
            SampleValue::Number(n) => Variable::from(*n),
            SampleValue::Lemma(lemma) => Variable::from(lemma.as_str()),
        }
    }
}

/// Import every module in `options.source_dir`.
///
/// Existing stores are loaded first (the vocabulary only outside check
/// mode), so curated dictionary entries take precedence over derived ones.
/// Outside check mode the stores are saved afterwards.
pub fn import_texts<A: Analyzer + ?Sized>(
    analyzer: &A,
    options: &ImportOptions,
) -> Result<Corpus, ImportError> {
    let overrides = match &options.overrides_path {
        Some(path) => Overrides::load(path)?,
        None => Overrides::new(),
    };
    let factory = WordFactory::new(analyzer, &overrides);
    let mut corpus = Corpus::default();

    if let Some(path) = options.dictionary_path.as_ref().filter(|p| p.exists()) {
        let loaded = corpus.dictionary.load(path)?;
        info!("loaded {loaded} words from '{}'", path.display());
    }
    if !options.check {
        if let Some(path) = options.vocabulary_path.as_ref().filter(|p| p.exists()) {
            let loaded = corpus.vocabulary.load(path)?;
            info!("loaded {loaded} phrase types from '{}'", path.display());
        }
    }
    // Each stored type may be replaced once; other duplicates are errors
    let mut stored_types: BTreeSet<String> =
        corpus.vocabulary.types().map(str::to_string).collect();

    let mut lemmas: Vec<&str> = overrides.lemmas().collect();
    lemmas.sort_unstable();
    for lemma in lemmas {
        corpus.dictionary.add(make_word(&factory, lemma, options.strict)?);
    }

    for path in module_files(&options.source_dir)? {
        import_module(&factory, &path, options.strict, &mut stored_types, &mut corpus)?;
        corpus.summary.files += 1;
    }

    if !options.check {
        if let Some(path) = &options.vocabulary_path {
            corpus.vocabulary.save(path)?;
        }
        if let Some(path) = &options.dictionary_path {
            corpus.dictionary.save(path)?;
        }
    }

    info!(
        "imported {} phrases from {} modules, dictionary holds {} words",
        corpus.summary.phrases,
        corpus.summary.files,
        corpus.dictionary.len()
    );
    Ok(corpus)
}

/// `*.json` files directly inside `dir`, sorted by name.
fn module_files(dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
    let io_error = |e| LoadError::Io {
        path: dir.to_path_buf(),
        source: e,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn import_module<A: Analyzer + ?Sized>(
    factory: &WordFactory<'_, A>,
    path: &Path,
    strict: bool,
    stored_types: &mut BTreeSet<String>,
    corpus: &mut Corpus,
) -> Result<(), ImportError> {
    let group = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    info!("load '{group}'");

    let content = fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let module: ModuleFile = serde_json::from_str(&content).map_err(|e| LoadError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;

    if module.prefix != group {
        return Err(ImportError::PrefixMismatch {
            path: path.to_path_buf(),
            prefix: module.prefix,
            expected: group,
        });
    }
    if module.types.contains_key("") {
        return Err(ImportError::EmptyTypeSuffix {
            prefix: module.prefix,
        });
    }
    check_descriptions(&module, module.variables.keys())?;

    let mut types = BTreeMap::new();
    for (suffix, entry) in &module.types {
        let type_name = format!("{}_{suffix}", module.prefix);
        if stored_types.remove(&type_name) {
            corpus.vocabulary.remove_type(&type_name);
            debug!("replacing stored phrase type '{type_name}'");
        }
        corpus.vocabulary.register_type(&type_name)?;

        let mut samples = module.variables.clone();
        if let Some(local) = entry.variables() {
            check_descriptions(&module, local.keys())?;
            samples.extend(local.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        let declared: Vec<&str> = samples.keys().map(String::as_str).collect();

        for (source, expected) in entry.phrases() {
            let template = Template::compile_with_variables(source, &declared)?;
            corpus.vocabulary.add_phrase(&type_name, template.clone())?;

            for value in samples.values() {
                if let SampleValue::Lemma(lemma) = value {
                    corpus.dictionary.add(make_word(factory, lemma, strict)?);
                }
            }
            for lemma in template.internal_words() {
                corpus.dictionary.add(make_word(factory, lemma, strict)?);
            }

            let variables: Variables = samples
                .iter()
                .map(|(name, value)| (name.clone(), Variable::from(value)))
                .collect();
            let actual = template.substitute(&corpus.dictionary, &variables)?;
            verify_rendering(source, expected, &actual)?;
            corpus.summary.phrases += 1;
        }

        if let TypeEntry::Described {
            name: Some(name),
            description: Some(description),
            variables,
            phrases,
        } = entry
        {
            let mut names: Vec<String> = module.variables.keys().cloned().collect();
            names.extend(variables.keys().filter(|k| !module.variables.contains_key(*k)).cloned());
            names.sort();
            types.insert(
                type_name,
                TypeSummary {
                    name: name.clone(),
                    description: description.clone(),
                    example: phrases.first().map(|(_, e)| e.clone()).unwrap_or_default(),
                    variables: names,
                },
            );
        }
    }

    if let (Some(name), Some(description)) = (module.name, module.description) {
        corpus.summary.modules.insert(
            module.prefix,
            ModuleSummary {
                name,
                description,
                types,
                variables_verbose: module.variables_verbose,
            },
        );
    }
    Ok(())
}

fn check_descriptions<'a>(
    module: &ModuleFile,
    variables: impl Iterator<Item = &'a String>,
) -> Result<(), ImportError> {
    for variable in variables {
        let described = module
            .variables_verbose
            .get(variable)
            .is_some_and(|verbose| !verbose.is_empty());
        if !described {
            return Err(ImportError::MissingVariableDescription {
                prefix: module.prefix.clone(),
                variable: variable.clone(),
            });
        }
    }
    Ok(())
}

fn make_word<A: Analyzer + ?Sized>(
    factory: &WordFactory<'_, A>,
    text: &str,
    strict: bool,
) -> Result<Word, ImportError> {
    let word = if strict {
        factory.create(text)?
    } else {
        factory.create_lenient(text)?
    };
    Ok(word)
}

/// Compare a rendering with the expected text, treating ё and е as equal.
fn verify_rendering(template: &str, expected: &str, actual: &str) -> Result<(), ImportError> {
    let expected = fold_yo(expected);
    let actual = fold_yo(actual);
    if expected == actual {
        return Ok(());
    }

    let position = expected
        .chars()
        .zip(actual.chars())
        .position(|(e, a)| e != a)
        .unwrap_or_else(|| expected.chars().count().min(actual.chars().count()));
    Err(ImportError::RenderMismatch {
        template: template.to_string(),
        expected,
        actual,
        position,
    })
}

fn fold_yo(text: &str) -> String {
    text.replace('ё', "е").replace('Ё', "Е")
}
