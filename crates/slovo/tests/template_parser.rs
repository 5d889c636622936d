//! Integration tests for template parsing and compilation.

use slovo::parser::{
    PlaceholderKind, PlaceholderSyntax, SlotSegment, SourceSegment, parse_slots, parse_source,
};
use slovo::{CompileError, Grammeme as G, Template};

fn placeholders(source: &str) -> Vec<PlaceholderSyntax> {
    parse_source(source)
        .into_iter()
        .filter_map(|segment| match segment {
            SourceSegment::Placeholder(p) => Some(p),
            SourceSegment::Literal(_) => None,
        })
        .collect()
}

// =============================================================================
// Source syntax
// =============================================================================

#[test]
fn test_pure_literal() {
    assert_eq!(
        parse_source("просто текст"),
        vec![SourceSegment::Literal("просто текст".into())]
    );
    assert_eq!(parse_source(""), vec![]);
}

#[test]
fn test_external_and_internal() {
    let segments = parse_source("[[hero|вн]] и [{тень|hero|тв}]");
    assert_eq!(segments.len(), 3);
    assert_eq!(segments[1], SourceSegment::Literal(" и ".into()));

    let found = placeholders("[[hero|вн]] и [{тень|hero|тв}]");
    assert_eq!(found[0].kind, PlaceholderKind::External);
    assert_eq!(found[0].id, "hero");
    assert!(found[0].dependencies.is_empty());
    assert_eq!(found[0].tags, vec!["вн"]);
    assert_eq!(found[0].offset, 0);

    assert_eq!(found[1].kind, PlaceholderKind::Internal);
    assert_eq!(found[1].id, "тень");
    assert_eq!(found[1].dependencies, vec!["hero"]);
    assert_eq!(found[1].tags, vec!["тв"]);
    assert_eq!(found[1].source, "[{тень|hero|тв}]");
}

#[test]
fn test_bare_identifier_has_no_tags() {
    let found = placeholders("[[hero]]");
    assert_eq!(found[0].id, "hero");
    assert!(found[0].dependencies.is_empty());
    assert!(found[0].tags.is_empty());
}

#[test]
fn test_empty_segments_mean_none() {
    let found = placeholders("[[number||]]");
    assert_eq!(found[0].id, "number");
    assert!(found[0].dependencies.is_empty());
    assert!(found[0].tags.is_empty());

    let found = placeholders("[[hero|number||рд]]");
    assert_eq!(found[0].dependencies, vec!["number"]);
    assert_eq!(found[0].tags, vec!["рд"]);
}

#[test]
fn test_several_dependencies_and_tags() {
    let found = placeholders("[[hero| a | b |мн, тв ]]");
    assert_eq!(found[0].dependencies, vec!["a", "b"]);
    assert_eq!(found[0].tags, vec!["мн", "тв"]);
}

#[test]
fn test_malformed_brackets_are_literal() {
    for source in ["[[hero", "[[]]", "[{}]", "[hero]", "[{тень]", "]] [["] {
        let segments = parse_source(source);
        assert_eq!(
            segments,
            vec![SourceSegment::Literal(source.into())],
            "{source} should be literal"
        );
    }
}

#[test]
fn test_placeholder_after_stray_bracket() {
    let found = placeholders("[ [[hero]]");
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].offset, 2);
}

// =============================================================================
// Stored text
// =============================================================================

#[test]
fn test_slots_and_escapes() {
    assert_eq!(
        parse_slots("{e_0} {{буквально}} {i_1}").unwrap(),
        vec![
            SlotSegment::Slot("e_0".into()),
            SlotSegment::Literal(" {буквально} ".into()),
            SlotSegment::Slot("i_1".into()),
        ]
    );
}

#[test]
fn test_unbalanced_brace_fails() {
    assert!(parse_slots("{e_0").is_err());
    assert!(parse_slots("a } b").is_err());
}

// =============================================================================
// Compilation
// =============================================================================

#[test]
fn compile_assigns_slots_in_order() {
    let template = Template::compile("[{глупый|hero|рд}] [[hero|рд]] и [[enemy]]").unwrap();
    assert_eq!(template.text(), "{i_0} {e_0} и {e_1}");
    assert_eq!(template.externals()[0].grammemes, vec![G::Genitive]);
    assert_eq!(template.internals()[0].dependencies, vec!["hero"]);
    assert_eq!(
        template.variable_names().into_iter().collect::<Vec<_>>(),
        vec!["enemy", "hero"]
    );
}

#[test]
fn identical_placeholders_share_a_slot() {
    let template = Template::compile("[[hero]] и снова [[hero]], но [[hero|рд]]").unwrap();
    assert_eq!(template.text(), "{e_0} и снова {e_0}, но {e_1}");
    assert_eq!(template.externals().len(), 2);
}

#[test]
fn literal_braces_are_escaped() {
    let template = Template::compile("{[[hero]]}").unwrap();
    assert_eq!(template.text(), "{{{e_0}}}");
    assert_eq!(
        template.segments(),
        &[
            SlotSegment::Literal("{".into()),
            SlotSegment::Slot("e_0".into()),
            SlotSegment::Literal("}".into()),
        ]
    );
}

#[test]
fn unknown_tag_is_rejected_with_suggestions() {
    let err = Template::compile("[[hero|вн,множ]]").unwrap_err();
    match err {
        CompileError::UnknownTag {
            tag, placeholder, ..
        } => {
            assert_eq!(tag, "множ");
            assert_eq!(placeholder, "[[hero|вн,множ]]");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = Template::compile("[[hero|plurl]]").unwrap_err();
    assert!(matches!(err, CompileError::UnknownTag { ref suggestions, .. } if suggestions[0] == "plural"));
}

#[test]
fn empty_identifier_is_rejected() {
    let err = Template::compile("удар [[ |вн]]").unwrap_err();
    assert!(matches!(err, CompileError::EmptyIdentifier { .. }));
}

#[test]
fn declared_variables_are_enforced() {
    assert!(Template::compile_with_variables("[[hero|number|рд]]", &["hero", "number"]).is_ok());

    let err = Template::compile_with_variables("[{тень|villain|тв}] [[hero]]", &["hero"]).unwrap_err();
    match err {
        CompileError::UndeclaredVariables { names, .. } => assert_eq!(names, vec!["villain"]),
        other => panic!("unexpected error: {other}"),
    }

    // Declaring nothing still validates
    assert!(Template::compile_with_variables("[[hero]]", &[]).is_err());
    assert!(Template::compile_with_variables("[{тень}]", &[]).is_ok());
}

#[test]
fn templates_persist_as_records() {
    let template = Template::compile("[[hero|вн]] и [{тень|hero|тв}] {ок}").unwrap();
    let json = serde_json::to_value(&template).unwrap();
    assert_eq!(json["template"], "{e_0} и {i_0} {{ок}}");
    assert_eq!(
        json["externals"][0],
        serde_json::json!(["hero", [], "e_0", ["accusative"], "[[hero|вн]]"])
    );

    let restored: Template = serde_json::from_value(json).unwrap();
    assert_eq!(restored, template);
}

#[test]
fn stored_template_with_unknown_slot_is_rejected() {
    let json = r#"{"template": "{e_0} {e_1}", "externals": [["hero", [], "e_0", [], "[[hero]]"]], "internals": []}"#;
    let err = serde_json::from_str::<Template>(json).unwrap_err();
    assert!(err.to_string().contains("unknown slot 'e_1'"));
}
