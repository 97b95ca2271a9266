//! Fixture parser tests: section dispatch, per-line sections, verbatim
//! file bodies, and parse errors.

use fixtest_core::errors::ParseError;
use fixtest_core::FixtestErrorCode;
use fixtest_harness::fixture::{Fixture, FixtureParser};
use serde_json::{json, Value};

fn parse(text: &str) -> Result<Fixture, ParseError> {
    FixtureParser::new().parse(text, &[])
}

const FULL_FIXTURE: &str = "<?php

$x = 1;
function foo() { return 2; }

-- FILENAME --
src/foo.php

-- FILE: src/bar.php --
<?php class Bar {}


-- CONFIG --
tools:
    php_analyzer:
        enabled: true

-- CHANGED PATHS --
src/foo.php

   src/bar.php

-- COMMENTS --
Line 3: Unused variable $x
Line 3: Second comment on the same line
Line 4: Missing doc comment

-- LINE ATTRIBUTES --
Line 12: {\"severity\": \"error\", \"fixable\": true}

-- FIXED CONTENT --
<?php

function foo() { return 2; }
";

// ---- Section dispatch ----

#[test]
fn test_full_fixture_sections() {
    let fx = parse(FULL_FIXTURE).unwrap();

    assert_eq!(fx.primary_filename(), "src/foo.php");
    assert_eq!(
        fx.primary_content(),
        "<?php\n\n$x = 1;\nfunction foo() { return 2; }"
    );
    assert_eq!(fx.additional_files()["src/bar.php"], "<?php class Bar {}\n");
    assert_eq!(
        Value::Object(fx.config().clone()),
        json!({"tools": {"php_analyzer": {"enabled": true}}})
    );
    assert_eq!(fx.changed_paths(), ["src/foo.php", "src/bar.php"]);
    assert_eq!(
        fx.expected_comments()[&3],
        vec![
            "Unused variable $x".to_string(),
            "Second comment on the same line".to_string()
        ]
    );
    assert_eq!(fx.expected_comments()[&4], vec!["Missing doc comment".to_string()]);
    assert_eq!(fx.expected_comment_count(), 3);
    assert_eq!(
        Value::Object(fx.expected_line_attributes()[&12].clone()),
        json!({"severity": "error", "fixable": true})
    );
    assert_eq!(
        fx.expected_fixed_content(),
        Some("<?php\n\nfunction foo() { return 2; }\n")
    );
}

#[test]
fn test_separator_spellings_are_interchangeable() {
    let fx = parse(
        "x\n\n-- FILENAME --\na.php\n\n-- CHANGED_PATHS --\na.php\n\n-- LINE-ATTRIBUTES --\nLine 1: {}\n\n-- FIXED_CONTENT --\ny",
    )
    .unwrap();
    assert_eq!(fx.changed_paths(), ["a.php"]);
    assert!(fx.expected_line_attributes().contains_key(&1));
    assert_eq!(fx.expected_fixed_content(), Some("y"));
}

#[test]
fn test_defaults_when_sections_are_omitted() {
    let fx = parse("x\n\n-- FILENAME --\na.php").unwrap();
    assert!(fx.additional_files().is_empty());
    assert!(fx.config().is_empty());
    assert!(fx.changed_paths().is_empty());
    assert!(fx.expected_comments().is_empty());
    assert!(fx.expected_line_attributes().is_empty());
    assert_eq!(fx.expected_fixed_content(), None);
    assert_eq!(fx.wanted_fixed_content(), "x");
}

#[test]
fn test_blank_comment_lines_are_skipped() {
    let fx = parse("x\n\n-- COMMENTS --\n\n   \nLine 2: a\n\n-- FILENAME --\na.php").unwrap();
    assert_eq!(fx.expected_comments().len(), 1);
    assert!(fx.expected_comments().values().all(|v| !v.is_empty()));
}

#[test]
fn test_later_fixed_content_overwrites() {
    let fx = parse(
        "x\n\n-- FIXED CONTENT --\nfirst\n\n-- FIXED CONTENT --\nsecond\n\n-- FILENAME --\na.php",
    )
    .unwrap();
    assert_eq!(fx.expected_fixed_content(), Some("second"));
}

#[test]
fn test_repeated_file_section_last_write_wins() {
    let fx =
        parse("x\n\n-- FILE: b.php --\none\n\n-- FILE: b.php --\ntwo\n\n-- FILENAME --\na.php")
            .unwrap();
    assert_eq!(fx.additional_files()["b.php"], "two");
}

// ---- Verbatim bodies ----

#[test]
fn test_file_bodies_keep_trailing_newlines() {
    let fx = parse("line one\n\n\n-- FILENAME --\na.php\n\n-- FIXED CONTENT --\nfixed\n\n").unwrap();
    assert_eq!(fx.primary_content(), "line one\n");
    assert_eq!(fx.expected_fixed_content(), Some("fixed\n\n"));
}

#[test]
fn test_delimiter_requires_blank_line_before() {
    // A header line without a preceding blank line is ordinary content.
    let fx = parse("a\n-- COMMENTS --\nb\n\n-- FILENAME --\na.php").unwrap();
    assert_eq!(fx.primary_content(), "a\n-- COMMENTS --\nb");
    assert!(fx.expected_comments().is_empty());
}

#[test]
fn test_placeholder_substitution() {
    let subs = vec![("%dir%".to_string(), "/srv/fixtures".to_string())];
    let fx = FixtureParser::new()
        .parse(
            "<?php require '%dir%/lib.php';\n\n-- FILENAME --\na.php\n\n-- FILE: b.php --\n%dir%",
            &subs,
        )
        .unwrap();
    assert_eq!(fx.primary_content(), "<?php require '/srv/fixtures/lib.php';");
    assert_eq!(fx.additional_files()["b.php"], "/srv/fixtures");
}

// ---- Parse errors ----

#[test]
fn test_bogus_header_is_named() {
    let err = parse("x\n\n-- BOGUS --\nstuff\n\n-- FILENAME --\na.php").unwrap_err();
    assert!(matches!(&err, ParseError::UnknownSection { header, .. } if header == "BOGUS"));
    assert!(err.to_string().contains("BOGUS"));
    assert_eq!(err.error_code(), "PARSE_UNKNOWN_SECTION");
}

#[test]
fn test_missing_filename() {
    let err = parse("<?php\n\n-- COMMENTS --\nLine 1: x").unwrap_err();
    assert_eq!(err, ParseError::MissingFilename);
    assert_eq!(parse("just content").unwrap_err(), ParseError::MissingFilename);
}

#[test]
fn test_malformed_comment_line_names_the_line() {
    let err = parse("x\n\n-- COMMENTS --\nline 1: lowercase\n\n-- FILENAME --\na.php").unwrap_err();
    match err {
        ParseError::MalformedLine {
            section, raw_line, ..
        } => {
            assert_eq!(section, "COMMENTS");
            assert_eq!(raw_line, "line 1: lowercase");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_attribute_line() {
    let err = parse("x\n\n-- LINE ATTRIBUTES --\nLine x: {}\n\n-- FILENAME --\na.php").unwrap_err();
    assert!(matches!(err, ParseError::MalformedLine { ref section, .. } if section == "LINE ATTRIBUTES"));
}

#[test]
fn test_duplicate_attribute_line() {
    let err = parse(
        "x\n\n-- LINE ATTRIBUTES --\nLine 12: {\"severity\": \"error\"}\nLine 12: {\"fixable\": true}\n\n-- FILENAME --\na.php",
    )
    .unwrap_err();
    assert_eq!(
        err,
        ParseError::DuplicateAttributes {
            line: 12,
            fixture_line: 5,
        }
    );
    assert!(err.to_string().contains("specified more than once"));
}

#[test]
fn test_non_structured_attributes() {
    for payload in ["\"text\"", "true", "null", "3.5"] {
        let text = format!("x\n\n-- LINE ATTRIBUTES --\nLine 1: {payload}\n\n-- FILENAME --\na.php");
        let err = parse(&text).unwrap_err();
        assert!(
            matches!(err, ParseError::AttributesNotStructured { line: 1, .. }),
            "payload {payload} gave {err:?}"
        );
    }
}

#[test]
fn test_parse_error_context_accessors() {
    let err = parse("x\n\n-- COMMENTS --\nnope\n\n-- FILENAME --\na.php").unwrap_err();
    assert_eq!(err.section(), Some("COMMENTS"));
    assert_eq!(err.fixture_line(), Some(4));
    assert_eq!(ParseError::MissingFilename.fixture_line(), None);
}
