//! Integration tests for end-to-end lexing.
//!
//! These tests build lexers from presets and TOML configuration and check the
//! segments produced for realistic source text.

use pretty_assertions::assert_eq;
use seglex::{
    config::config::LexerConfig,
    get_line_at_position,
    lexer::{
        lexer::{tokenize, Lexer},
        segments::{join_raw, Segment},
    },
    PositionMarker,
};

fn significant(segments: &[Segment]) -> Vec<(String, String)> {
    segments
        .iter()
        .filter(|s| !s.is_type("whitespace") && !s.is_type("newline"))
        .map(|s| (s.segment_type.to_string(), s.raw.clone()))
        .collect()
}

fn pair(segment_type: &str, raw: &str) -> (String, String) {
    (segment_type.to_string(), raw.to_string())
}

#[test]
fn test_lex_simple_select() {
    let lexer = Lexer::new(LexerConfig::preset("sql")).unwrap();
    let source = "SELECT a, b FROM tbl WHERE a >= 1.5;\n";
    let segments = lexer.lex(source).unwrap();

    assert_eq!(join_raw(&segments), source);
    assert_eq!(
        significant(&segments),
        vec![
            pair("code", "SELECT"),
            pair("code", "a"),
            pair("comma", ","),
            pair("code", "b"),
            pair("code", "FROM"),
            pair("code", "tbl"),
            pair("code", "WHERE"),
            pair("code", "a"),
            pair("greater_than_or_equal", ">="),
            pair("numeric_literal", "1.5"),
            pair("semicolon", ";"),
        ]
    );
    assert!(segments.last().unwrap().is_type("newline"));
}

#[test]
fn test_lex_comments_and_strings() {
    let lexer = Lexer::new(LexerConfig::preset("sql")).unwrap();
    let source = "-- header\nselect 'it''s', \"col\" /* multi\nline */ from t # tail";
    let segments = lexer.lex(source).unwrap();

    assert_eq!(join_raw(&segments), source);
    assert_eq!(
        significant(&segments),
        vec![
            pair("comment", "-- header"),
            pair("code", "select"),
            pair("single_quote", "'it''s'"),
            pair("comma", ","),
            pair("double_quote", "\"col\""),
            pair("comment", "/*"),
            pair("comment", " multi\nline "),
            pair("comment", "*/"),
            pair("code", "from"),
            pair("code", "t"),
            pair("comment", "# tail"),
        ]
    );

    let from = segments.iter().find(|s| s.raw == "from").unwrap();
    assert_eq!(from.pos_marker, PositionMarker { offset: 49, line: 3, column: 9 });
}

#[test]
fn test_lex_unlexable_character() {
    let lexer = Lexer::new(LexerConfig::preset("sql")).unwrap();
    let source = "select 1\nfrom t where x = @param";
    let err = lexer.lex(source).unwrap_err();

    assert_eq!(err.get_error_name(), "UnlexableInputError");
    assert_eq!(*err.get_position(), PositionMarker { offset: 26, line: 2, column: 18 });
    assert_eq!(
        get_line_at_position(source, err.get_position()).as_deref(),
        Some("from t where x = @param")
    );
}

#[test]
fn test_lex_unterminated_block_comment() {
    let lexer = Lexer::new(LexerConfig::preset("sql")).unwrap();

    // "/" and "*" are still lexable on their own.
    let segments = lexer.lex("a /* b").unwrap();
    assert_eq!(
        significant(&segments),
        vec![
            pair("code", "a"),
            pair("divide", "/"),
            pair("star", "*"),
            pair("code", "b"),
        ]
    );
}

#[test]
fn test_lex_with_toml_config() {
    let config = LexerConfig::from_toml_str(
        r#"
        preset = "sql"

        [[matchers]]
        kind = "pattern"
        name = "parameter"
        template = "@[a-z_]+"
        "#,
    )
    .unwrap();
    let lexer = Lexer::new(config).unwrap();
    let segments = lexer.lex("x = @param").unwrap();

    assert_eq!(
        significant(&segments),
        vec![pair("code", "x"), pair("equals", "="), pair("parameter", "@param")]
    );
}

#[test]
fn test_lex_template_region() {
    let config = LexerConfig::from_toml_str(
        r#"
        [[matchers]]
        kind = "contextual"
        name = "template"
        remainder_segment_type = "template_body"
        start = { kind = "literal", name = "template_open", template = "{{" }
        end = { kind = "literal", name = "template_close", template = "}}" }

        [[matchers.submatchers]]
        kind = "pattern"
        name = "template_var"
        template = "[a-z]+"

        [[matchers]]
        kind = "contextual"
        name = "text"
        remainder_segment_type = "text"
        end = { kind = "pattern", name = "text_end", template = "\n" }
        "#,
    )
    .unwrap();
    let lexer = Lexer::new(config).unwrap();
    let segments = lexer.lex("{{ name }}hello\n").unwrap();

    let types: Vec<&str> = segments.iter().map(|s| s.segment_type.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "template_open",
            "template_body",
            "template_var",
            "template_body",
            "template_close",
            "text",
            "text_end",
        ]
    );
}

#[test]
fn test_tokenize_reports_config_errors() {
    let result = tokenize("select", LexerConfig::preset("missing"));

    assert!(result.is_err());
    assert_eq!(result.unwrap_err().to_string(), "unknown preset \"missing\"");
}

#[test]
fn test_tokenize_empty_source() {
    assert_eq!(tokenize("", LexerConfig::default()).unwrap(), vec![]);
}

#[test]
fn test_lexer_shared_between_threads() {
    let lexer = &Lexer::new(LexerConfig::preset("sql")).unwrap();
    let sources = ["select 1", "select a from b", "update t set x = 'y'"];

    let results: Vec<Vec<Segment>> = std::thread::scope(|scope| {
        let handles: Vec<_> = sources
            .iter()
            .map(|source| scope.spawn(move || lexer.lex(source).unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (source, segments) in sources.iter().zip(&results) {
        assert_eq!(join_raw(segments), *source);
        assert_eq!(*segments, lexer.lex(source).unwrap());
    }
}
