use lazy_static::lazy_static;
use std::collections::HashMap;

use super::config::MatcherConfig;

lazy_static! {
    pub static ref PRESETS: HashMap<&'static str, Vec<MatcherConfig>> = {
        let mut map = HashMap::new();
        map.insert("sql", sql_matchers());
        map
    };
}

fn literal(name: &str, template: &str) -> MatcherConfig {
    MatcherConfig::literal(name, template, name)
}

/// Matchers for SQL-like source, highest priority first.
fn sql_matchers() -> Vec<MatcherConfig> {
    let mut matchers = vec![
        MatcherConfig::pattern("whitespace", "[\\t ]+", "whitespace"),
        MatcherConfig::pattern("newline", "\\r\\n|\\n", "newline"),
        MatcherConfig::pattern("inline_comment", "(--|#)[^\\n]*", "comment"),
        MatcherConfig::Contextual {
            name: "block_comment".to_string(),
            start: Some(Box::new(MatcherConfig::literal("block_comment_start", "/*", "comment"))),
            end: Some(Box::new(MatcherConfig::literal("block_comment_end", "*/", "comment"))),
            submatchers: Vec::new(),
            remainder_segment_type: "comment".to_string(),
        },
        MatcherConfig::pattern("single_quote", "'([^'\\\\]|\\\\.|'')*'", "single_quote"),
        MatcherConfig::pattern("double_quote", "\"([^\"\\\\]|\\\\.|\"\")*\"", "double_quote"),
        MatcherConfig::pattern("back_quote", "`[^`]*`", "back_quote"),
        MatcherConfig::pattern("numeric_literal", "[0-9]+(\\.[0-9]+)?", "numeric_literal"),
        literal("greater_than_or_equal", ">="),
        literal("less_than_or_equal", "<="),
        literal("not_equal", "!="),
        literal("not_equal_ansi", "<>"),
        literal("concat", "||"),
        literal("casting", "::"),
        MatcherConfig::pattern("code", "[a-zA-Z_][0-9a-zA-Z_]*", "code"),
    ];

    matchers.extend(
        [
            ("start_bracket", "("),
            ("end_bracket", ")"),
            ("start_square_bracket", "["),
            ("end_square_bracket", "]"),
            ("comma", ","),
            ("semicolon", ";"),
            ("dot", "."),
            ("colon", ":"),
            ("equals", "="),
            ("greater_than", ">"),
            ("less_than", "<"),
            ("plus", "+"),
            ("minus", "-"),
            ("star", "*"),
            ("divide", "/"),
            ("percent", "%"),
            ("pipe", "|"),
            ("ampersand", "&"),
            ("caret", "^"),
            ("tilde", "~"),
            ("bang", "!"),
        ]
        .into_iter()
        .map(|(name, template)| literal(name, template)),
    );

    matchers
}
