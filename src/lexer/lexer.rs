use tracing::debug;

use crate::{
    config::config::LexerConfig,
    errors::errors::{ConfigError, Error, ErrorImpl},
    PositionMarker,
};

use super::{
    matchers::{Matcher, RepeatedMultiMatcher},
    segments::Segment,
};

/// Turns raw source text into an ordered list of segments.
///
/// The matchers are built once and reused by every call to [`Lexer::lex`].
/// `config` is only set for lexers built from a configuration.
#[derive(Debug)]
pub struct Lexer {
    config: Option<LexerConfig>,
    matcher: RepeatedMultiMatcher,
}

impl Lexer {
    pub fn new(config: LexerConfig) -> Result<Lexer, ConfigError> {
        let submatchers = config.build_matchers()?;

        Ok(Lexer {
            matcher: RepeatedMultiMatcher::new("lexer", submatchers),
            config: Some(config),
        })
    }

    pub fn from_matchers(matchers: Vec<Box<dyn Matcher>>) -> Lexer {
        Lexer {
            config: None,
            matcher: RepeatedMultiMatcher::new("lexer", matchers),
        }
    }

    pub fn config(&self) -> Option<&LexerConfig> {
        self.config.as_ref()
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = raw.len()))]
    pub fn lex(&self, raw: &str) -> Result<Vec<Segment>, Error> {
        let res = self.matcher.match_forward(raw, PositionMarker::start())?;

        if let Some(c) = res.remaining.chars().next() {
            debug!(pos = %res.new_pos, "unlexable input");
            return Err(Error::new(
                ErrorImpl::UnlexableInput {
                    token: c.to_string(),
                },
                res.new_pos,
            ));
        }

        debug!(segments = res.segments.len(), "lexed");
        Ok(res.segments)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::from_matchers(Vec::new())
    }
}

pub fn tokenize(source: &str, config: LexerConfig) -> Result<Vec<Segment>, Box<dyn std::error::Error>> {
    let lexer = Lexer::new(config)?;
    Ok(lexer.lex(source)?)
}
