use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    errors::errors::ConfigError,
    lexer::matchers::{LiteralMatcher, Matcher, RegexMatcher, RepeatedMultiMatcher, StatefulMatcher},
};

use super::presets::PRESETS;

/// Options a `Lexer` is built from.
///
/// Explicit `matchers` take priority over the matchers of `preset`, which
/// follow them in their own order. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexerConfig {
    pub preset: Option<String>,
    pub matchers: Vec<MatcherConfig>,
}

impl LexerConfig {
    pub fn preset(name: &str) -> LexerConfig {
        LexerConfig {
            preset: Some(name.to_string()),
            matchers: Vec::new(),
        }
    }

    pub fn from_toml_str(source: &str) -> Result<LexerConfig, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<LexerConfig, ConfigError> {
        let source = fs::read_to_string(path)?;
        LexerConfig::from_toml_str(&source)
    }

    /// Builds the matchers in priority order.
    pub fn build_matchers(&self) -> Result<Vec<Box<dyn Matcher>>, ConfigError> {
        let preset: &[MatcherConfig] = match &self.preset {
            Some(name) => PRESETS
                .get(name.as_str())
                .map(Vec::as_slice)
                .ok_or_else(|| ConfigError::UnknownPreset {
                    preset: name.clone(),
                })?,
            None => &[],
        };

        self.matchers.iter().chain(preset).map(MatcherConfig::build).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum MatcherConfig {
    Literal {
        name: String,
        template: String,
        #[serde(default)]
        segment_type: Option<String>,
    },
    Pattern {
        name: String,
        template: String,
        #[serde(default)]
        segment_type: Option<String>,
    },
    Contextual {
        name: String,
        #[serde(default)]
        start: Option<Box<MatcherConfig>>,
        #[serde(default)]
        end: Option<Box<MatcherConfig>>,
        #[serde(default)]
        submatchers: Vec<MatcherConfig>,
        remainder_segment_type: String,
    },
    Repeated {
        name: String,
        #[serde(default)]
        submatchers: Vec<MatcherConfig>,
    },
}

impl MatcherConfig {
    pub fn literal(name: &str, template: &str, segment_type: &str) -> MatcherConfig {
        MatcherConfig::Literal {
            name: name.to_string(),
            template: template.to_string(),
            segment_type: Some(segment_type.to_string()),
        }
    }

    pub fn pattern(name: &str, template: &str, segment_type: &str) -> MatcherConfig {
        MatcherConfig::Pattern {
            name: name.to_string(),
            template: template.to_string(),
            segment_type: Some(segment_type.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            MatcherConfig::Literal { name, .. }
            | MatcherConfig::Pattern { name, .. }
            | MatcherConfig::Contextual { name, .. }
            | MatcherConfig::Repeated { name, .. } => name,
        }
    }

    /// Compiles this configuration. Segment types default to the matcher name.
    pub fn build(&self) -> Result<Box<dyn Matcher>, ConfigError> {
        let matcher: Box<dyn Matcher> = match self {
            MatcherConfig::Literal {
                name,
                template,
                segment_type,
            } => Box::new(LiteralMatcher::new(
                name.as_str(),
                template.as_str(),
                segment_type.as_deref().unwrap_or(name.as_str()),
            )?),
            MatcherConfig::Pattern {
                name,
                template,
                segment_type,
            } => Box::new(RegexMatcher::new(
                name.as_str(),
                template.as_str(),
                segment_type.as_deref().unwrap_or(name.as_str()),
            )?),
            MatcherConfig::Contextual {
                name,
                start,
                end,
                submatchers,
                remainder_segment_type,
            } => Box::new(StatefulMatcher::new(
                name.as_str(),
                start.as_deref().map(MatcherConfig::build).transpose()?,
                end.as_deref().map(MatcherConfig::build).transpose()?,
                build_all(submatchers)?,
                remainder_segment_type.as_str(),
            )?),
            MatcherConfig::Repeated { name, submatchers } => {
                Box::new(RepeatedMultiMatcher::new(name.as_str(), build_all(submatchers)?))
            }
        };

        Ok(matcher)
    }
}

fn build_all(configs: &[MatcherConfig]) -> Result<Vec<Box<dyn Matcher>>, ConfigError> {
    configs.iter().map(MatcherConfig::build).collect()
}
