use std::fmt::Display;

use thiserror::Error;

use crate::PositionMarker;

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{internal_error} at {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: PositionMarker,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: PositionMarker) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &PositionMarker {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::EmptyInput { .. } => "EmptyInputError",
            ErrorImpl::UnlexableInput { .. } => "UnlexableInputError",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::EmptyInput { .. } => ErrorTip::None,
            ErrorImpl::UnlexableInput { token } => ErrorTip::Suggestion(format!(
                "Unexpected character `{}` at line {}, column {}",
                token.escape_debug(),
                self.position.line,
                self.position.column
            )),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("matcher {matcher:?} invoked with empty input")]
    EmptyInput { matcher: String },
    #[error("unlexable input: {token:?}")]
    UnlexableInput { token: String },
}

/// Errors raised while building a lexer from its configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("matcher {name:?} has an invalid pattern")]
    InvalidPattern {
        name: String,
        #[source]
        source: regex::Error,
    },
    #[error("matcher {name:?} has an empty template")]
    EmptyTemplate { name: String },
    #[error("contextual matcher {name:?} has no remainder segment type")]
    MissingRemainder { name: String },
    #[error("unknown preset {preset:?}")]
    UnknownPreset { preset: String },
    #[error("invalid lexer configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to read lexer configuration: {0}")]
    Io(#[from] std::io::Error),
}
