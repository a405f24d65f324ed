//! Error types for lexing and lexer construction.
//!
//! - `Error` pairs an `ErrorImpl` with the position it was raised at
//! - `ErrorImpl` is the lex-time taxonomy (empty input, unlexable input)
//! - `ConfigError` covers building matchers from a configuration
//! - `ErrorTip` carries the human readable hint shown by `display_error`

pub mod errors;
