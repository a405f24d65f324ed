//! Lexer configuration.
//!
//! `LexerConfig` is deserialized from TOML and lists matchers in priority
//! order, optionally on top of a built-in preset from `presets`.

pub mod config;
pub mod presets;
