//! Lexical analysis module.
//!
//! This module turns source text into segments. It contains:
//!
//! - `segments` - the Segment value and its type tag
//! - `matchers` - the Matcher trait and the literal, regex, repeated and
//!   stateful matchers
//! - `lexer` - the Lexer driver that runs the configured matchers to completion

pub mod lexer;
pub mod matchers;
pub mod segments;
