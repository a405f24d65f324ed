#![allow(clippy::module_inception)]

use std::{fmt::Display, sync::Once};

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// A location in the source being lexed.
///
/// `offset` and `column` count chars, not bytes. A `'\n'` belongs to the
/// line it terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PositionMarker {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl PositionMarker {
    pub fn start() -> Self {
        PositionMarker {
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the marker reached after consuming `text` from this one.
    pub fn advance_by(&self, text: &str) -> PositionMarker {
        let mut marker = *self;

        for c in text.chars() {
            marker.offset += 1;
            if c == '\n' {
                marker.line += 1;
                marker.column = 1;
            } else {
                marker.column += 1;
            }
        }

        marker
    }
}

impl Default for PositionMarker {
    fn default() -> Self {
        PositionMarker::start()
    }
}

impl Display for PositionMarker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=seglex=debug` or
/// `RUST_LOG=seglex=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Returns the text of the line `position` sits on, including its newline.
pub fn get_line_at_position(source: &str, position: &PositionMarker) -> Option<String> {
    let index = position.line.checked_sub(1)?;
    source.split_inclusive('\n').nth(index).map(String::from)
}


pub fn display_error(error: &Error, source: &str, file_name: &str) {
    /*
        error: message
        -> query.sql
           |
        20 | select @ from t
           | -------^
    */

    let position = error.get_position();
    let line_text = get_line_at_position(source, position).unwrap_or_default();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", file_name);
    println!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    println!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = position.column.saturating_sub(1 + removed_whitespace) + 1;

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (string.chars().skip(start).collect(), start)
}
