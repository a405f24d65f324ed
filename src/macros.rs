//! Utility macros for the lexer.
//!
//! - `MK_SEGMENT!` - Creates a Segment instance
//! - `MK_NO_MATCH!` - Creates the empty LexMatch a matcher returns when it fails
//!
//! These macros reduce boilerplate in the matcher implementations.

/// Creates a Segment instance.
///
/// # Arguments
///
/// * `$segment_type` - The SegmentType (cloned)
/// * `$raw` - The matched text as a `String`
/// * `$pos` - The PositionMarker the segment starts at
///
/// # Example
///
/// ```ignore
/// let segment = MK_SEGMENT!(self.segment_type, String::from(","), start_pos);
/// ```
#[macro_export]
macro_rules! MK_SEGMENT {
    ($segment_type:expr, $raw:expr, $pos:expr) => {
        $crate::lexer::segments::Segment {
            segment_type: $segment_type.clone(),
            raw: $raw,
            pos_marker: $pos,
        }
    };
}

/// Creates a LexMatch with no segments, leaving input and position untouched.
///
/// This is how a matcher signals a structural non-match.
#[macro_export]
macro_rules! MK_NO_MATCH {
    ($forward:expr, $pos:expr) => {
        $crate::lexer::matchers::LexMatch {
            remaining: $forward,
            new_pos: $pos,
            segments: Vec::new(),
        }
    };
}
