use std::fmt::Debug;

use regex::{Regex, RegexBuilder};
use tracing::{debug, trace};

use crate::{
    errors::errors::{ConfigError, Error, ErrorImpl},
    PositionMarker, MK_NO_MATCH, MK_SEGMENT,
};

use super::segments::{Segment, SegmentType};

/// The outcome of one matching step.
///
/// `remaining` is always a suffix of the input the matcher was given, and
/// `new_pos` is the start position advanced by the raw text of `segments`.
#[derive(Debug, Clone, PartialEq)]
pub struct LexMatch<'a> {
    pub remaining: &'a str,
    pub new_pos: PositionMarker,
    pub segments: Vec<Segment>,
}

impl LexMatch<'_> {
    pub fn is_match(&self) -> bool {
        !self.segments.is_empty()
    }

    /// True when this match produced segments and consumed part of `forward`.
    fn advanced(&self, forward: &str) -> bool {
        self.is_match() && self.remaining.len() < forward.len()
    }
}

/// A strategy that recognizes a prefix of the remaining input.
///
/// Failing to recognize anything is not an error: it is a `LexMatch` with no
/// segments and the input handed back unchanged.
pub trait Matcher: Debug + Send + Sync {
    fn name(&self) -> &str;

    fn match_forward<'a>(
        &self,
        forward: &'a str,
        start_pos: PositionMarker,
    ) -> Result<LexMatch<'a>, Error>;
}

fn ensure_input(name: &str, forward: &str, start_pos: PositionMarker) -> Result<(), Error> {
    if forward.is_empty() {
        return Err(Error::new(
            ErrorImpl::EmptyInput {
                matcher: name.to_string(),
            },
            start_pos,
        ));
    }

    Ok(())
}

/// Splits `len` bytes off the front of `forward` into a single segment.
fn emit<'a>(
    forward: &'a str,
    len: usize,
    start_pos: PositionMarker,
    segment_type: &SegmentType,
) -> LexMatch<'a> {
    let (matched, remaining) = forward.split_at(len);

    LexMatch {
        remaining,
        new_pos: start_pos.advance_by(matched),
        segments: vec![MK_SEGMENT!(segment_type, matched.to_string(), start_pos)],
    }
}

#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    name: String,
    template: String,
    segment_type: SegmentType,
}

impl LiteralMatcher {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        segment_type: impl Into<SegmentType>,
    ) -> Result<LiteralMatcher, ConfigError> {
        let name = name.into();
        let template = template.into();

        if template.is_empty() {
            return Err(ConfigError::EmptyTemplate { name });
        }

        Ok(LiteralMatcher {
            name,
            template,
            segment_type: segment_type.into(),
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Matcher for LiteralMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn match_forward<'a>(
        &self,
        forward: &'a str,
        start_pos: PositionMarker,
    ) -> Result<LexMatch<'a>, Error> {
        ensure_input(&self.name, forward, start_pos)?;

        if forward.starts_with(self.template.as_str()) {
            trace!(matcher = %self.name, "literal matched");
            Ok(emit(forward, self.template.len(), start_pos, &self.segment_type))
        } else {
            Ok(MK_NO_MATCH!(forward, start_pos))
        }
    }
}

/// Matches a regular expression anchored at the start of the input.
///
/// `.` also matches newlines so multi-line tokens can be expressed.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    name: String,
    template: String,
    regex: Regex,
    segment_type: SegmentType,
}

impl RegexMatcher {
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        segment_type: impl Into<SegmentType>,
    ) -> Result<RegexMatcher, ConfigError> {
        let name = name.into();
        let template = template.into();

        if template.is_empty() {
            return Err(ConfigError::EmptyTemplate { name });
        }

        let regex = RegexBuilder::new(&format!(r"\A(?:{})", template))
            .dot_matches_new_line(true)
            .build()
            .map_err(|source| ConfigError::InvalidPattern {
                name: name.clone(),
                source,
            })?;

        Ok(RegexMatcher {
            name,
            template,
            regex,
            segment_type: segment_type.into(),
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl Matcher for RegexMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn match_forward<'a>(
        &self,
        forward: &'a str,
        start_pos: PositionMarker,
    ) -> Result<LexMatch<'a>, Error> {
        ensure_input(&self.name, forward, start_pos)?;

        match self.regex.find(forward) {
            // An empty match would never advance the lexer.
            Some(found) if found.end() > 0 => {
                trace!(matcher = %self.name, matched = found.as_str(), "pattern matched");
                Ok(emit(forward, found.end(), start_pos, &self.segment_type))
            }
            _ => Ok(MK_NO_MATCH!(forward, start_pos)),
        }
    }
}

/// Applies its sub-matchers in priority order until none of them advances.
///
/// After every successful step the scan restarts from the first sub-matcher.
#[derive(Debug)]
pub struct RepeatedMultiMatcher {
    name: String,
    submatchers: Vec<Box<dyn Matcher>>,
}

impl RepeatedMultiMatcher {
    pub fn new(name: impl Into<String>, submatchers: Vec<Box<dyn Matcher>>) -> RepeatedMultiMatcher {
        RepeatedMultiMatcher {
            name: name.into(),
            submatchers,
        }
    }

    pub fn submatchers(&self) -> &[Box<dyn Matcher>] {
        &self.submatchers
    }
}

/// Offers `forward` to each matcher in order and returns the first advancing result.
fn first_advancing<'a>(
    matchers: &[Box<dyn Matcher>],
    forward: &'a str,
    start_pos: PositionMarker,
) -> Result<Option<LexMatch<'a>>, Error> {
    for matcher in matchers {
        let res = matcher.match_forward(forward, start_pos)?;
        if res.advanced(forward) {
            return Ok(Some(res));
        }
    }

    Ok(None)
}

impl Matcher for RepeatedMultiMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn match_forward<'a>(
        &self,
        forward: &'a str,
        start_pos: PositionMarker,
    ) -> Result<LexMatch<'a>, Error> {
        let mut seg_buff = Vec::new();
        let mut forward = forward;
        let mut pos = start_pos;

        while !forward.is_empty() {
            match first_advancing(&self.submatchers, forward, pos)? {
                Some(res) => {
                    seg_buff.extend(res.segments);
                    forward = res.remaining;
                    pos = res.new_pos;
                }
                None => {
                    debug!(matcher = %self.name, %pos, "no sub-matcher advanced");
                    break;
                }
            }
        }

        Ok(LexMatch {
            remaining: forward,
            new_pos: pos,
            segments: seg_buff,
        })
    }
}

/// A delimited region lexed with its own nested matchers.
///
/// The region opens with `start` (or immediately when there is none) and
/// closes with `end`. Without an `end` it runs to the end of the input; with
/// one, an unterminated region is a non-match. Interior text no sub-matcher
/// claims is gathered into segments of `remainder_segment_type`.
#[derive(Debug)]
pub struct StatefulMatcher {
    name: String,
    start: Option<Box<dyn Matcher>>,
    end: Option<Box<dyn Matcher>>,
    submatchers: Vec<Box<dyn Matcher>>,
    remainder_segment_type: SegmentType,
}

impl StatefulMatcher {
    pub fn new(
        name: impl Into<String>,
        start: Option<Box<dyn Matcher>>,
        end: Option<Box<dyn Matcher>>,
        submatchers: Vec<Box<dyn Matcher>>,
        remainder_segment_type: impl Into<SegmentType>,
    ) -> Result<StatefulMatcher, ConfigError> {
        let name = name.into();
        let remainder_segment_type = remainder_segment_type.into();

        if remainder_segment_type.is_empty() {
            return Err(ConfigError::MissingRemainder { name });
        }

        Ok(StatefulMatcher {
            name,
            start,
            end,
            submatchers,
            remainder_segment_type,
        })
    }

    fn flush(&self, pending: &mut String, pending_pos: PositionMarker, segments: &mut Vec<Segment>) {
        if !pending.is_empty() {
            segments.push(MK_SEGMENT!(
                self.remainder_segment_type,
                std::mem::take(pending),
                pending_pos
            ));
        }
    }
}

impl Matcher for StatefulMatcher {
    fn name(&self) -> &str {
        &self.name
    }

    fn match_forward<'a>(
        &self,
        forward: &'a str,
        start_pos: PositionMarker,
    ) -> Result<LexMatch<'a>, Error> {
        ensure_input(&self.name, forward, start_pos)?;

        let input = forward;
        let mut forward = forward;
        let mut pos = start_pos;
        let mut segments = Vec::new();

        if let Some(start) = &self.start {
            let res = start.match_forward(forward, pos)?;
            if !res.advanced(forward) {
                return Ok(MK_NO_MATCH!(input, start_pos));
            }
            trace!(matcher = %self.name, %pos, "entered region");
            segments.extend(res.segments);
            forward = res.remaining;
            pos = res.new_pos;
        }

        let mut pending = String::new();
        let mut pending_pos = pos;

        while let Some(c) = forward.chars().next() {
            if let Some(end) = &self.end {
                let res = end.match_forward(forward, pos)?;
                if res.advanced(forward) {
                    trace!(matcher = %self.name, %pos, "left region");
                    self.flush(&mut pending, pending_pos, &mut segments);
                    segments.extend(res.segments);
                    return Ok(LexMatch {
                        remaining: res.remaining,
                        new_pos: res.new_pos,
                        segments,
                    });
                }
            }

            if let Some(res) = first_advancing(&self.submatchers, forward, pos)? {
                self.flush(&mut pending, pending_pos, &mut segments);
                segments.extend(res.segments);
                forward = res.remaining;
                pos = res.new_pos;
                continue;
            }

            if pending.is_empty() {
                pending_pos = pos;
            }
            let (unclaimed, rest) = forward.split_at(c.len_utf8());
            pending.push_str(unclaimed);
            pos = pos.advance_by(unclaimed);
            forward = rest;
        }

        if self.end.is_some() {
            trace!(matcher = %self.name, "unterminated region");
            return Ok(MK_NO_MATCH!(input, start_pos));
        }

        self.flush(&mut pending, pending_pos, &mut segments);

        Ok(LexMatch {
            remaining: forward,
            new_pos: pos,
            segments,
        })
    }
}
