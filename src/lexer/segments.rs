use std::{fmt::Display, ops::Deref, sync::Arc};

use crate::PositionMarker;

/// Tag naming the kind of a segment, as declared by the matcher that made it.
///
/// Cheap to clone so every segment can carry its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentType(Arc<str>);

impl SegmentType {
    pub fn new(name: &str) -> Self {
        SegmentType(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for SegmentType {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SegmentType {
    fn from(name: &str) -> Self {
        SegmentType::new(name)
    }
}

impl From<String> for SegmentType {
    fn from(name: String) -> Self {
        SegmentType(Arc::from(name))
    }
}

impl PartialEq<str> for SegmentType {
    fn eq(&self, other: &str) -> bool {
        &*self.0 == other
    }
}

impl PartialEq<&str> for SegmentType {
    fn eq(&self, other: &&str) -> bool {
        &*self.0 == *other
    }
}

impl Display for SegmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub segment_type: SegmentType,
    pub raw: String,
    pub pos_marker: PositionMarker,
}

impl Display for Segment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Segment {{\ntype: {},\nraw: {:?},\nat: {}}}",
            self.segment_type, self.raw, self.pos_marker
        )
    }
}

impl Segment {
    /// Number of chars in the raw text.
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Position right after the last char of this segment.
    pub fn end_marker(&self) -> PositionMarker {
        self.pos_marker.advance_by(&self.raw)
    }

    pub fn is_type(&self, segment_type: &str) -> bool {
        self.segment_type == segment_type
    }

    pub fn debug(&self) {
        println!(
            "{:>4}:{:<4} {:<16} {:?}",
            self.pos_marker.line,
            self.pos_marker.column,
            self.segment_type.as_str(),
            self.raw
        );
    }
}

/// Concatenates the raw text of `segments` in order.
pub fn join_raw(segments: &[Segment]) -> String {
    segments.iter().map(|segment| segment.raw.as_str()).collect()
}
