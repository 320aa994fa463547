//! Segment records: raw upstream input and the normalized timeline form.
//!
//! Upstream subtitle parsing and screenplay reconstruction make no
//! timing guarantees, so every raw field that can be absent is optional
//! and repair happens downstream in the normalizer, never here.

use serde::{Deserialize, Serialize};

use crate::time::{TimeRange, TimeValue};

/// A raw segment as received from the segment-generation pipeline.
///
/// No invariants are enforced on input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSegment {
    /// Start within the source media (seconds or SRT string).
    #[serde(default)]
    pub start_time: Option<TimeValue>,

    /// End within the source media (seconds or SRT string).
    #[serde(default)]
    pub end_time: Option<TimeValue>,

    /// Caption text carried by the segment.
    #[serde(default)]
    pub text: String,

    /// Source media path. Segments without one fall back to the export's
    /// shared source video.
    #[serde(default)]
    pub source_file: Option<String>,

    /// Optional source resolution override.
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,

    /// Optional source frame rate override.
    #[serde(default)]
    pub fps: Option<u32>,

    /// Optional source bitrate in kbps.
    #[serde(default)]
    pub bitrate: Option<u32>,
}

/// Source timerange tagged with its provenance.
///
/// The normalizer substitutes a placeholder for degenerate durations; the
/// tag keeps "clean" and "repaired" segments distinguishable without
/// losing the repaired range itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceTiming {
    /// Timing parsed cleanly from the raw record.
    Clean(TimeRange),
    /// Degenerate duration replaced by the fallback placeholder.
    Fallback(TimeRange),
}

impl SourceTiming {
    /// The effective source range regardless of provenance.
    pub fn range(&self) -> TimeRange {
        match self {
            Self::Clean(range) | Self::Fallback(range) => *range,
        }
    }

    /// Whether the fallback policy produced this range.
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// A segment after normalization: canonical identifier, repaired source
/// range, and an assigned slot on the output timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedSegment {
    /// Fresh identifier, independent of any upstream numbering.
    pub id: String,

    /// Caption text.
    pub text: String,

    /// Source media path, if the raw record named one.
    pub source_file: Option<String>,

    /// Source timerange with repair provenance.
    pub timing: SourceTiming,

    /// Slot on the assembled output timeline.
    pub target_timerange: TimeRange,

    /// Media hints forwarded to the material registry.
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub fps: Option<u32>,
    pub bitrate: Option<u32>,
}

impl NormalizedSegment {
    /// Offset within the source media.
    pub fn source_timerange(&self) -> TimeRange {
        self.timing.range()
    }
}

/// Input accepted by the export driver: either a bare segment list or a
/// wrapper object carrying optional project metadata. Resolved once at
/// the API boundary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExportInput {
    /// A bare sequence of raw segments.
    Segments(Vec<RawSegment>),
    /// A wrapper object with segments plus optional metadata.
    Project {
        segments: Vec<RawSegment>,
        #[serde(default)]
        project_name: Option<String>,
        #[serde(default)]
        source_video: Option<String>,
    },
}

impl ExportInput {
    /// The segment list regardless of input shape.
    pub fn segments(&self) -> &[RawSegment] {
        match self {
            Self::Segments(segments) => segments,
            Self::Project { segments, .. } => segments,
        }
    }

    /// Project name, when the wrapper form supplied one.
    pub fn project_name(&self) -> Option<&str> {
        match self {
            Self::Segments(_) => None,
            Self::Project { project_name, .. } => project_name.as_deref(),
        }
    }

    /// Shared source video path, when the wrapper form supplied one.
    pub fn source_video(&self) -> Option<&str> {
        match self {
            Self::Segments(_) => None,
            Self::Project { source_video, .. } => source_video.as_deref(),
        }
    }
}
