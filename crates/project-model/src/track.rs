//! Track types: parallel video/audio/text lanes of timeline slots.

use serde::{Deserialize, Serialize};

use crate::time::TimeRange;

/// Track (and track segment) categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
    Text,
}

impl TrackType {
    /// The material category a segment of this type must resolve into.
    pub fn material_category(&self) -> &'static str {
        match self {
            Self::Video => "videos",
            Self::Audio => "audios",
            Self::Text => "texts",
        }
    }
}

/// One slot on a track, binding a material to a pair of timeranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSegment {
    pub id: String,

    #[serde(rename = "type")]
    pub segment_type: TrackType,

    /// Identifier of the bound material; must resolve to an existing
    /// material of the matching category.
    pub material_id: String,

    /// Render order within the track.
    pub track_render_index: u32,

    /// Offset within the source media.
    pub source_timerange: TimeRange,

    /// Slot on the output timeline.
    pub target_timerange: TimeRange,

    /// Always present in the serialized form, empty in this pipeline.
    pub extra_material_refs: Vec<String>,
}

/// A parallel lane of time-ordered segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,

    #[serde(rename = "type")]
    pub track_type: TrackType,

    pub attribute: u32,
    pub flag: u32,

    pub segments: Vec<TrackSegment>,
}

impl Track {
    /// An empty track of the given type.
    pub fn empty(id: String, track_type: TrackType) -> Self {
        Self {
            id,
            track_type,
            attribute: 0,
            flag: 0,
            segments: Vec::new(),
        }
    }

    /// Total span of the track: end of the last segment, 0 when empty.
    pub fn span_ms(&self) -> u64 {
        self.segments
            .last()
            .map(|segment| segment.target_timerange.end())
            .unwrap_or(0)
    }

    /// Whether target ranges are gap-free: each segment starts exactly
    /// where the previous one ends.
    pub fn is_contiguous(&self) -> bool {
        self.segments.windows(2).all(|pair| {
            pair[1].target_timerange.start == pair[0].target_timerange.end()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(start: u64, duration: u64) -> TrackSegment {
        TrackSegment {
            id: format!("seg-{start}"),
            segment_type: TrackType::Video,
            material_id: format!("mat-{start}"),
            track_render_index: 0,
            source_timerange: TimeRange::new(start, duration),
            target_timerange: TimeRange::new(start, duration),
            extra_material_refs: Vec::new(),
        }
    }

    #[test]
    fn test_span_of_empty_track_is_zero() {
        let track = Track::empty("t1".to_string(), TrackType::Video);
        assert_eq!(track.span_ms(), 0);
    }

    #[test]
    fn test_span_is_end_of_last_segment() {
        let mut track = Track::empty("t1".to_string(), TrackType::Video);
        track.segments.push(slot(0, 2000));
        track.segments.push(slot(2000, 4000));
        assert_eq!(track.span_ms(), 6000);
    }

    #[test]
    fn test_contiguity_detects_gap() {
        let mut track = Track::empty("t1".to_string(), TrackType::Video);
        track.segments.push(slot(0, 2000));
        track.segments.push(slot(2000, 1000));
        assert!(track.is_contiguous());

        track.segments.push(slot(3500, 1000));
        assert!(!track.is_contiguous());
    }

    #[test]
    fn test_track_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&TrackType::Video).unwrap(), "\"video\"");
        assert_eq!(serde_json::to_string(&TrackType::Text).unwrap(), "\"text\"");
    }
}
