//! Track layout: one slot per segment per track type, index-aligned
//! across the three parallel tracks.
//!
//! Audio/video/subtitle stay synchronized because all three slots of a
//! segment share the same `target_timerange`; downstream sync checks
//! compare tracks positionally, so the index alignment is an invariant,
//! not an optimization.

use clipdraft_common::error::{ClipdraftError, ClipdraftResult};
use clipdraft_project_model::{new_id, NormalizedSegment, Track, TrackSegment, TrackType};

use crate::materials::MaterialCatalog;

/// The three parallel tracks produced for one export.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackSet {
    pub video: Track,
    pub audio: Track,
    pub text: Track,
}

impl TrackSet {
    /// Tracks in serialization order: video, audio, text.
    pub fn into_vec(self) -> Vec<Track> {
        vec![self.video, self.audio, self.text]
    }
}

/// Lay out normalized segments onto parallel video/audio/text tracks.
///
/// Fails only when a segment has no binding in the catalog, which means
/// the registry was run on a different segment list.
pub fn build_tracks(
    segments: &[NormalizedSegment],
    catalog: &MaterialCatalog,
) -> ClipdraftResult<TrackSet> {
    let mut video = Track::empty(new_id(), TrackType::Video);
    let mut audio = Track::empty(new_id(), TrackType::Audio);
    let mut text = Track::empty(new_id(), TrackType::Text);

    for (index, segment) in segments.iter().enumerate() {
        let binding = catalog.binding_for(&segment.id).ok_or_else(|| {
            ClipdraftError::assembly(format!(
                "segment {} has no material binding; registry and track builder saw different segment lists",
                segment.id
            ))
        })?;

        video.segments.push(slot(
            segment,
            TrackType::Video,
            &binding.video_id,
            index as u32,
        ));
        audio.segments.push(slot(
            segment,
            TrackType::Audio,
            &binding.audio_id,
            index as u32,
        ));
        text.segments.push(slot(
            segment,
            TrackType::Text,
            &binding.text_id,
            index as u32,
        ));
    }

    Ok(TrackSet { video, audio, text })
}

fn slot(
    segment: &NormalizedSegment,
    track_type: TrackType,
    material_id: &str,
    render_index: u32,
) -> TrackSegment {
    TrackSegment {
        id: new_id(),
        segment_type: track_type,
        material_id: material_id.to_string(),
        track_render_index: render_index,
        source_timerange: segment.source_timerange(),
        target_timerange: segment.target_timerange,
        extra_material_refs: Vec::new(),
    }
}
