//! Segment normalization: convert heterogeneous timing to canonical
//! milliseconds, repair degenerate durations, and pack segments onto the
//! output timeline.

use clipdraft_project_model::{
    new_id, parse_to_ms, NormalizedSegment, RawSegment, SourceTiming, TimeRange,
};
use tracing::{debug, warn};

/// Placeholder duration substituted for degenerate segment timing.
pub const FALLBACK_DURATION_MS: u64 = 2000;

/// Normalize raw segments into timeline-ready form.
///
/// A segment is never dropped for bad timing: a duration that comes out
/// non-positive is replaced by a 2-second placeholder anchored at the
/// parsed start when the raw record carried one, otherwise at
/// `index * 2000` ms. Target offsets are packed sequentially with no
/// gaps or overlaps.
pub fn normalize(raw: &[RawSegment]) -> Vec<NormalizedSegment> {
    let mut cursor = 0u64;

    raw.iter()
        .enumerate()
        .map(|(index, segment)| {
            let timing = source_timing(segment, index);
            let duration = timing.range().duration;
            let target = TimeRange::new(cursor, duration);
            cursor += duration;

            debug!(
                index,
                source_start = timing.range().start,
                duration,
                target_start = target.start,
                repaired = timing.is_fallback(),
                "normalized segment"
            );

            NormalizedSegment {
                id: new_id(),
                text: segment.text.clone(),
                source_file: segment.source_file.clone(),
                timing,
                target_timerange: target,
                width: segment.width,
                height: segment.height,
                fps: segment.fps,
                bitrate: segment.bitrate,
            }
        })
        .collect()
}

fn source_timing(segment: &RawSegment, index: usize) -> SourceTiming {
    let start = segment.start_time.as_ref().map(parse_to_ms);
    let end = segment.end_time.as_ref().map(parse_to_ms);

    match (start, end) {
        (Some(start), Some(end)) if end > start => {
            SourceTiming::Clean(TimeRange::new(start, end - start))
        }
        _ => {
            // Anchor at the parsed start when the record carried one,
            // otherwise at the segment's nominal timeline position.
            let anchor = start.unwrap_or(index as u64 * FALLBACK_DURATION_MS);
            warn!(
                index,
                anchor, "degenerate segment timing, substituting placeholder duration"
            );
            SourceTiming::Fallback(TimeRange::new(anchor, FALLBACK_DURATION_MS))
        }
    }
}
