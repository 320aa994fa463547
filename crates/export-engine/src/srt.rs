//! SRT sidecar generation.
//!
//! Drafts are commonly shipped next to a plain subtitle file; captions
//! are re-timed on the output timeline, not on source offsets, so the
//! sidecar lines up with the assembled composition.

use std::path::Path;

use clipdraft_common::error::ClipdraftResult;
use clipdraft_project_model::NormalizedSegment;

/// Generate SRT content from normalized segments.
pub fn generate_srt(segments: &[NormalizedSegment]) -> String {
    let mut output = String::new();

    for (i, segment) in segments.iter().enumerate() {
        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(segment.target_timerange.start),
            format_srt_time(segment.target_timerange.end()),
        ));
        output.push_str(&segment.text);
        output.push_str("\n\n");
    }

    output
}

/// Save an SRT sidecar next to an exported draft.
pub fn save_srt(segments: &[NormalizedSegment], path: &Path) -> ClipdraftResult<()> {
    std::fs::write(path, generate_srt(segments))?;
    Ok(())
}

/// Format milliseconds as an SRT timestamp: `HH:MM:SS,mmm`.
fn format_srt_time(ms: u64) -> String {
    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use clipdraft_project_model::{RawSegment, TimeValue};

    fn raw(start: f64, end: f64, text: &str) -> RawSegment {
        RawSegment {
            start_time: Some(TimeValue::Seconds(start)),
            end_time: Some(TimeValue::Seconds(end)),
            text: text.to_string(),
            source_file: None,
            width: None,
            height: None,
            fps: None,
            bitrate: None,
        }
    }

    #[test]
    fn test_srt_uses_target_timeline() {
        // Source offsets 8.0..12.0 land at 2.0..6.0 on the output.
        let segments = normalize(&[raw(1.0, 3.0, "first line"), raw(8.0, 12.0, "second line")]);
        let srt = generate_srt(&segments);

        assert!(srt.contains("1\n00:00:00,000 --> 00:00:02,000\nfirst line"));
        assert!(srt.contains("2\n00:00:02,000 --> 00:00:06,000\nsecond line"));
    }

    #[test]
    fn test_srt_time_formatting() {
        assert_eq!(format_srt_time(0), "00:00:00,000");
        assert_eq!(format_srt_time(65_500), "00:01:05,500");
        assert_eq!(format_srt_time(3_723_456), "01:02:03,456");
    }

    #[test]
    fn test_empty_segment_list_yields_empty_srt() {
        assert_eq!(generate_srt(&[]), "");
    }
}
