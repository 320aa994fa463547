//! Material registry: synthesizes one video, one audio, and one text
//! material per segment and records the per-segment binding the track
//! builder consumes.
//!
//! Deduplication is deliberately absent. Materials are whole-file
//! descriptors; two segments cutting different sub-ranges of the same
//! file each get their own descriptor and bind their own range via
//! `source_timerange`.

use clipdraft_project_model::{
    audio_format_for, new_id, video_format_for, AudioMaterial, MaterialCategories,
    NormalizedSegment, TextMaterial, TextStyle, VideoMaterial,
};
use tracing::debug;

use crate::assemble::ExportOptions;

/// Source path used when neither the segment nor the export options name
/// one.
pub const DEFAULT_SOURCE_FILE: &str = "source_video.mp4";

/// Default resolution and frame rate for sources that do not declare
/// their own.
const DEFAULT_WIDTH: u32 = 1920;
const DEFAULT_HEIGHT: u32 = 1080;
const DEFAULT_FPS: u32 = 30;

/// Identifiers of the three materials generated for one segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialBinding {
    pub segment_id: String,
    pub video_id: String,
    pub audio_id: String,
    pub text_id: String,
}

/// Generated materials plus the per-segment binding table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialCatalog {
    pub categories: MaterialCategories,
    pub bindings: Vec<MaterialBinding>,
}

impl MaterialCatalog {
    /// Binding for a segment id, if the segment was registered.
    pub fn binding_for(&self, segment_id: &str) -> Option<&MaterialBinding> {
        self.bindings
            .iter()
            .find(|binding| binding.segment_id == segment_id)
    }
}

/// Build the material catalog for normalized segments.
pub fn register(segments: &[NormalizedSegment], options: &ExportOptions) -> MaterialCatalog {
    let mut catalog = MaterialCatalog::default();

    for segment in segments {
        let path = segment
            .source_file
            .clone()
            .or_else(|| options.source_video.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE_FILE.to_string());
        let duration = segment.source_timerange().duration;

        let (container, codec) = video_format_for(&path);
        let video = VideoMaterial {
            id: new_id(),
            material_type: "video".to_string(),
            path: path.clone(),
            duration,
            width: segment.width.unwrap_or(DEFAULT_WIDTH),
            height: segment.height.unwrap_or(DEFAULT_HEIGHT),
            fps: segment.fps.unwrap_or(DEFAULT_FPS),
            format: container.to_string(),
            codec: codec.to_string(),
        };

        let audio = AudioMaterial {
            id: new_id(),
            material_type: "audio".to_string(),
            path: path.clone(),
            duration,
            format: audio_format_for(&path).to_string(),
        };

        let text = TextMaterial {
            id: new_id(),
            material_type: "text".to_string(),
            content: segment.text.clone(),
            duration,
            style: TextStyle::default(),
        };

        catalog.bindings.push(MaterialBinding {
            segment_id: segment.id.clone(),
            video_id: video.id.clone(),
            audio_id: audio.id.clone(),
            text_id: text.id.clone(),
        });
        catalog.categories.videos.push(video);
        catalog.categories.audios.push(audio);
        catalog.categories.texts.push(text);
    }

    debug!(
        segments = segments.len(),
        videos = catalog.categories.videos.len(),
        "material catalog registered"
    );
    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;
    use clipdraft_project_model::{RawSegment, TimeValue};
    use std::collections::HashSet;

    fn raw(start: f64, end: f64, text: &str, file: Option<&str>) -> RawSegment {
        RawSegment {
            start_time: Some(TimeValue::Seconds(start)),
            end_time: Some(TimeValue::Seconds(end)),
            text: text.to_string(),
            source_file: file.map(String::from),
            width: None,
            height: None,
            fps: None,
            bitrate: None,
        }
    }

    #[test]
    fn test_one_material_triple_per_segment() {
        let segments = normalize(&[
            raw(0.0, 2.0, "a", Some("ep1.mp4")),
            raw(2.0, 4.0, "b", Some("ep1.mp4")),
        ]);
        let catalog = register(&segments, &ExportOptions::default());

        // Same file, still two video materials: no dedup by path.
        assert_eq!(catalog.categories.videos.len(), 2);
        assert_eq!(catalog.categories.audios.len(), 2);
        assert_eq!(catalog.categories.texts.len(), 2);
        assert_eq!(catalog.bindings.len(), 2);
    }

    #[test]
    fn test_material_ids_globally_unique() {
        let segments = normalize(&[raw(0.0, 2.0, "a", None), raw(2.0, 4.0, "b", None)]);
        let catalog = register(&segments, &ExportOptions::default());

        let mut ids = HashSet::new();
        for material in &catalog.categories.videos {
            assert!(ids.insert(material.id.clone()));
        }
        for material in &catalog.categories.audios {
            assert!(ids.insert(material.id.clone()));
        }
        for material in &catalog.categories.texts {
            assert!(ids.insert(material.id.clone()));
        }
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_video_defaults_applied_when_unspecified() {
        let segments = normalize(&[raw(0.0, 2.0, "a", Some("clip.webm"))]);
        let catalog = register(&segments, &ExportOptions::default());

        let video = &catalog.categories.videos[0];
        assert_eq!(video.width, 1920);
        assert_eq!(video.height, 1080);
        assert_eq!(video.fps, 30);
        assert_eq!(video.format, "webm");
        assert_eq!(video.codec, "vp9");
    }

    #[test]
    fn test_source_path_fallback_chain() {
        let segments = normalize(&[raw(0.0, 2.0, "a", None)]);

        let mut options = ExportOptions::default();
        options.source_video = Some("shared.mp4".to_string());
        let catalog = register(&segments, &options);
        assert_eq!(catalog.categories.videos[0].path, "shared.mp4");

        let catalog = register(&segments, &ExportOptions::default());
        assert_eq!(catalog.categories.videos[0].path, DEFAULT_SOURCE_FILE);
    }

    #[test]
    fn test_text_material_carries_caption_and_fixed_style() {
        let segments = normalize(&[raw(0.0, 2.0, "hello world", None)]);
        let catalog = register(&segments, &ExportOptions::default());

        let text = &catalog.categories.texts[0];
        assert_eq!(text.content, "hello world");
        assert_eq!(text.style.color, "#FFFFFF");
        assert_eq!(text.style.alignment, "center");
    }

    #[test]
    fn test_binding_lookup_by_segment_id() {
        let segments = normalize(&[raw(0.0, 2.0, "a", None)]);
        let catalog = register(&segments, &ExportOptions::default());

        let binding = catalog.binding_for(&segments[0].id).unwrap();
        assert_eq!(binding.video_id, catalog.categories.videos[0].id);
        assert!(catalog.binding_for("no-such-segment").is_none());
    }
}
