//! Project assembly: the single point where tracks, materials, and
//! export options compose into the root document.
//!
//! Assembly performs no validation. Validation is a separate pass so a
//! caller can assemble, inspect, and selectively repair without
//! re-running assembly.

use clipdraft_common::config::DraftDefaults;
use clipdraft_project_model::{
    new_id, now_micros, CanvasConfig, ExportRange, ExtraInfo, Project, DOC_TYPE,
};
use tracing::debug;

use crate::materials::MaterialCatalog;
use crate::tracks::TrackSet;

/// Options controlling the root metadata of an assembled draft.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// Draft name shown by the editor.
    pub draft_name: String,

    /// Shared source video for segments that do not name their own.
    pub source_video: Option<String>,

    /// Canvas resolution.
    pub width: u32,
    pub height: u32,

    /// Canvas frame rate.
    pub fps: u32,

    pub audio_sample_rate: u32,
    pub video_codec: String,
    pub audio_codec: String,

    /// Target schema version.
    pub version: String,

    /// Target platform identifier.
    pub platform: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::from_defaults(&DraftDefaults::default())
    }
}

impl ExportOptions {
    /// Build options from configured draft defaults.
    pub fn from_defaults(defaults: &DraftDefaults) -> Self {
        Self {
            draft_name: "clipdraft_export".to_string(),
            source_video: None,
            width: defaults.width,
            height: defaults.height,
            fps: defaults.fps,
            audio_sample_rate: defaults.audio_sample_rate,
            video_codec: defaults.video_codec.clone(),
            audio_codec: defaults.audio_codec.clone(),
            version: defaults.version.clone(),
            platform: defaults.platform.clone(),
        }
    }
}

/// Compose the full draft document.
///
/// Mints fresh identifiers and timestamps, sets the canvas duration to
/// the video track's total span, and mirrors that span into
/// `extra_info.export_range`.
pub fn assemble(tracks: TrackSet, catalog: MaterialCatalog, options: &ExportOptions) -> Project {
    let duration = tracks.video.span_ms();
    let now = now_micros();

    debug!(
        duration_ms = duration,
        draft_name = %options.draft_name,
        "assembling draft document"
    );

    Project {
        version: options.version.clone(),
        doc_type: DOC_TYPE.to_string(),
        platform: options.platform.clone(),
        create_time: now,
        update_time: now,
        id: new_id(),
        draft_id: new_id(),
        draft_name: options.draft_name.clone(),
        canvas_config: CanvasConfig {
            width: options.width,
            height: options.height,
            duration,
            fps: options.fps,
            ratio: "original".to_string(),
        },
        tracks: tracks.into_vec(),
        materials: catalog.categories,
        extra_info: ExtraInfo {
            export_range: ExportRange {
                start: 0,
                end: duration,
            },
            fps: options.fps,
            audio_sample_rate: options.audio_sample_rate,
            video_codec: options.video_codec.clone(),
            audio_codec: options.audio_codec.clone(),
        },
        keyframes: Vec::new(),
        relations: Vec::new(),
    }
}
