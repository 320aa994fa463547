//! The root draft document.
//!
//! Serialized field names are the import contract of the target editor
//! and must stay bit-exact. A `Project` is constructed fresh for every
//! export call, serialized, and discarded; there is no persisted
//! in-memory store.

use serde::{Deserialize, Serialize};

use crate::material::MaterialCategories;
use crate::track::Track;

/// Document type constant required by the import contract.
pub const DOC_TYPE: &str = "draft_content";

/// Schema versions the target editor accepts.
pub const SUPPORTED_VERSIONS: [&str; 3] = ["3.0.0", "2.9.0", "2.8.0"];

/// Platforms the target editor accepts.
pub const SUPPORTED_PLATFORMS: [&str; 4] = ["windows", "mac", "android", "ios"];

/// Canvas configuration for the output composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,

    /// Total composition length in integer milliseconds.
    pub duration: u64,

    pub fps: u32,

    /// Aspect handling mode.
    pub ratio: String,
}

/// Range covered by the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRange {
    pub start: u64,
    pub end: u64,
}

/// Encoder metadata mirrored at the document tail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraInfo {
    pub export_range: ExportRange,
    pub fps: u32,
    pub audio_sample_rate: u32,
    pub video_codec: String,
    pub audio_codec: String,
}

/// Root draft document. Field order mirrors the on-disk layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub version: String,

    #[serde(rename = "type")]
    pub doc_type: String,

    pub platform: String,

    /// Creation timestamp, unix microseconds.
    pub create_time: i64,

    /// Last-update timestamp, unix microseconds.
    pub update_time: i64,

    pub id: String,
    pub draft_id: String,
    pub draft_name: String,

    pub canvas_config: CanvasConfig,

    pub tracks: Vec<Track>,

    pub materials: MaterialCategories,

    pub extra_info: ExtraInfo,

    pub keyframes: Vec<serde_json::Value>,
    pub relations: Vec<serde_json::Value>,
}

impl Project {
    /// The video track, when present.
    pub fn video_track(&self) -> Option<&Track> {
        self.tracks
            .iter()
            .find(|track| track.track_type == crate::track::TrackType::Video)
    }
}

/// Mint a fresh globally-unique identifier.
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current timestamp in unix microseconds, the editor's native form.
pub fn now_micros() -> i64 {
    chrono::Utc::now().timestamp_micros()
}
