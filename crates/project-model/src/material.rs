//! Material descriptors: one catalog entry per referenced media/text
//! asset, bound to timeline segments by identifier.
//!
//! Materials are whole-file descriptors; a segment binds a sub-range of
//! the file via its own `source_timerange`, which is why the registry
//! never deduplicates by path.

use serde::{Deserialize, Serialize};

/// A video stream descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMaterial {
    pub id: String,

    #[serde(rename = "type")]
    pub material_type: String,

    /// Path of the referenced media file. Existence is not checked.
    pub path: String,

    /// Duration in integer milliseconds.
    pub duration: u64,

    pub width: u32,
    pub height: u32,
    pub fps: u32,

    /// Container format, inferred from the file extension.
    pub format: String,

    /// Video codec, inferred from the file extension.
    pub codec: String,
}

/// An audio stream descriptor referencing the same file as its video
/// counterpart, interpreted as an audio stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioMaterial {
    pub id: String,

    #[serde(rename = "type")]
    pub material_type: String,

    pub path: String,

    /// Duration in integer milliseconds.
    pub duration: u64,

    /// Audio codec, inferred from the file extension.
    pub format: String,
}

/// A caption descriptor carrying the text content and fixed styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextMaterial {
    pub id: String,

    #[serde(rename = "type")]
    pub material_type: String,

    pub content: String,

    /// Duration in integer milliseconds.
    pub duration: u64,

    pub style: TextStyle,
}

/// Fixed caption styling applied to every text material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Text color as hex string.
    pub color: String,

    /// Background color as hex string with alpha.
    pub background_color: String,

    /// Horizontal alignment.
    pub alignment: String,

    pub font_size: u32,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: "#FFFFFF".to_string(),
            background_color: "#00000080".to_string(),
            alignment: "center".to_string(),
            font_size: 24,
        }
    }
}

/// The seven material category arrays of the root document. All seven
/// keys must serialize even when empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialCategories {
    pub videos: Vec<VideoMaterial>,
    pub audios: Vec<AudioMaterial>,
    pub texts: Vec<TextMaterial>,
    #[serde(default)]
    pub effects: Vec<serde_json::Value>,
    #[serde(default)]
    pub stickers: Vec<serde_json::Value>,
    #[serde(default)]
    pub images: Vec<serde_json::Value>,
    #[serde(default)]
    pub sounds: Vec<serde_json::Value>,
}

/// Infer `(container, codec)` for a video path from its extension.
/// Unknown or missing extensions fall back to `("mp4", "h264")`.
pub fn video_format_for(path: &str) -> (&'static str, &'static str) {
    match extension_of(path).as_deref() {
        Some("mp4") => ("mp4", "h264"),
        Some("mov") => ("mov", "h264"),
        Some("mkv") => ("mkv", "h264"),
        Some("avi") => ("avi", "mpeg4"),
        Some("webm") => ("webm", "vp9"),
        Some("flv") => ("flv", "h264"),
        _ => ("mp4", "h264"),
    }
}

/// Infer the audio codec for a path from its extension. Unknown or
/// missing extensions fall back to `"aac"`.
pub fn audio_format_for(path: &str) -> &'static str {
    match extension_of(path).as_deref() {
        Some("mp3") => "mp3",
        Some("wav") => "pcm_s16le",
        Some("flac") => "flac",
        Some("ogg") => "vorbis",
        Some("m4a") | Some("aac") => "aac",
        _ => "aac",
    }
}

fn extension_of(path: &str) -> Option<String> {
    std::path::Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_format_table() {
        assert_eq!(video_format_for("clip.mp4"), ("mp4", "h264"));
        assert_eq!(video_format_for("clip.webm"), ("webm", "vp9"));
        assert_eq!(video_format_for("clip.AVI"), ("avi", "mpeg4"));
        // Unknown and missing extensions use the default.
        assert_eq!(video_format_for("clip.xyz"), ("mp4", "h264"));
        assert_eq!(video_format_for("clip"), ("mp4", "h264"));
    }

    #[test]
    fn test_audio_format_table() {
        assert_eq!(audio_format_for("track.mp3"), "mp3");
        assert_eq!(audio_format_for("track.wav"), "pcm_s16le");
        assert_eq!(audio_format_for("movie.mp4"), "aac");
        assert_eq!(audio_format_for("noext"), "aac");
    }

    #[test]
    fn test_default_text_style() {
        let style = TextStyle::default();
        assert_eq!(style.color, "#FFFFFF");
        assert_eq!(style.background_color, "#00000080");
        assert_eq!(style.alignment, "center");
    }

    #[test]
    fn test_all_seven_categories_serialize_when_empty() {
        let categories = MaterialCategories::default();
        let value = serde_json::to_value(&categories).unwrap();
        let object = value.as_object().unwrap();
        for key in [
            "videos", "audios", "texts", "effects", "stickers", "images", "sounds",
        ] {
            assert!(object.contains_key(key), "missing category {key}");
            assert!(object[key].as_array().unwrap().is_empty());
        }
    }
}
