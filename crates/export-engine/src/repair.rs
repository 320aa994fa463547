//! Auto-repair pass: fill missing structural fields with deterministic
//! defaults.
//!
//! Repair is idempotent and best-effort. It only adds what is absent
//! (root fields, material category arrays, canvas and extra_info
//! defaults) and never touches numeric-range or referential-integrity
//! violations; those require regenerating segments and materials and are
//! surfaced to the caller as unrepairable.

use clipdraft_project_model::{new_id, now_micros, DOC_TYPE};
use serde_json::{json, Map, Value};
use tracing::debug;

/// Draft name given to repaired documents that lost theirs.
const REPAIRED_DRAFT_NAME: &str = "untitled_draft";

/// Fill missing fields of a draft document with fixed defaults.
///
/// Re-running the validator afterwards may still report errors; that is
/// expected for violations repair does not attempt to fix.
pub fn repair(document: Value) -> Value {
    let mut root = match document {
        Value::Object(map) => map,
        _ => Map::new(),
    };

    let mut filled = 0usize;
    let mut fill = |root: &mut Map<String, Value>, key: &str, value: Value| {
        if !root.contains_key(key) {
            root.insert(key.to_string(), value);
            filled += 1;
        }
    };

    fill(&mut root, "version", json!("3.0.0"));
    fill(&mut root, "type", json!(DOC_TYPE));
    fill(&mut root, "platform", json!("windows"));
    fill(&mut root, "create_time", json!(now_micros()));
    fill(&mut root, "update_time", json!(now_micros()));
    fill(&mut root, "id", json!(new_id()));
    fill(&mut root, "draft_id", json!(new_id()));
    fill(&mut root, "draft_name", json!(REPAIRED_DRAFT_NAME));
    fill(&mut root, "tracks", json!([]));
    fill(&mut root, "keyframes", json!([]));
    fill(&mut root, "relations", json!([]));

    repair_canvas(&mut root);
    repair_materials(&mut root);
    repair_extra_info(&mut root);

    debug!(filled, "auto-repair pass complete");
    Value::Object(root)
}

fn repair_canvas(root: &mut Map<String, Value>) {
    let canvas = root
        .entry("canvas_config")
        .or_insert_with(|| json!({ "width": 1920, "height": 1080, "duration": 0 }));

    if let Some(canvas) = canvas.as_object_mut() {
        if !canvas.contains_key("fps") {
            canvas.insert("fps".to_string(), json!(30));
        }
        if !canvas.contains_key("ratio") {
            canvas.insert("ratio".to_string(), json!("original"));
        }
    }
}

fn repair_materials(root: &mut Map<String, Value>) {
    let materials = root.entry("materials").or_insert_with(|| json!({}));

    if let Some(materials) = materials.as_object_mut() {
        for category in [
            "videos", "audios", "texts", "effects", "stickers", "images", "sounds",
        ] {
            if !materials.contains_key(category) {
                materials.insert(category.to_string(), json!([]));
            }
        }
    }
}

fn repair_extra_info(root: &mut Map<String, Value>) {
    // A freshly filled export range mirrors the canvas duration so the
    // cross-field consistency rule holds for the repaired document.
    let canvas_duration = root
        .get("canvas_config")
        .and_then(|c| c.get("duration"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let extra = root.entry("extra_info").or_insert_with(|| json!({}));

    if let Some(extra) = extra.as_object_mut() {
        if !extra.contains_key("export_range") {
            extra.insert(
                "export_range".to_string(),
                json!({ "start": 0, "end": canvas_duration }),
            );
        }
        if !extra.contains_key("fps") {
            extra.insert("fps".to_string(), json!(30));
        }
        if !extra.contains_key("audio_sample_rate") {
            extra.insert("audio_sample_rate".to_string(), json!(44100));
        }
        if !extra.contains_key("video_codec") {
            extra.insert("video_codec".to_string(), json!("h264"));
        }
        if !extra.contains_key("audio_codec") {
            extra.insert("audio_codec".to_string(), json!("aac"));
        }
    }
}
