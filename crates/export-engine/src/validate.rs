//! Compatibility validation against the target editor's import contract.
//!
//! The validator walks the serialized JSON document rather than the typed
//! model, so hand-edited drafts can be checked for missing or mistyped
//! fields. Violations accumulate; a single call surfaces every problem.
//! Compatibility is reported, never enforced; enforcement policy lives
//! in the export driver.

use std::collections::{HashMap, HashSet};

use clipdraft_project_model::{DOC_TYPE, SUPPORTED_PLATFORMS, SUPPORTED_VERSIONS};
use serde_json::Value;

/// Allowed difference between the canvas duration and the export range
/// end, covering independent rounding paths.
pub const DURATION_TOLERANCE_MS: f64 = 100.0;

/// Required root document fields.
pub const ROOT_FIELDS: [&str; 14] = [
    "version",
    "type",
    "platform",
    "create_time",
    "update_time",
    "id",
    "draft_id",
    "draft_name",
    "canvas_config",
    "tracks",
    "materials",
    "extra_info",
    "keyframes",
    "relations",
];

const CANVAS_FIELDS: [&str; 4] = ["width", "height", "duration", "fps"];

const MATERIAL_CATEGORIES: [&str; 7] = [
    "videos", "audios", "texts", "effects", "stickers", "images", "sounds",
];

const TRACK_FIELDS: [&str; 5] = ["id", "type", "attribute", "flag", "segments"];

const SEGMENT_FIELDS: [&str; 7] = [
    "id",
    "type",
    "material_id",
    "track_render_index",
    "source_timerange",
    "target_timerange",
    "extra_material_refs",
];

const TIMERANGE_FIELDS: [&str; 2] = ["start", "duration"];

/// Result of a validation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatReport {
    pub is_compatible: bool,
    pub errors: Vec<String>,
}

/// Validate a draft document against the import contract.
///
/// Never fails itself; every violation becomes an itemized error string.
pub fn validate(document: &Value) -> CompatReport {
    let mut errors = Vec::new();

    let Some(root) = document.as_object() else {
        return CompatReport {
            is_compatible: false,
            errors: vec!["document must be a JSON object".to_string()],
        };
    };

    for field in ROOT_FIELDS {
        if !root.contains_key(field) {
            errors.push(format!("missing root field: {field}"));
        }
    }

    check_domain(root, &mut errors);
    check_canvas(root, &mut errors);

    let mut seen_ids = HashSet::new();
    let material_ids = collect_material_ids(root, &mut errors, &mut seen_ids);
    check_tracks(root, &material_ids, &mut errors, &mut seen_ids);
    check_cross_consistency(root, &mut errors);

    CompatReport {
        is_compatible: errors.is_empty(),
        errors,
    }
}

fn check_domain(root: &serde_json::Map<String, Value>, errors: &mut Vec<String>) {
    if let Some(version) = root.get("version") {
        match version.as_str() {
            Some(v) if SUPPORTED_VERSIONS.contains(&v) => {}
            _ => errors.push(format!("unsupported version: {version}")),
        }
    }

    if let Some(platform) = root.get("platform") {
        match platform.as_str() {
            Some(p) if SUPPORTED_PLATFORMS.contains(&p) => {}
            _ => errors.push(format!("unsupported platform: {platform}")),
        }
    }

    if let Some(doc_type) = root.get("type") {
        if doc_type.as_str() != Some(DOC_TYPE) {
            errors.push(format!("document type must be {DOC_TYPE}, found {doc_type}"));
        }
    }
}

fn check_canvas(root: &serde_json::Map<String, Value>, errors: &mut Vec<String>) {
    let Some(canvas) = root.get("canvas_config") else {
        return;
    };
    let Some(canvas) = canvas.as_object() else {
        errors.push("canvas_config must be an object".to_string());
        return;
    };

    for field in CANVAS_FIELDS {
        if !canvas.contains_key(field) {
            errors.push(format!("canvas_config missing field: {field}"));
        }
    }

    for field in ["width", "height", "fps"] {
        if let Some(value) = canvas.get(field) {
            if !value.as_f64().is_some_and(|n| n > 0.0) {
                errors.push(format!("canvas_config.{field} must be positive"));
            }
        }
    }
    if let Some(duration) = canvas.get("duration") {
        if !duration.as_f64().is_some_and(|n| n >= 0.0) {
            errors.push("canvas_config.duration must be non-negative".to_string());
        }
    }
}

/// Collect material ids per category, reporting missing categories and
/// duplicate ids along the way.
fn collect_material_ids(
    root: &serde_json::Map<String, Value>,
    errors: &mut Vec<String>,
    seen_ids: &mut HashSet<String>,
) -> HashMap<&'static str, HashSet<String>> {
    let mut by_category: HashMap<&'static str, HashSet<String>> = HashMap::new();

    let Some(materials) = root.get("materials") else {
        return by_category;
    };
    let Some(materials) = materials.as_object() else {
        errors.push("materials must be an object".to_string());
        return by_category;
    };

    for category in MATERIAL_CATEGORIES {
        let Some(entries) = materials.get(category) else {
            errors.push(format!("materials missing category: {category}"));
            continue;
        };
        let Some(entries) = entries.as_array() else {
            errors.push(format!("materials.{category} must be an array"));
            continue;
        };

        let ids = by_category.entry(category).or_default();
        for (index, entry) in entries.iter().enumerate() {
            match entry.get("id").and_then(Value::as_str) {
                Some(id) => {
                    if !seen_ids.insert(id.to_string()) {
                        errors.push(format!("duplicate id: {id}"));
                    }
                    ids.insert(id.to_string());
                }
                None => errors.push(format!("materials.{category}[{index}] missing id")),
            }
        }
    }

    by_category
}

fn check_tracks(
    root: &serde_json::Map<String, Value>,
    material_ids: &HashMap<&'static str, HashSet<String>>,
    errors: &mut Vec<String>,
    seen_ids: &mut HashSet<String>,
) {
    let Some(tracks) = root.get("tracks") else {
        return;
    };
    let Some(tracks) = tracks.as_array() else {
        errors.push("tracks must be an array".to_string());
        return;
    };

    for (track_index, track) in tracks.iter().enumerate() {
        let Some(track) = track.as_object() else {
            errors.push(format!("track {track_index} must be an object"));
            continue;
        };

        for field in TRACK_FIELDS {
            if !track.contains_key(field) {
                errors.push(format!("track {track_index} missing field: {field}"));
            }
        }

        if let Some(id) = track.get("id").and_then(Value::as_str) {
            if !seen_ids.insert(id.to_string()) {
                errors.push(format!("duplicate id: {id}"));
            }
        }

        let track_type = track.get("type").and_then(Value::as_str);
        let Some(segments) = track.get("segments").and_then(Value::as_array) else {
            continue;
        };

        let mut previous_end: Option<f64> = None;
        for (segment_index, segment) in segments.iter().enumerate() {
            let label = format!("track {track_index} segment {segment_index}");
            let Some(segment) = segment.as_object() else {
                errors.push(format!("{label} must be an object"));
                continue;
            };

            for field in SEGMENT_FIELDS {
                if !segment.contains_key(field) {
                    errors.push(format!("{label} missing field: {field}"));
                }
            }

            if let Some(id) = segment.get("id").and_then(Value::as_str) {
                if !seen_ids.insert(id.to_string()) {
                    errors.push(format!("duplicate id: {id}"));
                }
            }

            for range_field in ["source_timerange", "target_timerange"] {
                if let Some(range) = segment.get(range_field) {
                    check_timerange(range, &format!("{label} {range_field}"), errors);
                }
            }

            check_material_reference(segment, track_type, material_ids, &label, errors);

            // Contiguity re-check: the builder guarantees it, hand-edited
            // documents may not.
            let start = segment
                .get("target_timerange")
                .and_then(|r| r.get("start"))
                .and_then(Value::as_f64);
            let duration = segment
                .get("target_timerange")
                .and_then(|r| r.get("duration"))
                .and_then(Value::as_f64);
            if let (Some(start), Some(duration)) = (start, duration) {
                if let Some(end) = previous_end {
                    if (start - end).abs() > f64::EPSILON {
                        errors.push(format!(
                            "track {track_index} segments not contiguous at index {segment_index}"
                        ));
                    }
                }
                previous_end = Some(start + duration);
            }
        }
    }
}

fn check_timerange(range: &Value, label: &str, errors: &mut Vec<String>) {
    let Some(range) = range.as_object() else {
        errors.push(format!("{label} must be an object"));
        return;
    };

    for field in TIMERANGE_FIELDS {
        if !range.contains_key(field) {
            errors.push(format!("{label} missing field: {field}"));
        }
    }

    if let Some(start) = range.get("start") {
        if !start.as_f64().is_some_and(|n| n >= 0.0) {
            errors.push(format!("{label}.start must be non-negative"));
        }
    }
    if let Some(duration) = range.get("duration") {
        if !duration.as_f64().is_some_and(|n| n > 0.0) {
            errors.push(format!("{label}.duration must be positive"));
        }
    }
}

fn check_material_reference(
    segment: &serde_json::Map<String, Value>,
    track_type: Option<&str>,
    material_ids: &HashMap<&'static str, HashSet<String>>,
    label: &str,
    errors: &mut Vec<String>,
) {
    let Some(material_id) = segment.get("material_id").and_then(Value::as_str) else {
        return;
    };

    // The segment's own type decides the category; fall back to the
    // track's type for sparse documents.
    let segment_type = segment.get("type").and_then(Value::as_str).or(track_type);
    let category = match segment_type {
        Some("video") => "videos",
        Some("audio") => "audios",
        Some("text") => "texts",
        other => {
            errors.push(format!(
                "{label} has no material category for type {other:?}"
            ));
            return;
        }
    };

    let resolved = material_ids
        .get(category)
        .is_some_and(|ids| ids.contains(material_id));
    if !resolved {
        errors.push(format!(
            "{label} references material {material_id} not found in {category}"
        ));
    }
}

fn check_cross_consistency(root: &serde_json::Map<String, Value>, errors: &mut Vec<String>) {
    let canvas_duration = root
        .get("canvas_config")
        .and_then(|c| c.get("duration"))
        .and_then(Value::as_f64);
    let export_end = root
        .get("extra_info")
        .and_then(|e| e.get("export_range"))
        .and_then(|r| r.get("end"))
        .and_then(Value::as_f64);

    if let (Some(canvas_duration), Some(export_end)) = (canvas_duration, export_end) {
        if (canvas_duration - export_end).abs() > DURATION_TOLERANCE_MS {
            errors.push(format!(
                "canvas duration {canvas_duration} and export range end {export_end} differ by more than {DURATION_TOLERANCE_MS} ms"
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assemble::{assemble, ExportOptions};
    use crate::materials::register;
    use crate::normalize::normalize;
    use crate::tracks::build_tracks;
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

    fn assembled_document() -> Value {
        let segments = normalize(&[raw(0.0, 2.0, "a"), raw(2.0, 5.5, "b")]);
        let options = ExportOptions::default();
        let catalog = register(&segments, &options);
        let tracks = build_tracks(&segments, &catalog).unwrap();
        serde_json::to_value(assemble(tracks, catalog, &options)).unwrap()
    }

    #[test]
    fn test_assembled_document_is_compatible() {
        let report = validate(&assembled_document());
        assert!(report.errors.is_empty(), "unexpected: {:?}", report.errors);
        assert!(report.is_compatible);
    }

    #[test]
    fn test_non_object_document_rejected() {
        let report = validate(&serde_json::json!([1, 2, 3]));
        assert!(!report.is_compatible);
        assert_eq!(report.errors, vec!["document must be a JSON object"]);
    }

    #[test]
    fn test_missing_canvas_fps_reports_exactly_one_canvas_error() {
        let mut document = assembled_document();
        document["canvas_config"]
            .as_object_mut()
            .unwrap()
            .remove("fps");

        let report = validate(&document);
        let canvas_errors: Vec<_> = report
            .errors
            .iter()
            .filter(|e| e.contains("canvas_config"))
            .collect();
        assert_eq!(canvas_errors.len(), 1);
        assert_eq!(canvas_errors[0], "canvas_config missing field: fps");
    }

    #[test]
    fn test_domain_violations_itemized() {
        let mut document = assembled_document();
        document["version"] = serde_json::json!("9.9.9");
        document["platform"] = serde_json::json!("linux");
        document["type"] = serde_json::json!("timeline");

        let report = validate(&document);
        assert!(report.errors.iter().any(|e| e.contains("unsupported version")));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("unsupported platform")));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("document type must be draft_content")));
    }

    #[test]
    fn test_all_violations_accumulate_in_one_pass() {
        let mut document = assembled_document();
        document.as_object_mut().unwrap().remove("keyframes");
        document.as_object_mut().unwrap().remove("relations");
        document["canvas_config"]["width"] = serde_json::json!(0);

        let report = validate(&document);
        assert!(report.errors.len() >= 3);
    }

    #[test]
    fn test_missing_material_category_reported() {
        let mut document = assembled_document();
        document["materials"]
            .as_object_mut()
            .unwrap()
            .remove("sounds");

        let report = validate(&document);
        assert!(report
            .errors
            .contains(&"materials missing category: sounds".to_string()));
    }

    #[test]
    fn test_dangling_material_reference_reported() {
        let mut document = assembled_document();
        document["tracks"][0]["segments"][0]["material_id"] = serde_json::json!("ghost");

        let report = validate(&document);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("references material ghost not found in videos")));
    }

    #[test]
    fn test_duplicate_ids_detected() {
        let mut document = assembled_document();
        let first_id = document["tracks"][0]["segments"][0]["id"].clone();
        document["tracks"][1]["segments"][0]["id"] = first_id;

        let report = validate(&document);
        assert!(report.errors.iter().any(|e| e.starts_with("duplicate id:")));
    }

    #[test]
    fn test_negative_start_and_zero_duration_reported() {
        let mut document = assembled_document();
        document["tracks"][0]["segments"][0]["source_timerange"]["start"] =
            serde_json::json!(-5);
        document["tracks"][0]["segments"][0]["source_timerange"]["duration"] =
            serde_json::json!(0);

        let report = validate(&document);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("source_timerange.start must be non-negative")));
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("source_timerange.duration must be positive")));
    }

    #[test]
    fn test_broken_contiguity_reported() {
        let mut document = assembled_document();
        document["tracks"][0]["segments"][1]["target_timerange"]["start"] =
            serde_json::json!(9999);

        let report = validate(&document);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("not contiguous at index 1")));
    }

    #[test]
    fn test_duration_tolerance_boundary() {
        let mut document = assembled_document();
        let duration = document["canvas_config"]["duration"].as_u64().unwrap();

        document["extra_info"]["export_range"]["end"] = serde_json::json!(duration + 100);
        assert!(validate(&document).is_compatible);

        document["extra_info"]["export_range"]["end"] = serde_json::json!(duration + 101);
        let report = validate(&document);
        assert!(report
            .errors
            .iter()
            .any(|e| e.contains("differ by more than")));
    }

    #[test]
    fn test_missing_root_fields_enumerated() {
        let report = validate(&serde_json::json!({}));
        assert_eq!(report.errors.len(), ROOT_FIELDS.len());
        for field in ROOT_FIELDS {
            assert!(report
                .errors
                .contains(&format!("missing root field: {field}")));
        }
    }
}
