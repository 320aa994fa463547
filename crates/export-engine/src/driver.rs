//! Export driver: orchestrates the pipeline and performs the single
//! file write.
//!
//! The driver is the only component touching the filesystem. The
//! document is serialized fully in memory before the write, so a failed
//! export never leaves a partial file behind.

use std::path::{Path, PathBuf};

use clipdraft_common::error::ClipdraftError;
use clipdraft_project_model::ExportInput;
use tracing::{error, info, warn};

use crate::assemble::{assemble, ExportOptions};
use crate::materials::register;
use crate::normalize::normalize;
use crate::repair::repair;
use crate::tracks::build_tracks;
use crate::validate::validate;

/// Unrecoverable export failures.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write draft to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("draft serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Assembly(#[from] ClipdraftError),
}

impl From<ExportError> for ClipdraftError {
    fn from(value: ExportError) -> Self {
        match value {
            ExportError::Assembly(inner) => inner,
            other => ClipdraftError::export(other.to_string()),
        }
    }
}

/// Outcome of a successful draft export.
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub output_path: PathBuf,

    pub segment_count: usize,

    /// Total output timeline span in milliseconds.
    pub duration_ms: u64,

    /// Compatibility warnings remaining after auto-repair. A non-empty
    /// list means the file was still written; strict callers can reject
    /// such partial successes.
    pub warnings: Vec<String>,
}

/// Run the full export pipeline and write the draft document.
pub fn export_to_file(
    input: &ExportInput,
    output_path: &Path,
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let mut options = options.clone();
    if let Some(name) = input.project_name() {
        options.draft_name = name.to_string();
    }
    if let Some(source) = input.source_video() {
        options.source_video = Some(source.to_string());
    }

    let segments = normalize(input.segments());
    let catalog = register(&segments, &options);
    let tracks = build_tracks(&segments, &catalog)?;
    let project = assemble(tracks, catalog, &options);

    let mut document = serde_json::to_value(&project)?;
    let report = validate(&document);
    if !report.is_compatible {
        warn!(
            violations = report.errors.len(),
            "assembled draft failed validation, running auto-repair"
        );
        document = repair(document);
    }

    let after_repair = validate(&document);
    for warning in &after_repair.errors {
        warn!(warning = %warning, "unrepaired compatibility issue");
    }

    // Serialize fully before opening the output so a serialization
    // failure cannot truncate an existing file.
    let payload = serde_json::to_string_pretty(&document)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ExportError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    std::fs::write(output_path, payload).map_err(|source| ExportError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    info!(
        output = %output_path.display(),
        segments = segments.len(),
        duration_ms = project.canvas_config.duration,
        warnings = after_repair.errors.len(),
        "draft export complete"
    );

    Ok(ExportReport {
        output_path: output_path.to_path_buf(),
        segment_count: segments.len(),
        duration_ms: project.canvas_config.duration,
        warnings: after_repair.errors,
    })
}

/// Lenient boolean surface over [`export_to_file`].
///
/// Compatibility warnings are logged and the file is written anyway;
/// only unrecoverable failures (I/O, serialization) return `false`.
pub fn export(input: &ExportInput, output_path: &Path) -> bool {
    match export_to_file(input, output_path, &ExportOptions::default()) {
        Ok(report) => {
            if !report.warnings.is_empty() {
                warn!(
                    warnings = report.warnings.len(),
                    "draft written with unresolved compatibility warnings"
                );
            }
            true
        }
        Err(e) => {
            error!(error = %e, "draft export failed");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
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

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join("clipdraft_driver_tests")
            .join(name)
    }

    #[test]
    fn test_export_writes_draft_file() {
        let path = temp_path("basic/draft_content.json");
        let _ = std::fs::remove_file(&path);

        let input = ExportInput::Segments(vec![raw(0.0, 2.0, "a"), raw(2.0, 4.0, "b")]);
        assert!(export(&input, &path));

        let content = std::fs::read_to_string(&path).unwrap();
        let document: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(document["type"], "draft_content");
        assert_eq!(document["tracks"].as_array().unwrap().len(), 3);

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_report_carries_span_and_counts() {
        let path = temp_path("report/draft_content.json");
        let input = ExportInput::Segments(vec![raw(1.0, 3.0, "a"), raw(8.0, 12.0, "b")]);

        let report = export_to_file(&input, &path, &ExportOptions::default()).unwrap();
        assert_eq!(report.segment_count, 2);
        assert_eq!(report.duration_ms, 6000);
        assert!(report.warnings.is_empty());

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_wrapper_metadata_overrides_options() {
        let path = temp_path("wrapper/draft_content.json");
        let input: ExportInput = serde_json::from_str(
            r#"{
                "segments": [{"start_time": 0.0, "end_time": 2.0, "text": "a"}],
                "project_name": "wrapped",
                "source_video": "drama_ep1.mp4"
            }"#,
        )
        .unwrap();

        export_to_file(&input, &path, &ExportOptions::default()).unwrap();

        let document: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(document["draft_name"], "wrapped");
        assert_eq!(document["materials"]["videos"][0]["path"], "drama_ep1.mp4");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_unwritable_path_returns_false() {
        let input = ExportInput::Segments(vec![raw(0.0, 2.0, "a")]);
        // A path whose parent is an existing file cannot be created.
        let blocker = temp_path("blocker_file");
        std::fs::create_dir_all(blocker.parent().unwrap()).unwrap();
        std::fs::write(&blocker, "x").unwrap();

        let path = blocker.join("draft_content.json");
        assert!(!export(&input, &path));

        std::fs::remove_file(&blocker).ok();
    }
}
