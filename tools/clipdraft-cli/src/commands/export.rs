//! Export a segment list to a draft document.

use std::path::PathBuf;

use clipdraft_common::config::AppConfig;
use clipdraft_export_engine::srt::save_srt;
use clipdraft_export_engine::{export_to_file, normalize, ExportOptions};
use clipdraft_project_model::ExportInput;

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    name: Option<String>,
    source_video: Option<String>,
    srt: bool,
) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&input)
        .map_err(|e| anyhow::anyhow!("Failed to read input: {e}"))?;
    let parsed: ExportInput = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Input is not a segment list or wrapper object: {e}"))?;

    let config = AppConfig::load();
    let mut options = ExportOptions::from_defaults(&config.draft);
    if let Some(name) = name {
        options.draft_name = name;
    }
    if let Some(source) = source_video {
        options.source_video = Some(source);
    }

    let output_path = output
        .unwrap_or_else(|| config.exports_dir.join(format!("{}.json", options.draft_name)));

    let report = export_to_file(&parsed, &output_path, &options)
        .map_err(|e| anyhow::anyhow!("Export failed: {e}"))?;

    println!("Draft written: {}", report.output_path.display());
    println!("  Segments: {}", report.segment_count);
    println!("  Duration: {} ms", report.duration_ms);

    if !report.warnings.is_empty() {
        println!("\nUnresolved compatibility warnings:");
        for warning in &report.warnings {
            println!("  - {warning}");
        }
    }

    if srt {
        let sidecar = report.output_path.with_extension("srt");
        let segments = normalize(parsed.segments());
        save_srt(&segments, &sidecar)
            .map_err(|e| anyhow::anyhow!("Failed to write SRT sidecar: {e}"))?;
        println!("SRT sidecar written: {}", sidecar.display());
    }

    Ok(())
}
