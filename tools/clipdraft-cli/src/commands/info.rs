//! Show draft document information.

use std::path::PathBuf;

use clipdraft_project_model::format_from_ms;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read draft: {e}"))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse draft: {e}"))?;

    let field = |key: &str| {
        document
            .get(key)
            .and_then(serde_json::Value::as_str)
            .unwrap_or("<missing>")
            .to_string()
    };

    println!("Draft: {}", path.display());
    println!("  Name: {}", field("draft_name"));
    println!("  Version: {}", field("version"));
    println!("  Platform: {}", field("platform"));

    if let Some(canvas) = document.get("canvas_config") {
        let width = canvas.get("width").and_then(serde_json::Value::as_u64);
        let height = canvas.get("height").and_then(serde_json::Value::as_u64);
        if let (Some(width), Some(height)) = (width, height) {
            println!("  Canvas: {width}x{height}");
        }
        if let Some(duration) = canvas.get("duration").and_then(serde_json::Value::as_u64) {
            println!("  Duration: {} ({duration} ms)", format_from_ms(duration));
        }
    }

    if let Some(tracks) = document.get("tracks").and_then(serde_json::Value::as_array) {
        println!("  Tracks: {}", tracks.len());
        for track in tracks {
            let track_type = track
                .get("type")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("?");
            let segments = track
                .get("segments")
                .and_then(serde_json::Value::as_array)
                .map(|segments| segments.len())
                .unwrap_or(0);
            println!("    {track_type}: {segments} segment(s)");
        }
    }

    if let Some(materials) = document
        .get("materials")
        .and_then(serde_json::Value::as_object)
    {
        let total: usize = materials
            .values()
            .filter_map(serde_json::Value::as_array)
            .map(|entries| entries.len())
            .sum();
        println!("  Materials: {total} across {} categories", materials.len());
    }

    Ok(())
}
