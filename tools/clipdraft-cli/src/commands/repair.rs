//! Auto-repair a draft document.

use std::path::PathBuf;

use clipdraft_export_engine::{repair, validate};

pub fn run(path: PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read draft: {e}"))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse draft: {e}"))?;

    let before = validate(&document);
    let repaired = repair(document);
    let after = validate(&repaired);

    let output_path = output.unwrap_or(path);
    let payload = serde_json::to_string_pretty(&repaired)?;
    std::fs::write(&output_path, payload)
        .map_err(|e| anyhow::anyhow!("Failed to write repaired draft: {e}"))?;

    println!("Repaired draft written: {}", output_path.display());
    println!(
        "  Issues before: {}, after: {}",
        before.errors.len(),
        after.errors.len()
    );

    if !after.errors.is_empty() {
        println!("\nUnrepairable issues (require regenerating segments/materials):");
        for error in &after.errors {
            println!("  - {error}");
        }
    }

    Ok(())
}
