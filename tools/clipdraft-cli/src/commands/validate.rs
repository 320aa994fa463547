//! Validate a draft document.

use std::path::PathBuf;

use clipdraft_export_engine::validate;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Validating draft at: {}", path.display());

    let content = std::fs::read_to_string(&path)
        .map_err(|e| anyhow::anyhow!("Failed to read draft: {e}"))?;
    let document: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Failed to parse draft: {e}"))?;

    let report = validate(&document);
    if report.is_compatible {
        println!("\nDraft is compatible.");
    } else {
        println!("\nCompatibility issues:");
        for error in &report.errors {
            println!("  - {error}");
        }
        println!(
            "\n{} issue(s) found. The editor may refuse to import this draft.",
            report.errors.len()
        );
    }

    Ok(())
}
