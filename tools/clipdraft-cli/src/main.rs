//! Clipdraft CLI — Command-line interface for draft export and checking.
//!
//! Usage:
//!   clipdraft export <INPUT>     Export a segment list to a draft document
//!   clipdraft validate <PATH>    Validate a draft document
//!   clipdraft repair <PATH>      Auto-repair a draft document
//!   clipdraft info <PATH>        Show draft document information

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "clipdraft",
    about = "Convert subtitle-derived segments into editor-importable draft projects",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Export a segment list (JSON) to a draft document
    Export {
        /// Path to the input JSON: a segment array or a wrapper object
        input: PathBuf,

        /// Output file path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Draft name shown by the editor
        #[arg(short, long)]
        name: Option<String>,

        /// Shared source video for segments that do not name one
        #[arg(long)]
        source_video: Option<String>,

        /// Also write an SRT sidecar next to the draft
        #[arg(long)]
        srt: bool,
    },

    /// Validate a draft document against the import contract
    Validate {
        /// Path to the draft document
        path: PathBuf,
    },

    /// Auto-repair a draft document
    Repair {
        /// Path to the draft document
        path: PathBuf,

        /// Output file path (defaults to repairing in place)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show draft document information
    Info {
        /// Path to the draft document
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    clipdraft_common::logging::init_logging(&clipdraft_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Export {
            input,
            output,
            name,
            source_video,
            srt,
        } => commands::export::run(input, output, name, source_video, srt),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Repair { path, output } => commands::repair::run(path, output),
        Commands::Info { path } => commands::info::run(path),
    }
}
