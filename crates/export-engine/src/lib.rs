//! Clipdraft Export Engine
//!
//! Converts an ordered list of video/text segments into a draft project
//! document the target editor can import, then validates and auto-repairs
//! the emitted structure:
//!
//! 1. **normalize:** repair degenerate timing, pack segments onto the
//!    output timeline
//! 2. **materials:** build the per-segment material catalog
//! 3. **tracks:** lay segments out on parallel video/audio/text tracks
//! 4. **assemble:** compose the root document
//! 5. **validate:** report every import-contract violation
//! 6. **repair:** fill missing structural fields with fixed defaults
//! 7. **driver:** orchestrate the pipeline and perform the file write
//!
//! Every component between normalization and repair is a pure function of
//! its input; export calls share no state and are safely parallelizable.

pub mod assemble;
pub mod driver;
pub mod materials;
pub mod normalize;
pub mod repair;
pub mod srt;
pub mod tracks;
pub mod validate;

pub use assemble::{assemble, ExportOptions};
pub use driver::{export, export_to_file, ExportError, ExportReport};
pub use materials::{register, MaterialBinding, MaterialCatalog};
pub use normalize::{normalize, FALLBACK_DURATION_MS};
pub use repair::repair;
pub use tracks::{build_tracks, TrackSet};
pub use validate::{validate, CompatReport};
