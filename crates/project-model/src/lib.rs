//! Clipdraft Project Model
//!
//! Defines the data contracts for draft documents consumed by the target
//! video editor:
//! - **Time:** the canonical integer-millisecond codec and `TimeRange`
//! - **Segments:** raw upstream records and their normalized form
//! - **Materials:** whole-file media/text descriptors bound per use
//! - **Tracks:** parallel video/audio/text lanes of timeline slots
//! - **Project:** the root document with bit-exact serialized field names
//!
//! All time values written to disk are integer milliseconds; no
//! floating-point time field ever appears in a serialized document.

pub mod material;
pub mod project;
pub mod segment;
pub mod time;
pub mod track;

pub use material::*;
pub use project::*;
pub use segment::*;
pub use time::*;
pub use track::*;
