//! Core types for regex selection: ranges, selections, and view identifiers.

/// Identifier types for editor entities.
pub mod ids;
/// Text range types: char indices and directional ranges.
pub mod range;
/// Line lookup over ropes.
pub mod rope;
/// Selection type for multi-cursor editing.
pub mod selection;

pub use ids::ViewId;
pub use range::{CharIdx, Direction, Range};
pub use rope::line_extent;
pub use ropey::{Rope, RopeSlice};
pub use selection::Selection;
