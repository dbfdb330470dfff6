//! Float geometry primitives used across trellis.

/// Gravity (alignment) flags.
mod gravity;
/// Edge inset helpers.
mod insets;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;
/// Width/height size type.
mod size;

pub use gravity::{Gravity, HGravity, VGravity};
pub use insets::Insets;
pub use point::Point;
pub use rect::Rect;
pub use size::SizeF;
