//! Trellis is a retained-mode layout engine: it computes the size and
//! position of a tree of abstract view nodes in a two-pass
//! measure-then-position walk, so the results can be applied to arbitrary
//! native widgets.
//!
//! The engine is single-threaded and synchronous. A host adapter drives the
//! cycle: [`View::measure`] resolves sizes bottom-up against the available
//! space, then [`View::layout`] positions the tree top-down using the sizes
//! recorded during measurement. Cycles are idempotent for unchanged inputs;
//! after any mutation the host must run a new cycle.

/// Shared child-list management for containers.
mod container;
/// Per-axis requested sizes.
mod dimension;
/// Error types.
mod error;
/// The host adapter seam and display queries.
mod host;
/// The leaf adapter seam.
mod leaf;
/// The view tree.
mod node;
/// Overlapping containers.
mod overlay;
/// Per-node layout configuration.
mod params;
/// Row/column containers with weighted distribution.
mod stack;
pub mod tutils;

pub use geom;
pub use geom::{Gravity, HGravity, Insets, Point, Rect, SizeF, VGravity};

pub use dimension::{Dimension, Unit};
pub use error::{Error, Result};
pub use host::{DisplayMetrics, FixedMetrics, LayoutHost};
pub use leaf::Widget;
pub use node::View;
pub use params::{LayoutParameters, Visibility};
pub use stack::Orientation;
