//! Requested sizes for a single axis.

/// The unit of measurement for a [`Dimension`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// An absolute size in layout units.
    Absolute,
    /// A ratio of the parent's size on the same axis.
    ParentRatio,
    /// A ratio of the node's own content (natural) size.
    ContentRatio,
    /// A ratio of the node's size on the opposite axis. Resolved last; at
    /// most one axis of a node may be `AspectRatio`.
    AspectRatio,
    /// A ratio of the current screen size.
    ScreenRatio,
    /// A ratio of the current host size.
    HostRatio,
}

/// A requested size on one axis: a magnitude tagged with a unit. `Absolute`
/// magnitudes are sizes in layout units; every ratio unit stores a
/// multiplier. Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimension {
    magnitude: f32,
    unit: Unit,
}

impl Dimension {
    /// An absolute size in layout units.
    pub fn absolute(v: f32) -> Self {
        Self {
            magnitude: v,
            unit: Unit::Absolute,
        }
    }

    /// A multiple of the parent's size on this axis.
    pub fn parent_ratio(v: f32) -> Self {
        Self {
            magnitude: v,
            unit: Unit::ParentRatio,
        }
    }

    /// A multiple of the node's natural content size on this axis.
    pub fn content_ratio(v: f32) -> Self {
        Self {
            magnitude: v,
            unit: Unit::ContentRatio,
        }
    }

    /// A multiple of the node's resolved size on the opposite axis.
    pub fn aspect_ratio(v: f32) -> Self {
        Self {
            magnitude: v,
            unit: Unit::AspectRatio,
        }
    }

    /// A multiple of the current screen size on this axis.
    pub fn screen_ratio(v: f32) -> Self {
        Self {
            magnitude: v,
            unit: Unit::ScreenRatio,
        }
    }

    /// A multiple of the current host size on this axis.
    pub fn host_ratio(v: f32) -> Self {
        Self {
            magnitude: v,
            unit: Unit::HostRatio,
        }
    }

    /// Fill the parent on this axis; shorthand for `parent_ratio(1.0)`.
    pub fn fill_parent() -> Self {
        Self::parent_ratio(1.0)
    }

    /// Wrap the node's content on this axis; shorthand for
    /// `content_ratio(1.0)`.
    pub fn wrap_content() -> Self {
        Self::content_ratio(1.0)
    }

    /// The stored magnitude.
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// The unit of measurement.
    pub fn unit(&self) -> Unit {
        self.unit
    }
}

impl Default for Dimension {
    /// Wrap content.
    fn default() -> Self {
        Self::wrap_content()
    }
}
