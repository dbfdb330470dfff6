//! Per-node sizing and alignment configuration.

use geom::{Gravity, Insets, SizeF};

use crate::{
    dimension::{Dimension, Unit},
    host::DisplayMetrics,
};

/// The visibility state of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Participates in measurement and rendering.
    #[default]
    Visible,
    /// Participates in measurement and reserves space, but is not rendered.
    Invisible,
    /// Excluded from measurement entirely and rendered as empty.
    Gone,
}

/// LayoutParameters declare how a node should be laid out by its parent
/// container. Every node owns exactly one set.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParameters {
    /// Requested width.
    pub width: Dimension,
    /// Requested height.
    pub height: Dimension,
    /// Whitespace margins left around the node.
    pub margins: Insets,
    /// Relative share of leftover main-axis space for a `ParentRatio` child
    /// of a stack. Only consulted during weighted distribution.
    pub weight: u32,
    /// Alignment of the node within the space allotted to it.
    pub gravity: Gravity,
    /// Visibility state.
    pub visibility: Visibility,
    /// Lower width clamp, applied after measurement.
    pub min_width: Option<f32>,
    /// Upper width clamp, applied after measurement.
    pub max_width: Option<f32>,
    /// Lower height clamp, applied after measurement.
    pub min_height: Option<f32>,
    /// Upper height clamp, applied after measurement.
    pub max_height: Option<f32>,
}

impl Default for LayoutParameters {
    /// Wrap content on both axes, default weight and top-left gravity.
    fn default() -> Self {
        Self::new(Dimension::wrap_content(), Dimension::wrap_content())
    }
}

impl LayoutParameters {
    /// Construct parameters with the given dimensions and defaults for
    /// everything else.
    pub fn new(width: Dimension, height: Dimension) -> Self {
        Self {
            width,
            height,
            margins: Insets::zero(),
            weight: 1,
            gravity: Gravity::default(),
            visibility: Visibility::default(),
            min_width: None,
            max_width: None,
            min_height: None,
            max_height: None,
        }
    }

    /// Fill the parent on both axes.
    pub fn fill() -> Self {
        Self::new(Dimension::fill_parent(), Dimension::fill_parent())
    }

    /// Replace the margins.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }

    /// Replace the weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight;
        self
    }

    /// Replace the gravity.
    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    /// Replace the visibility.
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Clamp the measured width to `[min, max]`. Either bound may be `None`.
    pub fn with_width_clamp(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.min_width = min;
        self.max_width = max;
        self
    }

    /// Clamp the measured height to `[min, max]`. Either bound may be `None`.
    pub fn with_height_clamp(mut self, min: Option<f32>, max: Option<f32>) -> Self {
        self.min_height = min;
        self.max_height = max;
        self
    }

    /// Cheap resolution for units that don't require content measurement.
    fn try_resolve(dimension: &Dimension, parent: Option<f32>) -> Option<f32> {
        match dimension.unit() {
            Unit::Absolute => Some(dimension.magnitude()),
            Unit::ParentRatio => parent.map(|p| p * dimension.magnitude()),
            _ => None,
        }
    }

    /// Resolve the width if it doesn't depend on content, consulting the
    /// display metrics for screen/host ratio units.
    pub(crate) fn try_resolve_width(
        &self,
        env: &dyn DisplayMetrics,
        parent_width: Option<f32>,
    ) -> Option<f32> {
        match self.width.unit() {
            Unit::HostRatio => Some(env.host_size().w * self.width.magnitude()),
            Unit::ScreenRatio => Some(env.screen_size().w * self.width.magnitude()),
            _ => Self::try_resolve(&self.width, parent_width),
        }
    }

    /// Resolve the height if it doesn't depend on content, consulting the
    /// display metrics for screen/host ratio units.
    pub(crate) fn try_resolve_height(
        &self,
        env: &dyn DisplayMetrics,
        parent_height: Option<f32>,
    ) -> Option<f32> {
        match self.height.unit() {
            Unit::HostRatio => Some(env.host_size().h * self.height.magnitude()),
            Unit::ScreenRatio => Some(env.screen_size().h * self.height.magnitude()),
            _ => Self::try_resolve(&self.height, parent_height),
        }
    }

    /// Finalize a node's measured size. Axes that resolved cheaply use their
    /// resolved value, others fall back to the measured content size; then
    /// content ratios apply, and aspect ratios last, since they read the
    /// opposite axis's final value.
    pub(crate) fn resolve_size(
        &self,
        width: Option<f32>,
        height: Option<f32>,
        content: SizeF,
    ) -> SizeF {
        let mut size = SizeF::new(width.unwrap_or(content.w), height.unwrap_or(content.h));

        if self.width.unit() == Unit::ContentRatio {
            size.w *= self.width.magnitude();
        }
        if self.height.unit() == Unit::ContentRatio {
            size.h *= self.height.magnitude();
        }

        if self.width.unit() == Unit::AspectRatio {
            size.w = size.h * self.width.magnitude();
        }
        if self.height.unit() == Unit::AspectRatio {
            size.h = size.w * self.height.magnitude();
        }

        size
    }

    /// Apply the min/max clamps to a measured size.
    pub(crate) fn clamp(&self, mut size: SizeF) -> SizeF {
        if let Some(min) = self.min_width {
            size.w = size.w.max(min);
        }
        if let Some(min) = self.min_height {
            size.h = size.h.max(min);
        }
        if let Some(max) = self.max_width {
            size.w = size.w.min(max);
        }
        if let Some(max) = self.max_height {
            size.h = size.h.min(max);
        }
        size
    }
}
