/// Horizontal alignment of a node within the space allotted to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HGravity {
    /// Align to the left edge.
    #[default]
    Left,
    /// Center horizontally.
    Center,
    /// Align to the right edge.
    Right,
}

/// Vertical alignment of a node within the space allotted to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VGravity {
    /// Align to the top edge.
    #[default]
    Top,
    /// Center vertically.
    Center,
    /// Align to the bottom edge.
    Bottom,
}

/// Alignment of a node within the space allotted to it, specified
/// independently per axis. The default is top-left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gravity {
    /// Horizontal component.
    pub horizontal: HGravity,
    /// Vertical component.
    pub vertical: VGravity,
}

impl Gravity {
    /// Top-left alignment, the default.
    pub const TOP_LEFT: Self = Self::new(HGravity::Left, VGravity::Top);
    /// Centered on both axes.
    pub const CENTER: Self = Self::new(HGravity::Center, VGravity::Center);
    /// Bottom-right alignment.
    pub const BOTTOM_RIGHT: Self = Self::new(HGravity::Right, VGravity::Bottom);

    /// Construct a gravity from per-axis components.
    pub const fn new(horizontal: HGravity, vertical: VGravity) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }

    /// Replace the horizontal component.
    pub fn with_horizontal(self, horizontal: HGravity) -> Self {
        Self { horizontal, ..self }
    }

    /// Replace the vertical component.
    pub fn with_vertical(self, vertical: VGravity) -> Self {
        Self { vertical, ..self }
    }
}

impl From<(HGravity, VGravity)> for Gravity {
    fn from(v: (HGravity, VGravity)) -> Self {
        Self::new(v.0, v.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(Gravity::default(), Gravity::TOP_LEFT);
        assert_eq!(
            Gravity::default().with_vertical(VGravity::Bottom),
            Gravity::new(HGravity::Left, VGravity::Bottom)
        );
    }
}
