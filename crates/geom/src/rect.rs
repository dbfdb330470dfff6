use super::{Gravity, HGravity, Insets, Point, SizeF, VGravity};

/// A located rectangle in layout units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// The top-left corner.
    pub tl: Point,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

impl Rect {
    /// Construct a rect from its top-left corner and extent.
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// The zero rect at the origin. Hidden and `Gone` nodes are laid out to
    /// this.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Construct a rect of the given size at the origin.
    pub fn at_origin(size: SizeF) -> Self {
        Self::new(0.0, 0.0, size.w, size.h)
    }

    /// Left edge.
    pub fn left(&self) -> f32 {
        self.tl.x
    }

    /// Top edge.
    pub fn top(&self) -> f32 {
        self.tl.y
    }

    /// Right edge.
    pub fn right(&self) -> f32 {
        self.tl.x + self.w
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f32 {
        self.tl.y + self.h
    }

    /// The extent of this rect, discarding its location.
    pub fn size(&self) -> SizeF {
        SizeF {
            w: self.w,
            h: self.h,
        }
    }

    /// True if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Shrink the rect by the given insets. Extents are floored at zero.
    pub fn inset(&self, insets: Insets) -> Self {
        Self::new(
            self.tl.x + insets.left,
            self.tl.y + insets.top,
            (self.w - insets.horizontal()).max(0.0),
            (self.h - insets.vertical()).max(0.0),
        )
    }

    /// Place a rect of `size` within this rect according to `gravity`.
    pub fn apply_gravity(&self, size: SizeF, gravity: Gravity) -> Self {
        let x = match gravity.horizontal {
            HGravity::Left => self.left(),
            HGravity::Center => self.left() + (self.w - size.w) / 2.0,
            HGravity::Right => self.right() - size.w,
        };
        let y = match gravity.vertical {
            VGravity::Top => self.top(),
            VGravity::Center => self.top() + (self.h - size.h) / 2.0,
            VGravity::Bottom => self.bottom() - size.h,
        };
        Self::new(x, y, size.w, size.h)
    }
}

impl From<SizeF> for Rect {
    fn from(s: SizeF) -> Self {
        Self::at_origin(s)
    }
}
