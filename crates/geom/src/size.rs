use super::{Point, Rect};

/// A `SizeF` is a rectangle that has a width and height but no location.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SizeF {
    /// Width in layout units.
    pub w: f32,
    /// Height in layout units.
    pub h: f32,
}

impl SizeF {
    /// Construct a size.
    pub fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }

    /// Constructs a zero-valued size.
    pub fn zero() -> Self {
        Self::default()
    }

    /// True if either dimension is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Return a `Rect` with the same dimensions as this size, located at the
    /// origin.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::zero(),
            w: self.w,
            h: self.h,
        }
    }
}

impl From<(f32, f32)> for SizeF {
    fn from(v: (f32, f32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}

impl From<Rect> for SizeF {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}
