/// Whitespace reserved around the edges of a rectangle, used for both margins
/// and padding.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    /// Top edge.
    pub top: f32,
    /// Left edge.
    pub left: f32,
    /// Bottom edge.
    pub bottom: f32,
    /// Right edge.
    pub right: f32,
}

impl Insets {
    /// Construct insets from individual edges.
    pub fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Zero insets on all edges.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The same inset on all four edges.
    pub fn uniform(v: f32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Total horizontal inset (left + right).
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical inset (top + bottom).
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals() {
        let i = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(i.horizontal(), 6.0);
        assert_eq!(i.vertical(), 4.0);
        assert_eq!(Insets::uniform(2.0).horizontal(), 4.0);
    }
}
