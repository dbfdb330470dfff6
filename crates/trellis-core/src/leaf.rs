//! The leaf adapter seam: wrapping an opaque native widget as a measurable,
//! positionable node.

use geom::{Rect, SizeF};

use crate::{host::DisplayMetrics, params::LayoutParameters};

/// The contract a wrapped native widget offers the engine. Implementations
/// adapt a non-layout-managed widget (a toolkit control, a drawing surface)
/// into the tree as a leaf.
pub trait Widget: std::fmt::Debug {
    /// The size the widget requires absent any parent-imposed constraint.
    /// Axes the engine has already resolved are passed through so content
    /// can reflow against them (e.g. text wrapping to a known width).
    fn natural_size(&mut self, given_width: Option<f32>, given_height: Option<f32>) -> SizeF;

    /// Apply final geometry to the underlying widget. `frame` is in the
    /// parent's coordinate space; a `hidden` widget must not render, but
    /// still receives its frame.
    fn apply_frame(&mut self, frame: Rect, hidden: bool);
}

/// Measure a leaf: resolve the cheap units, consult the widget's natural
/// size only if an axis is still content-driven, then finalize.
pub(crate) fn measure(
    widget: &mut dyn Widget,
    params: &LayoutParameters,
    env: &dyn DisplayMetrics,
    parent_width: Option<f32>,
    parent_height: Option<f32>,
) -> SizeF {
    let width = params.try_resolve_width(env, parent_width);
    let height = params.try_resolve_height(env, parent_height);

    let content = if width.is_none() || height.is_none() {
        widget.natural_size(width, height)
    } else {
        SizeF::zero()
    };

    params.resolve_size(width, height, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dimension, Result, host::FixedMetrics, tutils::TFixed};

    fn env() -> FixedMetrics {
        FixedMetrics::new(SizeF::new(320.0, 480.0), SizeF::new(100.0, 100.0))
    }

    #[test]
    fn absolute_axes_skip_content() {
        let mut widget = TFixed::new(30.0, 20.0);
        let params =
            LayoutParameters::new(Dimension::absolute(50.0), Dimension::absolute(60.0));
        let size = measure(&mut widget, &params, &env(), None, None);
        assert_eq!(size, SizeF::new(50.0, 60.0));
    }

    #[test]
    fn content_driven_axes_ask_the_widget() {
        let mut widget = TFixed::new(30.0, 20.0);
        let params = LayoutParameters::default();
        let size = measure(&mut widget, &params, &env(), Some(100.0), Some(100.0));
        assert_eq!(size, SizeF::new(30.0, 20.0));
    }

    #[test]
    fn aspect_follows_the_other_axis() -> Result<()> {
        let mut widget = TFixed::new(30.0, 20.0);
        let params =
            LayoutParameters::new(Dimension::absolute(100.0), Dimension::aspect_ratio(0.5));
        let size = measure(&mut widget, &params, &env(), None, None);
        assert_eq!(size, SizeF::new(100.0, 50.0));
        Ok(())
    }
}
