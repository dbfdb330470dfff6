//! The host seam: display queries consumed during measurement, and the
//! adapter that owns a tree and drives measure/layout cycles on resize.

use geom::{Rect, SizeF};

use crate::{Error, Result, node::View};

/// Display queries consumed while resolving `ScreenRatio` and `HostRatio`
/// dimensions. Implementations must be pure, synchronous and side-effect
/// free; the engine may call them any number of times per cycle. Injected
/// explicitly so the core stays testable without a real display.
pub trait DisplayMetrics: std::fmt::Debug {
    /// The current screen size.
    fn screen_size(&self) -> SizeF;

    /// The current size of the host view containing the tree.
    fn host_size(&self) -> SizeF;
}

/// A value-backed [`DisplayMetrics`]. Hosts that track a live display update
/// it between cycles; tests construct it directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMetrics {
    screen: SizeF,
    host: SizeF,
}

impl FixedMetrics {
    /// Construct metrics from a screen and host size.
    pub fn new(screen: SizeF, host: SizeF) -> Self {
        Self { screen, host }
    }

    /// Record a new host size, as reported by an external resize event.
    pub fn set_host_size(&mut self, host: SizeF) {
        self.host = host;
    }
}

impl DisplayMetrics for FixedMetrics {
    fn screen_size(&self) -> SizeF {
        self.screen
    }

    fn host_size(&self) -> SizeF {
        self.host
    }
}

/// Owns a root [`View`] and drives the measure/layout cycle against it.
/// External collaborators call [`LayoutHost::set_bounds`] whenever the
/// hosting area changes, and [`LayoutHost::relayout`] after mutating layout
/// parameters or visibility; the engine never detects the need to re-layout
/// on its own.
#[derive(Debug)]
pub struct LayoutHost {
    root: View,
    metrics: Box<dyn DisplayMetrics>,
    bounds: Option<Rect>,
}

impl LayoutHost {
    /// Construct a host around a root view.
    pub fn new(root: View, metrics: Box<dyn DisplayMetrics>) -> Self {
        Self {
            root,
            metrics,
            bounds: None,
        }
    }

    /// The hosted root view.
    pub fn root(&self) -> &View {
        &self.root
    }

    /// Mutable access to the hosted root view. Any mutation must be followed
    /// by [`LayoutHost::relayout`] before measured geometry is read again.
    pub fn root_mut(&mut self) -> &mut View {
        &mut self.root
    }

    /// Detach and return the root view.
    pub fn into_root(self) -> View {
        self.root
    }

    /// Measure the tree against an available size without positioning it,
    /// and report the root's resulting size.
    pub fn size_that_fits(&mut self, available: SizeF) -> Result<SizeF> {
        self.root
            .measure(&*self.metrics, Some(available.w), Some(available.h))?;
        self.root.measured_size()
    }

    /// Run a full measure/layout cycle against new host bounds. The root is
    /// measured at the bounds' size, then positioned within the bounds
    /// according to its own margins and gravity.
    pub fn set_bounds(&mut self, bounds: Rect) -> Result<()> {
        tracing::trace!(w = bounds.w, h = bounds.h, "layout cycle");
        self.root
            .measure(&*self.metrics, Some(bounds.w), Some(bounds.h))?;
        let frame = self.root.measured_frame(bounds)?;
        self.root.layout(frame, false)?;
        self.bounds = Some(bounds);
        Ok(())
    }

    /// Re-run the last cycle. Required after any layout-parameter or
    /// visibility change.
    pub fn relayout(&mut self) -> Result<()> {
        let bounds = self
            .bounds
            .ok_or_else(|| Error::Layout("relayout before any set_bounds".into()))?;
        self.set_bounds(bounds)
    }
}
