//! Instrumented fixtures for testing layout without a real widget toolkit.

use std::cell::RefCell;
use std::rc::Rc;

use geom::{Rect, SizeF};

use crate::{host::FixedMetrics, leaf::Widget, node::View};

/// A shared record of the frames a test widget has been given, most recent
/// last.
#[derive(Debug, Clone, Default)]
pub struct FrameLog(Rc<RefCell<Vec<(Rect, bool)>>>);

impl FrameLog {
    /// The most recent `(frame, hidden)` application, if any.
    pub fn last(&self) -> Option<(Rect, bool)> {
        self.0.borrow().last().copied()
    }

    /// How many times a frame has been applied.
    pub fn count(&self) -> usize {
        self.0.borrow().len()
    }

    fn push(&self, frame: Rect, hidden: bool) {
        self.0.borrow_mut().push((frame, hidden));
    }
}

/// A test widget with a fixed natural size that records every frame applied
/// to it.
#[derive(Debug)]
pub struct TFixed {
    natural: SizeF,
    log: FrameLog,
}

impl TFixed {
    /// Construct a widget with the given natural size.
    pub fn new(w: f32, h: f32) -> Self {
        Self {
            natural: SizeF::new(w, h),
            log: FrameLog::default(),
        }
    }

    /// Construct a leaf view around a fixed widget, returning the view and a
    /// handle to the widget's frame log.
    pub fn view(w: f32, h: f32) -> (View, FrameLog) {
        let widget = Self::new(w, h);
        let log = widget.log();
        (View::leaf(widget), log)
    }

    /// A handle to the widget's frame log.
    pub fn log(&self) -> FrameLog {
        self.log.clone()
    }
}

impl Widget for TFixed {
    fn natural_size(&mut self, _given_width: Option<f32>, _given_height: Option<f32>) -> SizeF {
        self.natural
    }

    fn apply_frame(&mut self, frame: Rect, hidden: bool) {
        self.log.push(frame, hidden);
    }
}

/// Display metrics for tests: a 320×480 screen hosting a 100×100 view.
pub fn metrics() -> FixedMetrics {
    FixedMetrics::new(SizeF::new(320.0, 480.0), SizeF::new(100.0, 100.0))
}
