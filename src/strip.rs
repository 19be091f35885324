use crate::constants::DRAG_SCROLL_FACTOR;

/// Horizontal scroll state of the work-highlight strip: the mouse wheel
/// scrolls sideways and the strip can be dragged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DragScroll {
    drag: Option<(f64, f64)>,
}

impl DragScroll {
    /// New scroll position for a wheel event, or `None` if the event should
    /// be left to the browser.
    pub fn wheel(&self, scroll_left: f64, delta_x: f64, delta_y: f64) -> Option<f64> {
        (delta_y != 0.0).then(|| scroll_left + delta_y + delta_x)
    }

    pub fn press(&mut self, x: f64, scroll_left: f64) {
        self.drag = Some((x, scroll_left));
    }

    /// New scroll position while dragging.
    pub fn drag_to(&self, x: f64) -> Option<f64> {
        let (start_x, start_scroll) = self.drag?;
        Some(start_scroll - (x - start_x) * DRAG_SCROLL_FACTOR)
    }

    pub fn release(&mut self) {
        self.drag = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }
}
