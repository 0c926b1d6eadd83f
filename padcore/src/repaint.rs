//! Change-driven repaint controller
//!
//! egui redraws on every input event by default. The keypad only needs a
//! new frame when something visible changed: a key was tapped, a key was
//! typed, or the reducer reported a new display string.
//!
//! `RepaintController` is the subscriber side of that notification. The
//! app calls [`RepaintController::notify_changed`] whenever the reducer
//! says the display moved, and the controller turns the notifications of
//! one frame into at most one repaint request.

/// Controls when the egui context should request repaints.
///
/// Call [`begin_frame`](Self::begin_frame) at the top of `update()` and
/// [`end_frame`](Self::end_frame) at the bottom.
#[derive(Debug, Default)]
pub struct RepaintController {
    /// Set when the app reported a change during the current frame.
    dirty: bool,
}

impl RepaintController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that something visible changed.
    pub fn notify_changed(&mut self) {
        self.dirty = true;
    }

    /// Whether a change is waiting to be painted.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call at the **start** of `update()`. This frame paints whatever
    /// was reported before it.
    pub fn begin_frame(&mut self) {
        self.dirty = false;
    }

    /// Call at the **end** of `update()`. Requests one more frame if the
    /// app reported a change while this one was being built.
    pub fn end_frame(&mut self, ctx: &egui::Context) {
        if self.dirty {
            ctx.request_repaint();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_marks_dirty() {
        let mut rc = RepaintController::new();
        assert!(!rc.is_dirty());
        rc.notify_changed();
        rc.notify_changed();
        assert!(rc.is_dirty());
    }

    #[test]
    fn test_begin_frame_consumes_change() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.notify_changed();
        rc.begin_frame();
        assert!(!rc.is_dirty());
        rc.end_frame(&ctx);
        assert!(!rc.is_dirty());
    }

    #[test]
    fn test_change_during_frame_survives_end() {
        let ctx = egui::Context::default();
        let mut rc = RepaintController::new();
        rc.begin_frame();
        rc.notify_changed();
        rc.end_frame(&ctx);
        assert!(rc.is_dirty());
    }
}
