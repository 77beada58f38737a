//! Canvas mouse input: a pure drag state machine plus the event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, MouseEvent};

use crate::error::RenderError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Up,
    Down,
}

/// Tracks whether the mouse button is held and decides which positions get
/// reported: the press itself, then every move until release.
#[derive(Clone, Debug)]
pub struct DragTracker {
    phase: DragPhase,
}

impl DragTracker {
    pub fn new() -> DragTracker {
        DragTracker {
            phase: DragPhase::Up,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Down
    }

    /// Starts a drag; the pressed position is always reported
    pub fn mouse_down(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        self.phase = DragPhase::Down;
        Some((x, y))
    }

    /// Reported only while the button is held
    pub fn mouse_move(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.is_dragging() {
            Some((x, y))
        } else {
            None
        }
    }

    /// Ends the drag without reporting a position
    pub fn mouse_up(&mut self) {
        self.phase = DragPhase::Up;
    }
}

impl Default for DragTracker {
    fn default() -> DragTracker {
        DragTracker::new()
    }
}

/// Forwards dragged canvas positions to a callback. The listeners stay
/// registered for as long as the handler is alive and are removed when it is
/// dropped.
pub struct CanvasMouseHandler {
    canvas: HtmlCanvasElement,
    mouse_down: Closure<dyn FnMut(MouseEvent)>,
    mouse_move: Closure<dyn FnMut(MouseEvent)>,
    mouse_up: Closure<dyn FnMut(MouseEvent)>,
}

impl CanvasMouseHandler {
    pub fn attach(
        canvas: &HtmlCanvasElement,
        on_position: impl FnMut(f32, f32) + 'static,
    ) -> Result<CanvasMouseHandler, RenderError> {
        let tracker = Rc::new(RefCell::new(DragTracker::new()));
        let callback: Rc<RefCell<dyn FnMut(f32, f32)>> = Rc::new(RefCell::new(on_position));

        let mouse_down = {
            let tracker = Rc::clone(&tracker);
            let callback = Rc::clone(&callback);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let report = tracker
                    .borrow_mut()
                    .mouse_down(event.offset_x() as f32, event.offset_y() as f32);
                if let Some((x, y)) = report {
                    (callback.borrow_mut())(x, y);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let mouse_move = {
            let tracker = Rc::clone(&tracker);
            let callback = Rc::clone(&callback);
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let report = tracker
                    .borrow_mut()
                    .mouse_move(event.offset_x() as f32, event.offset_y() as f32);
                if let Some((x, y)) = report {
                    (callback.borrow_mut())(x, y);
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        let mouse_up = Closure::wrap(Box::new(move |_event: MouseEvent| {
            tracker.borrow_mut().mouse_up();
        }) as Box<dyn FnMut(MouseEvent)>);

        canvas
            .add_event_listener_with_callback("mousedown", mouse_down.as_ref().unchecked_ref())
            .map_err(|_| RenderError::ResourceAllocationFailed("mousedown listener"))?;
        canvas
            .add_event_listener_with_callback("mousemove", mouse_move.as_ref().unchecked_ref())
            .map_err(|_| RenderError::ResourceAllocationFailed("mousemove listener"))?;
        canvas
            .add_event_listener_with_callback("mouseup", mouse_up.as_ref().unchecked_ref())
            .map_err(|_| RenderError::ResourceAllocationFailed("mouseup listener"))?;

        Ok(CanvasMouseHandler {
            canvas: canvas.clone(),
            mouse_down,
            mouse_move,
            mouse_up,
        })
    }
}

impl Drop for CanvasMouseHandler {
    fn drop(&mut self) {
        let _ = self.canvas.remove_event_listener_with_callback(
            "mousedown",
            self.mouse_down.as_ref().unchecked_ref(),
        );
        let _ = self.canvas.remove_event_listener_with_callback(
            "mousemove",
            self.mouse_move.as_ref().unchecked_ref(),
        );
        let _ = self.canvas.remove_event_listener_with_callback(
            "mouseup",
            self.mouse_up.as_ref().unchecked_ref(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_starts_idle() {
        let tracker = DragTracker::new();
        assert_eq!(tracker.phase(), DragPhase::Up);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_press_reports_and_starts_the_drag() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.mouse_down(4.0, 5.0), Some((4.0, 5.0)));
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_moves_report_only_while_the_button_is_held() {
        let mut tracker = DragTracker::new();
        assert_eq!(tracker.mouse_move(1.0, 1.0), None);

        tracker.mouse_down(2.0, 2.0);
        assert_eq!(tracker.mouse_move(3.0, 3.0), Some((3.0, 3.0)));
        assert_eq!(tracker.mouse_move(4.0, 4.0), Some((4.0, 4.0)));

        tracker.mouse_up();
        assert_eq!(tracker.mouse_move(5.0, 5.0), None);
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_release_does_not_report() {
        let mut tracker = DragTracker::new();
        tracker.mouse_down(1.0, 1.0);
        tracker.mouse_up();
        assert_eq!(tracker.phase(), DragPhase::Up);
    }

    #[test]
    fn test_a_new_drag_can_start_after_release() {
        let mut tracker = DragTracker::new();
        tracker.mouse_down(1.0, 1.0);
        tracker.mouse_up();
        assert_eq!(tracker.mouse_down(6.0, 7.0), Some((6.0, 7.0)));
        assert_eq!(tracker.mouse_move(8.0, 9.0), Some((8.0, 9.0)));
    }
}
