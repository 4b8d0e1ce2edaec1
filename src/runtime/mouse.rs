//! Mouse event handling
//!
//! Converts winit's physical-pixel pointer events into logical dock
//! coordinates and feeds them through the dock's update loop. Only the left
//! button drives drags.

use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton};

use magdock::commands::Cmd;
use magdock::model::Point;
use magdock::view::ItemRenderer;
use magdock::Dock;

/// Latest pointer state as seen by the window
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Last cursor position in logical units
    pub position: Option<Point>,
    pub left_down: bool,
}

impl PointerTracker {
    pub fn to_logical(position: PhysicalPosition<f64>, scale_factor: f64) -> Point {
        Point::new(position.x / scale_factor, position.y / scale_factor)
    }
}

/// Handle `WindowEvent::CursorMoved`
pub fn handle_cursor_moved<T, R>(
    dock: &mut Dock<T, R>,
    tracker: &mut PointerTracker,
    position: PhysicalPosition<f64>,
    scale_factor: f64,
) -> Option<Cmd>
where
    R: ItemRenderer<T>,
{
    let point = PointerTracker::to_logical(position, scale_factor);
    tracker.position = Some(point);
    if !tracker.left_down {
        return None;
    }
    dock.move_to(point)
}

/// Handle `WindowEvent::MouseInput`
pub fn handle_mouse_input<T, R>(
    dock: &mut Dock<T, R>,
    tracker: &mut PointerTracker,
    state: ElementState,
    button: MouseButton,
) -> Option<Cmd>
where
    R: ItemRenderer<T>,
{
    if button != MouseButton::Left {
        return None;
    }

    match state {
        ElementState::Pressed => {
            tracker.left_down = true;
            let point = tracker.position?;
            dock.press_at(point)
        }
        ElementState::Released => {
            tracker.left_down = false;
            dock.release()
        }
    }
}
