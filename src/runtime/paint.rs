//! Software painting of a dock frame
//!
//! Everything in a `DockFrame` is in logical units; the painter multiplies
//! by the window scale factor.

use magdock::config::StyleConfig;
use magdock::model::Rect;
use magdock::view::{Canvas, DockFrame};

const WINDOW_BACKGROUND: u32 = 0xFF1E1F22;
const FALLBACK_DOCK_BACKGROUND: u32 = 0xFF2B2D30;
const DRAG_SHADOW: u32 = 0x60000000;

fn to_physical(rect: Rect, scale_factor: f64) -> Rect {
    Rect::new(
        rect.x * scale_factor,
        rect.y * scale_factor,
        rect.width * scale_factor,
        rect.height * scale_factor,
    )
}

/// Paint one frame. Tile visuals are ARGB colors.
pub fn paint_frame(
    canvas: &mut Canvas<'_>,
    frame: &DockFrame<u32>,
    style: &StyleConfig,
    scale_factor: f64,
) {
    canvas.clear(WINDOW_BACKGROUND);

    let Some(container) = frame.container else {
        return;
    };

    let background = style.background_argb().unwrap_or(FALLBACK_DOCK_BACKGROUND);
    canvas.fill_rounded_rect(
        to_physical(container, scale_factor),
        style.corner_radius * scale_factor,
        background,
    );

    // Dragged tile last so it sits above its neighbours
    let (dragged, rest): (Vec<_>, Vec<_>) = frame
        .items
        .iter()
        .partition(|item| Some(item.index) == frame.dragged);

    for item in rest {
        if let Some(bounds) = item.bounds {
            let radius = style.corner_radius * 0.75 * item.scale * scale_factor;
            canvas.fill_rounded_rect(to_physical(bounds, scale_factor), radius, item.visual);
        }
    }

    for item in dragged {
        if let Some(bounds) = item.bounds {
            let radius = style.corner_radius * 0.75 * item.scale * scale_factor;
            let shadow = Rect::new(bounds.x + 2.0, bounds.y + 4.0, bounds.width, bounds.height);
            canvas.fill_rect_blended(to_physical(shadow, scale_factor), DRAG_SHADOW);
            canvas.fill_rounded_rect(to_physical(bounds, scale_factor), radius, item.visual);
        }
    }
}
