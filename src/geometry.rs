//! Geometry model: pointer position → per-item scale and target slot
//!
//! All functions here are pure (no I/O, no state) and are shared by the
//! update loop, the view pass, and host runtimes doing hit-testing.
//!
//! Local coordinates are measured from the content box, i.e. the container
//! origin inset by `layout.padding`. Item `i` is expected at
//! `(i * step, item_size / 2)`.

use crate::model::layout::{DockLayout, Point, Rect};

/// Scale when nothing is magnified
pub const BASE_SCALE: f64 = 1.0;

/// Convert a global point into the dock's local content coordinates
#[inline]
pub fn to_local(point: Point, container: &Rect, layout: &DockLayout) -> Point {
    Point::new(
        point.x - container.x - layout.padding,
        point.y - container.y - layout.padding,
    )
}

/// Nominal on-row position of the item at `index`, in local coordinates
#[inline]
pub fn expected_position(index: usize, layout: &DockLayout) -> Point {
    Point::new(index as f64 * layout.step(), layout.item_size / 2.0)
}

/// Scale for a single item at distance `distance` from the pointer
///
/// Linear falloff from `magnification_factor` at 0 to 1.0 at the radius,
/// never below 1.0.
pub fn scale_for_distance(distance: f64, layout: &DockLayout) -> f64 {
    if !distance.is_finite() || distance >= layout.magnification_radius {
        return BASE_SCALE;
    }
    (layout.magnification_factor - distance / layout.magnification_radius).max(BASE_SCALE)
}

/// Scale of the item at slot `index`
///
/// `pointer` is the global pointer position of the active drag session, or
/// `None` when idle. `container` is `None` until the host has measured the
/// dock; both cases yield the base scale.
pub fn compute_item_scale(
    index: Option<usize>,
    pointer: Option<Point>,
    container: Option<&Rect>,
    layout: &DockLayout,
) -> f64 {
    let (Some(index), Some(pointer)) = (index, pointer) else {
        return BASE_SCALE;
    };
    let Some(container) = container.filter(|c| c.is_measured()) else {
        tracing::trace!("container not measured, using base scale");
        return BASE_SCALE;
    };
    let local = to_local(pointer, container, layout);
    scale_for_distance(expected_position(index, layout).distance_to(local), layout)
}

/// Slot the pointer currently maps to, clamped to `[0, len - 1]`
///
/// Purely a function of the nominal step; rendered bounds are ignored.
pub fn compute_target_index(local_x: f64, layout: &DockLayout, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let step = layout.step();
    if step <= 0.0 || !local_x.is_finite() {
        return 0;
    }
    let slot = (local_x / step).round();
    if slot <= 0.0 {
        0
    } else {
        (slot as usize).min(len - 1)
    }
}

/// Slot whose nominal bounds contain `local`, if any
///
/// Slot `i` covers `[i * step, i * step + item_size)` horizontally and
/// `[0, item_size)` vertically. Points in the spacing gaps miss.
pub fn hit_test_item(local: Point, layout: &DockLayout, len: usize) -> Option<usize> {
    if local.x < 0.0 || local.y < 0.0 || local.y >= layout.item_size {
        return None;
    }
    let step = layout.step();
    if step <= 0.0 {
        return None;
    }
    let slot = (local.x / step).floor() as usize;
    if slot >= len {
        return None;
    }
    let within = local.x - slot as f64 * step;
    (within < layout.item_size).then_some(slot)
}

/// Width and height of the item row without padding
pub fn content_size(layout: &DockLayout, len: usize) -> (f64, f64) {
    if len == 0 {
        return (0.0, layout.item_size);
    }
    let width = len as f64 * layout.item_size + (len - 1) as f64 * layout.spacing;
    (width, layout.item_size)
}

/// Container size needed to show `len` items with padding on every side
pub fn preferred_size(layout: &DockLayout, len: usize) -> (f64, f64) {
    let (w, h) = content_size(layout, len);
    (w + 2.0 * layout.padding, h + 2.0 * layout.padding)
}
