//! Pointer update handlers
//!
//! Idle → Dragging on press over an item, reorder on move, Dragging → Idle
//! on release. A press followed by a release without movement is a valid
//! drag that simply never reorders.

use crate::commands::Cmd;
use crate::geometry;
use crate::messages::PointerMsg;
use crate::model::{DockModel, DragSession, Point, Reordered};

/// Update function for pointer messages
pub fn update_pointer<T>(model: &mut DockModel<T>, msg: PointerMsg) -> Option<Cmd> {
    match msg {
        PointerMsg::Press { index, position } => press(model, index, position),
        PointerMsg::Move { position } => drag_to(model, position),
        PointerMsg::Release => release(model),
    }
}

fn press<T>(model: &mut DockModel<T>, index: usize, position: Point) -> Option<Cmd> {
    if model.drag.is_active() {
        // Second pointer while a drag is live
        tracing::debug!(index, "press ignored, drag already active");
        return None;
    }

    let Some(key) = model.sequence.key_at(index) else {
        tracing::warn!(index, len = model.len(), "press outside the item range");
        return None;
    };

    model.drag = DragSession::begin(key, position);
    tracing::debug!(index, ?key, "drag started");
    Some(Cmd::Redraw)
}

fn drag_to<T>(model: &mut DockModel<T>, position: Point) -> Option<Cmd> {
    let Some(key) = model.drag.dragged else {
        return None;
    };
    model.drag.pointer = Some(position);

    let Some(local) = model.local_pointer() else {
        // Not measured yet: scales stay at baseline, nothing to show
        return None;
    };

    let target = geometry::compute_target_index(local.x, &model.layout, model.len());
    if model.sequence.position_of_key(key) == Some(target) {
        return Some(Cmd::Redraw);
    }

    match model.sequence.reorder_key(key, target) {
        Reordered::Moved { from, to } => {
            tracing::debug!(?key, from, to, "reordered");
            let now = model.now();
            model.animation.restart(now);
            Some(Cmd::AnimationFrame)
        }
        Reordered::Unchanged => Some(Cmd::Redraw),
    }
}

fn release<T>(model: &mut DockModel<T>) -> Option<Cmd> {
    if !model.drag.is_active() {
        return None;
    }

    tracing::debug!(key = ?model.drag.dragged, "drag ended");
    model.drag.end();

    // Settle runs on every release, reorder or not
    let now = model.now();
    model.animation.restart(now);
    Some(Cmd::AnimationFrame)
}
