//! Update functions for the Elm-style architecture
//!
//! This is the interaction controller: every pointer, frame, and layout event
//! is turned into model mutations here, and the returned [`Cmd`] tells the
//! host whether to redraw.

mod animation;
mod layout;
mod pointer;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::DockModel;

#[cfg(debug_assertions)]
use crate::tracing::OrderSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use animation::update_animation;
pub use layout::update_layout;
pub use pointer::update_pointer;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update<T>(model: &mut DockModel<T>, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner<T>(model: &mut DockModel<T>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(m) => pointer::update_pointer(model, m),
        Msg::Animation(m) => animation::update_animation(model, m),
        Msg::Layout(m) => layout::update_layout(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced<T>(model: &mut DockModel<T>, msg: Msg) -> Option<Cmd> {
    use crate::messages::{AnimationMsg, PointerMsg};

    // Frame ticks and moves arrive every frame
    let is_noisy = matches!(
        msg,
        Msg::Animation(AnimationMsg::Tick) | Msg::Pointer(PointerMsg::Move { .. })
    );

    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = ?msg).entered())
    };

    let before = OrderSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = OrderSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "order", %diff, "state changed");
    }

    result
}
