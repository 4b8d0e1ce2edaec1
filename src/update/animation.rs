//! Animation tick handler

use crate::commands::Cmd;
use crate::messages::AnimationMsg;
use crate::model::DockModel;

/// Update function for frame-clock messages
pub fn update_animation<T>(model: &mut DockModel<T>, msg: AnimationMsg) -> Option<Cmd> {
    match msg {
        AnimationMsg::Tick => {
            if !model.animation.is_running() {
                return None;
            }
            let now = model.now();
            if model.animation.tick(now) {
                Some(Cmd::AnimationFrame)
            } else {
                // Final frame at rest
                Some(Cmd::Redraw)
            }
        }
    }
}
