//! Container measurement handlers

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::DockModel;

/// Update function for layout messages
pub fn update_layout<T>(model: &mut DockModel<T>, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::ContainerMeasured(rect) => {
            if model.container == Some(rect) {
                return None;
            }
            tracing::trace!(?rect, "container measured");
            model.container = Some(rect);
            Some(Cmd::Redraw)
        }
        LayoutMsg::ContainerInvalidated => model.container.take().map(|_| Cmd::Redraw),
    }
}
