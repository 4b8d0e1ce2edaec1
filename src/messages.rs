//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::{Point, Rect};

/// Pointer input: the entire input surface of the dock
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerMsg {
    /// Pointer pressed over the item at slot `index`
    Press { index: usize, position: Point },
    /// Pointer moved (global coordinates)
    Move { position: Point },
    /// Pointer released
    Release,
}

/// Frame clock messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationMsg {
    /// Advance the settle animation to the clock's current time
    Tick,
}

/// Container measurement messages from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LayoutMsg {
    /// The dock container was laid out at these global bounds
    ContainerMeasured(Rect),
    /// The container is no longer measured (e.g. window minimized)
    ContainerInvalidated,
}

/// Top-level message type
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Msg {
    Pointer(PointerMsg),
    Animation(AnimationMsg),
    Layout(LayoutMsg),
}

impl From<PointerMsg> for Msg {
    fn from(msg: PointerMsg) -> Self {
        Msg::Pointer(msg)
    }
}

impl From<AnimationMsg> for Msg {
    fn from(msg: AnimationMsg) -> Self {
        Msg::Animation(msg)
    }
}

impl From<LayoutMsg> for Msg {
    fn from(msg: LayoutMsg) -> Self {
        Msg::Layout(msg)
    }
}
