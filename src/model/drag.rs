//! Drag session state
//!
//! Created on press over an item, updated on every move, cleared on release.
//! Only the latest pointer position is kept; geometry is always recomputed
//! from current state.

use super::layout::Point;
use super::sequence::ItemKey;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragSession {
    /// Identity of the pressed item, `None` when idle
    pub dragged: Option<ItemKey>,
    /// Latest pointer position in global coordinates
    pub pointer: Option<Point>,
}

impl DragSession {
    pub fn begin(key: ItemKey, pointer: Point) -> Self {
        Self {
            dragged: Some(key),
            pointer: Some(pointer),
        }
    }

    pub fn is_active(&self) -> bool {
        self.dragged.is_some()
    }

    /// Pointer position that drives magnification, present only mid-drag
    pub fn active_pointer(&self) -> Option<Point> {
        self.dragged.and(self.pointer)
    }

    pub fn end(&mut self) {
        self.dragged = None;
        self.pointer = None;
    }
}
