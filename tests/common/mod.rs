//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::rc::Rc;

use magdock::animation::ManualClock;
use magdock::messages::{Msg, PointerMsg};
use magdock::model::{DockLayout, DockModel, Point, Rect};
use magdock::update::update;

/// itemSize=64, spacing=12 (step=76), factor 2.0, radius 150, no padding
pub fn test_layout() -> DockLayout {
    DockLayout {
        item_size: 64.0,
        spacing: 12.0,
        magnification_factor: 2.0,
        magnification_radius: 150.0,
        padding: 0.0,
    }
}

/// Container at the origin so global and local coordinates coincide
pub fn test_container(len: usize) -> Rect {
    Rect::new(0.0, 0.0, len as f64 * 76.0, 64.0)
}

/// Measured model over `items` driven by a manual clock
pub fn test_model(items: &[char]) -> (DockModel<char>, Rc<ManualClock>) {
    let clock = Rc::new(ManualClock::new());
    let mut model = DockModel::new(items.to_vec(), test_layout())
        .expect("valid test model")
        .with_clock(clock.clone());
    model.container = Some(test_container(items.len()));
    (model, clock)
}

pub fn abcde() -> (DockModel<char>, Rc<ManualClock>) {
    test_model(&['A', 'B', 'C', 'D', 'E'])
}

pub fn order(model: &DockModel<char>) -> String {
    model.sequence.iter().collect()
}

/// Point on the row at local x, vertically centred
pub fn at_x(x: f64) -> Point {
    Point::new(x, 32.0)
}

pub fn press(model: &mut DockModel<char>, index: usize) {
    let position = at_x(index as f64 * 76.0);
    update(model, Msg::Pointer(PointerMsg::Press { index, position }));
}

pub fn move_to(model: &mut DockModel<char>, x: f64) -> Option<magdock::Cmd> {
    update(model, Msg::Pointer(PointerMsg::Move { position: at_x(x) }))
}

pub fn release(model: &mut DockModel<char>) -> Option<magdock::Cmd> {
    update(model, Msg::Pointer(PointerMsg::Release))
}
