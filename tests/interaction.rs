//! Tests for the press → move → release interaction

mod common;

use common::{abcde, at_x, move_to, order, press, release, test_model};
use magdock::commands::Cmd;
use magdock::messages::{LayoutMsg, Msg, PointerMsg};
use magdock::model::{ItemKey, Rect};
use magdock::update::update;

// ============================================================================
// Press
// ============================================================================

#[test]
fn test_press_starts_drag() {
    let (mut model, _) = abcde();
    let cmd = update(
        &mut model,
        Msg::Pointer(PointerMsg::Press {
            index: 1,
            position: at_x(76.0),
        }),
    );
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert!(model.is_dragging());
    assert_eq!(model.dragged_item(), Some(&'B'));
    assert_eq!(model.dragged_index(), Some(1));
}

#[test]
fn test_press_magnifies_around_pointer() {
    let (mut model, _) = abcde();
    assert_eq!(model.item_scales(), vec![1.0; 5]);

    press(&mut model, 2);
    let scales = model.item_scales();
    assert_eq!(scales[2], 2.0);
    assert!(scales[1] > 1.0 && scales[1] < 2.0);
    assert_eq!(scales[1], scales[3]);
    assert_eq!(scales[0], 1.0, "152px away is outside the radius");
}

#[test]
fn test_press_out_of_range_is_ignored() {
    let (mut model, _) = abcde();
    let cmd = update(
        &mut model,
        Msg::Pointer(PointerMsg::Press {
            index: 5,
            position: at_x(0.0),
        }),
    );
    assert_eq!(cmd, None);
    assert!(!model.is_dragging());
}

#[test]
fn test_second_press_is_ignored() {
    let (mut model, _) = abcde();
    press(&mut model, 0);
    let cmd = update(
        &mut model,
        Msg::Pointer(PointerMsg::Press {
            index: 3,
            position: at_x(228.0),
        }),
    );
    assert_eq!(cmd, None);
    assert_eq!(model.dragged_item(), Some(&'A'));
}

// ============================================================================
// Move
// ============================================================================

#[test]
fn test_drag_first_item_to_slot_three() {
    let (mut model, _) = abcde();
    press(&mut model, 0);

    let cmd = move_to(&mut model, 228.0);
    assert_eq!(cmd, Some(Cmd::AnimationFrame));
    assert_eq!(order(&model), "BCDAE");
    assert_eq!(model.dragged_index(), Some(3));
    assert!(model.is_animating());
}

#[test]
fn test_move_within_current_slot_redraws_without_reorder() {
    let (mut model, _) = abcde();
    press(&mut model, 0);

    let cmd = move_to(&mut model, 20.0);
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(order(&model), "ABCDE");
    assert!(!model.is_animating());
    assert!(model.item_scales()[0] < 2.0);
}

#[test]
fn test_dragged_identity_survives_reorders() {
    let (mut model, _) = abcde();
    press(&mut model, 1);

    for x in [0.0, 152.0, 304.0, 228.0, 76.0, -40.0] {
        move_to(&mut model, x);
        assert_eq!(model.dragged_item(), Some(&'B'));
        assert_eq!(model.drag.dragged, Some(ItemKey(1)));
    }
    assert_eq!(order(&model), "BACDE");
}

#[test]
fn test_drag_clamps_at_both_ends() {
    let (mut model, _) = abcde();
    press(&mut model, 2);

    move_to(&mut model, 10_000.0);
    assert_eq!(order(&model), "ABDEC");

    move_to(&mut model, -10_000.0);
    assert_eq!(order(&model), "CABDE");
}

#[test]
fn test_move_when_idle_is_ignored() {
    let (mut model, _) = abcde();
    assert_eq!(move_to(&mut model, 228.0), None);
    assert_eq!(order(&model), "ABCDE");
    assert_eq!(model.drag.pointer, None);
}

#[test]
fn test_unmeasured_container_never_reorders() {
    let (mut model, _) = abcde();
    model.container = None;
    press(&mut model, 0);

    assert_eq!(move_to(&mut model, 228.0), None);
    assert_eq!(order(&model), "ABCDE");
    assert_eq!(model.item_scales(), vec![1.0; 5]);
}

#[test]
fn test_zero_size_container_counts_as_unmeasured() {
    let (mut model, _) = abcde();
    model.container = Some(Rect::new(0.0, 0.0, 0.0, 0.0));
    press(&mut model, 0);

    assert_eq!(move_to(&mut model, 228.0), None);
    assert_eq!(order(&model), "ABCDE");
}

#[test]
fn test_single_item_never_moves() {
    let (mut model, _) = test_model(&['A']);
    press(&mut model, 0);
    assert_eq!(move_to(&mut model, 500.0), Some(Cmd::Redraw));
    assert_eq!(order(&model), "A");
}

// ============================================================================
// Release
// ============================================================================

#[test]
fn test_release_ends_drag_and_settles() {
    let (mut model, _) = abcde();
    press(&mut model, 0);
    move_to(&mut model, 228.0);

    let cmd = release(&mut model);
    assert_eq!(cmd, Some(Cmd::AnimationFrame));
    assert!(!model.is_dragging());
    assert_eq!(model.dragged_item(), None);
    assert_eq!(model.item_scales(), vec![1.0; 5]);
    assert!(model.is_animating());
    assert_eq!(model.animation.progress(), 0.0);
    assert_eq!(order(&model), "BCDAE");
}

#[test]
fn test_tap_without_move_never_reorders() {
    let (mut model, _) = abcde();
    press(&mut model, 3);
    release(&mut model);
    assert_eq!(order(&model), "ABCDE");
    assert!(!model.is_dragging());
}

#[test]
fn test_release_when_idle_is_ignored() {
    let (mut model, _) = abcde();
    assert_eq!(release(&mut model), None);
    assert!(!model.is_animating());
}

#[test]
fn test_new_drag_after_release() {
    let (mut model, _) = abcde();
    press(&mut model, 0);
    move_to(&mut model, 304.0);
    release(&mut model);
    assert_eq!(order(&model), "BCDEA");

    press(&mut model, 4);
    assert_eq!(model.dragged_item(), Some(&'A'));
    move_to(&mut model, 0.0);
    release(&mut model);
    assert_eq!(order(&model), "ABCDE");
}

// ============================================================================
// Layout
// ============================================================================

#[test]
fn test_measure_and_invalidate() {
    let (mut model, _) = abcde();
    let rect = Rect::new(10.0, 20.0, 380.0, 64.0);

    let cmd = update(&mut model, Msg::Layout(LayoutMsg::ContainerMeasured(rect)));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.container, Some(rect));

    let cmd = update(&mut model, Msg::Layout(LayoutMsg::ContainerMeasured(rect)));
    assert_eq!(cmd, None, "same bounds need no redraw");

    let cmd = update(&mut model, Msg::Layout(LayoutMsg::ContainerInvalidated));
    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.container, None);

    let cmd = update(&mut model, Msg::Layout(LayoutMsg::ContainerInvalidated));
    assert_eq!(cmd, None);
}

#[test]
fn test_moved_container_shifts_target_slot() {
    let (mut model, _) = abcde();
    model.container = Some(Rect::new(100.0, 0.0, 380.0, 64.0));
    press(&mut model, 0);

    // Global 228 is local 128, which rounds to slot 2
    move_to(&mut model, 228.0);
    assert_eq!(order(&model), "BCADE");
}
