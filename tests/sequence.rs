//! Tests for the item sequence and its reorder mutation

use magdock::error::DockError;
use magdock::model::{ItemKey, Reordered, Sequence};

fn seq(items: &str) -> Sequence<char> {
    Sequence::new(items.chars().collect()).expect("distinct items")
}

fn order(s: &Sequence<char>) -> String {
    s.iter().collect()
}

#[test]
fn test_move_forward_uses_post_removal_index() {
    let mut s = seq("ABCDE");
    assert_eq!(s.reorder(&'A', 3), Reordered::Moved { from: 0, to: 3 });
    assert_eq!(order(&s), "BCDAE");
}

#[test]
fn test_move_backward() {
    let mut s = seq("ABCDE");
    assert_eq!(s.reorder(&'D', 1), Reordered::Moved { from: 3, to: 1 });
    assert_eq!(order(&s), "ADBCE");
}

#[test]
fn test_move_to_end() {
    let mut s = seq("ABCDE");
    s.reorder(&'B', 4);
    assert_eq!(order(&s), "ACDEB");
}

#[test]
fn test_last_slot_appends() {
    let mut s = seq("ABC");
    assert_eq!(s.reorder(&'A', 2), Reordered::Moved { from: 0, to: 2 });
    assert_eq!(order(&s), "BCA");
}

#[test]
fn test_same_slot_is_noop() {
    let mut s = seq("ABCDE");
    for (i, c) in "ABCDE".chars().enumerate() {
        assert_eq!(s.reorder(&c, i), Reordered::Unchanged);
    }
    assert_eq!(order(&s), "ABCDE");
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_target_past_end_is_a_contract_violation() {
    let mut s = seq("ABC");
    s.reorder(&'A', 3);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "out of range")]
fn test_key_target_past_end_is_a_contract_violation() {
    let mut s = seq("ABC");
    s.reorder_key(ItemKey(2), 7);
}

#[test]
#[cfg(not(debug_assertions))]
fn test_target_past_end_leaves_order_unchanged() {
    let mut s = seq("ABC");
    assert_eq!(s.reorder(&'A', 3), Reordered::Unchanged);
    assert_eq!(s.reorder(&'C', 7), Reordered::Unchanged);
    assert_eq!(order(&s), "ABC");
}

#[test]
fn test_reorder_preserves_permutation() {
    let mut s = seq("ABCDEFG");
    let moves = [('A', 6), ('G', 0), ('D', 2), ('C', 5), ('F', 1), ('B', 3)];
    for (item, target) in moves {
        s.reorder(&item, target);
        assert_eq!(s.len(), 7);
        let mut sorted: Vec<char> = s.iter().copied().collect();
        sorted.sort_unstable();
        assert_eq!(sorted.into_iter().collect::<String>(), "ABCDEFG");
        assert_eq!(s.position(&item), Some(target));
    }
}

#[test]
fn test_duplicates_rejected() {
    let err = Sequence::new(vec!['A', 'B', 'A']).unwrap_err();
    assert!(matches!(
        err,
        DockError::DuplicateItem {
            first: 0,
            second: 2
        }
    ));
}

#[test]
fn test_empty_sequence() {
    let s: Sequence<char> = Sequence::new(Vec::new()).unwrap();
    assert!(s.is_empty());
    assert_eq!(s.get(0), None);
    assert_eq!(s.key_at(0), None);
}

#[test]
fn test_keys_follow_items() {
    let mut s = seq("ABCDE");
    assert_eq!(s.key_at(2), Some(ItemKey(2)));

    s.reorder_key(ItemKey(0), 3);
    assert_eq!(order(&s), "BCDAE");
    assert_eq!(s.position_of_key(ItemKey(0)), Some(3));
    assert_eq!(s.item_by_key(ItemKey(0)), Some(&'A'));
    assert_eq!(
        s.keys().map(|k| k.0).collect::<Vec<_>>(),
        vec![1, 2, 3, 0, 4]
    );
}

#[test]
fn test_into_items_in_display_order() {
    let mut s = seq("ABCD");
    s.reorder(&'D', 0);
    assert_eq!(s.into_items(), vec!['D', 'A', 'B', 'C']);
}

#[test]
fn test_contains() {
    let s = seq("AB");
    assert!(s.contains(&'A'));
    assert!(!s.contains(&'Z'));
}
