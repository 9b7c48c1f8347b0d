use super::*;

// =============================================================
// reorder
// =============================================================

#[test]
fn reorder_moves_element_forward() {
    let mut list = vec!["a", "b", "c", "d"];
    assert!(reorder(&mut list, 0, Some(2)));
    assert_eq!(list, vec!["b", "c", "a", "d"]);
}

#[test]
fn reorder_moves_element_backward() {
    let mut list = vec!["a", "b", "c", "d"];
    assert!(reorder(&mut list, 3, Some(1)));
    assert_eq!(list, vec!["a", "d", "b", "c"]);
}

#[test]
fn reorder_is_noop_without_destination() {
    let mut list = vec![1, 2, 3];
    assert!(!reorder(&mut list, 0, None));
    assert_eq!(list, vec![1, 2, 3]);
}

#[test]
fn reorder_is_noop_when_destination_equals_source() {
    let mut list = vec![1, 2, 3];
    assert!(!reorder(&mut list, 1, Some(1)));
    assert_eq!(list, vec![1, 2, 3]);
}

#[test]
fn reorder_is_noop_when_out_of_bounds() {
    let mut list = vec![1, 2, 3];
    assert!(!reorder(&mut list, 5, Some(0)));
    assert!(!reorder(&mut list, 0, Some(5)));
    assert_eq!(list, vec![1, 2, 3]);
}

#[test]
fn reorder_preserves_relative_order_of_unmoved_elements() {
    // Exhaustive over every (src, dst) pair for a small list.
    let base: Vec<usize> = (0..6).collect();
    for src in 0..base.len() {
        for dst in 0..base.len() {
            let mut list = base.clone();
            reorder(&mut list, src, Some(dst));
            assert_eq!(list[dst], src, "moved element lands at dst");
            let rest: Vec<usize> = list.iter().copied().filter(|v| *v != src).collect();
            let expected: Vec<usize> = base.iter().copied().filter(|v| *v != src).collect();
            assert_eq!(rest, expected, "unmoved elements keep relative order");
        }
    }
}

// =============================================================
// remove_combined
// =============================================================

#[test]
fn remove_combined_removes_and_returns_element() {
    let mut list = vec!["a", "b", "c"];
    assert_eq!(remove_combined(&mut list, 1), Some("b"));
    assert_eq!(list, vec!["a", "c"]);
}

#[test]
fn remove_combined_out_of_bounds_is_noop() {
    let mut list = vec!["a"];
    assert_eq!(remove_combined(&mut list, 3), None);
    assert_eq!(list, vec!["a"]);
}

// =============================================================
// move_between
// =============================================================

#[test]
fn move_between_transfers_element() {
    let mut from = vec![1, 2, 3];
    let mut to = vec![10, 20];
    assert!(move_between(&mut from, &mut to, 1, 1));
    assert_eq!(from, vec![1, 3]);
    assert_eq!(to, vec![10, 2, 20]);
}

#[test]
fn move_between_clamps_destination_to_end() {
    let mut from = vec![1];
    let mut to = vec![10];
    assert!(move_between(&mut from, &mut to, 0, 99));
    assert_eq!(from, Vec::<i32>::new());
    assert_eq!(to, vec![10, 1]);
}

#[test]
fn move_between_bad_source_is_noop() {
    let mut from = vec![1];
    let mut to = vec![10];
    assert!(!move_between(&mut from, &mut to, 4, 0));
    assert_eq!(from, vec![1]);
    assert_eq!(to, vec![10]);
}
