use std::ops::ControlFlow;

use syncell_utils_rs::collections::RingDeque;

use crate::cell::SharedCell;

fn deque_cell(values: &[u64]) -> SharedCell<RingDeque<u64>> {
  let cell = SharedCell::new(RingDeque::unbounded());
  for value in values {
    cell.push(*value);
  }
  cell
}

#[test]
fn test_for_each_visits_in_order() {
  let cell = deque_cell(&[1, 2, 3]);
  let mut seen = Vec::new();

  let flow = cell.for_each(|element: &u64| {
    seen.push(*element);
    ControlFlow::Continue(())
  });

  assert_eq!(flow, ControlFlow::Continue(()));
  assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn test_for_each_stops_early() {
  let cell = deque_cell(&[1, 2, 3, 4, 5]);
  let mut visited = 0;

  let flow = cell.for_each(|element: &u64| {
    visited += 1;
    if *element == 2 {
      ControlFlow::Break(())
    } else {
      ControlFlow::Continue(())
    }
  });

  assert_eq!(flow, ControlFlow::Break(()));
  assert_eq!(visited, 2);
}

#[test]
fn test_for_each_rev_visits_back_to_front() {
  let cell = deque_cell(&[1, 2, 3]);
  let mut seen = Vec::new();

  cell.for_each_rev(|element: &u64| {
    seen.push(*element);
    ControlFlow::Continue(())
  });

  assert_eq!(seen, vec![3, 2, 1]);
}

#[test]
fn test_apply_mutates_in_place() {
  let cell = deque_cell(&[1, 2, 3]);

  cell.apply(|element: &mut u64| {
    *element *= 10;
    ControlFlow::Continue(())
  });

  assert_eq!(cell.pop::<u64>(), 10);
  assert_eq!(cell.pop::<u64>(), 20);
  assert_eq!(cell.pop::<u64>(), 30);
}

#[test]
fn test_apply_stops_early() {
  let cell = deque_cell(&[1, 2, 3]);

  cell.apply(|element: &mut u64| {
    if *element == 2 {
      return ControlFlow::Break(());
    }
    *element += 100;
    ControlFlow::Continue(())
  });

  assert_eq!(cell.pop::<u64>(), 101);
  assert_eq!(cell.pop::<u64>(), 2);
  assert_eq!(cell.pop::<u64>(), 3);
}
