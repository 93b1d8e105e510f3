use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use syncell_utils_rs::collections::{RingDeque, ValueSize, ValueWriter};

use crate::cell::SharedCell;

#[derive(Debug)]
struct DropProbe {
  dropped: Arc<AtomicBool>,
}

impl Drop for DropProbe {
  fn drop(&mut self) {
    self.dropped.store(true, Ordering::SeqCst);
  }
}

#[test]
fn test_handle_count_tracks_clones() {
  let cell = SharedCell::new(1u64);
  assert_eq!(cell.handle_count(), 1);

  let second = cell.clone();
  let third = second.clone();
  assert_eq!(cell.handle_count(), 3);

  drop(second);
  drop(third);
  assert_eq!(cell.handle_count(), 1);
}

#[test]
fn test_value_dropped_with_last_handle() {
  let dropped = Arc::new(AtomicBool::new(false));
  let cell = SharedCell::new(DropProbe {
    dropped: dropped.clone(),
  });
  let extra = cell.clone();

  drop(cell);
  assert!(!dropped.load(Ordering::SeqCst));

  drop(extra);
  assert!(dropped.load(Ordering::SeqCst));
}

#[test]
fn test_same_cell_and_rebind() {
  let a = SharedCell::new(1u64);
  let mut b = SharedCell::new(2u64);
  assert!(!a.same_cell(&b));

  b.rebind(&a);
  assert!(a.same_cell(&b));
  assert_eq!(a.handle_count(), 2);
  assert_eq!(b.with_read(|value| *value), 1);
}

#[test]
fn test_rebind_releases_previous_cell() {
  let dropped = Arc::new(AtomicBool::new(false));
  let keeper = SharedCell::new(DropProbe {
    dropped: Arc::new(AtomicBool::new(false)),
  });
  let mut moving = SharedCell::new(DropProbe {
    dropped: dropped.clone(),
  });

  moving.rebind(&keeper);
  assert!(dropped.load(Ordering::SeqCst));
  assert!(moving.same_cell(&keeper));
}

#[test]
fn test_default_constructs_value_default() {
  let scalar = SharedCell::<u64>::default();
  assert_eq!(scalar.with_read(|value| *value), 0);

  let deque = SharedCell::<RingDeque<u64>>::default();
  assert!(deque.is_empty());
}

#[test]
fn test_snapshot_is_independent() {
  let cell = SharedCell::new(RingDeque::<u64>::bounded(4));
  cell.push(1u64);
  cell.push(2u64);

  let snapshot = cell.snapshot();
  assert_eq!(snapshot.handle_count(), 1);
  assert!(!snapshot.same_cell(&cell));

  cell.push(3u64);
  assert_eq!(cell.len(), ValueSize::Limited(3));
  assert_eq!(snapshot.len(), ValueSize::Limited(2));
}

#[test]
fn test_capacity_passthrough_and_clear() {
  let cell = SharedCell::new(RingDeque::<u64>::bounded(2));
  assert_eq!(cell.capacity(), ValueSize::Limited(2));
  assert!(cell.is_empty());
  assert!(!cell.is_full());

  cell.push(1u64);
  cell.push(2u64);
  assert!(cell.is_full());

  cell.clear();
  assert!(cell.is_empty());
  assert_eq!(cell.len(), ValueSize::Limited(0));
}

#[test]
fn test_clear_wakes_blocked_pusher() {
  let cell = SharedCell::new(RingDeque::<u64>::bounded(1));
  cell.push(1u64);

  thread::scope(|scope| {
    let pusher = scope.spawn(|| {
      cell.push(2u64);
    });
    thread::sleep(Duration::from_millis(50));
    cell.clear();
    pusher.join().unwrap();
  });

  assert_eq!(cell.with_read(|deque| deque.iter().copied().collect::<Vec<_>>()), vec![2]);
}

#[test]
fn test_lock_guard_gives_direct_access() {
  let cell = SharedCell::new(RingDeque::<u64>::unbounded());
  {
    let mut guard = cell.lock();
    guard.push(5u64).unwrap();
    assert!(cell.try_lock().is_none());
  }
  assert!(cell.try_lock().is_some());
  assert_eq!(cell.try_pop::<u64>(), Ok(5));
}

#[test]
fn test_guard_notify_wakes_popper() {
  let cell = SharedCell::new(RingDeque::<u64>::unbounded());

  thread::scope(|scope| {
    let popper = scope.spawn(|| cell.pop::<u64>());
    thread::sleep(Duration::from_millis(50));

    let mut guard = cell.lock();
    guard.push(9u64).unwrap();
    guard.notify_data_available();
    drop(guard);

    assert_eq!(popper.join().unwrap(), 9);
  });
}

#[test]
fn test_with_read_and_with_write() {
  let cell = SharedCell::new(10u64);
  assert_eq!(cell.with_read(|value| *value), 10);
  cell.with_write(|value| *value += 5);
  assert_eq!(cell.with_read(|value| *value), 15);
}
