use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use parking_lot::{Condvar, Mutex, MutexGuard};
use syncell_utils_rs::collections::{RingDeque, ValueCapacity, ValueClear, ValueSize};

use crate::cell::ordering;

/// Shared state of one cell: the value, its mutex, and the two availability signals.
#[derive(Debug)]
pub(crate) struct CellInner<T> {
  pub(crate) value: Mutex<T>,
  pub(crate) data_ready: Condvar,
  pub(crate) slot_free: Condvar,
  pub(crate) seq: u64,
}

/// Reference-counted handle to a lock-protected value.
///
/// Cloning a handle attaches it to the same cell; dropping the last handle drops
/// the value. Every operation locks internally, so a `SharedCell` can be shared
/// freely across threads as long as the value type is `Send`.
#[derive(Debug)]
pub struct SharedCell<T> {
  pub(crate) inner: Arc<CellInner<T>>,
}

impl<T> SharedCell<T> {
  /// Wraps a value in a fresh cell with a single handle.
  pub fn new(value: T) -> Self {
    Self {
      inner: Arc::new(CellInner {
        value: Mutex::new(value),
        data_ready: Condvar::new(),
        slot_free: Condvar::new(),
        seq: ordering::next_seq(),
      }),
    }
  }

  /// Rebinds this handle to `source`'s cell, releasing the one it held.
  ///
  /// This is a handle-level operation: no value is copied and no value lock is
  /// taken. The abandoned cell is dropped if this was its last handle.
  pub fn rebind(&mut self, source: &SharedCell<T>) {
    self.inner = Arc::clone(&source.inner);
  }

  /// Returns whether two handles refer to the same cell.
  pub fn same_cell(&self, other: &SharedCell<T>) -> bool {
    Arc::ptr_eq(&self.inner, &other.inner)
  }

  /// The number of handles currently attached to this cell.
  pub fn handle_count(&self) -> usize {
    Arc::strong_count(&self.inner)
  }

  /// Locks the cell and returns a guard with direct access to the value.
  ///
  /// Mutations made through the guard do not signal availability; call the
  /// guard's notify methods when a mutation produces data or frees slots.
  pub fn lock(&self) -> CellGuard<'_, T> {
    CellGuard {
      guard: self.inner.value.lock(),
      cell: self,
    }
  }

  /// Non-blocking variant of [`SharedCell::lock`].
  pub fn try_lock(&self) -> Option<CellGuard<'_, T>> {
    self.inner.value.try_lock().map(|guard| CellGuard { guard, cell: self })
  }

  /// Runs `f` with shared access to the value.
  pub fn with_read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
    let guard = self.inner.value.lock();
    f(&guard)
  }

  /// Runs `f` with exclusive access to the value.
  ///
  /// As with [`SharedCell::lock`], availability is not signalled.
  pub fn with_write<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = self.inner.value.lock();
    f(&mut guard)
  }
}

impl<T> Clone for SharedCell<T> {
  /// Attaches a new handle to the same cell.
  fn clone(&self) -> Self {
    Self {
      inner: Arc::clone(&self.inner),
    }
  }
}

impl<T: Default> Default for SharedCell<T> {
  fn default() -> Self {
    Self::new(T::default())
  }
}

impl<T: Clone> SharedCell<T> {
  /// Clones the current value into a brand-new cell with one handle.
  ///
  /// Only the source cell is locked. The new cell has no other handles yet, so
  /// nothing is signalled.
  pub fn snapshot(&self) -> Self {
    let guard = self.inner.value.lock();
    Self::new(guard.clone())
  }
}

impl<T: ValueCapacity> SharedCell<T> {
  pub fn len(&self) -> ValueSize {
    self.inner.value.lock().len()
  }

  pub fn capacity(&self) -> ValueSize {
    self.inner.value.lock().capacity()
  }

  pub fn is_empty(&self) -> bool {
    self.inner.value.lock().is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.inner.value.lock().is_full()
  }
}

impl<T: ValueClear> SharedCell<T> {
  /// Empties the value and wakes every thread waiting for a free slot.
  pub fn clear(&self) {
    let mut guard = self.inner.value.lock();
    guard.clear();
    self.inner.slot_free.notify_all();
  }
}

/// RAII guard over a cell's value, handed out by [`SharedCell::lock`].
///
/// Dereferences to the value. Dropping the guard releases the cell lock without
/// signalling; the notify methods wake blocked peers explicitly.
pub struct CellGuard<'a, T> {
  cell: &'a SharedCell<T>,
  guard: MutexGuard<'a, T>,
}

impl<T> CellGuard<'_, T> {
  /// Wakes every thread waiting for data in this cell.
  pub fn notify_data_available(&self) {
    self.cell.inner.data_ready.notify_all();
  }

  /// Wakes every thread waiting for a free slot in this cell.
  pub fn notify_slot_available(&self) {
    self.cell.inner.slot_free.notify_all();
  }
}

impl<T> Deref for CellGuard<'_, T> {
  type Target = T;

  fn deref(&self) -> &T {
    &self.guard
  }
}

impl<T> DerefMut for CellGuard<'_, T> {
  fn deref_mut(&mut self) -> &mut T {
    &mut self.guard
  }
}

static_assertions::assert_impl_all!(SharedCell<RingDeque<u64>>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SharedCell<u64>: Send, Sync, Clone);

#[cfg(test)]
mod tests;
