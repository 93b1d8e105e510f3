use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::mem;

use syncell_utils_rs::collections::ValueSplice;

use crate::cell::ordering::{lock_pair, PairGuard};
use crate::cell::shared_cell::SharedCell;

impl<T: Clone> SharedCell<T> {
  /// Replaces this cell's value with a copy of `source`'s value.
  ///
  /// Both cells stay locked for the duration, so no thread observes a torn
  /// value. Copying a cell into itself is a no-op. Wakes every thread waiting
  /// for data in this cell, since the new content may satisfy several of them.
  pub fn copy_from(&self, source: &SharedCell<T>) {
    match lock_pair(self, source) {
      PairGuard::Same(_) => {}
      PairGuard::Distinct { a: mut dest, b: src } => {
        *dest = src.clone();
        self.inner.data_ready.notify_all();
      }
    }
  }
}

impl<T> SharedCell<T> {
  /// Exchanges the values of two cells under a pair lock.
  ///
  /// Swapping a cell with itself is a no-op. No availability is signalled.
  pub fn swap_with(&self, other: &SharedCell<T>) {
    match lock_pair(self, other) {
      PairGuard::Same(_) => {}
      PairGuard::Distinct {
        a: mut left,
        b: mut right,
      } => {
        mem::swap(&mut *left, &mut *right);
      }
    }
  }
}

impl<T: ValueSplice> SharedCell<T> {
  /// Moves elements out of `source` into this cell under a pair lock.
  ///
  /// Elements keep their order and transfer until this cell's value is full or
  /// the source is empty. When anything moved, wakes every thread waiting for
  /// data in this cell and every thread waiting for a slot in the source.
  /// Splicing a cell from itself moves nothing.
  pub fn splice_from(&self, source: &SharedCell<T>) -> usize {
    match lock_pair(self, source) {
      PairGuard::Same(_) => 0,
      PairGuard::Distinct {
        a: mut dest,
        b: mut src,
      } => {
        let moved = dest.splice(&mut src);
        if moved > 0 {
          self.inner.data_ready.notify_all();
          source.inner.slot_free.notify_all();
        }
        moved
      }
    }
  }
}

impl<T: PartialEq> SharedCell<T> {
  /// Compares the values of two cells for equality under a pair lock.
  ///
  /// Aliased handles take a single lock, but the answer still comes from the
  /// value's `PartialEq`: a non-reflexive value such as a NaN compares unequal
  /// even when both handles name one cell.
  pub fn value_eq(&self, other: &SharedCell<T>) -> bool {
    match lock_pair(self, other) {
      PairGuard::Same(guard) => *guard == *guard,
      PairGuard::Distinct { a, b } => *a == *b,
    }
  }
}

impl<T: Ord> SharedCell<T> {
  /// Orders the values of two cells under a pair lock.
  pub fn compare(&self, other: &SharedCell<T>) -> Ordering {
    match lock_pair(self, other) {
      PairGuard::Same(_) => Ordering::Equal,
      PairGuard::Distinct { a, b } => (*a).cmp(&*b),
    }
  }
}

impl<T: Hash> SharedCell<T> {
  /// Feeds the current value into `state` under the cell lock.
  pub fn hash_value<H: Hasher>(&self, state: &mut H) {
    let guard = self.inner.value.lock();
    guard.hash(state);
  }
}
