use std::ops::ControlFlow;

use syncell_utils_rs::collections::{Element, ValueScan};

use crate::cell::shared_cell::SharedCell;

impl<T> SharedCell<T> {
  /// Visits every element front to back under the cell lock.
  ///
  /// The lock is held for the whole traversal; `ControlFlow::Break` from the
  /// callback ends it early. The callback must not touch this cell again, the
  /// cell mutex is not reentrant.
  pub fn for_each<E, F>(&self, f: F) -> ControlFlow<()>
  where
    E: Element,
    T: ValueScan<E>,
    F: FnMut(&E) -> ControlFlow<()>, {
    let guard = self.inner.value.lock();
    guard.scan(f)
  }

  /// Visits every element back to front under the cell lock.
  pub fn for_each_rev<E, F>(&self, f: F) -> ControlFlow<()>
  where
    E: Element,
    T: ValueScan<E>,
    F: FnMut(&E) -> ControlFlow<()>, {
    let guard = self.inner.value.lock();
    guard.scan_rev(f)
  }

  /// Visits every element with exclusive access, allowing in-place updates.
  ///
  /// In-place updates change no element counts, so nothing is signalled.
  pub fn apply<E, F>(&self, f: F) -> ControlFlow<()>
  where
    E: Element,
    T: ValueScan<E>,
    F: FnMut(&mut E) -> ControlFlow<()>, {
    let mut guard = self.inner.value.lock();
    guard.scan_mut(f)
  }
}

#[cfg(test)]
mod tests;
