use syncell_utils_rs::collections::{ValueArith, ValueError};

use crate::cell::ordering::{lock_triple, TripleGuard};
use crate::cell::shared_cell::SharedCell;

impl<T: ValueArith> SharedCell<T> {
  /// Stores `a + b` into this cell.
  ///
  /// Every distinct cell among the three is locked for the duration; any alias
  /// pattern is allowed, including the output doubling as a source. Wakes every
  /// thread waiting for data in this cell.
  pub fn add_from(&self, a: &SharedCell<T>, b: &SharedCell<T>) {
    self.store_binary(a, b, |lhs, rhs| Some(lhs.add(rhs)));
  }

  /// Stores `a - b` into this cell. Locking and signalling as [`SharedCell::add_from`].
  pub fn sub_from(&self, a: &SharedCell<T>, b: &SharedCell<T>) {
    self.store_binary(a, b, |lhs, rhs| Some(lhs.sub(rhs)));
  }

  /// Stores `a * b` into this cell. Locking and signalling as [`SharedCell::add_from`].
  pub fn mul_from(&self, a: &SharedCell<T>, b: &SharedCell<T>) {
    self.store_binary(a, b, |lhs, rhs| Some(lhs.mul(rhs)));
  }

  /// Stores `a / b` into this cell.
  ///
  /// On division by zero the output cell keeps its previous value, nothing is
  /// signalled, and `ValueError::DivideByZero` is returned.
  pub fn div_from(&self, a: &SharedCell<T>, b: &SharedCell<T>) -> Result<(), ValueError<T>> {
    if self.store_binary(a, b, T::checked_div) {
      Ok(())
    } else {
      Err(ValueError::DivideByZero)
    }
  }

  /// Locks the distinct cells among `self`, `a` and `b`, stores `op(a, b)` into
  /// `self` when it produces a value, and reports whether it did.
  fn store_binary<F>(&self, a: &SharedCell<T>, b: &SharedCell<T>, op: F) -> bool
  where
    F: Fn(&T, &T) -> Option<T>, {
    let stored = match lock_triple(self, a, b) {
      TripleGuard::AllSame(mut out) => match op(&out, &out) {
        Some(value) => {
          *out = value;
          true
        }
        None => false,
      },
      TripleGuard::OutIsA { mut out, b } => match op(&out, &b) {
        Some(value) => {
          *out = value;
          true
        }
        None => false,
      },
      TripleGuard::OutIsB { mut out, a } => match op(&a, &out) {
        Some(value) => {
          *out = value;
          true
        }
        None => false,
      },
      TripleGuard::SrcsAlias { mut out, src } => match op(&src, &src) {
        Some(value) => {
          *out = value;
          true
        }
        None => false,
      },
      TripleGuard::Distinct { mut out, a, b } => match op(&a, &b) {
        Some(value) => {
          *out = value;
          true
        }
        None => false,
      },
    };
    if stored {
      self.inner.data_ready.notify_all();
    }
    stored
  }
}

#[cfg(test)]
mod tests;
