use std::ops::ControlFlow;

use thiserror::Error;

use crate::collections::value_size::ValueSize;

/// An error that occurs when a cell-level transfer or arithmetic operation fails.
#[derive(Error, Debug, PartialEq)]
pub enum ValueError<E> {
  #[error("Failed to push an element: {0:?}")]
  Full(E),
  #[error("Failed to pop an element")]
  Empty,
  #[error("Division by zero")]
  DivideByZero,
}

/// The error returned by [`ValueWriter::push`] when no slot is free.
///
/// The rejected element is handed back to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PushError<E> {
  #[error("Failed to push an element: {0:?}")]
  Full(E),
}

impl<E> From<PushError<E>> for ValueError<E> {
  fn from(error: PushError<E>) -> Self {
    match error {
      PushError::Full(element) => ValueError::Full(element),
    }
  }
}

/// Size and capacity view of a value.
///
/// Serves as the base trait for [`ValueWriter`] and [`ValueReader`]: the fullness and
/// emptiness predicates defined here decide when a blocking transfer has to wait.
pub trait ValueCapacity {
  /// Returns the current number of elements as a [`ValueSize`].
  fn len(&self) -> ValueSize;

  /// Returns the maximum number of elements the value can hold.
  ///
  /// Returns `ValueSize::Limitless` for unbounded values.
  fn capacity(&self) -> ValueSize;

  fn is_empty(&self) -> bool {
    self.len().to_usize() == 0
  }

  /// An unbounded value is never full, so a push into it never has to wait.
  fn is_full(&self) -> bool {
    match self.capacity() {
      ValueSize::Limitless => false,
      ValueSize::Limited(limit) => self.len().to_usize() >= limit,
    }
  }
}

/// Reset to the empty state, dropping all elements.
pub trait ValueClear {
  fn clear(&mut self);
}

/// Write side of a transfer-capable value.
///
/// Used in situations where the appropriate lock is already acquired; the cell layer
/// wraps these calls with mutual exclusion and slot-availability waiting.
pub trait ValueWriter<E>: ValueCapacity {
  /// Appends an element.
  ///
  /// # Returns
  ///
  /// * `Ok(())` - if the element was accepted
  /// * `Err(PushError::Full(element))` - if no slot is free; the element is handed back
  ///
  /// Must accept whenever [`ValueCapacity::is_full`] is `false`.
  fn push(&mut self, element: E) -> Result<(), PushError<E>>;
}

/// Read side of a transfer-capable value.
pub trait ValueReader<E>: ValueCapacity {
  /// Removes and returns the next element, or `None` if the value is empty.
  fn pop(&mut self) -> Option<E>;
}

/// Bulk move of elements between two values of the same type.
pub trait ValueSplice {
  /// Moves elements out of `other` into `self`, keeping their order, until
  /// `self` is full or `other` is empty. Returns how many elements moved.
  fn splice(&mut self, other: &mut Self) -> usize;
}

/// Element traversal with early stop.
///
/// The callback decides after each element whether to continue; `ControlFlow::Break`
/// ends the traversal and is propagated to the caller.
pub trait ValueScan<E> {
  /// Visits the elements in front-to-back order.
  fn scan<F>(&self, f: F) -> ControlFlow<()>
  where
    F: FnMut(&E) -> ControlFlow<()>;

  /// Visits the elements in back-to-front order.
  fn scan_rev<F>(&self, f: F) -> ControlFlow<()>
  where
    F: FnMut(&E) -> ControlFlow<()>;

  /// Visits the elements in front-to-back order through mutable references.
  fn scan_mut<F>(&mut self, f: F) -> ControlFlow<()>
  where
    F: FnMut(&mut E) -> ControlFlow<()>;
}

/// Keyed access for associative values.
pub trait ValueMap<K, V> {
  fn get(&self, key: &K) -> Option<&V>;

  /// Inserts a pair, returning the previous value bound to the key if any.
  fn insert(&mut self, key: K, value: V) -> Option<V>;

  fn remove(&mut self, key: &K) -> Option<V>;
}
