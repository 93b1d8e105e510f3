use std::ops::ControlFlow;

use serde::{Deserialize, Serialize};

use crate::collections::element::Element;
use crate::collections::value::{PushError, ValueCapacity, ValueClear, ValueReader, ValueScan, ValueSplice, ValueWriter};
use crate::collections::value_size::ValueSize;

/// LIFO value backed by a `Vec`, optionally bounded.
///
/// Carries the transfer and traversal capabilities but deliberately no textual
/// form: a cell holding a `Stack` has no `Display` or parse surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack<E> {
  items: Vec<E>,
  capacity: Option<usize>,
}

impl<E> Stack<E> {
  pub fn new() -> Self {
    Self {
      items: Vec::new(),
      capacity: None,
    }
  }

  pub fn bounded(capacity: usize) -> Self {
    assert!(capacity > 0, "Capacity must be greater than zero");
    Self {
      items: Vec::with_capacity(capacity),
      capacity: Some(capacity),
    }
  }

  pub fn peek(&self) -> Option<&E> {
    self.items.last()
  }
}

impl<E> Default for Stack<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E> ValueCapacity for Stack<E> {
  fn len(&self) -> ValueSize {
    ValueSize::Limited(self.items.len())
  }

  fn capacity(&self) -> ValueSize {
    match self.capacity {
      Some(limit) => ValueSize::Limited(limit),
      None => ValueSize::Limitless,
    }
  }
}

impl<E> ValueClear for Stack<E> {
  fn clear(&mut self) {
    self.items.clear();
  }
}

impl<E: Element> ValueWriter<E> for Stack<E> {
  fn push(&mut self, element: E) -> Result<(), PushError<E>> {
    if matches!(self.capacity, Some(limit) if self.items.len() >= limit) {
      return Err(PushError::Full(element));
    }
    self.items.push(element);
    Ok(())
  }
}

impl<E: Element> ValueReader<E> for Stack<E> {
  /// Removes the most recently pushed element.
  fn pop(&mut self) -> Option<E> {
    self.items.pop()
  }
}

impl<E: Element> ValueSplice for Stack<E> {
  /// Drains `other` bottom-first, so the moved run lands on top of `self` in
  /// its original insertion order.
  fn splice(&mut self, other: &mut Self) -> usize {
    let take = match self.capacity {
      Some(limit) => limit.saturating_sub(self.items.len()).min(other.items.len()),
      None => other.items.len(),
    };
    self.items.extend(other.items.drain(..take));
    take
  }
}

impl<E: Element> ValueScan<E> for Stack<E> {
  /// Visits in insertion order, bottom of the stack first.
  fn scan<F>(&self, f: F) -> ControlFlow<()>
  where
    F: FnMut(&E) -> ControlFlow<()>, {
    self.items.iter().try_for_each(f)
  }

  fn scan_rev<F>(&self, f: F) -> ControlFlow<()>
  where
    F: FnMut(&E) -> ControlFlow<()>, {
    self.items.iter().rev().try_for_each(f)
  }

  fn scan_mut<F>(&mut self, f: F) -> ControlFlow<()>
  where
    F: FnMut(&mut E) -> ControlFlow<()>, {
    self.items.iter_mut().try_for_each(f)
  }
}

static_assertions::assert_impl_all!(Stack<String>: Send, Sync);
