use std::collections::VecDeque;
use std::fmt;
use std::ops::ControlFlow;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::collections::element::Element;
use crate::collections::parse::{ParseValueError, ValueParse};
use crate::collections::value::{PushError, ValueCapacity, ValueClear, ValueReader, ValueScan, ValueSplice, ValueWriter};
use crate::collections::value_size::ValueSize;

/// FIFO value backed by a `VecDeque`, optionally bounded.
///
/// This is the stock transfer-capable value: it carries every optional capability,
/// including the textual form `[a, b, c]` used by `Display` and [`ValueParse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingDeque<E> {
  items: VecDeque<E>,
  capacity: Option<usize>,
}

impl<E> RingDeque<E> {
  /// Creates a deque that rejects pushes once `capacity` elements are held.
  pub fn bounded(capacity: usize) -> Self {
    assert!(capacity > 0, "Capacity must be greater than zero");
    Self {
      items: VecDeque::with_capacity(capacity),
      capacity: Some(capacity),
    }
  }

  /// Creates a deque with no capacity limit.
  pub fn unbounded() -> Self {
    Self {
      items: VecDeque::new(),
      capacity: None,
    }
  }

  pub fn iter(&self) -> impl Iterator<Item = &E> {
    self.items.iter()
  }

  pub fn front(&self) -> Option<&E> {
    self.items.front()
  }

  pub fn back(&self) -> Option<&E> {
    self.items.back()
  }
}

impl<E> Default for RingDeque<E> {
  fn default() -> Self {
    Self::unbounded()
  }
}

impl<E> ValueCapacity for RingDeque<E> {
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

impl<E> ValueClear for RingDeque<E> {
  fn clear(&mut self) {
    self.items.clear();
  }
}

impl<E: Element> ValueWriter<E> for RingDeque<E> {
  fn push(&mut self, element: E) -> Result<(), PushError<E>> {
    if matches!(self.capacity, Some(limit) if self.items.len() >= limit) {
      return Err(PushError::Full(element));
    }
    self.items.push_back(element);
    Ok(())
  }
}

impl<E: Element> ValueReader<E> for RingDeque<E> {
  fn pop(&mut self) -> Option<E> {
    self.items.pop_front()
  }
}

impl<E: Element> ValueSplice for RingDeque<E> {
  fn splice(&mut self, other: &mut Self) -> usize {
    let take = match self.capacity {
      Some(limit) => limit.saturating_sub(self.items.len()).min(other.items.len()),
      None => other.items.len(),
    };
    self.items.extend(other.items.drain(..take));
    take
  }
}

impl<E: Element> ValueScan<E> for RingDeque<E> {
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

impl<E: fmt::Display> fmt::Display for RingDeque<E> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[")?;
    for (index, element) in self.items.iter().enumerate() {
      if index > 0 {
        write!(f, ", ")?;
      }
      write!(f, "{element}")?;
    }
    write!(f, "]")
  }
}

/// Parses the `[a, b, c]` form produced by `Display`.
///
/// Elements accepted before a failure stay in the deque.
impl<E> ValueParse for RingDeque<E>
where
  E: Element + FromStr,
  E::Err: fmt::Display,
{
  fn parse_into(&mut self, input: &str) -> Result<(), ParseValueError> {
    self.items.clear();
    let body = input
      .trim()
      .strip_prefix('[')
      .and_then(|rest| rest.strip_suffix(']'))
      .ok_or(ParseValueError::Delimiters)?
      .trim();
    if body.is_empty() {
      return Ok(());
    }
    for (index, raw) in body.split(',').enumerate() {
      let element = raw.trim().parse::<E>().map_err(|error| ParseValueError::Element {
        index,
        message: error.to_string(),
      })?;
      if self.push(element).is_err() {
        return Err(ParseValueError::CapacityExceeded { pushed: index });
      }
    }
    Ok(())
  }
}

static_assertions::assert_impl_all!(RingDeque<u64>: Send, Sync);
