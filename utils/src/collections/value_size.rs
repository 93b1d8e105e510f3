use std::cmp::Ordering;
use std::ops::Add;

/// The number of elements a value holds, or the number it can hold.
#[derive(Debug, Clone, Copy)]
pub enum ValueSize {
  /// No limit.
  Limitless,
  /// An exact count.
  Limited(usize),
}

impl ValueSize {
  pub fn limitless() -> Self {
    ValueSize::Limitless
  }

  pub fn limited(size: usize) -> Self {
    ValueSize::Limited(size)
  }

  pub fn is_limitless(&self) -> bool {
    matches!(self, ValueSize::Limitless)
  }

  pub fn to_option(&self) -> Option<usize> {
    match self {
      ValueSize::Limitless => None,
      ValueSize::Limited(size) => Some(*size),
    }
  }

  pub fn to_usize(&self) -> usize {
    match self {
      ValueSize::Limitless => usize::MAX,
      ValueSize::Limited(size) => *size,
    }
  }
}

impl Add for ValueSize {
  type Output = ValueSize;

  fn add(self, other: ValueSize) -> ValueSize {
    match (self, other) {
      (ValueSize::Limitless, _) | (_, ValueSize::Limitless) => ValueSize::Limitless,
      (ValueSize::Limited(lhs), ValueSize::Limited(rhs)) => ValueSize::Limited(lhs + rhs),
    }
  }
}

impl PartialEq for ValueSize {
  fn eq(&self, other: &Self) -> bool {
    matches!((self, other), (ValueSize::Limitless, ValueSize::Limitless))
      || matches!((self, other), (ValueSize::Limited(lhs), ValueSize::Limited(rhs)) if lhs == rhs)
  }
}

impl PartialOrd for ValueSize {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    match (self, other) {
      (ValueSize::Limitless, ValueSize::Limitless) => Some(Ordering::Equal),
      (ValueSize::Limitless, _) => Some(Ordering::Greater),
      (_, ValueSize::Limitless) => Some(Ordering::Less),
      (ValueSize::Limited(lhs), ValueSize::Limited(rhs)) => lhs.partial_cmp(rhs),
    }
  }
}
