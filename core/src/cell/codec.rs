use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use syncell_utils_rs::collections::{ParseValueError, ValueParse};

use crate::cell::shared_cell::SharedCell;

/// Textual form of the current value, produced under the cell lock.
impl<T: fmt::Display> fmt::Display for SharedCell<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let guard = self.inner.value.lock();
    fmt::Display::fmt(&*guard, f)
  }
}

impl<T: ValueParse> SharedCell<T> {
  /// Rebuilds the value in place from its textual form.
  ///
  /// Data availability is signalled whether or not the parse succeeds: a failed
  /// parse may still have deposited elements, and that partial content is
  /// visible to waiting poppers.
  pub fn parse_replace(&self, input: &str) -> Result<(), ParseValueError> {
    let mut guard = self.inner.value.lock();
    let result = guard.parse_into(input);
    self.inner.data_ready.notify_all();
    if let Err(error) = &result {
      tracing::debug!("textual parse failed: {}", error);
    }
    result
  }
}

impl<T: Serialize> SharedCell<T> {
  /// Serializes the current value to JSON under the cell lock.
  pub fn to_json(&self) -> Result<String, serde_json::Error> {
    let guard = self.inner.value.lock();
    serde_json::to_string(&*guard)
  }
}

impl<T: DeserializeOwned> SharedCell<T> {
  /// Replaces the value with one deserialized from JSON.
  ///
  /// A failed deserialization leaves the value untouched. Data availability is
  /// signalled after the attempt either way, matching [`SharedCell::parse_replace`].
  pub fn load_json(&self, input: &str) -> Result<(), serde_json::Error> {
    let mut guard = self.inner.value.lock();
    let result = match serde_json::from_str(input) {
      Ok(value) => {
        *guard = value;
        Ok(())
      }
      Err(error) => {
        tracing::debug!("json deserialize failed: {}", error);
        Err(error)
      }
    };
    self.inner.data_ready.notify_all();
    result
  }
}
