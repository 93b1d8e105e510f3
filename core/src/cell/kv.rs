use syncell_utils_rs::collections::ValueMap;

use crate::cell::shared_cell::SharedCell;

impl<T> SharedCell<T> {
  /// Returns a copy of the value bound to `key`, if any.
  pub fn kv_get<K, V>(&self, key: &K) -> Option<V>
  where
    T: ValueMap<K, V>,
    V: Clone, {
    let guard = self.inner.value.lock();
    guard.get(key).cloned()
  }

  /// Binds `key` to `value`, returning the previous binding if any.
  ///
  /// Signals data availability on this cell.
  pub fn kv_insert<K, V>(&self, key: K, value: V) -> Option<V>
  where
    T: ValueMap<K, V>, {
    let mut guard = self.inner.value.lock();
    let previous = guard.insert(key, value);
    self.inner.data_ready.notify_one();
    previous
  }

  /// Removes the binding for `key`, returning the value if one was bound.
  ///
  /// Signals slot availability on this cell.
  pub fn kv_remove<K, V>(&self, key: &K) -> Option<V>
  where
    T: ValueMap<K, V>, {
    let mut guard = self.inner.value.lock();
    let removed = guard.remove(key);
    self.inner.slot_free.notify_one();
    removed
  }
}
