use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::collections::value::{ValueCapacity, ValueClear, ValueMap};
use crate::collections::value_size::ValueSize;

/// Keyed value backed by a `HashMap`.
///
/// Exposes only the keyed capabilities: a cell holding a `KvMap` has no push or
/// pop surface and therefore no blocking transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KvMap<K, V>
where
  K: Eq + Hash, {
  entries: HashMap<K, V>,
}

impl<K: Eq + Hash, V> KvMap<K, V> {
  pub fn new() -> Self {
    Self {
      entries: HashMap::new(),
    }
  }

  pub fn contains_key(&self, key: &K) -> bool {
    self.entries.contains_key(key)
  }

  pub fn keys(&self) -> impl Iterator<Item = &K> {
    self.entries.keys()
  }
}

impl<K: Eq + Hash, V> Default for KvMap<K, V> {
  fn default() -> Self {
    Self::new()
  }
}

impl<K: Eq + Hash, V> ValueMap<K, V> for KvMap<K, V> {
  fn get(&self, key: &K) -> Option<&V> {
    self.entries.get(key)
  }

  fn insert(&mut self, key: K, value: V) -> Option<V> {
    self.entries.insert(key, value)
  }

  fn remove(&mut self, key: &K) -> Option<V> {
    self.entries.remove(key)
  }
}

impl<K: Eq + Hash, V> ValueCapacity for KvMap<K, V> {
  fn len(&self) -> ValueSize {
    ValueSize::Limited(self.entries.len())
  }

  fn capacity(&self) -> ValueSize {
    ValueSize::Limitless
  }
}

impl<K: Eq + Hash, V> ValueClear for KvMap<K, V> {
  fn clear(&mut self) {
    self.entries.clear();
  }
}

static_assertions::assert_impl_all!(KvMap<String, u64>: Send, Sync);
