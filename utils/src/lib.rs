pub mod collections;

pub use collections::{
  Element, KvMap, ParseValueError, PushError, RingDeque, Stack, ValueArith, ValueCapacity, ValueClear, ValueError,
  ValueMap, ValueParse, ValueReader, ValueScan, ValueSize, ValueSplice, ValueWriter,
};
