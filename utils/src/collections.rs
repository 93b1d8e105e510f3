pub mod arith;
pub mod element;
pub mod kv_map;
pub mod parse;
pub mod ring_deque;
pub mod stack;
pub mod value;
pub mod value_size;

pub use arith::ValueArith;
pub use element::Element;
pub use kv_map::KvMap;
pub use parse::{ParseValueError, ValueParse};
pub use ring_deque::RingDeque;
pub use stack::Stack;
pub use value::{
  PushError, ValueCapacity, ValueClear, ValueError, ValueMap, ValueReader, ValueScan, ValueSplice, ValueWriter,
};
pub use value_size::ValueSize;
