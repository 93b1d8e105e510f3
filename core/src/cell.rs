mod arith;
mod blocking;
mod codec;
mod iter;
mod kv;
mod ordering;
mod shared_cell;
mod transfer;

pub use self::shared_cell::{CellGuard, SharedCell};
