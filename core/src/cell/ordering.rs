use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::MutexGuard;

use crate::cell::shared_cell::SharedCell;

static CELL_SEQ: AtomicU64 = AtomicU64::new(0);

/// Hands out the creation-sequence number for the next cell.
///
/// The sequence is the total order for acquiring multiple cell locks: lower
/// sequence first, always. Creation order is stable for the life of the process,
/// unlike addresses, which the allocator may reuse.
pub(crate) fn next_seq() -> u64 {
  CELL_SEQ.fetch_add(1, Ordering::Relaxed)
}

/// Guards over a pair of cells, keyed by whether the two handles alias one cell.
///
/// Guards are named by argument role, not by acquisition order.
pub(crate) enum PairGuard<'a, T> {
  Same(MutexGuard<'a, T>),
  Distinct {
    a: MutexGuard<'a, T>,
    b: MutexGuard<'a, T>,
  },
}

/// Locks two cells for one operation, deduplicating aliases.
pub(crate) fn lock_pair<'a, T>(a: &'a SharedCell<T>, b: &'a SharedCell<T>) -> PairGuard<'a, T> {
  if a.same_cell(b) {
    return PairGuard::Same(a.inner.value.lock());
  }
  let (guard_a, guard_b) = lock_two(a, b);
  PairGuard::Distinct { a: guard_a, b: guard_b }
}

/// Guards over an output cell and two source cells, one variant per alias pattern.
///
/// Guards are named by argument role, not by acquisition order.
pub(crate) enum TripleGuard<'a, T> {
  AllSame(MutexGuard<'a, T>),
  OutIsA {
    out: MutexGuard<'a, T>,
    b: MutexGuard<'a, T>,
  },
  OutIsB {
    out: MutexGuard<'a, T>,
    a: MutexGuard<'a, T>,
  },
  SrcsAlias {
    out: MutexGuard<'a, T>,
    src: MutexGuard<'a, T>,
  },
  Distinct {
    out: MutexGuard<'a, T>,
    a: MutexGuard<'a, T>,
    b: MutexGuard<'a, T>,
  },
}

/// Locks up to three cells for one operation, deduplicating aliases.
pub(crate) fn lock_triple<'a, T>(
  out: &'a SharedCell<T>,
  a: &'a SharedCell<T>,
  b: &'a SharedCell<T>,
) -> TripleGuard<'a, T> {
  let out_is_a = out.same_cell(a);
  let out_is_b = out.same_cell(b);
  if out_is_a && out_is_b {
    return TripleGuard::AllSame(out.inner.value.lock());
  }
  if out_is_a {
    let (out_guard, b_guard) = lock_two(out, b);
    return TripleGuard::OutIsA {
      out: out_guard,
      b: b_guard,
    };
  }
  if out_is_b {
    let (out_guard, a_guard) = lock_two(out, a);
    return TripleGuard::OutIsB {
      out: out_guard,
      a: a_guard,
    };
  }
  if a.same_cell(b) {
    let (out_guard, src_guard) = lock_two(out, a);
    return TripleGuard::SrcsAlias {
      out: out_guard,
      src: src_guard,
    };
  }
  let (out_guard, a_guard, b_guard) = lock_three(out, a, b);
  TripleGuard::Distinct {
    out: out_guard,
    a: a_guard,
    b: b_guard,
  }
}

/// Locks two distinct cells in ascending sequence order, returning guards in
/// argument order.
fn lock_two<'a, T>(x: &'a SharedCell<T>, y: &'a SharedCell<T>) -> (MutexGuard<'a, T>, MutexGuard<'a, T>) {
  if x.inner.seq < y.inner.seq {
    let guard_x = x.inner.value.lock();
    let guard_y = y.inner.value.lock();
    (guard_x, guard_y)
  } else {
    let guard_y = y.inner.value.lock();
    let guard_x = x.inner.value.lock();
    (guard_x, guard_y)
  }
}

/// Locks three distinct cells in ascending sequence order, returning guards in
/// argument order.
fn lock_three<'a, T>(
  x: &'a SharedCell<T>,
  y: &'a SharedCell<T>,
  z: &'a SharedCell<T>,
) -> (MutexGuard<'a, T>, MutexGuard<'a, T>, MutexGuard<'a, T>) {
  let (sx, sy, sz) = (x.inner.seq, y.inner.seq, z.inner.seq);
  if sx < sy {
    if sy < sz {
      // x < y < z
      let gx = x.inner.value.lock();
      let gy = y.inner.value.lock();
      let gz = z.inner.value.lock();
      (gx, gy, gz)
    } else if sx < sz {
      // x < z < y
      let gx = x.inner.value.lock();
      let gz = z.inner.value.lock();
      let gy = y.inner.value.lock();
      (gx, gy, gz)
    } else {
      // z < x < y
      let gz = z.inner.value.lock();
      let gx = x.inner.value.lock();
      let gy = y.inner.value.lock();
      (gx, gy, gz)
    }
  } else if sx < sz {
    // y < x < z
    let gy = y.inner.value.lock();
    let gx = x.inner.value.lock();
    let gz = z.inner.value.lock();
    (gx, gy, gz)
  } else if sy < sz {
    // y < z < x
    let gy = y.inner.value.lock();
    let gz = z.inner.value.lock();
    let gx = x.inner.value.lock();
    (gx, gy, gz)
  } else {
    // z < y < x
    let gz = z.inner.value.lock();
    let gy = y.inner.value.lock();
    let gx = x.inner.value.lock();
    (gx, gy, gz)
  }
}
