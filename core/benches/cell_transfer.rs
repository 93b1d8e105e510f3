use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use syncell_core_rs::SharedCell;
use syncell_utils_rs::collections::RingDeque;

fn make_deque_cell(capacity: usize) -> SharedCell<RingDeque<u64>> {
  SharedCell::new(RingDeque::bounded(capacity))
}

fn bench_cell_push_pop(c: &mut Criterion) {
  let mut group = c.benchmark_group("cell_push_pop");
  let batch = 128_u64;

  group.bench_function("try_push_try_pop", |b| {
    b.iter_batched(
      || make_deque_cell(batch as usize),
      |cell: SharedCell<RingDeque<u64>>| {
        for value in 0..batch {
          cell.try_push(value).unwrap();
        }
        for _ in 0..batch {
          let _ = cell.try_pop::<u64>().unwrap();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("push_pop", |b| {
    b.iter_batched(
      || make_deque_cell(batch as usize),
      |cell: SharedCell<RingDeque<u64>>| {
        for value in 0..batch {
          cell.push(value);
        }
        for _ in 0..batch {
          let _ = cell.pop::<u64>();
        }
      },
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

fn bench_cell_transfer(c: &mut Criterion) {
  let mut group = c.benchmark_group("cell_transfer");
  let batch = 128_u64;

  group.bench_function("copy_from", |b| {
    b.iter_batched(
      || {
        let source = make_deque_cell(batch as usize);
        for value in 0..batch {
          source.try_push(value).unwrap();
        }
        (source, make_deque_cell(batch as usize))
      },
      |(source, dest): (SharedCell<RingDeque<u64>>, SharedCell<RingDeque<u64>>)| {
        dest.copy_from(&source);
      },
      BatchSize::SmallInput,
    );
  });

  group.bench_function("swap_with", |b| {
    b.iter_batched(
      || (SharedCell::new(1_u64), SharedCell::new(2_u64)),
      |(a, b): (SharedCell<u64>, SharedCell<u64>)| {
        a.swap_with(&b);
      },
      BatchSize::SmallInput,
    );
  });

  group.finish();
}

criterion_group!(benches, bench_cell_push_pop, bench_cell_transfer);
criterion_main!(benches);
