use std::thread;

use syncell_utils_rs::collections::ValueError;

use crate::cell::SharedCell;

#[test]
fn test_add_sub_mul() {
  let a = SharedCell::new(10u64);
  let b = SharedCell::new(20u64);
  let out = SharedCell::new(0u64);

  out.add_from(&a, &b);
  assert_eq!(out.with_read(|value| *value), 30);

  out.sub_from(&b, &a);
  assert_eq!(out.with_read(|value| *value), 10);

  out.mul_from(&a, &b);
  assert_eq!(out.with_read(|value| *value), 200);
}

#[test]
fn test_div() {
  let a = SharedCell::new(84u64);
  let b = SharedCell::new(2u64);
  let out = SharedCell::new(0u64);

  out.div_from(&a, &b).unwrap();
  assert_eq!(out.with_read(|value| *value), 42);
}

#[test]
fn test_div_by_zero_keeps_output() {
  let a = SharedCell::new(84u64);
  let zero = SharedCell::new(0u64);
  let out = SharedCell::new(7u64);

  assert_eq!(out.div_from(&a, &zero), Err(ValueError::DivideByZero));
  assert_eq!(out.with_read(|value| *value), 7);
}

#[test]
fn test_wrapping_overflow() {
  let a = SharedCell::new(u64::MAX);
  let b = SharedCell::new(1u64);
  let out = SharedCell::new(0u64);

  out.add_from(&a, &b);
  assert_eq!(out.with_read(|value| *value), 0);
}

#[test]
fn test_alias_patterns() {
  let c = SharedCell::new(5u64);
  c.add_from(&c, &c);
  assert_eq!(c.with_read(|value| *value), 10);

  let b = SharedCell::new(3u64);
  c.add_from(&c, &b);
  assert_eq!(c.with_read(|value| *value), 13);

  c.add_from(&b, &c);
  assert_eq!(c.with_read(|value| *value), 16);

  c.add_from(&b, &b);
  assert_eq!(c.with_read(|value| *value), 6);

  let eleven = SharedCell::new(11u64);
  c.add_from(&b, &eleven);
  assert_eq!(c.with_read(|value| *value), 14);
}

#[test]
fn test_concurrent_arithmetic_with_reversed_roles() {
  let a = SharedCell::new(10u64);
  let b = SharedCell::new(20u64);
  let c = SharedCell::new(0u64);
  let d = SharedCell::new(0u64);

  thread::scope(|scope| {
    let worker = scope.spawn(|| {
      for _ in 0..1000 {
        c.add_from(&a, &b);
      }
    });
    for _ in 0..1000 {
      d.add_from(&b, &a);
    }
    worker.join().unwrap();
  });

  assert_eq!(c.with_read(|value| *value), 30);
  assert_eq!(d.with_read(|value| *value), 30);
}

#[test]
fn test_float_division_by_zero_is_not_an_error() {
  let a = SharedCell::new(1.0f64);
  let zero = SharedCell::new(0.0f64);
  let out = SharedCell::new(0.0f64);

  out.div_from(&a, &zero).unwrap();
  assert!(out.with_read(|value| value.is_infinite()));
}
