/// Arithmetic between two values of the same type, producing a new value.
///
/// Integer implementations wrap on overflow; float implementations follow IEEE
/// semantics. Division is the only operation that can fail, and only for the
/// integer implementations.
pub trait ValueArith: Sized {
  fn add(&self, other: &Self) -> Self;

  fn sub(&self, other: &Self) -> Self;

  fn mul(&self, other: &Self) -> Self;

  /// Returns `None` when the division is undefined for the type, such as an
  /// integer division by zero.
  fn checked_div(&self, other: &Self) -> Option<Self>;
}

macro_rules! impl_value_arith_for_ints {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ValueArith for $ty {
        fn add(&self, other: &Self) -> Self {
          self.wrapping_add(*other)
        }

        fn sub(&self, other: &Self) -> Self {
          self.wrapping_sub(*other)
        }

        fn mul(&self, other: &Self) -> Self {
          self.wrapping_mul(*other)
        }

        fn checked_div(&self, other: &Self) -> Option<Self> {
          <$ty>::checked_div(*self, *other)
        }
      }
    )*
  };
}

macro_rules! impl_value_arith_for_floats {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ValueArith for $ty {
        fn add(&self, other: &Self) -> Self {
          *self + *other
        }

        fn sub(&self, other: &Self) -> Self {
          *self - *other
        }

        fn mul(&self, other: &Self) -> Self {
          *self * *other
        }

        fn checked_div(&self, other: &Self) -> Option<Self> {
          Some(*self / *other)
        }
      }
    )*
  };
}

impl_value_arith_for_ints!(i8, i16, i32, i64, isize);
impl_value_arith_for_ints!(u8, u16, u32, u64, usize);
impl_value_arith_for_floats!(f32, f64);
