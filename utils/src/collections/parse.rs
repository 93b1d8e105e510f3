use thiserror::Error;

/// An error that occurs when parsing the textual form of a value fails.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseValueError {
  #[error("Missing or unbalanced delimiters")]
  Delimiters,
  #[error("Failed to parse element at index {index}: {message}")]
  Element { index: usize, message: String },
  #[error("Capacity exceeded after accepting {pushed} elements")]
  CapacityExceeded { pushed: usize },
}

/// In-place construction of a value from its textual form.
///
/// The previous content is discarded before parsing starts, so a failed parse may
/// leave the value partially populated. That partial content is real state and is
/// not rolled back.
pub trait ValueParse {
  fn parse_into(&mut self, input: &str) -> Result<(), ParseValueError>;
}

macro_rules! impl_value_parse_for_scalars {
  ($($ty:ty),* $(,)?) => {
    $(
      impl ValueParse for $ty {
        fn parse_into(&mut self, input: &str) -> Result<(), ParseValueError> {
          match input.trim().parse::<$ty>() {
            Ok(value) => {
              *self = value;
              Ok(())
            }
            Err(error) => Err(ParseValueError::Element {
              index: 0,
              message: error.to_string(),
            }),
          }
        }
      }
    )*
  };
}

impl_value_parse_for_scalars!(i8, i16, i32, i64, isize);
impl_value_parse_for_scalars!(u8, u16, u32, u64, usize);
impl_value_parse_for_scalars!(f32, f64, bool);
