//! Error types for CRC configuration.
//!
//! Minimal, allocation-free error types. The engine has exactly one failure
//! kind: a value that does not fit the bit width it is declared against.

use core::fmt;

/// Which parameter failed a width check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
  /// A bare argument to bit reversal.
  Value,
  /// The generator polynomial.
  Polynomial,
  /// The initial register value.
  Init,
  /// The final XOR value.
  XorOut,
}

impl Field {
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Value => "value",
      Self::Polynomial => "polynomial",
      Self::Init => "init",
      Self::XorOut => "xorout",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Invalid CRC input.
///
/// Returned when a CRC parameter or a value passed to bit reversal does not
/// fit the declared width. Computation is pure, so retrying with the same
/// input always fails the same way.
///
/// # Examples
///
/// ```
/// use crc_traits::{Field, InvalidInput};
///
/// let err = InvalidInput::ValueOutOfRange { field: Field::Polynomial, width: 8 };
/// assert_eq!(err.to_string(), "polynomial does not fit in 8 bits");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum InvalidInput {
  /// CRC width below the 8-bit minimum.
  WidthTooSmall {
    /// Requested width.
    width: u32,
  },
  /// CRC width larger than the register type can hold.
  WidthExceedsRegister {
    /// Requested width.
    width: u32,
    /// Register size in bits.
    bits: u32,
  },
  /// A value needs more than `width` bits.
  ValueOutOfRange {
    /// Offending parameter.
    field: Field,
    /// Declared width.
    width: u32,
  },
}

impl fmt::Display for InvalidInput {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::WidthTooSmall { width } => write!(f, "crc width {width} is below the 8-bit minimum"),
      Self::WidthExceedsRegister { width, bits } => {
        write!(f, "crc width {width} exceeds the {bits}-bit register")
      }
      Self::ValueOutOfRange { field, width } => write!(f, "{field} does not fit in {width} bits"),
    }
  }
}

impl core::error::Error for InvalidInput {}
