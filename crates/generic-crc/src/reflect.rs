//! Bit reversal within a declared width.

use crc_traits::{Field, InvalidInput, Register};

/// Reverse the order of the low `n_bits` bits of `value`.
///
/// # Errors
///
/// Returns [`InvalidInput::ValueOutOfRange`] if `value` needs more than
/// `n_bits` bits, and [`InvalidInput::WidthExceedsRegister`] if `n_bits` is
/// larger than the register.
///
/// # Examples
///
/// ```
/// use generic_crc::reverse_bits;
///
/// assert_eq!(reverse_bits(0x04C1_1DB7u32, 32), Ok(0xEDB8_8320));
/// assert_eq!(reverse_bits(0b0000_0001u8, 3), Ok(0b100));
/// assert!(reverse_bits(0x1_0000u32, 16).is_err());
/// ```
pub fn reverse_bits<R: Register>(value: R, n_bits: u32) -> Result<R, InvalidInput> {
  if n_bits > R::BITS {
    return Err(InvalidInput::WidthExceedsRegister {
      width: n_bits,
      bits: R::BITS,
    });
  }
  if !value.fits(n_bits) {
    return Err(InvalidInput::ValueOutOfRange {
      field: Field::Value,
      width: n_bits,
    });
  }
  Ok(reflect_within(value, n_bits))
}

/// Reverse the low `width` bits of `value`, which must already fit.
///
/// Bits above `width` would be shifted out, so callers only use this once the
/// width invariant is established.
#[inline]
#[must_use]
pub(crate) fn reflect_within<R: Register>(value: R, width: u32) -> R {
  value.reverse_bits().shr_or_zero(R::BITS.saturating_sub(width))
}
