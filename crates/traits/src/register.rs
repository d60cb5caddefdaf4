//! Fixed-width unsigned CRC registers.
//!
//! A CRC of width `w` is held in the smallest convenient native integer that
//! has at least `w` bits. All arithmetic on the register is explicitly masked
//! back to `w` bits, so the register type only bounds the widths that can be
//! expressed; it never changes the result.

use core::{
  fmt::{Debug, LowerHex},
  ops::{BitAnd, BitXor},
};

/// Unsigned integer usable as a CRC register.
///
/// Shifts are total: shifting by `BITS` or more yields zero instead of
/// overflowing, which is what width-bit truncation requires when the CRC width
/// equals the register size (e.g. `crc << 8` on an 8-bit CRC in a `u8`).
///
/// # Examples
///
/// ```
/// use crc_traits::Register;
///
/// assert_eq!(<u8 as Register>::shl_or_zero(0xAB, 8), 0);
/// assert_eq!(<u32 as Register>::mask(24), 0x00FF_FFFF);
/// assert!(<u16 as Register>::fits(0x8bb7, 16));
/// assert!(!<u32 as Register>::fits(0x0100, 8));
/// ```
pub trait Register:
  Copy + Eq + Default + Debug + LowerHex + Send + Sync + 'static + BitXor<Output = Self> + BitAnd<Output = Self>
{
  /// Register size in bits.
  const BITS: u32;
  /// All bits clear.
  const ZERO: Self;
  /// Only bit 0 set.
  const ONE: Self;
  /// All bits set.
  const MAX: Self;

  /// Widen a byte into the low 8 bits of the register.
  #[must_use]
  fn from_byte(byte: u8) -> Self;

  /// Truncate the register to its low 8 bits.
  #[must_use]
  fn low_byte(self) -> u8;

  /// Left shift; zero when `n >= BITS`.
  #[must_use]
  fn shl_or_zero(self, n: u32) -> Self;

  /// Right shift; zero when `n >= BITS`.
  #[must_use]
  fn shr_or_zero(self, n: u32) -> Self;

  /// Reverse the order of all `BITS` bits.
  #[must_use]
  fn reverse_bits(self) -> Self;

  /// `2^width - 1`, saturating at [`MAX`](Self::MAX) for `width >= BITS`.
  #[inline]
  #[must_use]
  fn mask(width: u32) -> Self {
    if width == 0 {
      Self::ZERO
    } else {
      Self::MAX.shr_or_zero(Self::BITS.saturating_sub(width))
    }
  }

  /// Whether the value is representable in `width` bits.
  #[inline]
  #[must_use]
  fn fits(self, width: u32) -> bool {
    self.shr_or_zero(width) == Self::ZERO
  }

  /// Whether bit `n` is set.
  #[inline]
  #[must_use]
  fn bit(self, n: u32) -> bool {
    self.shr_or_zero(n) & Self::ONE != Self::ZERO
  }
}

macro_rules! impl_register {
  ($($t:ty),+ $(,)?) => {
    $(
      impl Register for $t {
        const BITS: u32 = <$t>::BITS;
        const ZERO: Self = 0;
        const ONE: Self = 1;
        const MAX: Self = <$t>::MAX;

        #[inline]
        fn from_byte(byte: u8) -> Self {
          <$t>::from(byte)
        }

        #[inline]
        fn low_byte(self) -> u8 {
          (self & 0xFF) as u8
        }

        #[inline]
        fn shl_or_zero(self, n: u32) -> Self {
          self.checked_shl(n).unwrap_or(0)
        }

        #[inline]
        fn shr_or_zero(self, n: u32) -> Self {
          self.checked_shr(n).unwrap_or(0)
        }

        #[inline]
        fn reverse_bits(self) -> Self {
          <$t>::reverse_bits(self)
        }
      }
    )+
  };
}

impl_register!(u8, u16, u32, u64, u128);
