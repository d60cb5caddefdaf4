//! CRC algorithm parameters.
//!
//! This module defines the parameters of a CRC variant following the
//! conventions from the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

use core::fmt;

use crc_traits::Register;

/// CRC algorithm parameters.
///
/// This struct captures all the parameters needed to define a CRC algorithm.
/// The parameters follow the conventions from the CRC Catalogue and are
/// validated only when turned into a [`CrcConfig`](crate::CrcConfig).
///
/// # Parameters
///
/// - `name`: Informational label, not used in computation
/// - `width`: Number of bits in the CRC (at least 8, at most `R::BITS`)
/// - `polynomial`: The generator polynomial in normal form (without the implicit high bit)
/// - `init`: Initial value for the CRC register
/// - `reflect_in`: If true, process input bytes LSB-first
/// - `reflect_out`: If true, reflect the final CRC before XOR
/// - `xor_out`: Value to XOR with the final CRC
///
/// # Examples
///
/// ```
/// use generic_crc::CrcParams;
///
/// let crc32c = CrcParams::<u32>::new("CRC-32C", 32, 0x1EDC_6F41)
///   .with_init(0xFFFF_FFFF)
///   .with_reflect(true)
///   .with_xor_out(0xFFFF_FFFF);
/// assert!(crc32c.reflect_in && crc32c.reflect_out);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams<R> {
  /// Informational name, e.g. `"CRC-16/T10-DIF"`.
  pub name: &'static str,
  /// Width in bits.
  pub width: u32,
  /// Generator polynomial (normal form, without implicit high bit).
  pub polynomial: R,
  /// Initial value for the CRC register (normal form).
  pub init: R,
  /// Process input bytes LSB-first.
  pub reflect_in: bool,
  /// Reflect final CRC before XOR.
  pub reflect_out: bool,
  /// XOR value applied to final CRC.
  pub xor_out: R,
}

impl<R: Register> CrcParams<R> {
  /// Parameters with zero init, no reflection and zero final XOR.
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, width: u32, polynomial: R) -> Self {
    Self {
      name,
      width,
      polynomial,
      init: R::ZERO,
      reflect_in: false,
      reflect_out: false,
      xor_out: R::ZERO,
    }
  }

  #[inline]
  #[must_use]
  pub const fn with_init(mut self, init: R) -> Self {
    self.init = init;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_reflect_in(mut self, reflect_in: bool) -> Self {
    self.reflect_in = reflect_in;
    self
  }

  #[inline]
  #[must_use]
  pub const fn with_reflect_out(mut self, reflect_out: bool) -> Self {
    self.reflect_out = reflect_out;
    self
  }

  /// Set both input and output reflection.
  #[inline]
  #[must_use]
  pub const fn with_reflect(self, reflect: bool) -> Self {
    self.with_reflect_in(reflect).with_reflect_out(reflect)
  }

  #[inline]
  #[must_use]
  pub const fn with_xor_out(mut self, xor_out: R) -> Self {
    self.xor_out = xor_out;
    self
  }
}

/// Number of hex digits needed to print a `width`-bit value.
#[inline]
const fn hex_digits(width: u32) -> usize {
  width.div_ceil(4) as usize
}

/// Renders the parameters in CRC RevEng catalogue notation.
///
/// ```
/// use generic_crc::CrcParams;
///
/// let params = CrcParams::<u16>::new("CRC-16/T10-DIF", 16, 0x8bb7);
/// assert_eq!(
///   params.to_string(),
///   "width=16 poly=0x8bb7 init=0x0000 refin=false refout=false xorout=0x0000 name=\"CRC-16/T10-DIF\""
/// );
/// ```
impl<R: Register> fmt::Display for CrcParams<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let digits = hex_digits(self.width);
    write!(
      f,
      "width={} poly={:#0w$x} init={:#0w$x} refin={} refout={} xorout={:#0w$x} name=\"{}\"",
      self.width,
      self.polynomial,
      self.init,
      self.reflect_in,
      self.reflect_out,
      self.xor_out,
      self.name,
      w = digits + 2,
    )
  }
}
