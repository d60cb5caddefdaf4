//! Table-driven digest computation.
//!
//! One byte per step, using the table built by [`CrcConfig::new`]:
//!
//! ```text
//! normal:    pos = (crc >> (width - 8)) ^ b;  crc = ((crc << 8) & mask) ^ T[pos]
//! reflected: pos = (crc ^ b) & 0xFF;          crc = (crc >> 8) ^ T[pos]
//! ```
//!
//! The register never leaves `width` bits: the normal branch masks after the
//! shift, and table entries are themselves width-bit values.

// SAFETY: Table lookups index a `[R; 256]` with a `u8`, so every index is in bounds.
#![allow(clippy::indexing_slicing)]

use crc_traits::{Checksum, Register};

use crate::{config::CrcConfig, reflect::reflect_within};

impl<R: Register> CrcConfig<R> {
  /// Compute the CRC of `data`.
  ///
  /// The register starts from the configured initial value on every call, so
  /// the result depends only on the configuration and `data`.
  ///
  /// # Examples
  ///
  /// ```
  /// use generic_crc::{CrcConfig, CrcParams};
  ///
  /// let smbus = CrcConfig::new(CrcParams::<u8>::new("CRC-8/SMBUS", 8, 0x07))?;
  /// assert_eq!(smbus.checksum(b"123456789"), 0xF4);
  /// assert_eq!(smbus.checksum(b""), 0x00);
  /// # Ok::<(), crc_traits::InvalidInput>(())
  /// ```
  #[inline]
  #[must_use]
  pub fn checksum(&self, data: &[u8]) -> R {
    self.finalize(self.update(self.init, data))
  }

  /// Compute the catalogue check value: the CRC of ASCII `"123456789"`.
  #[inline]
  #[must_use]
  pub fn check(&self) -> R {
    Checksum::check(self)
  }

  /// Feed `data` through the raw register (no output reflection or XOR).
  #[inline]
  pub(crate) fn update(&self, crc: R, data: &[u8]) -> R {
    if self.params.reflect_in {
      update_reflected(crc, data, &self.table)
    } else {
      update_normal(crc, data, &self.table, self.params.width, self.mask)
    }
  }

  /// Apply output reflection and the final XOR to a raw register.
  #[inline]
  pub(crate) fn finalize(&self, crc: R) -> R {
    let crc = if self.params.reflect_out ^ self.params.reflect_in {
      reflect_within(crc, self.params.width)
    } else {
      crc
    };
    crc ^ self.params.xor_out
  }
}

impl<R: Register> Checksum for CrcConfig<R> {
  type Output = R;

  #[inline]
  fn checksum(&self, data: &[u8]) -> R {
    Self::checksum(self, data)
  }
}

/// MSB-first byte-wise update.
#[inline]
fn update_normal<R: Register>(mut crc: R, data: &[u8], table: &[R; 256], width: u32, mask: R) -> R {
  let shift = width - 8;
  for &byte in data {
    let pos = crc.shr_or_zero(shift).low_byte() ^ byte;
    crc = (crc.shl_or_zero(8) & mask) ^ table[usize::from(pos)];
  }
  crc
}

/// LSB-first byte-wise update.
#[inline]
fn update_reflected<R: Register>(mut crc: R, data: &[u8], table: &[R; 256]) -> R {
  for &byte in data {
    let pos = crc.low_byte() ^ byte;
    crc = crc.shr_or_zero(8) ^ table[usize::from(pos)];
  }
  crc
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::CrcParams;

  fn smbus() -> CrcConfig<u8> {
    CrcConfig::new(CrcParams::new("CRC-8/SMBUS", 8, 0x07)).unwrap()
  }

  #[test]
  fn check_matches_checksum_of_catalogue_input() {
    let cfg = smbus();
    assert_eq!(cfg.check(), cfg.checksum(b"123456789"));
    assert_eq!(cfg.check(), 0xF4);
  }

  #[test]
  fn trait_and_inherent_agree() {
    let cfg = CrcConfig::new(CrcParams::<u16>::new("CRC-16/T10-DIF", 16, 0x8BB7)).unwrap();
    assert_eq!(Checksum::check(&cfg), 0xD0DB);
    assert_eq!(Checksum::checksum(&cfg, b"hello"), cfg.checksum(b"hello"));

    let reflected = CrcConfig::new(
      CrcParams::<u32>::new("CRC-32/ISO-HDLC", 32, 0x04C1_1DB7)
        .with_init(u32::MAX)
        .with_reflect(true)
        .with_xor_out(u32::MAX),
    )
    .unwrap();
    assert_eq!(Checksum::check(&reflected), reflected.check());
    assert_eq!(reflected.check(), 0xCBF4_3926);
    for len in [0usize, 1, 9, 64] {
      let data = &[0xA5u8; 64][..len];
      assert_eq!(Checksum::checksum(&reflected, data), reflected.checksum(data), "len={len}");
    }
  }

  #[test]
  fn empty_input_is_configuration_only() {
    // refin=true, refout=false: the reversed init is reversed back.
    let cfg = CrcConfig::new(
      CrcParams::<u32>::new("mixed", 32, 0x04C1_1DB7)
        .with_init(0x1234_5678)
        .with_reflect_in(true)
        .with_xor_out(0x0F0F_0F0F),
    )
    .unwrap();
    assert_eq!(cfg.checksum(&[]), 0x1234_5678 ^ 0x0F0F_0F0F);

    // refin=true, refout=true: the stored (reversed) init is reported as-is.
    let cfg = CrcConfig::new(CrcParams::<u32>::new("refl", 32, 0x04C1_1DB7).with_init(0x1).with_reflect(true)).unwrap();
    assert_eq!(cfg.checksum(&[]), 0x8000_0000);

    // refin=false, refout=true.
    let cfg = CrcConfig::new(CrcParams::<u16>::new("out", 16, 0x1021).with_init(0x0001).with_reflect_out(true)).unwrap();
    assert_eq!(cfg.checksum(&[]), 0x8000);
  }

  #[test]
  fn width_eight_in_byte_register_never_overflows() {
    // Exercises `crc << 8` on a u8 register for every byte value.
    let cfg = smbus();
    for byte in 0u8..=255 {
      assert_eq!(cfg.checksum(&[byte]), cfg.table()[usize::from(byte)]);
    }
  }

  #[test]
  fn update_then_finalize_is_checksum() {
    let cfg = CrcConfig::new(
      CrcParams::<u64>::new("CRC-64/GO-ISO", 64, 0x1B)
        .with_init(u64::MAX)
        .with_reflect(true)
        .with_xor_out(u64::MAX),
    )
    .unwrap();
    let data = b"split across two updates";
    let (a, b) = data.split_at(9);
    let raw = cfg.update(cfg.update(cfg.init(), a), b);
    assert_eq!(cfg.finalize(raw), cfg.checksum(data));
  }
}
