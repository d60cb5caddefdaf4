//! Byte-wise CRC lookup table generation for any width.
//!
//! Each table maps a byte value to its contribution to the CRC register after
//! eight steps of polynomial division. Two layouts exist:
//!
//! | Layout | Input order | Polynomial | Register alignment |
//! |--------|-------------|------------|--------------------|
//! | normal | MSB-first | normal form | byte enters the top 8 bits |
//! | reflected | LSB-first | bit-reversed | byte enters the low 8 bits |
//!
//! Generation costs 256 x 8 shift/XOR steps and runs once per configuration.

// SAFETY: All array indexing in this module uses the loop index `0..256`
// into a `[R; 256]`. Clippy cannot prove this, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

use crc_traits::{Field, InvalidInput, Register};

use crate::config::MIN_WIDTH;

/// Number of entries in a byte-wise table.
pub const TABLE_LEN: usize = 256;

/// Generate a single table entry for the normal (MSB-first) layout.
///
/// `poly` is the normal-form polynomial. `width` has already been checked
/// against `MIN_WIDTH..=R::BITS`.
#[inline]
#[must_use]
fn normal_entry<R: Register>(poly: R, width: u32, index: u8) -> R {
  let mask = R::mask(width);
  let top = width - 1;
  let mut crc = R::from_byte(index).shl_or_zero(width - 8);
  for _ in 0..8 {
    let shifted = crc.shl_or_zero(1) & mask;
    crc = if crc.bit(top) { shifted ^ poly } else { shifted };
  }
  crc
}

/// Generate a single table entry for the reflected (LSB-first) layout.
///
/// `poly` is the bit-reversed polynomial.
#[inline]
#[must_use]
pub fn reflected_entry<R: Register>(poly: R, index: u8) -> R {
  let mut crc = R::from_byte(index);
  for _ in 0..8 {
    let shifted = crc.shr_or_zero(1);
    crc = if crc.bit(0) { shifted ^ poly } else { shifted };
  }
  crc
}

/// Generate the 256-entry table for the normal layout.
///
/// # Errors
///
/// - [`InvalidInput::WidthTooSmall`] if `width < 8`
/// - [`InvalidInput::WidthExceedsRegister`] if `width > R::BITS`
/// - [`InvalidInput::ValueOutOfRange`] if `poly` needs more than `width` bits
pub fn generate_normal<R: Register>(poly: R, width: u32) -> Result<[R; TABLE_LEN], InvalidInput> {
  if width < MIN_WIDTH {
    return Err(InvalidInput::WidthTooSmall { width });
  }
  if width > R::BITS {
    return Err(InvalidInput::WidthExceedsRegister { width, bits: R::BITS });
  }
  if !poly.fits(width) {
    return Err(InvalidInput::ValueOutOfRange {
      field: Field::Polynomial,
      width,
    });
  }

  let mut table = [R::ZERO; TABLE_LEN];
  for (index, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
    *slot = normal_entry(poly, width, index);
  }
  Ok(table)
}

/// Generate the 256-entry table for the reflected layout.
#[must_use]
pub fn generate_reflected<R: Register>(poly: R) -> [R; TABLE_LEN] {
  let mut table = [R::ZERO; TABLE_LEN];
  for (index, slot) in (0..=u8::MAX).zip(table.iter_mut()) {
    *slot = reflected_entry(poly, index);
  }
  table
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn crc32_reflected_known_entries() {
    // Well-known IEEE table (reflected polynomial 0xEDB88320).
    let table = generate_reflected::<u32>(0xEDB8_8320);
    assert_eq!(table[0], 0x0000_0000);
    assert_eq!(table[1], 0x7707_3096);
    assert_eq!(table[128], 0xEDB8_8320);
    assert_eq!(table[255], 0x2D02_EF8D);
  }

  #[test]
  fn crc32_normal_known_entries() {
    // MSB-first table for 0x04C11DB7 (BZIP2 / CKSUM).
    let table = generate_normal::<u32>(0x04C1_1DB7, 32).unwrap();
    assert_eq!(table[0], 0x0000_0000);
    assert_eq!(table[1], 0x04C1_1DB7);
    assert_eq!(table[2], 0x0982_3B6E);
    assert_eq!(table[255], 0xB1F7_40B4);
  }

  #[test]
  fn crc8_normal_known_entries() {
    let table = generate_normal::<u8>(0x07, 8).unwrap();
    assert_eq!(table[0], 0x00);
    assert_eq!(table[1], 0x07);
    assert_eq!(table[2], 0x0E);
    assert_eq!(table[0x80], 0x89);
    assert_eq!(table[255], 0xF3);
  }

  #[test]
  fn entry_one_is_polynomial() {
    // A single set bit reaches the top after 7 shifts, so index 1 (normal)
    // and index 0x80 (reflected) reduce exactly once.
    assert_eq!(normal_entry::<u64>(0x42F0_E1EB_A9EA_3693, 64, 1), 0x42F0_E1EB_A9EA_3693);
    assert_eq!(normal_entry::<u32>(0x0086_4CFB, 24, 1), 0x0086_4CFB);
    assert_eq!(reflected_entry::<u16>(0x8408, 0x80), 0x8408);
  }

  #[test]
  fn entries_stay_within_width() {
    for width in [8u32, 12, 24, 31, 40, 63] {
      let mask = <u64 as Register>::mask(width);
      let poly = 0x42F0_E1EB_A9EA_3693u64 & mask;
      for entry in generate_normal(poly, width).unwrap() {
        assert!(entry.fits(width), "width={width} entry={entry:#x}");
      }
      for entry in generate_reflected(crate::reflect::reflect_within(poly, width)) {
        assert!(entry.fits(width), "width={width} entry={entry:#x}");
      }
    }
  }

  #[test]
  fn normal_layout_rejects_unusable_widths() {
    assert_eq!(
      generate_normal::<u8>(0x07, 7),
      Err(InvalidInput::WidthTooSmall { width: 7 })
    );
    assert_eq!(
      generate_normal::<u32>(0x07, 0),
      Err(InvalidInput::WidthTooSmall { width: 0 })
    );
    assert_eq!(
      generate_normal::<u16>(0x07, 17),
      Err(InvalidInput::WidthExceedsRegister { width: 17, bits: 16 })
    );
    assert_eq!(
      generate_normal::<u32>(0x1_1021, 16),
      Err(InvalidInput::ValueOutOfRange {
        field: Field::Polynomial,
        width: 16
      })
    );
    assert!(generate_normal::<u128>(1, 128).is_ok());
  }

  #[test]
  fn tables_are_linear() {
    // CRC tables are GF(2)-linear: t[a ^ b] == t[a] ^ t[b].
    let normal = generate_normal::<u32>(0x0086_4CFB, 24).unwrap();
    let reflected = generate_reflected::<u16>(0xA001);
    for a in 0..TABLE_LEN {
      for b in [0x01usize, 0x10, 0x5A, 0xFF] {
        assert_eq!(normal[a ^ b], normal[a] ^ normal[b]);
        assert_eq!(reflected[a ^ b], reflected[a] ^ reflected[b]);
      }
    }
  }
}
