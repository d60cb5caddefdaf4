//! Bitwise reference implementation.
//!
//! This module provides the canonical "source of truth" for CRC computation.
//! It processes one message bit at a time by direct polynomial division in
//! the normal (MSB-first) domain, with no lookup table:
//!
//! - Reflected input is handled by bit-reversing each byte before it enters
//!   the register, not by running a reflected register.
//! - Reflected output is a single reversal of the final register.
//!
//! Because none of this shares code with [`tables`](crate::tables) or the
//! digest engine, agreement between the two validates the table generator
//! independently of its own logic.
//!
//! These are intentionally slow (~8 operations per bit). Use for:
//! - Correctness verification
//! - Test oracles
//! - Auditing algorithm correctness

use crc_traits::{InvalidInput, Register};

use crate::{config::validate, params::CrcParams, reflect::reflect_within};

/// Bitwise CRC of `data` under `params`.
///
/// # Errors
///
/// Same validation as [`CrcConfig::new`](crate::CrcConfig::new).
///
/// # Examples
///
/// ```
/// use generic_crc::{CrcParams, reference};
///
/// let t10dif = CrcParams::<u16>::new("CRC-16/T10-DIF", 16, 0x8BB7);
/// assert_eq!(reference::bitwise(&t10dif, b"123456789"), Ok(0xD0DB));
/// ```
pub fn bitwise<R: Register>(params: &CrcParams<R>, data: &[u8]) -> Result<R, InvalidInput> {
  validate(params)?;

  let width = params.width;
  let mask = R::mask(width);
  let top = width - 1;

  let mut crc = params.init;
  for &byte in data {
    let byte = if params.reflect_in { byte.reverse_bits() } else { byte };
    for i in (0..8).rev() {
      let feedback = crc.bit(top) ^ ((byte >> i) & 1 != 0);
      crc = crc.shl_or_zero(1) & mask;
      if feedback {
        crc = crc ^ params.polynomial;
      }
    }
  }

  if params.reflect_out {
    crc = reflect_within(crc, width);
  }
  Ok(crc ^ params.xor_out)
}
