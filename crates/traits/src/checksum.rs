//! One-shot checksum trait.
//!
//! Unlike a streaming hasher, a [`Checksum`] implementor is an immutable,
//! fully-configured engine: every call starts from the configured initial
//! value and consumes the whole input.

use core::fmt::Debug;

/// Input used by [`Checksum::check`]: the ASCII bytes `"123456789"`.
///
/// The CRC RevEng catalogue publishes the digest of this string as the
/// `check` value of every variant.
pub const CHECK_INPUT: &[u8] = b"123456789";

/// Non-cryptographic checksum computed in one shot.
///
/// # Usage
///
/// ```rust,ignore
/// use generic_crc::{Checksum, CrcConfig, CrcParams};
///
/// let crc = CrcConfig::new(CrcParams::<u16>::new("CRC-16/T10-DIF", 16, 0x8bb7))?;
/// assert_eq!(crc.check(), 0xd0db);
/// let digest = crc.checksum(b"hello world");
/// ```
///
/// # Implementor Requirements
///
/// - `checksum()` must be deterministic and must not mutate `self`
/// - `check()` must equal `checksum(CHECK_INPUT)`
pub trait Checksum {
  /// The checksum output type.
  type Output: Copy + Eq + Debug;

  /// Compute the checksum of `data`.
  #[must_use]
  fn checksum(&self, data: &[u8]) -> Self::Output;

  /// Compute the catalogue check value (digest of `"123456789"`).
  #[inline]
  #[must_use]
  fn check(&self) -> Self::Output {
    self.checksum(CHECK_INPUT)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  /// Sums bytes modulo 256; enough to exercise the provided method.
  struct ByteSum;

  impl Checksum for ByteSum {
    type Output = u8;

    fn checksum(&self, data: &[u8]) -> u8 {
      data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
    }
  }

  #[test]
  fn check_uses_catalogue_input() {
    assert_eq!(CHECK_INPUT, b"123456789");
    let expected = CHECK_INPUT.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
    assert_eq!(ByteSum.check(), expected);
  }
}
