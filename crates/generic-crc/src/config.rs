//! Validated CRC configuration.
//!
//! A [`CrcConfig`] is built once from [`CrcParams`], validated, and then
//! read-only for its entire lifetime. Construction normalizes the polynomial
//! and initial value into the representation the selected branch expects and
//! builds the lookup table, so digest computation never re-derives anything.

use core::fmt;

use crc_traits::{Field, InvalidInput, Register};

use crate::{
  params::CrcParams,
  reflect::reflect_within,
  tables::{self, TABLE_LEN},
};

/// Smallest supported CRC width.
pub const MIN_WIDTH: u32 = 8;

/// A validated CRC variant with its precomputed lookup table.
///
/// `CrcConfig` is immutable: it can be shared by reference across threads and
/// used for any number of concurrent digests without synchronization.
///
/// # Examples
///
/// ```
/// use generic_crc::{CrcConfig, CrcParams};
///
/// let crc = CrcConfig::new(
///   CrcParams::<u64>::new("CRC-64/GO-ISO", 64, 0x1B)
///     .with_init(u64::MAX)
///     .with_reflect(true)
///     .with_xor_out(u64::MAX),
/// )?;
/// assert_eq!(crc.check(), 0xb909_56c7_75a4_1001);
/// # Ok::<(), crc_traits::InvalidInput>(())
/// ```
#[derive(Clone)]
pub struct CrcConfig<R> {
  pub(crate) params: CrcParams<R>,
  /// Polynomial in the form the table was built from (reversed if `reflect_in`).
  pub(crate) poly: R,
  /// Initial register in branch representation (reversed if `reflect_in`).
  pub(crate) init: R,
  pub(crate) mask: R,
  pub(crate) table: [R; TABLE_LEN],
}

impl<R: Register> CrcConfig<R> {
  /// Validate `params` and build the lookup table.
  ///
  /// # Errors
  ///
  /// - [`InvalidInput::WidthTooSmall`] if `width < 8`
  /// - [`InvalidInput::WidthExceedsRegister`] if `width > R::BITS`
  /// - [`InvalidInput::ValueOutOfRange`] if the polynomial, init or xorout
  ///   needs more than `width` bits
  pub fn new(params: CrcParams<R>) -> Result<Self, InvalidInput> {
    validate(&params)?;
    let width = params.width;

    let (poly, init, table) = if params.reflect_in {
      let poly = reflect_within(params.polynomial, width);
      (poly, reflect_within(params.init, width), tables::generate_reflected(poly))
    } else {
      (
        params.polynomial,
        params.init,
        tables::generate_normal(params.polynomial, width)?,
      )
    };

    Ok(Self {
      params,
      poly,
      init,
      mask: R::mask(width),
      table,
    })
  }

  /// Build a configuration from the seven catalogue parameters.
  ///
  /// # Errors
  ///
  /// Same as [`new`](Self::new).
  pub fn from_parts(
    name: &'static str,
    width: u32,
    polynomial: R,
    init: R,
    reflect_in: bool,
    reflect_out: bool,
    xor_out: R,
  ) -> Result<Self, InvalidInput> {
    Self::new(CrcParams {
      name,
      width,
      polynomial,
      init,
      reflect_in,
      reflect_out,
      xor_out,
    })
  }

  /// The parameters as supplied by the caller (normal form).
  #[inline]
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    &self.params
  }

  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.params.name
  }

  #[inline]
  #[must_use]
  pub const fn width(&self) -> u32 {
    self.params.width
  }

  /// Stored polynomial: bit-reversed within `width` when `reflect_in` is set.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> R {
    self.poly
  }

  /// Stored initial register: bit-reversed within `width` when `reflect_in` is set.
  #[inline]
  #[must_use]
  pub const fn init(&self) -> R {
    self.init
  }

  #[inline]
  #[must_use]
  pub const fn reflect_in(&self) -> bool {
    self.params.reflect_in
  }

  #[inline]
  #[must_use]
  pub const fn reflect_out(&self) -> bool {
    self.params.reflect_out
  }

  #[inline]
  #[must_use]
  pub const fn xor_out(&self) -> R {
    self.params.xor_out
  }

  /// `2^width - 1`.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> R {
    self.mask
  }

  /// The 256-entry lookup table.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &[R; TABLE_LEN] {
    &self.table
  }
}

/// Check the width bounds and that every parameter fits in `width` bits.
pub(crate) fn validate<R: Register>(params: &CrcParams<R>) -> Result<(), InvalidInput> {
  let width = params.width;
  if width < MIN_WIDTH {
    return Err(InvalidInput::WidthTooSmall { width });
  }
  if width > R::BITS {
    return Err(InvalidInput::WidthExceedsRegister { width, bits: R::BITS });
  }
  for (field, value) in [
    (Field::Polynomial, params.polynomial),
    (Field::Init, params.init),
    (Field::XorOut, params.xor_out),
  ] {
    if !value.fits(width) {
      return Err(InvalidInput::ValueOutOfRange { field, width });
    }
  }
  Ok(())
}

impl<R: Register> fmt::Debug for CrcConfig<R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CrcConfig")
      .field("params", &format_args!("{}", self.params))
      .field("poly", &format_args!("{:#x}", self.poly))
      .field("init", &format_args!("{:#x}", self.init))
      .finish_non_exhaustive()
  }
}
