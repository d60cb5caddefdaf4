//! Kernel introspection for configured CRCs.
//!
//! This module provides user-friendly APIs to inspect which byte-wise kernel a
//! configuration runs and how it was normalized, without touching the hot path.
//!
//! # Examples
//!
//! ```
//! use generic_crc::{catalog, introspect};
//!
//! let crc = catalog::CRC_32_ISCSI.config()?;
//! assert_eq!(crc.kernel_name(), introspect::TABLE_REFLECTED);
//! println!("{}", crc.describe());
//! # Ok::<(), crc_traits::InvalidInput>(())
//! ```

use core::fmt;

use crc_traits::Register;

use crate::config::CrcConfig;

/// MSB-first byte-wise table kernel.
pub const TABLE_NORMAL: &str = "table/normal";
/// LSB-first byte-wise table kernel.
pub const TABLE_REFLECTED: &str = "table/reflected";

impl<R: Register> CrcConfig<R> {
  /// Name of the kernel this configuration runs.
  #[inline]
  #[must_use]
  pub const fn kernel_name(&self) -> &'static str {
    if self.params.reflect_in { TABLE_REFLECTED } else { TABLE_NORMAL }
  }

  /// A displayable summary of the configuration.
  #[inline]
  #[must_use]
  pub const fn describe(&self) -> Description<'_, R> {
    Description { config: self }
  }
}

/// Parameters, normalized register values and kernel of a [`CrcConfig`].
///
/// Zero-allocation wrapper; format it with `{}`.
#[derive(Clone, Copy)]
pub struct Description<'a, R> {
  config: &'a CrcConfig<R>,
}

impl<R: Register> fmt::Display for Description<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let cfg = self.config;
    let w = (cfg.width().div_ceil(4) as usize) + 2;
    write!(
      f,
      "{} [{}] table_poly={:#0w$x} table_init={:#0w$x}",
      cfg.params(),
      cfg.kernel_name(),
      cfg.polynomial(),
      cfg.init(),
    )
  }
}

impl<R: Register> fmt::Debug for Description<'_, R> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Description")
      .field("name", &self.config.name())
      .field("kernel", &self.config.kernel_name())
      .finish()
  }
}
