//! Generic table-driven CRC engine.
//!
//! One algorithm reproduces any published CRC variant of width 8 through 128
//! from its catalogue parameters, instead of one hand-tuned routine per variant.
//!
//! # Pipeline
//!
//! | Step | Type / function | Cost |
//! |------|-----------------|------|
//! | Validate + normalize parameters | [`CrcConfig::new`] | once |
//! | Build the 256-entry table | [`tables`] | once, 256 x 8 steps |
//! | Digest | [`CrcConfig::checksum`] | one lookup per byte |
//! | Self-check | [`CrcConfig::check`] | digest of `"123456789"` |
//!
//! # Registers
//!
//! The CRC register is a native unsigned integer chosen by the caller:
//!
//! | Register | Widths |
//! |----------|--------|
//! | `u8` | 8 |
//! | `u16` | 8..=16 |
//! | `u32` | 8..=32 |
//! | `u64` | 8..=64 |
//! | `u128` | 8..=128 |
//!
//! Every shift is masked back to the declared width, so the register type
//! never affects the result.
//!
//! # Example
//!
//! ```rust
//! use generic_crc::{CrcConfig, CrcParams, catalog};
//!
//! // Any variant, straight from its parameters.
//! let openpgp = CrcConfig::new(CrcParams::<u32>::new("CRC-24/OPENPGP", 24, 0x86_4CFB).with_init(0xB7_04CE))?;
//! assert_eq!(openpgp.check(), 0x21_CF02);
//!
//! // Or from the built-in catalogue.
//! let crc32c = catalog::CRC_32_ISCSI.config()?;
//! assert_eq!(crc32c.checksum(b"123456789"), 0xE306_9283);
//! # Ok::<(), crc_traits::InvalidInput>(())
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` and never allocates; the table lives inline in
//! [`CrcConfig`]. Disable the `std` feature for embedded use:
//!
//! ```toml
//! [dependencies]
//! generic-crc = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod catalog;
mod config;
mod engine;
pub mod introspect;
mod params;
pub mod reference;
mod reflect;
pub mod tables;

#[cfg(test)]
mod proptests;

pub use config::{CrcConfig, MIN_WIDTH};
pub use params::CrcParams;
pub use reflect::reverse_bits;
// Re-export traits for convenience
pub use crc_traits::{CHECK_INPUT, Checksum, Field, InvalidInput, Register};
