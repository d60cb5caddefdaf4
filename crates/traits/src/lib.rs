//! Core traits for the generic CRC engine.
//!
//! This crate provides the foundational abstractions the `generic-crc` engine
//! is written against. It is `no_std` compatible and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Implementors |
//! |-------|---------|--------------|
//! | [`Register`] | Fixed-width unsigned CRC register | `u8`, `u16`, `u32`, `u64`, `u128` |
//! | [`Checksum`] | One-shot digest + catalogue self-check | `CrcConfig<R>` |
//!
//! # Error Types
//!
//! - [`InvalidInput`] - A parameter does not fit the declared CRC width
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
mod register;

pub use checksum::{CHECK_INPUT, Checksum};
pub use error::{Field, InvalidInput};
pub use register::Register;
