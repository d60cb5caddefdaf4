//! Catalogue of named CRC variants.
//!
//! A data-only registry of parameter sets and published check values taken
//! from the [CRC RevEng catalogue](https://reveng.sourceforge.io/crc-catalogue/all.htm).
//! The engine never consults it; tests, benches and tooling use it to
//! cross-validate configurations.
//!
//! Entries are stored on a `u64` register, which covers every width up to 64.
//!
//! | Name | Width | Polynomial | Check |
//! |------|-------|------------|-------|
//! | CRC-8/SMBUS | 8 | 0x07 | 0xf4 |
//! | CRC-16/T10-DIF | 16 | 0x8bb7 | 0xd0db |
//! | CRC-24/OPENPGP | 24 | 0x864cfb | 0x21cf02 |
//! | CRC-32/ISCSI | 32 | 0x1edc6f41 | 0xe3069283 |
//! | CRC-64/GO-ISO | 64 | 0x1b | 0xb90956c775a41001 |
//!
//! ```
//! use generic_crc::catalog;
//!
//! let entry = catalog::find("crc-32c").expect("alias of CRC-32/ISCSI");
//! assert_eq!(entry.config()?.check(), entry.check);
//! # Ok::<(), crc_traits::InvalidInput>(())
//! ```

use crc_traits::InvalidInput;

use crate::{config::CrcConfig, params::CrcParams};

/// A named CRC variant and its published check value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
  /// Parameters in catalogue (normal) form.
  pub params: CrcParams<u64>,
  /// CRC of ASCII `"123456789"`.
  pub check: u64,
  /// Other names the variant is published under.
  pub aliases: &'static [&'static str],
}

impl CatalogEntry {
  #[inline]
  #[must_use]
  pub const fn name(&self) -> &'static str {
    self.params.name
  }

  /// Build the engine configuration for this entry.
  ///
  /// # Errors
  ///
  /// Never for the built-in entries; propagates [`CrcConfig::new`] validation
  /// for caller-constructed ones.
  pub fn config(&self) -> Result<CrcConfig<u64>, InvalidInput> {
    CrcConfig::new(self.params)
  }

  /// Whether `name` is the entry's name or one of its aliases (ASCII case-insensitive).
  #[must_use]
  pub fn matches(&self, name: &str) -> bool {
    self.params.name.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
  }
}

macro_rules! catalog_entry {
  (
    $ident:ident, $name:literal $(| $alias:literal)*,
    width = $width:literal,
    poly = $poly:literal,
    init = $init:literal,
    refin = $refin:literal,
    refout = $refout:literal,
    xorout = $xorout:literal,
    check = $check:literal $(,)?
  ) => {
    #[doc = concat!("`", $name, "`, check `", stringify!($check), "`.")]
    pub const $ident: CatalogEntry = CatalogEntry {
      params: CrcParams {
        name: $name,
        width: $width,
        polynomial: $poly,
        init: $init,
        reflect_in: $refin,
        reflect_out: $refout,
        xor_out: $xorout,
      },
      check: $check,
      aliases: &[$($alias),*],
    };
  };
}

catalog_entry!(CRC_8_SMBUS, "CRC-8/SMBUS" | "CRC-8",
  width = 8, poly = 0x07, init = 0x00, refin = false, refout = false, xorout = 0x00, check = 0xf4);
catalog_entry!(CRC_8_WCDMA, "CRC-8/WCDMA",
  width = 8, poly = 0x9b, init = 0x00, refin = true, refout = true, xorout = 0x00, check = 0x25);
catalog_entry!(CRC_8_MAXIM_DOW, "CRC-8/MAXIM-DOW" | "CRC-8/MAXIM" | "DOW-CRC",
  width = 8, poly = 0x31, init = 0x00, refin = true, refout = true, xorout = 0x00, check = 0xa1);
catalog_entry!(CRC_10_ATM, "CRC-10/ATM" | "CRC-10" | "CRC-10/I-610",
  width = 10, poly = 0x233, init = 0x000, refin = false, refout = false, xorout = 0x000, check = 0x199);
catalog_entry!(CRC_12_UMTS, "CRC-12/UMTS" | "CRC-12/3GPP",
  width = 12, poly = 0x80f, init = 0x000, refin = false, refout = true, xorout = 0x000, check = 0xdaf);
catalog_entry!(CRC_15_CAN, "CRC-15/CAN" | "CRC-15",
  width = 15, poly = 0x4599, init = 0x0000, refin = false, refout = false, xorout = 0x0000, check = 0x059e);
catalog_entry!(CRC_16_ARC, "CRC-16/ARC" | "ARC" | "CRC-16" | "CRC-16/LHA" | "CRC-IBM",
  width = 16, poly = 0x8005, init = 0x0000, refin = true, refout = true, xorout = 0x0000, check = 0xbb3d);
catalog_entry!(CRC_16_IBM_3740, "CRC-16/IBM-3740" | "CRC-16/AUTOSAR" | "CRC-16/CCITT-FALSE",
  width = 16, poly = 0x1021, init = 0xffff, refin = false, refout = false, xorout = 0x0000, check = 0x29b1);
catalog_entry!(CRC_16_IBM_SDLC, "CRC-16/IBM-SDLC" | "CRC-16/ISO-HDLC" | "CRC-16/X-25" | "X-25",
  width = 16, poly = 0x1021, init = 0xffff, refin = true, refout = true, xorout = 0xffff, check = 0x906e);
catalog_entry!(CRC_16_KERMIT, "CRC-16/KERMIT" | "CRC-16/CCITT" | "CRC-CCITT" | "KERMIT",
  width = 16, poly = 0x1021, init = 0x0000, refin = true, refout = true, xorout = 0x0000, check = 0x2189);
catalog_entry!(CRC_16_MODBUS, "CRC-16/MODBUS" | "MODBUS",
  width = 16, poly = 0x8005, init = 0xffff, refin = true, refout = true, xorout = 0x0000, check = 0x4b37);
catalog_entry!(CRC_16_T10_DIF, "CRC-16/T10-DIF" | "CRC-16/T10DIF",
  width = 16, poly = 0x8bb7, init = 0x0000, refin = false, refout = false, xorout = 0x0000, check = 0xd0db);
catalog_entry!(CRC_16_TMS37157, "CRC-16/TMS37157",
  width = 16, poly = 0x1021, init = 0x89ec, refin = true, refout = true, xorout = 0x0000, check = 0x26b1);
catalog_entry!(CRC_21_CAN_FD, "CRC-21/CAN-FD",
  width = 21, poly = 0x102899, init = 0x000000, refin = false, refout = false, xorout = 0x000000, check = 0x0ed841);
catalog_entry!(CRC_24_LTE_B, "CRC-24/LTE-B",
  width = 24, poly = 0x800063, init = 0x000000, refin = false, refout = false, xorout = 0x000000, check = 0x23ef52);
catalog_entry!(CRC_24_OPENPGP, "CRC-24/OPENPGP" | "CRC-24",
  width = 24, poly = 0x864cfb, init = 0xb704ce, refin = false, refout = false, xorout = 0x000000, check = 0x21cf02);
catalog_entry!(CRC_30_CDMA, "CRC-30/CDMA",
  width = 30, poly = 0x2030b9c7, init = 0x3fffffff, refin = false, refout = false, xorout = 0x3fffffff, check = 0x04c34abf);
catalog_entry!(CRC_31_PHILIPS, "CRC-31/PHILIPS",
  width = 31, poly = 0x04c11db7, init = 0x7fffffff, refin = false, refout = false, xorout = 0x7fffffff, check = 0x0ce9e46c);
catalog_entry!(CRC_32_BZIP2, "CRC-32/BZIP2" | "CRC-32/AAL5" | "CRC-32/DECT-B",
  width = 32, poly = 0x04c11db7, init = 0xffffffff, refin = false, refout = false, xorout = 0xffffffff, check = 0xfc891918);
catalog_entry!(CRC_32_CKSUM, "CRC-32/CKSUM" | "CKSUM" | "CRC-32/POSIX",
  width = 32, poly = 0x04c11db7, init = 0x00000000, refin = false, refout = false, xorout = 0xffffffff, check = 0x765e7680);
catalog_entry!(CRC_32_ISCSI, "CRC-32/ISCSI" | "CRC-32C" | "CRC-32/CASTAGNOLI",
  width = 32, poly = 0x1edc6f41, init = 0xffffffff, refin = true, refout = true, xorout = 0xffffffff, check = 0xe3069283);
catalog_entry!(CRC_32_ISO_HDLC, "CRC-32/ISO-HDLC" | "CRC-32" | "CRC-32/ADCCP" | "PKZIP",
  width = 32, poly = 0x04c11db7, init = 0xffffffff, refin = true, refout = true, xorout = 0xffffffff, check = 0xcbf43926);
catalog_entry!(CRC_40_GSM, "CRC-40/GSM",
  width = 40, poly = 0x0004820009, init = 0x0000000000, refin = false, refout = false, xorout = 0xffffffffff, check = 0xd4164fc646);
catalog_entry!(CRC_64_ECMA_182, "CRC-64/ECMA-182" | "CRC-64",
  width = 64, poly = 0x42f0e1eba9ea3693, init = 0x0000000000000000, refin = false, refout = false,
  xorout = 0x0000000000000000, check = 0x6c40df5f0b497347);
catalog_entry!(CRC_64_GO_ISO, "CRC-64/GO-ISO",
  width = 64, poly = 0x000000000000001b, init = 0xffffffffffffffff, refin = true, refout = true,
  xorout = 0xffffffffffffffff, check = 0xb90956c775a41001);
catalog_entry!(CRC_64_NVME, "CRC-64/NVME",
  width = 64, poly = 0xad93d23594c93659, init = 0xffffffffffffffff, refin = true, refout = true,
  xorout = 0xffffffffffffffff, check = 0xae8b14860a799888);
catalog_entry!(CRC_64_XZ, "CRC-64/XZ" | "CRC-64/GO-ECMA",
  width = 64, poly = 0x42f0e1eba9ea3693, init = 0xffffffffffffffff, refin = true, refout = true,
  xorout = 0xffffffffffffffff, check = 0x995dc9bbdf1939fa);

/// Every built-in entry, ordered by width.
pub const ALL: &[CatalogEntry] = &[
  CRC_8_SMBUS,
  CRC_8_WCDMA,
  CRC_8_MAXIM_DOW,
  CRC_10_ATM,
  CRC_12_UMTS,
  CRC_15_CAN,
  CRC_16_ARC,
  CRC_16_IBM_3740,
  CRC_16_IBM_SDLC,
  CRC_16_KERMIT,
  CRC_16_MODBUS,
  CRC_16_T10_DIF,
  CRC_16_TMS37157,
  CRC_21_CAN_FD,
  CRC_24_LTE_B,
  CRC_24_OPENPGP,
  CRC_30_CDMA,
  CRC_31_PHILIPS,
  CRC_32_BZIP2,
  CRC_32_CKSUM,
  CRC_32_ISCSI,
  CRC_32_ISO_HDLC,
  CRC_40_GSM,
  CRC_64_ECMA_182,
  CRC_64_GO_ISO,
  CRC_64_NVME,
  CRC_64_XZ,
];

/// Look up an entry by name or alias (ASCII case-insensitive).
#[must_use]
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
  ALL.iter().find(|entry| entry.matches(name))
}
