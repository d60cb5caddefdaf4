//! Differential fuzzing against the `crc` crate and the bit-level reference.
//!
//! Every catalogued variant is run over the fuzz input; the table engine must
//! agree with both oracles byte for byte.

#![no_main]

use generic_crc::{CrcConfig, CrcParams, catalog, reference};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc32c_differential(data);
  test_crc64_xz_differential(data);
  test_crc16_t10dif_differential(data);
  test_crc82_darc_differential(data);
  test_catalogue_against_reference(data);
});

fn test_crc32c_differential(data: &[u8]) {
  let Ok(crc) = catalog::CRC_32_ISCSI.config() else {
    unreachable!("CRC-32/ISCSI parameters are valid");
  };
  let ours = crc.checksum(data);
  let theirs = u64::from(crc::Crc::<u32>::new(&crc::CRC_32_ISCSI).checksum(data));

  assert_eq!(
    ours, theirs,
    "CRC-32/ISCSI differential mismatch: ours={:#010x}, reference={:#010x}, len={}",
    ours, theirs, data.len()
  );
}

fn test_crc64_xz_differential(data: &[u8]) {
  let Ok(crc) = catalog::CRC_64_XZ.config() else {
    unreachable!("CRC-64/XZ parameters are valid");
  };
  let ours = crc.checksum(data);
  let theirs = crc::Crc::<u64>::new(&crc::CRC_64_XZ).checksum(data);

  assert_eq!(
    ours, theirs,
    "CRC-64/XZ differential mismatch: ours={:#018x}, reference={:#018x}, len={}",
    ours, theirs, data.len()
  );
}

fn test_crc16_t10dif_differential(data: &[u8]) {
  let Ok(crc) = CrcConfig::new(CrcParams::<u16>::new("CRC-16/T10-DIF", 16, 0x8BB7)) else {
    unreachable!("CRC-16/T10-DIF parameters are valid");
  };
  let ours = crc.checksum(data);
  let theirs = crc::Crc::<u16>::new(&crc::CRC_16_T10_DIF).checksum(data);

  assert_eq!(
    ours, theirs,
    "CRC-16/T10-DIF differential mismatch: ours={:#06x}, reference={:#06x}, len={}",
    ours, theirs, data.len()
  );
}

fn test_crc82_darc_differential(data: &[u8]) {
  let params = CrcParams::<u128>::new("CRC-82/DARC", 82, crc::CRC_82_DARC.poly).with_reflect(true);
  let Ok(crc) = CrcConfig::new(params) else {
    unreachable!("CRC-82/DARC parameters are valid");
  };
  let ours = crc.checksum(data);
  let theirs = crc::Crc::<u128>::new(&crc::CRC_82_DARC).checksum(data);

  assert_eq!(ours, theirs, "CRC-82/DARC differential mismatch, len={}", data.len());
}

fn test_catalogue_against_reference(data: &[u8]) {
  // The bit-level oracle is slow; cap the input it sees.
  let data = &data[..data.len().min(512)];
  for entry in catalog::ALL {
    let (Ok(crc), Ok(expected)) = (entry.config(), reference::bitwise(&entry.params, data)) else {
      unreachable!("catalogued parameters are valid");
    };
    assert_eq!(crc.checksum(data), expected, "{} mismatch, len={}", entry.name(), data.len());
  }
}
