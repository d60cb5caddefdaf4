//! Fuzz arbitrary parameter sets.
//!
//! The first 34 bytes choose the variant, the rest is the message. Invalid
//! parameters must be rejected identically by the engine and the reference;
//! valid ones must produce the same digest from both, within the width.

#![no_main]

use generic_crc::{CrcConfig, CrcParams, Register, reference};
use libfuzzer_sys::fuzz_target;

const HEADER: usize = 1 + 1 + 16 + 16;

fn read_u128(bytes: &[u8]) -> u128 {
  let mut buf = [0u8; 16];
  buf.copy_from_slice(&bytes[..16]);
  u128::from_le_bytes(buf)
}

fuzz_target!(|data: &[u8]| {
  if data.len() < HEADER {
    return;
  }
  let (header, message) = data.split_at(HEADER);

  // Width 0..=135 so both rejection paths are reachable.
  let width = u32::from(header[0] % 136);
  let flags = header[1];
  let poly = read_u128(&header[2..18]);
  let init = read_u128(&header[18..34]);
  // Keep out-of-range values rare so most inputs reach the digest.
  let mask = if flags & 0x80 != 0 { u128::MAX } else { <u128 as Register>::mask(width) };

  let params = CrcParams::<u128>::new("fuzz", width, poly & mask)
    .with_init(init & mask)
    .with_reflect_in(flags & 1 != 0)
    .with_reflect_out(flags & 2 != 0)
    .with_xor_out(init.rotate_left(17) & mask);

  match (CrcConfig::new(params), reference::bitwise(&params, message)) {
    (Ok(crc), Ok(expected)) => {
      let digest = crc.checksum(message);
      assert_eq!(digest, expected, "{params}");
      assert!(digest.fits(width), "{params}: digest {digest:#x} escaped width");
    }
    (Err(a), Err(b)) => assert_eq!(a, b, "{params}"),
    (engine, oracle) => panic!("{params}: engine={:?} reference={:?}", engine.err(), oracle.err()),
  }
});
