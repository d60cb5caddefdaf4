extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{CrcConfig, CrcParams, Register, reference, reflect::reflect_within, tables};

/// Arbitrary valid parameters on a `u64` register.
fn arb_params() -> impl Strategy<Value = CrcParams<u64>> {
  (8u32..=64, any::<u64>(), any::<u64>(), any::<bool>(), any::<bool>(), any::<u64>()).prop_map(
    |(width, poly, init, refin, refout, xorout)| {
      let mask = <u64 as Register>::mask(width);
      CrcParams::new("arbitrary", width, poly & mask)
        .with_init(init & mask)
        .with_reflect_in(refin)
        .with_reflect_out(refout)
        .with_xor_out(xorout & mask)
    },
  )
}

fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  proptest::collection::vec(any::<u8>(), 0..=512)
}

proptest! {
  #[test]
  fn table_matches_bitwise(params in arb_params(), data in arb_data()) {
    let cfg = CrcConfig::new(params).unwrap();
    prop_assert_eq!(cfg.checksum(&data), reference::bitwise(&params, &data).unwrap());
  }

  #[test]
  fn digest_stays_within_width(params in arb_params(), data in arb_data()) {
    let cfg = CrcConfig::new(params).unwrap();
    prop_assert!(cfg.checksum(&data).fits(params.width));
  }

  #[test]
  fn deterministic(params in arb_params(), data in arb_data()) {
    let a = CrcConfig::new(params).unwrap();
    let b = a.clone();
    prop_assert_eq!(a.checksum(&data), a.checksum(&data));
    prop_assert_eq!(a.checksum(&data), b.checksum(&data));
  }

  #[test]
  fn empty_input_depends_only_on_configuration(params in arb_params()) {
    let cfg = CrcConfig::new(params).unwrap();
    let register = if params.reflect_out {
      reflect_within(params.init, params.width)
    } else {
      params.init
    };
    prop_assert_eq!(cfg.checksum(&[]), register ^ params.xor_out);
  }

  #[test]
  fn reflected_table_is_bit_reversed_normal_table(width in 8u32..=64, poly in any::<u64>()) {
    // T_reflected[reverse8(b)] == reverse_width(T_normal[b]) for the reversed polynomial.
    let poly = poly & <u64 as Register>::mask(width);
    let normal = tables::generate_normal(poly, width).unwrap();
    let reflected = tables::generate_reflected(reflect_within(poly, width));
    for byte in 0..=u8::MAX {
      prop_assert_eq!(
        reflected[usize::from(byte.reverse_bits())],
        reflect_within(normal[usize::from(byte)], width)
      );
    }
  }

  #[test]
  fn reflection_consistency(params in arb_params(), data in arb_data()) {
    // Flipping both reflection flags while feeding bit-reversed bytes keeps
    // the underlying bit stream identical, so the digests are bit-reversals
    // of each other once xorout is reversed as well. `init` is normal form in
    // both parameter sets and stays unchanged.
    let width = params.width;
    let toggled = params
      .with_reflect_in(!params.reflect_in)
      .with_reflect_out(!params.reflect_out)
      .with_xor_out(reflect_within(params.xor_out, width));

    let reversed: Vec<u8> = data.iter().map(|b| b.reverse_bits()).collect();
    let a = CrcConfig::new(params).unwrap().checksum(&data);
    let b = CrcConfig::new(toggled).unwrap().checksum(&reversed);
    prop_assert_eq!(reflect_within(a, width), b);
  }
}
