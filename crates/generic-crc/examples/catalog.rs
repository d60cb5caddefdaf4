//! Walk the built-in catalogue: self-check every variant and show its kernel.
//!
//! Run with: `cargo run --example catalog -p generic-crc`
//!
//! Pass a variant name to describe just that one:
//!   `cargo run --example catalog -p generic-crc -- CRC-32C`

use generic_crc::{CrcConfig, CrcParams, InvalidInput, catalog};

fn main() -> Result<(), InvalidInput> {
  match std::env::args().nth(1) {
    Some(name) => describe_one(&name)?,
    None => {
      self_check()?;
      custom_variant()?;
      rejected_parameters();
    }
  }
  Ok(())
}

/// Self-check every catalogued variant against its published check value.
fn self_check() -> Result<(), InvalidInput> {
  println!("=== Catalogue Self-Check ===\n");

  let mut failures = 0usize;
  for entry in catalog::ALL {
    let crc = entry.config()?;
    let got = crc.check();
    let digits = entry.params.width.div_ceil(4) as usize;
    let status = if got == entry.check { "ok" } else { "FAIL" };
    if got != entry.check {
      failures += 1;
    }
    println!(
      "{:<20} {:<16} check=0x{got:0digits$X} expected=0x{:0digits$X} {status}",
      entry.name(),
      crc.kernel_name(),
      entry.check,
    );
  }

  println!("\n{} variants, {failures} failures\n", catalog::ALL.len());
  Ok(())
}

/// Build a variant that is not in the catalogue.
fn custom_variant() -> Result<(), InvalidInput> {
  println!("--- Custom Variant ---\n");

  let crc = CrcConfig::new(CrcParams::<u128>::new("CRC-82/DARC", 82, 0x0308c0111011401440411).with_reflect(true))?;
  println!("{}", crc.describe());
  println!("check = {:#x}\n", crc.check());
  Ok(())
}

/// Show the error for each class of invalid parameters.
fn rejected_parameters() {
  println!("--- Rejected Parameters ---\n");

  let cases = [
    CrcParams::<u64>::new("too-narrow", 5, 0x05),
    CrcParams::<u64>::new("too-wide", 72, 0x07),
    CrcParams::<u64>::new("poly-overflow", 16, 0x1_1021),
    CrcParams::<u64>::new("init-overflow", 8, 0x07).with_init(0x100),
  ];
  for params in cases {
    match CrcConfig::new(params) {
      Ok(crc) => println!("{:<14} unexpectedly accepted: {crc:?}", params.name),
      Err(err) => println!("{:<14} {err}", params.name),
    }
  }
  println!();
}

fn describe_one(name: &str) -> Result<(), InvalidInput> {
  match catalog::find(name) {
    Some(entry) => {
      let crc = entry.config()?;
      println!("{}", crc.describe());
      println!("check = {:#x} (expected {:#x})", crc.check(), entry.check);
    }
    None => println!("unknown variant: {name}"),
  }
  Ok(())
}
