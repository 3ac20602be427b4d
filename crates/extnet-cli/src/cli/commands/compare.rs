use anyhow::{Context, Result};
use extnet_core::uri::Address;
use std::io::Write;

/// Prints `true` when `other` is written exactly like `address`.
pub fn run_compare(out: &mut dyn Write, address: &str, other: &str) -> Result<()> {
    let address = Address::parse(address).context("parse address")?;
    writeln!(out, "{}", address.compare(other))?;
    Ok(())
}
