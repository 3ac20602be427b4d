use anyhow::{Context, Result};
use extnet_core::uri::Address;
use std::io::Write;

pub fn run_domain(out: &mut dyn Write, address: &str) -> Result<()> {
    let address = Address::parse(address).context("parse address")?;
    writeln!(out, "{}", address.domain()?)?;
    Ok(())
}
