use anyhow::{Context, Result};
use extnet_core::uri::{self, Address};
use std::io::Write;

pub fn run_anchor(out: &mut dyn Write, address: &str, anchor: &str) -> Result<()> {
    let address = Address::parse(address).context("parse address")?;
    writeln!(out, "{}", uri::with_anchor(&address, anchor)?)?;
    Ok(())
}
