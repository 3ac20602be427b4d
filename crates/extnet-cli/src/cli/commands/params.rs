//! `extnet params <address>` – print decoded query parameters.

use anyhow::{Context, Result};
use extnet_core::uri::{self, Address};
use std::collections::BTreeMap;
use std::io::Write;

pub fn run_params(out: &mut dyn Write, address: &str, json: bool) -> Result<()> {
    let address = Address::parse(address).context("parse address")?;
    let params: BTreeMap<String, String> = uri::parameters_query(&address)?.into_iter().collect();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&params)?)?;
    } else {
        for (key, value) in &params {
            writeln!(out, "{key}\t{value}")?;
        }
    }
    Ok(())
}
