//! `extnet add-params <address> [KEY=VALUE]...` – append a query string.

use anyhow::{Context, Result};
use extnet_core::uri::{self, Address};
use std::io::Write;
use url::form_urlencoded::byte_serialize;

pub fn run_add_params(
    out: &mut dyn Write,
    address: &str,
    pairs: &[(String, String)],
    encode: bool,
) -> Result<()> {
    let address = Address::parse(address).context("parse address")?;
    let pairs: Vec<(String, String)> = if encode {
        pairs
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect()
    } else {
        pairs.to_vec()
    };
    let count = pairs.len();

    let encoded = uri::add_parameters(&address, pairs)?;
    tracing::debug!(%address, count, encode, "appended query parameters");
    writeln!(out, "{encoded}")?;
    Ok(())
}

fn percent_encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}
