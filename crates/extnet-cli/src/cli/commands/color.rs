use anyhow::{Context, Result};
use extnet_core::color;
use std::io::Write;

pub fn run_color(out: &mut dyn Write, hex: &str) -> Result<()> {
    let argb = color::parse_hex_color(hex).with_context(|| format!("parse color '{hex}'"))?;
    writeln!(
        out,
        "{argb}  a={} r={} g={} b={}",
        argb.a, argb.r, argb.g, argb.b
    )?;
    Ok(())
}
