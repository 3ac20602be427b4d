use anyhow::Result;
use extnet_core::text;
use std::io::Write;

pub fn run_fraction_digits(out: &mut dyn Write, literal: &str) -> Result<()> {
    writeln!(out, "{}", text::fractional_digits(literal)?)?;
    Ok(())
}
