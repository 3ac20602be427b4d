//! `extnet is-date <value>` – print whether a value is a date.

use anyhow::Result;
use extnet_core::config::ExtnetConfig;
use extnet_core::text;
use std::io::Write;

/// Layouts from `--format` win over the config's `date_formats`; with neither,
/// the lenient check runs.
pub fn run_is_date(
    out: &mut dyn Write,
    value: &str,
    formats: &[String],
    w3c: bool,
    cfg: &ExtnetConfig,
) -> Result<()> {
    let valid = if w3c {
        text::is_w3c_date(value)
    } else if !formats.is_empty() {
        text::is_date_with_formats(value, formats)?
    } else if !cfg.date_formats.is_empty() {
        text::is_date_with_formats(value, cfg.date_formats.as_slice())?
    } else {
        text::is_date(value)
    };
    writeln!(out, "{valid}")?;
    Ok(())
}
