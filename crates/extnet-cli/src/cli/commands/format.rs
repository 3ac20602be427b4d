use anyhow::Result;
use extnet_core::text;
use std::fmt::Display;
use std::io::Write;

pub fn run_format(out: &mut dyn Write, template: &str, args: &[String]) -> Result<()> {
    let args: Vec<&dyn Display> = args.iter().map(|a| a as &dyn Display).collect();
    writeln!(out, "{}", text::format_with(template, &args)?)?;
    Ok(())
}
