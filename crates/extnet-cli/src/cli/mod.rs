//! CLI for the extnet helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use extnet_core::config;
use std::io;

use commands::{
    run_add_params, run_anchor, run_color, run_compare, run_domain, run_format,
    run_fraction_digits, run_is_date, run_params,
};

/// Top-level CLI for the extnet helpers.
#[derive(Debug, Parser)]
#[command(name = "extnet")]
#[command(about = "extnet: query strings, addresses, dates and colors from the shell", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Append `?key=value&...` to an address.
    AddParams {
        /// Absolute or relative address.
        address: String,
        /// Parameters in order, as KEY=VALUE.
        #[arg(value_parser = parse_pair, value_name = "KEY=VALUE")]
        pairs: Vec<(String, String)>,
        /// Percent-encode keys and values before appending.
        #[arg(long)]
        encode: bool,
    },

    /// Print the query parameters of an address (first occurrence wins).
    Params {
        /// Absolute or relative address.
        address: String,
        /// Print a JSON object instead of tab-separated lines.
        #[arg(long)]
        json: bool,
    },

    /// Print the last two labels of the address host.
    Domain {
        /// Absolute address.
        address: String,
    },

    /// Check whether two addresses are written identically.
    Compare {
        /// Address to parse.
        address: String,
        /// Text to compare against.
        other: String,
    },

    /// Append `#anchor` to an address.
    Anchor {
        /// Absolute or relative address.
        address: String,
        /// Fragment to append (without `#`).
        anchor: String,
    },

    /// Check whether a value is a date.
    IsDate {
        /// Value to check.
        value: String,
        /// Accepted layout (chrono strftime syntax); repeatable. Defaults to the config's date_formats.
        #[arg(long = "format", value_name = "LAYOUT")]
        formats: Vec<String>,
        /// Use the W3C date-time profile instead of layouts.
        #[arg(long, conflicts_with = "formats")]
        w3c: bool,
    },

    /// Fill `{0}`, `{1,-8}` placeholders in a template.
    Format {
        /// Template text.
        template: String,
        /// Positional arguments.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Parse a hex color (#RRGGBB or #AARRGGBB).
    Color {
        /// Hex color value.
        hex: String,
    },

    /// Count digits after the decimal point of a number.
    FractionDigits {
        /// Decimal literal, e.g. 1.250.
        #[arg(allow_hyphen_values = true)]
        literal: String,
    },
}

fn parse_pair(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{s}'"))
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();

        match cli.command {
            CliCommand::AddParams {
                address,
                pairs,
                encode,
            } => run_add_params(&mut out, &address, &pairs, encode || cfg.percent_encode())?,
            CliCommand::Params { address, json } => run_params(&mut out, &address, json)?,
            CliCommand::Domain { address } => run_domain(&mut out, &address)?,
            CliCommand::Compare { address, other } => run_compare(&mut out, &address, &other)?,
            CliCommand::Anchor { address, anchor } => run_anchor(&mut out, &address, &anchor)?,
            CliCommand::IsDate {
                value,
                formats,
                w3c,
            } => run_is_date(&mut out, &value, &formats, w3c, &cfg)?,
            CliCommand::Format { template, args } => run_format(&mut out, &template, &args)?,
            CliCommand::Color { hex } => run_color(&mut out, &hex)?,
            CliCommand::FractionDigits { literal } => run_fraction_digits(&mut out, &literal)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
