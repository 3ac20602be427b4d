//! Tracing setup for the CLI: append to a log file under the XDG state dir,
//! or write to stderr when that is not possible.
//!
//! Stdout is left alone; CLI commands print their results there.

use anyhow::{anyhow, Context, Result};
use std::fs::{File, OpenOptions};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = "extnet.log";
const DEFAULT_FILTER: &str = "info,extnet=debug,extnet_core=debug";

/// `$XDG_STATE_HOME/extnet/extnet.log`; the parent directory is created.
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("extnet").context("locate XDG directories")?;
    dirs.place_state_file(LOG_FILE_NAME)
        .context("create log directory")
}

/// Every event writes through a shared handle to the same append-mode file.
struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = &'a File;

    fn make_writer(&'a self) -> Self::Writer {
        &self.0
    }
}

/// Log to [`log_file_path`]. Errors leave no subscriber installed, so the
/// caller can fall back to [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    install(BoxMakeWriter::new(LogFile(file)))?;
    tracing::debug!(path = %path.display(), "logging to file");
    Ok(())
}

pub fn init_logging_stderr() {
    // A subscriber may already be set; keep it.
    let _ = install(BoxMakeWriter::new(io::stderr));
}

fn install(writer: BoxMakeWriter) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("install subscriber: {e}"))
}
