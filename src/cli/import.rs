//! Import subcommand for shortcut-share CLI
//!
//! Decodes a share string, runs migrations and the import policy, and
//! prints the resulting objects. Advisories go to stderr.

use super::InputSource;
use crate::config::SharePolicy;
use crate::format::OutputFormat;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the import subcommand
#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Share string (reads --file or stdin when omitted)
    #[arg(value_name = "STRING")]
    pub input: Option<String>,

    /// Read the share string from a file
    #[arg(long, value_name = "FILE", conflicts_with = "input")]
    pub file: Option<PathBuf>,

    /// Keep the bar's condition set
    #[arg(long)]
    pub allow_conditions: bool,

    /// Keep hotkeys, including pie hotkeys
    #[arg(long)]
    pub allow_hotkeys: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ImportArgs {
    pub fn source(&self) -> InputSource {
        InputSource::new(self.input.as_deref(), self.file.as_ref())
    }

    /// Flags only ever widen the configured policy.
    pub fn policy(&self, configured: SharePolicy) -> SharePolicy {
        SharePolicy {
            allow_import_conditions: configured.allow_import_conditions || self.allow_conditions,
            allow_import_hotkeys: configured.allow_import_hotkeys || self.allow_hotkeys,
            ..configured
        }
    }
}
