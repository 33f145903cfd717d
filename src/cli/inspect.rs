//! Inspect subcommand: show what a share string actually carries.

use super::InputSource;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the inspect subcommand
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Share string (reads --file or stdin when omitted)
    #[arg(value_name = "STRING")]
    pub input: Option<String>,

    /// Read the share string from a file
    #[arg(long, value_name = "FILE", conflicts_with = "input")]
    pub file: Option<PathBuf>,
}

impl InspectArgs {
    pub fn source(&self) -> InputSource {
        InputSource::new(self.input.as_deref(), self.file.as_ref())
    }
}
