//! Export subcommand for shortcut-share CLI
//!
//! Reads a plain JSON or YAML description of a bar, shortcut or condition
//! set and prints its share string.

use crate::codec::ExportMode;
use crate::format::OutputFormat;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Kind of object held by the input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ObjectKind {
    #[default]
    Bar,
    Shortcut,
    ConditionSet,
}

/// Arguments for the export subcommand
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// JSON or YAML file describing the object
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// What the file describes
    #[arg(short, long, value_enum, default_value_t = ObjectKind::Bar)]
    pub kind: ObjectKind,

    /// Keep every field and write full type names
    ///
    /// Full exports are larger but do not depend on the alias table.
    /// The configured export mode is used when omitted.
    #[arg(long)]
    pub full: bool,

    /// Input format (detected from the file extension otherwise)
    #[arg(long, value_enum)]
    pub input_format: Option<OutputFormat>,

    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// `--full` wins over the configured mode.
    pub fn mode(&self, configured: ExportMode) -> ExportMode {
        if self.full { ExportMode::Full } else { configured }
    }

    pub fn input_format(&self) -> OutputFormat {
        self.input_format
            .unwrap_or_else(|| OutputFormat::from_path(&self.file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(file: &str, full: bool) -> ExportArgs {
        ExportArgs {
            file: PathBuf::from(file),
            kind: ObjectKind::Bar,
            full,
            input_format: None,
            output: None,
        }
    }

    #[test]
    fn test_mode() {
        assert_eq!(args("b.json", false).mode(ExportMode::Compact), ExportMode::Compact);
        assert_eq!(args("b.json", false).mode(ExportMode::Full), ExportMode::Full);
        assert_eq!(args("b.json", true).mode(ExportMode::Compact), ExportMode::Full);
    }

    #[test]
    fn test_input_format() {
        assert_eq!(args("bar.yml", false).input_format(), OutputFormat::Yaml);
        assert_eq!(args("bar.json", false).input_format(), OutputFormat::Json);

        let mut forced = args("bar.txt", false);
        forced.input_format = Some(OutputFormat::Yaml);
        assert_eq!(forced.input_format(), OutputFormat::Yaml);
    }
}
