//! CLI command definitions for shortcut-share
//!
//! This module defines the CLI structure using clap's derive macros.
//! The main entry point is the `Cli` struct which contains subcommands.

pub mod export;
pub mod import;
pub mod inspect;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use export::ExportArgs;
use import::ImportArgs;
use inspect::InspectArgs;
use std::io::Read;
use std::path::PathBuf;

/// Encode and decode shortcut bar share strings
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Logging output: 0/off, 1/stdout, 2/stderr (default), or filename
    #[arg(short, long, default_value = "2", global = true)]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Turn a JSON or YAML bar, shortcut or condition set into a share string
    Export(ExportArgs),

    /// Decode a share string, applying migrations and import policy
    Import(ImportArgs),

    /// Show the raw tagged payload of a share string
    Inspect(InspectArgs),
}

/// Where a share string is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(String),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    pub fn new(inline: Option<&str>, file: Option<&PathBuf>) -> Self {
        match (inline, file) {
            (Some(text), _) => InputSource::Inline(text.to_string()),
            (None, Some(path)) => InputSource::File(path.clone()),
            (None, None) => InputSource::Stdin,
        }
    }

    /// Read the whole input.
    pub fn read(&self) -> Result<String> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display())),
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                Ok(text)
            }
        }
    }
}

/// Write `text` to `output`, or stdout when none is given.
pub fn write_output(output: Option<&PathBuf>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
