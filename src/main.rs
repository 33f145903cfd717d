//! shortcut-share
//!
//! Command-line front end for exporting and importing shortcut bar share
//! strings.

use anyhow::{Context, Result, bail};
use clap::Parser;
use shortcut_share::cli::export::{ExportArgs, ObjectKind};
use shortcut_share::cli::import::ImportArgs;
use shortcut_share::cli::inspect::InspectArgs;
use shortcut_share::cli::{Cli, Command, write_output};
use shortcut_share::codec;
use shortcut_share::config::Config;
use shortcut_share::export::{export_bar, export_condition_set, export_shortcut};
use shortcut_share::format::{self, render};
use shortcut_share::import::{self, try_import};
use shortcut_share::logging::{LogTarget, init_logging};
use shortcut_share::model::{Bar, ConditionSet, Shortcut};
use tracing::{debug, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogTarget::parse(&cli.log), cli.verbose)?;

    let config = Config::load_or_default(cli.config.as_deref())?;
    debug!(?config, "Configuration loaded");

    match cli.command {
        Command::Export(args) => run_export(&config, args),
        Command::Import(args) => run_import(&config, args),
        Command::Inspect(args) => run_inspect(args),
    }
}

/// Run the export command
fn run_export(config: &Config, args: ExportArgs) -> Result<()> {
    let text = std::fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let input_format = args.input_format();
    let mode = args.mode(config.export.mode);

    let share = match args.kind {
        ObjectKind::Bar => {
            let bar: Bar = format::parse(&text, input_format)?;
            export_bar(&bar, mode)?
        }
        ObjectKind::Shortcut => {
            let shortcut: Shortcut = format::parse(&text, input_format)?;
            export_shortcut(&shortcut, mode)?
        }
        ObjectKind::ConditionSet => {
            let condition_set: ConditionSet = format::parse(&text, input_format)?;
            export_condition_set(&condition_set, mode, &config.sharing)?
        }
    };

    info!(kind = ?args.kind, ?mode, len = share.len(), "Exported");
    write_output(args.output.as_ref(), &share)
}

/// Run the import command
fn run_import(config: &Config, args: ImportArgs) -> Result<()> {
    let text = args.source().read()?;
    let policy = args.policy(config.sharing);

    let report = try_import(&text, &policy, true);
    for diagnostic in &report.diagnostics {
        eprintln!("{}", diagnostic);
    }
    if report.failed() {
        bail!("Nothing was imported");
    }

    let rendered = render(&report.result, args.format)?;
    write_output(args.output.as_ref(), &rendered)
}

/// Run the inspect command
fn run_inspect(args: InspectArgs) -> Result<()> {
    let text = args.source().read()?;
    let json = codec::decompress(&text)?;
    let payload = codec::parse_json(&json).context("Payload is not JSON")?;
    println!("{}", serde_json::to_string_pretty(&payload)?);

    match import::decode(&text) {
        Ok(envelope) if envelope.has_legacy() => {
            eprintln!("Legacy payload (version {})", envelope.version)
        }
        Ok(envelope) => eprintln!("Envelope version {}", envelope.version),
        Err(e) => eprintln!("Not importable: {}", e),
    }
    Ok(())
}
