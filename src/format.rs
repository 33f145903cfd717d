//! Output formatting for decoded objects.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// Output format for import results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }

    /// Guess from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_str)
            .unwrap_or_default()
    }
}

/// Render `value` in the requested format. JSON is pretty-printed.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    })
}

/// Parse a plain (untagged) JSON or YAML document.
pub fn parse<T: serde::de::DeserializeOwned>(text: &str, format: OutputFormat) -> Result<T> {
    Ok(match format {
        OutputFormat::Json => serde_json::from_str(text)?,
        OutputFormat::Yaml => serde_yaml::from_str(text)?,
    })
}
