//! Output formatting for the CLI

use crate::character::DocumentFormat;
use clap::ValueEnum;

/// Format of the character documents the CLI writes
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// YAML, the native document format
    #[default]
    Yaml,
    /// Pretty-printed JSON
    Json,
}

impl From<OutputFormat> for DocumentFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Yaml => DocumentFormat::Yaml,
            OutputFormat::Json => DocumentFormat::Json,
        }
    }
}
