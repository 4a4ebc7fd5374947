//! Chargen CLI - generate random characters or validate a character document
//!
//! Tier selection is explicit on both commands; validation defaults to the
//! player tier.

mod output;

pub use output::OutputFormat;

use crate::character::{self, Character};
use crate::dice::RngSource;
use crate::error::Result;
use crate::generator;
use crate::tier::Tier;
use crate::validator::{self, ValidationReport};
use clap::{Args, Parser, Subcommand};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Exit code for a document that breaks the rules
pub const EXIT_ILLEGAL: u8 = 2;

/// Chargen CLI application
#[derive(Parser, Debug)]
#[command(name = "chargen")]
#[command(
    about = "Generates a character. If a character is supplied as a file, validates it",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Document format for written characters
    #[arg(long, value_enum, default_value = "yaml", global = true)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a random character
    Generate(GenerateArgs),

    /// Validate a character document and refresh its derived statistics
    Validate(ValidateArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Rule set: player, nc-tier1, nc-tier2 or nc-tier3
    #[arg(short, long, env = "CHARGEN_TIER", default_value = "player")]
    tier: Tier,

    /// Age of the character; rolled on 3d6 when omitted
    #[arg(short, long)]
    age: Option<u32>,

    /// Name of the character
    #[arg(short, long, default_value = "Ser Example")]
    name: String,

    /// Seed for reproducible dice
    #[arg(short, long, env = "CHARGEN_SEED")]
    seed: Option<u64>,

    /// Write the document here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// A character document, keyed by the character's name
    #[arg(short, long)]
    file: PathBuf,

    /// Rule set to validate against
    #[arg(short, long, env = "CHARGEN_TIER", default_value = "player")]
    tier: Tier,

    /// Write the refreshed document here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// What a CLI run ended with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Generated,
    Validated { legal: bool },
}

impl RunOutcome {
    pub fn exit_code(self) -> u8 {
        match self {
            RunOutcome::Validated { legal: false } => EXIT_ILLEGAL,
            _ => 0,
        }
    }
}

/// Run using the current process arguments.
pub fn run() -> Result<RunOutcome> {
    run_with_args(std::env::args_os())
}

/// Run using the provided argument iterator.
pub fn run_with_args<I, T>(args: I) -> Result<RunOutcome>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);

    // Logs go to stderr so documents on stdout stay clean
    let filter = if cli.verbose { "debug" } else { "info" };
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    match cli.command {
        Commands::Generate(args) => {
            let text = generate_command(&args, cli.format)?;
            if !text.is_empty() {
                print!("{}", text);
            }
            Ok(RunOutcome::Generated)
        }
        Commands::Validate(args) => {
            let (report, _) = validate_command(&args, cli.format)?;
            println!("{}", report);
            Ok(RunOutcome::Validated {
                legal: report.is_legal(),
            })
        }
    }
}

/// Generate a character; returns the document unless it went to a file
fn generate_command(args: &GenerateArgs, format: OutputFormat) -> Result<String> {
    let mut dice = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };
    let character = generator::generate(args.tier, args.age, &args.name, &mut dice);

    match &args.output {
        Some(path) => {
            character::write_file(path, &character, format.into())?;
            Ok(String::new())
        }
        None => character::render(&character, format.into()),
    }
}

/// Validate a document, writing the refreshed character when asked
fn validate_command(
    args: &ValidateArgs,
    format: OutputFormat,
) -> Result<(ValidationReport, Character)> {
    let mut character = character::read_file(&args.file)?;
    let report = validator::validate(&mut character, args.tier);
    if let Some(path) = &args.output {
        character::write_file(path, &character, format.into())?;
    }
    Ok((report, character))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChargenError;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("chargen").chain(args.iter().copied()))
    }

    #[test]
    fn test_generate_defaults() {
        let cli = parse(&["generate"]);
        assert_eq!(cli.format, OutputFormat::Yaml);
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.tier, Tier::PlayerCharacter);
                assert_eq!(args.name, "Ser Example");
                assert!(args.age.is_none());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_tier_flag() {
        let cli = parse(&["validate", "--file", "c.yml", "--tier", "nc-tier2"]);
        match cli.command {
            Commands::Validate(args) => assert_eq!(args.tier, Tier::NcTier2),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_tier_rejected() {
        let result = Cli::try_parse_from(["chargen", "generate", "--tier", "dragon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let args = GenerateArgs {
            tier: Tier::NcTier1,
            age: None,
            name: "Ser Example".to_string(),
            seed: Some(99),
            output: None,
        };
        let first = generate_command(&args, OutputFormat::Yaml).unwrap();
        let second = generate_command(&args, OutputFormat::Yaml).unwrap();
        assert_eq!(first, second);
        assert!(first.starts_with("Ser Example:"));
    }

    #[test]
    fn test_generate_then_validate_file() {
        let dir = tempfile::tempdir().unwrap();
        let generated = dir.path().join("generated.yml");
        let refreshed = dir.path().join("refreshed.json");

        let args = GenerateArgs {
            tier: Tier::PlayerCharacter,
            age: Some(40),
            name: "Lady Example".to_string(),
            seed: Some(3),
            output: Some(generated.clone()),
        };
        assert_eq!(generate_command(&args, OutputFormat::Yaml).unwrap(), "");

        let args = ValidateArgs {
            file: generated,
            tier: Tier::PlayerCharacter,
            output: Some(refreshed.clone()),
        };
        let (report, character) = validate_command(&args, OutputFormat::Json).unwrap();
        assert_eq!(character.name, "Lady Example");
        assert_eq!(character.age_category.index(), 4);
        assert!(report.check(validator::CheckKind::Derived).unwrap().passed);

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(refreshed).unwrap()).unwrap();
        assert_eq!(json["Lady Example"]["Background"]["Age"], 40);
    }

    #[test]
    fn test_validate_missing_file() {
        let args = ValidateArgs {
            file: PathBuf::from("/nonexistent/character.yml"),
            tier: Tier::PlayerCharacter,
            output: None,
        };
        assert!(matches!(
            validate_command(&args, OutputFormat::Yaml),
            Err(ChargenError::Io(_))
        ));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(RunOutcome::Generated.exit_code(), 0);
        assert_eq!(RunOutcome::Validated { legal: true }.exit_code(), 0);
        assert_eq!(RunOutcome::Validated { legal: false }.exit_code(), EXIT_ILLEGAL);
    }
}
