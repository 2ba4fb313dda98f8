//! Command-line interface definitions.
//!
//! Defines the CLI structure for the stakelord application using `clap`.
//! The CLI supports one-shot stake evaluation, an interactive form, an odds
//! format reference, and configuration management.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::odds::OddsFormat;

use super::paths;

/// Kelly criterion stake sizing CLI
#[derive(Parser, Debug)]
#[command(name = "stakelord")]
#[command(version)]
pub struct Cli {
    /// Color output mode [auto, always, never]
    #[arg(
        long,
        global = true,
        default_value = "auto",
        hide_possible_values = true
    )]
    pub color: ColorChoice,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Color output mode for terminal rendering.
#[derive(Clone, Debug, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect automatically
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Top-level subcommands for the stakelord CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one bet and print the recommended stakes
    Stake(StakeArgs),

    /// Fill the stake form interactively, re-evaluating after each pass
    Form(FormArgs),

    /// Explore supported odds formats
    #[command(subcommand)]
    Formats(FormatsCommand),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Show the market insights panel
    Insights,
}

/// Subcommands for `stakelord formats`.
///
/// Provides reference material on the supported odds quotation styles and
/// how they normalize.
#[derive(Subcommand, Debug)]
pub enum FormatsCommand {
    /// List the supported odds formats.
    List,
    /// Display a worked conversion for a specific format.
    Explain {
        /// Name of the format to explain ("american" or "decimal").
        name: String,
    },
}

/// Subcommands for `stakelord config`.
///
/// Provides configuration management utilities including generation,
/// display, and validation of configuration files.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Generate a new configuration file from template.
    Init(ConfigInitArgs),
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument struct for commands that require only a configuration path.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `stake` subcommand.
///
/// Numeric fields are taken as raw strings so that validation (and its
/// error messages) lives in the domain layer, not in clap. Omitted fields
/// fall back to the configuration defaults.
#[derive(Parser, Debug)]
pub struct StakeArgs {
    /// Total bankroll available for betting ($).
    #[arg(short, long)]
    pub bankroll: Option<String>,

    /// Odds quotation, e.g. "+200", "-150", or "2.50".
    #[arg(short, long, allow_hyphen_values = true)]
    pub odds: Option<String>,

    /// Odds quotation style.
    #[arg(short, long, value_enum)]
    pub format: Option<OddsFormat>,

    /// Estimated win probability in percent.
    #[arg(short = 'p', long)]
    pub win_probability: Option<String>,

    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,
}

/// Arguments for the `form` subcommand.
#[derive(Parser, Debug)]
pub struct FormArgs {
    /// Path to the configuration file.
    #[arg(short, long, default_value_os_t = paths::default_config())]
    pub config: PathBuf,

    /// Skip ASCII art banner.
    #[arg(long)]
    pub no_banner: bool,
}

/// Arguments for the `config init` subcommand.
///
/// Controls configuration file generation from the built-in template.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Output path for the generated configuration file.
    #[arg(default_value_os_t = paths::default_config())]
    pub path: PathBuf,
    /// Overwrite the file if it already exists.
    #[arg(long)]
    pub force: bool,
}
