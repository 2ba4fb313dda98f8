//! Handler for the `config` command group.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::Config;
use crate::error::{ConfigError, Result};

use super::output;

/// Default config template with documentation.
const CONFIG_TEMPLATE: &str = include_str!("../../config.toml.example");

/// Execute `config init`.
pub fn execute_init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::InvalidValue {
            field: "config",
            reason: "file already exists (use --force to overwrite)".to_string(),
        }
        .into());
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let spinner = output::spinner("Writing configuration...");
    fs::write(path, CONFIG_TEMPLATE)?;
    output::spinner_success(&spinner, "Configuration saved");

    output::section("Config Initialized");
    output::field("Path", path.display());
    output::section("Next Steps");
    output::note(&format!("1. Edit {} with your defaults", path.display()));
    output::note(&format!(
        "2. Check: {}",
        output::highlight(format!("stakelord config validate -c {}", path.display()))
    ));
    output::note(&format!("3. Run:   {}", output::highlight("stakelord form")));
    Ok(())
}

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let from_file = path.exists();
    let config = Config::load_or_default(path)?;
    config.init_logging();

    output::section("Effective Configuration");
    if from_file {
        output::field("Source", path.display());
    } else {
        output::field("Source", "built-in defaults (no config file found)");
    }

    output::section("Form Defaults");
    output::field("Bankroll", output::currency(config.defaults.bankroll));
    output::field("Odds format", config.defaults.odds_format);
    output::field("Odds", config.defaults.odds);
    output::field(
        "Win estimate",
        format!("{}%", config.defaults.win_probability),
    );

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());

    let config = Config::load(path)?;
    config.init_logging();
    output::success("Config file is valid");

    info!(
        level = %config.logging.level,
        format = %config.logging.format,
        "config validated"
    );

    output::field(
        "Next",
        format!("stakelord config show -c {}", path.display()),
    );

    Ok(())
}
