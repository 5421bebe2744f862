//! The `apparel config` command for configuration management.

use apparel_core::Config;
use clap::{Args, Subcommand};

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display current configuration
    Show,

    /// Show config file path
    Path,

    /// Write a config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            // Strict load here: a broken file should be reported, not masked by defaults.
            let config = Config::load()?;
            print!("{}", render_show(&config)?);
        }

        ConfigCommand::Path => {
            let path = Config::default_path();
            println!("{}", path.display());
            if !path.exists() {
                tracing::info!("No config file yet; defaults are in use. Run `apparel config init`.");
            }
        }

        ConfigCommand::Init { force } => {
            let path = Config::default_path();

            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at: {}\nUse --force to overwrite.",
                    path.display()
                );
            }

            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }

            std::fs::write(&path, Config::default().to_toml()?)?;

            tracing::info!("Config file created at: {}", path.display());
            println!("Configuration initialized at: {}", path.display());
        }
    }

    Ok(())
}

/// Config as TOML with a literal API key masked, followed by a note on
/// whether a key is available to `describe`.
fn render_show(config: &Config) -> anyhow::Result<String> {
    let mut shown = config.clone();
    if !is_env_reference(&shown.gemini.api_key) && !shown.gemini.api_key.is_empty() {
        shown.gemini.api_key = "***".to_string();
    }

    let key_status = if config.gemini.resolved_api_key().is_some() {
        "resolved"
    } else {
        "NOT SET (set GEMINI_API_KEY or gemini.api_key)"
    };

    Ok(format!(
        "{}\n# gemini.api_key: {key_status}\n",
        shown.to_toml()?.trim_end()
    ))
}

fn is_env_reference(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_masks_literal_key() {
        let mut config = Config::default();
        config.gemini.api_key = "AIza-secret-123".to_string();

        let shown = render_show(&config).unwrap();
        assert!(!shown.contains("AIza-secret-123"));
        assert!(shown.contains("api_key = \"***\""));
        assert!(shown.ends_with("# gemini.api_key: resolved\n"));
    }

    #[test]
    fn test_show_keeps_env_reference_and_reports_missing_key() {
        let mut config = Config::default();
        config.gemini.api_key = "${APPAREL_SHOW_TEST_UNSET_KEY}".to_string();

        let shown = render_show(&config).unwrap();
        assert!(shown.contains("${APPAREL_SHOW_TEST_UNSET_KEY}"));
        assert!(shown.contains("# gemini.api_key: NOT SET"));
        assert!(shown.contains("[gemini]"));
    }
}
