//! Local configuration commands

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::resolve_format;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;
use crate::output::print_json;

/// Run `config show`; unlike other commands this reports a missing file
pub fn show(opts: &GlobalOptions) -> Result<()> {
    let path = Config::resolve_path(opts.config_ref())?;
    let config = Config::load_from(&path)?;

    match resolve_format(opts.format, &config) {
        OutputFormat::Json => print_json(&serde_json::json!({
            "path": path.display().to_string(),
            "config": config,
            "effective_api_host": config.api_host(opts.api_host_ref()),
        })),
        _ => {
            println!("Config file: {}\n", path.display().to_string().cyan());
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| crate::error::ConfigError::Invalid(e.to_string()))?;
            print!("{}", yaml);
            Ok(())
        }
    }
}

/// Run `config set-host <URL>`, creating the config file if needed
pub fn set_host(opts: &GlobalOptions, url: &str) -> Result<()> {
    let host = url.trim().trim_end_matches('/');
    Config::validate_host(host)?;

    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_or_default(opts.config_ref())?;
    config.api_host = Some(host.to_string());
    config.save_to(&path)?;

    log::debug!("Saved api_host={} to {}", host, path.display());

    match resolve_format(opts.format, &config) {
        OutputFormat::Json => print_json(&serde_json::json!({ "api_host": host })),
        _ => {
            println!(
                "{} API host set to {} in {}",
                "✓".green(),
                host.cyan(),
                path.display()
            );
            Ok(())
        }
    }
}
