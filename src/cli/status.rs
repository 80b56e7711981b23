//! Status command implementation

use colored::Colorize;
use serde::Serialize;

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::output::formatters::{format_local_time, format_remaining};
use crate::output::print_json;
use crate::session::UserInfo;

#[derive(Debug, Serialize)]
struct StatusReport {
    config_path: String,
    config_exists: bool,
    api_host: String,
    signed_in: bool,
    token_expired: Option<bool>,
    expires_at: Option<String>,
    user: Option<UserInfo>,
}

/// Run the status command to display configuration and session status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let config_path = Config::resolve_path(opts.config_ref())?;
    let api_host = ctx.config.api_host(opts.api_host_ref());

    let auth = ctx.auth_service();
    let session = auth.current_session()?;
    let user = auth.user_info()?;
    let expires_at = session.as_ref().and_then(|s| s.claims.expires_at_utc());

    if ctx.format == OutputFormat::Json {
        return print_json(&StatusReport {
            config_path: config_path.display().to_string(),
            config_exists: config_path.exists(),
            api_host,
            signed_in: session.as_ref().is_some_and(|s| !s.is_expired()),
            token_expired: session.as_ref().map(|s| s.is_expired()),
            expires_at: expires_at.map(|t| t.to_rfc3339()),
            user,
        });
    }

    println!("{}\n", "Centavo Status".bold());

    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not created yet, using defaults)".dimmed()
        );
    }
    println!("API host: {}", api_host.cyan());
    println!("Currency: {}", ctx.config.preferences.currency);
    println!();

    match &session {
        None => {
            println!("{} Not signed in", "✗".red());
            println!("  → Run {} to sign in", "centavo login".cyan());
        }
        Some(s) if s.is_expired() => {
            println!(
                "{} Session expired (requests are sent without credentials)",
                "⚠".yellow()
            );
            println!("  → Run {} to sign in again", "centavo login".cyan());
        }
        Some(_) => {
            let remaining = expires_at
                .map(|t| format!(" (expires in {})", format_remaining(t - chrono::Utc::now())))
                .unwrap_or_default();
            println!("{} Signed in{}", "✓".green(), remaining);
        }
    }

    if let Some(expires_at) = expires_at {
        println!("  Token expiry: {}", format_local_time(expires_at).dimmed());
    }

    if let Some(user) = user {
        if !user.name.is_empty() {
            println!("  Name: {}", user.name.bold());
        }
        println!("  Email: {}", user.email);
        if !user.id.is_empty() {
            println!("  User ID: {}", user.id.dimmed());
        }
    }

    println!();
    Ok(())
}
