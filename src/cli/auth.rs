//! Register, login and logout commands

use colored::Colorize;
use dialoguer::{Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use crate::cli::{CommandContext, OutputFormat};
use crate::error::Result;
use crate::output::print_json;
use crate::services::AuthOutcome;

/// Use the given password or prompt for it without echo
fn password_or_prompt(password: Option<String>, prompt: &str) -> Result<String> {
    match password {
        Some(p) => Ok(p),
        None => Ok(Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()?),
    }
}

fn print_outcome(outcome: &AuthOutcome, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        return print_json(&serde_json::json!({
            "signed_in": outcome.signed_in,
            "user": outcome.user,
            "message": outcome.message,
        }));
    }

    if let Some(message) = &outcome.message {
        println!("{}", message.dimmed());
    }

    if outcome.signed_in {
        let who = if outcome.user.name.is_empty() {
            outcome.user.email.clone()
        } else {
            format!("{} <{}>", outcome.user.name, outcome.user.email)
        };
        println!("{} Signed in as {}", "✓".green(), who.bold());
    } else {
        println!("{} Account created for {}", "✓".green(), outcome.user.email.bold());
        println!("  → Run {} to sign in", "centavo login".cyan());
    }
    Ok(())
}

/// Run the register command
pub async fn register(
    opts: &GlobalOptions,
    name: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let ctx = CommandContext::new(opts)?;

    // A password given on the command line is its own confirmation
    let (password, confirmation) = match password {
        Some(p) => (p.clone(), p),
        None => (
            password_or_prompt(None, "Password")?,
            password_or_prompt(None, "Confirm password")?,
        ),
    };

    let outcome = ctx
        .auth_service()
        .register(name, email, &password, &confirmation)
        .await?;

    print_outcome(&outcome, ctx.format)
}

/// Run the login command
pub async fn login(opts: &GlobalOptions, email: &str, password: Option<String>) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let password = password_or_prompt(password, "Password")?;

    let outcome = ctx.auth_service().login(email, &password).await?;
    print_outcome(&outcome, ctx.format)
}

/// Run the logout command
pub fn logout(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let auth = ctx.auth_service();
    let was_signed_in = auth.current_session()?.is_some();

    auth.logout()?;

    match ctx.format {
        OutputFormat::Json => print_json(&serde_json::json!({ "signed_out": was_signed_in })),
        _ => {
            if was_signed_in {
                println!("{} Signed out", "✓".green());
            } else {
                println!("{} No active session", "○".dimmed());
            }
            Ok(())
        }
    }
}
