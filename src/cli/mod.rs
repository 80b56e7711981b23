//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
pub use clap_complete::Shell;

use crate::client::models::RecurringPeriod;
use crate::services::TransactionKind;

pub mod args;
pub mod auth;
pub mod calc;
pub mod completions;
pub mod config;
pub mod context;
pub mod report;
pub mod status;
pub mod tx;

pub use args::OutputFormat;
pub use context::CommandContext;

/// Centavo - personal finance companion for the terminal
#[derive(Parser, Debug)]
#[command(name = "centavo")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json) [default: config value or pretty]
    #[arg(
        long,
        global = true,
        env = "CENTAVO_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "CENTAVO_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the backend host
    #[arg(long, global = true, env = "CENTAVO_API_HOST", hide_env = true)]
    pub api_host: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "CENTAVO_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an account
    Register {
        /// Display name (at least 3 characters)
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        /// Password; prompted twice when omitted
        #[arg(long, env = "CENTAVO_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,

        /// Password; prompted when omitted
        #[arg(long, env = "CENTAVO_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show configuration and session status
    Status,

    /// Display version information
    Version,

    /// Manage local configuration
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Record and browse transactions
    #[command(subcommand)]
    Tx(TxCommands),

    /// Summarise income, expenses and spending by category
    Report {
        /// Use the server's report endpoint instead of the full list
        #[arg(long)]
        server: bool,
    },

    /// Financial calculators (offline)
    #[command(subcommand)]
    Calc(CalcCommands),

    /// Generate shell completions
    #[command(after_help = "\
Examples:
  bash:   centavo completion bash > /etc/bash_completion.d/centavo
  zsh:    centavo completion zsh > \"${fpath[1]}/_centavo\"
  fish:   centavo completion fish > ~/.config/fish/completions/centavo.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the config file
    Show,

    /// Set the backend host, e.g. https://api.example.com
    SetHost {
        url: String,
    },
}

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TxCommands {
    /// Record a new transaction (an expense unless --income)
    Add(TxAddArgs),

    /// List transactions, newest first
    List {
        /// Which transactions to show
        #[arg(long, value_enum, default_value_t = TransactionKind::All)]
        kind: TransactionKind,

        /// Match description or category (case-insensitive)
        #[arg(long, short = 's')]
        search: Option<String>,

        /// Show at most N transactions
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show one or more transactions
    Get {
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Delete a transaction
    Delete {
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Upload a receipt image and print its URL
    Upload {
        file: PathBuf,
    },
}

/// Arguments for `tx add`
#[derive(Args, Debug, Clone)]
pub struct TxAddArgs {
    /// Positive amount, e.g. 149.90
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,

    /// What it was for (at least 3 characters)
    #[arg(long, short = 'd')]
    pub description: String,

    #[arg(long, short = 'c')]
    pub category: String,

    /// Date as YYYY-MM-DD [default: today]
    #[arg(long)]
    pub date: Option<String>,

    /// Record as income instead of an expense
    #[arg(long)]
    pub income: bool,

    /// Repeat period (daily, weekly, monthly, yearly)
    #[arg(long, value_name = "PERIOD")]
    pub recurring: Option<RecurringPeriod>,

    /// Receipt image to upload and attach
    #[arg(long, conflicts_with = "receipt_url")]
    pub receipt: Option<PathBuf>,

    /// URL of an already uploaded receipt
    #[arg(long)]
    pub receipt_url: Option<String>,

    /// Where it happened
    #[arg(long)]
    pub location: Option<String>,
}

/// Calculator subcommands
#[derive(Subcommand, Debug)]
pub enum CalcCommands {
    /// Compound interest: future value of a principal
    Interest {
        #[arg(long, allow_hyphen_values = true)]
        principal: f64,

        /// Annual rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,

        #[arg(long, allow_hyphen_values = true)]
        years: f64,

        /// Compounding periods per year
        #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
        periods: i64,
    },

    /// Monthly payment of an amortized loan
    Loan {
        #[arg(long, allow_hyphen_values = true)]
        principal: f64,

        /// Annual rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,

        /// Term in whole years
        #[arg(long)]
        years: u32,
    },

    /// Savings from a fixed monthly contribution
    Savings {
        #[arg(long, allow_hyphen_values = true)]
        monthly: f64,

        /// Annual rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: f64,

        #[arg(long)]
        years: u32,
    },

    /// 50/30/20 split of an income
    Budget {
        #[arg(long)]
        income: String,
    },
}
