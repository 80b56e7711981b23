//! Centavo CLI - personal finance companion for the terminal

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod finance;
mod models;
mod output;
mod services;
mod session;
mod token;

use cli::args::GlobalOptions;
use cli::{CalcCommands, Cli, Commands, ConfigCommands, TxCommands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter));
    if debug {
        // --debug wins over RUST_LOG
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.format_timestamp(None).format_target(false).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Register {
            name,
            email,
            password,
        } => cli::auth::register(&opts, &name, &email, password).await,
        Commands::Login { email, password } => cli::auth::login(&opts, &email, password).await,
        Commands::Logout => cli::auth::logout(&opts),
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("centavo version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cli::config::show(&opts),
            ConfigCommands::SetHost { url } => cli::config::set_host(&opts, &url),
        },
        Commands::Tx(tx_cmd) => match tx_cmd {
            TxCommands::Add(args) => cli::tx::add(&opts, &args).await,
            TxCommands::List {
                kind,
                search,
                limit,
            } => cli::tx::list(&opts, kind, search, limit).await,
            TxCommands::Get { ids } => cli::tx::get(&opts, &ids).await,
            TxCommands::Delete { id, yes } => cli::tx::delete(&opts, &id, yes).await,
            TxCommands::Upload { file } => cli::tx::upload(&opts, &file).await,
        },
        Commands::Report { server } => cli::report::run(&opts, server).await,
        Commands::Calc(calc_cmd) => match calc_cmd {
            CalcCommands::Interest {
                principal,
                rate,
                years,
                periods,
            } => cli::calc::interest(&opts, principal, rate, years, periods),
            CalcCommands::Loan {
                principal,
                rate,
                years,
            } => cli::calc::loan(&opts, principal, rate, years),
            CalcCommands::Savings {
                monthly,
                rate,
                years,
            } => cli::calc::savings(&opts, monthly, rate, years),
            CalcCommands::Budget { income } => cli::calc::budget(&opts, &income),
        },
        Commands::Completion { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
