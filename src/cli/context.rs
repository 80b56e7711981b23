//! Command execution context
//!
//! Loads config, opens the session store and builds the API client so
//! command handlers start from ready-to-use services.

use std::sync::Arc;

use log::{debug, warn};

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::client::CentavoClient;
use crate::config::Config;
use crate::error::Result;
use crate::services::{AuthService, TransactionService};
use crate::session::{SessionStore, SqliteSessionStore};

/// Context for command execution containing config, session and client.
pub struct CommandContext {
    /// Loaded configuration, defaults when no file exists
    pub config: Config,
    /// Session store shared with the client
    pub store: Arc<dyn SessionStore>,
    /// API client (Arc-wrapped so services can share it)
    pub client: Arc<CentavoClient>,
    /// Effective output format
    pub format: OutputFormat,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// The session store lives next to the config file, so `--config`
    /// also selects which session is used.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = Config::load_or_default(opts.config_ref())?;

        let data_dir = Config::data_dir(opts.config_ref())?;
        let store: Arc<dyn SessionStore> = Arc::new(SqliteSessionStore::open_at(&data_dir)?);

        let api_host = config.api_host(opts.api_host_ref());
        Config::validate_host(&api_host)?;
        debug!("Using API host {}", api_host);

        let client = Arc::new(CentavoClient::new(&api_host, store.clone())?);
        let format = resolve_format(opts.format, &config);

        Ok(Self {
            config,
            store,
            client,
            format,
        })
    }

    pub fn auth_service(&self) -> AuthService {
        AuthService::new(self.client.clone(), self.store.clone())
    }

    pub fn transaction_service(&self) -> TransactionService {
        TransactionService::new(self.client.clone())
    }
}

/// CLI/env format first, then the config preference, then pretty
pub fn resolve_format(cli_format: Option<OutputFormat>, config: &Config) -> OutputFormat {
    if let Some(format) = cli_format {
        return format;
    }

    match config.preferences.format.as_deref() {
        Some(name) => name.parse().unwrap_or_else(|e| {
            warn!("Ignoring preferences.format in config: {}", e);
            OutputFormat::default()
        }),
        None => OutputFormat::default(),
    }
}
