//! The Rolodex application: logging setup and command dispatch.

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

use rolodex_core::{Result, UserStore};
use rolodex_mcp::{RolodexServer, serve_stdio};

use crate::cli::{BaseCommand, CliArgs, ConfigAction};
use crate::config::RolodexConfig;

// ============================================================================
// RolodexApp
// ============================================================================

/// CLI application: resolved configuration plus version identity.
pub struct RolodexApp {
    config: RolodexConfig,
    store_override: Option<String>,
    version: String,
}

impl RolodexApp {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        let config = RolodexConfig::load(args.config.as_deref())?;
        Ok(Self {
            config,
            store_override: args.store.clone(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }

    /// Get a reference to the loaded configuration.
    pub fn config(&self) -> &RolodexConfig {
        &self.config
    }

    /// The user store, honoring the `--store` override.
    pub fn store(&self) -> Result<UserStore> {
        let path = match &self.store_override {
            Some(path) => PathBuf::from(path),
            None => self.config.store_path()?,
        };
        Ok(UserStore::new(path))
    }

    /// Initialise tracing-based logging on stderr.
    ///
    /// stdout is reserved for the MCP protocol stream. Uses the `RUST_LOG`
    /// env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(BaseCommand::Serve) => serve_stdio(RolodexServer::new(self.store()?)).await,
            Some(BaseCommand::Init { force }) => {
                let store = self.store()?;
                store.init(force).await?;
                println!("Initialised empty store at {}", store.path().display());
                Ok(())
            }
            Some(BaseCommand::Health) => {
                let store = self.store()?;
                let count = store.load().await?.len();
                println!("{}: healthy ({count} users)", store.path().display());
                Ok(())
            }
            Some(BaseCommand::Version) => {
                println!("rolodex {}", self.version);
                Ok(())
            }
            Some(BaseCommand::Config(config_cmd)) => {
                self.handle_config(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("rolodex {} — use --help for usage", self.version);
                Ok(())
            }
        }
    }

    /// Dispatch config subcommands.
    fn handle_config(&self, explicit: Option<&str>, action: ConfigAction) -> Result<()> {
        match action {
            ConfigAction::Path => {
                match RolodexConfig::resolve_config_path(explicit) {
                    Some(path) => println!("{}", path.display()),
                    None => println!("(no config path could be resolved)"),
                }
                Ok(())
            }
            ConfigAction::Show => {
                println!("{}", self.config.to_toml_string()?);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
