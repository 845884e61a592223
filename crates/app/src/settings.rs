//! Handles settings for the application. Configuration is read from an
//! optional `settings.toml`, then from `COST_MANAGER_*` environment
//! variables, then from command line flags.
use clap::Parser;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "settings";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Database {
    Memory,
    Sqlite(String),
}

impl Default for Database {
    fn default() -> Self {
        Self::Sqlite("./cost_manager.db".to_string())
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct App {
    pub level: String,
    /// IANA name, used for month boundaries.
    pub timezone: String,
}

impl Default for App {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Server {
    pub bind: Option<String>,
    pub port: u16,
    pub database: Database,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: None,
            port: 3000,
            database: Database::default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub app: App,
    pub server: Server,
}

#[derive(Debug, Parser)]
#[command(name = "cost_manager", version)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the listening address.
    #[arg(long)]
    bind: Option<String>,
    /// Override the listening port.
    #[arg(long)]
    port: Option<u16>,
    /// Override timezone (IANA name).
    #[arg(long)]
    timezone: Option<String>,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let args = Args::parse();

        let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
        let mut settings = Self::from_builder(
            Config::builder().add_source(File::with_name(config_path).required(false)),
        )?;

        if let Some(bind) = args.bind {
            settings.server.bind = Some(bind);
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
        if let Some(timezone) = args.timezone {
            settings.app.timezone = timezone;
        }

        Ok(settings)
    }

    fn from_builder(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, ConfigError> {
        builder
            .add_source(
                Environment::with_prefix("COST_MANAGER")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
