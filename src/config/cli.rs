use crate::config::toml_config::{ClientSettings, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "example-service")]
#[command(about = "Construct the example service and print its value")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Build an HTTP client and hand it to the service")]
    pub with_client: bool,

    #[arg(long, help = "HTTP client timeout in seconds")]
    pub timeout: Option<u64>,

    #[arg(long, help = "HTTP client user agent")]
    pub user_agent: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Load the config file if one was given, then apply command-line overrides.
    pub fn client_settings(&self) -> Result<ClientSettings> {
        let mut settings = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.client,
            None => ClientSettings::default(),
        };

        if self.with_client {
            settings.enabled = true;
        }
        if let Some(timeout) = self.timeout {
            settings.timeout_seconds = Some(timeout);
        }
        if let Some(user_agent) = &self.user_agent {
            settings.user_agent = Some(user_agent.clone());
        }

        settings.validate()?;
        Ok(settings)
    }
}
