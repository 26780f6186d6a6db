pub mod adapters;
pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::build_http_client;
pub use config::toml_config::{ClientSettings, TomlConfig};
pub use domain::ports::NetworkClient;
pub use domain::service::Service;
pub use utils::error::{Result, ServiceError};
