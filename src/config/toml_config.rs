use crate::utils::error::{Result, ServiceError};
use crate::utils::validation::{
    validate_header_value, validate_non_empty_string, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("example-service/", env!("CARGO_PKG_VERSION"));

const MAX_TIMEOUT_SECONDS: u64 = 3600;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub client: ClientSettings,
}

/// Settings for the HTTP client injected into the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// Build a client at all. When false the service gets `None`.
    #[serde(default)]
    pub enabled: bool,
    pub timeout_seconds: Option<u64>,
    pub user_agent: Option<String>,
}

impl ClientSettings {
    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }

    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}

impl Validate for ClientSettings {
    fn validate(&self) -> Result<()> {
        validate_range(
            "client.timeout_seconds",
            self.timeout_seconds(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;

        if let Some(user_agent) = &self.user_agent {
            validate_non_empty_string("client.user_agent", user_agent)?;
            validate_header_value("client.user_agent", user_agent)?;
        }

        Ok(())
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a config string. `${VAR}` references are replaced from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ServiceError::ConfigParseError {
            message: e.to_string(),
        })
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        use std::sync::OnceLock;

        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid pattern"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.client.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_client_section() {
        let toml_content = r#"
[client]
enabled = true
timeout_seconds = 5
user_agent = "probe/2.0"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert!(config.client.enabled);
        assert_eq!(config.client.timeout_seconds(), 5);
        assert_eq!(config.client.user_agent(), "probe/2.0");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(!config.client.enabled);
        assert_eq!(config.client.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert!(config.client.user_agent().starts_with("example-service/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("EXAMPLE_SERVICE_TEST_AGENT", "from-env/1.0");
        let toml_content = r#"
[client]
user_agent = "${EXAMPLE_SERVICE_TEST_AGENT}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.client.user_agent(), "from-env/1.0");
    }

    #[test]
    fn test_unset_env_var_is_left_alone() {
        let toml_content = r#"
[client]
user_agent = "${EXAMPLE_SERVICE_SURELY_UNSET_VAR}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.client.user_agent(),
            "${EXAMPLE_SERVICE_SURELY_UNSET_VAR}"
        );
    }

    #[test]
    fn test_malformed_toml_is_rejected() {
        let err = TomlConfig::from_toml_str("[client\nenabled = ").unwrap_err();
        assert!(matches!(err, ServiceError::ConfigParseError { .. }));
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let zero_timeout = ClientSettings {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        assert!(zero_timeout.validate().is_err());

        let blank_agent = ClientSettings {
            user_agent: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank_agent.validate().is_err());

        let multiline_agent = ClientSettings {
            user_agent: Some("bad\nagent".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            multiline_agent.validate(),
            Err(ServiceError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[client]\nenabled = true").unwrap();

        let config = TomlConfig::from_file(file.path()).unwrap();
        assert!(config.client.enabled);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = TomlConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ServiceError::IoError(_)));
    }
}
