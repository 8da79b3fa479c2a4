//! Database configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::mysql::MySqlConnectOptions;
use std::time::Duration;

use super::error::ValidationError;

/// Database configuration
///
/// Named keys with documented defaults; resolved once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL server host
    #[serde(default = "default_host")]
    pub host: String,

    /// MySQL server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Login user
    #[serde(default = "default_user")]
    pub user: String,

    /// Login password
    #[serde(default = "default_password")]
    pub password: SecretString,

    /// Database (schema) name
    #[serde(default = "default_name")]
    pub name: String,

    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Query execution timeout in seconds
    #[serde(default = "default_query_timeout")]
    pub query_timeout_secs: u64,
}

impl DatabaseConfig {
    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Get query timeout as Duration
    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }

    /// Build sqlx connect options from the configured credentials
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(self.password.expose_secret())
            .database(&self.name)
    }

    /// Validate database configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.host.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__HOST"));
        }
        if self.user.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__USER"));
        }
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DATABASE__NAME"));
        }
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.connect_timeout_secs == 0 || self.query_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
            name: default_name(),
            connect_timeout_secs: default_connect_timeout(),
            query_timeout_secs: default_query_timeout(),
        }
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_password() -> SecretString {
    SecretString::new("password".to_string())
}

fn default_name() -> String {
    "ecommerce".to_string()
}

fn default_connect_timeout() -> u64 {
    10
}

fn default_query_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_config_defaults() {
        let config = DatabaseConfig::default();
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 3306);
        assert_eq!(config.user, "root");
        assert_eq!(config.name, "ecommerce");
        assert_eq!(config.password.expose_secret(), "password");
    }

    #[test]
    fn test_timeout_durations() {
        let config = DatabaseConfig {
            connect_timeout_secs: 5,
            query_timeout_secs: 45,
            ..Default::default()
        };
        assert_eq!(config.connect_timeout(), Duration::from_secs(5));
        assert_eq!(config.query_timeout(), Duration::from_secs(45));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let config = DatabaseConfig {
            password: SecretString::new("hunter2".to_string()),
            ..Default::default()
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_validation_missing_host() {
        let config = DatabaseConfig {
            host: "  ".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::MissingRequired("DATABASE__HOST"))
        ));
    }

    #[test]
    fn test_validation_missing_name() {
        let config = DatabaseConfig {
            name: String::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let config = DatabaseConfig {
            query_timeout_secs: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(DatabaseConfig::default().validate().is_ok());
    }
}
