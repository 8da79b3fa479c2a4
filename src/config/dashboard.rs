//! Dashboard presentation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// What the end user sees when the database connection cannot be acquired.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConnectFailurePolicy {
    /// Log for the operator, render an empty panel for the user.
    #[default]
    Silent,
    /// Log for the operator and answer with 503 Service Unavailable.
    Visible,
}

/// Dashboard page configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Page title
    #[serde(default = "default_title")]
    pub title: String,

    /// Static footer line
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Connection failure handling
    #[serde(default)]
    pub on_connect_failure: ConnectFailurePolicy,
}

impl DashboardConfig {
    /// Validate dashboard configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingRequired("DASHBOARD__TITLE"));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: default_footer(),
            on_connect_failure: ConnectFailurePolicy::default(),
        }
    }
}

fn default_title() -> String {
    "E-commerce Analytics Dashboard".to_string()
}

fn default_footer() -> String {
    "Sushanthi".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_config_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.title, "E-commerce Analytics Dashboard");
        assert_eq!(config.footer, "Sushanthi");
        assert_eq!(config.on_connect_failure, ConnectFailurePolicy::Silent);
    }

    #[test]
    fn test_policy_deserialization() {
        let json = r#"{ "on_connect_failure": "visible" }"#;
        let config: DashboardConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.on_connect_failure, ConnectFailurePolicy::Visible);
        assert_eq!(config.title, "E-commerce Analytics Dashboard");
    }

    #[test]
    fn test_validation_empty_title() {
        let config = DashboardConfig {
            title: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
