use serde::{Deserialize, Serialize};

/// Main configuration for a Headway deployment
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    /// Account preselected when the caller has not picked one yet.
    /// The resolver falls back to the free-tier view when it is unset
    /// or names an account the directory does not know.
    #[serde(default)]
    pub default_account: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_json")]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: default_json(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_json() -> bool {
    false
}

/// Read an environment variable with the `HEADWAY_` prefix.
fn env_with_prefix(name: &str) -> Option<String> {
    std::env::var(format!("HEADWAY_{name}")).ok()
}

/// Builder for Config with environment variable support
#[must_use = "builder does nothing until you call build()"]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.config.logging.level = level.into();
        self
    }

    pub fn with_json_logging(mut self, enabled: bool) -> Self {
        self.config.logging.json = enabled;
        self
    }

    pub fn with_default_account(mut self, name: impl Into<String>) -> Self {
        self.config.default_account = Some(name.into());
        self
    }

    /// Overlay values from `HEADWAY_`-prefixed environment variables.
    ///
    /// Recognized: `HEADWAY_LOG_LEVEL`, `HEADWAY_LOG_JSON`,
    /// `HEADWAY_DEFAULT_ACCOUNT`.
    pub fn from_env(mut self) -> Self {
        if let Some(level) = env_with_prefix("LOG_LEVEL") {
            self.config.logging.level = level;
        }
        if let Some(json) = env_with_prefix("LOG_JSON") {
            self.config.logging.json = json.parse().unwrap_or(false);
        }
        if let Some(account) = env_with_prefix("DEFAULT_ACCOUNT") {
            self.config.default_account = Some(account);
        }
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
        assert!(config.default_account.is_none());
    }

    #[test]
    fn test_builder() {
        let config = ConfigBuilder::new()
            .with_log_level("debug")
            .with_json_logging(true)
            .with_default_account("Acme Corp")
            .build();

        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
        assert_eq!(config.default_account.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_serde_defaults() {
        let config: Config = serde_json::from_str(r#"{"logging": {}}"#).unwrap();
        assert_eq!(config.logging.level, "info");
        assert!(config.default_account.is_none());
    }
}
