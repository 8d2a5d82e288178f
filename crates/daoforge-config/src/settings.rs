use crate::error::ConfigurationError;
use config::{Config, File};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RpcConfig {
    pub url: String,
    /// Short-string chain id, e.g. "SN_MAIN" or "SN_SEPOLIA".
    pub chain_id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MessagingConfig {
    /// Environment tier of the messaging backend, "production" or "staging".
    pub env: String,
    pub gateway_url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub endpoint: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub rpc: RpcConfig,
    pub messaging: MessagingConfig,
    pub analytics: AnalyticsConfig,
}

impl TryFrom<Config> for AppConfig {
    type Error = ConfigurationError;

    fn try_from(config: Config) -> Result<Self, Self::Error> {
        let log_level = config.get_string("log_level")?;

        let rpc = RpcConfig {
            url: config.get_string("rpc.url")?,
            chain_id: config.get_string("rpc.chain_id")?,
        };

        let messaging = MessagingConfig {
            env: config.get_string("messaging.env")?,
            gateway_url: config.get_string("messaging.gateway_url")?,
        };

        let analytics = AnalyticsConfig {
            enabled: config.get_bool("analytics.enabled").unwrap_or(false),
            endpoint: config.get_string("analytics.endpoint").ok(),
        };

        Ok(AppConfig {
            log_level,
            rpc,
            messaging,
            analytics,
        })
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            rpc: RpcConfig {
                url: "http://127.0.0.1:5050".to_string(),
                chain_id: "SN_SEPOLIA".to_string(),
            },
            messaging: MessagingConfig {
                env: "staging".to_string(),
                gateway_url: "https://backend-staging.epns.io".to_string(),
            },
            analytics: AnalyticsConfig {
                enabled: false,
                endpoint: None,
            },
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the file named by `DAOFORGE_CONFIG`.
    pub fn new() -> Result<Self, ConfigurationError> {
        let config_path = env::var("DAOFORGE_CONFIG").map_err(|_| {
            ConfigurationError::Source(config::ConfigError::Message(
                "DAOFORGE_CONFIG environment variable must be set".to_string(),
            ))
        })?;

        Config::builder()
            .add_source(File::with_name(&config_path).required(true))
            .build()?
            .try_into()
    }

    /// The configuration from `DAOFORGE_CONFIG` when set, defaults otherwise.
    pub fn load_or_default() -> Self {
        match env::var("DAOFORGE_CONFIG") {
            Ok(_) => Self::new().unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Loads the configuration from a TOML file, overriding current settings.
    pub fn load(&mut self, path: &str) -> Result<(), ConfigurationError> {
        let contents = fs::read_to_string(path)?;
        let loaded: Self = toml::from_str(&contents)?;
        *self = loaded;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_defaults_target_staging() {
        let config = AppConfig::default();
        assert_eq!(config.messaging.env, "staging");
        assert!(!config.analytics.enabled);
    }

    #[test]
    fn test_parse_from_source() {
        let raw = r#"
            log_level = "debug"

            [rpc]
            url = "https://starknet-sepolia.example/rpc/v0_7"
            chain_id = "SN_SEPOLIA"

            [messaging]
            env = "production"
            gateway_url = "https://backend.epns.io"

            [analytics]
            enabled = true
            endpoint = "https://collect.example/v1/events"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_into()
            .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.messaging.env, "production");
        assert_eq!(
            config.analytics.endpoint.as_deref(),
            Some("https://collect.example/v1/events")
        );
    }

    #[test]
    fn test_load_overrides_current_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("daoforge.toml");
        std::fs::write(
            &path,
            r#"
                log_level = "warn"

                [rpc]
                url = "https://starknet-mainnet.example/rpc/v0_7"
                chain_id = "SN_MAIN"

                [messaging]
                env = "production"
                gateway_url = "https://backend.epns.io"

                [analytics]
                enabled = false
            "#,
        )
        .unwrap();

        let mut config = AppConfig::default();
        config.load(path.to_str().unwrap()).unwrap();

        assert_eq!(config.log_level, "warn");
        assert_eq!(config.rpc.chain_id, "SN_MAIN");
    }

    #[test]
    fn test_analytics_section_is_optional() {
        let raw = r#"
            log_level = "info"

            [rpc]
            url = "http://127.0.0.1:5050"
            chain_id = "SN_SEPOLIA"

            [messaging]
            env = "staging"
            gateway_url = "https://backend-staging.epns.io"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(raw, FileFormat::Toml))
            .build()
            .unwrap()
            .try_into()
            .unwrap();

        assert!(!config.analytics.enabled);
        assert!(config.analytics.endpoint.is_none());
    }
}
