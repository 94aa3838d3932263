use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// RUN_MODE value that permits the placeholder signing secret.
const DEVELOPMENT_RUN_MODE: &str = "development";

/// Well-known secret shipped in config/default.toml for local runs only.
const PLACEHOLDER_SECRET: &str = "dev-only-insecure-secret-change-me";

/// HS256 wants at least 256 bits of key material.
const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    pub secret_key: String,
    pub token_ttl_minutes: i64,
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, SERVER__HTTP_PORT, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// Outside development mode, loading fails if the signing secret is the
    /// shipped placeholder or too short — there is no silent fallback to a
    /// well-known key.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| DEVELOPMENT_RUN_MODE.to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate_secret(&run_mode)?;

        Ok(config)
    }

    fn validate_secret(&self, run_mode: &str) -> Result<(), ConfigError> {
        if run_mode == DEVELOPMENT_RUN_MODE {
            return Ok(());
        }

        if self.auth.secret_key == PLACEHOLDER_SECRET {
            return Err(ConfigError::Message(format!(
                "auth.secret_key is the development placeholder; set a real secret for RUN_MODE={}",
                run_mode
            )));
        }

        if self.auth.secret_key.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "auth.secret_key must be at least {} bytes, got {}",
                MIN_SECRET_BYTES,
                self.auth.secret_key.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_secret(secret: &str) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/tasks".to_string(),
            },
            server: ServerConfig { http_port: 8000 },
            auth: AuthConfig {
                secret_key: secret.to_string(),
                token_ttl_minutes: 30,
            },
        }
    }

    #[test]
    fn test_placeholder_secret_allowed_in_development() {
        let config = config_with_secret(PLACEHOLDER_SECRET);
        assert!(config.validate_secret("development").is_ok());
    }

    #[test]
    fn test_placeholder_secret_rejected_in_production() {
        let config = config_with_secret(PLACEHOLDER_SECRET);
        assert!(config.validate_secret("production").is_err());
    }

    #[test]
    fn test_short_secret_rejected_in_production() {
        let config = config_with_secret("short");
        assert!(config.validate_secret("production").is_err());

        let config = config_with_secret("");
        assert!(config.validate_secret("production").is_err());
    }

    #[test]
    fn test_strong_secret_accepted_in_production() {
        let config = config_with_secret("a-genuinely-configured-secret-key-of-length");
        assert!(config.validate_secret("production").is_ok());
    }
}
