use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use folio_notification::EmailConfig;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Route of the relay endpoint; deployment-defined.
    pub send_email_path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (FOLIO__EMAIL__SMTP_PASSWORD, SMTP_PASSWORD, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.send_email_path", "/sendEmail")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("FOLIO")
                .separator("__")
                .try_parsing(true),
        );

        // Conventional names used by most hosting platforms' secret stores
        for (var, key) in [
            ("SMTP_USERNAME", "email.smtp_username"),
            ("SMTP_PASSWORD", "email.smtp_password"),
            ("CONTACT_ADDRESS", "email.contact_address"),
        ] {
            if let Ok(value) = env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate the settings needed to run the relay server
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if !self.server.send_email_path.starts_with('/') {
            return Err("Server send_email_path must start with '/'".to_string());
        }
        if self.email.contact_address.trim().is_empty() {
            return Err("Email contact_address must be set".to_string());
        }
        if let Err(e) = self.email.validate_contact_address() {
            return Err(format!("Email contact_address is invalid: {e}"));
        }
        if self.email.timeout_seconds == 0 {
            return Err("Email timeout_seconds must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Address of the relay endpoint as served by this configuration.
    pub fn send_email_url(&self) -> String {
        format!(
            "http://{}:{}{}",
            self.server.host, self.server.port, self.server.send_email_path
        )
    }
}
