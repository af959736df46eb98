//! # Configuration
//!
//! Typed runtime configuration for the quote service.
//!
//! Settings are loaded from an optional `config` file (TOML) and
//! overridden by environment variables prefixed with `STUDIO_QUOTE`
//! using `__` as the section separator, e.g.
//! `STUDIO_QUOTE__SERVER__PORT=8080` or
//! `STUDIO_QUOTE__DATABASE__URL=postgres://...`.
//!
//! The SMTP section is optional: when absent, operator notifications
//! are disabled and submissions are still accepted.

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Optional SMTP settings for operator notifications.
    #[serde(default)]
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    /// Loads configuration from file and environment.
    ///
    /// # Errors
    ///
    /// Returns a `config::ConfigError` if a source cannot be read or
    /// the merged settings do not deserialize.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("STUDIO_QUOTE")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// Returns the socket address string to bind.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL.
    pub url: String,
    /// Maximum pool connections.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// SMTP settings for the operator notification channel.
#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    /// Relay host name.
    pub host: String,
    /// Relay port; the transport default is used when unset.
    #[serde(default)]
    pub port: Option<u16>,
    /// Relay username.
    pub username: String,
    /// Relay password.
    pub password: String,
    /// Sender mailbox, e.g. `Quote Bot <quotes@example.com>`.
    pub from: String,
    /// Operator mailbox receiving the notifications.
    pub to: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    10000
}

fn default_max_connections() -> u32 {
    10
}
