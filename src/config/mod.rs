//! # Service Configuration
//!
//! Settings are read from the environment. Every variable can also be given
//! as a command-line flag, which takes precedence.
//!
//! `SERVICE_PORT` is the only required setting.

use std::time::Duration;

use clap::Parser;

use crate::store::{ConnectionDescriptor, DbEngine, PoolSettings};

/// recordkeeper - HTTP service for contact records
#[derive(Parser, Debug, Clone)]
#[command(name = "recordkeeper")]
#[command(version, about, long_about = None)]
pub struct Settings {
    /// Port to listen on
    #[arg(long, env = "SERVICE_PORT")]
    pub service_port: u16,

    /// Address to bind to
    #[arg(long, env = "SERVICE_HOST", default_value = "0.0.0.0")]
    pub service_host: String,

    /// Shared secret expected as `Authentication: Token <value>`
    #[arg(long, env = "AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: Option<String>,

    /// `postgresql` for PostgreSQL, anything else for MySQL
    #[arg(long, env = "DB_ENGINE", default_value = "mysql")]
    pub db_engine: String,

    #[arg(long, env = "DB_USERNAME", default_value = "")]
    pub db_username: String,

    #[arg(long, env = "DB_PASSWORD", default_value = "", hide_env_values = true)]
    pub db_password: String,

    #[arg(long, env = "DB_HOST", default_value = "localhost")]
    pub db_host: String,

    /// Defaults to the engine's standard port; empty means unset
    #[arg(long, env = "DB_PORT", value_parser = parse_db_port)]
    pub db_port: Option<String>,

    #[arg(long, env = "DB_NAME", default_value = "")]
    pub db_name: String,

    /// Upper bound on pooled database connections
    #[arg(long, env = "DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,

    /// Seconds to wait for a pooled connection
    #[arg(long, env = "DB_ACQUIRE_TIMEOUT_SECS", default_value_t = 5)]
    pub db_acquire_timeout_secs: u64,

    /// Seconds before an in-flight request is abandoned
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

/// Accept an empty value or a valid port number
fn parse_db_port(value: &str) -> Result<String, String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    value
        .parse::<u16>()
        .map(|port| port.to_string())
        .map_err(|e| format!("invalid port '{}': {}", value, e))
}

impl Settings {
    /// Socket address string to bind
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.service_host, self.service_port)
    }

    /// The configured token; an empty value means authentication is off
    pub fn auth_token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|token| !token.is_empty())
    }

    /// Configured database port, `None` when unset or empty
    pub fn db_port(&self) -> Option<u16> {
        self.db_port
            .as_deref()
            .filter(|port| !port.is_empty())
            .and_then(|port| port.parse().ok())
    }

    pub fn db_engine(&self) -> DbEngine {
        DbEngine::from_flag(&self.db_engine)
    }

    pub fn connection_descriptor(&self) -> ConnectionDescriptor {
        let engine = self.db_engine();
        ConnectionDescriptor {
            engine,
            username: self.db_username.clone(),
            password: self.db_password.clone(),
            host: self.db_host.clone(),
            port: self.db_port().unwrap_or_else(|| engine.default_port()),
            database: self.db_name.clone(),
        }
    }

    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            acquire_timeout: Duration::from_secs(self.db_acquire_timeout_secs),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
