//! # Database Engine Selection
//!
//! `DB_ENGINE` is resolved once into a [`DbEngine`]. The engine decides the
//! default port, the connect options and the SQL dialect.

use std::fmt;

use sqlx::mysql::MySqlConnectOptions;
use sqlx::postgres::{PgConnectOptions, PgSslMode};

/// Supported database engines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbEngine {
    MySql,
    Postgres,
}

impl DbEngine {
    /// Resolve the engine flag. Only `"postgresql"` selects PostgreSQL;
    /// every other value, including an empty one, selects MySQL.
    pub fn from_flag(flag: &str) -> Self {
        if flag == "postgresql" {
            DbEngine::Postgres
        } else {
            DbEngine::MySql
        }
    }

    /// Port used when none is configured
    pub fn default_port(&self) -> u16 {
        match self {
            DbEngine::MySql => 3306,
            DbEngine::Postgres => 5432,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DbEngine::MySql => "mysql",
            DbEngine::Postgres => "postgresql",
        }
    }
}

impl fmt::Display for DbEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to open a connection pool
#[derive(Clone, PartialEq, Eq)]
pub struct ConnectionDescriptor {
    pub engine: DbEngine,
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl ConnectionDescriptor {
    pub(crate) fn mysql_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }

    pub(crate) fn postgres_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
            .ssl_mode(PgSslMode::Disable)
    }
}

// Display and Debug both leave the password out so descriptors can be logged.
impl fmt::Display for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}://{}@{}:{}/{}",
            self.engine, self.username, self.host, self.port, self.database
        )
    }
}

impl fmt::Debug for ConnectionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionDescriptor")
            .field("engine", &self.engine)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(engine: DbEngine) -> ConnectionDescriptor {
        ConnectionDescriptor {
            engine,
            username: "app".to_string(),
            password: "hunter2".to_string(),
            host: "db.internal".to_string(),
            port: engine.default_port(),
            database: "contacts".to_string(),
        }
    }

    #[test]
    fn test_engine_from_flag() {
        assert_eq!(DbEngine::from_flag("postgresql"), DbEngine::Postgres);
        assert_eq!(DbEngine::from_flag("mysql"), DbEngine::MySql);
        assert_eq!(DbEngine::from_flag(""), DbEngine::MySql);
        assert_eq!(DbEngine::from_flag("postgres"), DbEngine::MySql);
        assert_eq!(DbEngine::from_flag("PostgreSQL"), DbEngine::MySql);
    }

    #[test]
    fn test_default_ports() {
        assert_eq!(DbEngine::MySql.default_port(), 3306);
        assert_eq!(DbEngine::Postgres.default_port(), 5432);
    }

    #[test]
    fn test_descriptor_display_hides_password() {
        let pg = descriptor(DbEngine::Postgres);
        assert_eq!(pg.to_string(), "postgresql://app@db.internal:5432/contacts");

        let debug = format!("{:?}", descriptor(DbEngine::MySql));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_connect_options_carry_descriptor() {
        let pg = descriptor(DbEngine::Postgres).postgres_options();
        assert_eq!(pg.get_host(), "db.internal");
        assert_eq!(pg.get_port(), 5432);
        assert_eq!(pg.get_username(), "app");
        assert_eq!(pg.get_database(), Some("contacts"));
    }
}
