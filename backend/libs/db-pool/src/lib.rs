//! MySQL connection setup
//!
//! Reads connection settings from the environment and opens a verified
//! `sqlx` MySQL pool for the services that persist into the content schema.

pub mod env_utils;

use env_utils::{env_non_empty, env_required, parse_env_optional, parse_env_with_default};
use sqlx::mysql::{MySqlConnectOptions, MySqlPool};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info};

/// Character set requested for every connection
pub const CHARSET: &str = "utf8";

/// Default MySQL TCP port when connecting over the network
pub const DEFAULT_PORT: u16 = 3306;

/// Errors raised while reading connection settings
#[derive(Error, Debug)]
pub enum DbConfigError {
    /// A required environment variable is unset or blank
    #[error("{0} environment variable not set")]
    Missing(&'static str),

    /// A variable is present but cannot be parsed
    #[error("Invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Where the MySQL server listens
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// Unix domain socket path
    Socket(PathBuf),
    /// TCP host and port
    Tcp { host: String, port: u16 },
}

/// Database connection configuration
#[derive(Clone)]
pub struct DbConfig {
    /// Service name for log labeling
    pub service_name: String,
    /// MySQL user
    pub username: String,
    /// MySQL password (may be empty)
    pub password: String,
    /// Server endpoint
    pub endpoint: Endpoint,
    /// Schema (database) name
    pub database: String,
    /// Timeout for the post-connect verification query
    pub connect_timeout_secs: u64,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("service_name", &self.service_name)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("endpoint", &self.endpoint)
            .field("database", &self.database)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .finish()
    }
}

impl DbConfig {
    /// Create a new DbConfig from environment variables
    ///
    /// `MYSQL_SOCKETPATH` wins over `MYSQL_HOST`/`MYSQL_PORT`; with neither
    /// set the config points at `localhost:3306`.
    pub fn from_env(service_name: &str) -> Result<Self, DbConfigError> {
        let username = env_required("MYSQL_USERNAME")?;
        let database = env_required("MYSQL_DATABASE_NAME")?;
        let password = std::env::var("MYSQL_PASSWORD").unwrap_or_default();

        let endpoint = match env_non_empty("MYSQL_SOCKETPATH") {
            Some(path) => Endpoint::Socket(PathBuf::from(path)),
            None => Endpoint::Tcp {
                host: env_non_empty("MYSQL_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_env_optional("MYSQL_PORT")?.unwrap_or(DEFAULT_PORT),
            },
        };

        Ok(Self {
            service_name: service_name.to_string(),
            username,
            password,
            endpoint,
            database,
            connect_timeout_secs: parse_env_with_default("DB_CONNECT_TIMEOUT_SECS", 5),
        })
    }

    /// Build sqlx connect options for this configuration
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let options = MySqlConnectOptions::new()
            .username(&self.username)
            .database(&self.database)
            .charset(CHARSET);

        let options = if self.password.is_empty() {
            options
        } else {
            options.password(&self.password)
        };

        match &self.endpoint {
            Endpoint::Socket(path) => options.socket(path),
            Endpoint::Tcp { host, port } => options.host(host).port(*port),
        }
    }

    /// Log connection details (password omitted)
    pub fn log_config(&self) {
        info!(
            service = %self.service_name,
            database = %self.database,
            endpoint = ?self.endpoint,
            connect_timeout_secs = self.connect_timeout_secs,
            "MySQL connection configuration"
        );
    }
}

/// Connect to MySQL and verify the connection with `SELECT 1`
pub async fn create_pool(config: DbConfig) -> Result<MySqlPool, sqlx::Error> {
    debug!(
        service = %config.service_name,
        database = %config.database,
        "Connecting to MySQL"
    );

    let pool = MySqlPool::connect_with(config.connect_options()).await?;

    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        sqlx::query("SELECT 1").execute(&pool),
    )
    .await
    {
        Ok(Ok(_)) => {
            info!(
                service = %config.service_name,
                "Database connection created and verified successfully"
            );
            Ok(pool)
        }
        Ok(Err(e)) => {
            error!(
                service = %config.service_name,
                error = %e,
                "Database connection verification failed"
            );
            Err(e)
        }
        Err(_) => {
            error!(
                service = %config.service_name,
                timeout_secs = config.connect_timeout_secs,
                "Database connection verification timeout"
            );
            Err(sqlx::Error::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "Database verification timeout",
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARS: [&str; 7] = [
        "MYSQL_USERNAME",
        "MYSQL_PASSWORD",
        "MYSQL_SOCKETPATH",
        "MYSQL_HOST",
        "MYSQL_PORT",
        "MYSQL_DATABASE_NAME",
        "DB_CONNECT_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial_test::serial]
    fn test_config_requires_username() {
        clear_env();
        std::env::set_var("MYSQL_DATABASE_NAME", "kisan");

        let err = DbConfig::from_env("test-service").unwrap_err();
        assert!(matches!(err, DbConfigError::Missing("MYSQL_USERNAME")));

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_config_requires_database_name() {
        clear_env();
        std::env::set_var("MYSQL_USERNAME", "app");

        let err = DbConfig::from_env("test-service").unwrap_err();
        assert_eq!(
            err.to_string(),
            "MYSQL_DATABASE_NAME environment variable not set"
        );

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_socket_path_takes_precedence() {
        clear_env();
        std::env::set_var("MYSQL_USERNAME", "app");
        std::env::set_var("MYSQL_DATABASE_NAME", "kisan");
        std::env::set_var("MYSQL_SOCKETPATH", "/var/run/mysqld/mysqld.sock");
        std::env::set_var("MYSQL_HOST", "db.internal");

        let config = DbConfig::from_env("test-service").unwrap();
        assert_eq!(config.service_name, "test-service");
        assert_eq!(
            config.endpoint,
            Endpoint::Socket(PathBuf::from("/var/run/mysqld/mysqld.sock"))
        );
        assert_eq!(config.password, "");
        assert_eq!(config.connect_timeout_secs, 5);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_tcp_endpoint_defaults() {
        clear_env();
        std::env::set_var("MYSQL_USERNAME", "app");
        std::env::set_var("MYSQL_DATABASE_NAME", "kisan");

        let config = DbConfig::from_env("test-service").unwrap();
        assert_eq!(
            config.endpoint,
            Endpoint::Tcp {
                host: "localhost".to_string(),
                port: DEFAULT_PORT,
            }
        );

        std::env::set_var("MYSQL_HOST", "db.internal");
        std::env::set_var("MYSQL_PORT", "3307");
        std::env::set_var("DB_CONNECT_TIMEOUT_SECS", "9");
        let config = DbConfig::from_env("test-service").unwrap();
        assert_eq!(
            config.endpoint,
            Endpoint::Tcp {
                host: "db.internal".to_string(),
                port: 3307,
            }
        );
        assert_eq!(config.connect_timeout_secs, 9);

        clear_env();
    }

    #[test]
    #[serial_test::serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("MYSQL_USERNAME", "app");
        std::env::set_var("MYSQL_DATABASE_NAME", "kisan");
        std::env::set_var("MYSQL_PORT", "mysql");

        let err = DbConfig::from_env("test-service").unwrap_err();
        assert!(matches!(err, DbConfigError::Invalid { key: "MYSQL_PORT", .. }));

        clear_env();
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = DbConfig {
            service_name: "test-service".to_string(),
            username: "app".to_string(),
            password: "hunter2".to_string(),
            endpoint: Endpoint::Tcp {
                host: "localhost".to_string(),
                port: DEFAULT_PORT,
            },
            database: "kisan".to_string(),
            connect_timeout_secs: 5,
        };

        let rendered = format!("{:?}", config);
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("hunter2"));
    }
}
