//! Process configuration, read from the command line or the environment.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use clap::{Args, Parser};

pub const DEFAULT_DATABASE_URL: &str = "sqlite:todos.db";

/// Top-level server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-backend", version, about = "Todo CRUD REST service backed by SQLite")]
pub struct ServerConfig {
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Address the HTTP server listens on
    #[arg(long, env = "TODO_BIND_ADDR", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Browser origin allowed to call the API. CORS is disabled when unset.
    #[arg(long, env = "TODO_CORS_ORIGIN", value_parser = parse_origin)]
    pub cors_origin: Option<HeaderValue>,
}

/// Where the todo database lives
#[derive(Debug, Clone, Args)]
pub struct DatabaseConfig {
    /// SQLite connection URL, e.g. `sqlite:todos.db`
    #[arg(long = "database-url", env = "TODO_DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub url: String,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

fn parse_origin(value: &str) -> Result<HeaderValue, String> {
    HeaderValue::from_str(value).map_err(|e| format!("invalid origin '{}': {}", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_arguments() {
        let config = ServerConfig::try_parse_from([
            "todo-backend",
            "--database-url",
            "sqlite:/var/lib/todos/todos.db",
            "--bind",
            "0.0.0.0:8080",
            "--cors-origin",
            "http://localhost:8080",
        ])
        .expect("arguments should parse");

        assert_eq!(config.database.url, "sqlite:/var/lib/todos/todos.db");
        assert_eq!(config.bind, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.cors_origin,
            Some(HeaderValue::from_static("http://localhost:8080"))
        );
    }

    #[test]
    fn test_invalid_bind_address_rejected() {
        let result = ServerConfig::try_parse_from(["todo-backend", "--bind", "not-an-address"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let result =
            ServerConfig::try_parse_from(["todo-backend", "--cors-origin", "http://bad\u{7f}origin"]);
        assert!(result.is_err());
    }
}
