//! Server configuration from environment.

use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_port: u16,
    pub database_path: String,
    pub database_max_connections: u32,
    /// Reject trees outside the estate grid or on an occupied cell
    pub enforce_tree_placement: bool,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 8080,
            database_path: "data/estate.db".to_string(),
            database_max_connections: 5,
            enforce_tree_placement: false,
            log_format: LogFormat::Pretty,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let database_path = env::var("ESTATE_DATABASE_PATH").unwrap_or(defaults.database_path);
        let database_max_connections = env::var("ESTATE_DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.database_max_connections);

        Self {
            server_port: env::var("ESTATE_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.server_port),
            database_path,
            database_max_connections,
            enforce_tree_placement: env::var("ESTATE_ENFORCE_TREE_PLACEMENT")
                .ok()
                .map(|s| parse_bool(&s))
                .unwrap_or(defaults.enforce_tree_placement),
            log_format: match env::var("ESTATE_LOG_FORMAT").as_deref() {
                Ok("json") => LogFormat::Json,
                _ => LogFormat::Pretty,
            },
        }
    }
}

fn parse_bool(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
