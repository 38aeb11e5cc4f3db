use std::path::PathBuf;

use axum::http::HeaderValue;
use shows_db::{seed, DbError, DbPool};

/// Where the store's initial rows come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedSource {
    /// The seed compiled into the binary.
    Bundled,
    /// A JSON seed file on disk.
    File(PathBuf),
    /// Start with an empty collection.
    Empty,
}

impl SeedSource {
    /// Build the store described by this source.
    pub fn create_pool(&self) -> Result<DbPool, DbError> {
        match self {
            SeedSource::Bundled => shows_db::create_seeded_pool(seed::bundled()?),
            SeedSource::File(path) => shows_db::create_seeded_pool(seed::load_seed_file(path)?),
            SeedSource::Empty => Ok(shows_db::create_pool()),
        }
    }

    /// Short name reported by `/health`.
    pub fn label(&self) -> &'static str {
        match self {
            SeedSource::Bundled => "bundled",
            SeedSource::File(_) => "file",
            SeedSource::Empty => "empty",
        }
    }
}

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("{var} must be {expected}, got '{value}'")]
pub struct ConfigError {
    pub var: &'static str,
    pub expected: &'static str,
    pub value: String,
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long `/health` waits for the store lock, in milliseconds (default: `2000`).
    pub health_timeout_ms: u64,
    /// Initial contents of the store.
    pub seed: SeedSource,
    /// Log line format (default: plain text).
    pub log_format: LogFormat,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `HEALTH_TIMEOUT_MS`    | `2000`                     |
    /// | `SEED_FILE`            | unset (bundled seed)       |
    /// | `SKIP_SEED`            | `false`                    |
    /// | `LOG_FORMAT`           | `plain`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());

        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| invalid("PORT", "a valid u16", v))?,
            None => 3000,
        };

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        if let Some(bad) = cors_origins
            .iter()
            .find(|o| o.parse::<HeaderValue>().is_err())
        {
            return Err(invalid("CORS_ORIGINS", "a list of valid origins", bad.clone()));
        }

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            Some(v) => v
                .parse()
                .map_err(|_| invalid("REQUEST_TIMEOUT_SECS", "a valid u64", v))?,
            None => 30,
        };

        let health_timeout_ms = match lookup("HEALTH_TIMEOUT_MS") {
            Some(v) => v
                .parse()
                .map_err(|_| invalid("HEALTH_TIMEOUT_MS", "a valid u64", v))?,
            None => 2000,
        };

        let skip_seed = match lookup("SKIP_SEED") {
            Some(v) => parse_bool(&v).ok_or_else(|| invalid("SKIP_SEED", "a boolean", v))?,
            None => false,
        };
        let seed = if skip_seed {
            SeedSource::Empty
        } else {
            match lookup("SEED_FILE").filter(|p| !p.trim().is_empty()) {
                Some(path) => SeedSource::File(PathBuf::from(path)),
                None => SeedSource::Bundled,
            }
        };

        let log_format = match lookup("LOG_FORMAT").as_deref().map(str::trim) {
            None | Some("") | Some("plain") => LogFormat::Plain,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(invalid("LOG_FORMAT", "'plain' or 'json'", other.into())),
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            health_timeout_ms,
            seed,
            log_format,
        })
    }
}

fn invalid(var: &'static str, expected: &'static str, value: String) -> ConfigError {
    ConfigError {
        var,
        expected,
        value,
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
