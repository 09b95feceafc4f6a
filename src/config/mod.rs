use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::error;

const DEFAULT_PORT: u16 = 4310;

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

// ─── ObservabilityConfig ─────────────────────────────────────────────────────

/// Daemon observability configuration (`[observability]` in config.toml).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log SQLite queries that exceed this threshold (milliseconds). Default: 100.
    /// Set to 0 to disable slow query logging.
    pub slow_query_threshold_ms: u64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            slow_query_threshold_ms: 100,
        }
    }
}

// ─── TaskdConfig ─────────────────────────────────────────────────────────────

/// Resolved daemon configuration.
#[derive(Debug, Clone)]
pub struct TaskdConfig {
    /// HTTP server port.
    pub port: u16,
    /// Data directory for config.toml and the SQLite database.
    pub data_dir: PathBuf,
    /// Log level filter (trace, debug, info, warn, error).
    pub log: String,
    /// Log output format: "pretty" (default) or "json".
    pub log_format: String,
    /// Bind address for the HTTP server.
    pub bind_address: String,
    pub observability: ObservabilityConfig,
}

/// Optional overrides read from `{data_dir}/config.toml`.
#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    port: Option<u16>,
    log: Option<String>,
    log_format: Option<String>,
    bind_address: Option<String>,
    observability: Option<ObservabilityConfig>,
}

fn load_toml(data_dir: &Path) -> Option<TomlConfig> {
    let path = data_dir.join("config.toml");
    let contents = std::fs::read_to_string(&path).ok()?;
    match toml::from_str::<TomlConfig>(&contents) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            error!(path = %path.display(), err = %e, "failed to parse config.toml — using defaults");
            None
        }
    }
}

impl TaskdConfig {
    /// Build config from CLI/env args + optional TOML file.
    ///
    /// Priority (highest to lowest):
    ///   1. CLI / env — passed as `Some(value)` from clap
    ///   2. TOML file at `{data_dir}/config.toml`
    ///   3. Built-in defaults
    pub fn new(
        port: Option<u16>,
        data_dir: Option<PathBuf>,
        log: Option<String>,
        bind_address: Option<String>,
    ) -> Self {
        let data_dir = data_dir.unwrap_or_else(default_data_dir);

        // Load TOML as the lowest-priority override layer
        let toml = load_toml(&data_dir).unwrap_or_default();

        let port = port.or(toml.port).unwrap_or(DEFAULT_PORT);
        let log = log.or(toml.log).unwrap_or_else(|| "info".to_string());

        let log_format = std::env::var("TASKD_LOG_FORMAT")
            .ok()
            .filter(|s| !s.is_empty())
            .or(toml.log_format)
            .unwrap_or_else(|| "pretty".to_string());

        let bind_address = bind_address
            .or(toml.bind_address)
            .unwrap_or_else(default_bind_address);

        let observability = toml.observability.unwrap_or_default();

        Self {
            port,
            data_dir,
            log,
            log_format,
            bind_address,
            observability,
        }
    }
}

fn default_data_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        // ~/Library/Application Support/taskd
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("taskd");
        }
    }
    #[cfg(target_os = "linux")]
    {
        // $XDG_DATA_HOME/taskd or ~/.local/share/taskd
        if let Ok(xdg) = std::env::var("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("taskd");
        }
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home)
                .join(".local")
                .join("share")
                .join("taskd");
        }
    }
    #[cfg(target_os = "windows")]
    {
        // %APPDATA%\taskd
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("taskd");
        }
    }
    PathBuf::from(".taskd")
}
