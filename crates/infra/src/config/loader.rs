//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//! 5. Optional `DATELOG_*` overrides apply on top of either source
//!
//! ## Environment Variables
//! - `SUPABASE_URL`: Supabase project URL (required for env loading)
//! - `SUPABASE_ANON_KEY`: Supabase anon key (required for env loading)
//! - `DATELOG_BIND_ADDRESS`: Server listen address
//! - `DATELOG_ALLOWED_ORIGINS`: Comma-separated CORS origins (`*` for any)
//! - `DATELOG_HTTP_TIMEOUT_SECS`: Timeout for calls to Supabase
//! - `DATELOG_LOG_LEVEL`: Default log filter
//! - `DATELOG_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./datelog.json` or `./datelog.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use datelog_domain::constants::DEFAULT_HTTP_TIMEOUT_SECS;
use datelog_domain::{BackendConfig, Config, DateLogError, Result, SupabaseConfig};
use url::Url;

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the Supabase
/// variables are missing, falls back to loading from a config file. The
/// result is validated before it is returned.
///
/// # Errors
/// Returns `DateLogError::Config` if:
/// - Configuration cannot be loaded from either source
/// - File format is invalid
/// - A value fails validation
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            apply_env_overrides(load_from_file(None)?)?
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `SUPABASE_URL` and `SUPABASE_ANON_KEY` must be present; everything else
/// falls back to defaults.
///
/// # Errors
/// Returns `DateLogError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let url = env_var("SUPABASE_URL")?;
    let anon_key = env_var("SUPABASE_ANON_KEY")?;

    let supabase = SupabaseConfig { url, anon_key, timeout_seconds: DEFAULT_HTTP_TIMEOUT_SECS };

    let config = Config { backend: BackendConfig::Supabase(supabase), ..Config::default() };
    apply_env_overrides(config)
}

/// Apply the optional `DATELOG_*` variables on top of `config`
///
/// # Errors
/// Returns `DateLogError::Config` if a variable is set to an invalid value.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Ok(address) = std::env::var("DATELOG_BIND_ADDRESS") {
        config.server.bind_address = address;
    }

    if let Ok(raw) = std::env::var("DATELOG_ALLOWED_ORIGINS") {
        config.server.allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();
    }

    if let Ok(raw) = std::env::var("DATELOG_HTTP_TIMEOUT_SECS") {
        let timeout = raw
            .parse::<u64>()
            .map_err(|e| DateLogError::Config(format!("Invalid HTTP timeout: {}", e)))?;
        if let BackendConfig::Supabase(supabase) = &mut config.backend {
            supabase.timeout_seconds = timeout;
        }
    }

    if let Ok(level) = std::env::var("DATELOG_LOG_LEVEL") {
        config.logging.level = level;
    }

    config.logging.json = env_bool("DATELOG_LOG_JSON", config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `DateLogError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
/// - Required fields are missing
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DateLogError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DateLogError::Config(
                "No config file found and SUPABASE_URL/SUPABASE_ANON_KEY are not set".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DateLogError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Check values serde cannot check
///
/// # Errors
/// Returns `DateLogError::Config` naming the first invalid value.
pub fn validate(config: &Config) -> Result<()> {
    config.server.bind_address.parse::<SocketAddr>().map_err(|e| {
        DateLogError::Config(format!(
            "Invalid bind address '{}': {}",
            config.server.bind_address, e
        ))
    })?;

    for origin in config.server.allowed_origins.iter().filter(|origin| origin.as_str() != "*") {
        let url = Url::parse(origin).map_err(|e| {
            DateLogError::Config(format!("Invalid allowed origin '{}': {}", origin, e))
        })?;
        let bare = url.path() == "/" && url.query().is_none() && !origin.ends_with('/');
        if !matches!(url.scheme(), "http" | "https") || !bare {
            return Err(DateLogError::Config(format!(
                "Allowed origin must be scheme://host[:port], got '{}'",
                origin
            )));
        }
    }

    if let BackendConfig::Supabase(supabase) = &config.backend {
        let url = Url::parse(&supabase.url).map_err(|e| {
            DateLogError::Config(format!("Invalid Supabase URL '{}': {}", supabase.url, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(DateLogError::Config(format!(
                "Supabase URL must be http(s), got '{}'",
                url.scheme()
            )));
        }
        if supabase.anon_key.trim().is_empty() {
            return Err(DateLogError::Config("Supabase anon key is empty".to_string()));
        }
        if supabase.timeout_seconds == 0 {
            return Err(DateLogError::Config("HTTP timeout must be at least 1 second".into()));
        }
    }

    Ok(())
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DateLogError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DateLogError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(DateLogError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidate_files(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidate_files(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.exists())
}

fn candidate_files(dir: &Path) -> Vec<PathBuf> {
    vec![
        dir.join("config.json"),
        dir.join("config.toml"),
        dir.join("datelog.json"),
        dir.join("datelog.toml"),
        dir.join("../config.json"),
        dir.join("../config.toml"),
    ]
}

/// Get required environment variable
///
/// # Errors
/// Returns `DateLogError::Config` if the variable is not set or empty.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty()).ok_or_else(|| {
        DateLogError::Config(format!("Missing required environment variable: {}", key))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
