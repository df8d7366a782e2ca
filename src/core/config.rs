//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.glance/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GlanceConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Lines (and columns) moved per mouse wheel notch.
    pub wheel_lines: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_WHEEL_LINES: usize = 3;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
const DEFAULT_LOG_FILE_NAME: &str = "glance.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub wheel_lines: usize,
    pub log_level: LevelFilter,
    /// None when no home directory is known and nothing was configured.
    pub log_file: Option<PathBuf>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub wheel_lines: Option<usize>,
    pub log_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.glance`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".glance"))
}

/// Returns the path to `~/.glance/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.glance/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `GlanceConfig::default()`.
pub fn load_config() -> Result<GlanceConfig, ConfigError> {
    let Some(path) = config_path() else {
        warn!("Could not determine home directory, using default config");
        return Ok(GlanceConfig::default());
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(GlanceConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<GlanceConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GlanceConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Glance Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# wheel_lines = 3                    # Or set GLANCE_WHEEL_LINES, or --wheel-lines

# [logging]
# level = "info"                     # "off", "error", "warn", "info", "debug", "trace"
# file = "/tmp/glance.log"           # Default: ~/.glance/glance.log
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &GlanceConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Wheel step: CLI → env → config → default, never zero
    let wheel_lines = cli
        .wheel_lines
        .or_else(|| {
            std::env::var("GLANCE_WHEEL_LINES")
                .ok()
                .and_then(|v| v.parse().ok())
        })
        .or(config.general.wheel_lines)
        .unwrap_or(DEFAULT_WHEEL_LINES)
        .max(1);

    // Log level: env → config → default
    let log_level = std::env::var("GLANCE_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .map_or(DEFAULT_LOG_LEVEL, |level| parse_level(&level));

    // Log file: CLI → env → config → ~/.glance/glance.log
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| std::env::var_os("GLANCE_LOG_FILE").map(PathBuf::from))
        .or_else(|| config.logging.file.clone())
        .or_else(|| config_dir().map(|d| d.join(DEFAULT_LOG_FILE_NAME)));

    ResolvedConfig {
        wheel_lines,
        log_level,
        log_file,
    }
}

/// Parses a level name, falling back to the default on garbage.
fn parse_level(level: &str) -> LevelFilter {
    LevelFilter::from_str(level.trim()).unwrap_or_else(|_| {
        warn!("Unknown log level {:?}, using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}
