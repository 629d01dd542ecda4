//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.eatery/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::deep_link::DeepLink;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct EateryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Deep link to open on startup.
    pub start: Option<String>,
    pub show_images: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AssetsConfig {
    pub dir: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "eatery.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start: DeepLink,
    pub show_images: bool,
    /// `None` = resolve images against the bundled manifest.
    pub assets_dir: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
}

/// Values given on the command line. `None` = not specified.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub start: Option<DeepLink>,
    pub assets_dir: Option<PathBuf>,
    pub log_level: Option<LevelFilter>,
    pub no_images: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value '{value}' for {field}")]
    Invalid { field: &'static str, value: String },
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.eatery/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".eatery").join("config.toml"))
}

/// Load config from an explicit path, which must exist.
pub fn load_config_from(path: &Path) -> Result<EateryConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: EateryConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Load config from `~/.eatery/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `EateryConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<EateryConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(EateryConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(EateryConfig::default());
    }

    load_config_from(&path)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Eatery Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start = "restaurants"       # or "menu/<r>", "details/<r>/<i>"
# show_images = true

# [assets]
# dir = "assets"              # Or set EATERY_ASSETS_DIR

# [logging]
# file = "eatery.log"         # Or set EATERY_LOG_FILE
# level = "debug"             # off, error, warn, info, debug, trace
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
pub fn resolve(config: &EateryConfig, cli: &CliOverrides) -> Result<ResolvedConfig, ConfigError> {
    // Start link: CLI → env → config → default
    let start = match cli.start {
        Some(link) => link,
        None => std::env::var("EATERY_START")
            .ok()
            .or_else(|| config.general.start.clone())
            .map(|s| parse_field("general.start", &s))
            .transpose()?
            .unwrap_or_default(),
    };

    // Assets dir: CLI → env → config → bundled manifest
    let assets_dir = cli
        .assets_dir
        .clone()
        .or_else(|| std::env::var("EATERY_ASSETS_DIR").ok().map(PathBuf::from))
        .or_else(|| config.assets.dir.as_ref().map(PathBuf::from));

    // Log level: CLI → env → config → default
    let log_level = match cli.log_level {
        Some(level) => level,
        None => std::env::var("EATERY_LOG_LEVEL")
            .ok()
            .or_else(|| config.logging.level.clone())
            .map(|s| parse_field("logging.level", &s))
            .transpose()?
            .unwrap_or(DEFAULT_LOG_LEVEL),
    };

    // Log file: env → config → default
    let log_file = std::env::var("EATERY_LOG_FILE")
        .ok()
        .or_else(|| config.logging.file.clone())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    let show_images = !cli.no_images && config.general.show_images.unwrap_or(true);

    Ok(ResolvedConfig {
        start,
        show_images,
        assets_dir,
        log_file,
        log_level,
    })
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        field,
        value: value.to_string(),
    })
}
