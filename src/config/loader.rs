//! Configuration file loading with precedence handling.

use crate::deck::{CardMetrics, DeckOptions, SizingMode};
use crate::layout::{DefaultHeights, Size};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "CARDSTACK_CONFIG";

/// Environment variable overriding the number of cards.
pub const CARD_COUNT_ENV_VAR: &str = "CARDSTACK_CARD_COUNT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// A dimension or fraction is negative, infinite, or NaN.
    #[error("Invalid value for {field}: {value} (must be a finite number >= 0)")]
    InvalidValue {
        /// Config key holding the value.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/cardstack/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Number of cards in the demo deck.
    #[serde(default)]
    pub card_count: Option<usize>,

    /// Viewport width.
    #[serde(default)]
    pub viewport_width: Option<f64>,

    /// Viewport height.
    #[serde(default)]
    pub viewport_height: Option<f64>,

    /// Fallback height for unselected items.
    #[serde(default)]
    pub collapsed_height: Option<f64>,

    /// Fallback height for the selected item.
    #[serde(default)]
    pub selected_height: Option<f64>,

    /// Measured full height of a card.
    #[serde(default)]
    pub content_height: Option<f64>,

    /// Fraction of a card shown while collapsed.
    #[serde(default)]
    pub overview_fraction: Option<f64>,

    /// How cards report their size ("measured" or "fallback").
    #[serde(default)]
    pub sizing: Option<SizingMode>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Number of cards.
    pub card_count: usize,
    /// Viewport width.
    pub viewport_width: f64,
    /// Viewport height.
    pub viewport_height: f64,
    /// Fallback height for unselected items.
    pub collapsed_height: f64,
    /// Fallback height for the selected item.
    pub selected_height: f64,
    /// Measured full height of a card.
    pub content_height: f64,
    /// Fraction of a card shown while collapsed.
    pub overview_fraction: f64,
    /// Size query strategy.
    pub sizing: SizingMode,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let heights = DefaultHeights::default();
        let metrics = CardMetrics::default();
        Self {
            card_count: 20,
            viewport_width: 320.0,
            viewport_height: 568.0,
            collapsed_height: heights.collapsed,
            selected_height: heights.selected,
            content_height: metrics.content_height,
            overview_fraction: metrics.overview_fraction,
            sizing: SizingMode::default(),
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Viewport size.
    pub fn viewport(&self) -> Size {
        Size::new(self.viewport_width, self.viewport_height)
    }

    /// Deck options built from this config.
    pub fn deck_options(&self) -> DeckOptions {
        DeckOptions {
            sizing: self.sizing,
            metrics: CardMetrics {
                content_height: self.content_height,
                overview_fraction: self.overview_fraction,
            },
            defaults: DefaultHeights::new(self.collapsed_height, self.selected_height),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/cardstack/cardstack.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("cardstack").join("cardstack.log")
    } else {
        PathBuf::from("cardstack.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/cardstack/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardstack").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CARDSTACK_CONFIG` environment variable
/// 3. Default path `~/.config/cardstack/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CARDSTACK_CARD_COUNT`: Override card count (ignored with a warning if not an integer)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(CARD_COUNT_ENV_VAR) {
        match raw.trim().parse::<usize>() {
            Ok(count) => config.card_count = count,
            Err(e) => warn!(value = %raw, error = %e, "Ignoring invalid {}", CARD_COUNT_ENV_VAR),
        }
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        card_count: config.card_count.unwrap_or(defaults.card_count),
        viewport_width: config.viewport_width.unwrap_or(defaults.viewport_width),
        viewport_height: config.viewport_height.unwrap_or(defaults.viewport_height),
        collapsed_height: config.collapsed_height.unwrap_or(defaults.collapsed_height),
        selected_height: config.selected_height.unwrap_or(defaults.selected_height),
        content_height: config.content_height.unwrap_or(defaults.content_height),
        overview_fraction: config
            .overview_fraction
            .unwrap_or(defaults.overview_fraction),
        sizing: config.sizing.unwrap_or(defaults.sizing),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    card_count_override: Option<usize>,
    width_override: Option<f64>,
    height_override: Option<f64>,
) -> ResolvedConfig {
    if let Some(count) = card_count_override {
        config.card_count = count;
    }

    if let Some(width) = width_override {
        config.viewport_width = width;
    }

    if let Some(height) = height_override {
        config.viewport_height = height;
    }

    config
}

/// Reject geometry the layout cannot use.
///
/// Runs last in the chain, after CLI overrides, so every source is checked.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` for the first negative, infinite, or
/// NaN dimension or fraction.
pub fn validate_config(config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    let checks = [
        ("viewport_width", config.viewport_width),
        ("viewport_height", config.viewport_height),
        ("collapsed_height", config.collapsed_height),
        ("selected_height", config.selected_height),
        ("content_height", config.content_height),
        ("overview_fraction", config.overview_fraction),
    ];

    if let Some(&(field, value)) = checks
        .iter()
        .find(|(_, value)| !(value.is_finite() && *value >= 0.0))
    {
        return Err(ConfigError::InvalidValue { field, value });
    }

    Ok(config)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
