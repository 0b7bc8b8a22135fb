//! Configuration loading and discovery for `confetti.toml`
//!
//! Provides functions to find, load, and merge configuration, plus loading
//! of per-explosion option files.

use super::schema::{ConfettiConfig, OutputFormat};
use crate::models::{ExplosionOptions, OptionsError, ParticlesShape};
use crate::palettes;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up during discovery
pub const CONFIG_FILE_NAME: &str = "confetti.toml";

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("Failed to parse confetti.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Option file could not be interpreted
    #[error("Failed to parse options: {0}")]
    Json(#[from] OptionsError),
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override config values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub particle_count: Option<i64>,
    pub duration: Option<i64>,
    pub force: Option<f64>,
    pub particle_size: Option<f64>,
    pub stage_width: Option<f64>,
    pub stage_height: Option<f64>,
    pub particles_shape: Option<ParticlesShape>,
    /// Built-in palette; replaces any configured colors
    pub palette: Option<String>,
    pub format: Option<OutputFormat>,
    pub pretty: Option<bool>,
}

/// Find confetti.toml by walking up from the current working directory.
///
/// Search order:
/// 1. Walk up from current directory looking for confetti.toml
/// 2. Check XDG_CONFIG_HOME/confetti/confetti.toml (or ~/.config/confetti/confetti.toml)
pub fn find_config() -> Option<PathBuf> {
    if let Ok(cwd) = env::current_dir() {
        if let Some(path) = find_config_from(cwd) {
            return Some(path);
        }
    }

    find_xdg_config()
}

/// Find confetti.toml in the XDG config directory.
pub fn find_xdg_config() -> Option<PathBuf> {
    let xdg_config = env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| env::var("HOME").map(|h| PathBuf::from(h).join(".config")))
        .ok()?;

    let config_path = xdg_config.join("confetti").join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Find confetti.toml by walking up from a specific directory.
pub fn find_config_from(start: PathBuf) -> Option<PathBuf> {
    let mut current = start;

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load configuration from a confetti.toml file.
///
/// If a path is provided, loads from that file. Otherwise, uses `find_config()`
/// to locate the config file. If no config file is found, returns the
/// default configuration.
///
/// # Example
/// ```ignore
/// let config = load_config(None)?;
/// let config = load_config(Some(Path::new("party/confetti.toml")))?;
/// ```
pub fn load_config(path: Option<&Path>) -> Result<ConfettiConfig, ConfigError> {
    let config_path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => find_config(),
    };

    match config_path {
        Some(p) => {
            tracing::debug!(path = %p.display(), "loading config");
            load_config_file(&p)
        }
        None => Ok(default_config()),
    }
}

fn load_config_file(path: &Path) -> Result<ConfettiConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: ConfettiConfig = toml::from_str(&contents)?;

    let errors = config.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors.into_iter().map(|e| e.to_string()).collect()));
    }

    Ok(config)
}

/// Configuration used when no confetti.toml is found.
pub fn default_config() -> ConfettiConfig {
    ConfettiConfig::default()
}

/// Merge CLI overrides into a configuration.
///
/// CLI arguments take precedence over config file values.
///
/// # Example
/// ```ignore
/// let mut config = load_config(None)?;
/// let overrides = CliOverrides { particle_count: Some(50), ..Default::default() };
/// merge_cli_overrides(&mut config, &overrides);
/// ```
pub fn merge_cli_overrides(config: &mut ConfettiConfig, overrides: &CliOverrides) {
    let options = &mut config.explosion.options;

    if let Some(count) = overrides.particle_count {
        options.particle_count = Some(count);
    }
    if let Some(duration) = overrides.duration {
        options.duration = Some(duration);
    }
    if let Some(force) = overrides.force {
        options.force = Some(force);
    }
    if let Some(size) = overrides.particle_size {
        options.particle_size = Some(size);
    }
    if let Some(width) = overrides.stage_width {
        options.stage_width = Some(width);
    }
    if let Some(height) = overrides.stage_height {
        options.stage_height = Some(height);
    }
    if let Some(shape) = overrides.particles_shape {
        options.particles_shape = Some(shape);
    }

    // A palette on the command line beats colors from the file
    if let Some(ref palette) = overrides.palette {
        options.colors = palettes::get_builtin(palette).map(|p| p.colors);
        config.explosion.palette = Some(palette.clone());
    }

    if let Some(format) = overrides.format {
        config.output.format = format;
    }
    if let Some(pretty) = overrides.pretty {
        config.output.pretty = pretty;
    }
}

/// Load explosion options from a JSON or JSON5 file.
pub fn load_options_file(path: &Path) -> Result<ExplosionOptions, ConfigError> {
    let contents = fs::read_to_string(path)?;
    Ok(ExplosionOptions::from_json_str(&contents)?)
}
