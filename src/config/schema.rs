//! Configuration schema types for `confetti.toml`
//!
//! Defines the structure and validation rules for explosion defaults and
//! output settings.

use serde::{Deserialize, Serialize};

use crate::models::ExplosionOptions;
use crate::palettes;
use crate::validate;

/// Plan output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The whole plan as JSON
    #[default]
    Json,
    /// One CSS declaration block per particle
    Css,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            other => Err(format!("unknown format '{}', expected json or css", other)),
        }
    }
}

/// `[explosion]` section: option defaults for every planned explosion
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplosionSection {
    #[serde(flatten)]
    pub options: ExplosionOptions,
    /// Built-in palette name, used when `colors` is not set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<String>,
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output
    #[serde(default)]
    pub pretty: bool,
}

/// Complete confetti.toml configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfettiConfig {
    #[serde(default)]
    pub explosion: ExplosionSection,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Configuration validation error
#[derive(Debug, Clone)]
pub struct ConfigValidationError {
    /// Path to the invalid field (e.g., "explosion.force")
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "confetti.toml: '{}' {}", self.field, self.message)
    }
}

impl ConfettiConfig {
    /// Validate the configuration and return any errors.
    ///
    /// Explosion fields go through the same constraint table as runtime
    /// options, so a config that loads never produces an invalid plan on
    /// its own. Warnings are not errors here.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if let Some(name) = &self.explosion.palette {
            if palettes::get_builtin(name).is_none() {
                errors.push(ConfigValidationError {
                    field: "explosion.palette".to_string(),
                    message: format!(
                        "unknown palette '{}' (available: {})",
                        name,
                        palettes::list_builtins().join(", ")
                    ),
                });
            }
        }

        let config = self.explosion_options().resolve();
        for issue in validate::check(&config).into_iter().filter(|i| i.is_error()) {
            errors.push(ConfigValidationError {
                field: format!("explosion.{}", issue.field),
                message: issue.message,
            });
        }

        errors
    }

    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Explosion options with the named palette expanded into `colors`.
    ///
    /// An explicit `colors` list wins over `palette`.
    pub fn explosion_options(&self) -> ExplosionOptions {
        let mut options = self.explosion.options.clone();
        if options.colors.is_none() {
            options.colors = self
                .explosion
                .palette
                .as_deref()
                .and_then(palettes::get_builtin)
                .map(|palette| palette.colors);
        }
        options
    }
}
