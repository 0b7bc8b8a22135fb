//! Explosion options at the boundary and the resolved configuration.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::particle::ParticlesShape;
use crate::constants::{
    default_colors, DURATION, FLOOR_HEIGHT, FLOOR_WIDTH, FORCE, PARTICLE_COUNT, SHAPE_NAMES, SIZE,
};

/// Error interpreting a raw options object
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    /// Options must be a JSON object
    #[error("options must be an object")]
    NotAnObject,
    /// `colors` was present but not a list
    #[error("colors must be an array of strings")]
    ColorsNotList,
    /// `particlesShape` named something other than mix, circles or rectangles
    #[error("particlesShape should be either \"mix\" or \"circles\" or \"rectangles\", got {0}")]
    UnknownShape(String),
    /// Any other field had the wrong type
    #[error("invalid options: {0}")]
    Malformed(String),
}

/// Explosion options as supplied by a caller. Every field is optional and
/// falls back to the documented default when resolved.
///
/// Keys are camelCase at the JSON boundary; snake_case aliases let the same
/// struct live inside `confetti.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplosionOptions {
    #[serde(
        alias = "particle_count",
        skip_serializing_if = "Option::is_none",
        default,
        deserialize_with = "whole_number"
    )]
    pub particle_count: Option<i64>,
    /// Explosion duration in milliseconds
    #[serde(skip_serializing_if = "Option::is_none", default, deserialize_with = "whole_number")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub colors: Option<Vec<String>>,
    /// Circle diameter / rectangle height in px
    #[serde(alias = "particle_size", skip_serializing_if = "Option::is_none", default)]
    pub particle_size: Option<f64>,
    /// 0-1 vertical explosion force
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub force: Option<f64>,
    #[serde(alias = "stage_height", skip_serializing_if = "Option::is_none", default)]
    pub stage_height: Option<f64>,
    #[serde(alias = "stage_width", skip_serializing_if = "Option::is_none", default)]
    pub stage_width: Option<f64>,
    #[serde(
        alias = "should_destroy_after_done",
        skip_serializing_if = "Option::is_none",
        default
    )]
    pub should_destroy_after_done: Option<bool>,
    #[serde(alias = "particles_shape", skip_serializing_if = "Option::is_none", default)]
    pub particles_shape: Option<ParticlesShape>,
}

/// Largest integer a JS number holds exactly (`Number.MAX_SAFE_INTEGER`)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Accept integral floats for integer fields; every number is a float on the JS side.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    match Option::<f64>::deserialize(deserializer)? {
        None => Ok(None),
        Some(v) if v.fract() == 0.0 && v.abs() <= MAX_SAFE_INTEGER => Ok(Some(v as i64)),
        Some(v) if v.is_finite() && v.fract() == 0.0 => {
            Err(D::Error::custom(format!("{} is not a safe integer", v)))
        }
        Some(v) => Err(D::Error::custom(format!("expected a whole number, got {}", v))),
    }
}

impl ExplosionOptions {
    /// Interpret a raw JSON options object.
    ///
    /// The list-type and shape-name checks run before deserialization so the
    /// caller gets the same messages the validator reports.
    pub fn from_value(value: &Value) -> Result<Self, OptionsError> {
        let obj = value.as_object().ok_or(OptionsError::NotAnObject)?;

        if let Some(colors) = obj.get("colors") {
            let is_string_list =
                colors.as_array().map(|items| items.iter().all(Value::is_string)).unwrap_or(false);
            if !is_string_list {
                return Err(OptionsError::ColorsNotList);
            }
        }

        if let Some(shape) = obj.get("particlesShape").or_else(|| obj.get("particles_shape")) {
            match shape.as_str() {
                Some(name) if SHAPE_NAMES.contains(&name) => {}
                _ => return Err(OptionsError::UnknownShape(shape.to_string())),
            }
        }

        serde_json::from_value(value.clone()).map_err(|e| OptionsError::Malformed(e.to_string()))
    }

    /// Parse options from JSON or JSON5 text.
    pub fn from_json_str(text: &str) -> Result<Self, OptionsError> {
        let value: Value = match serde_json::from_str(text) {
            Ok(v) => v,
            Err(_) => json5::from_str(text).map_err(|e| OptionsError::Malformed(e.to_string()))?,
        };
        Self::from_value(&value)
    }

    /// Layer `other` on top of `self`; fields set in `other` win.
    pub fn merged(mut self, other: &ExplosionOptions) -> Self {
        if other.particle_count.is_some() {
            self.particle_count = other.particle_count;
        }
        if other.duration.is_some() {
            self.duration = other.duration;
        }
        if other.colors.is_some() {
            self.colors = other.colors.clone();
        }
        if other.particle_size.is_some() {
            self.particle_size = other.particle_size;
        }
        if other.force.is_some() {
            self.force = other.force;
        }
        if other.stage_height.is_some() {
            self.stage_height = other.stage_height;
        }
        if other.stage_width.is_some() {
            self.stage_width = other.stage_width;
        }
        if other.should_destroy_after_done.is_some() {
            self.should_destroy_after_done = other.should_destroy_after_done;
        }
        if other.particles_shape.is_some() {
            self.particles_shape = other.particles_shape;
        }
        self
    }

    /// Inject defaults for every unset field.
    pub fn resolve(&self) -> ExplosionConfig {
        let defaults = ExplosionConfig::default();
        ExplosionConfig {
            particle_count: self.particle_count.unwrap_or(defaults.particle_count),
            duration: self.duration.unwrap_or(defaults.duration),
            colors: self.colors.clone().unwrap_or(defaults.colors),
            particle_size: self.particle_size.unwrap_or(defaults.particle_size),
            force: self.force.unwrap_or(defaults.force),
            stage_height: self.stage_height.unwrap_or(defaults.stage_height),
            stage_width: self.stage_width.unwrap_or(defaults.stage_width),
            should_destroy_after_done: self
                .should_destroy_after_done
                .unwrap_or(defaults.should_destroy_after_done),
            particles_shape: self.particles_shape.unwrap_or(defaults.particles_shape),
        }
    }
}

/// Fully resolved explosion configuration.
///
/// Numeric fields stay signed so out-of-range input survives until
/// validation can report it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplosionConfig {
    pub particle_count: i64,
    pub duration: i64,
    pub colors: Vec<String>,
    pub particle_size: f64,
    pub force: f64,
    pub stage_height: f64,
    pub stage_width: f64,
    pub should_destroy_after_done: bool,
    pub particles_shape: ParticlesShape,
}

impl Default for ExplosionConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            duration: DURATION,
            colors: default_colors(),
            particle_size: SIZE,
            force: FORCE,
            stage_height: FLOOR_HEIGHT,
            stage_width: FLOOR_WIDTH,
            should_destroy_after_done: true,
            particles_shape: ParticlesShape::Mix,
        }
    }
}

impl From<ExplosionOptions> for ExplosionConfig {
    fn from(options: ExplosionOptions) -> Self {
        options.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_empty_uses_defaults() {
        let config = ExplosionOptions::default().resolve();
        assert_eq!(config.particle_count, 200);
        assert_eq!(config.duration, 3500);
        assert_eq!(config.colors.len(), 6);
        assert_eq!(config.colors[0], "#FFC700");
        assert_eq!(config.particle_size, 15.0);
        assert_eq!(config.force, 0.8);
        assert_eq!(config.stage_height, 800.0);
        assert_eq!(config.stage_width, 1600.0);
        assert!(config.should_destroy_after_done);
        assert_eq!(config.particles_shape, ParticlesShape::Mix);
    }

    #[test]
    fn test_resolve_keeps_set_fields() {
        let options = ExplosionOptions {
            particle_count: Some(12),
            force: Some(0.3),
            particles_shape: Some(ParticlesShape::Circles),
            ..Default::default()
        };
        let config: ExplosionConfig = options.into();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.force, 0.3);
        assert_eq!(config.particles_shape, ParticlesShape::Circles);
        assert_eq!(config.duration, 3500);
    }

    #[test]
    fn test_from_value_camel_case() {
        let value = json!({
            "particleCount": 50,
            "colors": ["red", "blue"],
            "particlesShape": "rectangles",
            "stageWidth": 900,
            "shouldDestroyAfterDone": false
        });
        let options = ExplosionOptions::from_value(&value).unwrap();
        assert_eq!(options.particle_count, Some(50));
        assert_eq!(options.colors, Some(vec!["red".to_string(), "blue".to_string()]));
        assert_eq!(options.particles_shape, Some(ParticlesShape::Rectangles));
        assert_eq!(options.stage_width, Some(900.0));
        assert_eq!(options.should_destroy_after_done, Some(false));
    }

    #[test]
    fn test_from_value_ignores_unknown_fields() {
        let value = json!({ "class": "my-confetti", "count": 3 });
        let options = ExplosionOptions::from_value(&value).unwrap();
        assert_eq!(options, ExplosionOptions::default());
    }

    #[test]
    fn test_from_value_colors_not_list() {
        let value = json!({ "colors": "#FF0000" });
        assert_eq!(ExplosionOptions::from_value(&value), Err(OptionsError::ColorsNotList));
    }

    #[test]
    fn test_from_value_unknown_shape() {
        let value = json!({ "particlesShape": "triangles" });
        assert!(matches!(
            ExplosionOptions::from_value(&value),
            Err(OptionsError::UnknownShape(_))
        ));
    }

    #[test]
    fn test_from_value_not_object() {
        assert_eq!(ExplosionOptions::from_value(&json!([1, 2])), Err(OptionsError::NotAnObject));
    }

    #[test]
    fn test_from_value_wrong_type() {
        let value = json!({ "force": "strong" });
        assert!(matches!(ExplosionOptions::from_value(&value), Err(OptionsError::Malformed(_))));
    }

    #[test]
    fn test_from_value_fractional_count() {
        let value = json!({ "particleCount": 2.5 });
        assert!(matches!(ExplosionOptions::from_value(&value), Err(OptionsError::Malformed(_))));
        let whole = json!({ "particleCount": 40.0 });
        assert_eq!(ExplosionOptions::from_value(&whole).unwrap().particle_count, Some(40));
    }

    #[test]
    fn test_from_value_rejects_unsafe_integers() {
        for count in [1e19, -1e19, 9_007_199_254_740_992.0] {
            let value = json!({ "particleCount": count });
            assert!(
                matches!(ExplosionOptions::from_value(&value), Err(OptionsError::Malformed(_))),
                "{} should be rejected",
                count
            );
        }
        let edge = json!({ "duration": 9_007_199_254_740_991.0 });
        assert_eq!(
            ExplosionOptions::from_value(&edge).unwrap().duration,
            Some(9_007_199_254_740_991)
        );
    }

    #[test]
    fn test_from_json5_str() {
        let options =
            ExplosionOptions::from_json_str("{ particleCount: 8, force: 0.5, // comment\n }")
                .unwrap();
        assert_eq!(options.particle_count, Some(8));
        assert_eq!(options.force, Some(0.5));
    }

    #[test]
    fn test_merged_prefers_other() {
        let base = ExplosionOptions { particle_count: Some(10), force: Some(0.2), ..Default::default() };
        let top = ExplosionOptions { force: Some(0.9), ..Default::default() };
        let merged = base.merged(&top);
        assert_eq!(merged.particle_count, Some(10));
        assert_eq!(merged.force, Some(0.9));
    }

    #[test]
    fn test_snake_case_alias() {
        let options: ExplosionOptions =
            toml::from_str("particle_count = 30\nstage_width = 400.0\n").unwrap();
        assert_eq!(options.particle_count, Some(30));
        assert_eq!(options.stage_width, Some(400.0));
    }
}
