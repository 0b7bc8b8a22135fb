//! Validation of explosion options
//!
//! Validation is advisory: every violated constraint becomes a
//! [`ValidationIssue`] and is reported through `tracing`, and callers skip
//! the explosion when any issue is an error. Nothing here panics or returns
//! `Err` for bad input.

use serde_json::Value;
use tracing::{error, warn};

use crate::color::parse_color;
use crate::constants::MAX_PARTICLE_COUNT;
use crate::models::{ExplosionConfig, ExplosionOptions, OptionsError};

/// Severity of a validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// Type of validation issue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueType {
    /// particleCount below zero
    NegativeParticleCount,
    /// particleCount above the largest plannable field
    ParticleCountTooLarge,
    /// duration below zero
    NegativeDuration,
    /// particlesShape not one of mix, circles, rectangles
    InvalidShape,
    /// colors present but not a list of strings
    ColorsNotList,
    /// particleSize below zero
    NegativeParticleSize,
    /// force outside [0, 1]
    ForceOutOfRange,
    /// stageHeight below zero
    NegativeStageHeight,
    /// stageWidth below zero
    NegativeStageWidth,
    /// NaN or infinite number
    NonFinite,
    /// No colors to give particles
    EmptyPalette,
    /// Palette entry a browser would not recognize
    InvalidColor,
    /// Options could not be interpreted at all
    MalformedOptions,
}

impl std::fmt::Display for IssueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IssueType::NegativeParticleCount => write!(f, "negative_particle_count"),
            IssueType::ParticleCountTooLarge => write!(f, "particle_count_too_large"),
            IssueType::NegativeDuration => write!(f, "negative_duration"),
            IssueType::InvalidShape => write!(f, "invalid_shape"),
            IssueType::ColorsNotList => write!(f, "colors_not_list"),
            IssueType::NegativeParticleSize => write!(f, "negative_particle_size"),
            IssueType::ForceOutOfRange => write!(f, "force_out_of_range"),
            IssueType::NegativeStageHeight => write!(f, "negative_stage_height"),
            IssueType::NegativeStageWidth => write!(f, "negative_stage_width"),
            IssueType::NonFinite => write!(f, "non_finite"),
            IssueType::EmptyPalette => write!(f, "empty_palette"),
            IssueType::InvalidColor => write!(f, "invalid_color"),
            IssueType::MalformedOptions => write!(f, "malformed_options"),
        }
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    pub severity: Severity,
    pub issue_type: IssueType,
    /// Option name the issue is about, in boundary (camelCase) spelling
    pub field: &'static str,
    /// Human-readable message describing the issue
    pub message: String,
}

impl ValidationIssue {
    pub fn error(issue_type: IssueType, field: &'static str, message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, issue_type, field, message: message.into() }
    }

    pub fn warning(issue_type: IssueType, field: &'static str, message: impl Into<String>) -> Self {
        Self { severity: Severity::Warning, issue_type, field, message: message.into() }
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.issue_type, self.message)
    }
}

/// Check a resolved configuration against the constraint table.
///
/// Zero counts, sizes and dimensions are in range; they produce an empty or
/// degenerate explosion rather than an error.
pub fn check(config: &ExplosionConfig) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if config.particle_count < 0 {
        issues.push(ValidationIssue::error(
            IssueType::NegativeParticleCount,
            "particleCount",
            "particleCount must be a positive integer",
        ));
    } else if config.particle_count > MAX_PARTICLE_COUNT {
        issues.push(ValidationIssue::error(
            IssueType::ParticleCountTooLarge,
            "particleCount",
            format!("particleCount must be at most {}", MAX_PARTICLE_COUNT),
        ));
    }

    if config.duration < 0 {
        issues.push(ValidationIssue::error(
            IssueType::NegativeDuration,
            "duration",
            "duration must be a positive integer",
        ));
    }

    check_non_negative(&mut issues, config.particle_size, "particleSize", IssueType::NegativeParticleSize);

    if !config.force.is_finite() {
        issues.push(non_finite("force"));
    } else if config.force < 0.0 || config.force > 1.0 {
        issues.push(ValidationIssue::error(
            IssueType::ForceOutOfRange,
            "force",
            "force must be a positive number and should be within 0 and 1",
        ));
    }

    check_non_negative(&mut issues, config.stage_height, "stageHeight", IssueType::NegativeStageHeight);
    check_non_negative(&mut issues, config.stage_width, "stageWidth", IssueType::NegativeStageWidth);

    if config.colors.is_empty() {
        if config.particle_count > 0 {
            issues.push(ValidationIssue::error(
                IssueType::EmptyPalette,
                "colors",
                "colors must contain at least one color",
            ));
        } else {
            issues.push(ValidationIssue::warning(IssueType::EmptyPalette, "colors", "colors is empty"));
        }
    }

    for color in &config.colors {
        if let Err(e) = parse_color(color) {
            issues.push(ValidationIssue::warning(
                IssueType::InvalidColor,
                "colors",
                format!("color '{}' may not render: {}", color, e),
            ));
        }
    }

    issues
}

fn check_non_negative(
    issues: &mut Vec<ValidationIssue>,
    value: f64,
    field: &'static str,
    issue_type: IssueType,
) {
    if !value.is_finite() {
        issues.push(non_finite(field));
    } else if value < 0.0 {
        issues.push(ValidationIssue::error(
            issue_type,
            field,
            format!("{} must be a positive number", field),
        ));
    }
}

fn non_finite(field: &'static str) -> ValidationIssue {
    ValidationIssue::error(IssueType::NonFinite, field, format!("{} must be a finite number", field))
}

/// Check a raw options object, as received from JSON.
///
/// Type-level problems (colors not a list, unknown shape name) are reported
/// first; when the object can be interpreted, the resolved configuration is
/// checked as well.
pub fn check_value(value: &Value) -> Vec<ValidationIssue> {
    match ExplosionOptions::from_value(value) {
        Ok(options) => check(&options.resolve()),
        Err(e) => vec![options_issue(&e)],
    }
}

/// Map an options parsing failure onto the issue it represents.
pub fn options_issue(e: &OptionsError) -> ValidationIssue {
    match e {
        OptionsError::ColorsNotList => {
            ValidationIssue::error(IssueType::ColorsNotList, "colors", e.to_string())
        }
        OptionsError::UnknownShape(_) => {
            ValidationIssue::error(IssueType::InvalidShape, "particlesShape", e.to_string())
        }
        OptionsError::NotAnObject | OptionsError::Malformed(_) => {
            ValidationIssue::error(IssueType::MalformedOptions, "options", e.to_string())
        }
    }
}

pub fn has_errors(issues: &[ValidationIssue]) -> bool {
    issues.iter().any(ValidationIssue::is_error)
}

/// Send every issue to the diagnostic channel.
pub fn report(issues: &[ValidationIssue]) {
    for issue in issues {
        match issue.severity {
            Severity::Error => error!(field = issue.field, kind = %issue.issue_type, "{}", issue.message),
            Severity::Warning => warn!(field = issue.field, kind = %issue.issue_type, "{}", issue.message),
        }
    }
}

/// Check, report, and answer whether the explosion may proceed.
pub fn is_valid(config: &ExplosionConfig) -> bool {
    let issues = check(config);
    report(&issues);
    !has_errors(&issues)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParticlesShape;
    use serde_json::json;

    fn issue_types(config: &ExplosionConfig) -> Vec<IssueType> {
        check(config).into_iter().filter(|i| i.is_error()).map(|i| i.issue_type).collect()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = ExplosionConfig::default();
        assert!(check(&config).is_empty());
        assert!(is_valid(&config));
    }

    #[test]
    fn test_in_range_combinations_are_valid() {
        for force in [0.0, 0.5, 1.0] {
            for shape in [ParticlesShape::Mix, ParticlesShape::Circles, ParticlesShape::Rectangles] {
                let config = ExplosionConfig {
                    particle_count: 0,
                    duration: 0,
                    particle_size: 0.0,
                    stage_height: 0.0,
                    stage_width: 10.0,
                    force,
                    particles_shape: shape,
                    ..Default::default()
                };
                assert!(!has_errors(&check(&config)), "force {} shape {} should be valid", force, shape);
            }
        }
    }

    #[test]
    fn test_negative_particle_count() {
        let config = ExplosionConfig { particle_count: -1, ..Default::default() };
        assert_eq!(issue_types(&config), vec![IssueType::NegativeParticleCount]);
        assert!(!is_valid(&config));
    }

    #[test]
    fn test_particle_count_upper_bound() {
        let at_limit = ExplosionConfig { particle_count: MAX_PARTICLE_COUNT, ..Default::default() };
        assert!(issue_types(&at_limit).is_empty());

        for count in [MAX_PARTICLE_COUNT + 1, 10_000_000_000, i64::MAX] {
            let config = ExplosionConfig { particle_count: count, ..Default::default() };
            assert_eq!(issue_types(&config), vec![IssueType::ParticleCountTooLarge]);
        }
    }

    #[test]
    fn test_check_value_huge_count_is_error() {
        let too_large = check_value(&json!({ "particleCount": 1e10 }));
        assert_eq!(too_large.len(), 1);
        assert_eq!(too_large[0].issue_type, IssueType::ParticleCountTooLarge);

        let unsafe_int = check_value(&json!({ "particleCount": 1e19 }));
        assert_eq!(unsafe_int.len(), 1);
        assert_eq!(unsafe_int[0].issue_type, IssueType::MalformedOptions);
    }

    #[test]
    fn test_negative_duration() {
        let config = ExplosionConfig { duration: -100, ..Default::default() };
        assert_eq!(issue_types(&config), vec![IssueType::NegativeDuration]);
    }

    #[test]
    fn test_force_out_of_range() {
        for force in [-0.1, 1.01, 5.0] {
            let config = ExplosionConfig { force, ..Default::default() };
            assert_eq!(issue_types(&config), vec![IssueType::ForceOutOfRange]);
        }
    }

    #[test]
    fn test_negative_sizes() {
        let config = ExplosionConfig {
            particle_size: -1.0,
            stage_height: -800.0,
            stage_width: -1600.0,
            ..Default::default()
        };
        assert_eq!(
            issue_types(&config),
            vec![
                IssueType::NegativeParticleSize,
                IssueType::NegativeStageHeight,
                IssueType::NegativeStageWidth
            ]
        );
    }

    #[test]
    fn test_non_finite_numbers() {
        let config = ExplosionConfig { force: f64::NAN, stage_width: f64::INFINITY, ..Default::default() };
        assert_eq!(issue_types(&config), vec![IssueType::NonFinite, IssueType::NonFinite]);
    }

    #[test]
    fn test_empty_palette() {
        let config = ExplosionConfig { colors: vec![], ..Default::default() };
        assert_eq!(issue_types(&config), vec![IssueType::EmptyPalette]);

        let nothing = ExplosionConfig { colors: vec![], particle_count: 0, ..Default::default() };
        assert!(!has_errors(&check(&nothing)));
    }

    #[test]
    fn test_unknown_color_is_warning() {
        let config = ExplosionConfig { colors: vec!["sparkly".to_string()], ..Default::default() };
        let issues = check(&config);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert_eq!(issues[0].issue_type, IssueType::InvalidColor);
        assert!(is_valid(&config));
    }

    #[test]
    fn test_check_value_colors_not_list() {
        let issues = check_value(&json!({ "colors": { "a": "#fff" } }));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].issue_type, IssueType::ColorsNotList);
        assert_eq!(issues[0].message, "colors must be an array of strings");
    }

    #[test]
    fn test_check_value_bad_shape() {
        let issues = check_value(&json!({ "particlesShape": "rectangle" }));
        assert_eq!(issues[0].issue_type, IssueType::InvalidShape);
        assert!(issues[0].is_error());
    }

    #[test]
    fn test_check_value_resolves_and_checks() {
        let issues = check_value(&json!({ "particleCount": -5, "force": 2 }));
        let types: Vec<IssueType> = issues.iter().map(|i| i.issue_type).collect();
        assert_eq!(types, vec![IssueType::NegativeParticleCount, IssueType::ForceOutOfRange]);
    }

    #[test]
    fn test_check_value_empty_object_is_valid() {
        assert!(check_value(&json!({})).is_empty());
    }

    #[test]
    fn test_issue_display() {
        let issue = ValidationIssue::error(IssueType::NegativeDuration, "duration", "duration must be a positive integer");
        assert_eq!(issue.to_string(), "ERROR [negative_duration] duration must be a positive integer");
    }
}
