//! Per-particle motion parameters.

use serde::{Deserialize, Serialize};

use super::particle::{ParticleShape, RotationAxis};

/// Numbers a rendering layer needs to animate one particle.
///
/// The x/y control values feed two cubic-bezier timing curves: one for the
/// horizontal travel and one for the explosion-then-free-fall vertical
/// travel. Derived once per particle and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionParameters {
    /// Horizontal landing offset from the explosion origin (px)
    pub landing_point: f64,
    /// Explosion duration with random jitter subtracted (ms)
    pub duration_chaos: f64,
    /// Whether this particle was picked for extra horizontal wobble
    pub crazy: bool,
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub x4: f64,
    pub y1: f64,
    pub y2: f64,
    pub y3: f64,
    pub y4: f64,
    /// Rendered width (px)
    pub width: f64,
    /// Rendered height (px)
    pub height: f64,
    pub rotation: RotationAxis,
    /// Duration of one full rotation (ms)
    pub rotation_duration: f64,
    pub shape: ParticleShape,
}

impl MotionParameters {
    /// Horizontal curve control values `[x1, x2, x3, x4]`
    pub fn x_curve(&self) -> [f64; 4] {
        [self.x1, self.x2, self.x3, self.x4]
    }

    /// Vertical curve control values `[y1, y2, y3, y4]`
    pub fn y_curve(&self) -> [f64; 4] {
        [self.y1, self.y2, self.y3, self.y4]
    }

    pub fn is_circle(&self) -> bool {
        self.shape == ParticleShape::Circle
    }
}
