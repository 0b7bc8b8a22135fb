//! Style value objects for the rendering layer
//!
//! Motion parameters are exposed as CSS custom properties. The crate never
//! touches a UI node; the host applies a [`StyleSet`] to whatever element
//! it renders for a particle or for the explosion container.

use serde::Serialize;

use crate::math::positive_zero;
use crate::models::{Anchor, ExplosionConfig, MotionParameters, Particle};

/// Ordered list of CSS custom properties
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StyleSet {
    properties: Vec<(String, String)>,
}

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, replacing an earlier value for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.properties.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.iter().find(|(n, _)| n == name).map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Render as an inline declaration block, e.g. `--x1: 0; --x2: 0;`
    pub fn to_declarations(&self) -> String {
        self.iter().map(|(n, v)| format!("{}: {};", n, v)).collect::<Vec<_>>().join(" ")
    }
}

/// Format a number the way it would print in JavaScript for these values.
fn num(value: f64) -> String {
    format!("{}", positive_zero(value))
}

fn px(value: f64) -> String {
    format!("{}px", positive_zero(value))
}

/// Custom properties for one particle element.
///
/// `--bgcolor` belongs on the inner element that paints the color; the
/// remaining properties drive the outer element's animation.
pub fn particle_styles(particle: &Particle, motion: &MotionParameters) -> StyleSet {
    let mut styles = StyleSet::new();
    styles.set("--x-landing-point", px(motion.landing_point));
    styles.set("--duration-chaos", format!("{}ms", num(motion.duration_chaos)));

    for (i, value) in motion.x_curve().iter().enumerate() {
        styles.set(format!("--x{}", i + 1), num(*value));
    }
    for (i, value) in motion.y_curve().iter().enumerate() {
        styles.set(format!("--y{}", i + 1), num(*value));
    }

    styles.set("--width", px(motion.width));
    styles.set("--height", px(motion.height));
    styles.set("--rotation", motion.rotation.css_vector());
    styles.set("--rotation-duration", format!("{}ms", num(motion.rotation_duration)));
    styles.set("--border-radius", motion.shape.border_radius());
    styles.set("--bgcolor", particle.color.clone());
    styles
}

/// Custom properties for the explosion container.
pub fn container_styles(config: &ExplosionConfig, anchor: Option<&Anchor>) -> StyleSet {
    let mut styles = StyleSet::new();
    styles.set("--floor-height", px(config.stage_height));
    if let Some(anchor) = anchor {
        styles.set("--confetti-x", px(anchor.x));
        styles.set("--confetti-y", px(anchor.y));
    }
    styles
}
