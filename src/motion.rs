//! Motion parameter derivation for individual particles
//!
//! Each particle's path is described by two cubic-bezier timing curves, a
//! landing offset, a spin axis and a size. The horizontal curve models the
//! arc of the explosion; the vertical curve models a short upward or
//! downward kick followed by free-fall.
//!
//! Derivation is split into deterministic helpers ([`landing_point`],
//! [`arc`], [`free_fall`]) that depend only on the launch angle, and
//! [`derive_motion_parameters`] which adds fresh random jitter on every call.
//!
//! # Example
//!
//! ```
//! use confetti::models::{ExplosionConfig, Particle};
//! use confetti::motion::derive_motion_parameters;
//!
//! let config = ExplosionConfig::default();
//! let particle = Particle::new("#FF0000", 90.0);
//! let motion = derive_motion_parameters(&particle, &config, &mut rand::thread_rng());
//! assert_eq!(motion.x2, -motion.x1);
//! assert!(motion.y4 >= 0.0);
//! ```

use rand::Rng;

use crate::constants::{
    BEZIER_MEDIAN, CRAZY_PARTICLES_FREQUENCY, CRAZY_PARTICLE_CRAZINESS, DURATION_CHAOS_MAX,
    RECT_HEIGHT_JITTER, RECT_WIDTH_JITTER, ROTATION_SPEED_MAX, ROTATION_SPEED_MIN,
};
use crate::math::{coin_flip, map_range, positive_zero, round, rotate};
use crate::models::{
    ExplosionConfig, MotionParameters, Particle, ParticleShape, ParticlesShape, RotationAxis,
};

/// Distance of the 90-degree-rotated angle from 180.
///
/// 90 for vertical launches, 0 at 90 degrees and 180 at 270 degrees.
fn horizontal_distance(degree: f64) -> f64 {
    (rotate(degree, 90.0) - 180.0).abs()
}

/// Horizontal landing offset (px) for a launch angle.
///
/// Vertical launches (0 and 180 degrees) land near the origin and
/// horizontal launches (90 and 270 degrees) land at the stage edges, which
/// spreads the field into a rough ellipse. Bounded by `±stage_width / 2`.
pub fn landing_point(degree: f64, stage_width: f64) -> f64 {
    map_range(horizontal_distance(degree), 0.0, 180.0, -stage_width / 2.0, stage_width / 2.0)
}

/// How curved the horizontal path is, in `[0, 1]` (the `x4` control value).
///
/// 90 and 270 degree particles get a full arc, 0 and 180 degree particles
/// travel straight.
pub fn arc(degree: f64) -> f64 {
    round(map_range(horizontal_distance(degree), 0.0, 180.0, -1.0, 1.0).abs(), 4)
}

/// Free-fall ease (the `y4` control value).
///
/// Zero for particles launched straight up, `force` for particles launched
/// straight down. Never negative.
pub fn free_fall(degree: f64, force: f64) -> f64 {
    positive_zero(round(map_range((degree - 180.0).abs(), 0.0, 180.0, force, -force).max(0.0), 4))
}

/// Decide circle versus rectangle.
///
/// `mix` only flips a coin for spinning axes; the flat z-axis spin always
/// stays a rectangle. The coin is not drawn for pure z-axis particles.
fn pick_shape<R: Rng + ?Sized>(
    policy: ParticlesShape,
    rotation: RotationAxis,
    rng: &mut R,
) -> ParticleShape {
    let circle = match policy {
        ParticlesShape::Circles => true,
        ParticlesShape::Rectangles => false,
        ParticlesShape::Mix => !rotation.is_z_axis() && coin_flip(rng),
    };
    if circle {
        ParticleShape::Circle
    } else {
        ParticleShape::Rectangle
    }
}

/// Derive the full motion parameter set for one particle.
///
/// Every call draws fresh randomness, so particles can be derived in any
/// order or in parallel. `landing_point`, `x4` and `y4` depend only on the
/// particle and config and are stable across calls.
pub fn derive_motion_parameters<R: Rng + ?Sized>(
    particle: &Particle,
    config: &ExplosionConfig,
    rng: &mut R,
) -> MotionParameters {
    let landing_point = landing_point(particle.degree, config.stage_width);

    let rotation_duration =
        rng.gen::<f64>() * (ROTATION_SPEED_MAX - ROTATION_SPEED_MIN) + ROTATION_SPEED_MIN;
    let rotation = RotationAxis::random(rng);
    let duration_chaos = if config.duration != 0 {
        config.duration as f64 - (rng.gen::<f64>() * DURATION_CHAOS_MAX + 0.5).floor()
    } else {
        0.0
    };
    let crazy = rng.gen::<f64>() < CRAZY_PARTICLES_FREQUENCY;
    let shape = pick_shape(config.particles_shape, rotation, rng);

    // Back-and-forth wobble, only for crazy particles
    let x1 = if crazy { round(rng.gen::<f64>() * CRAZY_PARTICLE_CRAZINESS, 2) } else { 0.0 };
    let x2 = positive_zero(-x1);
    let x3 = x1;
    let x4 = arc(particle.degree);

    let y1 = round(rng.gen::<f64>() * BEZIER_MEDIAN, 4);
    let direction = if coin_flip(rng) { 1.0 } else { -1.0 };
    let y2 = positive_zero(round(rng.gen::<f64>() * config.force * direction, 4));
    let y3 = BEZIER_MEDIAN;
    let y4 = free_fall(particle.degree, config.force);

    let (width, height) = match shape {
        ParticleShape::Circle => (config.particle_size, config.particle_size),
        ParticleShape::Rectangle => {
            let width = (rng.gen::<f64>() * RECT_WIDTH_JITTER + 0.5).floor()
                + config.particle_size / 2.0;
            let height =
                (rng.gen::<f64>() * RECT_HEIGHT_JITTER + 0.5).floor() + config.particle_size;
            (width, height)
        }
    };

    MotionParameters {
        landing_point,
        duration_chaos,
        crazy,
        x1,
        x2,
        x3,
        x4,
        y1,
        y2,
        y3,
        y4,
        width,
        height,
        rotation,
        rotation_duration,
        shape,
    }
}
