//! Confetti - Library for planning confetti explosions
//!
//! This library provides functionality to:
//! - Spread particles evenly around a circle and color them from a palette
//! - Derive randomized motion parameters (landing point, bezier curves, size, rotation)
//! - Validate explosion options and expose the result as CSS custom properties

pub mod cli;
pub mod color;
pub mod config;
pub mod constants;
pub mod explosion;
pub mod field;
pub mod math;
pub mod models;
pub mod motion;
pub mod palettes;
pub mod styles;
pub mod trigger;
pub mod validate;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use explosion::{Explosion, ExplosionPlan, RealizedParticle};
pub use models::{ExplosionConfig, ExplosionOptions, MotionParameters, Particle};
