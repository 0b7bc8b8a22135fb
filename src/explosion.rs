//! Explosion planning.
//!
//! Ties the pieces together: options get their defaults, the resolved
//! configuration is validated, the particle field is generated and every
//! particle gets its motion parameters. The result is an [`ExplosionPlan`]
//! a rendering layer can realize and later tear down.
//!
//! # Example
//!
//! ```
//! use confetti::explosion::Explosion;
//! use confetti::models::ExplosionOptions;
//!
//! let options = ExplosionOptions { particle_count: Some(12), ..Default::default() };
//! let plan = Explosion::new(options).plan(&mut rand::thread_rng()).expect("valid options");
//! assert_eq!(plan.particles.len(), 12);
//! assert_eq!(plan.dispose_after_ms, 3600);
//! ```

use rand::Rng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::constants::{MAX_PARTICLE_COUNT, TEARDOWN_BUFFER_MS};
use crate::field::generate_particles;
use crate::models::{Anchor, ExplosionConfig, ExplosionOptions, MotionParameters, Particle};
use crate::motion::derive_motion_parameters;
use crate::styles::{container_styles, particle_styles, StyleSet};
use crate::validate::{self, ValidationIssue};

/// A particle together with the motion derived for it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RealizedParticle {
    #[serde(flatten)]
    pub particle: Particle,
    pub motion: MotionParameters,
}

impl RealizedParticle {
    pub fn styles(&self) -> StyleSet {
        particle_styles(&self.particle, &self.motion)
    }
}

/// Everything a rendering layer needs for one explosion
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplosionPlan {
    pub config: ExplosionConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Anchor>,
    pub particles: Vec<RealizedParticle>,
    /// Hide the field after this many ms; `None` keeps it on screen
    pub hide_after_ms: Option<u64>,
    /// Dispose of the container after this many ms
    pub dispose_after_ms: u64,
}

impl ExplosionPlan {
    pub fn container_styles(&self) -> StyleSet {
        container_styles(&self.config, self.anchor.as_ref())
    }

    pub fn particle_styles(&self) -> Vec<StyleSet> {
        self.particles.iter().map(RealizedParticle::styles).collect()
    }
}

/// One configured explosion, not yet realized
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    config: ExplosionConfig,
    anchor: Option<Anchor>,
}

impl Explosion {
    /// Resolve `options` against the defaults.
    pub fn new(options: ExplosionOptions) -> Self {
        Self::with_config(options.resolve())
    }

    pub fn with_config(config: ExplosionConfig) -> Self {
        Self { config, anchor: None }
    }

    /// Start the explosion from `anchor` instead of the stage center.
    pub fn at(mut self, anchor: impl Into<Anchor>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn config(&self) -> &ExplosionConfig {
        &self.config
    }

    pub fn anchor(&self) -> Option<&Anchor> {
        self.anchor.as_ref()
    }

    pub fn issues(&self) -> Vec<ValidationIssue> {
        validate::check(&self.config)
    }

    /// Validate, reporting every issue to the diagnostic channel.
    pub fn is_valid(&self) -> bool {
        validate::is_valid(&self.config)
    }

    /// The evenly spaced particle field, without motion. Counts outside
    /// `0..=MAX_PARTICLE_COUNT` give an empty field.
    pub fn particles(&self) -> Vec<Particle> {
        let count = match self.config.particle_count {
            n @ 0..=MAX_PARTICLE_COUNT => usize::try_from(n).unwrap_or(0),
            _ => 0,
        };
        generate_particles(count, &self.config.colors)
    }

    /// Milliseconds until the field should be hidden, when it is destroyed at all
    pub fn hide_after_ms(&self) -> Option<u64> {
        self.config.should_destroy_after_done.then(|| self.duration_ms())
    }

    /// Milliseconds until the container can be disposed of
    pub fn dispose_after_ms(&self) -> u64 {
        self.duration_ms() + TEARDOWN_BUFFER_MS
    }

    fn duration_ms(&self) -> u64 {
        u64::try_from(self.config.duration).unwrap_or(0)
    }

    /// Realize the explosion with `rng`, or `None` when the configuration is
    /// invalid. Issues are reported before returning.
    pub fn plan<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<ExplosionPlan> {
        if !self.is_valid() {
            return None;
        }

        let particles = self
            .particles()
            .into_iter()
            .map(|particle| {
                let motion = derive_motion_parameters(&particle, &self.config, rng);
                RealizedParticle { particle, motion }
            })
            .collect();

        Some(self.finish(particles))
    }

    /// Like [`Explosion::plan`], deriving motion on the rayon pool with a
    /// thread-local RNG per worker.
    pub fn plan_parallel(&self) -> Option<ExplosionPlan> {
        if !self.is_valid() {
            return None;
        }

        let particles = self
            .particles()
            .into_par_iter()
            .map_init(rand::thread_rng, |rng, particle| {
                let motion = derive_motion_parameters(&particle, &self.config, rng);
                RealizedParticle { particle, motion }
            })
            .collect();

        Some(self.finish(particles))
    }

    fn finish(&self, particles: Vec<RealizedParticle>) -> ExplosionPlan {
        debug!(
            particles = particles.len(),
            duration = self.config.duration,
            shape = %self.config.particles_shape,
            "planned explosion"
        );
        ExplosionPlan {
            config: self.config.clone(),
            anchor: self.anchor,
            particles,
            hide_after_ms: self.hide_after_ms(),
            dispose_after_ms: self.dispose_after_ms(),
        }
    }
}

impl Default for Explosion {
    fn default() -> Self {
        Self::with_config(ExplosionConfig::default())
    }
}

/// Plan an explosion straight from a JSON/JSON5 options string.
///
/// Returns the plan (if valid) and every issue found, so browser-facing
/// callers can surface messages without a log subscriber.
pub fn plan_from_json<R: Rng + ?Sized>(
    text: &str,
    anchor: Option<Anchor>,
    rng: &mut R,
) -> (Option<ExplosionPlan>, Vec<ValidationIssue>) {
    let options = match ExplosionOptions::from_json_str(text) {
        Ok(options) => options,
        Err(e) => {
            let issues = vec![validate::options_issue(&e)];
            validate::report(&issues);
            return (None, issues);
        }
    };

    let mut explosion = Explosion::new(options);
    if let Some(anchor) = anchor {
        explosion = explosion.at(anchor);
    }
    let issues = explosion.issues();
    (explosion.plan(rng), issues)
}
