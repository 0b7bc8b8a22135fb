//! Particle field generation.
//!
//! Spreads `count` particles evenly around a full circle and cycles the
//! palette over them. No randomness lives here; every particle's motion is
//! randomized later by [`crate::motion`].

use crate::models::Particle;

/// Generate `count` particles evenly spaced around 360 degrees.
///
/// Particle `i` launches at `i * 360 / count` degrees and takes
/// `colors[i % colors.len()]`. A zero count yields an empty field, and so
/// does an empty palette since there is nothing to color the particles with.
///
/// # Example
///
/// ```
/// use confetti::field::generate_particles;
///
/// let particles = generate_particles(4, &["red", "green"]);
/// assert_eq!(particles[1].color, "green");
/// assert_eq!(particles[1].degree, 90.0);
/// ```
pub fn generate_particles<S: AsRef<str>>(count: usize, colors: &[S]) -> Vec<Particle> {
    if colors.is_empty() {
        return Vec::new();
    }

    let increment = 360.0 / count as f64;
    (0..count)
        .map(|i| Particle::new(colors[i % colors.len()].as_ref(), i as f64 * increment))
        .collect()
}
