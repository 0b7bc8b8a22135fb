//! Particle and shape types.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One confetti piece before motion is attached: its color and launch angle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    /// Color value handed to the rendering layer as-is
    pub color: String,
    /// Launch direction in degrees, 0 being straight up
    pub degree: f64,
}

impl Particle {
    pub fn new(color: impl Into<String>, degree: f64) -> Self {
        Self { color: color.into(), degree }
    }
}

/// Shape policy for a whole explosion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParticlesShape {
    /// Circles and rectangles, picked per particle
    #[default]
    Mix,
    /// Every particle is a circle
    Circles,
    /// Every particle is a rectangle
    Rectangles,
}

impl fmt::Display for ParticlesShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParticlesShape::Mix => write!(f, "mix"),
            ParticlesShape::Circles => write!(f, "circles"),
            ParticlesShape::Rectangles => write!(f, "rectangles"),
        }
    }
}

impl FromStr for ParticlesShape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mix" => Ok(ParticlesShape::Mix),
            "circles" => Ok(ParticlesShape::Circles),
            "rectangles" => Ok(ParticlesShape::Rectangles),
            other => Err(format!(
                "unknown particles shape '{}', expected mix, circles or rectangles",
                other
            )),
        }
    }
}

/// Rendered shape of a single particle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticleShape {
    Circle,
    Rectangle,
}

impl ParticleShape {
    /// CSS border radius that produces this shape from a box
    pub fn border_radius(&self) -> &'static str {
        match self {
            ParticleShape::Circle => "50%",
            ParticleShape::Rectangle => "0",
        }
    }
}

/// Axis a particle spins around while falling.
///
/// Dual-axis spins look the most natural; the pure z-axis spin keeps the
/// piece flat to the viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    XY,
    XZ,
    YZ,
    X,
    Y,
    Z,
}

const AXIS_COUNT: u8 = 6;

impl RotationAxis {
    /// Every variant, in selection order
    pub const ALL: [RotationAxis; AXIS_COUNT as usize] = [
        RotationAxis::XY,
        RotationAxis::XZ,
        RotationAxis::YZ,
        RotationAxis::X,
        RotationAxis::Y,
        RotationAxis::Z,
    ];

    /// Pick one variant uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        // u8 ranges sample with a modulus zone, so constant mock RNGs terminate
        Self::ALL[usize::from(rng.gen_range(0..AXIS_COUNT))]
    }

    /// The `rotate3d` vector for this axis
    pub fn vector(&self) -> [u8; 3] {
        match self {
            RotationAxis::XY => [1, 1, 0],
            RotationAxis::XZ => [1, 0, 1],
            RotationAxis::YZ => [0, 1, 1],
            RotationAxis::X => [1, 0, 0],
            RotationAxis::Y => [0, 1, 0],
            RotationAxis::Z => [0, 0, 1],
        }
    }

    pub fn is_z_axis(&self) -> bool {
        matches!(self, RotationAxis::Z)
    }

    /// Comma separated vector, as used in a CSS `rotate3d()` argument list
    pub fn css_vector(&self) -> String {
        let [x, y, z] = self.vector();
        format!("{},{},{}", x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_particles_shape_parse() {
        assert_eq!("mix".parse::<ParticlesShape>(), Ok(ParticlesShape::Mix));
        assert_eq!("circles".parse::<ParticlesShape>(), Ok(ParticlesShape::Circles));
        assert_eq!("rectangles".parse::<ParticlesShape>(), Ok(ParticlesShape::Rectangles));
        assert!("rectangle".parse::<ParticlesShape>().is_err());
    }

    #[test]
    fn test_particles_shape_serde() {
        let shape: ParticlesShape = serde_json::from_str("\"circles\"").unwrap();
        assert_eq!(shape, ParticlesShape::Circles);
        assert_eq!(serde_json::to_string(&ParticlesShape::Mix).unwrap(), "\"mix\"");
    }

    #[test]
    fn test_rotation_axis_vectors_unique() {
        let vectors: HashSet<[u8; 3]> = RotationAxis::ALL.iter().map(|a| a.vector()).collect();
        assert_eq!(vectors.len(), 6);
        assert_eq!(RotationAxis::Z.vector(), [0, 0, 1]);
        assert_eq!(RotationAxis::XY.css_vector(), "1,1,0");
    }

    #[test]
    fn test_rotation_axis_random_bounds() {
        assert_eq!(RotationAxis::random(&mut StepRng::new(0, 0)), RotationAxis::XY);
        assert_eq!(RotationAxis::random(&mut StepRng::new(u64::MAX, 0)), RotationAxis::Z);
    }

    #[test]
    fn test_rotation_axis_random_covers_all() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<RotationAxis> =
            (0..500).map(|_| RotationAxis::random(&mut rng)).collect();
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_rotation_axis_random_is_uniform() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut counts = [0usize; 6];
        for _ in 0..60_000 {
            let axis = RotationAxis::random(&mut rng);
            let index = RotationAxis::ALL.iter().position(|a| *a == axis).unwrap();
            counts[index] += 1;
        }
        // Each axis expects 10000 picks; the end entries are not halved
        for (axis, count) in RotationAxis::ALL.iter().zip(counts) {
            assert!((9_000..=11_000).contains(&count), "{:?} picked {} times", axis, count);
        }
    }

    #[test]
    fn test_border_radius() {
        assert_eq!(ParticleShape::Circle.border_radius(), "50%");
        assert_eq!(ParticleShape::Rectangle.border_radius(), "0");
    }
}
