//! Data models for confetti explosions (particles, options, motion)

mod anchor;
mod motion;
mod options;
mod particle;

// Re-export all public types
pub use anchor::Anchor;
pub use motion::MotionParameters;
pub use options::{ExplosionConfig, ExplosionOptions, OptionsError};
pub use particle::{Particle, ParticleShape, ParticlesShape, RotationAxis};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_particle_roundtrip() {
        let particle = Particle::new("#FF0000", 90.0);
        let json = serde_json::to_string(&particle).unwrap();
        assert_eq!(json, r##"{"color":"#FF0000","degree":90.0}"##);
        let parsed: Particle = serde_json::from_str(&json).unwrap();
        assert_eq!(particle, parsed);
    }

    #[test]
    fn test_anchor_parse() {
        assert_eq!("120,45.5".parse::<Anchor>(), Ok(Anchor::new(120.0, 45.5)));
        assert_eq!(" 1 , 2 ".parse::<Anchor>(), Ok(Anchor::new(1.0, 2.0)));
        assert!("120".parse::<Anchor>().is_err());
        assert!("a,b".parse::<Anchor>().is_err());
    }

    #[test]
    fn test_motion_parameters_serialize_camel_case() {
        let motion = MotionParameters {
            landing_point: -400.0,
            duration_chaos: 3100.0,
            crazy: false,
            x1: 0.0,
            x2: 0.0,
            x3: 0.0,
            x4: 0.5,
            y1: 0.25,
            y2: -0.4,
            y3: 0.5,
            y4: 0.0,
            width: 15.0,
            height: 15.0,
            rotation: RotationAxis::YZ,
            rotation_duration: 420.0,
            shape: ParticleShape::Circle,
        };
        let value = serde_json::to_value(&motion).unwrap();
        assert_eq!(value["landingPoint"], -400.0);
        assert_eq!(value["rotationDuration"], 420.0);
        assert_eq!(value["rotation"], "yz");
        assert_eq!(value["shape"], "circle");
        assert!(motion.is_circle());
        assert_eq!(motion.y_curve(), [0.25, -0.4, 0.5, 0.0]);
    }
}
