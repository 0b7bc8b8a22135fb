//! Tuning constants and boundary defaults for confetti explosions.

/// Minimum duration of a single full particle rotation, in milliseconds
pub const ROTATION_SPEED_MIN: f64 = 200.0;
/// Maximum duration of a single full particle rotation, in milliseconds
pub const ROTATION_SPEED_MAX: f64 = 800.0;
/// 0-1 share of particles that follow an erratic horizontal path
pub const CRAZY_PARTICLES_FREQUENCY: f64 = 0.1;
/// 0-1 how far erratic particles deviate from their path
pub const CRAZY_PARTICLE_CRAZINESS: f64 = 0.3;
/// Mid-point of the bezier curves, where explosion turns into free-fall
pub const BEZIER_MEDIAN: f64 = 0.5;
/// Upper bound of the random amount subtracted from the explosion duration (ms)
pub const DURATION_CHAOS_MAX: f64 = 1000.0;
/// Upper bound of the random width jitter added to rectangles (px)
pub const RECT_WIDTH_JITTER: f64 = 4.0;
/// Upper bound of the random height jitter added to rectangles (px)
pub const RECT_HEIGHT_JITTER: f64 = 2.0;

/// 0-1 roughly the vertical force at which particles initially explode
pub const FORCE: f64 = 0.8;
/// Max height for rectangles, diameter for circles (px)
pub const SIZE: f64 = 15.0;
/// Distance particles fall from the explosion point (px)
pub const FLOOR_HEIGHT: f64 = 800.0;
/// Horizontal spread of particles (px)
pub const FLOOR_WIDTH: f64 = 1600.0;
pub const PARTICLE_COUNT: i64 = 200;
/// Largest particle field an explosion will plan
pub const MAX_PARTICLE_COUNT: i64 = 100_000;
/// Explosion duration (ms)
pub const DURATION: i64 = 3500;
pub const COLORS: [&str; 6] = ["#FFC700", "#FF0000", "#2E3191", "#41BBC7", "#FF00FF", "#00FF00"];

/// Extra time the host keeps the container alive after `DURATION` so the
/// last frames finish before disposal (ms)
pub const TEARDOWN_BUFFER_MS: u64 = 100;

/// Names accepted for the `particlesShape` option
pub const SHAPE_NAMES: [&str; 3] = ["mix", "circles", "rectangles"];

/// Default palette as owned strings.
pub fn default_colors() -> Vec<String> {
    COLORS.iter().map(|c| c.to_string()).collect()
}
