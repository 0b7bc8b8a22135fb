//! Placement of an explosion on screen.

use serde::{Deserialize, Serialize};

/// Viewport position the explosion starts from, in px.
///
/// Only the rendering layer uses this; motion math is placement independent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Center of an element's bounding rect.
    pub fn from_rect(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { x: left + width / 2.0, y: top + height / 2.0 }
    }
}

impl std::str::FromStr for Anchor {
    type Err = String;

    /// Parse `"X,Y"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("anchor must be 'X,Y', got '{}'", s))?;
        let x: f64 = x.trim().parse().map_err(|_| format!("invalid anchor x '{}'", x.trim()))?;
        let y: f64 = y.trim().parse().map_err(|_| format!("invalid anchor y '{}'", y.trim()))?;
        Ok(Self { x, y })
    }
}
