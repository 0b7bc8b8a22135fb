//! Trigger semantics for wrapping interactive elements.
//!
//! A wrapped element explodes on click and on keyboard activation, starting
//! from the center of its bounding rect. Event wiring stays with the host;
//! this module only answers which keys count and where the anchor goes.

use serde::{Deserialize, Serialize};

use crate::models::Anchor;

/// Keys that activate a wrapped element, as reported by `KeyboardEvent.key`
pub const TRIGGER_KEYS: [&str; 2] = ["Enter", " "];

/// Whether a key press should fire the explosion
pub fn is_trigger_key(key: &str) -> bool {
    TRIGGER_KEYS.contains(&key)
}

/// Viewport bounding rect of a triggering element, in px
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Anchor {
        Anchor::from_rect(self.left, self.top, self.width, self.height)
    }
}

impl From<ElementRect> for Anchor {
    fn from(rect: ElementRect) -> Self {
        rect.center()
    }
}
