//! WASM API module for browser/JS interop
//!
//! Provides WebAssembly bindings for planning confetti explosions. The host
//! page creates elements and applies the returned CSS custom properties.

use wasm_bindgen::prelude::*;

use crate::constants::MAX_PARTICLE_COUNT;
use crate::explosion::plan_from_json;
use crate::field::generate_particles;
use crate::models::Anchor;
use crate::trigger;
use crate::validate::{self, ValidationIssue};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Result of planning an explosion.
#[wasm_bindgen]
pub struct PlanResult {
    valid: bool,
    json: String,
    warnings: Vec<String>,
}

#[wasm_bindgen]
impl PlanResult {
    /// Whether the options were valid and a plan was produced
    #[wasm_bindgen(getter)]
    pub fn valid(&self) -> bool {
        self.valid
    }

    /// The plan as JSON, or an empty string when invalid
    #[wasm_bindgen(getter)]
    pub fn json(&self) -> String {
        self.json.clone()
    }

    /// Every validation message, errors included
    #[wasm_bindgen(getter)]
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.clone()
    }
}

fn messages(issues: &[ValidationIssue]) -> Vec<String> {
    issues.iter().map(ToString::to_string).collect()
}

fn plan_result(options_json: &str, anchor: Option<Anchor>) -> PlanResult {
    let (plan, issues) = plan_from_json(options_json, anchor, &mut rand::thread_rng());
    let mut warnings = messages(&issues);

    let json = match plan.as_ref().map(serde_json::to_string) {
        Some(Ok(json)) => json,
        Some(Err(e)) => {
            warnings.push(format!("failed to serialize plan: {}", e));
            String::new()
        }
        None => String::new(),
    };

    PlanResult { valid: !json.is_empty(), json, warnings }
}

/// Plan an explosion from a JSON options object.
///
/// # Arguments
/// * `options_json` - Options with camelCase keys; `"{}"` uses every default
#[wasm_bindgen]
pub fn plan_explosion(options_json: &str) -> PlanResult {
    plan_result(options_json, None)
}

/// Plan an explosion starting from viewport position (`x`, `y`).
#[wasm_bindgen]
pub fn plan_explosion_at(options_json: &str, x: f64, y: f64) -> PlanResult {
    plan_result(options_json, Some(Anchor::new(x, y)))
}

/// Validate a JSON options object.
///
/// # Returns
/// Array of validation messages (empty if valid)
#[wasm_bindgen]
pub fn validate_options(options_json: &str) -> Vec<String> {
    let issues = match serde_json::from_str::<serde_json::Value>(options_json) {
        Ok(value) => validate::check_value(&value),
        Err(e) => vec![validate::options_issue(&crate::models::OptionsError::Malformed(
            e.to_string(),
        ))],
    };
    messages(&issues)
}

/// Generate the evenly spaced particle field as JSON.
///
/// Counts above `MAX_PARTICLE_COUNT` give an empty field.
#[wasm_bindgen]
pub fn create_particles(count: u32, colors: Vec<String>) -> String {
    if i64::from(count) > MAX_PARTICLE_COUNT {
        return "[]".to_string();
    }
    let particles = generate_particles(count as usize, &colors);
    serde_json::to_string(&particles).unwrap_or_else(|_| "[]".to_string())
}

/// Whether a `KeyboardEvent.key` value should trigger an explosion
#[wasm_bindgen]
pub fn is_trigger_key(key: &str) -> bool {
    trigger::is_trigger_key(key)
}
