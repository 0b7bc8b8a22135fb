//! Small numeric helpers shared by the field generator and motion deriver.

use rand::Rng;

/// Round `num` to `precision` decimal places, halves rounding up.
///
/// `f64::EPSILON` is added first so values like `1.005` land on the
/// expected side after scaling.
pub fn round(num: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    ((num + f64::EPSILON) * scale + 0.5).floor() / scale
}

/// Linearly remap `value` from the domain `[in_min, in_max]` onto
/// `[out_min, out_max]`. Values outside the domain extrapolate.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    ((value - in_min) * (out_max - out_min)) / (in_max - in_min) + out_min
}

/// Rotate an angle by `amount` degrees, wrapping once past 360.
///
/// Exactly 360 is left as is; only results strictly above it wrap.
pub fn rotate(degree: f64, amount: f64) -> f64 {
    let result = degree + amount;
    if result > 360.0 {
        result - 360.0
    } else {
        result
    }
}

/// Random boolean with a 50% chance.
pub fn coin_flip<R: Rng + ?Sized>(rng: &mut R) -> bool {
    rng.gen::<f64>() > 0.5
}

/// Normalize negative zero so formatted output never shows `-0`.
pub(crate) fn positive_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
