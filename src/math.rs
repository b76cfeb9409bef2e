//! Math utility functions.
//!
//! Conversions are computed in `f64` whatever [`Component`] is, and narrowed
//! only when a model is built. Rounding a derived value in `f32` moves it by
//! up to a full step of the last kept decimal place.

use num_traits::{clamp, ToPrimitive};

use crate::Component;

/// Widen a stored component to `f64` through its shortest decimal
/// representation, so a submitted `0.3` is computed with as `0.3f64` and not
/// as the nearest `f32`.
pub fn widen(value: Component) -> f64 {
    value
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| value.into())
}

/// Narrow a computed value to a stored component.
#[allow(clippy::unnecessary_cast)]
pub fn narrow(value: f64) -> Component {
    value as Component
}

/// Round to the given number of decimal places, halves going to the even
/// neighbour. Never returns negative zero.
///
/// The decision is taken on the exact value of `value`, not on the scaled
/// product, which may itself have been rounded onto a half.
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    let scaled = value * scale;
    // The part of the exact product lost when computing `scaled`.
    let error = value.mul_add(scale, -scaled);

    let rounded = if scaled - scaled.floor() == 0.5 && error != 0.0 {
        if error > 0.0 {
            scaled.ceil()
        } else {
            scaled.floor()
        }
    } else {
        scaled.round_ties_even()
    };

    let rounded = rounded / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Convert a channel value in the range 0-255 to an 8-bit channel.
pub fn to_channel(value: f64) -> u8 {
    clamp(value.round_ties_even(), 0.0, 255.0)
        .to_u8()
        .unwrap_or_default()
}

/// Round a hue in degrees to a whole number of degrees.
pub fn to_degrees(hue: f64) -> u16 {
    clamp(hue.round_ties_even(), 0.0, 360.0)
        .to_u16()
        .unwrap_or_default()
}
