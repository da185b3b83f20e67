//! Analog level maps: volume pot → output gain, brightness pot → LED
//! intensity.
//!
//! Volume is continuous and applied every control cycle; brightness is an
//! integer level and only worth a bus write when it changes. The
//! write-on-change caching lives in the input controller — these maps are
//! pure.

use platform::config::{ADC_MAX, MAX_INTENSITY};

/// Map a raw pot reading to an output gain fraction in `[0.0, 1.0]`.
#[must_use]
#[allow(clippy::cast_lossless)]
pub fn volume_gain(raw: u16) -> f32 {
    f32::from(raw.min(ADC_MAX)) / f32::from(ADC_MAX)
}

/// Map a raw pot reading to an LED intensity in `0..=15`.
///
/// Integer floor mapping over the full ADC range, so the endpoints land
/// exactly on 0 and 15.
#[must_use]
#[allow(clippy::cast_possible_truncation)] // result ≤ MAX_INTENSITY
#[allow(clippy::arithmetic_side_effects)] // Safety: raw * 15 fits u32; divisor is the nonzero ADC_MAX
pub fn brightness_level(raw: u16) -> u8 {
    let raw = u32::from(raw.min(ADC_MAX));
    (raw * u32::from(MAX_INTENSITY) / u32::from(ADC_MAX)) as u8
}
