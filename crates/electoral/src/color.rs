//! Margin-intensity color encoding.
//!
//! Hue comes from the winning party; alpha scales from [`MIN_ALPHA`] at a
//! zero margin up to 1.0 at [`MARGIN_SATURATION`] points and beyond.

use bevy::color::{Alpha, Srgba};

use crate::config::{ALPHA_SPAN, DEMOCRAT_RGB, MARGIN_SATURATION, MIN_ALPHA, REPUBLICAN_RGB};
use crate::dataset::{Party, StateResult};

/// Normalized margin intensity in `[0, 1]`.
///
/// The absolute margin is clamped before dividing, so non-finite or
/// out-of-range margins still yield a valid intensity.
pub fn margin_intensity(margin: f64) -> f64 {
    let m = margin.abs().min(MARGIN_SATURATION);
    if m.is_nan() {
        return 1.0;
    }
    m / MARGIN_SATURATION
}

/// Alpha for a given margin, always within `[MIN_ALPHA, 1.0]`.
pub fn margin_alpha(margin: f64) -> f64 {
    MIN_ALPHA + margin_intensity(margin) * ALPHA_SPAN
}

pub fn party_rgb(party: Party) -> [u8; 3] {
    match party {
        Party::Republican => REPUBLICAN_RGB,
        Party::Democrat => DEMOCRAT_RGB,
    }
}

pub fn party_margin_color(party: Party, margin: f64) -> Srgba {
    let [r, g, b] = party_rgb(party);
    Srgba::rgba_u8(r, g, b, 255).with_alpha(margin_alpha(margin) as f32)
}

/// Fill color for a state's treemap cell or bar.
pub fn margin_color(result: &StateResult) -> Srgba {
    party_margin_color(result.winner, result.margin)
}

/// `rgba(r, g, b, a)` string form of a party/margin color.
pub fn to_css(party: Party, margin: f64) -> String {
    let [r, g, b] = party_rgb(party);
    format!("rgba({r}, {g}, {b}, {})", margin_alpha(margin))
}
