//! Pure angle/value mapping for the dial.
//!
//! Angles follow the 2D canvas convention: 0° points east and angles grow
//! clockwise on screen. Pointer input is expected in a centre-relative frame
//! with y pointing up, which is what [`surface_to_centered`] produces.

use glam::DVec2;

/// Drawing angles (radians) for a dial at a given value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcAngles {
    pub start: f64,
    pub current: f64,
    pub end: f64,
}

/// Convert a surface pixel position into the centre-relative, y-up frame.
#[inline]
pub fn surface_to_centered(px: DVec2, surface_size: DVec2) -> DVec2 {
    DVec2::new(px.x - surface_size.x / 2.0, surface_size.y / 2.0 - px.y)
}

/// Angle of a centre-relative pointer in degrees, in `[0, 360)`.
///
/// Returns NaN for the exact centre.
#[inline]
pub fn pointer_angle_deg(pointer: DVec2) -> f64 {
    let DVec2 { x, y } = pointer;
    let mut angle = (-y / x).atan().to_degrees();
    if x < 0.0 {
        angle += 180.0;
    }
    if x >= 0.0 && y > 0.0 {
        angle += 360.0;
    }
    angle
}

/// Map a centre-relative pointer to a dial value.
///
/// Positions outside the active arc give `None`; they are never clamped onto
/// the nearest end.
pub fn pointer_to_value(pointer: DVec2, offset_deg: f64, span_deg: f64) -> Option<f64> {
    let mut angle = pointer_angle_deg(pointer) - offset_deg;
    if angle < 0.0 {
        angle += 360.0;
    }
    let scaled = angle * 360.0 / span_deg;
    (0.0..=360.0).contains(&scaled).then(|| scaled / 360.0)
}

#[inline]
pub fn value_to_angles(value: f64, offset_deg: f64, span_deg: f64) -> ArcAngles {
    let start = offset_deg.to_radians();
    let span = span_deg.to_radians();
    ArcAngles {
        start,
        current: start + value * span,
        end: start + span,
    }
}

/// Whole-percent label shown in the middle of the dial.
#[inline]
pub fn percent_label(value: f64) -> String {
    ((value * 100.0).floor() as i64).to_string()
}
