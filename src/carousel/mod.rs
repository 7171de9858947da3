//! Drag-to-rotate section wheel for the orbit page.
//!
//! [`wheel`] owns the rotation state machine and [`arc`] bends label text
//! along the wheel's circumference. Components feed pointer coordinates in
//! and write the resulting transform and active flags out; nothing in this
//! module touches the DOM, so the whole gesture model is testable with
//! plain method calls.

pub mod arc;
pub mod wheel;

pub use arc::ArcLayout;
pub use wheel::{Wheel, WheelError, WheelItem};

/// Number of angular slots on the wheel. The snap step and the orbit
/// page's section table both derive from this, so they cannot disagree.
pub const SLOT_COUNT: usize = 7;

/// Angular distance between adjacent slots, in degrees.
pub const STEP_DEG: f64 = 360.0 / SLOT_COUNT as f64;

/// Degrees of wheel rotation per pixel of horizontal pointer travel.
pub const DRAG_SENSITIVITY: f64 = 0.25;

/// Pixels of horizontal travel before a press counts as a drag rather
/// than a click.
pub const DRAG_THRESHOLD_PX: f64 = 5.0;

/// Fraction of the viewport height, measured from the top, where presses
/// never start a drag. That band belongs to the page header.
pub const TOP_BAND_FRACTION: f64 = 0.2;

/// Label arc radius as a fraction of the viewport height.
pub const RADIUS_FRACTION: f64 = 0.6;

/// Transition applied to the wheel transform whenever it is not pinned
/// to the pointer.
pub const WHEEL_TRANSITION: &str = "transform 0.55s cubic-bezier(0.25, 1, 0.4, 1)";

/// Highest pointer Y (in client pixels) that still belongs to the header
/// band for a given viewport height.
pub fn drag_band_top(viewport_h: f64) -> f64 {
    viewport_h * TOP_BAND_FRACTION
}

/// Label arc radius for a given viewport height.
pub fn arc_radius(viewport_h: f64) -> f64 {
    viewport_h * RADIUS_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_covers_the_full_turn() {
        assert!((STEP_DEG * SLOT_COUNT as f64 - 360.0).abs() < 1e-9);
    }

    #[test]
    fn header_band_scales_with_viewport() {
        assert!((drag_band_top(1000.0) - 200.0).abs() < 1e-9);
        assert!((drag_band_top(640.0) - 128.0).abs() < 1e-9);
    }

    #[test]
    fn arc_radius_scales_with_viewport() {
        assert!((arc_radius(1000.0) - 600.0).abs() < 1e-9);
        assert!((arc_radius(750.0) - 450.0).abs() < 1e-9);
    }
}
