//! Curved label layout.
//!
//! Wheel labels bend along the wheel's circumference. Given the arc
//! radius (the orbit page derives it from the viewport height) this
//! computes one angular offset per character; each character then renders
//! in its own span rotated about the wheel center.

/// Nominal character footprint on the circumference, in pixels. Matches
/// the label font used on the orbit page closely enough that glyphs
/// neither collide nor gap visibly.
pub const CHAR_WIDTH_PX: f64 = 18.0;

/// Character layout along a circle of a fixed radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLayout {
    radius: f64,
}

impl ArcLayout {
    /// Degenerate viewports clamp to a one pixel radius so every angle
    /// stays finite.
    pub fn new(radius: f64) -> Self {
        Self {
            radius: radius.max(1.0),
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Degrees subtended by one character on this arc.
    pub fn char_step(&self) -> f64 {
        (CHAR_WIDTH_PX / self.radius).to_degrees()
    }

    /// One angular offset per character, centered on the label midpoint
    /// so the label stays balanced around its slot.
    pub fn offsets(&self, text: &str) -> Vec<f64> {
        let count = text.chars().count();
        let step = self.char_step();
        let mid = (count as f64 - 1.0) / 2.0;
        (0..count).map(|i| (i as f64 - mid) * step).collect()
    }

    /// Style for one character span: rotate about the wheel center
    /// sitting `radius` pixels below the character anchor.
    pub fn char_css(&self, offset_deg: f64) -> String {
        format!(
            "transform: rotate({offset_deg:.3}deg); transform-origin: 50% {:.1}px;",
            self.radius
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn empty_label_has_no_offsets() {
        assert!(ArcLayout::new(500.0).offsets("").is_empty());
    }

    #[test]
    fn single_character_sits_on_the_slot_center() {
        let offsets = ArcLayout::new(500.0).offsets("A");
        assert_eq!(offsets.len(), 1);
        assert!(offsets[0].abs() < EPS);
    }

    #[test]
    fn offsets_are_balanced_and_increasing() {
        let offsets = ArcLayout::new(500.0).offsets("WORK");
        assert_eq!(offsets.len(), 4);
        assert!((offsets[0] + offsets[3]).abs() < EPS);
        assert!((offsets[1] + offsets[2]).abs() < EPS);
        for pair in offsets.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn wider_arcs_pack_characters_tighter() {
        let near = ArcLayout::new(300.0).char_step();
        let far = ArcLayout::new(600.0).char_step();
        assert!((near - far * 2.0).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_stays_finite() {
        let layout = ArcLayout::new(0.0);
        assert!(layout.char_step().is_finite());
        assert!(layout.offsets("AB").iter().all(|o| o.is_finite()));
    }

    #[test]
    fn char_css_carries_rotation_and_origin() {
        let css = ArcLayout::new(540.0).char_css(-3.25);
        assert!(css.contains("rotate(-3.250deg)"));
        assert!(css.contains("transform-origin: 50% 540.0px"));
    }
}
