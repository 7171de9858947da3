//! Page content fade for route transitions.
//!
//! Pages mount transparent and fade in shortly after; navigation fades
//! the content out first and pushes the new route once the transition
//! has had time to finish.

use super::bounded::bounded_f32;

bounded_f32!(Opacity, 0.0, 1.0);

impl Opacity {
    pub const ZERO: Self = Self::new(0.0);
    pub const FULL: Self = Self::new(1.0);

    pub fn to_css(&self) -> String {
        format!("opacity: {:.0};", self.value())
    }
}

/// Fade duration, and the delay before pushing the next route.
pub const FADE_MS: u32 = 500;

/// Gap between mount and the start of the fade-in. Long enough for the
/// transparent frame to paint once so the transition actually runs.
pub const FADE_IN_DELAY_MS: u32 = 20;

/// Direction the page content is fading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fade {
    /// Content visible, or on its way there.
    In,
    /// Content transparent, or on its way there.
    Out,
}

impl Fade {
    pub fn opacity(self) -> Opacity {
        match self {
            Fade::In => Opacity::FULL,
            Fade::Out => Opacity::ZERO,
        }
    }

    /// Style fragment for the page content wrapper.
    pub fn to_css(self) -> String {
        format!("{} transition: opacity {}ms ease;", self.opacity().to_css(), FADE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_map_to_extreme_opacities() {
        assert_eq!(Fade::In.opacity(), Opacity::FULL);
        assert_eq!(Fade::Out.opacity(), Opacity::ZERO);
    }

    #[test]
    fn css_carries_opacity_and_transition() {
        assert_eq!(Fade::In.to_css(), "opacity: 1; transition: opacity 500ms ease;");
        assert_eq!(Fade::Out.to_css(), "opacity: 0; transition: opacity 500ms ease;");
    }

    #[test]
    fn opacity_clamps() {
        assert_eq!(Opacity::clamped(1.4), Opacity::FULL);
    }
}
