//! Simulated boot progress for the home page HUD.
//!
//! The bar sits empty for a beat after mount, then one long eased
//! transition carries it to its resting fill. There is no real loading
//! behind it.

use super::bounded::bounded_f32;

bounded_f32!(Percent, 0.0, 100.0);

impl Percent {
    pub const EMPTY: Self = Self::new(0.0);
    /// Where the simulated boot settles. Deliberately short of full.
    pub const LOADED: Self = Self::new(85.0);

    /// Width fragment for the fill element.
    pub fn to_css(&self) -> String {
        format!("width: {:.0}%;", self.value())
    }
}

/// Delay between mount and the start of the fill.
pub const FILL_DELAY_MS: u32 = 500;

/// Transition covering the whole fill.
pub const FILL_TRANSITION: &str = "width 1.5s ease-out";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_fill_stops_short_of_full() {
        assert_eq!(Percent::LOADED.value(), 85.0);
        assert!(Percent::LOADED.value() < Percent::MAX);
    }

    #[test]
    fn css_width_is_whole_percent() {
        assert_eq!(Percent::EMPTY.to_css(), "width: 0%;");
        assert_eq!(Percent::LOADED.to_css(), "width: 85%;");
    }

    #[test]
    fn clamped_keeps_percent_in_range() {
        assert_eq!(Percent::clamped(140.0).value(), 100.0);
        assert_eq!(Percent::clamped(-5.0).value(), 0.0);
    }
}
