//! Typewriter reveal for the operator name plate.
//!
//! The full text is prepared once, then a timer shows one more character
//! per tick. Spaces are hardened to no-break spaces so the partially
//! revealed line never reflows as it grows.

/// Delay between mount and the first character.
pub const START_DELAY_MS: u32 = 1000;

/// One character per tick.
pub const TICK_MS: u32 = 50;

const NBSP: &str = "\u{a0}";

/// Trims the text and hardens its spaces.
pub fn prepare(text: &str) -> String {
    text.trim().replace(' ', NBSP)
}

/// First `shown` characters of prepared text, safe on any char boundary.
pub fn reveal(prepared: &str, shown: usize) -> &str {
    match prepared.char_indices().nth(shown) {
        Some((byte, _)) => &prepared[..byte],
        None => prepared,
    }
}

/// Number of ticks a full reveal takes.
pub fn length(prepared: &str) -> usize {
    prepared.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_trims_and_hardens_spaces() {
        assert_eq!(prepare("  ARLO VANCE  "), "ARLO\u{a0}VANCE");
    }

    #[test]
    fn reveal_walks_char_boundaries() {
        let text = prepare("ARLO VANCE");
        assert_eq!(reveal(&text, 0), "");
        assert_eq!(reveal(&text, 4), "ARLO");
        // Character five is the no-break space, a multi-byte char.
        assert_eq!(reveal(&text, 5), "ARLO\u{a0}");
        assert_eq!(reveal(&text, 6), "ARLO\u{a0}V");
    }

    #[test]
    fn reveal_saturates_at_full_text() {
        let text = prepare("HI");
        assert_eq!(reveal(&text, 2), "HI");
        assert_eq!(reveal(&text, 99), "HI");
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        let text = prepare("A B");
        assert_eq!(length(&text), 3);
        assert!(text.len() > 3);
    }
}
