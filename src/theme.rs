//! Palette and global CSS for the red HUD look.
//!
//! Colors live here as consts so inline styles across pages agree; the
//! global sheet is injected once from the app shell.

pub const BG: &str = "#0a0a0f";
pub const PANEL: &str = "#11131c";
pub const EDGE: &str = "#2a1218";
pub const ACCENT: &str = "#ff0022";
pub const TEXT: &str = "#e5e7eb";
pub const TEXT_DIM: &str = "#6b7280";

pub const FONT_MONO: &str = "'JetBrains Mono', 'Fira Code', monospace";

/// Resets plus the handful of keyframes inline styles reference.
pub fn global_css() -> &'static str {
    r#"
html, body {
    margin: 0;
    padding: 0;
    background: #0a0a0f;
    color: #e5e7eb;
    font-family: 'JetBrains Mono', 'Fira Code', monospace;
}

* {
    box-sizing: border-box;
}

a {
    color: inherit;
    text-decoration: none;
}

::selection {
    background: rgba(255, 0, 34, 0.35);
}

@keyframes active-glow {
    0%, 100% { text-shadow: 0 0 10px rgba(255, 0, 34, 0.9); }
    50% { text-shadow: 0 0 24px rgba(255, 0, 34, 0.45); }
}

@keyframes pulse-dot {
    0%, 100% { opacity: 1; }
    50% { opacity: 0.35; }
}
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sheet_defines_inline_style_keyframes() {
        let css = global_css();
        assert!(css.contains("@keyframes active-glow"));
        assert!(css.contains("@keyframes pulse-dot"));
    }

    #[test]
    fn sheet_background_matches_palette() {
        assert!(global_css().contains(BG));
    }
}
