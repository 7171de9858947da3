//! Profile dropdown for the orbit page header.
//!
//! The panel renders fixed-position and is placed by measuring the
//! trigger button, so it can escape the stage's overflow clipping. A
//! full-screen backdrop closes it on any outside click.

use dioxus::prelude::*;

use crate::theme;

const TRIGGER_ID: &str = "profile-trigger";
const PANEL_W: f64 = 200.0;
const PANEL_GAP: f64 = 8.0;

const PROFILE_LINKS: [(&str, &str); 3] = [
    ("GITHUB", "https://github.com/arlovance"),
    ("RESUME", "https://arlovance.dev/resume.pdf"),
    ("EMAIL", "mailto:hello@arlovance.dev"),
];

/// Panel top-left corner, right-aligned under the trigger.
fn panel_anchor() -> Option<(f64, f64)> {
    let doc = web_sys::window()?.document()?;
    let rect = doc.get_element_by_id(TRIGGER_ID)?.get_bounding_client_rect();
    let left = rect.x() + rect.width() - PANEL_W;
    let top = rect.y() + rect.height() + PANEL_GAP;
    Some((left, top))
}

#[component]
pub fn ProfileDropdown() -> Element {
    let mut open = use_signal(|| false);
    let mut anchor = use_signal(|| (0.0f64, 0.0f64));

    let (left, top) = anchor();
    let bg = theme::BG;
    let panel = theme::PANEL;
    let edge = theme::EDGE;
    let accent = theme::ACCENT;
    let text = theme::TEXT;
    let mono = theme::FONT_MONO;

    rsx! {
        button {
            id: "{TRIGGER_ID}",
            style: "display: flex; align-items: center; gap: 8px; background: none; border: 1px solid {edge}; border-radius: 999px; color: {text}; font-family: {mono}; font-size: 12px; letter-spacing: 1px; padding: 4px 12px 4px 4px; cursor: pointer;",
            onclick: move |_| {
                if open() {
                    open.set(false);
                    return;
                }
                if let Some(pos) = panel_anchor() {
                    anchor.set(pos);
                }
                open.set(true);
            },
            span {
                style: "width: 26px; height: 26px; border-radius: 50%; background: {accent}; color: {bg}; display: flex; align-items: center; justify-content: center; font-weight: 700; font-size: 11px;",
                "AV"
            }
            "OPERATOR"
        }
        if open() {
            div {
                style: "position: fixed; inset: 0; z-index: 900;",
                onclick: move |_| open.set(false),
            }
            div {
                style: "position: fixed; left: {left}px; top: {top}px; width: {PANEL_W}px; background: {panel}; border: 1px solid {edge}; border-radius: 4px; padding: 6px 0; font-family: {mono}; z-index: 1000;",
                for (label, href) in PROFILE_LINKS {
                    a {
                        href: "{href}",
                        target: "_blank",
                        style: "display: block; color: {text}; font-size: 12px; letter-spacing: 2px; padding: 10px 16px;",
                        onclick: move |_| open.set(false),
                        "{label}"
                    }
                }
            }
        }
    }
}
