//! Hover-highlight panel used across the HUD pages.
//!
//! Rest state glows inward; hover lifts the panel slightly, pushes the
//! glow outward, and raises it above its neighbors.

use dioxus::prelude::*;

use crate::theme;

const REST_SHADOW: &str = "inset 0 0 20px rgba(255, 0, 34, 0.1)";
const HOVER_SHADOW: &str = "0 0 30px rgba(255, 0, 34, 0.3)";

#[component]
pub fn HudBox(title: String, children: Element) -> Element {
    let mut hovered = use_signal(|| false);

    let lifted = hovered();
    let scale = if lifted { "1.02" } else { "1" };
    let shadow = if lifted { HOVER_SHADOW } else { REST_SHADOW };
    let layer = if lifted { "10" } else { "1" };
    let panel = theme::PANEL;
    let edge = theme::EDGE;
    let accent = theme::ACCENT;

    rsx! {
        section {
            style: "position: relative; z-index: {layer}; background: {panel}; border: 1px solid {edge}; border-radius: 4px; padding: 20px; transform: scale({scale}); box-shadow: {shadow}; transition: transform 0.2s ease, box-shadow 0.2s ease;",
            onmouseenter: move |_| hovered.set(true),
            onmouseleave: move |_| hovered.set(false),
            header {
                style: "color: {accent}; font-size: 11px; letter-spacing: 3px; margin-bottom: 12px;",
                "{title}"
            }
            {children}
        }
    }
}
