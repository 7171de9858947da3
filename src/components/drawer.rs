//! Slide-in navigation drawer with a dimming backdrop.
//!
//! The panel stays mounted so its transform can transition; open state
//! only moves it into view. Picking an entry always closes the drawer,
//! whatever the page decides to do with the key.

use dioxus::prelude::*;

use crate::theme;

/// One selectable drawer row.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerEntry {
    pub key: String,
    pub label: String,
}

impl DrawerEntry {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn SideDrawer(
    open: bool,
    entries: Vec<DrawerEntry>,
    on_select: EventHandler<String>,
    on_close: EventHandler<()>,
) -> Element {
    let slide = if open { "translateX(0)" } else { "translateX(-100%)" };
    let dim = if open { "1" } else { "0" };
    let hit = if open { "auto" } else { "none" };
    let rows: Vec<(String, String)> = entries
        .into_iter()
        .map(|entry| (entry.key, entry.label))
        .collect();
    let panel = theme::PANEL;
    let edge = theme::EDGE;
    let accent = theme::ACCENT;
    let text = theme::TEXT;
    let dim_text = theme::TEXT_DIM;
    let mono = theme::FONT_MONO;

    rsx! {
        div {
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.55); opacity: {dim}; pointer-events: {hit}; transition: opacity 0.3s ease; z-index: 1100;",
            onclick: move |_| on_close.call(()),
        }
        aside {
            style: "position: fixed; top: 0; bottom: 0; left: 0; width: 260px; background: {panel}; border-right: 1px solid {accent}; padding: 24px 0; transform: {slide}; transition: transform 0.3s ease; font-family: {mono}; z-index: 1200;",
            div {
                style: "display: flex; align-items: center; justify-content: space-between; padding: 0 20px 16px; border-bottom: 1px solid {edge};",
                span {
                    style: "color: {accent}; font-size: 11px; letter-spacing: 3px;",
                    "NAVIGATE"
                }
                button {
                    style: "background: none; border: none; color: {dim_text}; font-size: 18px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            for (key, label) in rows {
                button {
                    style: "display: block; width: 100%; text-align: left; background: none; border: none; border-left: 2px solid transparent; color: {text}; font-family: inherit; font-size: 14px; letter-spacing: 2px; padding: 12px 20px; cursor: pointer;",
                    onclick: move |_| {
                        on_select.call(key.clone());
                        on_close.call(());
                    },
                    "{label}"
                }
            }
        }
    }
}
