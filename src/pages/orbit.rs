//! Orbit page: the drag-to-rotate section wheel.
//!
//! The stage owns every pointer listener and forwards plain coordinates
//! into [`Wheel`]; presses inside the header band never reach it. The
//! wheel renders only once webfonts have settled, so the curved labels
//! measure right on first paint.

use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::Route;
use crate::carousel::arc::CHAR_WIDTH_PX;
use crate::carousel::{
    ArcLayout, STEP_DEG, SLOT_COUNT, WHEEL_TRANSITION, Wheel, WheelItem, arc_radius, drag_band_top,
};
use crate::components::{Counter, DrawerEntry, ProfileDropdown, SideDrawer, use_page_fade};
use crate::theme;

/// The seven wheel sections. Keys double as drawer lookup handles.
const SECTIONS: [(&str, &str); SLOT_COUNT] = [
    ("signal", "SIGNAL"),
    ("work", "WORK"),
    ("lab", "LAB"),
    ("stack", "STACK"),
    ("notes", "NOTES"),
    ("story", "STORY"),
    ("contact", "CONTACT"),
];

/// Viewport height used when the window is not measurable.
const FALLBACK_VIEWPORT_H: f64 = 900.0;

/// Readiness fallback for browsers where the font promise never lands.
const READY_FALLBACK_MS: u32 = 1500;

const FONTS_READY_JS: &str = "if (document.fonts) { await document.fonts.ready; } return true;";

fn section_wheel() -> Wheel {
    let items = SECTIONS
        .iter()
        .enumerate()
        .map(|(i, &(key, label))| WheelItem::new(key, label, i as f64 * STEP_DEG))
        .collect();
    Wheel::new(items).expect("section table produced a non-finite angle")
}

fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(FALLBACK_VIEWPORT_H)
}

#[component]
pub fn Orbit() -> Element {
    let page = use_page_fade();
    let mut wheel = use_signal(section_wheel);
    let mut viewport_h = use_signal(viewport_height);
    let mut ready = use_signal(|| false);
    let mut drawer_open = use_signal(|| false);

    // One-shot arming gate: wait for webfonts with a plain timeout as the
    // fallback, whichever lands first.
    use_hook(move || {
        spawn(async move {
            let _ = document::eval(FONTS_READY_JS).await;
            if !*ready.peek() {
                info!("wheel armed: fonts settled");
                ready.set(true);
            }
        });
        spawn(async move {
            TimeoutFuture::new(READY_FALLBACK_MS).await;
            if !*ready.peek() {
                info!("wheel armed: fallback after {READY_FALLBACK_MS}ms");
                ready.set(true);
            }
        });
    });

    let vh = viewport_h();
    let radius = arc_radius(vh);
    let band_top = drag_band_top(vh);

    let w = wheel.read();
    let rotation = w.rotation();
    let dragging = w.is_dragging();
    let transition = if w.eased() { WHEEL_TRANSITION } else { "none" };
    let items: Vec<WheelItem> = w.items().to_vec();
    drop(w);

    let cursor = if dragging { "grabbing" } else { "grab" };
    let fade_css = page.css();
    let caret_off = radius + 46.0;
    let neg_radius = -radius;
    let ring_d = radius * 2.0;
    let bg = theme::BG;
    let accent = theme::ACCENT;
    let text = theme::TEXT;
    let dim = theme::TEXT_DIM;
    let mono = theme::FONT_MONO;

    let layout = ArcLayout::new(radius);
    let items_render: Vec<(usize, String, Vec<(String, String)>)> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let wrapper = format!(
                "position: absolute; left: 0; top: 0; transform: rotate({:.4}deg);",
                item.base_angle
            );
            let color = if item.active { theme::ACCENT } else { theme::TEXT_DIM };
            let glow = if item.active {
                "active-glow 2.4s ease-in-out infinite"
            } else {
                "none"
            };
            let spans = item
                .label
                .chars()
                .zip(layout.offsets(&item.label))
                .map(|(ch, offset)| {
                    let css = format!(
                        "position: absolute; left: {:.1}px; top: {:.1}px; width: {CHAR_WIDTH_PX}px; text-align: center; font-size: 20px; font-weight: 600; color: {color}; animation: {glow}; cursor: pointer; {}",
                        -CHAR_WIDTH_PX / 2.0,
                        -radius,
                        layout.char_css(offset),
                    );
                    (ch.to_string(), css)
                })
                .collect();
            (index, wrapper, spans)
        })
        .collect();

    let drawer_entries: Vec<DrawerEntry> = SECTIONS
        .iter()
        .map(|&(key, label)| DrawerEntry::new(key, label))
        .collect();

    rsx! {
        div {
            style: "{fade_css} position: fixed; inset: 0; background: {bg}; overflow: hidden; user-select: none; touch-action: none; cursor: {cursor}; font-family: {mono};",
            onresize: move |_| viewport_h.set(viewport_height()),
            onmousedown: move |e: Event<MouseData>| {
                if !*ready.peek() {
                    return;
                }
                let p = e.client_coordinates();
                if p.y <= band_top {
                    return;
                }
                e.prevent_default();
                wheel.write().begin_drag(p.x);
            },
            onmousemove: move |e: Event<MouseData>| {
                if wheel.peek().is_dragging() {
                    wheel.write().update_drag(e.client_coordinates().x);
                }
            },
            onmouseup: move |_| {
                if wheel.peek().is_dragging() {
                    wheel.write().end_drag();
                }
            },
            onmouseleave: move |_| {
                if wheel.peek().is_dragging() {
                    wheel.write().end_drag();
                }
            },
            ontouchstart: move |e: Event<TouchData>| {
                if !*ready.peek() {
                    return;
                }
                let Some(touch) = e.touches().first().map(|t| t.client_coordinates()) else {
                    return;
                };
                if touch.y <= band_top {
                    return;
                }
                wheel.write().begin_drag(touch.x);
            },
            ontouchmove: move |e: Event<TouchData>| {
                if !wheel.peek().is_dragging() {
                    return;
                }
                if let Some(touch) = e.touches().first().map(|t| t.client_coordinates()) {
                    wheel.write().update_drag(touch.x);
                }
            },
            ontouchend: move |_| {
                if wheel.peek().is_dragging() {
                    wheel.write().end_drag();
                }
            },

            header {
                style: "position: absolute; top: 0; left: 0; right: 0; height: 64px; display: flex; align-items: center; gap: 16px; padding: 0 24px; cursor: default;",
                button {
                    style: "background: none; border: none; color: {accent}; font-family: inherit; font-weight: 700; font-size: 15px; letter-spacing: 2px; cursor: pointer;",
                    onclick: move |_| page.go(Route::Home {}),
                    "AV//"
                }
                span {
                    style: "color: {dim}; font-size: 11px; letter-spacing: 3px;",
                    "ORBIT // SECTIONS"
                }
                div { style: "flex: 1;" }
                Counter { label: "VISITS".to_string() }
                ProfileDropdown {}
                button {
                    style: "background: none; border: none; color: {text}; font-size: 20px; cursor: pointer; padding: 4px;",
                    onclick: move |_| drawer_open.set(true),
                    "☰"
                }
            }

            if ready() {
                div {
                    style: "position: absolute; left: 50%; top: calc(100% - {caret_off}px); transform: translateX(-50%); color: {accent}; font-size: 14px;",
                    "▾"
                }
                div {
                    style: "position: absolute; left: 50%; top: 100%; transform: rotate({rotation}deg); transition: {transition}; will-change: transform;",
                    div {
                        style: "position: absolute; left: {neg_radius}px; top: {neg_radius}px; width: {ring_d}px; height: {ring_d}px; border: 1px dashed rgba(255, 0, 34, 0.25); border-radius: 50%;",
                    }
                    div {
                        style: "position: absolute; left: -6px; top: -6px; width: 12px; height: 12px; border-radius: 50%; background: {accent}; box-shadow: 0 0 18px rgba(255, 0, 34, 0.8);",
                    }
                    for (index, wrapper, spans) in items_render {
                        div {
                            style: "{wrapper}",
                            onclick: move |_| wheel.write().select(index),
                            for (ch, css) in spans {
                                span { style: "{css}", "{ch}" }
                            }
                        }
                    }
                }
                div {
                    style: "position: absolute; left: 50%; bottom: 18px; transform: translateX(-50%); color: {dim}; font-size: 10px; letter-spacing: 3px;",
                    "DRAG TO ROTATE // CLICK TO LOCK"
                }
            } else {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; color: {dim}; font-size: 12px; letter-spacing: 4px;",
                    span {
                        style: "animation: pulse-dot 1.2s ease-in-out infinite;",
                        "SYNCING ORBIT"
                    }
                }
            }
        }
        SideDrawer {
            open: drawer_open(),
            entries: drawer_entries,
            on_select: move |key: String| {
                let hit = wheel.write().select_key(&key);
                if !hit {
                    debug!("drawer key {key:?} missing from wheel");
                }
            },
            on_close: move |_| drawer_open.set(false),
        }
    }
}
