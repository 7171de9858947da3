//! Home page: the boot HUD.
//!
//! Name plate types itself out, the boot bar fills once, and the panels
//! below carry the hover glow. All timing lives in `fx`.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::Route;
use crate::components::nav;
use crate::components::{DrawerEntry, HudBox, MonkeyModal, SideDrawer, TopNav, use_page_fade};
use crate::fx::progress::{self, Percent};
use crate::fx::typewriter;
use crate::theme;

const OPERATOR_NAME: &str = "ARLO VANCE";

#[component]
pub fn Home() -> Element {
    let page = use_page_fade();
    let mut drawer_open = use_signal(|| false);
    let mut monkey = use_signal(|| false);

    let name = use_hook(|| typewriter::prepare(OPERATOR_NAME));
    let mut shown_chars = use_signal(|| 0usize);
    use_hook({
        let name = name.clone();
        move || {
            spawn(async move {
                TimeoutFuture::new(typewriter::START_DELAY_MS).await;
                let total = typewriter::length(&name);
                while shown_chars() < total {
                    TimeoutFuture::new(typewriter::TICK_MS).await;
                    let next = shown_chars() + 1;
                    shown_chars.set(next);
                }
            });
        }
    });

    let mut filled = use_signal(|| false);
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(progress::FILL_DELAY_MS).await;
            filled.set(true);
        });
    });

    let typed = typewriter::reveal(&name, shown_chars()).to_string();
    let fill = if filled() { Percent::LOADED } else { Percent::EMPTY };
    let fill_css = fill.to_css();
    let fill_transition = if filled() { progress::FILL_TRANSITION } else { "none" };
    let target_pct = Percent::LOADED.value();
    let fade_css = page.css();
    let bg = theme::BG;
    let panel = theme::PANEL;
    let edge = theme::EDGE;
    let accent = theme::ACCENT;
    let text = theme::TEXT;
    let dim = theme::TEXT_DIM;
    let mono = theme::FONT_MONO;

    let drawer_entries: Vec<DrawerEntry> = nav::PAGES
        .iter()
        .map(|&(key, label)| DrawerEntry::new(key, label))
        .collect();

    rsx! {
        TopNav {
            current: Route::Home {},
            on_navigate: move |route| page.go(route),
            on_menu: move |_| drawer_open.set(true),
            on_monkey: move |_| monkey.set(true),
        }
        SideDrawer {
            open: drawer_open(),
            entries: drawer_entries,
            on_select: move |key: String| {
                if key != "home" {
                    if let Some(route) = nav::route_for(&key) {
                        page.go(route);
                    }
                }
            },
            on_close: move |_| drawer_open.set(false),
        }
        main {
            style: "{fade_css} min-height: 100vh; padding: 104px 32px 48px; background: {bg}; font-family: {mono};",
            div {
                style: "max-width: 1100px; margin: 0 auto;",
                div {
                    style: "display: flex; align-items: flex-end; gap: 18px; margin-bottom: 30px;",
                    div {
                        span {
                            style: "color: {dim}; font-size: 11px; letter-spacing: 3px;",
                            "OPERATOR //"
                        }
                        h1 {
                            style: "margin: 6px 0 0; color: {text}; font-size: 42px; letter-spacing: 4px; min-height: 52px;",
                            "{typed}"
                        }
                    }
                    div { style: "flex: 1;" }
                    div {
                        style: "display: flex; align-items: center; gap: 8px; border: 1px solid {edge}; border-radius: 999px; padding: 6px 14px; font-size: 11px; letter-spacing: 2px; color: {dim};",
                        span {
                            style: "width: 8px; height: 8px; border-radius: 50%; background: {accent}; animation: pulse-dot 1.6s ease-in-out infinite;",
                        }
                        "ONLINE"
                    }
                }
                div {
                    style: "margin-bottom: 36px;",
                    div {
                        style: "display: flex; justify-content: space-between; color: {dim}; font-size: 11px; letter-spacing: 3px; margin-bottom: 8px;",
                        span { "BOOT SEQUENCE" }
                        span { "TARGET {target_pct:.0}%" }
                    }
                    div {
                        style: "height: 10px; background: {panel}; border: 1px solid {edge}; border-radius: 999px; overflow: hidden;",
                        div {
                            style: "{fill_css} height: 100%; background: linear-gradient(90deg, #66000e, {accent}); transition: {fill_transition};",
                        }
                    }
                }
                div {
                    style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(260px, 1fr)); gap: 18px;",
                    HudBox {
                        title: "STATUS".to_string(),
                        div {
                            style: "color: {dim}; font-size: 13px; line-height: 2;",
                            div { "LOC // PORTLAND, OR" }
                            div { "ROLE // CREATIVE TECHNOLOGIST" }
                            div { "UPTIME // 11 YEARS" }
                        }
                    }
                    HudBox {
                        title: "LOADOUT".to_string(),
                        div {
                            style: "color: {dim}; font-size: 13px; line-height: 2;",
                            div { "RUST / WASM" }
                            div { "TYPESCRIPT" }
                            div { "GLSL / SHADERS" }
                            div { "FIGMA" }
                        }
                    }
                    HudBox {
                        title: "TRANSMISSIONS".to_string(),
                        div {
                            style: "color: {dim}; font-size: 13px; line-height: 2;",
                            div { "2026.07 // SHIPPED THE ORBIT NAV" }
                            div { "2026.05 // TALK: WASM IN PROD" }
                            div { "2026.02 // OPEN-SOURCED HUDKIT" }
                        }
                    }
                    HudBox {
                        title: "LINK UP".to_string(),
                        p {
                            style: "color: {dim}; font-size: 13px; line-height: 1.7; margin: 0 0 14px;",
                            "Building odd interfaces for the plain web. Channel is open for collaborations and contract work."
                        }
                        button {
                            style: "background: {accent}; border: none; border-radius: 3px; color: {bg}; font-family: inherit; font-size: 12px; letter-spacing: 2px; padding: 10px 18px; cursor: pointer;",
                            onclick: move |_| page.go(Route::Contact {}),
                            "OPEN CHANNEL"
                        }
                    }
                }
            }
        }
        if monkey() {
            MonkeyModal { on_close: move |_| monkey.set(false) }
        }
    }
}
