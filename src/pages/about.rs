//! About page. Static copy in the shared HUD panels.

use dioxus::prelude::*;

use crate::Route;
use crate::components::nav;
use crate::components::{DrawerEntry, HudBox, MonkeyModal, SideDrawer, TopNav, use_page_fade};
use crate::theme;

#[component]
pub fn About() -> Element {
    let page = use_page_fade();
    let mut drawer_open = use_signal(|| false);
    let mut monkey = use_signal(|| false);

    let fade_css = page.css();
    let bg = theme::BG;
    let text = theme::TEXT;
    let dim = theme::TEXT_DIM;
    let mono = theme::FONT_MONO;
    let drawer_entries: Vec<DrawerEntry> = nav::PAGES
        .iter()
        .map(|&(key, label)| DrawerEntry::new(key, label))
        .collect();

    rsx! {
        TopNav {
            current: Route::About {},
            on_navigate: move |route| page.go(route),
            on_menu: move |_| drawer_open.set(true),
            on_monkey: move |_| monkey.set(true),
        }
        SideDrawer {
            open: drawer_open(),
            entries: drawer_entries,
            on_select: move |key: String| {
                if key != "about" {
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
                style: "max-width: 860px; margin: 0 auto;",
                h1 {
                    style: "color: {text}; font-size: 28px; letter-spacing: 4px; margin: 0 0 26px;",
                    "DOSSIER"
                }
                div {
                    style: "display: grid; gap: 18px;",
                    HudBox {
                        title: "PROFILE".to_string(),
                        p {
                            style: "color: {dim}; font-size: 13px; line-height: 1.8; margin: 0;",
                            "Interface engineer with a soft spot for instruments, dials, and screens that feel like cockpit hardware. Most comfortable where design files end and frame budgets begin."
                        }
                    }
                    HudBox {
                        title: "TRAJECTORY".to_string(),
                        div {
                            style: "color: {dim}; font-size: 13px; line-height: 2;",
                            div { "2023 - NOW // INDEPENDENT, CONTRACT HUD WORK" }
                            div { "2019 - 2023 // SENIOR ENGINEER, MAPMAKING TOOLS" }
                            div { "2015 - 2019 // FRONT-END, LIVE BROADCAST GRAPHICS" }
                        }
                    }
                    HudBox {
                        title: "OFF DUTY".to_string(),
                        p {
                            style: "color: {dim}; font-size: 13px; line-height: 1.8; margin: 0;",
                            "Film cameras, synth repair, and an ongoing attempt to ride every tram line in Europe. The monkey in the nav is not a metaphor."
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
