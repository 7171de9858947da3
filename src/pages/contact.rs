//! Contact page. One loud call to action, details underneath.

use dioxus::prelude::*;

use crate::Route;
use crate::components::nav;
use crate::components::{DrawerEntry, HudBox, MonkeyModal, SideDrawer, TopNav, use_page_fade};
use crate::theme;

#[component]
pub fn Contact() -> Element {
    let page = use_page_fade();
    let mut drawer_open = use_signal(|| false);
    let mut monkey = use_signal(|| false);

    let fade_css = page.css();
    let bg = theme::BG;
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
            current: Route::Contact {},
            on_navigate: move |route| page.go(route),
            on_menu: move |_| drawer_open.set(true),
            on_monkey: move |_| monkey.set(true),
        }
        SideDrawer {
            open: drawer_open(),
            entries: drawer_entries,
            on_select: move |key: String| {
                if key != "contact" {
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
                style: "max-width: 680px; margin: 0 auto; text-align: center;",
                span {
                    style: "color: {dim}; font-size: 11px; letter-spacing: 3px;",
                    "CHANNEL OPEN"
                }
                h1 {
                    style: "color: {text}; font-size: 40px; letter-spacing: 5px; margin: 10px 0 26px;",
                    "LET'S TALK"
                }
                a {
                    href: "mailto:hello@arlovance.dev",
                    style: "display: inline-block; background: {accent}; border-radius: 3px; color: {bg}; font-size: 13px; letter-spacing: 2px; padding: 14px 26px; margin-bottom: 40px;",
                    "HELLO@ARLOVANCE.DEV"
                }
                div {
                    style: "text-align: left;",
                    HudBox {
                        title: "RESPONSE WINDOW".to_string(),
                        p {
                            style: "color: {dim}; font-size: 13px; line-height: 1.8; margin: 0;",
                            "Replies usually land within two days, sooner if the subject line contains a rotation matrix. Time zone is US Pacific, habits are nocturnal."
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
