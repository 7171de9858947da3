//! Top navigation chrome and the fade-then-push page transition.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::Route;
use crate::fx::fade::{self, Fade};
use crate::theme;

/// Page links in nav order. Keys double as drawer handles.
pub const PAGES: [(&str, &str); 4] = [
    ("home", "HOME"),
    ("about", "ABOUT"),
    ("contact", "CONTACT"),
    ("orbit", "ORBIT"),
];

/// Route for a nav or drawer key.
pub fn route_for(key: &str) -> Option<Route> {
    match key {
        "home" => Some(Route::Home {}),
        "about" => Some(Route::About {}),
        "contact" => Some(Route::Contact {}),
        "orbit" => Some(Route::Orbit {}),
        _ => None,
    }
}

/// Fade state plus navigation for one page. Owns the mount fade-in and
/// the fade-out-then-push sequence.
#[derive(Clone, Copy)]
pub struct PageFade {
    fade: Signal<Fade>,
    nav: Navigator,
}

/// Page content starts transparent and fades in right after the first
/// paint.
pub fn use_page_fade() -> PageFade {
    let mut fade = use_signal(|| Fade::Out);
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(fade::FADE_IN_DELAY_MS).await;
            fade.set(Fade::In);
        });
    });
    let nav = use_navigator();
    PageFade { fade, nav }
}

impl PageFade {
    /// Style fragment for the page content wrapper.
    pub fn css(&self) -> String {
        self.fade.read().to_css()
    }

    /// Fades the content out, then pushes the route. Ignored while a
    /// fade-out is already underway.
    pub fn go(&self, route: Route) {
        if *self.fade.read() == Fade::Out {
            return;
        }
        let mut fade = self.fade;
        let nav = self.nav;
        fade.set(Fade::Out);
        spawn(async move {
            TimeoutFuture::new(fade::FADE_MS).await;
            nav.push(route);
        });
    }
}

#[component]
pub fn TopNav(
    current: Route,
    on_navigate: EventHandler<Route>,
    on_menu: EventHandler<()>,
    on_monkey: EventHandler<()>,
) -> Element {
    let links: Vec<(&'static str, &'static str, bool, &'static str)> = PAGES
        .iter()
        .map(|&(key, label)| {
            let here = route_for(key).is_some_and(|route| route == current);
            let color = if here { theme::ACCENT } else { theme::TEXT_DIM };
            (key, label, here, color)
        })
        .collect();

    let edge = theme::EDGE;
    let mono = theme::FONT_MONO;
    let text = theme::TEXT;
    let accent = theme::ACCENT;

    rsx! {
        nav {
            style: "position: fixed; top: 0; left: 0; right: 0; height: 64px; display: flex; align-items: center; gap: 22px; padding: 0 24px; background: rgba(10, 10, 15, 0.85); backdrop-filter: blur(6px); border-bottom: 1px solid {edge}; font-family: {mono}; z-index: 500;",
            button {
                style: "background: none; border: none; color: {text}; font-size: 20px; cursor: pointer; padding: 4px;",
                onclick: move |_| on_menu.call(()),
                "☰"
            }
            span {
                style: "color: {accent}; font-weight: 700; letter-spacing: 2px;",
                "AV//"
            }
            div { style: "flex: 1;" }
            for (key, label, here, color) in links {
                button {
                    style: "background: none; border: none; color: {color}; font-family: inherit; font-size: 13px; letter-spacing: 2px; cursor: pointer;",
                    onclick: move |_| {
                        if here {
                            return;
                        }
                        if let Some(route) = route_for(key) {
                            on_navigate.call(route);
                        }
                    },
                    "{label}"
                }
            }
            button {
                style: "background: none; border: none; font-size: 18px; cursor: pointer; padding: 4px;",
                onclick: move |_| on_monkey.call(()),
                "\u{1f412}"
            }
        }
    }
}
