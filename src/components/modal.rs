//! The monkey popup.
//!
//! Easter egg behind the nav's monkey link. Mounts transparent, fades in
//! a beat later, and on close fades out before asking the parent to
//! unmount it.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::theme;

const MONKEY_URL: &str =
    "https://images.unsplash.com/photo-1540573133985-87b6da6d54a9?w=500&h=500&fit=crop";

/// Gap between mount and the fade-in, so the transparent frame paints.
pub const SHOW_DELAY_MS: u32 = 10;

/// Fade-out duration before the parent removes the modal.
pub const HIDE_MS: u32 = 300;

#[component]
pub fn MonkeyModal(on_close: EventHandler<()>) -> Element {
    let mut shown = use_signal(|| false);
    let mut closing = use_signal(|| false);

    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(SHOW_DELAY_MS).await;
            shown.set(true);
        });
    });

    let begin_close = move || {
        if closing() {
            return;
        }
        closing.set(true);
        shown.set(false);
        spawn(async move {
            TimeoutFuture::new(HIDE_MS).await;
            on_close.call(());
        });
    };

    let visible = shown() && !closing();
    let opacity = if visible { "1" } else { "0" };
    let pop = if visible { "scale(1)" } else { "scale(0.92)" };
    let panel = theme::PANEL;
    let accent = theme::ACCENT;
    let dim = theme::TEXT_DIM;
    let mono = theme::FONT_MONO;

    rsx! {
        div {
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.75); backdrop-filter: blur(4px); opacity: {opacity}; transition: opacity 0.3s ease; z-index: 2000;",
            onclick: move |_| begin_close(),
            div {
                style: "position: relative; background: {panel}; border: 1px solid {accent}; border-radius: 6px; padding: 16px; transform: {pop}; transition: transform 0.3s ease;",
                onclick: move |e: Event<MouseData>| e.stop_propagation(),
                button {
                    style: "position: absolute; top: 8px; right: 8px; background: none; border: none; color: {dim}; font-size: 16px; cursor: pointer;",
                    onclick: move |_| begin_close(),
                    "✕"
                }
                img {
                    src: "{MONKEY_URL}",
                    alt: "monkey",
                    style: "display: block; width: 320px; height: 320px; object-fit: cover; border-radius: 4px;",
                }
                div {
                    style: "margin-top: 10px; text-align: center; color: {dim}; font-size: 11px; letter-spacing: 3px; font-family: {mono};",
                    "YOU FOUND THE MONKEY"
                }
            }
        }
    }
}
