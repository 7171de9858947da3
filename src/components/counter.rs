//! Small increment/decrement counter for the orbit header.

use dioxus::prelude::*;

use crate::theme;

#[component]
pub fn Counter(label: String) -> Element {
    let mut count = use_signal(|| 0i32);
    let edge = theme::EDGE;
    let accent = theme::ACCENT;
    let text = theme::TEXT;
    let dim = theme::TEXT_DIM;
    let mono = theme::FONT_MONO;

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 8px; border: 1px solid {edge}; border-radius: 4px; padding: 4px 8px; font-family: {mono};",
            span {
                style: "color: {dim}; font-size: 10px; letter-spacing: 2px;",
                "{label}"
            }
            button {
                style: "width: 22px; height: 22px; background: none; border: 1px solid {edge}; border-radius: 3px; color: {text}; cursor: pointer;",
                onclick: move |_| {
                    let next = count() - 1;
                    count.set(next);
                },
                "-"
            }
            span {
                style: "min-width: 28px; text-align: center; color: {accent}; font-size: 13px;",
                "{count}"
            }
            button {
                style: "width: 22px; height: 22px; background: none; border: 1px solid {edge}; border-radius: 3px; color: {text}; cursor: pointer;",
                onclick: move |_| {
                    let next = count() + 1;
                    count.set(next);
                },
                "+"
            }
        }
    }
}
