mod carousel;
mod components;
mod fx;
mod pages;
mod theme;

use dioxus::prelude::*;

use pages::{About, Contact, Home, Orbit};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/contact")]
    Contact {},
    #[route("/orbit")]
    Orbit {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    let css = theme::global_css();
    rsx! {
        style { "{css}" }
        Router::<Route> {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}
