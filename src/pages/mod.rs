//! Site pages, one module per route.

mod about;
mod contact;
mod home;
mod orbit;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
pub use orbit::Orbit;
