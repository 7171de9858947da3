//! Pure timing and style models behind the site's small animations.
//!
//! Each model is plain data with a `to_css` style fragment; components
//! drive them with timers and write the output into inline styles.

pub mod bounded;
pub mod fade;
pub mod progress;
pub mod typewriter;
