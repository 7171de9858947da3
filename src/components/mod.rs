//! Reusable UI pieces shared by the pages.

pub mod counter;
pub mod drawer;
pub mod dropdown;
pub mod hud_box;
pub mod modal;
pub mod nav;

pub use counter::Counter;
pub use drawer::{DrawerEntry, SideDrawer};
pub use dropdown::ProfileDropdown;
pub use hud_box::HudBox;
pub use modal::MonkeyModal;
pub use nav::{TopNav, use_page_fade};
