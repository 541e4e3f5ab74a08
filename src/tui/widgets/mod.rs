//! Reusable TUI widgets.

pub mod combo;
pub mod input;
pub mod notice;
pub mod status_bar;

pub use combo::{Dropdown, draw_dropdown};
pub use input::{Cursor, draw_input};
pub use notice::draw_notice;
pub use status_bar::{StatusBarContext, draw_status_bar};
