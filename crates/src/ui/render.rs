// Render module split into focused submodules.

pub mod control;
pub mod full;
pub mod layout;
pub mod list;
pub mod styles;
pub mod util;

pub use control::{ChipSpan, ControlLayout, control_height, control_layout, render_control};
pub use full::render_full;
pub use layout::{height, hit_test, hover_row};
pub use list::render_options;
