// UI module root: split implementation into focused submodules under `ui/`

pub mod model;
pub mod render;
pub mod run;
pub mod update;

// Re-export commonly used symbols so call sites can use `crate::ui::Model` etc.
pub use model::Model;
pub use render::{height, hit_test, hover_row, render_full};
pub use run::{App, AppMsg, run};
pub use update::handle_update;

// Keys the widget reacts to while focused
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Up,
    Down,
    Esc,
}

// Clickable parts of a rendered widget
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    Container,
    Option(usize),
    RemoveChip(usize),
    Clear,
}

// Messages used by the update logic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Msg {
    Focus,
    Blur,
    Key(Key),
    Click(Target),
    MouseEnter(usize),
}
