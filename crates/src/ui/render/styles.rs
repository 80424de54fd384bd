use lipgloss::{Color, Style, rounded_border};
use once_cell::sync::Lazy;

// Styles kept local to render module
pub static STYLE_BOX: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .border(rounded_border())
        .border_foreground(Color::from_rgb(119, 119, 119))
        .padding(0, 1, 0, 1)
});
pub static STYLE_BOX_FOCUSED: Lazy<Style> = Lazy::new(|| {
    STYLE_BOX
        .clone()
        .border_foreground(Color::from_rgb(0, 170, 255))
});
pub static STYLE_LABEL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(230, 230, 230)));
pub static STYLE_CHIP: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .foreground(Color::from_rgb(230, 230, 230))
        .bold(true)
});
pub static STYLE_CHIP_REMOVE: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(255, 85, 85)));
pub static STYLE_CONTROL: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(119, 119, 119)));
pub static STYLE_OPTION: Lazy<Style> =
    Lazy::new(|| Style::new().foreground(Color::from_rgb(200, 200, 200)));
pub static STYLE_HIGHLIGHT: Lazy<Style> = Lazy::new(|| {
    Style::new()
        .background(Color::from_rgb(119, 119, 119))
        .foreground(Color::from_rgb(255, 255, 255))
        .bold(true)
});
pub static STYLE_HELP: Lazy<Style> = Lazy::new(|| Style::new().faint(true));
