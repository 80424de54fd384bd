use crate::ui::model::Model;
use crate::ui::render::control::CONTENT_COL;
use crate::ui::render::styles::{STYLE_HIGHLIGHT, STYLE_OPTION};
use crate::ui::render::util::{pad_line, truncate};

/// One line per option, only while the list is open. The highlighted row
/// spans the full widget width.
pub fn render_options(m: &Model) -> Vec<String> {
    if !m.is_open {
        return Vec::new();
    }
    let label_width = m.width.saturating_sub(CONTENT_COL);
    m.options
        .iter()
        .enumerate()
        .map(|(i, o)| {
            let plain = format!(
                "{}{}",
                " ".repeat(CONTENT_COL),
                truncate(&o.label, label_width)
            );
            let padded = pad_line(&plain, m.width);
            if i == m.highlighted {
                STYLE_HIGHLIGHT.render(&padded)
            } else {
                STYLE_OPTION.render(&padded)
            }
        })
        .collect()
}
