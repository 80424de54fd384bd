use crate::ui::Target;
use crate::ui::model::Model;
use crate::ui::render::control::{control_height, control_layout};

/// Rows the widget occupies: the control box plus the open list.
pub fn height(m: &Model) -> usize {
    if m.is_open {
        control_height(m) + m.options.len()
    } else {
        control_height(m)
    }
}

/// Map a cell relative to the widget's top-left corner to what was clicked.
pub fn hit_test(m: &Model, x: usize, y: usize) -> Option<Target> {
    if x >= m.width || y >= height(m) {
        return None;
    }
    if let Some(row) = option_row(m, y) {
        return Some(Target::Option(row));
    }
    let layout = control_layout(m);
    if y >= 1 && y <= layout.rows {
        if let Some(span) = layout
            .chips
            .iter()
            .find(|s| s.row == y && x >= s.start && x < s.end)
        {
            return Some(Target::RemoveChip(span.index));
        }
        if y == 1 && layout.clear_col == Some(x) {
            return Some(Target::Clear);
        }
    }
    Some(Target::Container)
}

/// Option row under the pointer, for highlight-follows-hover.
pub fn hover_row(m: &Model, x: usize, y: usize) -> Option<usize> {
    if x >= m.width {
        return None;
    }
    option_row(m, y)
}

fn option_row(m: &Model, y: usize) -> Option<usize> {
    let top = control_height(m);
    if !m.is_open || y < top {
        return None;
    }
    let row = y - top;
    if row < m.options.len() { Some(row) } else { None }
}
