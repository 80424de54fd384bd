use crate::option::Value;
use crate::ui::model::Model;
use crate::ui::render::styles::{
    STYLE_BOX, STYLE_BOX_FOCUSED, STYLE_CHIP, STYLE_CHIP_REMOVE, STYLE_CONTROL, STYLE_LABEL,
};
use crate::ui::render::util::{display_width, truncate};

// border + left padding before the first content column
pub const CONTENT_COL: usize = 2;
// top and bottom border around the value rows
const BORDER_LINES: usize = 2;
// clear control, divider and caret on the right of the first value row
const SUFFIX_WIDTH: usize = 5;
const CHIP_REMOVE: &str = " ×";
const CHIP_REMOVE_WIDTH: usize = 2;

/// Where a chip was drawn: `row` is the widget-relative line, `start..end`
/// the widget-relative columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChipSpan {
    pub index: usize,
    pub row: usize,
    pub start: usize,
    pub end: usize,
    pub label: String,
}

/// Geometry of the control box, shared by the renderer and hit testing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlLayout {
    pub inner_width: usize,
    pub rows: usize,
    pub chips: Vec<ChipSpan>,
    pub clear_col: Option<usize>,
}

impl ControlLayout {
    pub fn height(&self) -> usize {
        self.rows + BORDER_LINES
    }
}

fn value_width(inner_width: usize) -> usize {
    inner_width.saturating_sub(SUFFIX_WIDTH + 1)
}

// Chips flow left to right and wrap onto further rows; a label too long for
// a row on its own is truncated.
fn layout_chips(m: &Model, avail: usize) -> (Vec<ChipSpan>, usize) {
    let mut chips = Vec::new();
    if avail <= CHIP_REMOVE_WIDTH {
        return (chips, 1);
    }
    let mut row = 1usize;
    let mut cursor = 0usize;
    for (index, chip) in m.chips().iter().enumerate() {
        let label = truncate(&chip.label, avail - CHIP_REMOVE_WIDTH);
        let w = display_width(&label) + CHIP_REMOVE_WIDTH;
        if cursor > 0 && cursor + w > avail {
            row += 1;
            cursor = 0;
        }
        chips.push(ChipSpan {
            index,
            row,
            start: CONTENT_COL + cursor,
            end: CONTENT_COL + cursor + w,
            label,
        });
        cursor += w + 1;
    }
    (chips, row)
}

pub fn control_layout(m: &Model) -> ControlLayout {
    let inner_width = m.width.saturating_sub(2 * CONTENT_COL);
    let (chips, rows) = layout_chips(m, value_width(inner_width));
    let clear_col = if inner_width >= SUFFIX_WIDTH {
        Some(CONTENT_COL + inner_width - SUFFIX_WIDTH)
    } else {
        None
    };
    ControlLayout {
        inner_width,
        rows,
        chips,
        clear_col,
    }
}

pub fn control_height(m: &Model) -> usize {
    control_layout(m).height()
}

// Styled value rows, each paired with its plain display width.
fn render_value(m: &Model, layout: &ControlLayout) -> Vec<(String, usize)> {
    let mut rows: Vec<(String, usize)> = vec![(String::new(), 0); layout.rows];
    match &m.value {
        Value::Single(Some(o)) => {
            let label = truncate(&o.label, value_width(layout.inner_width));
            let w = display_width(&label);
            rows[0] = (STYLE_LABEL.render(&label), w);
        }
        Value::Single(None) => {}
        Value::Multiple(_) => {
            for span in layout.chips.iter() {
                let (line, w) = &mut rows[span.row - 1];
                if *w > 0 {
                    line.push(' ');
                }
                line.push_str(&STYLE_CHIP.render(&span.label));
                line.push_str(&STYLE_CHIP_REMOVE.render(CHIP_REMOVE));
                *w = span.end - CONTENT_COL;
            }
        }
    }
    rows
}

/// The bordered control box, `m.width` columns wide and one line taller per
/// extra row of chips.
pub fn render_control(m: &Model) -> Vec<String> {
    let layout = control_layout(m);
    let content: Vec<String> = render_value(m, &layout)
        .into_iter()
        .enumerate()
        .map(|(i, (mut line, w))| {
            if i == 0 && layout.clear_col.is_some() {
                let fill = layout.inner_width.saturating_sub(w + SUFFIX_WIDTH);
                line.push_str(&" ".repeat(fill));
                line.push_str(&STYLE_CONTROL.render("× │ ▾"));
            } else {
                line.push_str(&" ".repeat(layout.inner_width.saturating_sub(w)));
            }
            line
        })
        .collect();
    let style = if m.focused {
        &*STYLE_BOX_FOCUSED
    } else {
        &*STYLE_BOX
    };
    let w_i32: i32 = m.width.saturating_sub(2).try_into().unwrap_or(i32::MAX);
    style
        .clone()
        .width(w_i32)
        .render(&content.join("\n"))
        .lines()
        .map(|s| s.to_string())
        .collect()
}
