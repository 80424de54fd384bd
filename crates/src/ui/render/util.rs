use lipgloss::Style;

pub fn pad_line(line: &str, total_width: usize) -> String {
    let line_style = Style::new().width(total_width as i32);
    line_style.render(line)
}

// Terminal columns taken by `s`; wide glyphs count twice.
pub fn display_width(s: &str) -> usize {
    lipgloss::width(s)
}

// Cut `s` to at most `max` columns, marking the cut with an ellipsis.
pub fn truncate(s: &str, max: usize) -> String {
    if display_width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = display_width(ch.encode_utf8(&mut [0u8; 4]));
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}
