use crate::ui::model::Model;
use crate::ui::render::{render_control, render_options};

pub fn render_full(m: &Model) -> String {
    let mut lines = render_control(m);
    lines.extend(render_options(m));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use crate::option::default_options;
    use crate::ui::model::Model;
    use crate::ui::{Key, Msg, Target};
    use regex::Regex;

    // helper to strip ANSI CSI sequences from rendered output for assertions
    fn strip_ansi(s: &str) -> String {
        let re = Regex::new(r"\x1b\[[0-9;?]*[ -/]*[@-~]").unwrap();
        re.replace_all(s, "").to_string()
    }

    #[test]
    fn closed_widget_is_three_lines_of_exact_width() {
        for w in [20usize, 40, 64] {
            let opts = default_options();
            let mut m = Model::single(opts.clone(), Some(opts[0].clone()));
            m.width = w;
            let stripped = strip_ansi(&m.render_full());
            let lines: Vec<&str> = stripped.lines().collect();
            assert_eq!(lines.len(), 3, "height mismatch at width {w}\n{stripped}");
            for (idx, line) in lines.iter().enumerate() {
                assert_eq!(
                    line.chars().count(),
                    w,
                    "width mismatch at line {idx} for width {w}: `{line}`\n{stripped}"
                );
            }
        }
    }

    #[test]
    fn single_mode_shows_label_and_controls() {
        let opts = default_options();
        let m = Model::single(opts.clone(), Some(opts[1].clone()));
        let stripped = strip_ansi(&m.render_full());
        let row = stripped.lines().nth(1).unwrap_or("");
        assert!(row.contains("Option 2"), "row: `{row}`");
        assert!(row.contains("× │ ▾"), "row: `{row}`");
        assert!(!stripped.contains("Option 1"), "closed list must not be shown\n{stripped}");
    }

    #[test]
    fn multiple_mode_shows_removable_chips() {
        let opts = default_options();
        let m = Model::multiple(opts.clone(), vec![opts[0].clone(), opts[2].clone()]);
        let stripped = strip_ansi(&m.render_full());
        let row = stripped.lines().nth(1).unwrap_or("");
        assert!(row.contains("Option 1 × Option 3 ×"), "row: `{row}`");
    }

    #[test]
    fn open_list_renders_every_option_below_the_control() {
        let opts = default_options();
        let mut m = Model::single(opts.clone(), None);
        m.update(Msg::Focus);
        m.update(Msg::Click(Target::Container));
        m.update(Msg::Key(Key::Down));
        let stripped = strip_ansi(&m.render_full());
        let lines: Vec<&str> = stripped.lines().collect();
        assert_eq!(lines.len(), m.height());
        for (i, o) in opts.iter().enumerate() {
            assert_eq!(lines[3 + i].trim(), o.label);
            assert_eq!(lines[3 + i].chars().count(), m.width);
        }
    }
}
