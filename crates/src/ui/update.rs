use crate::option::Value;
use crate::ui::model::Model;
use crate::ui::{Key, Msg, Target};

/// Apply one message to the widget. `Some(value)` is the proposed new
/// selection; the host decides whether to apply it via `Model::set_value`.
pub fn handle_update(m: &mut Model, msg: Msg) -> Option<Value> {
    match msg {
        Msg::Focus => handle_focus(m),
        Msg::Blur => handle_blur(m),
        Msg::Key(key) => handle_key(m, key),
        Msg::Click(target) => handle_click(m, target),
        Msg::MouseEnter(index) => handle_mouse_enter(m, index),
    }
}

fn handle_focus(m: &mut Model) -> Option<Value> {
    m.focused = true;
    None
}

fn handle_blur(m: &mut Model) -> Option<Value> {
    m.focused = false;
    close(m);
    None
}

fn handle_key(m: &mut Model, key: Key) -> Option<Value> {
    // keys are only meaningful while the container itself holds focus
    if !m.focused {
        return None;
    }
    match key {
        Key::Enter | Key::Space => handle_key_toggle(m),
        Key::Up => {
            handle_key_up(m);
            None
        }
        Key::Down => {
            handle_key_down(m);
            None
        }
        Key::Esc => {
            close(m);
            None
        }
    }
}

fn handle_key_toggle(m: &mut Model) -> Option<Value> {
    if !m.is_open {
        open(m);
        return None;
    }
    let proposal = commit(m, m.highlighted);
    close(m);
    proposal
}

fn handle_key_up(m: &mut Model) {
    let total = m.options.len();
    if total == 0 {
        return;
    }
    m.highlighted = if m.highlighted == 0 {
        total - 1
    } else {
        m.highlighted - 1
    };
}

fn handle_key_down(m: &mut Model) {
    if !m.is_open {
        open(m);
        return;
    }
    let total = m.options.len();
    if total == 0 {
        return;
    }
    m.highlighted = if m.highlighted + 1 >= total {
        0
    } else {
        m.highlighted + 1
    };
}

fn handle_click(m: &mut Model, target: Target) -> Option<Value> {
    match target {
        Target::Container => {
            if m.is_open {
                close(m);
            } else {
                open(m);
            }
            None
        }
        Target::Option(index) => {
            let proposal = commit(m, index);
            close(m);
            proposal
        }
        Target::RemoveChip(index) => {
            // open state is left alone; the click never reaches the container
            let chip = m.chips().get(index)?.value.clone();
            let proposal = m.value.without(&chip);
            log::debug!("remove chip {chip}: {proposal:?}");
            proposal
        }
        Target::Clear => {
            let proposal = m.value.cleared();
            log::debug!("clear: {proposal:?}");
            Some(proposal)
        }
    }
}

fn handle_mouse_enter(m: &mut Model, index: usize) -> Option<Value> {
    if index < m.options.len() {
        m.highlighted = index;
    }
    None
}

fn open(m: &mut Model) {
    if !m.is_open {
        log::debug!("open ({} options)", m.options.len());
    }
    m.is_open = true;
    m.highlighted = 0;
}

fn close(m: &mut Model) {
    if m.is_open {
        log::debug!("close");
    }
    m.is_open = false;
}

// Out-of-range indices (e.g. an empty option list) commit nothing.
fn commit(m: &Model, index: usize) -> Option<Value> {
    let option = m.options.get(index)?;
    let proposal = m.value.with_committed(option);
    log::debug!("commit {}: {proposal:?}", option.value);
    Some(proposal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::{SelectOption, default_options};

    fn opts(n: usize) -> Vec<SelectOption> {
        (1..=n)
            .map(|i| SelectOption::new(i.to_string(), format!("Option {i}")))
            .collect()
    }

    fn focused_single(options: Vec<SelectOption>, value: Option<SelectOption>) -> Model {
        let mut m = Model::single(options, value);
        assert_eq!(m.update(Msg::Focus), None);
        m
    }

    fn focused_multiple(options: Vec<SelectOption>, value: Vec<SelectOption>) -> Model {
        let mut m = Model::multiple(options, value);
        assert_eq!(m.update(Msg::Focus), None);
        m
    }

    #[test]
    fn click_opens_with_first_option_highlighted() {
        for n in 1..8 {
            let mut m = focused_single(opts(n), None);
            m.highlighted = n - 1;
            assert_eq!(m.update(Msg::Click(Target::Container)), None);
            assert!(m.is_open);
            assert_eq!(m.highlighted, 0, "list of {n}");
        }
    }

    #[test]
    fn click_on_container_toggles_closed() {
        let mut m = focused_single(opts(3), None);
        m.update(Msg::Click(Target::Container));
        assert_eq!(m.update(Msg::Click(Target::Container)), None);
        assert!(!m.is_open);
    }

    #[test]
    fn arrows_wrap_around_for_every_length() {
        for n in 1..8 {
            let mut m = focused_single(opts(n), None);
            m.update(Msg::Click(Target::Container));
            m.update(Msg::Key(Key::Up));
            assert_eq!(m.highlighted, n - 1, "up from 0 in list of {n}");
            m.update(Msg::Key(Key::Down));
            assert_eq!(m.highlighted, 0, "down from last in list of {n}");
            assert!(m.is_open);
        }
    }

    #[test]
    fn arrow_down_opens_closed_list_at_first_option() {
        let mut m = focused_single(opts(5), None);
        m.highlighted = 3;
        assert_eq!(m.update(Msg::Key(Key::Down)), None);
        assert!(m.is_open);
        assert_eq!(m.highlighted, 0);
    }

    #[test]
    fn arrow_up_does_not_open() {
        let mut m = focused_single(opts(5), None);
        m.update(Msg::Key(Key::Up));
        assert!(!m.is_open);
    }

    #[test]
    fn enter_and_space_open_without_commit() {
        for key in [Key::Enter, Key::Space] {
            let mut m = focused_single(opts(5), None);
            assert_eq!(m.update(Msg::Key(key)), None);
            assert!(m.is_open);
            assert_eq!(m.highlighted, 0);
        }
    }

    #[test]
    fn arrow_down_then_enter_selects_second_option() {
        let options = default_options();
        let mut m = focused_single(options.clone(), Some(options[0].clone()));
        m.update(Msg::Click(Target::Container));
        m.update(Msg::Key(Key::Down));
        let change = m.update(Msg::Key(Key::Enter));
        assert_eq!(change, Some(Value::Single(Some(options[1].clone()))));
        assert!(!m.is_open);
    }

    #[test]
    fn space_commits_highlighted_in_multiple_mode() {
        let options = default_options();
        let mut m = focused_multiple(options.clone(), vec![options[0].clone()]);
        m.update(Msg::Key(Key::Space));
        m.update(Msg::Key(Key::Up));
        let change = m.update(Msg::Key(Key::Space));
        assert_eq!(
            change,
            Some(Value::Multiple(vec![options[0].clone(), options[4].clone()]))
        );
        assert!(!m.is_open);
    }

    #[test]
    fn clicking_option_appends_in_multiple_mode() {
        let options = default_options();
        let mut m = focused_multiple(options.clone(), vec![options[0].clone()]);
        m.update(Msg::Click(Target::Container));
        let change = m.update(Msg::Click(Target::Option(2)));
        assert_eq!(
            change,
            Some(Value::Multiple(vec![options[0].clone(), options[2].clone()]))
        );
        assert!(!m.is_open);
        // the widget itself never applies the proposal
        assert_eq!(m.value, Value::Multiple(vec![options[0].clone()]));
    }

    #[test]
    fn clicking_selected_option_again_appends_duplicate() {
        let options = default_options();
        let mut m = focused_multiple(options.clone(), vec![options[0].clone()]);
        m.update(Msg::Click(Target::Container));
        let change = m.update(Msg::Click(Target::Option(0)));
        assert_eq!(
            change,
            Some(Value::Multiple(vec![options[0].clone(), options[0].clone()]))
        );
    }

    #[test]
    fn clicking_option_in_single_mode_replaces() {
        let options = default_options();
        let mut m = focused_single(options.clone(), None);
        m.update(Msg::Click(Target::Container));
        let change = m.update(Msg::Click(Target::Option(3)));
        assert_eq!(change, Some(Value::Single(Some(options[3].clone()))));
        assert!(!m.is_open);
    }

    #[test]
    fn removing_chip_keeps_others_and_open_state() {
        let options = default_options();
        let mut m = focused_multiple(
            options.clone(),
            vec![options[0].clone(), options[2].clone()],
        );
        let change = m.update(Msg::Click(Target::RemoveChip(0)));
        assert_eq!(change, Some(Value::Multiple(vec![options[2].clone()])));
        assert!(!m.is_open);

        m.update(Msg::Click(Target::Container));
        let change = m.update(Msg::Click(Target::RemoveChip(1)));
        assert_eq!(change, Some(Value::Multiple(vec![options[0].clone()])));
        assert!(m.is_open);
    }

    #[test]
    fn removing_chip_preserves_order_of_remaining() {
        let options = default_options();
        let selected = vec![
            options[3].clone(),
            options[0].clone(),
            options[4].clone(),
            options[1].clone(),
        ];
        let mut m = focused_multiple(options.clone(), selected);
        let change = m.update(Msg::Click(Target::RemoveChip(2)));
        assert_eq!(
            change,
            Some(Value::Multiple(vec![
                options[3].clone(),
                options[0].clone(),
                options[1].clone(),
            ]))
        );
    }

    #[test]
    fn removing_chip_out_of_range_or_in_single_mode_is_noop() {
        let options = default_options();
        let mut m = focused_multiple(options.clone(), vec![options[0].clone()]);
        assert_eq!(m.update(Msg::Click(Target::RemoveChip(5))), None);
        let mut s = focused_single(options.clone(), Some(options[0].clone()));
        assert_eq!(s.update(Msg::Click(Target::RemoveChip(0))), None);
    }

    #[test]
    fn clear_yields_empty_value_of_same_mode() {
        let options = default_options();
        let mut s = focused_single(options.clone(), Some(options[2].clone()));
        assert_eq!(s.update(Msg::Click(Target::Clear)), Some(Value::Single(None)));
        let mut s = focused_single(options.clone(), None);
        assert_eq!(s.update(Msg::Click(Target::Clear)), Some(Value::Single(None)));

        let mut m = focused_multiple(options.clone(), vec![options[0].clone(), options[1].clone()]);
        m.update(Msg::Click(Target::Container));
        assert_eq!(m.update(Msg::Click(Target::Clear)), Some(Value::Multiple(vec![])));
        assert!(m.is_open, "clear must not toggle the container");
    }

    #[test]
    fn escape_closes_without_change() {
        let mut m = focused_single(opts(3), None);
        m.update(Msg::Click(Target::Container));
        m.update(Msg::Key(Key::Down));
        assert_eq!(m.update(Msg::Key(Key::Esc)), None);
        assert!(!m.is_open);
    }

    #[test]
    fn blur_closes_and_unfocuses() {
        let mut m = focused_single(opts(3), None);
        m.update(Msg::Click(Target::Container));
        assert_eq!(m.update(Msg::Blur), None);
        assert!(!m.is_open);
        assert!(!m.focused);
    }

    #[test]
    fn keys_are_ignored_without_focus() {
        let mut m = Model::single(opts(3), None);
        for key in [Key::Enter, Key::Space, Key::Down, Key::Up] {
            assert_eq!(m.update(Msg::Key(key)), None);
            assert!(!m.is_open);
            assert_eq!(m.highlighted, 0);
        }
        m.update(Msg::Click(Target::Container));
        m.update(Msg::Blur);
        m.is_open = true;
        assert_eq!(m.update(Msg::Key(Key::Esc)), None);
        assert!(m.is_open);
    }

    #[test]
    fn empty_options_never_commit() {
        let mut m = focused_single(vec![], None);
        m.update(Msg::Key(Key::Enter));
        assert!(m.is_open);
        m.update(Msg::Key(Key::Down));
        m.update(Msg::Key(Key::Up));
        assert_eq!(m.highlighted, 0);
        assert_eq!(m.update(Msg::Key(Key::Enter)), None);
        assert!(!m.is_open);
        assert_eq!(m.update(Msg::Click(Target::Option(0))), None);
    }

    #[test]
    fn mouse_enter_follows_hover_within_range() {
        let mut m = focused_single(opts(4), None);
        m.update(Msg::Click(Target::Container));
        m.update(Msg::MouseEnter(2));
        assert_eq!(m.highlighted, 2);
        m.update(Msg::MouseEnter(9));
        assert_eq!(m.highlighted, 2);
        let change = m.update(Msg::Key(Key::Enter));
        assert_eq!(change, Some(Value::Single(Some(opts(4)[2].clone()))));
    }

    #[test]
    fn open_and_close_alone_never_propose() {
        let mut m = focused_multiple(opts(3), vec![]);
        let msgs = [
            Msg::Click(Target::Container),
            Msg::Key(Key::Down),
            Msg::MouseEnter(1),
            Msg::Key(Key::Esc),
            Msg::Key(Key::Down),
            Msg::Blur,
            Msg::Focus,
        ];
        for msg in msgs {
            assert_eq!(m.update(msg), None, "{msg:?}");
        }
    }
}
