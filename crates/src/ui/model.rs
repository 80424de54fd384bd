use crate::option::{SelectOption, Value};

pub const DEFAULT_WIDTH: usize = 40;

#[derive(Clone, Debug)]
pub struct Model {
    pub options: Vec<SelectOption>,
    // snapshot of the caller-owned selection; replaced only through set_value
    pub value: Value,
    pub is_open: bool,
    pub highlighted: usize,
    pub focused: bool,
    pub width: usize,
}

impl Model {
    pub fn new(options: Vec<SelectOption>, value: Value) -> Model {
        Model {
            options,
            value,
            is_open: false,
            highlighted: 0,
            focused: false,
            width: DEFAULT_WIDTH,
        }
    }

    pub fn single(options: Vec<SelectOption>, value: Option<SelectOption>) -> Model {
        Model::new(options, Value::Single(value))
    }

    pub fn multiple(options: Vec<SelectOption>, value: Vec<SelectOption>) -> Model {
        Model::new(options, Value::Multiple(value))
    }

    // wrapper update that delegates to the update module
    pub fn update(&mut self, msg: crate::ui::Msg) -> Option<Value> {
        crate::ui::update::handle_update(self, msg)
    }

    pub fn is_multiple(&self) -> bool {
        self.value.is_multiple()
    }

    /// Accept the host's current selection. A value of the other mode is
    /// ignored so the widget's variant never changes under it.
    pub fn set_value(&mut self, value: Value) {
        if value.is_multiple() != self.is_multiple() {
            log::warn!("ignoring value of the wrong mode: {value:?}");
            return;
        }
        self.value = value;
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
        if self.highlighted >= self.options.len() {
            self.highlighted = 0;
        }
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.options.get(self.highlighted)
    }

    // chips shown in multiple mode, in selection order
    pub fn chips(&self) -> &[SelectOption] {
        match &self.value {
            Value::Multiple(selected) => selected,
            Value::Single(_) => &[],
        }
    }

    pub fn height(&self) -> usize {
        crate::ui::render::height(self)
    }

    pub fn render_full(&self) -> String {
        crate::ui::render::render_full(self)
    }
}
