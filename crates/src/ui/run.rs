use crate::error::{Error, Result};
use crate::option::{SelectOption, Value};
use crate::ui::model::Model;
use crate::ui::render::styles::{STYLE_HELP, STYLE_LABEL};
use crate::ui::{Key, Msg};
use bubbletea_rs::{
    MouseMotion, Program, command::Cmd, event::KeyMsg, event::MouseMsg, event::WindowSizeMsg,
    model::Model as TeaModel, window_size,
};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use once_cell::sync::OnceCell;

const MAX_WIDGET_WIDTH: usize = 48;
const TITLES: [&str; 2] = ["Single", "Multiple"];
const HELP: &str = "tab focus · ↑/↓ move · ⏎/␣ select · ⎋ close · q quit";

// Options for the interactive session; the tea Model::init has no arguments.
static OPTIONS: OnceCell<Vec<SelectOption>> = OnceCell::new();

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMsg {
    WindowSize { width: usize, height: usize },
    FocusNext,
    FocusPrev,
    Key(Key),
    Click { x: usize, y: usize },
    Hover { x: usize, y: usize },
}

/// Demo host: owns one single and one multiple selection and feeds them to
/// two select widgets, applying whatever the widgets propose.
#[derive(Clone, Debug)]
pub struct App {
    pub single: Option<SelectOption>,
    pub multi: Vec<SelectOption>,
    pub widgets: Vec<Model>,
    pub focus: Option<usize>,
}

impl App {
    pub fn new(options: Vec<SelectOption>) -> App {
        let single = options.first().cloned();
        let multi: Vec<SelectOption> = options.first().cloned().into_iter().collect();
        let widgets = vec![
            Model::single(options.clone(), single.clone()),
            Model::multiple(options, multi.clone()),
        ];
        App {
            single,
            multi,
            widgets,
            focus: None,
        }
    }

    pub fn update(&mut self, msg: AppMsg) {
        match msg {
            AppMsg::WindowSize { width, .. } => {
                let w = width.min(MAX_WIDGET_WIDTH);
                for widget in self.widgets.iter_mut() {
                    widget.width = w;
                }
            }
            AppMsg::FocusNext => {
                let next = match self.focus {
                    Some(i) => (i + 1) % self.widgets.len(),
                    None => 0,
                };
                self.set_focus(Some(next));
            }
            AppMsg::FocusPrev => {
                let total = self.widgets.len();
                let prev = match self.focus {
                    Some(0) | None => total - 1,
                    Some(i) => i - 1,
                };
                self.set_focus(Some(prev));
            }
            AppMsg::Key(key) => {
                if let Some(i) = self.focus {
                    self.send(i, Msg::Key(key));
                }
            }
            AppMsg::Click { x, y } => match self.widget_at(y) {
                Some((i, top)) => {
                    let target = crate::ui::render::hit_test(&self.widgets[i], x, y - top);
                    match target {
                        Some(target) => {
                            self.set_focus(Some(i));
                            self.send(i, Msg::Click(target));
                        }
                        None => self.set_focus(None),
                    }
                }
                None => self.set_focus(None),
            },
            AppMsg::Hover { x, y } => {
                if let Some((i, top)) = self.widget_at(y) {
                    if let Some(row) = crate::ui::render::hover_row(&self.widgets[i], x, y - top) {
                        self.send(i, Msg::MouseEnter(row));
                    }
                }
            }
        }
    }

    // Row of each widget's control box, below its title line.
    fn widget_tops(&self) -> Vec<usize> {
        let mut tops = Vec::with_capacity(self.widgets.len());
        let mut y = 0usize;
        for widget in self.widgets.iter() {
            tops.push(y + 1);
            y += 1 + widget.height() + 1;
        }
        tops
    }

    fn widget_at(&self, y: usize) -> Option<(usize, usize)> {
        self.widget_tops()
            .into_iter()
            .enumerate()
            .find(|(i, top)| y >= *top && y < top + self.widgets[*i].height())
    }

    fn set_focus(&mut self, next: Option<usize>) {
        if self.focus == next {
            return;
        }
        if let Some(old) = self.focus {
            self.send(old, Msg::Blur);
        }
        self.focus = next;
        if let Some(new) = next {
            self.send(new, Msg::Focus);
        }
    }

    fn send(&mut self, i: usize, msg: Msg) {
        if let Some(value) = self.widgets[i].update(msg) {
            self.apply(i, value);
        }
    }

    // The host owns the selections; widgets only see the applied snapshot.
    fn apply(&mut self, i: usize, value: Value) {
        log::info!("widget {i} changed: {:?}", value.labels());
        match &value {
            Value::Single(v) => self.single = v.clone(),
            Value::Multiple(v) => self.multi = v.clone(),
        }
        self.widgets[i].set_value(value);
    }

    pub fn view(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        for (i, widget) in self.widgets.iter().enumerate() {
            let title = TITLES.get(i).copied().unwrap_or("Select");
            lines.push(STYLE_LABEL.render(title));
            lines.extend(widget.render_full().lines().map(str::to_string));
            lines.push(String::new());
        }
        lines.push(STYLE_HELP.render(HELP));
        lines.join("\n")
    }

    // One line per selection, printed after the program exits.
    pub fn summary(&self) -> String {
        let single = self
            .single
            .as_ref()
            .map(|o| o.label.as_str())
            .unwrap_or("");
        let multi: Vec<&str> = self.multi.iter().map(|o| o.label.as_str()).collect();
        format!("single: {single}\nmultiple: {}", multi.join(", "))
    }
}

// Adapter type implementing bubbletea-rs Model trait by delegating to App
struct TeaAdapter {
    inner: App,
}

impl TeaAdapter {
    fn handle_key(&mut self, km: &KeyMsg) -> Option<Cmd> {
        match &km.key {
            KeyCode::Char(ch) => {
                if km.modifiers.contains(KeyModifiers::CONTROL) && (*ch == 'c' || *ch == 'C') {
                    return Some(bubbletea_rs::quit());
                }
                if *ch == '\u{03}' {
                    // Ctrl-C delivered as ETX
                    return Some(bubbletea_rs::quit());
                }
                match ch {
                    'q' => return Some(bubbletea_rs::quit()),
                    ' ' => self.inner.update(AppMsg::Key(Key::Space)),
                    _ => {}
                }
            }
            KeyCode::Tab => self.inner.update(AppMsg::FocusNext),
            KeyCode::BackTab => self.inner.update(AppMsg::FocusPrev),
            KeyCode::Enter => self.inner.update(AppMsg::Key(Key::Enter)),
            KeyCode::Up => self.inner.update(AppMsg::Key(Key::Up)),
            KeyCode::Down => self.inner.update(AppMsg::Key(Key::Down)),
            KeyCode::Esc => self.inner.update(AppMsg::Key(Key::Esc)),
            _ => { /* ignore other keys */ }
        }
        None
    }
}

impl TeaModel for TeaAdapter {
    fn init() -> (Self, Option<Cmd>) {
        let options = OPTIONS.get().cloned().unwrap_or_default();
        let mut adapter = TeaAdapter {
            inner: App::new(options),
        };
        let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
        adapter.inner.update(AppMsg::WindowSize {
            width: width as usize,
            height: height as usize,
        });
        (adapter, Some(window_size()))
    }

    fn update(&mut self, msg: bubbletea_rs::event::Msg) -> Option<Cmd> {
        if let Some(km) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(km);
        }
        if let Some(mm) = msg.downcast_ref::<MouseMsg>() {
            let (x, y) = (mm.x as usize, mm.y as usize);
            match mm.button {
                MouseEventKind::Down(MouseButton::Left) => {
                    self.inner.update(AppMsg::Click { x, y })
                }
                MouseEventKind::Moved => self.inner.update(AppMsg::Hover { x, y }),
                _ => {}
            }
            return None;
        }
        if let Some(ws) = msg.downcast_ref::<WindowSizeMsg>() {
            self.inner.update(AppMsg::WindowSize {
                width: ws.width as usize,
                height: ws.height as usize,
            });
            return None;
        }
        None
    }

    fn view(&self) -> String {
        self.inner.view()
    }
}

/// Run the interactive demo until the user quits and return the final state.
pub async fn run(options: Vec<SelectOption>) -> Result<App> {
    if OPTIONS.set(options).is_err() {
        return Err(Error::Program("program already running".to_string()));
    }
    let builder = Program::<TeaAdapter>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .mouse_motion(MouseMotion::Cell);
    let program = builder
        .build()
        .map_err(|e| Error::Program(format!("failed to build program: {e:?}")))?;
    let final_adapter = program
        .run()
        .await
        .map_err(|e| Error::Program(format!("{e:?}")))?;
    Ok(final_adapter.inner)
}
