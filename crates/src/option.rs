use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One selectable entry: `value` is the unique key, `label` is what gets rendered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectOption {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Current selection of a select widget. The variant doubles as the
/// single/multiple mode flag, so a proposal always has the same shape as the
/// value it replaces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Single(Option<SelectOption>),
    Multiple(Vec<SelectOption>),
}

impl Value {
    pub fn is_multiple(&self) -> bool {
        matches!(self, Value::Multiple(_))
    }

    /// Empty value of the same mode: `None` for single, `[]` for multiple.
    pub fn cleared(&self) -> Value {
        match self {
            Value::Single(_) => Value::Single(None),
            Value::Multiple(_) => Value::Multiple(Vec::new()),
        }
    }

    /// Proposal after choosing `option`. Multiple mode appends without checking
    /// whether the option is already selected.
    pub fn with_committed(&self, option: &SelectOption) -> Value {
        match self {
            Value::Single(_) => Value::Single(Some(option.clone())),
            Value::Multiple(selected) => {
                let mut next = selected.clone();
                next.push(option.clone());
                Value::Multiple(next)
            }
        }
    }

    /// Proposal with the first entry matching `value` dropped. Single mode has
    /// no chips, so it yields `None`.
    pub fn without(&self, value: &str) -> Option<Value> {
        match self {
            Value::Single(_) => None,
            Value::Multiple(selected) => {
                let mut next = selected.clone();
                if let Some(pos) = next.iter().position(|o| o.value == value) {
                    next.remove(pos);
                }
                Some(Value::Multiple(next))
            }
        }
    }

    // labels in display order, for log lines
    pub fn labels(&self) -> Vec<&str> {
        match self {
            Value::Single(Some(o)) => vec![o.label.as_str()],
            Value::Single(None) => vec![],
            Value::Multiple(selected) => selected.iter().map(|o| o.label.as_str()).collect(),
        }
    }
}

/// The five options the demo starts with when no options file is given.
pub fn default_options() -> Vec<SelectOption> {
    (1..=5)
        .map(|i| SelectOption::new(i.to_string(), format!("Option {i}")))
        .collect()
}

/// Parse a JSON array of `{ "value": .., "label": .. }` objects.
pub fn parse_options(json: &str) -> Result<Vec<SelectOption>> {
    let options: Vec<SelectOption> = serde_json::from_str(json)?;
    if options.is_empty() {
        return Err(Error::EmptyOptions);
    }
    let mut seen: HashSet<&str> = HashSet::new();
    for o in options.iter() {
        if !seen.insert(o.value.as_str()) {
            return Err(Error::DuplicateValue(o.value.clone()));
        }
    }
    Ok(options)
}

pub fn load_options(path: &Path) -> Result<Vec<SelectOption>> {
    let s = fs::read_to_string(path)?;
    let options = parse_options(&s)?;
    log::info!("loaded {} options from {}", options.len(), path.display());
    Ok(options)
}
