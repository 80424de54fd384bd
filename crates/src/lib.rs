//! picklist - dropdown select widget for the terminal
//!
//! Library crate exposing the widget model, its update logic and renderers.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod error;
pub mod option;

pub mod ui;

pub use error::{Error, Result};
pub use option::{SelectOption, Value};
