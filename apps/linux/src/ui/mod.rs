//! UI Module for the PassField Linux app
//!
//! Components, theme and the demo views hosting them.

pub mod components;
pub mod theme;
pub mod views;

pub use theme::{create_theme, utils};
