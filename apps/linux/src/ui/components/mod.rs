//! UI Components Module
//!
//! Reusable widgets for the PassField Linux app: the button and text field
//! primitives and the password input built from them.

use iced::advanced::{svg, text};

pub mod button;
pub mod password_input;
pub mod text_field;

#[cfg(test)]
mod testing;

pub use button::{action_button, ButtonSize, ButtonVariant};
pub use password_input::{PasswordInput, PasswordInputAction, PasswordInputMessage};
pub use text_field::{shows_clear_button, text_field, text_input_for};

/// Renderers the field components can be drawn with
pub trait FieldRenderer: text::Renderer + svg::Renderer + 'static {}

impl<R> FieldRenderer for R where R: text::Renderer + svg::Renderer + 'static {}
