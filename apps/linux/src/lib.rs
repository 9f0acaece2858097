//! PassField for iced
//!
//! The password input component, the primitives it is built from, and the
//! configuration and logging setup used by the PassField Linux app.
//!
//! ```no_run
//! use iced::widget::text_input;
//! use passfield_linux::ui::components::{PasswordInput, PasswordInputAction, PasswordInputMessage};
//! use passfield_shared::FieldConfig;
//!
//! let mut input = PasswordInput::with_id(text_input::Id::new("password"));
//! let mut password = String::new();
//!
//! match input.update(PasswordInputMessage::InputChanged("s3cret".into())) {
//!     Some(PasswordInputAction::Changed(value)) => password = value,
//!     _ => {}
//! }
//!
//! let _element: iced::Element<'_, PasswordInputMessage> =
//!     input.view(&FieldConfig::new().placeholder("Password").value(password));
//! ```

pub mod config;
pub mod logging;
pub mod ui;
