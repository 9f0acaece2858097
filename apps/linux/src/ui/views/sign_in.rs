//! Sign In View
//!
//! A small form hosting the password input the way an application would: the
//! form owns the username and password values, forwards the password field's
//! id to focus it, and can rebuild the field to start over masked.

use iced::widget::{checkbox, column, container, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Task};
use passfield_shared::FieldConfig;
use tracing::{debug, info};

use crate::ui::components::button::{destructive_button, primary_button, secondary_button};
use crate::ui::components::{text_field, PasswordInput, PasswordInputAction, PasswordInputMessage};
use crate::ui::theme::{utils, SUCCESS_GREEN};

/// Id of the password field inside the sign in form
pub const PASSWORD_FIELD_ID: &str = "sign-in-password";

/// Messages for the sign in view
#[derive(Debug, Clone)]
pub enum SignInMessage {
    /// Username input changed
    UsernameChanged(String),
    /// Message from the password input
    Password(PasswordInputMessage),
    /// Enable or disable both fields
    DisabledToggled(bool),
    /// Move keyboard focus to the password field
    FocusPassword,
    /// Clear the form and rebuild the password input
    Reset,
    /// Submit the form
    Submit,
}

/// Sign in view component
#[derive(Debug)]
pub struct SignInView {
    username: String,
    password: String,
    password_input: PasswordInput,
    disabled: bool,
    show_tooltips: bool,
    status: Option<String>,
}

impl SignInView {
    /// Create a new sign in view
    pub fn new(show_tooltips: bool) -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            password_input: Self::mount_password_input(show_tooltips),
            disabled: false,
            show_tooltips,
            status: None,
        }
    }

    fn mount_password_input(show_tooltips: bool) -> PasswordInput {
        PasswordInput::with_id(text_input::Id::new(PASSWORD_FIELD_ID)).with_tooltip(show_tooltips)
    }

    pub fn password_input(&self) -> &PasswordInput {
        &self.password_input
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Update the view with a message
    pub fn update(&mut self, message: SignInMessage) -> Task<SignInMessage> {
        match message {
            SignInMessage::UsernameChanged(username) => {
                self.username = username;
                Task::none()
            }

            SignInMessage::Password(message) => {
                match self.password_input.update(message) {
                    Some(PasswordInputAction::Changed(password)) => self.password = password,
                    Some(PasswordInputAction::Submit) => self.submit(),
                    None => {}
                }
                Task::none()
            }

            SignInMessage::DisabledToggled(disabled) => {
                debug!("Sign in fields disabled: {}", disabled);
                self.disabled = disabled;
                Task::none()
            }

            SignInMessage::FocusPassword => self.password_input.focus(),

            SignInMessage::Reset => {
                debug!("Resetting sign in form");
                self.username.clear();
                self.password.clear();
                self.status = None;
                self.password_input = Self::mount_password_input(self.show_tooltips);
                Task::none()
            }

            SignInMessage::Submit => {
                self.submit();
                Task::none()
            }
        }
    }

    fn submit(&mut self) {
        info!("Sign in form submitted");
        self.status = Some(if self.username.is_empty() {
            "Submitted without a username".to_string()
        } else {
            format!("Submitted as {}", self.username)
        });
    }

    fn username_config(&self) -> FieldConfig {
        FieldConfig::new()
            .placeholder("Username")
            .value(self.username.clone())
            .disabled(self.disabled)
            .clearable(true)
            .class("border")
    }

    fn password_config(&self) -> FieldConfig {
        FieldConfig::new()
            .placeholder("Password")
            .value(self.password.clone())
            .disabled(self.disabled)
            .clearable(true)
    }

    /// Render the view
    pub fn view(&self) -> Element<'_, SignInMessage> {
        let username = text_field(
            &self.username_config(),
            None,
            SignInMessage::UsernameChanged,
            Some(SignInMessage::Submit),
        );

        let password: Element<'_, SignInMessage> = self
            .password_input
            .view_with(&self.password_config(), SignInMessage::Password);

        let submit_message = (!self.disabled).then_some(SignInMessage::Submit);

        let actions = row![
            destructive_button("Reset", Some(SignInMessage::Reset)),
            Space::with_width(Length::Fill),
            secondary_button("Focus password", Some(SignInMessage::FocusPassword)),
            primary_button("Sign in", submit_message),
        ]
        .spacing(10)
        .align_y(Alignment::Center);

        let mut content = column![
            text("Sign in").size(utils::typography::header_text_size()),
            username,
            password,
            checkbox("Disable fields", self.disabled).on_toggle(SignInMessage::DisabledToggled),
            actions,
        ]
        .spacing(utils::standard_spacing())
        .width(Length::Fill);

        if let Some(status) = &self.status {
            content = content.push(
                text(status)
                    .size(utils::typography::normal_text_size())
                    .color(SUCCESS_GREEN),
            );
        }

        container(content)
            .padding(utils::main_content_padding())
            .width(Length::Fill)
            .into()
    }
}
