//! Password Input Component
//!
//! A drop-in replacement for the text field primitive that masks its value
//! and layers a visibility toggle over the field's trailing edge.
//!
//! The component owns only the visibility flag. The value itself belongs to
//! the host form: edits and submissions come back out of [`PasswordInput::update`]
//! as [`PasswordInputAction`]s, while toggling is handled internally and
//! never produces an action.

use iced::{
    widget::{container, stack, svg, text, text_input, tooltip, Button, TextInput},
    Element, Length, Task, Theme,
};
use passfield_shared::{FieldConfig, MaskingMode, VisibilityState};
use tracing::{debug, trace};

use crate::ui::components::button::{action_button, ButtonSize, ButtonVariant};
use crate::ui::components::text_field::text_input_for;
use crate::ui::components::FieldRenderer;
use crate::ui::theme::{self, container_styles, svg_styles, utils};

/// Messages produced by the password input's widgets
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordInputMessage {
    /// The field's text changed
    InputChanged(String),
    /// Enter was pressed in the field
    Submitted,
    /// The visibility toggle was activated
    ToggleVisibility,
}

/// What the host form needs to act on after an update
#[derive(Debug, Clone, PartialEq)]
pub enum PasswordInputAction {
    /// Store the new value
    Changed(String),
    /// Submit the enclosing form
    Submit,
}

/// The password input component
#[derive(Debug)]
pub struct PasswordInput {
    /// Visibility flag, masked on construction
    state: VisibilityState,
    /// Id applied to the inner text input
    field_id: text_input::Id,
    /// Whether the toggle shows its accessible label on hover
    show_tooltip: bool,
}

impl Default for PasswordInput {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordInput {
    /// Create a masked password input with a generated field id
    pub fn new() -> Self {
        Self::with_id(text_input::Id::unique())
    }

    /// Create a masked password input whose inner field uses `field_id`
    ///
    /// The host keeps a clone of the id to focus the field later.
    pub fn with_id(field_id: text_input::Id) -> Self {
        Self {
            state: VisibilityState::new(),
            field_id,
            show_tooltip: true,
        }
    }

    pub fn with_tooltip(mut self, show_tooltip: bool) -> Self {
        self.show_tooltip = show_tooltip;
        self
    }

    /// Id of the inner text input, never of the wrapper or the toggle
    pub fn field_id(&self) -> &text_input::Id {
        &self.field_id
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    pub fn mode(&self) -> MaskingMode {
        self.state.mode()
    }

    /// Accessible label of the toggle in the current state
    pub fn toggle_label(&self) -> &'static str {
        self.state.toggle_label()
    }

    /// Handle a message from the component's widgets
    pub fn update(&mut self, message: PasswordInputMessage) -> Option<PasswordInputAction> {
        match message {
            PasswordInputMessage::InputChanged(value) => {
                trace!(length = value.chars().count(), "Password input changed");
                Some(PasswordInputAction::Changed(value))
            }

            PasswordInputMessage::Submitted => Some(PasswordInputAction::Submit),

            PasswordInputMessage::ToggleVisibility => {
                let mode = self.state.toggle();
                debug!(
                    mode = mode.as_str(),
                    label = self.state.toggle_label(),
                    "Password visibility toggled"
                );
                None
            }
        }
    }

    /// Focus the inner text input
    pub fn focus<Message: Send + 'static>(&self) -> Task<Message> {
        text_input::focus(self.field_id.clone())
    }

    /// The field configuration actually rendered for `config`
    pub fn resolved_field(&self, config: &FieldConfig) -> FieldConfig {
        config.for_password(&self.state)
    }

    /// Render the field and its toggle
    pub fn view<Renderer: FieldRenderer>(
        &self,
        config: &FieldConfig,
    ) -> Element<'_, PasswordInputMessage, Theme, Renderer> {
        let field = self.resolved_field(config);

        let input: TextInput<'_, PasswordInputMessage, Theme, Renderer> = text_input_for(
            &field,
            Some(&self.field_id),
            PasswordInputMessage::InputChanged,
            Some(PasswordInputMessage::Submitted),
        );

        stack![
            input,
            container(self.view_toggle::<Renderer>())
                .align_right(Length::Fill)
                .center_y(Length::Fill)
        ]
        .width(utils::field_width(&field.class))
        .into()
    }

    /// Render into a host message type
    pub fn view_with<'a, Message: 'a, Renderer: FieldRenderer>(
        &'a self,
        config: &FieldConfig,
        on_message: impl Fn(PasswordInputMessage) -> Message + 'a,
    ) -> Element<'a, Message, Theme, Renderer> {
        self.view::<Renderer>(config).map(on_message)
    }

    fn view_toggle<Renderer: FieldRenderer>(
        &self,
    ) -> Element<'_, PasswordInputMessage, Theme, Renderer> {
        let icon = svg(theme::toggle_icon(self.state.icon()))
            .width(Length::Fixed(16.0))
            .height(Length::Fixed(16.0))
            .style(svg_styles::muted());

        let toggle: Button<'_, PasswordInputMessage, Theme, Renderer> = action_button(
            icon,
            ButtonVariant::Ghost,
            ButtonSize::Small,
            Some(PasswordInputMessage::ToggleVisibility),
        )
        .padding(utils::password_toggle_padding());

        if !self.show_tooltip {
            return toggle.into();
        }

        tooltip(
            toggle,
            container(text(self.state.toggle_label()).size(utils::typography::small_text_size()))
                .padding(6),
            tooltip::Position::Bottom,
        )
        .style(container_styles::tooltip())
        .into()
    }
}
