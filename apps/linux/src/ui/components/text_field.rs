//! Styled text field primitive
//!
//! Renders a [`FieldConfig`] as an iced `text_input`. The config's input mode
//! picks secure or plain rendering, its classes pick padding, width and
//! border, and `disabled` drops the input handlers so iced draws the field
//! inactive. When the config allows it, a trailing clear button is layered
//! over the field.

use iced::{
    advanced::text,
    widget::{container, stack, svg, text_input, Button, TextInput},
    Element, Length, Theme,
};
use passfield_shared::FieldConfig;

use crate::ui::components::button::{action_button, ButtonSize, ButtonVariant};
use crate::ui::theme::{self, svg_styles, text_input_styles, utils};

/// Build the bare `text_input` for a config, without trailing affordances
pub fn text_input_for<'a, Message, Renderer>(
    config: &FieldConfig,
    id: Option<&text_input::Id>,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> TextInput<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: text::Renderer,
{
    let mut input = text_input(&config.placeholder, &config.value)
        .secure(config.mode.is_secure())
        .padding(utils::field_padding(&config.class))
        .size(utils::field_text_size(config.size, &config.class))
        .width(utils::field_width(&config.class))
        .style(text_input_styles::for_classes(&config.class));

    if let Some(id) = id {
        input = input.id(id.clone());
    }

    if !config.disabled {
        input = input.on_input(on_input);
        if let Some(message) = on_submit {
            input = input.on_submit(message);
        }
    }

    input
}

/// Whether the built-in clear button is drawn for `config`
///
/// Only enabled fields that allow native affordances and hold a value get one.
pub fn shows_clear_button(config: &FieldConfig) -> bool {
    config.shows_native_affordances() && !config.disabled && !config.value.is_empty()
}

/// Render a text field, including the built-in clear affordance when enabled
pub fn text_field<'a, Message: Clone + 'a>(
    config: &FieldConfig,
    id: Option<&text_input::Id>,
    on_input: impl Fn(String) -> Message + 'a,
    on_submit: Option<Message>,
) -> Element<'a, Message> {
    if !shows_clear_button(config) {
        let input: TextInput<'a, Message> = text_input_for(config, id, on_input, on_submit);
        return input.into();
    }

    let clear_message = on_input(String::new());
    let input: TextInput<'a, Message> = text_input_for(config, id, on_input, on_submit);

    let clear_button: Button<'a, Message> = action_button(
        svg(theme::xmark_icon())
            .width(Length::Fixed(14.0))
            .height(Length::Fixed(14.0))
            .style(svg_styles::muted()),
        ButtonVariant::Ghost,
        ButtonSize::Small,
        Some(clear_message),
    );

    stack![
        input,
        container(clear_button)
            .align_right(Length::Fill)
            .center_y(Length::Fill)
    ]
    .width(utils::field_width(&config.class))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::testing::focusable_ids;
    use iced::advanced::widget;
    use passfield_shared::{InputMode, VisibilityState};

    fn filled() -> FieldConfig {
        FieldConfig::new().value("alex").clearable(true)
    }

    #[test]
    fn test_clear_button_for_filled_clearable_field() {
        assert!(shows_clear_button(&filled()));
    }

    #[test]
    fn test_no_clear_button_when_empty_disabled_or_not_clearable() {
        assert!(!shows_clear_button(&filled().value("")));
        assert!(!shows_clear_button(&filled().disabled(true)));
        assert!(!shows_clear_button(&filled().clearable(false)));
    }

    #[test]
    fn test_no_clear_button_on_password_fields() {
        let resolved = filled().for_password(&VisibilityState::new());
        assert!(!shows_clear_button(&resolved));

        let marked = filled().class("hide-password-toggle");
        assert!(!shows_clear_button(&marked));
    }

    #[test]
    fn test_secure_follows_input_mode() {
        assert!(filled().mode(InputMode::Password).mode.is_secure());
        assert!(!filled().mode(InputMode::Text).mode.is_secure());
    }

    #[test]
    fn test_id_applied_to_input() {
        let id = text_input::Id::new("username");
        let input: TextInput<'_, String, Theme, ()> =
            text_input_for(&filled(), Some(&id), |value| value, None);
        let element: Element<'_, String, Theme, ()> = input.into();

        assert_eq!(
            focusable_ids(&element),
            vec![Some(widget::Id::new("username"))]
        );
    }

    #[test]
    fn test_no_id_when_none_supplied() {
        let input: TextInput<'_, String, Theme, ()> =
            text_input_for(&filled().disabled(true), None, |value| value, None);
        let element: Element<'_, String, Theme, ()> = input.into();

        assert_eq!(focusable_ids(&element), vec![None]);
    }
}
