//! Reusable Button Components for the PassField Linux app
//!
//! The actionable-control primitive: a button with a visual variant, a size
//! and an optional activation message. A button without a message is drawn
//! disabled. Buttons never submit anything on their own; whatever they do is
//! the message they carry.

use iced::{
    advanced,
    widget::{button, Button},
    Element, Padding, Theme,
};

use crate::ui::theme::{button_styles, utils};

/// Visual variant of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
    /// No background or border; for controls layered inside other widgets
    Ghost,
}

/// Size preset of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Small,
    #[default]
    Default,
    Large,
}

impl ButtonSize {
    pub fn padding(self) -> Padding {
        match self {
            ButtonSize::Small => utils::small_button_padding(),
            ButtonSize::Default => utils::button_padding(),
            ButtonSize::Large => utils::large_button_padding(),
        }
    }
}

/// Build a button from any content with the given variant and size
pub fn action_button<'a, Message, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    variant: ButtonVariant,
    size: ButtonSize,
    on_press: Option<Message>,
) -> Button<'a, Message, Theme, Renderer>
where
    Message: Clone + 'a,
    Renderer: advanced::Renderer + 'a,
{
    let btn = button(content).padding(size.padding());

    let btn = match variant {
        ButtonVariant::Primary => btn.style(button_styles::primary()),
        ButtonVariant::Secondary => btn.style(button_styles::secondary()),
        ButtonVariant::Destructive => btn.style(button_styles::destructive()),
        ButtonVariant::Ghost => btn.style(button_styles::ghost()),
    };

    btn.on_press_maybe(on_press)
}

/// A primary action button with consistent styling
pub fn primary_button<'a, Message: Clone + 'a>(
    text: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let btn: Button<'a, Message> =
        action_button(text, ButtonVariant::Primary, ButtonSize::Default, on_press);
    btn.into()
}

/// A secondary action button with consistent styling
pub fn secondary_button<'a, Message: Clone + 'a>(
    text: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let btn: Button<'a, Message> =
        action_button(text, ButtonVariant::Secondary, ButtonSize::Default, on_press);
    btn.into()
}

/// A destructive action button with consistent styling
pub fn destructive_button<'a, Message: Clone + 'a>(
    text: &'a str,
    on_press: Option<Message>,
) -> Element<'a, Message> {
    let btn: Button<'a, Message> =
        action_button(text, ButtonVariant::Destructive, ButtonSize::Default, on_press);
    btn.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_padding_grows() {
        let small = ButtonSize::Small.padding();
        let default = ButtonSize::Default.padding();
        let large = ButtonSize::Large.padding();

        assert!(small.left < default.left);
        assert!(default.left < large.left);
        assert!(small.top < default.top);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Primary);
        assert_eq!(ButtonSize::default(), ButtonSize::Default);
    }
}
