//! Theme and styling for the PassField Linux app
//!
//! Brand colors, embedded icons and the style functions used by the field and
//! button primitives. Style selection is driven by the field's [`ClassList`]
//! so callers can override the defaults the same way they override padding.
//!
//! ## Icon Attribution
//! The eye, eye-off and xmark icons follow the outline style of Iconoir
//! (https://iconoir.com/), MIT License.

use iced::{
    widget::{button, container, svg, text_input},
    Background, Border, Color, Shadow, Theme,
};
use passfield_shared::{ClassList, ToggleIcon};

/// Embedded eye icon SVG shown while the password is visible
pub const EYE_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye.svg");

/// Embedded eye-off icon SVG shown while the password is masked
pub const EYE_OFF_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/eye-off.svg");

/// Embedded xmark icon SVG for the field primitive's clear button
pub const XMARK_ICON_SVG: &[u8] = include_bytes!("../../resources/icons/xmark.svg");

pub fn eye_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_ICON_SVG)
}

pub fn eye_off_icon() -> svg::Handle {
    svg::Handle::from_memory(EYE_OFF_ICON_SVG)
}

pub fn xmark_icon() -> svg::Handle {
    svg::Handle::from_memory(XMARK_ICON_SVG)
}

/// Icon handle for the visibility toggle
pub fn toggle_icon(icon: ToggleIcon) -> svg::Handle {
    match icon {
        ToggleIcon::Eye => eye_icon(),
        ToggleIcon::EyeOff => eye_off_icon(),
    }
}

/// Brand purple (#8338ec)
pub const BRAND_PURPLE: Color = Color::from_rgb(0.514, 0.220, 0.925);

/// Brand purple hover state (slightly darker)
pub const BRAND_PURPLE_HOVER: Color = Color::from_rgb(0.45, 0.18, 0.82);

/// Brand purple pressed state (even darker)
pub const BRAND_PURPLE_PRESSED: Color = Color::from_rgb(0.40, 0.15, 0.75);

/// Brand purple with low opacity for hover backgrounds
pub const BRAND_PURPLE_LIGHT: Color = Color::from_rgba(0.514, 0.220, 0.925, 0.1);

/// Success/Valid color (#06d6a0)
pub const SUCCESS_GREEN: Color = Color::from_rgb(0.024, 0.839, 0.627);

/// Error/Invalid color (#ef476f)
pub const ERROR_RED: Color = Color::from_rgb(0.937, 0.278, 0.435);

/// Error red hover state
pub const ERROR_RED_HOVER: Color = Color::from_rgb(0.85, 0.25, 0.40);

/// Light background color (#F8F9FA)
pub const LIGHT_BACKGROUND: Color = Color::from_rgb(0.97, 0.976, 0.98);

/// Dark background color (#1E1F24)
pub const DARK_BACKGROUND: Color = Color::from_rgb(0.118, 0.122, 0.141);

/// Dark text color (#212529)
pub const DARK_TEXT: Color = Color::from_rgb(0.129, 0.145, 0.161);

/// Light text color for dark backgrounds
pub const LIGHT_TEXT: Color = Color::from_rgb(0.93, 0.93, 0.95);

pub const WHITE: Color = Color::WHITE;

pub const TRANSPARENT: Color = Color::TRANSPARENT;

/// Disabled background color (light gray)
pub const DISABLED_BACKGROUND: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Disabled text color (medium gray)
pub const DISABLED_TEXT: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Disabled border color (darker gray)
pub const DISABLED_BORDER: Color = Color::from_rgb(0.7, 0.7, 0.7);

/// Standard shadow color (black with low opacity)
pub const SHADOW_COLOR: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.1);

/// Light gray border color for text inputs
pub const LIGHT_GRAY_BORDER: Color = Color::from_rgb(0.8, 0.8, 0.8);

/// Medium gray color for placeholders
pub const MEDIUM_GRAY: Color = Color::from_rgb(0.5, 0.5, 0.5);

/// Muted gray for inline field icons (#9ca3af)
pub const ICON_GRAY: Color = Color::from_rgb(0.612, 0.639, 0.686);

/// Very light gray background for disabled inputs
pub const VERY_LIGHT_GRAY: Color = Color::from_rgb(0.95, 0.95, 0.95);

/// Creates the PassField theme for a configured theme name
///
/// "system" follows the desktop color scheme as detected by iced.
pub fn create_theme(name: &str) -> Theme {
    let dark = match name {
        "dark" => true,
        "light" => false,
        _ => Theme::default() == Theme::Dark,
    };

    if dark {
        Theme::custom(
            "PassField Dark".to_string(),
            iced::theme::Palette {
                background: DARK_BACKGROUND,
                text: LIGHT_TEXT,
                primary: BRAND_PURPLE,
                success: SUCCESS_GREEN,
                danger: ERROR_RED,
            },
        )
    } else {
        Theme::custom(
            "PassField".to_string(),
            iced::theme::Palette {
                background: LIGHT_BACKGROUND,
                text: DARK_TEXT,
                primary: BRAND_PURPLE,
                success: SUCCESS_GREEN,
                danger: ERROR_RED,
            },
        )
    }
}

/// Custom button style functions
pub mod button_styles {
    use super::*;

    /// Primary button style using brand purple
    pub fn primary() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let (background, shadow_offset) = match status {
                button::Status::Active => (BRAND_PURPLE, 2.0),
                button::Status::Hovered => (BRAND_PURPLE_HOVER, 2.0),
                button::Status::Pressed => (BRAND_PURPLE_PRESSED, 1.0),
                button::Status::Disabled => return disabled_style(),
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: WHITE,
                border: Border {
                    color: background,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow {
                    color: SHADOW_COLOR,
                    offset: iced::Vector::new(0.0, shadow_offset),
                    blur_radius: shadow_offset * 2.0,
                },
            }
        }
    }

    /// Secondary button style with brand purple border
    pub fn secondary() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let background = match status {
                button::Status::Active => WHITE,
                button::Status::Hovered | button::Status::Pressed => BRAND_PURPLE_LIGHT,
                button::Status::Disabled => return disabled_style(),
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: BRAND_PURPLE,
                border: Border {
                    color: BRAND_PURPLE,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }

    /// Destructive button style using error red
    pub fn destructive() -> impl Fn(&Theme, button::Status) -> button::Style {
        |_theme, status| {
            let background = match status {
                button::Status::Active => ERROR_RED,
                button::Status::Hovered | button::Status::Pressed => ERROR_RED_HOVER,
                button::Status::Disabled => return disabled_style(),
            };

            button::Style {
                background: Some(Background::Color(background)),
                text_color: WHITE,
                border: Border {
                    color: background,
                    width: 1.0,
                    radius: utils::border_radius().into(),
                },
                shadow: Shadow::default(),
            }
        }
    }

    /// Ghost button: no background or border in any state
    ///
    /// Used for controls layered inside another widget, such as the password
    /// visibility toggle, where a hover background would cover the field.
    pub fn ghost() -> impl Fn(&Theme, button::Status) -> button::Style {
        |theme, status| button::Style {
            background: None,
            text_color: match status {
                button::Status::Disabled => DISABLED_TEXT,
                _ => theme.palette().text,
            },
            border: Border::default(),
            shadow: Shadow::default(),
        }
    }

    fn disabled_style() -> button::Style {
        button::Style {
            background: Some(Background::Color(DISABLED_BACKGROUND)),
            text_color: DISABLED_TEXT,
            border: Border {
                color: DISABLED_BORDER,
                width: 1.0,
                radius: utils::border_radius().into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Text input styles, selected from a field's class list
pub mod text_input_styles {
    use super::*;

    /// Border treatment requested by a field's classes
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum FieldBorder {
        /// `border` or `border-<n>`: gray border of the given width, purple
        /// when hovered or focused
        Standard(u16),
        /// `border-none`, `border-0` or no border token
        None,
        /// `invalid`: red border
        Invalid,
        /// `valid`: green border
        Valid,
    }

    impl FieldBorder {
        pub fn from_classes(classes: &ClassList) -> Self {
            if classes.contains("invalid") {
                FieldBorder::Invalid
            } else if classes.contains("valid") {
                FieldBorder::Valid
            } else if classes.contains("border") {
                FieldBorder::Standard(1)
            } else {
                match classes.value_of("border") {
                    Some("px") => FieldBorder::Standard(1),
                    Some(value) => match value.parse::<f32>() {
                        Ok(width) if width > 0.0 => FieldBorder::Standard(width.ceil() as u16),
                        _ => FieldBorder::None,
                    },
                    None => FieldBorder::None,
                }
            }
        }
    }

    /// Style function for a field with the given classes
    pub fn for_classes(
        classes: &ClassList,
    ) -> impl Fn(&Theme, text_input::Status) -> text_input::Style {
        let border = FieldBorder::from_classes(classes);
        move |_theme, status| styled(border, status)
    }

    fn styled(border: FieldBorder, status: text_input::Status) -> text_input::Style {
        let (border_color, border_width) = match (border, status) {
            (FieldBorder::None, _) => (TRANSPARENT, 0.0),
            (_, text_input::Status::Disabled) => (LIGHT_GRAY_BORDER, 1.0),
            (FieldBorder::Invalid, _) => (ERROR_RED, 2.0),
            (FieldBorder::Valid, _) => (SUCCESS_GREEN, 2.0),
            (FieldBorder::Standard(width), text_input::Status::Active) => {
                (LIGHT_GRAY_BORDER, f32::from(width))
            }
            (FieldBorder::Standard(width), text_input::Status::Hovered) => {
                (BRAND_PURPLE, f32::from(width))
            }
            (FieldBorder::Standard(width), text_input::Status::Focused) => {
                (BRAND_PURPLE, f32::from(width) + 1.0)
            }
        };

        let disabled = matches!(status, text_input::Status::Disabled);

        text_input::Style {
            background: Background::Color(if disabled { VERY_LIGHT_GRAY } else { WHITE }),
            border: Border {
                color: border_color,
                width: border_width,
                radius: utils::border_radius().into(),
            },
            icon: MEDIUM_GRAY,
            placeholder: MEDIUM_GRAY,
            value: if disabled { DISABLED_TEXT } else { DARK_TEXT },
            selection: if disabled { DISABLED_TEXT } else { BRAND_PURPLE },
        }
    }
}

/// SVG icon styles
pub mod svg_styles {
    use super::*;

    /// Muted gray for icons drawn inside fields
    pub fn muted() -> impl Fn(&Theme, svg::Status) -> svg::Style {
        |_theme, _status| svg::Style {
            color: Some(ICON_GRAY),
        }
    }
}

/// Container styles
pub mod container_styles {
    use super::*;

    /// Small dark bubble used for tooltips
    pub fn tooltip() -> impl Fn(&Theme) -> container::Style {
        |_theme| container::Style {
            text_color: Some(WHITE),
            background: Some(Background::Color(DARK_TEXT)),
            border: Border {
                color: DARK_TEXT,
                width: 1.0,
                radius: 6.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

/// Layout helpers shared by the primitives
pub mod utils {
    use iced::{Length, Padding};
    use passfield_shared::{ClassList, FieldSize};

    /// Pixels per spacing unit in class tokens (`pr-10` is 40px)
    pub const SPACING_UNIT: f32 = 4.0;

    /// Creates a consistent border radius for UI elements
    pub fn border_radius() -> f32 {
        10.0
    }

    /// Creates a consistent padding value for buttons
    pub fn button_padding() -> Padding {
        Padding::from([10, 20])
    }

    /// Creates a consistent padding value for small buttons
    pub fn small_button_padding() -> Padding {
        Padding::from([4, 8])
    }

    /// Creates a consistent padding value for large buttons
    pub fn large_button_padding() -> Padding {
        Padding::from([12, 32])
    }

    /// Creates a consistent padding value for text inputs
    pub fn text_input_padding() -> Padding {
        Padding::from([10, 15])
    }

    /// Padding for the password visibility toggle (`px-3 py-2`)
    pub fn password_toggle_padding() -> Padding {
        Padding::from([8, 12])
    }

    /// Creates a consistent padding value for main content areas
    pub fn main_content_padding() -> Padding {
        Padding::from([20, 30])
    }

    pub fn standard_spacing() -> u16 {
        20
    }

    fn spacing(classes: &ClassList, group: &str) -> Option<f32> {
        classes
            .value_of(group)
            .and_then(|value| value.parse::<f32>().ok())
            .map(|units| units * SPACING_UNIT)
    }

    /// Field padding: the text input default, overridden by `p-`, `px-`,
    /// `py-`, `pt-`, `pr-`, `pb-` and `pl-` tokens in that order
    pub fn field_padding(classes: &ClassList) -> Padding {
        let mut padding = text_input_padding();

        if let Some(all) = spacing(classes, "p") {
            padding = Padding::new(all);
        }
        if let Some(x) = spacing(classes, "px") {
            padding = padding.left(x).right(x);
        }
        if let Some(y) = spacing(classes, "py") {
            padding = padding.top(y).bottom(y);
        }
        if let Some(top) = spacing(classes, "pt") {
            padding = padding.top(top);
        }
        if let Some(right) = spacing(classes, "pr") {
            padding = padding.right(right);
        }
        if let Some(bottom) = spacing(classes, "pb") {
            padding = padding.bottom(bottom);
        }
        if let Some(left) = spacing(classes, "pl") {
            padding = padding.left(left);
        }

        padding
    }

    /// Field width from `w-` tokens; fields fill their row by default
    pub fn field_width(classes: &ClassList) -> Length {
        match classes.value_of("w") {
            Some("auto") => Length::Shrink,
            Some("px") => Length::Fixed(1.0),
            Some(value) => match value.parse::<f32>() {
                Ok(units) => Length::Fixed(units * SPACING_UNIT),
                Err(_) => Length::Fill,
            },
            None => Length::Fill,
        }
    }

    /// Text size from the size preset, overridden by `text-sm|lg|xl` tokens
    pub fn field_text_size(size: FieldSize, classes: &ClassList) -> f32 {
        let base = typography::text_input_size();
        match classes.value_of("text") {
            Some("xs") => base - 4.0,
            Some("sm") => base - 2.0,
            Some("lg") => base + 2.0,
            Some("xl") => base + 4.0,
            _ => match size {
                FieldSize::Small => base - 2.0,
                FieldSize::Medium => base,
                FieldSize::Large => base + 2.0,
            },
        }
    }

    /// Typography utilities for consistent font sizing
    pub mod typography {
        use std::sync::OnceLock;

        static FONT_SIZE: OnceLock<f32> = OnceLock::new();

        /// Initialize the global font size
        pub fn init_font_size(size: f32) {
            let _ = FONT_SIZE.set(size);
        }

        /// Get the base font size, defaulting to 14.0 if not set
        fn base_font_size() -> f32 {
            *FONT_SIZE.get().unwrap_or(&14.0)
        }

        pub fn normal_text_size() -> f32 {
            base_font_size()
        }

        pub fn text_input_size() -> f32 {
            base_font_size()
        }

        pub fn small_text_size() -> f32 {
            base_font_size() - 2.0
        }

        pub fn header_text_size() -> f32 {
            base_font_size() + 4.0
        }
    }
}
