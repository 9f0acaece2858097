//! Text field configuration shared by all PassField front ends
//!
//! [`FieldConfig`] is the full configuration surface of the generic text
//! field primitive. Host forms build one per render and hand it to either the
//! plain field or the password field. The password field rewrites only the
//! input mode and the native affordances; everything else passes through.

use crate::core::visibility::{MaskingMode, VisibilityState};
use crate::utils::class_list::ClassList;

/// Base style tokens applied to every password field before caller classes
pub const PASSWORD_FIELD_CLASSES: &str = "hide-password-toggle border pr-10";

/// Marker token telling the field primitive not to draw its own affordances
pub const HIDE_NATIVE_AFFORDANCES_CLASS: &str = "hide-password-toggle";

/// Mode selector of the text field primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    Password,
}

impl InputMode {
    pub fn is_secure(self) -> bool {
        matches!(self, InputMode::Password)
    }
}

impl From<MaskingMode> for InputMode {
    fn from(mode: MaskingMode) -> Self {
        match mode {
            MaskingMode::Masked => InputMode::Password,
            MaskingMode::Visible => InputMode::Text,
        }
    }
}

/// Field size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Pass-through configuration for a text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldConfig {
    pub placeholder: String,
    pub value: String,
    pub disabled: bool,
    pub mode: InputMode,
    /// Whether the primitive may draw its built-in trailing clear button
    pub clearable: bool,
    pub class: ClassList,
    pub size: FieldSize,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = value.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn mode(mut self, mode: InputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn clearable(mut self, clearable: bool) -> Self {
        self.clearable = clearable;
        self
    }

    /// Merge extra style tokens over the current ones
    pub fn class(mut self, classes: &str) -> Self {
        self.class = self.class.merge(&ClassList::parse(classes));
        self
    }

    pub fn size(mut self, size: FieldSize) -> Self {
        self.size = size;
        self
    }

    /// Whether the primitive should draw its own trailing affordances
    pub fn shows_native_affordances(&self) -> bool {
        self.clearable && !self.class.contains(HIDE_NATIVE_AFFORDANCES_CLASS)
    }

    /// Resolve this configuration for a password field in the given state
    ///
    /// The input mode follows the visibility flag, the password base classes
    /// go underneath the caller's classes, and native affordances are turned
    /// off. All other properties are returned untouched.
    pub fn for_password(&self, state: &VisibilityState) -> FieldConfig {
        FieldConfig {
            mode: state.mode().into(),
            clearable: false,
            class: ClassList::parse(PASSWORD_FIELD_CLASSES).merge(&self.class),
            ..self.clone()
        }
    }
}
