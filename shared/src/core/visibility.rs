//! Password visibility state for PassField
//!
//! A password field has exactly two presentation modes. The field's masking
//! mode, the toggle icon and the toggle's accessible label are all derived
//! from one [`VisibilityState`] so they can never disagree.

/// Accessible label announced while the password is masked
pub const SHOW_PASSWORD_LABEL: &str = "Show password";

/// Accessible label announced while the password is in plain text
pub const HIDE_PASSWORD_LABEL: &str = "Hide password";

/// How the field's value is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskingMode {
    /// Value is rendered with mask characters
    #[default]
    Masked,
    /// Value is rendered as plain text
    Visible,
}

impl MaskingMode {
    /// Whether the text field should be drawn in secure (masked) mode
    pub fn is_secure(self) -> bool {
        matches!(self, MaskingMode::Masked)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MaskingMode::Masked => "masked",
            MaskingMode::Visible => "visible",
        }
    }
}

/// Icon shown on the visibility toggle
///
/// The icon describes the current state, not the action: an open eye means
/// the password is currently readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleIcon {
    Eye,
    EyeOff,
}

/// The visibility flag owned by a single password field instance
///
/// `Default` is the masked state. A remounted field gets a new state and so
/// always starts masked; nothing here is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    visible: bool,
}

impl VisibilityState {
    /// Create a masked visibility state
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the flag and return the new masking mode
    pub fn toggle(&mut self) -> MaskingMode {
        self.visible = !self.visible;
        self.mode()
    }

    /// Whether the plaintext is currently shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> MaskingMode {
        if self.visible {
            MaskingMode::Visible
        } else {
            MaskingMode::Masked
        }
    }

    /// Icon representing the current state
    pub fn icon(&self) -> ToggleIcon {
        if self.visible {
            ToggleIcon::Eye
        } else {
            ToggleIcon::EyeOff
        }
    }

    /// Accessible text describing what activating the toggle will do next
    pub fn toggle_label(&self) -> &'static str {
        if self.visible {
            HIDE_PASSWORD_LABEL
        } else {
            SHOW_PASSWORD_LABEL
        }
    }

    /// State reached from a fresh mount after `activations` toggles
    pub fn after_activations(activations: usize) -> Self {
        Self {
            visible: activations % 2 == 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_masked() {
        let state = VisibilityState::default();
        assert!(!state.is_visible());
        assert_eq!(state.mode(), MaskingMode::Masked);
        assert!(state.mode().is_secure());
        assert_eq!(state.icon(), ToggleIcon::EyeOff);
        assert_eq!(state.toggle_label(), "Show password");
    }

    #[test]
    fn test_toggle_flips_everything_together() {
        let mut state = VisibilityState::new();

        assert_eq!(state.toggle(), MaskingMode::Visible);
        assert!(!state.mode().is_secure());
        assert_eq!(state.icon(), ToggleIcon::Eye);
        assert_eq!(state.toggle_label(), "Hide password");

        assert_eq!(state.toggle(), MaskingMode::Masked);
        assert_eq!(state, VisibilityState::new());
    }

    #[test]
    fn test_parity_of_activations() {
        let mut state = VisibilityState::new();
        for n in 0..16 {
            assert_eq!(state, VisibilityState::after_activations(n));
            let expected = if n % 2 == 0 {
                MaskingMode::Masked
            } else {
                MaskingMode::Visible
            };
            assert_eq!(state.mode(), expected, "after {n} activations");
            state.toggle();
        }
    }

    #[test]
    fn test_label_and_icon_are_opposite() {
        for n in 0..4 {
            let state = VisibilityState::after_activations(n);
            match state.icon() {
                ToggleIcon::Eye => assert_eq!(state.toggle_label(), HIDE_PASSWORD_LABEL),
                ToggleIcon::EyeOff => assert_eq!(state.toggle_label(), SHOW_PASSWORD_LABEL),
            }
        }
    }

    #[test]
    fn test_masking_mode_defaults() {
        assert_eq!(MaskingMode::default(), MaskingMode::Masked);
        assert!(MaskingMode::Masked.is_secure());
        assert!(!MaskingMode::Visible.is_secure());
        assert_eq!(MaskingMode::Visible.as_str(), "visible");
    }
}
