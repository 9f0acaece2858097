//! Password Visibility Integration Test
//!
//! Drives the visibility state and the password field configuration together
//! the way a front end does on every render, checking that the field mode,
//! the toggle icon and the accessible label always agree.

use passfield_shared::{
    FieldConfig, InputMode, MaskingMode, ToggleIcon, VisibilityState, HIDE_PASSWORD_LABEL,
    SHOW_PASSWORD_LABEL,
};

/// Everything a front end derives from the flag in one render pass
#[derive(Debug, PartialEq)]
struct RenderedField {
    mode: InputMode,
    icon: ToggleIcon,
    label: &'static str,
    placeholder: String,
    disabled: bool,
}

fn render(config: &FieldConfig, state: &VisibilityState) -> RenderedField {
    let field = config.for_password(state);
    RenderedField {
        mode: field.mode,
        icon: state.icon(),
        label: state.toggle_label(),
        placeholder: field.placeholder,
        disabled: field.disabled,
    }
}

#[test]
fn test_click_sequence_scenario() {
    let config = FieldConfig::new().placeholder("Password");
    let mut state = VisibilityState::new();

    let initial = render(&config, &state);
    assert_eq!(initial.mode, InputMode::Password);
    assert_eq!(initial.label, SHOW_PASSWORD_LABEL);
    assert_eq!(initial.icon, ToggleIcon::EyeOff);

    state.toggle();
    let revealed = render(&config, &state);
    assert_eq!(revealed.mode, InputMode::Text);
    assert_eq!(revealed.label, HIDE_PASSWORD_LABEL);
    assert_eq!(revealed.icon, ToggleIcon::Eye);

    state.toggle();
    assert_eq!(render(&config, &state), initial);
}

#[test]
fn test_mode_icon_and_label_never_disagree() {
    let config = FieldConfig::new();
    let mut state = VisibilityState::new();

    for activations in 0..32 {
        let rendered = render(&config, &state);
        match state.mode() {
            MaskingMode::Masked => {
                assert_eq!(rendered.mode, InputMode::Password);
                assert_eq!(rendered.icon, ToggleIcon::EyeOff);
                assert_eq!(rendered.label, SHOW_PASSWORD_LABEL);
                assert_eq!(activations % 2, 0);
            }
            MaskingMode::Visible => {
                assert_eq!(rendered.mode, InputMode::Text);
                assert_eq!(rendered.icon, ToggleIcon::Eye);
                assert_eq!(rendered.label, HIDE_PASSWORD_LABEL);
                assert_eq!(activations % 2, 1);
            }
        }
        state.toggle();
    }
}

#[test]
fn test_configuration_survives_toggling() {
    let config = FieldConfig::new()
        .placeholder("Master passphrase")
        .disabled(true)
        .class("w-full");
    let mut state = VisibilityState::new();

    for _ in 0..3 {
        let rendered = render(&config, &state);
        assert_eq!(rendered.placeholder, "Master passphrase");
        assert!(rendered.disabled);
        assert!(config.for_password(&state).class.contains("w-full"));
        state.toggle();
    }
}

#[test]
fn test_remount_starts_masked() {
    let mut mounted = VisibilityState::new();
    mounted.toggle();
    assert!(mounted.is_visible());

    let remounted = VisibilityState::new();
    assert!(!remounted.is_visible());
    assert_eq!(remounted.toggle_label(), SHOW_PASSWORD_LABEL);
}
