//! Form Core - Login/Sign-up Interaction State
//!
//! A plain state record plus a pure transition function. Rendering and
//! notification are the page's concern; nothing in here touches GPUI.

/// Which variant of the form is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    /// Existing-account login
    #[default]
    Login,
    /// New-account sign-up
    SignUp,
}

impl FormMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            FormMode::Login => FormMode::SignUp,
            FormMode::SignUp => FormMode::Login,
        }
    }
}

/// Local state of one form session
///
/// Created fresh when the screen is shown and dropped with it; nothing here
/// is persisted or transmitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Active form variant
    pub mode: FormMode,
    /// Display name (sign-up only)
    pub name: String,
    /// Email address
    pub email: String,
    /// Password, masked by default
    pub password: String,
    /// Whether the password renders as plaintext
    pub password_visible: bool,
    /// Persistent-session opt-in (sign-up only)
    pub keep_signed_in: bool,
    /// Marketing-email opt-in (sign-up only)
    pub email_opt_in: bool,
}

/// User input events the form reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Switch between login and sign-up; entered values are kept
    ToggleMode,
    /// Replace the name field contents
    SetName(String),
    /// Replace the email field contents
    SetEmail(String),
    /// Replace the password field contents
    SetPassword(String),
    /// Flip plaintext rendering of the password
    TogglePasswordVisibility,
    /// Flip the persistent-session opt-in
    ToggleKeepSignedIn,
    /// Flip the marketing-email opt-in
    ToggleEmailOptIn,
}

impl FormState {
    /// Apply one input event, yielding the next state
    ///
    /// Every transition is total; no validation happens here.
    pub fn apply(mut self, event: FormEvent) -> Self {
        match event {
            FormEvent::ToggleMode => self.mode = self.mode.toggled(),
            FormEvent::SetName(name) => self.name = name,
            FormEvent::SetEmail(email) => self.email = email,
            FormEvent::SetPassword(password) => self.password = password,
            FormEvent::TogglePasswordVisibility => {
                self.password_visible = !self.password_visible
            }
            FormEvent::ToggleKeepSignedIn => self.keep_signed_in = !self.keep_signed_in,
            FormEvent::ToggleEmailOptIn => self.email_opt_in = !self.email_opt_in,
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = FormState::default();
        assert_eq!(form.mode, FormMode::Login);
        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.password, "");
        assert!(!form.password_visible);
        assert!(!form.keep_signed_in);
        assert!(!form.email_opt_in);
    }

    #[test]
    fn test_mode_toggle_parity() {
        let mut form = FormState::default();
        for round in 1..=7 {
            form = form.apply(FormEvent::ToggleMode);
            let expected = if round % 2 == 1 {
                FormMode::SignUp
            } else {
                FormMode::Login
            };
            assert_eq!(form.mode, expected, "after {round} toggles");
        }
    }

    #[test]
    fn test_mode_toggle_keeps_entered_values() {
        let form = FormState::default()
            .apply(FormEvent::SetName("Yamada".into()))
            .apply(FormEvent::SetEmail("yamada@example.com".into()))
            .apply(FormEvent::SetPassword("hunter2".into()))
            .apply(FormEvent::ToggleMode);
        assert_eq!(form.name, "Yamada");
        assert_eq!(form.email, "yamada@example.com");
        assert_eq!(form.password, "hunter2");
    }

    #[test]
    fn test_field_edit_reads_back_exactly() {
        for value in ["", "plain", "söme 特殊 ✓ chars\n\t", "  spaced  "] {
            let form = FormState::default().apply(FormEvent::SetEmail(value.into()));
            assert_eq!(form.email, value);

            let form = form.apply(FormEvent::SetName(value.into()));
            assert_eq!(form.name, value);

            let form = form.apply(FormEvent::SetPassword(value.into()));
            assert_eq!(form.password, value);
        }
    }

    #[test]
    fn test_visibility_double_toggle_leaves_password_untouched() {
        let form = FormState::default().apply(FormEvent::SetPassword("s3cret!".into()));
        let once = form.clone().apply(FormEvent::TogglePasswordVisibility);
        assert!(once.password_visible);
        assert_eq!(once.password, "s3cret!");

        let twice = once.apply(FormEvent::TogglePasswordVisibility);
        assert!(!twice.password_visible);
        assert_eq!(twice, form);
    }

    #[test]
    fn test_checkbox_toggles_are_independent() {
        for (keep, opt_in) in [(false, false), (false, true), (true, false), (true, true)] {
            let mut start = FormState::default();
            start.keep_signed_in = keep;
            start.email_opt_in = opt_in;

            let after = start.clone().apply(FormEvent::ToggleKeepSignedIn);
            assert_eq!(after.keep_signed_in, !keep);
            assert_eq!(after.email_opt_in, opt_in);

            let after = start.apply(FormEvent::ToggleEmailOptIn);
            assert_eq!(after.email_opt_in, !opt_in);
            assert_eq!(after.keep_signed_in, keep);
        }
    }
}
