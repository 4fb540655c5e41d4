//! Login Controller
//!
//! Owns the navigation capability and handles form submission.

use crate::app::navigation::{Navigator, Screen};
use crate::features::login::form::FormState;

/// Login page controller
pub struct LoginController {
    navigator: Navigator,
}

impl LoginController {
    /// Create a new controller
    pub fn new(navigator: Navigator) -> Self {
        Self { navigator }
    }

    /// Submit the form
    ///
    /// Issues exactly one navigation to the onboarding screen, for both
    /// modes and without inspecting field contents. Nothing is validated,
    /// persisted, or transmitted.
    pub fn submit(&self, form: &FormState) {
        tracing::info!(mode = ?form.mode, "form submitted");
        self.navigator.navigate(Screen::Onboarding);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eventing::app_event::AppEvent;
    use crate::features::login::form::{FormEvent, FormState};

    fn controller() -> (LoginController, flume::Receiver<AppEvent>) {
        let (tx, rx) = flume::unbounded();
        (LoginController::new(Navigator::new(tx)), rx)
    }

    #[test]
    fn test_submit_navigates_once_to_onboarding() {
        let (controller, rx) = controller();

        controller.submit(&FormState::default());

        assert_eq!(
            rx.try_recv().expect("no navigation issued"),
            AppEvent::Navigate {
                screen: Screen::Onboarding
            }
        );
        assert!(rx.try_recv().is_err(), "more than one navigation issued");
    }

    #[test]
    fn test_submit_ignores_mode_and_field_contents() {
        let (controller, rx) = controller();

        let filled = FormState::default()
            .apply(FormEvent::ToggleMode)
            .apply(FormEvent::SetName("Yamada".into()))
            .apply(FormEvent::SetEmail("yamada@example.com".into()))
            .apply(FormEvent::SetPassword("hunter2".into()));
        controller.submit(&filled);

        assert_eq!(
            rx.try_recv().expect("no navigation issued"),
            AppEvent::Navigate {
                screen: Screen::Onboarding
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_submit_with_all_empty_fields_still_navigates() {
        let (controller, rx) = controller();

        controller.submit(&FormState::default());

        assert!(rx.try_recv().is_ok());
    }
}
