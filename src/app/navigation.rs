//! Navigation - Screens and the Navigator Capability
//!
//! Defines the screens available in the application and the handle
//! feature controllers use to request a screen change.

use serde::{Deserialize, Serialize};

use crate::eventing::app_event::AppEvent;

/// Available screens in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Screen {
    /// Login / sign-up screen
    #[default]
    Login,
    /// Onboarding screen shown after a submitted login
    Onboarding,
}

/// Capability handle for requesting screen changes
///
/// Controllers receive a clone at construction time; the workspace owns the
/// receiving end and applies the change on the UI thread. Sending is
/// fire-and-forget.
#[derive(Clone)]
pub struct Navigator {
    tx: flume::Sender<AppEvent>,
}

impl Navigator {
    /// Create a navigator over the app event channel
    pub fn new(tx: flume::Sender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Request a switch to the given screen
    pub fn navigate(&self, screen: Screen) {
        tracing::info!(?screen, "navigation requested");
        let _ = self.tx.send(AppEvent::navigate(screen));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_screen_is_login() {
        assert_eq!(Screen::default(), Screen::Login);
    }

    #[test]
    fn test_navigate_sends_one_event() {
        let (tx, rx) = flume::unbounded();
        let navigator = Navigator::new(tx);

        navigator.navigate(Screen::Onboarding);

        assert_eq!(
            rx.try_recv().expect("no event sent"),
            AppEvent::Navigate {
                screen: Screen::Onboarding
            }
        );
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_navigate_without_receiver_does_not_panic() {
        let (tx, rx) = flume::unbounded();
        drop(rx);
        Navigator::new(tx).navigate(Screen::Login);
    }
}
