//! AppEvent - Application Event Enum
//!
//! All events that capability objects can send back to the UI layer.

use crate::app::navigation::Screen;

/// Application events for capability -> UI communication
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A screen change was requested
    Navigate {
        /// Screen to switch to
        screen: Screen,
    },
}

impl AppEvent {
    /// Create a navigation event
    pub fn navigate(screen: Screen) -> Self {
        Self::Navigate { screen }
    }
}
