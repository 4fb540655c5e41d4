//! Greeting Core - Platform Greeting Demo State
//!
//! A label and an artwork-visibility flag, both driven by a single toggle
//! action. Pure state; the page owns rendering.

/// Local state of the greeting component
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingState {
    /// Button label; starts as a plain hello and embeds the platform name
    /// after the first toggle
    pub label: String,
    /// Whether the artwork below the button is shown
    pub image_visible: bool,
}

impl Default for GreetingState {
    fn default() -> Self {
        Self {
            label: "Hello, World!".to_string(),
            image_visible: false,
        }
    }
}

impl GreetingState {
    /// Apply one toggle action
    ///
    /// The platform name is re-queried by the caller on every toggle; an
    /// empty name is fine and simply yields `"Hello, "`.
    pub fn toggled(mut self, platform_name: &str) -> Self {
        self.label = format!("Hello, {platform_name}");
        self.image_visible = !self.image_visible;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformProvider;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakePlatform {
        name: &'static str,
        queries: AtomicUsize,
    }

    impl FakePlatform {
        fn new(name: &'static str) -> Self {
            Self {
                name,
                queries: AtomicUsize::new(0),
            }
        }
    }

    impl PlatformProvider for FakePlatform {
        fn platform_name(&self) -> String {
            self.queries.fetch_add(1, Ordering::SeqCst);
            self.name.to_string()
        }
    }

    #[test]
    fn test_initial_state() {
        let state = GreetingState::default();
        assert_eq!(state.label, "Hello, World!");
        assert!(!state.image_visible);
    }

    #[test]
    fn test_toggle_queries_provider_each_time() {
        let provider = FakePlatform::new("Android");
        let mut state = GreetingState::default();

        state = state.toggled(&provider.platform_name());
        assert_eq!(state.label, "Hello, Android");
        assert!(state.image_visible);

        state = state.toggled(&provider.platform_name());
        assert_eq!(state.label, "Hello, Android");
        assert!(!state.image_visible);

        assert_eq!(provider.queries.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_empty_platform_name_is_accepted() {
        let state = GreetingState::default().toggled("");
        assert_eq!(state.label, "Hello, ");
        assert!(state.image_visible);
    }
}
