//! I18nState - Internationalization State

use crate::i18n::Locale;

/// State for internationalization
#[derive(Debug, Clone, Default)]
pub struct I18nState {
    /// Current locale
    pub locale: Locale,
}

impl I18nState {
    /// Create a state with the given locale
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Toggle between English and Chinese
    pub fn toggle_locale(&mut self) {
        self.locale = match self.locale {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_locale_round_trips() {
        let mut state = I18nState::default();
        assert_eq!(state.locale, Locale::EnUS);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::ZhCN);
        state.toggle_locale();
        assert_eq!(state.locale, Locale::EnUS);
    }
}
