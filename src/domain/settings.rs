//! Settings - Persisted User Preferences

use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

/// User preferences persisted between launches
///
/// Form contents are never part of this record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI language
    #[serde(default)]
    pub locale: Locale,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_locale_is_english() {
        assert_eq!(AppSettings::default().locale, Locale::EnUS);
    }

    #[test]
    fn test_missing_locale_field_uses_default() {
        let settings: AppSettings = serde_json::from_str("{}").expect("parse failed");
        assert_eq!(settings.locale, Locale::EnUS);
    }
}
