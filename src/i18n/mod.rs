//! i18n - Internationalization Module
//!
//! Provides simple translation functions using HashMap-based lookups.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    EnUS,
    /// Chinese (Simplified)
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // App
    map.insert("app-title", ("Ninja Login", "忍者登录"));

    // Login screen
    map.insert("login-title", ("Login To Your Account", "登录您的账户"));
    map.insert("signup-title", ("Sign Up For Free", "免费注册"));
    map.insert("field-name", ("Name", "姓名"));
    map.insert("field-email", ("Email", "邮箱"));
    map.insert("field-password", ("Password", "密码"));
    map.insert("login-continue-with", ("Or continue with", "或通过以下方式继续"));
    map.insert("social-facebook", ("Facebook", "Facebook"));
    map.insert("social-google", ("Google", "Google"));
    map.insert("login-forgot-password", ("Forgot Your Password?", "忘记密码？"));
    map.insert("check-keep-signed-in", ("Keep Me Signed In", "保持登录状态"));
    map.insert(
        "check-email-offers",
        ("Email Me About Special Pricing", "向我发送特价信息"),
    );
    map.insert("action-login", ("Login", "登录"));
    map.insert("action-create-account", ("Create Account", "创建账户"));
    map.insert("login-switch-to-signup", ("Create an account!", "创建一个账户！"));
    map.insert("login-switch-to-login", ("Already have an account?", "已经有账户了？"));

    // Onboarding screen
    map.insert("onboarding-title", ("Welcome Aboard", "欢迎加入"));
    map.insert(
        "onboarding-subtitle",
        ("You are all set. Have a look around.", "一切就绪，随便看看吧。"),
    );
    map.insert("onboarding-log-out", ("Log Out", "退出登录"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(t(Locale::EnUS, "action-login"), "Login");
        assert_eq!(t(Locale::ZhCN, "action-login"), "登录");
    }

    #[test]
    fn test_unknown_key_falls_back_to_key() {
        assert_eq!(t(Locale::EnUS, "no-such-key"), "no-such-key");
    }
}
