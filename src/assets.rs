//! Embedded assets for Ninja Login
//!
//! Uses rust-embed to bundle icons and other assets at compile time.

use gpui::{AssetSource, Result, SharedString};
use gpui_component::Icon;
use gpui_component_assets::Assets as ComponentAssets;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// Embedded assets from the assets directory
#[derive(RustEmbed)]
#[folder = "assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }
        // Try component assets first
        if let Some(f) = ComponentAssets::get(path) {
            return Ok(Some(f.data));
        }
        // Then try our own assets
        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow::anyhow!(r#"could not find asset at path "{path}""#))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        let mut files: Vec<SharedString> = ComponentAssets::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect();

        files.extend(
            Self::iter()
                .filter_map(|p| p.starts_with(path).then(|| p.into()))
                .collect::<Vec<_>>(),
        );

        Ok(files)
    }
}

/// Icon catalog for the app
///
/// Each key resolves to an embedded SVG and an accessible description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppIcon {
    /// Brand logo shown on the login screen
    Logo,
    /// Profile silhouette (name field)
    Profile,
    /// Envelope (email field)
    Mail,
    /// Padlock (password field)
    Lock,
    /// Open eye (password hidden, tap to reveal)
    Visibility,
    /// Crossed-out eye (password revealed, tap to hide)
    VisibilityOff,
    /// Facebook sign-in tile
    Facebook,
    /// Google sign-in tile
    Google,
    /// Artwork revealed by the greeting demo
    GreetingArtwork,
}

impl AppIcon {
    /// Get the SVG path for this icon
    pub fn path(self) -> SharedString {
        match self {
            AppIcon::Logo => "icons/logo.svg",
            AppIcon::Profile => "icons/profile.svg",
            AppIcon::Mail => "icons/mail.svg",
            AppIcon::Lock => "icons/lock.svg",
            AppIcon::Visibility => "icons/visibility.svg",
            AppIcon::VisibilityOff => "icons/visibility-off.svg",
            AppIcon::Facebook => "icons/facebook.svg",
            AppIcon::Google => "icons/google.svg",
            AppIcon::GreetingArtwork => "icons/greeting-artwork.svg",
        }
        .into()
    }

    /// Accessible description for this icon
    pub fn description(self) -> SharedString {
        match self {
            AppIcon::Logo => "Ninja Login logo",
            AppIcon::Profile => "Name",
            AppIcon::Mail => "Email address",
            AppIcon::Lock => "Password",
            AppIcon::Visibility => "Show password",
            AppIcon::VisibilityOff => "Hide password",
            AppIcon::Facebook => "Continue with Facebook",
            AppIcon::Google => "Continue with Google",
            AppIcon::GreetingArtwork => "Greeting artwork",
        }
        .into()
    }
}

impl From<AppIcon> for Icon {
    fn from(val: AppIcon) -> Self {
        Icon::empty().path(val.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_is_embedded() {
        let icons = [
            AppIcon::Logo,
            AppIcon::Profile,
            AppIcon::Mail,
            AppIcon::Lock,
            AppIcon::Visibility,
            AppIcon::VisibilityOff,
            AppIcon::Facebook,
            AppIcon::Google,
            AppIcon::GreetingArtwork,
        ];
        for icon in icons {
            assert!(
                Assets::get(icon.path().as_ref()).is_some(),
                "missing embedded asset for {:?}",
                icon
            );
            assert!(!icon.description().is_empty());
        }
    }
}
