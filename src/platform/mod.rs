//! Platform - Host Platform Queries
//!
//! Injected capability for components that want to know which platform
//! they are running on.

/// Zero-argument, side-effect-free query for a human-readable platform name
pub trait PlatformProvider: Send + Sync {
    /// Name of the platform the app is running on, e.g. "Linux"
    fn platform_name(&self) -> String;
}

/// Provider backed by the compile-time target OS
pub struct NativePlatform;

impl PlatformProvider for NativePlatform {
    fn platform_name(&self) -> String {
        match std::env::consts::OS {
            "macos" => "macOS".to_string(),
            "windows" => "Windows".to_string(),
            "linux" => "Linux".to_string(),
            "android" => "Android".to_string(),
            "ios" => "iOS".to_string(),
            other => capitalize(other),
        }
    }
}

/// Uppercase the first ASCII letter of an OS identifier
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_platform_name_is_not_empty() {
        assert!(!NativePlatform.platform_name().is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("freebsd"), "Freebsd");
        assert_eq!(capitalize(""), "");
    }
}
