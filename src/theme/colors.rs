//! Colors - Ninja Theme Palette

use gpui::{rgb, Rgba};

/// Ninja color palette - All colors are accessed via associated functions
pub struct NinjaColors;

impl NinjaColors {
    // Primary colors
    /// Primary accent - Indigo (for the main action button)
    pub fn accent() -> Rgba { rgb(0x5b4dbe) }
    /// Accent hover shade
    pub fn accent_hover() -> Rgba { rgb(0x4c3fa8) }
    /// Link text - lighter indigo
    pub fn link() -> Rgba { rgb(0x7b6cf0) }

    // Background colors
    /// Screen background
    pub fn background() -> Rgba { rgb(0x1d1a33) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0x16132a) }
    /// Raised surface (social tiles, cards)
    pub fn surface() -> Rgba { rgb(0x2a2647) }
    /// Surface hover shade
    pub fn surface_hover() -> Rgba { rgb(0x343059) }

    // Text colors
    /// Primary text on dark backgrounds
    pub fn text_primary() -> Rgba { rgb(0xf4f2ff) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0xa49fc4) }
    /// Text on the accent button
    pub fn text_on_accent() -> Rgba { rgb(0xffffff) }

    // Input colors
    /// Input background
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    /// Input text
    pub fn input_text() -> Rgba { rgb(0x1f2937) }
    /// Input placeholder
    pub fn input_placeholder() -> Rgba { rgb(0x9ca3af) }
    /// Focused input border
    pub fn input_border_focus() -> Rgba { rgb(0x7b6cf0) }

    // Checkbox colors
    /// Checked checkbox fill
    pub fn checkbox_checked() -> Rgba { rgb(0x7b6cf0) }
    /// Unchecked checkbox border
    pub fn checkbox_border() -> Rgba { rgb(0x6b6590) }

    // Border colors
    /// Hairline border on dark surfaces
    pub fn border() -> Rgba { rgb(0x3a3560) }
}
