//! Design Tokens - Shared Sizes and Type Scale

/// Layout and sizing tokens shared across screens
pub struct Size;

impl Size {
    /// Brand logo dimensions
    pub const LOGO_WIDTH: f32 = 175.0;
    pub const LOGO_HEIGHT: f32 = 139.0;

    /// Primary action button dimensions
    pub const BUTTON_HEIGHT: f32 = 60.0;
    pub const BUTTON_WIDTH: f32 = 160.0;

    /// Screen-level content padding
    pub const PADDING_HORIZONTAL: f32 = 15.0;
    pub const PADDING_VERTICAL: f32 = 20.0;

    /// Rounded corner radius for fields and buttons
    pub const CORNER_RADIUS: f32 = 15.0;

    /// Height of the social sign-in tiles
    pub const SOCIAL_TILE_HEIGHT: f32 = 55.0;
}

/// Font size scale
pub struct Typography;

impl Typography {
    pub const TEXT_XS: f32 = 12.0;
    pub const TEXT_SM: f32 = 14.0;
    pub const TEXT_BASE: f32 = 16.0;
    pub const TEXT_LG: f32 = 18.0;
    pub const TEXT_XL: f32 = 20.0;
    pub const TEXT_2XL: f32 = 24.0;
}
