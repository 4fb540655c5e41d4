//! Theme - Colors and Design Tokens

pub mod colors;
pub mod tokens;
