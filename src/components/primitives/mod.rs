//! Primitive Components
//!
//! Buttons, checkboxes, and text inputs styled for the Ninja theme.

pub mod button;
pub mod checkbox;
pub mod text_input;
