//! Onboarding Feature
//!
//! The screen shown after a submitted login. Hosts the platform greeting
//! demo component.

pub mod greeting;
pub mod page;
