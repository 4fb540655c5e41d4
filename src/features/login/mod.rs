//! Login Feature
//!
//! The login/sign-up screen: a pure interaction core, a thin controller
//! owning the navigation capability, and the GPUI page.

pub mod controller;
pub mod form;
pub mod page;
