//! Ninja Login Client Library
//!
//! This crate provides the main application logic for the Ninja Login
//! client, a native login and onboarding UI demo.

pub mod app;
pub mod assets;
pub mod components;
pub mod domain;
pub mod eventing;
pub mod features;
pub mod i18n;
pub mod platform;
pub mod state;
pub mod theme;
pub mod utils;
