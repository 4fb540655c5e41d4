//! Eventing - Capability to UI Event Channel

pub mod app_event;
