//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.

use gpui::{App, AppContext, Entity, Global};

use crate::i18n::Locale;
use crate::state::{i18n_state::I18nState, router_state::RouterState};

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Navigation host state
    pub router: Entity<RouterState>,
    /// Internationalization state
    pub i18n: Entity<I18nState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities
    pub fn init(locale: Locale, cx: &mut App) -> Self {
        Self {
            router: cx.new(|_| RouterState::default()),
            i18n: cx.new(|_| I18nState::new(locale)),
        }
    }
}
