//! Workspace - Main Shell with Layout and Event Pump
//!
//! The workspace holds the header and the active screen, and runs the event
//! pump that bridges capability events to UI updates.

use std::sync::Arc;

use gpui::{
    div, prelude::*, App, Context, Entity, IntoElement, ParentElement, Render, Styled, Window,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::{Navigator, Screen};
use crate::components::layout::header::Header;
use crate::eventing::app_event::AppEvent;
use crate::features::login::page::LoginPage;
use crate::features::onboarding::page::OnboardingPage;
use crate::platform::PlatformProvider;
use crate::theme::colors::NinjaColors;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    navigator: Navigator,
    platform: Arc<dyn PlatformProvider>,
    header: Entity<Header>,
    // Screen views; only the active screen is kept alive so that form state
    // is discarded when navigation occurs
    login_page: Option<Entity<LoginPage>>,
    onboarding_page: Option<Entity<OnboardingPage>>,
}

impl Workspace {
    pub fn new(
        entities: AppEntities,
        navigator: Navigator,
        platform: Arc<dyn PlatformProvider>,
        event_rx: flume::Receiver<AppEvent>,
        cx: &mut Context<Self>,
    ) -> Self {
        let header = cx.new(|cx| Header::new(entities.clone(), cx));

        // Start event pump
        Self::start_event_pump(event_rx, entities.clone(), cx);

        // Re-render when the active screen changes
        cx.observe(&entities.router, |_this, _, cx| {
            cx.notify();
        })
        .detach();

        Self {
            entities,
            navigator,
            platform,
            header,
            login_page: None,
            onboarding_page: None,
        }
    }

    /// Start the event pump that dispatches capability events to UI
    fn start_event_pump(
        event_rx: flume::Receiver<AppEvent>,
        entities: AppEntities,
        cx: &mut Context<Self>,
    ) {
        cx.spawn(async move |_this, cx| {
            while let Ok(event) = event_rx.recv_async().await {
                let entities = entities.clone();
                let _ = cx.update(|cx: &mut App| {
                    dispatch_event(event, &entities, cx);
                });
            }
        })
        .detach();
    }

    /// Get the view for the active screen, creating it on first use and
    /// dropping the inactive screen's view
    fn active_page(&mut self, screen: Screen, cx: &mut Context<Self>) -> impl IntoElement + use<> {
        match screen {
            Screen::Login => {
                self.onboarding_page = None;
                let page = match &self.login_page {
                    Some(page) => page.clone(),
                    None => {
                        let page = cx.new(|cx| {
                            LoginPage::new(self.entities.clone(), self.navigator.clone(), cx)
                        });
                        self.login_page = Some(page.clone());
                        page
                    }
                };
                page.into_any_element()
            }
            Screen::Onboarding => {
                self.login_page = None;
                let page = match &self.onboarding_page {
                    Some(page) => page.clone(),
                    None => {
                        let page = cx.new(|cx| {
                            OnboardingPage::new(
                                self.entities.clone(),
                                self.navigator.clone(),
                                self.platform.clone(),
                                cx,
                            )
                        });
                        self.onboarding_page = Some(page.clone());
                        page
                    }
                };
                page.into_any_element()
            }
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let screen = self.entities.router.read(cx).screen;
        let content = self.active_page(screen, cx);

        div()
            .size_full()
            .flex()
            .flex_col()
            .bg(NinjaColors::background())
            .child(
                // Header
                self.header.clone(),
            )
            .child(
                // Active screen
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .overflow_hidden()
                    .child(content),
            )
    }
}

/// Dispatch an AppEvent to the appropriate entity
fn dispatch_event(event: AppEvent, entities: &AppEntities, cx: &mut App) {
    match event {
        AppEvent::Navigate { screen } => {
            entities.router.update(cx, |router, cx| {
                if router.navigate(screen) {
                    cx.notify();
                }
            });
        }
    }
}
