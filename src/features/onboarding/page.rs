//! Onboarding Page
//!
//! Welcome copy, the platform greeting demo, and a log-out link.

use std::sync::Arc;

use gpui::{
    div, prelude::*, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement,
    Render, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::{Navigator, Screen};
use crate::assets::AppIcon;
use crate::components::primitives::button::Button;
use crate::features::onboarding::greeting::GreetingState;
use crate::i18n::t;
use crate::platform::PlatformProvider;
use crate::theme::colors::NinjaColors;
use crate::theme::tokens::{Size, Typography};

/// Onboarding page component
pub struct OnboardingPage {
    entities: AppEntities,
    navigator: Navigator,
    platform: Arc<dyn PlatformProvider>,
    greeting: GreetingState,
}

impl OnboardingPage {
    pub fn new(
        entities: AppEntities,
        navigator: Navigator,
        platform: Arc<dyn PlatformProvider>,
        cx: &mut Context<Self>,
    ) -> Self {
        // Re-render on locale changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self {
            entities,
            navigator,
            platform,
            greeting: GreetingState::default(),
        }
    }
}

impl Render for OnboardingPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let greeting_label = SharedString::from(self.greeting.label.clone());

        let mut page = div()
            .id("onboarding-page")
            .size_full()
            .flex()
            .flex_col()
            .items_center()
            .overflow_y_scroll()
            .bg(NinjaColors::background())
            .px(px(Size::PADDING_HORIZONTAL))
            .py(px(Size::PADDING_VERTICAL))
            .gap(px(10.0))
            .child(
                div()
                    .text_color(NinjaColors::text_primary())
                    .text_size(px(Typography::TEXT_2XL))
                    .child(t(locale, "onboarding-title")),
            )
            .child(
                div()
                    .text_color(NinjaColors::text_secondary())
                    .text_size(px(Typography::TEXT_BASE))
                    .child(t(locale, "onboarding-subtitle")),
            )
            .child(
                Button::primary("greeting-btn", greeting_label).on_click(cx.listener(
                    |this, _event: &ClickEvent, _window, cx| {
                        let platform_name = this.platform.platform_name();
                        this.greeting = this.greeting.clone().toggled(&platform_name);
                        cx.notify();
                    },
                )),
            );

        if self.greeting.image_visible {
            page = page.child(
                Icon::from(AppIcon::GreetingArtwork)
                    .w(px(128.0))
                    .h(px(128.0)),
            );
        }

        page.child(
            Button::link("log-out-btn", t(locale, "onboarding-log-out")).on_click(cx.listener(
                |this, _event: &ClickEvent, _window, _cx| {
                    this.navigator.navigate(Screen::Login);
                },
            )),
        )
    }
}
