//! Header Component
//!
//! The application header with logo, title, and language switcher.

use gpui::{
    div, px, ClickEvent, Context, InteractiveElement, IntoElement, ParentElement, Render,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::assets::AppIcon;
use crate::domain::settings::AppSettings;
use crate::i18n::t;
use crate::theme::colors::NinjaColors;
use crate::theme::tokens::Typography;
use crate::utils::config_store;

/// Header component
pub struct Header {
    entities: AppEntities,
}

impl Header {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        // Observe i18n changes
        cx.observe(&entities.i18n, |_this, _, cx| cx.notify())
            .detach();

        Self { entities }
    }
}

impl Render for Header {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let title = t(locale, "app-title");
        let lang_label = locale.display_name();

        let entities = self.entities.clone();

        div()
            .h(px(48.0))
            .w_full()
            .bg(NinjaColors::header_bg())
            .border_b_1()
            .border_color(NinjaColors::border())
            .flex()
            .items_center()
            .justify_between()
            .px_4()
            // Left side: Logo and title
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_3()
                    .child(Icon::from(AppIcon::Logo).w(px(28.0)).h(px(22.0)))
                    .child(
                        div()
                            .text_color(NinjaColors::text_primary())
                            .text_size(px(Typography::TEXT_LG))
                            .font_weight(gpui::FontWeight::SEMIBOLD)
                            .child(title),
                    ),
            )
            // Right side: Language switcher
            .child(
                div()
                    .id("lang-switcher")
                    .px_3()
                    .py_1()
                    .rounded_md()
                    .bg(NinjaColors::surface())
                    .text_color(NinjaColors::text_primary())
                    .text_size(px(Typography::TEXT_XS))
                    .cursor_pointer()
                    .hover(|s| s.bg(NinjaColors::surface_hover()))
                    .on_click(move |_event: &ClickEvent, _window, cx| {
                        let locale = entities.i18n.update(cx, |i18n, cx| {
                            i18n.toggle_locale();
                            cx.notify();
                            i18n.locale
                        });
                        let settings = AppSettings { locale };
                        if let Err(error) = config_store::save_config("settings.json", &settings)
                        {
                            tracing::warn!(%error, "failed to save settings");
                        }
                    })
                    .child(lang_label),
            )
    }
}
