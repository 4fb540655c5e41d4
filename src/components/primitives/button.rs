//! Button Component

use gpui::{
    div, prelude::*, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement,
    ParentElement, RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::AppIcon;
use crate::theme::colors::NinjaColors;
use crate::theme::tokens::{Size, Typography};

/// Button variant
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary action button (accent pill, fixed token size)
    #[default]
    Primary,
    /// Social sign-in tile (surface background, icon + label)
    Social,
    /// Inline text link
    Link,
}

/// A styled button component
#[derive(IntoElement)]
pub struct Button {
    id: ElementId,
    label: SharedString,
    variant: ButtonVariant,
    icon: Option<AppIcon>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Button {
    /// Create a new button
    pub fn new(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            variant: ButtonVariant::Primary,
            icon: None,
            on_click: None,
        }
    }

    /// Set the button variant
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Set a leading icon
    pub fn icon(mut self, icon: AppIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Set the click handler
    pub fn on_click(
        mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) -> Self {
        self.on_click = Some(Box::new(handler));
        self
    }

    /// Create a primary button
    pub fn primary(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Primary)
    }

    /// Create a social sign-in tile
    pub fn social(
        id: impl Into<ElementId>,
        label: impl Into<SharedString>,
        icon: AppIcon,
    ) -> Self {
        Self::new(id, label).variant(ButtonVariant::Social).icon(icon)
    }

    /// Create an inline text link
    pub fn link(id: impl Into<ElementId>, label: impl Into<SharedString>) -> Self {
        Self::new(id, label).variant(ButtonVariant::Link)
    }
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let mut element = div()
            .id(self.id)
            .flex()
            .items_center()
            .justify_center()
            .cursor_pointer();

        element = match self.variant {
            ButtonVariant::Primary => element
                .w(px(Size::BUTTON_WIDTH))
                .h(px(Size::BUTTON_HEIGHT))
                .rounded(px(Size::CORNER_RADIUS))
                .bg(NinjaColors::accent())
                .text_color(NinjaColors::text_on_accent())
                .text_size(px(Typography::TEXT_BASE))
                .hover(|s| s.bg(NinjaColors::accent_hover())),
            ButtonVariant::Social => element
                .flex_1()
                .h(px(Size::SOCIAL_TILE_HEIGHT))
                .rounded(px(Size::CORNER_RADIUS))
                .bg(NinjaColors::surface())
                .text_color(NinjaColors::text_primary())
                .text_size(px(Typography::TEXT_BASE))
                .gap_2()
                .hover(|s| s.bg(NinjaColors::surface_hover())),
            ButtonVariant::Link => element
                .text_color(NinjaColors::link())
                .text_size(px(Typography::TEXT_BASE))
                .hover(|s| s.text_color(NinjaColors::text_primary())),
        };

        if let Some(icon) = self.icon {
            element = element.child(Icon::from(icon));
        }
        element = element.child(self.label);

        if let Some(handler) = self.on_click {
            element = element.on_click(handler);
        }

        element
    }
}
