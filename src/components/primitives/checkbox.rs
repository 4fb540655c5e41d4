//! Checkbox Component

use gpui::{
    div, px, App, ClickEvent, ElementId, InteractiveElement, IntoElement, ParentElement,
    RenderOnce, SharedString, StatefulInteractiveElement, Styled, Window,
};

use crate::theme::colors::NinjaColors;
use crate::theme::tokens::Typography;

/// A checkbox with an optional label
///
/// The checked flag is owned by the caller; clicking the row (box or label)
/// fires the click handler and the caller flips its own state.
#[derive(IntoElement)]
pub struct Checkbox {
    id: ElementId,
    checked: bool,
    label: Option<SharedString>,
    on_click: Option<Box<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl Checkbox {
    /// Create a new checkbox
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            checked: false,
            label: None,
            on_click: None,
        }
    }

    /// Set the checked state
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    /// Set the label
    pub fn label(mut self, label: impl Into<SharedString>) -> Self {
        self.label = Some(label.into());
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
}

impl RenderOnce for Checkbox {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let (box_bg, border_color) = if self.checked {
            (NinjaColors::checkbox_checked(), NinjaColors::checkbox_checked())
        } else {
            (NinjaColors::surface(), NinjaColors::checkbox_border())
        };

        let check_mark = if self.checked { "✓" } else { "" };

        let mut checkbox = div()
            .id(self.id)
            .flex()
            .items_center()
            .gap_2()
            .cursor_pointer()
            .child(
                div()
                    .size(px(18.0))
                    .rounded_sm()
                    .border_1()
                    .border_color(border_color)
                    .bg(box_bg)
                    .flex()
                    .items_center()
                    .justify_center()
                    .text_color(NinjaColors::text_on_accent())
                    .text_size(px(Typography::TEXT_XS))
                    .child(check_mark),
            );

        if let Some(label) = self.label {
            checkbox = checkbox.child(
                div()
                    .text_size(px(Typography::TEXT_XS))
                    .text_color(NinjaColors::text_primary())
                    .child(label),
            );
        }

        if let Some(handler) = self.on_click {
            checkbox = checkbox.on_click(handler);
        }

        checkbox
    }
}
