//! TextInput Component

use std::rc::Rc;

use gpui::{
    div, prelude::*, px, App, ClickEvent, Context, ElementId, Entity, FocusHandle, Focusable,
    InteractiveElement, IntoElement, ParentElement, Render, SharedString,
    StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::assets::AppIcon;
use crate::theme::colors::NinjaColors;
use crate::theme::tokens::{Size, Typography};

/// A single-line text input with an optional leading icon, optional trailing
/// icon button, and a masked mode for passwords
pub struct TextInput {
    id: ElementId,
    value: String,
    placeholder: SharedString,
    icon: Option<AppIcon>,
    trailing: Option<AppIcon>,
    masked: bool,
    focus_handle: FocusHandle,
    on_trailing_click: Option<Rc<dyn Fn(&ClickEvent, &mut Window, &mut App) + 'static>>,
}

impl TextInput {
    /// Create a new text input
    pub fn new(id: impl Into<ElementId>, cx: &mut Context<Self>) -> Self {
        Self {
            id: id.into(),
            value: String::new(),
            placeholder: SharedString::default(),
            icon: None,
            trailing: None,
            masked: false,
            focus_handle: cx.focus_handle(),
            on_trailing_click: None,
        }
    }

    /// Set the value (full replacement)
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Get the value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set the placeholder
    pub fn set_placeholder(&mut self, placeholder: impl Into<SharedString>) {
        self.placeholder = placeholder.into();
    }

    /// Set the leading icon
    pub fn set_icon(&mut self, icon: AppIcon) {
        self.icon = Some(icon);
    }

    /// Set the trailing icon
    pub fn set_trailing(&mut self, icon: AppIcon) {
        self.trailing = Some(icon);
    }

    /// Set whether the value renders as bullets
    pub fn set_masked(&mut self, masked: bool) {
        self.masked = masked;
    }

    /// Set the trailing icon click handler
    pub fn on_trailing_click(
        &mut self,
        handler: impl Fn(&ClickEvent, &mut Window, &mut App) + 'static,
    ) {
        self.on_trailing_click = Some(Rc::new(handler));
    }

    /// Append typed text
    pub fn input(&mut self, text: &str, cx: &mut Context<Self>) {
        self.value.push_str(text);
        cx.notify();
    }

    /// Remove the last character
    pub fn backspace(&mut self, cx: &mut Context<Self>) {
        self.value.pop();
        cx.notify();
    }
}

impl Focusable for TextInput {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for TextInput {
    fn render(&mut self, window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let is_focused = self.focus_handle.is_focused(window);
        let border_color = if is_focused {
            NinjaColors::input_border_focus()
        } else {
            NinjaColors::input_bg()
        };

        let display_text = if self.value.is_empty() {
            self.placeholder.clone()
        } else if self.masked {
            SharedString::from("•".repeat(self.value.chars().count()))
        } else {
            SharedString::from(self.value.clone())
        };

        let text_color = if self.value.is_empty() {
            NinjaColors::input_placeholder()
        } else {
            NinjaColors::input_text()
        };

        let mut input = div()
            .id(self.id.clone())
            .track_focus(&self.focus_handle)
            .w_full()
            .px_3()
            .py_2()
            .bg(NinjaColors::input_bg())
            .border_1()
            .border_color(border_color)
            .rounded(px(Size::CORNER_RADIUS))
            .flex()
            .items_center()
            .gap_2();

        if let Some(icon) = self.icon {
            input = input.child(
                div()
                    .text_color(NinjaColors::input_placeholder())
                    .child(Icon::from(icon)),
            );
        }

        input = input.child(
            div()
                .flex_1()
                .text_color(text_color)
                .text_size(px(Typography::TEXT_SM))
                .child(display_text),
        );

        if let Some(icon) = self.trailing {
            let mut trailing = div()
                .id("trailing")
                .cursor_pointer()
                .text_color(NinjaColors::input_placeholder())
                .child(Icon::from(icon));

            if let Some(handler) = self.on_trailing_click.clone() {
                trailing =
                    trailing.on_click(move |event, window, cx| handler(event, window, cx));
            }

            input = input.child(trailing);
        }

        input
    }
}

/// Create a text input entity with a placeholder and leading icon
pub fn text_input<V: 'static>(
    id: impl Into<ElementId>,
    placeholder: SharedString,
    icon: AppIcon,
    cx: &mut Context<V>,
) -> Entity<TextInput> {
    let id = id.into();

    cx.new(|cx| {
        let mut input = TextInput::new(id, cx);
        input.set_placeholder(placeholder);
        input.set_icon(icon);
        input
    })
}
