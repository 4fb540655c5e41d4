//! Login Page
//!
//! The login/sign-up screen: logo, mode-dependent headline and fields,
//! social sign-in row, and the primary submit button.

use gpui::{
    div, prelude::*, px, ClickEvent, Context, Entity, InteractiveElement, IntoElement,
    ParentElement, Render, StatefulInteractiveElement, Styled, Window,
};
use gpui_component::Icon;

use crate::app::entities::AppEntities;
use crate::app::navigation::Navigator;
use crate::assets::AppIcon;
use crate::components::primitives::button::Button;
use crate::components::primitives::checkbox::Checkbox;
use crate::components::primitives::text_input::{text_input, TextInput};
use crate::features::login::controller::LoginController;
use crate::features::login::form::{FormEvent, FormMode, FormState};
use crate::i18n::t;
use crate::theme::colors::NinjaColors;
use crate::theme::tokens::{Size, Typography};

/// Login page component
pub struct LoginPage {
    entities: AppEntities,
    controller: LoginController,
    form: FormState,
    name_input: Entity<TextInput>,
    email_input: Entity<TextInput>,
    password_input: Entity<TextInput>,
}

impl LoginPage {
    pub fn new(entities: AppEntities, navigator: Navigator, cx: &mut Context<Self>) -> Self {
        let controller = LoginController::new(navigator);
        let locale = entities.i18n.read(cx).locale;

        let name_input = text_input(
            "name-input",
            t(locale, "field-name"),
            AppIcon::Profile,
            cx,
        );
        let email_input = text_input(
            "email-input",
            t(locale, "field-email"),
            AppIcon::Mail,
            cx,
        );
        let password_input = text_input(
            "password-input",
            t(locale, "field-password"),
            AppIcon::Lock,
            cx,
        );

        // Passwords render masked until the eye is tapped
        let toggle_visibility = cx.listener(
            |this: &mut Self, _event: &ClickEvent, _window, cx| {
                this.dispatch(FormEvent::TogglePasswordVisibility, cx);
                let visible = this.form.password_visible;
                this.password_input.update(cx, |input, cx| {
                    input.set_masked(!visible);
                    input.set_trailing(if visible {
                        AppIcon::VisibilityOff
                    } else {
                        AppIcon::Visibility
                    });
                    cx.notify();
                });
            },
        );
        password_input.update(cx, |input, _| {
            input.set_masked(true);
            input.set_trailing(AppIcon::Visibility);
            input.on_trailing_click(toggle_visibility);
        });

        // Sync input edits into the form state
        cx.observe(&name_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.dispatch(FormEvent::SetName(value), cx);
        })
        .detach();
        cx.observe(&email_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.dispatch(FormEvent::SetEmail(value), cx);
        })
        .detach();
        cx.observe(&password_input, |this, input, cx| {
            let value = input.read(cx).value().to_string();
            this.dispatch(FormEvent::SetPassword(value), cx);
        })
        .detach();

        // Refresh placeholders when the locale changes
        cx.observe(&entities.i18n, |this, i18n, cx| {
            let locale = i18n.read(cx).locale;
            this.name_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "field-name"));
                cx.notify();
            });
            this.email_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "field-email"));
                cx.notify();
            });
            this.password_input.update(cx, |input, cx| {
                input.set_placeholder(t(locale, "field-password"));
                cx.notify();
            });
            cx.notify();
        })
        .detach();

        Self {
            entities,
            controller,
            form: FormState::default(),
            name_input,
            email_input,
            password_input,
        }
    }

    /// Apply a form event and schedule a re-render
    fn dispatch(&mut self, event: FormEvent, cx: &mut Context<Self>) {
        self.form = std::mem::take(&mut self.form).apply(event);
        cx.notify();
    }

    fn render_social_section(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .w_full()
            .flex()
            .flex_col()
            .items_center()
            .gap(px(10.0))
            .child(
                div()
                    .text_color(NinjaColors::text_primary())
                    .text_size(px(Typography::TEXT_BASE))
                    .child(t(locale, "login-continue-with")),
            )
            .child(
                div()
                    .w_full()
                    .flex()
                    .items_center()
                    .gap(px(10.0))
                    .child(Button::social(
                        "facebook-btn",
                        t(locale, "social-facebook"),
                        AppIcon::Facebook,
                    ))
                    .child(Button::social(
                        "google-btn",
                        t(locale, "social-google"),
                        AppIcon::Google,
                    )),
            )
            .child(Button::link(
                "forgot-btn",
                t(locale, "login-forgot-password"),
            ))
    }

    fn render_signup_options(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;

        div()
            .w_full()
            .flex()
            .flex_col()
            .gap(px(5.0))
            .child(
                Checkbox::new("keep-signed-in")
                    .checked(self.form.keep_signed_in)
                    .label(t(locale, "check-keep-signed-in"))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.dispatch(FormEvent::ToggleKeepSignedIn, cx);
                    })),
            )
            .child(
                Checkbox::new("email-offers")
                    .checked(self.form.email_opt_in)
                    .label(t(locale, "check-email-offers"))
                    .on_click(cx.listener(|this, _event: &ClickEvent, _window, cx| {
                        this.dispatch(FormEvent::ToggleEmailOptIn, cx);
                    })),
            )
    }
}

impl Render for LoginPage {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let locale = self.entities.i18n.read(cx).locale;
        let is_login = self.form.mode == FormMode::Login;

        let (title_key, submit_key, switch_key) = if is_login {
            ("login-title", "action-login", "login-switch-to-signup")
        } else {
            ("signup-title", "action-create-account", "login-switch-to-login")
        };

        let mut page = div()
            .id("login-page")
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
                Icon::from(AppIcon::Logo)
                    .w(px(Size::LOGO_WIDTH))
                    .h(px(Size::LOGO_HEIGHT)),
            )
            .child(
                div()
                    .text_color(NinjaColors::text_primary())
                    .text_size(px(Typography::TEXT_XL))
                    .child(t(locale, title_key)),
            );

        let mut fields = div().w_full().flex().flex_col().gap(px(10.0));
        if !is_login {
            fields = fields.child(self.name_input.clone());
        }
        fields = fields
            .child(self.email_input.clone())
            .child(self.password_input.clone());
        page = page.child(fields);

        if is_login {
            page = page.child(self.render_social_section(cx));
        } else {
            page = page.child(self.render_signup_options(cx));
        }

        page.child(
            Button::primary("submit-btn", t(locale, submit_key)).on_click(cx.listener(
                |this, _event: &ClickEvent, _window, _cx| {
                    this.controller.submit(&this.form);
                },
            )),
        )
        .child(
            Button::link("switch-mode-btn", t(locale, switch_key)).on_click(cx.listener(
                |this, _event: &ClickEvent, _window, cx| {
                    this.dispatch(FormEvent::ToggleMode, cx);
                },
            )),
        )
    }
}
