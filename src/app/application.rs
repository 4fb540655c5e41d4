//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use std::sync::Arc;

use gpui::{
    actions, px, App, AppContext, Application, Bounds, SharedString, TitlebarOptions,
    WindowBounds, WindowOptions,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Navigator;
use crate::app::workspace::Workspace;
use crate::assets::Assets;
use crate::domain::settings::AppSettings;
use crate::eventing::app_event::AppEvent;
use crate::platform::NativePlatform;
use crate::utils::config_store;

actions!(ninja, [Quit]);

/// Run the Ninja Login application
pub fn run_app() {
    let settings = load_settings();

    Application::new().with_assets(Assets).run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        // Initialize global entities
        let entities = AppEntities::init(settings.locale, cx);
        cx.set_global(entities.clone());

        // Create event channel for capability -> UI communication
        let (event_tx, event_rx) = flume::unbounded::<AppEvent>();
        let navigator = Navigator::new(event_tx);
        let platform = Arc::new(NativePlatform);

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(480.0), px(820.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("Ninja Login")),
                appears_transparent: false,
                traffic_light_position: None,
            }),
            ..Default::default()
        };

        cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), navigator, platform, event_rx, cx))
        })
        .expect("failed to open main window");

        cx.activate(true);
    });
}

/// Load persisted settings, falling back to defaults
fn load_settings() -> AppSettings {
    match config_store::load_config::<AppSettings>("settings.json") {
        Ok(settings) => settings,
        Err(error) => {
            tracing::warn!(%error, "failed to load settings, using defaults");
            AppSettings::default()
        }
    }
}
