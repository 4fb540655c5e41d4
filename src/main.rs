//! Ninja Login Client - Main Entry Point

use ninja_login::app::application::run_app;

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Ninja Login client...");

    // Run the GPUI application
    run_app();
}
