//! Portfolio - personal profile viewer
//!
//! Main entry point for the application.

use eframe::egui;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use portfolio::i18n::{self, TranslationService};
use portfolio::storage::config::{load_config, AppConfig};
use portfolio::ui::icon;

mod app;

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Portfolio v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Failed to load config, using defaults: {}", e);
        AppConfig::default()
    });

    let language = config
        .ui
        .language
        .unwrap_or_else(i18n::detect_system_locale);
    let title = TranslationService::new(language).t("page-title");
    tracing::info!("Language: {}", language);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 860.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title(title)
            .with_icon(icon::window_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "Portfolio",
        options,
        Box::new(move |cc| Ok(Box::new(app::PortfolioApp::new(cc, config, language)))),
    )
}
