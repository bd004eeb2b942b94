//! Main application state and egui integration.

use eframe::egui;

use portfolio::i18n::{self, Language, TranslationService};
use portfolio::preference::{open_default_store, SystemColorScheme};
use portfolio::storage::AppConfig;
use portfolio::ui::{fonts, ProfileView};

/// Main application state.
pub struct PortfolioApp {
    /// The profile page
    view: ProfileView,
}

impl PortfolioApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig, language: Language) -> Self {
        let ctx = &cc.egui_ctx;

        let font_found = language.needs_cjk_font() && fonts::install_cjk_font(ctx);
        let picked = i18n::pick_language(language, font_found);
        if picked != language {
            tracing::warn!("No CJK font found, falling back to {:?}", picked);
            let strings = TranslationService::new(picked);
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(strings.t("page-title")));
        }

        ctx.set_zoom_factor(config.ui.font_scale);

        let ambient = SystemColorScheme::new(ctx.system_theme());
        let view = ProfileView::new(
            ctx,
            open_default_store(),
            &ambient,
            TranslationService::new(picked),
            &config,
        );

        Self { view }
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.view.show(ctx);
    }
}
