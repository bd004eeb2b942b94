//! Light/dark toggle button.

use egui::{Button, CornerRadius, RichText, Ui};

use crate::i18n::TranslationService;
use crate::preference::DisplayPreference;
use crate::ui::theme::Palette;

/// Button text: offers the mode that is not active.
pub fn toggle_label(current: DisplayPreference, i18n: &TranslationService) -> String {
    match current {
        DisplayPreference::Dark => format!("☀ {}", i18n.t("toggle-light")),
        DisplayPreference::Light => format!("🌙 {}", i18n.t("toggle-dark")),
    }
}

/// Render the toggle. Returns true when clicked.
pub fn show(
    ui: &mut Ui,
    current: DisplayPreference,
    palette: &Palette,
    i18n: &TranslationService,
) -> bool {
    let text = RichText::new(toggle_label(current, i18n)).color(palette.button_text);
    ui.add(
        Button::new(text)
            .fill(palette.button_bg)
            .corner_radius(CornerRadius::same(6))
            .min_size(egui::vec2(0.0, 32.0)),
    )
    .clicked()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    #[test]
    fn test_label_offers_other_mode() {
        let i18n = TranslationService::new(Language::English);
        assert_eq!(toggle_label(DisplayPreference::Dark, &i18n), "☀ Light mode");
        assert_eq!(toggle_label(DisplayPreference::Light, &i18n), "🌙 Dark mode");
    }

    #[test]
    fn test_label_japanese() {
        let i18n = TranslationService::new(Language::Japanese);
        assert_eq!(toggle_label(DisplayPreference::Dark, &i18n), "☀ ライトモード");
    }
}
