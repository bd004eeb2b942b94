//! Light and dark palettes and the egui visuals built from them.
//!
//! Widgets take a [`Palette`] argument instead of reading a global style flag.

use egui::{Color32, Visuals};

use crate::preference::DisplayPreference;

/// Colors for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color32,
    /// Panel (card) background
    pub card_bg: Color32,
    /// Page heading
    pub text_heading: Color32,
    /// Panel headings
    pub text_title: Color32,
    /// Body text
    pub text_body: Color32,
    /// Empty part of a skill bar
    pub track: Color32,
    /// Filled part of a skill bar
    pub bar_fill: Color32,
    /// Toggle button background
    pub button_bg: Color32,
    /// Toggle button text
    pub button_text: Color32,
    /// Link text on hover
    pub link_hover: Color32,
    /// Card shadow
    pub shadow: Color32,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: Color32::from_rgb(243, 244, 246),
        card_bg: Color32::WHITE,
        text_heading: Color32::from_rgb(17, 24, 39),
        text_title: Color32::from_rgb(31, 41, 55),
        text_body: Color32::from_rgb(55, 65, 81),
        track: Color32::from_rgb(229, 231, 235),
        bar_fill: Color32::from_rgb(37, 99, 235),
        button_bg: Color32::from_rgb(229, 231, 235),
        button_text: Color32::from_rgb(31, 41, 55),
        link_hover: Color32::from_rgb(59, 130, 246),
        shadow: Color32::from_black_alpha(24),
    };

    pub const DARK: Palette = Palette {
        background: Color32::from_rgb(17, 24, 39),
        card_bg: Color32::from_rgb(31, 41, 55),
        text_heading: Color32::from_rgb(243, 244, 246),
        text_title: Color32::from_rgb(229, 231, 235),
        text_body: Color32::from_rgb(209, 213, 219),
        track: Color32::from_rgb(55, 65, 81),
        bar_fill: Color32::from_rgb(37, 99, 235),
        button_bg: Color32::from_rgb(55, 65, 81),
        button_text: Color32::from_rgb(229, 231, 235),
        link_hover: Color32::from_rgb(96, 165, 250),
        shadow: Color32::from_black_alpha(64),
    };

    /// Palette for a display mode.
    pub fn for_preference(preference: DisplayPreference) -> Palette {
        match preference {
            DisplayPreference::Light => Palette::LIGHT,
            DisplayPreference::Dark => Palette::DARK,
        }
    }

    /// egui visuals built on this palette.
    pub fn visuals(&self, dark: bool) -> Visuals {
        let mut visuals = if dark { Visuals::dark() } else { Visuals::light() };

        visuals.window_fill = self.card_bg;
        visuals.panel_fill = self.background;
        visuals.faint_bg_color = self.card_bg;
        visuals.extreme_bg_color = self.background;

        visuals.widgets.noninteractive.bg_fill = self.card_bg;
        visuals.widgets.inactive.bg_fill = self.button_bg;
        visuals.widgets.inactive.weak_bg_fill = self.button_bg;
        visuals.widgets.hovered.weak_bg_fill = self.button_bg.gamma_multiply(0.9);
        visuals.widgets.active.bg_fill = self.bar_fill;

        visuals.widgets.noninteractive.fg_stroke.color = self.text_body;
        visuals.widgets.inactive.fg_stroke.color = self.button_text;
        visuals.widgets.hovered.fg_stroke.color = self.text_title;

        visuals.hyperlink_color = self.text_body;
        visuals.selection.bg_fill = self.bar_fill.linear_multiply(0.3);
        visuals.selection.stroke.color = self.bar_fill;

        visuals
    }
}

/// Visuals for a display mode.
pub fn visuals_for(preference: DisplayPreference) -> Visuals {
    Palette::for_preference(preference).visuals(preference.is_dark())
}

/// Register both modes' visuals and select `preference`.
///
/// This is the only place the context's theme is written.
pub fn apply(ctx: &egui::Context, preference: DisplayPreference) {
    ctx.set_visuals_of(egui::Theme::Light, visuals_for(DisplayPreference::Light));
    ctx.set_visuals_of(egui::Theme::Dark, visuals_for(DisplayPreference::Dark));
    ctx.set_theme(preference.egui_theme());
}
