//! Skill row: icon badge, label and an animated proficiency bar.

use egui::{Color32, CornerRadius, FontId, Rect, RichText, Sense, Ui, Vec2};

use crate::profile::{Skill, SkillIcon};
use crate::ui::theme::Palette;

/// Height of the bar track, in points.
pub const BAR_HEIGHT: f32 = 10.0;

const BADGE_SIZE: f32 = 28.0;

/// The filled part of `track` for a fill fraction.
pub fn fill_rect(track: Rect, fraction: f32) -> Rect {
    let fraction = fraction.clamp(0.0, 1.0);
    Rect::from_min_size(track.min, Vec2::new(track.width() * fraction, track.height()))
}

/// Where a bar was painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarGeometry {
    /// Full track
    pub track: Rect,
    /// Filled part
    pub fill: Rect,
}

impl BarGeometry {
    /// Filled width as a percentage of the track.
    pub fn percent(&self) -> f32 {
        if self.track.width() <= 0.0 {
            return 0.0;
        }
        self.fill.width() / self.track.width() * 100.0
    }
}

/// Renders one skill row.
pub struct SkillBar;

impl SkillBar {
    /// Render `skill` with its bar filled to `fill` (0.0-1.0 of the track).
    ///
    /// Returns where the bar was painted.
    pub fn show(ui: &mut Ui, skill: &Skill, fill: f32, palette: &Palette) -> BarGeometry {
        let mut geometry = BarGeometry {
            track: Rect::NOTHING,
            fill: Rect::NOTHING,
        };

        ui.horizontal(|ui| {
            icon_badge(ui, skill.icon);
            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(skill.name).color(palette.text_body))
                    .on_hover_text(skill.level.to_string());

                let width = ui.available_width();
                let (track, _) = ui.allocate_exact_size(Vec2::new(width, BAR_HEIGHT), Sense::hover());
                let radius = CornerRadius::same((BAR_HEIGHT / 2.0) as u8);
                let painter = ui.painter();
                painter.rect_filled(track, radius, palette.track);

                let filled = fill_rect(track, fill);
                if filled.width() > 0.0 {
                    painter.rect_filled(filled, radius, palette.bar_fill);
                }
                geometry = BarGeometry { track, fill: filled };
            });
        });

        geometry
    }
}

fn icon_badge(ui: &mut Ui, icon: SkillIcon) {
    let (rect, _) = ui.allocate_exact_size(Vec2::splat(BADGE_SIZE), Sense::hover());
    let [r, g, b] = icon.brand_rgb();
    let fill = Color32::from_rgb(r, g, b);
    let text_color = if luminance(fill) > 140.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    };

    let painter = ui.painter();
    painter.rect_filled(rect, CornerRadius::same(6), fill);
    painter.text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        icon.monogram(),
        FontId::proportional(12.0),
        text_color,
    );
}

fn luminance(color: Color32) -> f32 {
    0.299 * color.r() as f32 + 0.587 * color.g() as f32 + 0.114 * color.b() as f32
}
