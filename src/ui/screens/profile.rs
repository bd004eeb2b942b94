//! Profile view: intro, skills and contact panels under an animated heading.
//!
//! The view owns the display preference. It pushes the preference into the
//! egui context on construction and on every toggle, and hands the matching
//! [`Palette`] to each widget it draws.

use egui::{
    Align, CornerRadius, FontId, Frame, Layout, Margin, RichText, ScrollArea, Sense, Shadow, Ui,
    Vec2,
};

use crate::i18n::TranslationService;
use crate::preference::{AmbientSignal, DisplayPreference, PreferenceState, PreferenceStore};
use crate::profile::{SocialLink, SKILLS};
use crate::storage::AppConfig;
use crate::ui::animation::{self, BarStagger, EntranceClock};
use crate::ui::theme::{self, Palette};
use crate::ui::widgets::{social_links, theme_toggle, BarGeometry, SkillBar};

/// Content column width cap, in points.
const MAX_CONTENT_WIDTH: f32 = 960.0;

/// Width from which skills are laid out in two columns.
pub const TWO_COLUMN_MIN_WIDTH: f32 = 768.0;

/// Profile view state.
pub struct ProfileView {
    /// Light/dark preference and its store
    preference: PreferenceState,
    /// Active strings
    i18n: TranslationService,
    /// Contact links
    links: Vec<SocialLink>,
    /// Entrance animation clock
    clock: EntranceClock,
    /// Skill bar timing
    stagger: BarStagger,
    /// Bars painted in the last frame, in skill order
    bars: Vec<BarGeometry>,
}

impl ProfileView {
    /// Create the view and apply the resolved preference to `ctx`.
    pub fn new(
        ctx: &egui::Context,
        store: Box<dyn PreferenceStore>,
        ambient: &impl AmbientSignal,
        i18n: TranslationService,
        config: &AppConfig,
    ) -> Self {
        let preference = PreferenceState::initialize(store, ambient);
        theme::apply(ctx, preference.current());

        Self {
            preference,
            i18n,
            links: SocialLink::from_settings(&config.links),
            clock: EntranceClock::new(config.ui.reduce_motion),
            stagger: BarStagger::default(),
            bars: Vec::with_capacity(SKILLS.len()),
        }
    }

    /// Current display preference.
    pub fn preference(&self) -> DisplayPreference {
        self.preference.current()
    }

    /// Backing preference store.
    pub fn store(&self) -> &dyn PreferenceStore {
        self.preference.store()
    }

    /// Flip light/dark, persist it and restyle `ctx`.
    pub fn toggle_preference(&mut self, ctx: &egui::Context) {
        let next = self.preference.toggle();
        theme::apply(ctx, next);
        tracing::info!("Switched to {:?} mode", next);
    }

    /// Text currently shown on the toggle button.
    pub fn toggle_label(&self) -> String {
        theme_toggle::toggle_label(self.preference(), &self.i18n)
    }

    /// Bars painted in the last frame.
    pub fn rendered_bars(&self) -> &[BarGeometry] {
        &self.bars
    }

    /// Render the whole page into the central panel.
    pub fn show(&mut self, ctx: &egui::Context) {
        let now = ctx.input(|i| i.time);
        let elapsed = self.clock.elapsed(now);
        let palette = Palette::for_preference(self.preference());
        let mut toggle_clicked = false;

        let panel_frame = Frame::central_panel(&ctx.style()).fill(palette.background);
        egui::CentralPanel::default().frame(panel_frame).show(ctx, |ui| {
            ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                let width = ui.available_width().min(MAX_CONTENT_WIDTH);
                let side = ((ui.available_width() - width) / 2.0).max(0.0);

                ui.horizontal(|ui| {
                    ui.add_space(side);
                    ui.vertical(|ui| {
                        ui.set_width(width);
                        toggle_clicked = self.content(ui, &palette, elapsed);
                    });
                });
            });
        });

        if toggle_clicked {
            self.toggle_preference(ctx);
        }

        if elapsed < animation::settle_time(&self.stagger, SKILLS.len()) {
            ctx.request_repaint();
        }
    }

    /// Page body. Returns true when the toggle was clicked.
    fn content(&mut self, ui: &mut Ui, palette: &Palette, elapsed: f64) -> bool {
        ui.add_space(16.0);

        let clicked = ui
            .with_layout(Layout::right_to_left(Align::Min), |ui| {
                theme_toggle::show(ui, self.preference(), palette, &self.i18n)
            })
            .inner;

        ui.add_space(16.0);
        self.heading(ui, palette, elapsed);
        ui.add_space(32.0);

        card(ui, palette, animation::INTRO_PANEL.progress(elapsed), |ui| {
            self.intro(ui, palette);
        });
        ui.add_space(32.0);

        card(ui, palette, animation::SKILLS_PANEL.progress(elapsed), |ui| {
            self.skills(ui, palette, elapsed);
        });
        ui.add_space(32.0);

        card(ui, palette, animation::CONTACT_PANEL.progress(elapsed), |ui| {
            section_title(ui, palette, &self.i18n.t("heading-contact"));
            social_links::show(ui, &self.links, palette);
        });
        ui.add_space(32.0);

        clicked
    }

    fn heading(&self, ui: &mut Ui, palette: &Palette, elapsed: f64) {
        let progress = animation::HEADING.progress(elapsed);
        let offset = animation::HEADING_OFFSET * (1.0 - progress);
        let color = palette.text_heading.gamma_multiply(progress);

        let galley = ui.painter().layout(
            self.i18n.t("page-title"),
            FontId::proportional(34.0),
            color,
            ui.available_width(),
        );
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), galley.size().y),
            Sense::hover(),
        );
        let pos = egui::pos2(
            rect.center().x - galley.size().x / 2.0,
            rect.min.y + offset,
        );
        ui.painter().galley(pos, galley, color);
    }

    fn intro(&self, ui: &mut Ui, palette: &Palette) {
        section_title(ui, palette, &self.i18n.t("heading-intro"));
        ui.label(RichText::new(self.i18n.t("intro-body")).color(palette.text_body));
        ui.add_space(4.0);
        ui.label(
            RichText::new(self.i18n.t("intro-note"))
                .small()
                .color(palette.text_body),
        );
    }

    fn skills(&mut self, ui: &mut Ui, palette: &Palette, elapsed: f64) {
        section_title(ui, palette, &self.i18n.t("heading-skills"));

        let stagger = self.stagger;
        let fill = |index: usize| stagger.fill(index, SKILLS[index].level.fraction(), elapsed);
        let mut bars = vec![None; SKILLS.len()];

        if ui.available_width() >= TWO_COLUMN_MIN_WIDTH {
            ui.columns(2, |columns| {
                for (index, skill) in SKILLS.iter().enumerate() {
                    let column = &mut columns[index % 2];
                    bars[index] = Some(SkillBar::show(column, skill, fill(index), palette));
                    column.add_space(16.0);
                }
            });
        } else {
            for (index, skill) in SKILLS.iter().enumerate() {
                bars[index] = Some(SkillBar::show(ui, skill, fill(index), palette));
                ui.add_space(16.0);
            }
        }

        self.bars = bars.into_iter().flatten().collect();
    }
}

/// Panel heading.
fn section_title(ui: &mut Ui, palette: &Palette, text: &str) {
    ui.label(
        RichText::new(text)
            .size(22.0)
            .strong()
            .color(palette.text_title),
    );
    ui.add_space(12.0);
}

/// Rounded card faded to `opacity`.
fn card(ui: &mut Ui, palette: &Palette, opacity: f32, add_contents: impl FnOnce(&mut Ui)) {
    ui.scope(|ui| {
        ui.set_opacity(opacity);
        Frame::new()
            .fill(palette.card_bg)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(Margin::same(24))
            .shadow(Shadow {
                offset: [0, 2],
                blur: 8,
                spread: 0,
                color: palette.shadow,
            })
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                add_contents(ui);
            });
    });
}
