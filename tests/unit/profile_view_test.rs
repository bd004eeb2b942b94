//! Render-level tests for the profile view on a headless egui context.

use portfolio::i18n::{Language, TranslationService};
use portfolio::preference::{DisplayPreference, MemoryStore, PreferenceStore, THEME_KEY};
use portfolio::storage::AppConfig;
use portfolio::{ProfileView, SKILLS};

fn new_view(ctx: &egui::Context, store: MemoryStore, ambient_dark: bool) -> ProfileView {
    ProfileView::new(
        ctx,
        Box::new(store),
        &ambient_dark,
        TranslationService::new(Language::English),
        &AppConfig::default(),
    )
}

fn frame(ctx: &egui::Context, view: &mut ProfileView, time: f64) {
    let input = egui::RawInput {
        time: Some(time),
        ..Default::default()
    };
    let _ = ctx.run(input, |ctx| view.show(ctx));
}

#[test]
fn test_empty_store_dark_ambient_renders_dark() {
    let ctx = egui::Context::default();
    let mut view = new_view(&ctx, MemoryStore::new(), true);
    frame(&ctx, &mut view, 0.0);

    assert_eq!(view.preference(), DisplayPreference::Dark);
    assert!(ctx.style().visuals.dark_mode);
    assert_eq!(view.toggle_label(), "☀ Light mode");
}

#[test]
fn test_toggle_from_light_writes_dark() {
    let ctx = egui::Context::default();
    let mut view = new_view(&ctx, MemoryStore::new(), false);
    assert!(!ctx.style().visuals.dark_mode);

    view.toggle_preference(&ctx);

    assert_eq!(view.store().get(THEME_KEY).as_deref(), Some("dark"));
    assert!(ctx.style().visuals.dark_mode);
    assert_eq!(view.toggle_label(), "☀ Light mode");
}

#[test]
fn test_toggle_twice_restores_visuals_and_store() {
    let ctx = egui::Context::default();
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "light").unwrap();
    let mut view = new_view(&ctx, store, true);
    let before = ctx.style().visuals.clone();

    view.toggle_preference(&ctx);
    view.toggle_preference(&ctx);

    assert_eq!(ctx.style().visuals, before);
    assert_eq!(view.store().get(THEME_KEY).as_deref(), Some("light"));
}

#[test]
fn test_bars_settle_at_skill_level() {
    let ctx = egui::Context::default();
    let mut view = new_view(&ctx, MemoryStore::new(), false);

    // First frame starts the clock; the last bar finishes at 2.0s
    frame(&ctx, &mut view, 0.0);
    frame(&ctx, &mut view, 3.0);

    let bars = view.rendered_bars();
    assert_eq!(bars.len(), SKILLS.len());
    for (bar, skill) in bars.iter().zip(SKILLS.iter()) {
        assert!(
            (bar.percent() - skill.level.percent() as f32).abs() < 0.01,
            "{} painted at {}%",
            skill.name,
            bar.percent()
        );
    }
}

#[test]
fn test_reduced_motion_fills_on_first_frame() {
    let ctx = egui::Context::default();
    let mut config = AppConfig::default();
    config.ui.reduce_motion = true;
    let mut view = ProfileView::new(
        &ctx,
        Box::new(MemoryStore::new()),
        &false,
        TranslationService::new(Language::English),
        &config,
    );

    frame(&ctx, &mut view, 0.0);

    let first = view.rendered_bars()[0];
    assert!((first.percent() - 90.0).abs() < 0.01);
}
