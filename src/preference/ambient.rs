//! Ambient "prefers dark" signal from the operating system.

/// Read-only query for the system's preferred color scheme.
pub trait AmbientSignal {
    /// Whether the environment prefers a dark scheme.
    fn prefers_dark(&self) -> bool;
}

/// Fixed answer.
impl AmbientSignal for bool {
    fn prefers_dark(&self) -> bool {
        *self
    }
}

/// OS color scheme via `dark-light`, with the windowing integration's report
/// as a second opinion.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemColorScheme {
    /// Theme reported by the window backend, if any.
    pub window_theme: Option<egui::Theme>,
}

impl SystemColorScheme {
    pub fn new(window_theme: Option<egui::Theme>) -> Self {
        Self { window_theme }
    }
}

impl AmbientSignal for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        resolve_ambient(dark_light::detect(), self.window_theme)
    }
}

/// Combine the OS answer with the window backend's.
///
/// The OS decides when it has a preference; otherwise only a dark window
/// theme counts as dark.
pub fn resolve_ambient(os: dark_light::Mode, window: Option<egui::Theme>) -> bool {
    match os {
        dark_light::Mode::Dark => true,
        dark_light::Mode::Light => false,
        dark_light::Mode::Default => {
            tracing::debug!("No OS color scheme preference, window reports {:?}", window);
            window == Some(egui::Theme::Dark)
        }
    }
}
