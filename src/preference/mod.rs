//! Light/dark display preference.
//!
//! The preference is resolved once at startup from the persisted store, falling
//! back to the ambient color-scheme signal, and written back on every toggle.

pub mod ambient;
pub mod store;

pub use ambient::{resolve_ambient, AmbientSignal, SystemColorScheme};
pub use store::{open_default_store, FileStore, MemoryStore, PreferenceStore, StoreError};

/// Key the preference is persisted under.
pub const THEME_KEY: &str = "theme";

/// Light or dark display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DisplayPreference {
    #[default]
    Light,
    Dark,
}

impl DisplayPreference {
    /// Value written to the store.
    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayPreference::Light => "light",
            DisplayPreference::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything but `light` or `dark` counts as absent.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(DisplayPreference::Light),
            "dark" => Some(DisplayPreference::Dark),
            _ => None,
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            DisplayPreference::Light => DisplayPreference::Dark,
            DisplayPreference::Dark => DisplayPreference::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == DisplayPreference::Dark
    }

    /// Matching egui theme.
    pub fn egui_theme(&self) -> egui::Theme {
        match self {
            DisplayPreference::Light => egui::Theme::Light,
            DisplayPreference::Dark => egui::Theme::Dark,
        }
    }
}

/// Resolve the startup preference.
///
/// A stored value wins; otherwise dark only when the ambient signal prefers it.
pub fn resolve_preference(
    stored: Option<DisplayPreference>,
    ambient: &impl AmbientSignal,
) -> DisplayPreference {
    match stored {
        Some(preference) => preference,
        None if ambient.prefers_dark() => DisplayPreference::Dark,
        None => DisplayPreference::Light,
    }
}

/// Read the stored preference.
///
/// `None` only when the key is missing. A present key is dark only when it is
/// exactly `dark`; any other value reads as light.
pub fn load_stored(store: &dyn PreferenceStore) -> Option<DisplayPreference> {
    let raw = store.get(THEME_KEY)?;
    Some(DisplayPreference::parse(&raw).unwrap_or_else(|| {
        tracing::debug!("Unrecognized stored theme {:?}, using light", raw);
        DisplayPreference::Light
    }))
}

/// Current preference bound to the store it is persisted in.
pub struct PreferenceState {
    current: DisplayPreference,
    store: Box<dyn PreferenceStore>,
}

impl PreferenceState {
    /// Resolve the initial preference from the store and the ambient signal.
    pub fn initialize(store: Box<dyn PreferenceStore>, ambient: &impl AmbientSignal) -> Self {
        let stored = load_stored(store.as_ref());
        let current = resolve_preference(stored, ambient);
        tracing::info!(
            "Display preference: {:?} ({})",
            current,
            if stored.is_some() { "stored" } else { "ambient" }
        );
        Self { current, store }
    }

    pub fn current(&self) -> DisplayPreference {
        self.current
    }

    /// Flip the preference and write it through to the store.
    ///
    /// A failed write is logged; the in-memory state still flips.
    pub fn toggle(&mut self) -> DisplayPreference {
        self.current = self.current.toggled();
        if let Err(e) = self.store.set(THEME_KEY, self.current.as_str()) {
            tracing::warn!("Failed to persist theme preference: {}", e);
        }
        self.current
    }

    /// Read access to the backing store.
    pub fn store(&self) -> &dyn PreferenceStore {
        self.store.as_ref()
    }
}
