//! Light/dark theme state and its persisted preference.
//!
//! The theme is resolved once at boot from the stored preference, falling
//! back to the system color-scheme query and finally to dark. Every
//! application writes the resulting mode back to the store, so storage always
//! mirrors what is on screen.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::collections::HashMap;

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored value. Anything other than `"light"` is dark.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "light" { Self::Light } else { Self::Dark }
    }

    /// What the toggle control should show while this mode is applied.
    #[must_use]
    pub fn toggle_view(self) -> ToggleView {
        match self {
            Self::Light => ToggleView {
                icon: "\u{2600}\u{fe0f}",
                pressed: "true",
                title: "Switch to dark theme",
            },
            Self::Dark => ToggleView {
                icon: "\u{1f319}",
                pressed: "false",
                title: "Switch to light theme",
            },
        }
    }
}

/// Label, `aria-pressed` value, and tooltip for the toggle control.
///
/// The tooltip describes the next action, not the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleView {
    pub icon: &'static str,
    pub pressed: &'static str,
    pub title: &'static str,
}

/// Pick the initial theme.
///
/// A stored preference always wins; otherwise the system light preference is
/// used when known, and dark is the default.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_light: Option<bool>) -> Theme {
    match (stored, prefers_light) {
        (Some(value), _) => Theme::from_stored(value),
        (None, Some(true)) => Theme::Light,
        (None, Some(false) | None) => Theme::Dark,
    }
}

/// Durable key-value slot for the theme preference.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
}

/// In-memory store for exercising theme state outside a browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeState<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the initial theme from `store` and persist it.
    pub fn init(store: S, key: impl Into<String>, prefers_light: Option<bool>) -> Self {
        let key = key.into();
        let stored = store.load(&key);
        let current = resolve_initial(stored.as_deref(), prefers_light);
        let mut state = Self { store, key, current };
        state.set(current);
        state
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Apply `theme` and write it to the store.
    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(&self.key, theme.as_str());
        theme
    }

    /// Flip the theme and persist the result.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.toggled())
    }
}

#[cfg(test)]
impl<S> ThemeState<S> {
    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}
