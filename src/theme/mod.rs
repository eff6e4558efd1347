//! Light/dark theme preference, persisted as a bare string.

use std::fmt;
use std::str::FromStr;

use crate::storage::{KeyValueStore, StoreError};

/// Storage key of the theme preference.
pub const DEFAULT_THEME_KEY: &str = "theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Glyph for the toggle button: the theme a click switches to.
    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {}", other)),
        }
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemePreference<S> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: KeyValueStore> ThemePreference<S> {
    pub fn load(store: S) -> Self {
        Self::load_with_key(store, DEFAULT_THEME_KEY)
    }

    /// Missing, unknown, or unreadable values fall back to [`Theme::Light`].
    pub fn load_with_key(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let current = match store.get(&key) {
            Ok(Some(stored)) => stored.parse::<Theme>().unwrap_or_else(|err: String| {
                tracing::warn!(key = %key, error = %err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                tracing::warn!(key = %key, error = %err, "theme store unavailable");
                Theme::default()
            }
        };

        ThemePreference {
            store,
            key,
            current,
        }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Switch theme and persist it. Returns the new theme.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        self.current = self.current.toggled();
        tracing::info!(theme = %self.current, "switched theme");
        self.store.set(&self.key, self.current.as_str())?;
        Ok(self.current)
    }
}
