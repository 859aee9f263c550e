//! Theme context module for managing the dark/light theme
//!
//! Provides:
//! - ThemeMode enum (Dark, Light)
//! - ThemeContext for reactive theme state
//! - LocalStorage persistence

use leptos::prelude::*;

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

#[allow(dead_code)]
const STORAGE_KEY_THEME: &str = "vestibule-theme";

/// Theme mode options
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

/// Theme context for managing theme state
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Current theme mode setting
    pub mode: RwSignal<ThemeMode>,
}

impl ThemeContext {
    /// Flip between light and dark, persist, and restyle the document
    pub fn toggle(&self) {
        let next = match self.mode.get_untracked() {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
        self.set_mode(next);
    }

    /// Set the theme mode and persist to localStorage
    pub fn set_mode(&self, mode: ThemeMode) {
        self.mode.set(mode);
        persist_theme(mode);
        apply_theme_class(mode);
    }
}

/// Persist theme to localStorage
fn persist_theme(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY_THEME, mode.as_str());
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Apply the dark class to the document element
fn apply_theme_class(mode: ThemeMode) {
    #[cfg(not(feature = "ssr"))]
    {
        if let Some(window) = web_sys::window() {
            if let Some(document) = window.document() {
                if let Some(html) = document.document_element() {
                    let class_list = html.class_list();
                    if mode == ThemeMode::Dark {
                        let _ = class_list.add_1("dark");
                    } else {
                        let _ = class_list.remove_1("dark");
                    }
                }
            }
        }
    }
    #[cfg(feature = "ssr")]
    {
        let _ = mode;
    }
}

/// Load theme from localStorage
#[cfg(not(feature = "ssr"))]
fn load_persisted_theme() -> ThemeMode {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY_THEME) {
                return ThemeMode::from_str(&value);
            }
        }
    }
    ThemeMode::Light
}

/// Provide theme context to the application
pub fn provide_theme_context() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::Light);
    let ctx = ThemeContext { mode };

    // Restore the persisted theme after hydration; the server always renders
    // light so the markup matches on both sides.
    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let persisted = load_persisted_theme();
            mode.set(persisted);
            apply_theme_class(persisted);
        });
    }

    provide_context(ctx);
    ctx
}

/// Get theme context from the component tree
pub fn use_theme_context() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_round_trips_through_storage_strings() {
        assert_eq!(ThemeMode::from_str(ThemeMode::Dark.as_str()), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str(ThemeMode::Light.as_str()), ThemeMode::Light);
        // Unknown values fall back to light.
        assert_eq!(ThemeMode::from_str("solarized"), ThemeMode::Light);
    }
}
