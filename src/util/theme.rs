//! Theme preference initialization, toggle, and application.
//!
//! Reads the preference from a `SettingsStore` and applies it to the page
//! through a `ThemePort`. Toggle writes back to the store and re-applies.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: a failed write is logged and the in-memory
//! preference still changes and is still applied, so the page never shows a
//! theme that differs from the component state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::sync::Arc;

use crate::state::menu::ThemePreference;
use crate::util::settings::SettingsStore;

/// Applies the active theme to the document.
pub trait ThemePort: Send + Sync {
    fn apply(&self, theme: ThemePreference);
}

/// Sets `attribute` on `<body>` to the theme name. No-op without `hydrate`.
#[derive(Clone, Debug)]
pub struct DocumentTheme {
    attribute: String,
}

impl DocumentTheme {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self { attribute: attribute.into() }
    }
}

impl ThemePort for DocumentTheme {
    fn apply(&self, theme: ThemePreference) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(body) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.body())
            {
                if let Err(e) = body.set_attribute(&self.attribute, theme.as_str()) {
                    leptos::logging::warn!("theme attribute not applied: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&self.attribute, theme);
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTheme;

impl ThemePort for NoopTheme {
    fn apply(&self, _theme: ThemePreference) {}
}

/// Port used when the host does not inject one.
pub fn default_port(attribute: &str) -> Arc<dyn ThemePort> {
    Arc::new(DocumentTheme::new(attribute))
}

/// Read the stored preference, defaulting to `Light` when missing or unknown.
pub fn read_preference(store: &dyn SettingsStore, key: &str) -> ThemePreference {
    store
        .get(key)
        .and_then(|raw| ThemePreference::parse(&raw))
        .unwrap_or_default()
}

/// Flip `current`, persist the result under `key`, and apply it.
pub fn toggle(
    current: ThemePreference,
    store: &dyn SettingsStore,
    port: &dyn ThemePort,
    key: &str,
) -> ThemePreference {
    let next = current.toggled();
    if let Err(e) = store.set(key, next.as_str()) {
        leptos::logging::warn!("theme preference not persisted: {e}");
    }
    port.apply(next);
    next
}
