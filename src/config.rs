//! Menu configuration with built-in defaults.
//!
//! Values can be overridden from JSON (e.g. embedded in the page by the host
//! dashboard). Missing fields keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::state::menu::ThemePreference;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
pub const DEFAULT_DOCS_ROUTE: &str = "/docs";
pub const DEFAULT_CONTRIBUTORS_URL: &str = "https://github.com/kubeapps/kubeapps/graphs/contributors";
pub const DEFAULT_TRANSITION_MS: u32 = 200;
pub const DEFAULT_LIGHT_STYLESHEET: &str = "/themes/clr-ui.min.css";
pub const DEFAULT_DARK_STYLESHEET: &str = "/themes/clr-ui-dark.min.css";
pub const DEFAULT_THEME_ATTRIBUTE: &str = "cds-theme";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Settings key holding the theme preference.
    pub storage_key: String,
    pub docs_route: String,
    pub contributors_url: String,
    /// Open/close animation length. Cosmetic only.
    pub transition_ms: u32,
    pub light_stylesheet: String,
    pub dark_stylesheet: String,
    /// Attribute on `<body>` that carries the active theme name.
    pub theme_attribute: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            docs_route: DEFAULT_DOCS_ROUTE.to_owned(),
            contributors_url: DEFAULT_CONTRIBUTORS_URL.to_owned(),
            transition_ms: DEFAULT_TRANSITION_MS,
            light_stylesheet: DEFAULT_LIGHT_STYLESHEET.to_owned(),
            dark_stylesheet: DEFAULT_DARK_STYLESHEET.to_owned(),
            theme_attribute: DEFAULT_THEME_ATTRIBUTE.to_owned(),
        }
    }
}

impl MenuConfig {
    /// Parse overrides from a JSON object.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error when `raw` is not a JSON object with
    /// correctly typed fields.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Stylesheet injected into the page head for `theme`.
    pub fn stylesheet_for(&self, theme: ThemePreference) -> &str {
        match theme {
            ThemePreference::Light => &self.light_stylesheet,
            ThemePreference::Dark => &self.dark_stylesheet,
        }
    }

    /// CSS `transition-duration` value for the panel.
    pub fn transition_duration(&self) -> String {
        format!("{}ms", self.transition_ms)
    }
}
