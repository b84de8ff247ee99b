//! Dropdown menu state (panel visibility and theme preference).
//!
//! DESIGN
//! ======
//! Both values are plain data so the transitions can be exercised without a
//! browser. `MenuPanel` holds a `MenuState` inside an `RwSignal` and calls the
//! methods here from its event handlers.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use serde::{Deserialize, Serialize};

/// Whether the dropdown panel is shown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuVisibility {
    Open,
    #[default]
    Closed,
}

impl MenuVisibility {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// The other visibility value.
    pub fn flipped(self) -> Self {
        match self {
            Self::Open => Self::Closed,
            Self::Closed => Self::Open,
        }
    }
}

/// User-selected presentation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// Value stored in settings and written to the document attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored value. Anything other than `"dark"` or `"light"` is
    /// rejected so callers can fall back to the default.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Local state owned by one `MenuPanel` instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub visibility: MenuVisibility,
    pub theme: ThemePreference,
}

impl MenuState {
    /// State at mount: closed, with the theme read from settings.
    pub fn with_theme(theme: ThemePreference) -> Self {
        Self { visibility: MenuVisibility::Closed, theme }
    }

    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    pub fn toggle_open(&mut self) {
        self.visibility = self.visibility.flipped();
    }

    /// Close the panel after a click outside it. No-op when already closed.
    pub fn handle_outside_click(&mut self) {
        self.visibility = MenuVisibility::Closed;
    }
}
