//! Ordered description of the dropdown panel contents.
//!
//! DESIGN
//! ======
//! `MenuPanel` renders whatever this module lists, so link targets,
//! ordering, and ARIA roles can be checked without a DOM.

#[cfg(test)]
#[path = "menu_entries_test.rs"]
mod menu_entries_test;

use crate::state::cluster::ClusterContext;
use crate::state::menu::{MenuVisibility, ThemePreference};

pub const ROLE_MENU: &str = "menu";
pub const ROLE_MENU_ITEM: &str = "menuitem";
pub const ROLE_SEPARATOR: &str = "separator";
pub const ARIA_HASPOPUP: &str = "menu";

pub const HELM_ICON: &str = "/icons/helm-white.svg";
pub const OPERATOR_ICON: &str = "/icons/operator-framework-white.svg";

/// One row of the navigation block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    Label(&'static str),
    Link {
        href: String,
        label: &'static str,
        icon: &'static str,
        icon_alt: &'static str,
    },
    Separator,
}

impl MenuEntry {
    /// ARIA role rendered for the entry. Labels carry none.
    pub fn role(&self) -> Option<&'static str> {
        match self {
            Self::Label(_) => None,
            Self::Link { .. } => Some(ROLE_MENU_ITEM),
            Self::Separator => Some(ROLE_SEPARATOR),
        }
    }
}

/// Navigation block for the selected cluster and namespace.
pub fn navigation_entries(ctx: &ClusterContext) -> Vec<MenuEntry> {
    vec![
        MenuEntry::Label("Administration"),
        MenuEntry::Link {
            href: ctx.app_repositories_path(),
            label: "App Repositories",
            icon: HELM_ICON,
            icon_alt: "helm-icon",
        },
        MenuEntry::Separator,
        MenuEntry::Link {
            href: ctx.operators_path(),
            label: "Operators",
            icon: OPERATOR_ICON,
            icon_alt: "operators-icon",
        },
        MenuEntry::Separator,
    ]
}

/// `aria-expanded` value for the trigger button.
pub fn aria_expanded(visibility: MenuVisibility) -> &'static str {
    if visibility.is_open() { "true" } else { "false" }
}

/// Glyph shown next to the theme toggle.
pub fn theme_glyph(theme: ThemePreference) -> &'static str {
    match theme {
        ThemePreference::Light => "\u{2600}",
        ThemePreference::Dark => "\u{263E}",
    }
}
