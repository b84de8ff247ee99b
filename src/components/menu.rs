//! Header dropdown menu with administration links, theme toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered in the dashboard header. Reads the cluster selection from its
//! parent, keeps its own `MenuState`, and talks to the browser only through
//! the injected settings, theme, and outside-click ports.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use std::sync::Arc;

use leptos::html;
use leptos::prelude::*;
use leptos_meta::Stylesheet;
use leptos_router::components::A;

use crate::components::menu_entries::{
    ARIA_HASPOPUP, MenuEntry, ROLE_MENU, ROLE_MENU_ITEM, ROLE_SEPARATOR, aria_expanded, navigation_entries, theme_glyph,
};
use crate::config::MenuConfig;
use crate::state::cluster::ClusterContext;
use crate::state::menu::MenuState;
use crate::util::outside_click::{OutsideClick, Subscription, default_detector};
use crate::util::settings::{SettingsStore, default_store};
use crate::util::theme::{self, ThemePort, default_port};

/// Event handlers for one menu instance.
///
/// Holds the reactive state cell and the ports it writes through. Cloned into
/// each view closure.
#[derive(Clone)]
pub struct MenuHandlers {
    state: RwSignal<MenuState>,
    settings: Arc<dyn SettingsStore>,
    theme_port: Arc<dyn ThemePort>,
    storage_key: String,
    on_logout: Callback<()>,
}

impl MenuHandlers {
    /// Create the closed menu state with the default theme.
    ///
    /// The stored preference is not read here: server and client must render
    /// the same markup, so `load_preference` runs after hydration.
    pub fn mount(
        settings: Arc<dyn SettingsStore>,
        theme_port: Arc<dyn ThemePort>,
        storage_key: impl Into<String>,
        on_logout: Callback<()>,
    ) -> Self {
        Self {
            state: RwSignal::new(MenuState::default()),
            settings,
            theme_port,
            storage_key: storage_key.into(),
            on_logout,
        }
    }

    /// Read the stored theme into state and apply it to the document.
    pub fn load_preference(&self) {
        let stored = theme::read_preference(self.settings.as_ref(), &self.storage_key);
        self.theme_port.apply(stored);
        self.state.update(|s| s.theme = stored);
    }

    pub fn state(&self) -> RwSignal<MenuState> {
        self.state
    }

    /// Stylesheet for the current theme.
    pub fn stylesheet_href(&self, config: &MenuConfig) -> String {
        config.stylesheet_for(self.state.get().theme).to_owned()
    }

    /// Route `handle_outside_click` from `detector` for interactions outside
    /// `boundary`.
    pub fn subscribe_outside(&self, detector: &dyn OutsideClick, boundary: NodeRef<html::Div>) -> Subscription {
        let handlers = self.clone();
        let on_outside = Callback::new(move |()| handlers.handle_outside_click());
        detector.on_outside_interaction(boundary, on_outside)
    }

    pub fn toggle_open(&self) {
        self.state.update(MenuState::toggle_open);
    }

    /// Navigation link followed; the panel toggles like the trigger does.
    pub fn follow_link(&self) {
        self.toggle_open();
    }

    pub fn handle_outside_click(&self) {
        if self.state.with_untracked(MenuState::is_open) {
            self.state.update(MenuState::handle_outside_click);
        }
    }

    pub fn toggle_theme(&self) {
        let current = self.state.with_untracked(|s| s.theme);
        let next = theme::toggle(current, self.settings.as_ref(), self.theme_port.as_ref(), &self.storage_key);
        self.state.update(|s| s.theme = next);
    }

    pub fn logout(&self) {
        self.on_logout.run(());
    }
}

fn render_entry(entry: MenuEntry, handlers: &MenuHandlers) -> AnyView {
    match entry {
        MenuEntry::Label(text) => view! {
            <label class="dropdown-menu-padding dropdown-menu-label">{text}</label>
        }
        .into_any(),
        MenuEntry::Link { href, label, icon, icon_alt } => {
            let handlers = handlers.clone();
            view! {
                <A href=href attr:class="dropdown-menu-link" on:click=move |_| handlers.follow_link()>
                    <div class="dropdown-menu-item" role=ROLE_MENU_ITEM>
                        <img src=icon alt=icon_alt/>
                        <span>{label}</span>
                    </div>
                </A>
            }
            .into_any()
        }
        MenuEntry::Separator => view! {
            <div class="dropdown-divider" role=ROLE_SEPARATOR></div>
        }
        .into_any(),
    }
}

/// Dropdown navigation menu for the dashboard header.
///
/// Ports default to the browser implementations (`localStorage`, the
/// `<body>` theme attribute, document pointer listeners) when not injected.
#[component]
pub fn MenuPanel(
    #[prop(into)] cluster: Signal<ClusterContext>,
    #[prop(into)] app_version: String,
    on_logout: Callback<()>,
    #[prop(optional)] config: Option<MenuConfig>,
    #[prop(optional)] settings: Option<Arc<dyn SettingsStore>>,
    #[prop(optional)] theme_port: Option<Arc<dyn ThemePort>>,
    #[prop(optional)] outside_click: Option<Arc<dyn OutsideClick>>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let settings = settings.unwrap_or_else(default_store);
    let theme_port = theme_port.unwrap_or_else(|| default_port(&config.theme_attribute));
    let outside_click = outside_click.unwrap_or_else(default_detector);

    let handlers = MenuHandlers::mount(settings, theme_port, config.storage_key.clone(), on_logout);
    let state = handlers.state();
    let open = move || state.get().is_open();
    let is_dark = move || state.get().theme.is_dark();

    let boundary = NodeRef::<html::Div>::new();
    let subscription = StoredValue::new_local(Some(handlers.subscribe_outside(outside_click.as_ref(), boundary)));
    on_cleanup(move || {
        let _ = subscription.try_update_value(Option::<Subscription>::take);
    });

    // Effects only run in the browser, after hydration.
    Effect::new({
        let handlers = handlers.clone();
        move |_| handlers.load_preference()
    });

    let stylesheet = {
        let handlers = handlers.clone();
        let config = config.clone();
        move || {
            let href = handlers.stylesheet_href(&config);
            view! { <Stylesheet id="menu-theme" href=href/> }
        }
    };

    let on_trigger = {
        let handlers = handlers.clone();
        move |_| handlers.toggle_open()
    };
    let on_theme = {
        let handlers = handlers.clone();
        move |_| handlers.toggle_theme()
    };
    let on_logout_click = {
        let handlers = handlers.clone();
        move |_| handlers.logout()
    };
    let entries = {
        let handlers = handlers.clone();
        move || {
            navigation_entries(&cluster.get())
                .into_iter()
                .map(|entry| render_entry(entry, &handlers))
                .collect_view()
        }
    };

    view! {
        {stylesheet}
        <div class:drawer-backdrop=open></div>
        <div class="dropdown kubeapps-menu" class:open=open node_ref=boundary>
            <button
                class="kubeapps-nav-link"
                on:click=on_trigger
                aria-expanded=move || aria_expanded(state.get().visibility)
                aria-haspopup=ARIA_HASPOPUP
            >
                <span class="kubeapps-nav-link__icon">"\u{2630}"</span>
            </button>
            <div
                class="dropdown-menu dropdown-configuration-menu transition-drawer"
                class:transition-drawer--open=open
                style:transition-duration=config.transition_duration()
                role=ROLE_MENU
                hidden=move || !open()
            >
                <div>{entries}</div>
                <div>
                    <div class="dropdown-menu-subtext">
                        "Made with \u{2665} by Bitnami and "
                        <a
                            href=config.contributors_url.clone()
                            class="type-color-white"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            "contributors"
                        </a>
                        "."
                        <br/>
                        {app_version}
                        <br/>
                        <A href=config.docs_route.clone()>"API documentation portal \u{1F310}"</A>
                        <label class="dropdown-theme-toggle">
                            <span class="toggle-label-text">
                                {move || theme_glyph(state.get().theme)}
                            </span>
                            <input type="checkbox" prop:checked=is_dark on:change=on_theme/>
                        </label>
                    </div>
                    <div class="dropdown-menu-padding logout-button">
                        <button class="btn btn--primary btn--sm btn--outline" on:click=on_logout_click>
                            "Log out"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
