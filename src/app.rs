//! Root application component hosting the dashboard header menu.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_params_map,
};

use crate::components::menu::MenuPanel;
use crate::state::cluster::{ClusterInfo, ClustersState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn initial_clusters() -> ClustersState {
    let mut state = ClustersState { current_cluster: "default".to_owned(), ..ClustersState::default() };
    state.clusters.insert(
        "default".to_owned(),
        ClusterInfo { current_namespace: "kubeapps".to_owned(), namespaces: vec!["kubeapps".to_owned()] },
    );
    state
}

/// Placeholder for a routed dashboard view, naming the route and its scope.
#[component]
fn RouteView(title: &'static str) -> impl IntoView {
    let params = use_params_map();
    let scope = move || {
        let p = params.read();
        match (p.get("cluster"), p.get("namespace")) {
            (Some(c), Some(ns)) => format!("{c} / {ns}"),
            _ => String::new(),
        }
    };
    view! {
        <section class="route-view">
            <h1>{title}</h1>
            <p class="route-view__scope">{scope}</p>
        </section>
    }
}

/// Root application component.
///
/// Provides the cluster selection context and mounts the header menu inside
/// the router so its links resolve client-side.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let clusters = RwSignal::new(initial_clusters());
    provide_context(clusters);

    let cluster = Signal::derive(move || clusters.get().context());
    let on_logout = Callback::new(move |()| {
        leptos::logging::log!("logout requested");
        #[cfg(feature = "hydrate")]
        {
            if let Some(w) = web_sys::window() {
                if let Err(e) = w.location().set_href("/") {
                    leptos::logging::warn!("logout redirect failed: {e:?}");
                }
            }
        }
    });

    view! {
        <Title text="Dashboard"/>

        <Router>
            <header class="header">
                <MenuPanel
                    cluster=cluster
                    app_version=format!("v{}", env!("CARGO_PKG_VERSION"))
                    on_logout=on_logout
                />
            </header>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <RouteView title="Applications"/> }/>
                    <Route path=StaticSegment("docs") view=|| view! { <RouteView title="API documentation"/> }/>
                    <Route
                        path=(
                            StaticSegment("c"),
                            ParamSegment("cluster"),
                            StaticSegment("ns"),
                            ParamSegment("namespace"),
                            StaticSegment("config"),
                            StaticSegment("repos"),
                        )
                        view=|| view! { <RouteView title="App Repositories"/> }
                    />
                    <Route
                        path=(
                            StaticSegment("c"),
                            ParamSegment("cluster"),
                            StaticSegment("ns"),
                            ParamSegment("namespace"),
                            StaticSegment("operators"),
                        )
                        view=|| view! { <RouteView title="Operators"/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
