use super::*;

fn ctx() -> ClusterContext {
    ClusterContext::new("default", "kubeapps")
}

#[test]
fn navigation_starts_with_administration_label() {
    let entries = navigation_entries(&ctx());
    assert_eq!(entries[0], MenuEntry::Label("Administration"));
    assert_eq!(entries[0].role(), None);
}

#[test]
fn navigation_links_target_cluster_routes() {
    let hrefs: Vec<String> = navigation_entries(&ctx())
        .into_iter()
        .filter_map(|e| match e {
            MenuEntry::Link { href, .. } => Some(href),
            _ => None,
        })
        .collect();
    assert_eq!(
        hrefs,
        vec!["/c/default/ns/kubeapps/config/repos".to_owned(), "/c/default/ns/kubeapps/operators".to_owned()]
    );
}

#[test]
fn every_link_is_a_menuitem_and_every_divider_a_separator() {
    let entries = navigation_entries(&ctx());
    let links = entries.iter().filter(|e| matches!(e, MenuEntry::Link { .. }));
    for link in links {
        assert_eq!(link.role(), Some(ROLE_MENU_ITEM));
    }
    let separators = entries.iter().filter(|e| **e == MenuEntry::Separator).count();
    assert_eq!(separators, 2);
    assert!(
        entries
            .iter()
            .filter(|e| **e == MenuEntry::Separator)
            .all(|e| e.role() == Some(ROLE_SEPARATOR))
    );
}

#[test]
fn each_link_is_followed_by_a_separator() {
    let entries = navigation_entries(&ctx());
    for (i, entry) in entries.iter().enumerate() {
        if matches!(entry, MenuEntry::Link { .. }) {
            assert_eq!(entries.get(i + 1), Some(&MenuEntry::Separator));
        }
    }
}

#[test]
fn navigation_is_deterministic_for_same_context() {
    assert_eq!(navigation_entries(&ctx()), navigation_entries(&ctx()));
}

#[test]
fn aria_expanded_tracks_visibility() {
    assert_eq!(aria_expanded(MenuVisibility::Closed), "false");
    assert_eq!(aria_expanded(MenuVisibility::Open), "true");
}

#[test]
fn theme_glyph_differs_per_theme() {
    assert_ne!(theme_glyph(ThemePreference::Light), theme_glyph(ThemePreference::Dark));
}
