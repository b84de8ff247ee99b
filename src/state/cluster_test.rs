use super::*;

fn state_with(current: &str, entries: &[(&str, &str)]) -> ClustersState {
    ClustersState {
        current_cluster: current.to_owned(),
        clusters: entries
            .iter()
            .map(|(name, ns)| {
                (
                    (*name).to_owned(),
                    ClusterInfo { current_namespace: (*ns).to_owned(), namespaces: vec![(*ns).to_owned()] },
                )
            })
            .collect(),
    }
}

#[test]
fn context_uses_current_cluster_namespace() {
    let state = state_with("default", &[("default", "kubeapps"), ("other", "apps")]);
    assert_eq!(state.context(), ClusterContext::new("default", "kubeapps"));
}

#[test]
fn context_follows_cluster_switch() {
    let mut state = state_with("default", &[("default", "kubeapps"), ("other", "apps")]);
    state.current_cluster = "other".to_owned();
    assert_eq!(state.context(), ClusterContext::new("other", "apps"));
}

#[test]
fn context_for_unknown_cluster_has_empty_namespace() {
    let state = state_with("missing", &[("default", "kubeapps")]);
    let ctx = state.context();
    assert_eq!(ctx.cluster_id, "missing");
    assert!(ctx.namespace.is_empty());
}

#[test]
fn clusters_state_deserializes_from_json() {
    let raw = r#"{
        "current_cluster": "default",
        "clusters": {
            "default": { "current_namespace": "kubeapps", "namespaces": ["kubeapps", "default"] }
        }
    }"#;
    let state: ClustersState = serde_json::from_str(raw).unwrap();
    assert_eq!(state.context(), ClusterContext::new("default", "kubeapps"));
    assert_eq!(state.clusters["default"].namespaces.len(), 2);
}
