use super::*;

#[test]
fn app_repositories_path_for_default_cluster() {
    assert_eq!(app_repositories("default", "kubeapps"), "/c/default/ns/kubeapps/config/repos");
}

#[test]
fn operators_path_for_default_cluster() {
    assert_eq!(operators("default", "kubeapps"), "/c/default/ns/kubeapps/operators");
}

#[test]
fn paths_are_deterministic() {
    let ctx = ClusterContext::new("default", "kubeapps");
    assert_eq!(ctx.app_repositories_path(), ctx.app_repositories_path());
    assert_eq!(ctx.operators_path(), ctx.operators_path());
    assert_ne!(ctx.app_repositories_path(), ctx.operators_path());
}

#[test]
fn paths_depend_on_both_inputs() {
    let base = ClusterContext::new("default", "kubeapps");
    let other_cluster = ClusterContext::new("edge", "kubeapps");
    let other_ns = ClusterContext::new("default", "apps");
    assert_ne!(base.operators_path(), other_cluster.operators_path());
    assert_ne!(base.operators_path(), other_ns.operators_path());
}

#[test]
fn identifiers_pass_through_unvalidated() {
    assert_eq!(app_repositories("", "a b/c"), "/c//ns/a b/c/config/repos");
}
