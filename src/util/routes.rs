//! Dashboard route builders for menu links.
//!
//! Identifiers are interpolated as given; the router decides what an
//! unknown cluster or namespace resolves to.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::cluster::ClusterContext;

fn namespaced(cluster: &str, namespace: &str, rest: &str) -> String {
    format!("/c/{cluster}/ns/{namespace}/{rest}")
}

/// Administration view for app repositories.
pub fn app_repositories(cluster: &str, namespace: &str) -> String {
    namespaced(cluster, namespace, "config/repos")
}

/// Operators catalog.
pub fn operators(cluster: &str, namespace: &str) -> String {
    namespaced(cluster, namespace, "operators")
}

impl ClusterContext {
    pub fn app_repositories_path(&self) -> String {
        app_repositories(&self.cluster_id, &self.namespace)
    }

    pub fn operators_path(&self) -> String {
        operators(&self.cluster_id, &self.namespace)
    }
}
