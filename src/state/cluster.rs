#[cfg(test)]
#[path = "cluster_test.rs"]
mod cluster_test;

use std::collections::BTreeMap;

/// Cluster and namespace currently selected in the dashboard.
///
/// Identifiers are passed through to route builders unvalidated.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClusterContext {
    pub cluster_id: String,
    pub namespace: String,
}

impl ClusterContext {
    pub fn new(cluster_id: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self { cluster_id: cluster_id.into(), namespace: namespace.into() }
    }
}

/// Per-cluster selection tracked by the dashboard.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClusterInfo {
    pub current_namespace: String,
    pub namespaces: Vec<String>,
}

/// All known clusters plus the one currently selected.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClustersState {
    pub current_cluster: String,
    pub clusters: BTreeMap<String, ClusterInfo>,
}

impl ClustersState {
    /// Selection for the menu links.
    ///
    /// An unknown current cluster yields an empty namespace; the router is
    /// left to report whatever that path resolves to.
    pub fn context(&self) -> ClusterContext {
        let namespace = self
            .clusters
            .get(&self.current_cluster)
            .map_or_else(String::new, |c| c.current_namespace.clone());
        ClusterContext::new(self.current_cluster.clone(), namespace)
    }
}
