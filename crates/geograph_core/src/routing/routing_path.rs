use serde::Serialize;

use crate::distance::Kilometers;

/// Ordered node ids from start to end, both included. Empty when no path exists.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct RoutingPath {
    node_ids: Vec<String>,
    distance: Kilometers,
}

impl RoutingPath {
    pub fn new(node_ids: Vec<String>, distance: Kilometers) -> RoutingPath {
        RoutingPath { node_ids, distance }
    }

    pub fn empty() -> RoutingPath {
        RoutingPath::default()
    }

    pub fn node_ids(&self) -> &[String] {
        &self.node_ids
    }

    /// Sum of the traversed edge weights.
    pub fn distance(&self) -> Kilometers {
        self.distance
    }

    pub fn len(&self) -> usize {
        self.node_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    pub fn start(&self) -> Option<&str> {
        self.node_ids.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.node_ids.last().map(String::as_str)
    }
}
