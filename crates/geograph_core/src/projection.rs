use serde::Serialize;

use crate::{
    distance::Kilometers,
    error::{GraphError, GraphResult},
    geopoint::GeoPoint,
    graph::GeoGraph,
    routing::routing_path::RoutingPath,
    spanning_tree::spanning_tree::SpanningTree,
};

/// One spanning tree edge in coordinates, parent first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TreeSegment {
    pub from: GeoPoint,
    pub to: GeoPoint,
    /// Weight stored on the edge when it was added
    pub weight: Kilometers,
}

impl GeoGraph {
    fn require_coordinates(&self, id: &str) -> GraphResult<GeoPoint> {
        self.coordinates(id)
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    /// Coordinates of each node id, in order.
    pub fn project_node_ids<S: AsRef<str>>(&self, node_ids: &[S]) -> GraphResult<Vec<GeoPoint>> {
        node_ids
            .iter()
            .map(|id| self.require_coordinates(id.as_ref()))
            .collect()
    }

    pub fn project_path(&self, path: &RoutingPath) -> GraphResult<Vec<GeoPoint>> {
        self.project_node_ids(path.node_ids())
    }

    pub fn project_tree(&self, tree: &SpanningTree) -> GraphResult<Vec<TreeSegment>> {
        tree.edges()
            .iter()
            .map(|edge| {
                Ok(TreeSegment {
                    from: self.require_coordinates(edge.parent())?,
                    to: self.require_coordinates(edge.child())?,
                    weight: edge.weight(),
                })
            })
            .collect()
    }
}
