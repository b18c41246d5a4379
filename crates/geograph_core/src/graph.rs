use fxhash::FxHashMap;
use tracing::debug;

use crate::{
    distance::Kilometers,
    error::{GraphError, GraphResult},
    geopoint::GeoPoint,
    node::{Neighbor, Node},
    routing::{dijkstra::Dijkstra, routing_path::RoutingPath},
    spanning_tree::{prim::Prim, spanning_tree::SpanningTree},
};

/// Read access the search algorithms need from a weighted undirected graph.
pub trait Graph {
    /// Graph-owned key for `node_id`, if the node exists.
    fn node_key(&self, node_id: &str) -> Option<&str>;

    fn node_count(&self) -> usize;

    fn node_ids(&self) -> impl Iterator<Item = &str>;

    /// Adjacency entries of `node_id`, empty for an unknown node.
    fn neighbors(&self, node_id: &str) -> impl Iterator<Item = (&str, Kilometers)>;

    fn contains(&self, node_id: &str) -> bool {
        self.node_key(node_id).is_some()
    }
}

/// In-memory undirected graph over geographic nodes. Edge weights are the haversine
/// distance between the two endpoints, computed once when the edge is added.
///
/// No internal synchronization: share it through [`crate::shared::SharedGeoEngine`].
#[derive(Debug, Clone, Default)]
pub struct GeoGraph {
    nodes: FxHashMap<String, Node>,
    edges: usize,
}

impl GeoGraph {
    pub fn new() -> Self {
        GeoGraph::default()
    }

    /// Inserts the node, or replaces it when `id` already exists.
    ///
    /// Replacing a node drops its own adjacency list. Entries that other nodes hold
    /// towards `id` are kept, with the weight computed from the old coordinates.
    pub fn add_node(&mut self, id: impl Into<String>, lat: f64, lon: f64) -> GraphResult<()> {
        let id = id.into();
        let coordinates = GeoPoint::new(lat, lon);

        if !coordinates.is_valid() {
            return Err(GraphError::InvalidCoordinates { id, lat, lon });
        }

        if let Some(previous) = self.nodes.insert(id.clone(), Node::new(id, coordinates)) {
            debug!(
                node = previous.id(),
                dropped_edges = previous.degree(),
                "replaced existing node"
            );
        }

        Ok(())
    }

    /// Connects two existing nodes. Returns `false` and leaves the graph untouched when
    /// either id is unknown.
    ///
    /// Every call appends a new entry on both sides, even if the pair is already
    /// connected. `from == to` appends two zero-weight entries to the same node.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let (Some(from_point), Some(to_point)) = (self.coordinates(from), self.coordinates(to))
        else {
            return false;
        };

        let weight = from_point.haversine_distance(&to_point);

        if let Some(node) = self.nodes.get_mut(from) {
            node.push_neighbor(Neighbor::new(to.to_string(), weight));
        }

        if let Some(node) = self.nodes.get_mut(to) {
            node.push_neighbor(Neighbor::new(from.to_string(), weight));
        }

        self.edges += 1;

        true
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub fn coordinates(&self, id: &str) -> Option<GeoPoint> {
        self.nodes.get(id).map(Node::coordinates)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.values()
    }

    /// Number of successful [`GeoGraph::add_edge`] calls.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Empty path when either id is unknown or the two nodes are not connected.
    pub fn shortest_path(&self, start: &str, end: &str) -> RoutingPath {
        Dijkstra::new(self).calc_path(start, end)
    }

    pub fn checked_shortest_path(&self, start: &str, end: &str) -> GraphResult<RoutingPath> {
        Dijkstra::new(self).try_calc_path(start, end)
    }

    /// Empty tree when `root` is unknown. Nodes outside `root`'s component are left out.
    pub fn minimum_spanning_tree(&self, root: &str) -> SpanningTree {
        Prim::new(self).calc_tree(root)
    }

    pub fn checked_minimum_spanning_tree(&self, root: &str) -> GraphResult<SpanningTree> {
        Prim::new(self).try_calc_tree(root)
    }
}

impl Graph for GeoGraph {
    fn node_key(&self, node_id: &str) -> Option<&str> {
        self.nodes
            .get_key_value(node_id)
            .map(|(key, _)| key.as_str())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    fn neighbors(&self, node_id: &str) -> impl Iterator<Item = (&str, Kilometers)> {
        self.nodes
            .get(node_id)
            .into_iter()
            .flat_map(|node| node.neighbors())
            .map(|neighbor| (neighbor.node_id(), neighbor.weight()))
    }
}
