use crate::{distance::Kilometers, geopoint::GeoPoint};

/// Adjacency entry: the node on the other end of an edge and the edge weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    node_id: String,
    weight: Kilometers,
}

impl Neighbor {
    pub(crate) fn new(node_id: String, weight: Kilometers) -> Self {
        Neighbor { node_id, weight }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn weight(&self) -> Kilometers {
        self.weight
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    id: String,
    coordinates: GeoPoint,
    neighbors: Vec<Neighbor>,
}

impl Node {
    pub(crate) fn new(id: String, coordinates: GeoPoint) -> Self {
        Node {
            id,
            coordinates,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn coordinates(&self) -> GeoPoint {
        self.coordinates
    }

    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub(crate) fn push_neighbor(&mut self, neighbor: Neighbor) {
        self.neighbors.push(neighbor);
    }
}
