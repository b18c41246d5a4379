use serde::Serialize;

use crate::{distance::Kilometers, geopoint::GeoPoint};

/// Graph node closest to a query point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snap {
    node_id: String,
    coordinates: GeoPoint,
    distance: Kilometers,
}

impl Snap {
    pub fn new(node_id: String, coordinates: GeoPoint, distance: Kilometers) -> Self {
        Snap {
            node_id,
            coordinates,
            distance,
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn coordinates(&self) -> GeoPoint {
        self.coordinates
    }

    /// Distance between the query point and the node.
    pub fn distance(&self) -> Kilometers {
        self.distance
    }
}
