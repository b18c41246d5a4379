use rstar::RTree;
use rstar::primitives::GeomWithData;
use tracing::debug;

use crate::distance::Kilometers;
use crate::geopoint::GeoPoint;
use crate::graph::GeoGraph;
use crate::snap::Snap;

struct IndexedNode {
    node_id: String,
    coordinates: GeoPoint,
}

/// Nodes are stored as unit vectors so the euclidean nearest neighbor in the tree is
/// also the nearest node along the sphere, across the antimeridian and near the poles.
type LocationIndexObject = GeomWithData<[f64; 3], IndexedNode>;

pub struct LocationIndex {
    tree: RTree<LocationIndexObject>,
}

impl LocationIndex {
    pub fn build_from_graph(graph: &GeoGraph) -> LocationIndex {
        let objects: Vec<LocationIndexObject> = graph
            .nodes()
            .map(|node| {
                LocationIndexObject::new(
                    node.coordinates().to_unit_vector(),
                    IndexedNode {
                        node_id: node.id().to_string(),
                        coordinates: node.coordinates(),
                    },
                )
            })
            .collect();

        let tree = RTree::bulk_load(objects);

        debug!(nodes = tree.size(), "built location index");

        LocationIndex { tree }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Closest node to `coordinates`, `None` when the index is empty.
    pub fn snap(&self, coordinates: &GeoPoint) -> Option<Snap> {
        self.tree
            .nearest_neighbor(&coordinates.to_unit_vector())
            .map(|nearest| {
                let node = &nearest.data;
                Snap::new(
                    node.node_id.clone(),
                    node.coordinates,
                    coordinates.haversine_distance(&node.coordinates),
                )
            })
    }

    /// Closest node to `coordinates` if it lies within `max_distance`.
    pub fn snap_within(&self, coordinates: &GeoPoint, max_distance: Kilometers) -> Option<Snap> {
        self.snap(coordinates)
            .filter(|snap| snap.distance() <= max_distance)
    }
}
