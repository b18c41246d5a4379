use std::sync::OnceLock;

use fxhash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::{
    constants::{MAX_SNAP_DISTANCE, MAX_WAYPOINTS, MIN_WAYPOINTS},
    distance::Kilometers,
    error::{GraphError, GraphResult},
    geopoint::GeoPoint,
    graph::{GeoGraph, Graph},
    location_index::LocationIndex,
    projection::TreeSegment,
    routing::{dijkstra::Dijkstra, routing_path::RoutingPath},
    snap::Snap,
    spanning_tree::prim::Prim,
    stopwatch::Stopwatch,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub path: Vec<GeoPoint>,
    pub distance: Kilometers,
}

/// Spanning tree edge between two waypoints, following the network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaypointSegment {
    /// Index of the parent waypoint in the request
    pub from_waypoint: usize,
    pub to_waypoint: usize,
    /// Snapped node of the parent waypoint
    pub from: GeoPoint,
    pub to: GeoPoint,
    pub weight: Kilometers,
    pub path: Vec<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WaypointTree {
    pub segments: Vec<WaypointSegment>,
    pub total_weight: Kilometers,
}

/// Geo graph together with its nearest-node index.
///
/// The index is built on the first coordinate query and dropped whenever a node is
/// added or replaced. Edges do not affect it.
#[derive(Default)]
pub struct GeoEngine {
    graph: GeoGraph,
    index: OnceLock<LocationIndex>,
}

impl GeoEngine {
    pub fn new() -> Self {
        GeoEngine::default()
    }

    pub fn from_graph(graph: GeoGraph) -> Self {
        GeoEngine {
            graph,
            index: OnceLock::new(),
        }
    }

    pub fn graph(&self) -> &GeoGraph {
        &self.graph
    }

    pub fn index(&self) -> &LocationIndex {
        self.index
            .get_or_init(|| LocationIndex::build_from_graph(&self.graph))
    }

    pub fn add_node(&mut self, id: impl Into<String>, lat: f64, lon: f64) -> GraphResult<()> {
        self.graph.add_node(id, lat, lon)?;
        self.index.take();
        Ok(())
    }

    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        self.graph.add_edge(from, to)
    }

    /// Coordinates of the shortest path, empty when either id is unknown or no path
    /// exists.
    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<GeoPoint> {
        let path = self.graph.shortest_path(start, end);
        self.graph.project_path(&path).unwrap_or_default()
    }

    /// Tree edges in coordinates, empty when `start` is unknown or isolated.
    pub fn minimum_spanning_tree(&self, start: &str) -> Vec<TreeSegment> {
        let tree = self.graph.minimum_spanning_tree(start);
        self.graph.project_tree(&tree).unwrap_or_default()
    }

    pub fn nearest_node(&self, point: &GeoPoint) -> Option<Snap> {
        self.index().snap(point)
    }

    /// Nearest node within [`MAX_SNAP_DISTANCE`] of `point`.
    fn snap(&self, point: &GeoPoint) -> GraphResult<Snap> {
        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        self.index()
            .snap_within(point, MAX_SNAP_DISTANCE)
            .ok_or(GraphError::NoNodeNearby {
                lat: point.lat,
                lon: point.lon,
                max: MAX_SNAP_DISTANCE,
            })
    }

    /// Shortest path between the nodes closest to `from` and `to`. Both points must be
    /// within [`MAX_SNAP_DISTANCE`] of a node.
    pub fn route_between(&self, from: GeoPoint, to: GeoPoint) -> GraphResult<RouteResult> {
        let start = self.snap(&from)?;
        let end = self.snap(&to)?;

        debug!(
            start = start.node_id(),
            end = end.node_id(),
            "snapped route endpoints"
        );

        let path = self
            .graph
            .checked_shortest_path(start.node_id(), end.node_id())?;

        Ok(RouteResult {
            path: self.graph.project_path(&path)?,
            distance: path.distance(),
        })
    }

    /// Minimum spanning tree connecting `waypoints`, weighted by network distance.
    ///
    /// Every waypoint is snapped to its nearest node and the tree is grown from the
    /// first snapped one. Waypoints with no node within [`MAX_SNAP_DISTANCE`], or with
    /// no path to the first snapped waypoint, are left out.
    pub fn waypoint_tree(&self, waypoints: &[GeoPoint]) -> GraphResult<WaypointTree> {
        if waypoints.len() < MIN_WAYPOINTS {
            return Err(GraphError::TooFewWaypoints {
                min: MIN_WAYPOINTS,
                got: waypoints.len(),
            });
        }
        if waypoints.len() > MAX_WAYPOINTS {
            return Err(GraphError::TooManyWaypoints {
                max: MAX_WAYPOINTS,
                got: waypoints.len(),
            });
        }

        if self.graph.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let stopwatch = Stopwatch::new("engine/waypoint_tree");

        // (index in the request, snap)
        let snaps: Vec<(usize, Snap)> = waypoints
            .iter()
            .enumerate()
            .filter_map(|(waypoint, point)| match self.snap(point) {
                Ok(snap) => Some((waypoint, snap)),
                Err(error) => {
                    warn!(waypoint, %error, "skipping waypoint");
                    None
                }
            })
            .collect();

        if snaps.len() < MIN_WAYPOINTS {
            return Err(GraphError::TooFewSnappedWaypoints {
                min: MIN_WAYPOINTS,
                got: snaps.len(),
            });
        }

        let mut waypoint_graph = WaypointGraph::new(snaps.len());
        let mut paths: FxHashMap<(usize, usize), RoutingPath> = FxHashMap::default();
        let mut dijkstra = Dijkstra::new(&self.graph);

        for i in 0..snaps.len() {
            for j in (i + 1)..snaps.len() {
                let path = dijkstra.calc_path(snaps[i].1.node_id(), snaps[j].1.node_id());
                if path.is_empty() {
                    continue;
                }

                waypoint_graph.add_edge(i, j, path.distance());
                paths.insert((i, j), path);
            }
        }

        let tree = Prim::new(&waypoint_graph).calc_tree(waypoint_graph.key(0));

        let mut segments = Vec::with_capacity(tree.len());
        for edge in tree.edges() {
            let (Some(from), Some(to)) = (
                waypoint_graph.index_of(edge.parent()),
                waypoint_graph.index_of(edge.child()),
            ) else {
                continue;
            };
            let Some(path) = paths.get(&(from.min(to), from.max(to))) else {
                continue;
            };

            let mut points = self.graph.project_path(path)?;
            if from > to {
                points.reverse();
            }

            segments.push(WaypointSegment {
                from_waypoint: snaps[from].0,
                to_waypoint: snaps[to].0,
                from: snaps[from].1.coordinates(),
                to: snaps[to].1.coordinates(),
                weight: edge.weight(),
                path: points,
            });
        }

        info!(
            waypoints = waypoints.len(),
            segments = segments.len(),
            total_weight = tree.total_weight().value(),
            "waypoint tree"
        );
        stopwatch.report();

        Ok(WaypointTree {
            segments,
            total_weight: tree.total_weight(),
        })
    }
}

/// Complete graph over waypoint indices, keyed `"0"`, `"1"`, ...
struct WaypointGraph {
    keys: Vec<String>,
    adjacency: Vec<Vec<(usize, Kilometers)>>,
}

impl WaypointGraph {
    fn new(size: usize) -> Self {
        WaypointGraph {
            keys: (0..size).map(|i| i.to_string()).collect(),
            adjacency: vec![Vec::new(); size],
        }
    }

    fn add_edge(&mut self, a: usize, b: usize, weight: Kilometers) {
        self.adjacency[a].push((b, weight));
        self.adjacency[b].push((a, weight));
    }

    fn key(&self, index: usize) -> &str {
        &self.keys[index]
    }

    fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|k| k == key)
    }
}

impl Graph for WaypointGraph {
    fn node_key(&self, node_id: &str) -> Option<&str> {
        self.index_of(node_id).map(|index| self.key(index))
    }

    fn node_count(&self) -> usize {
        self.keys.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    fn neighbors(&self, node_id: &str) -> impl Iterator<Item = (&str, Kilometers)> {
        self.index_of(node_id).into_iter().flat_map(move |index| {
            self.adjacency[index]
                .iter()
                .map(move |&(other, weight)| (self.key(other), weight))
        })
    }
}
