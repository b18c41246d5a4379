use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    engine::{GeoEngine, RouteResult, WaypointTree},
    error::GraphResult,
    geopoint::GeoPoint,
    projection::TreeSegment,
    snap::Snap,
};

/// Cloneable handle to one engine shared between threads. Mutations take the write
/// lock, queries the read lock.
#[derive(Clone, Default)]
pub struct SharedGeoEngine {
    inner: Arc<RwLock<GeoEngine>>,
}

impl SharedGeoEngine {
    pub fn new(engine: GeoEngine) -> Self {
        SharedGeoEngine {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn read(&self) -> RwLockReadGuard<'_, GeoEngine> {
        self.inner.read()
    }

    pub fn write(&self) -> RwLockWriteGuard<'_, GeoEngine> {
        self.inner.write()
    }

    pub fn add_node(&self, id: impl Into<String>, lat: f64, lon: f64) -> GraphResult<()> {
        self.inner.write().add_node(id, lat, lon)
    }

    pub fn add_edge(&self, from: &str, to: &str) -> bool {
        self.inner.write().add_edge(from, to)
    }

    pub fn shortest_path(&self, start: &str, end: &str) -> Vec<GeoPoint> {
        self.inner.read().shortest_path(start, end)
    }

    pub fn minimum_spanning_tree(&self, start: &str) -> Vec<TreeSegment> {
        self.inner.read().minimum_spanning_tree(start)
    }

    pub fn nearest_node(&self, point: &GeoPoint) -> Option<Snap> {
        self.inner.read().nearest_node(point)
    }

    pub fn route_between(&self, from: GeoPoint, to: GeoPoint) -> GraphResult<RouteResult> {
        self.inner.read().route_between(from, to)
    }

    pub fn waypoint_tree(&self, waypoints: &[GeoPoint]) -> GraphResult<WaypointTree> {
        self.inner.read().waypoint_tree(waypoints)
    }
}
