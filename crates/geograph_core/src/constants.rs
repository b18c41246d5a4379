use crate::distance::Kilometers;

pub(crate) const EARTH_RADIUS_KM: f64 = 6_371.0;

pub(crate) const MAX_LATITUDE: f64 = 90.0;
pub(crate) const MAX_LONGITUDE: f64 = 180.0;

/// Smallest number of waypoints a waypoint tree can connect.
pub const MIN_WAYPOINTS: usize = 2;

/// Largest number of waypoints a waypoint tree accepts. Every pair of waypoints
/// costs one shortest path query.
pub const MAX_WAYPOINTS: usize = 10;

/// Farthest a query point may lie from the node it is routed from. Points with no node
/// in range are not snapped.
pub const MAX_SNAP_DISTANCE: Kilometers = Kilometers::new(2.0);
