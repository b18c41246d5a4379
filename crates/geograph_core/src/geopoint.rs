use serde::{Deserialize, Serialize};

use crate::{
    constants::{EARTH_RADIUS_KM, MAX_LATITUDE, MAX_LONGITUDE},
    distance::Kilometers,
};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        GeoPoint { lat, lon }
    }

    /// Both components are finite and within [-90, 90] / [-180, 180].
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && self.lat.abs() <= MAX_LATITUDE
            && self.lon.abs() <= MAX_LONGITUDE
    }

    pub fn haversine_distance(&self, other: &GeoPoint) -> Kilometers {
        haversine_distance(self.lat, self.lon, other.lat, other.lon)
    }

    /// Position on the unit sphere. The chord length between two such vectors grows
    /// monotonically with the great-circle distance.
    pub(crate) fn to_unit_vector(self) -> [f64; 3] {
        let lat = self.lat.to_radians();
        let lon = self.lon.to_radians();
        [lat.cos() * lon.cos(), lat.cos() * lon.sin(), lat.sin()]
    }
}

impl From<GeoPoint> for geo_types::Point {
    fn from(value: GeoPoint) -> Self {
        geo_types::Point::new(value.lon, value.lat)
    }
}

impl From<&GeoPoint> for geo_types::Coord {
    fn from(value: &GeoPoint) -> Self {
        geo_types::Coord {
            x: value.lon,
            y: value.lat,
        }
    }
}

impl From<geo_types::Point> for GeoPoint {
    fn from(value: geo_types::Point) -> Self {
        GeoPoint::new(value.y(), value.x())
    }
}

pub fn haversine_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> Kilometers {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();

    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);

    // Rounding can push h slightly outside [0, 1] for antipodal points
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    Kilometers::new(EARTH_RADIUS_KM * c)
}
