use thiserror::Error;

use crate::distance::Kilometers;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("invalid coordinates for node {id}: lat {lat}, lon {lon}")]
    InvalidCoordinates { id: String, lat: f64, lon: f64 },
    #[error("node {0} not found in graph")]
    UnknownNode(String),
    #[error("no path from {from} to {to}")]
    NoPath { from: String, to: String },
    #[error("graph has no nodes")]
    EmptyGraph,
    #[error("no node within {max} of ({lat}, {lon})")]
    NoNodeNearby { lat: f64, lon: f64, max: Kilometers },
    #[error("at least {min} waypoints are required, got {got}")]
    TooFewWaypoints { min: usize, got: usize },
    #[error("at most {max} waypoints are allowed, got {got}")]
    TooManyWaypoints { max: usize, got: usize },
    #[error("only {got} waypoints are near the network, at least {min} are required")]
    TooFewSnappedWaypoints { min: usize, got: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;
