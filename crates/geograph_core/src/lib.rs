pub mod constants;
pub mod distance;
pub mod engine;
pub mod error;
pub mod geopoint;
pub mod graph;
pub mod location_index;
pub mod node;
pub mod projection;
pub mod routing;
pub mod shared;
pub mod snap;
pub mod spanning_tree;
mod stopwatch;

#[cfg(test)]
pub(crate) mod test_graph_utils;
