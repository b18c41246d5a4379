pub mod dijkstra;
pub mod routing_path;
