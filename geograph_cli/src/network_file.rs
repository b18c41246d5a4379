use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use geograph_core::{engine::GeoEngine, graph::Graph};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Deserialize)]
pub struct NetworkNode {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
}

#[derive(Deserialize)]
pub struct NetworkEdge {
    pub from: String,
    pub to: String,
}

/// `{"nodes": [{"id", "lat", "lon"}], "edges": [{"from", "to"}]}`
#[derive(Deserialize)]
pub struct NetworkFile {
    pub nodes: Vec<NetworkNode>,
    #[serde(default)]
    pub edges: Vec<NetworkEdge>,
}

impl NetworkFile {
    pub fn from_file(path: &Path) -> Result<NetworkFile, anyhow::Error> {
        let file = File::open(path)
            .with_context(|| format!("could not open network file {}", path.display()))?;

        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid network file {}", path.display()))
    }

    /// Nodes are inserted first, then edges. Edges naming an unknown node are skipped.
    pub fn into_engine(self) -> Result<GeoEngine, anyhow::Error> {
        let mut engine = GeoEngine::new();

        for node in self.nodes {
            engine.add_node(node.id, node.lat, node.lon)?;
        }

        let mut skipped = 0;
        for edge in self.edges.iter() {
            if !engine.add_edge(&edge.from, &edge.to) {
                warn!(from = %edge.from, to = %edge.to, "skipping edge with unknown node");
                skipped += 1;
            }
        }

        info!(
            nodes = engine.graph().node_count(),
            edges = engine.graph().edge_count(),
            skipped,
            "loaded network"
        );

        Ok(engine)
    }
}

pub fn load_engine(path: &Path) -> Result<GeoEngine, anyhow::Error> {
    NetworkFile::from_file(path)?.into_engine()
}
