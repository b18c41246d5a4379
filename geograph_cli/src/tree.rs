use clap::Args;
use geograph_core::{distance::Kilometers, engine::GeoEngine, projection::TreeSegment};
use geojson::{GeoJson, JsonObject};
use serde::Serialize;
use serde_json::json;
use tracing::info;

use crate::output::{self, OutputFormat, ToGeoJson};

#[derive(Args)]
pub struct TreeArgs {
    /// Node the tree is grown from
    #[arg(long)]
    root: String,
}

#[derive(Serialize)]
pub struct TreeOutput {
    root: String,
    segments: Vec<TreeSegment>,
    total_weight: Kilometers,
}

impl ToGeoJson for TreeOutput {
    fn to_geojson(&self) -> GeoJson {
        let features = self
            .segments
            .iter()
            .map(|segment| {
                let mut properties = JsonObject::new();
                properties.insert("weight".to_string(), json!(segment.weight.value()));

                output::feature(
                    output::line_string(&[segment.from, segment.to]),
                    properties,
                )
            })
            .collect();

        output::feature_collection(features)
    }
}

pub fn tree(engine: &GeoEngine, args: &TreeArgs) -> Result<TreeOutput, anyhow::Error> {
    let graph = engine.graph();
    let tree = graph.checked_minimum_spanning_tree(&args.root)?;

    info!(
        root = %args.root,
        edges = tree.len(),
        total_weight = %tree.total_weight(),
        "tree"
    );

    Ok(TreeOutput {
        root: args.root.clone(),
        segments: graph.project_tree(&tree)?,
        total_weight: tree.total_weight(),
    })
}

pub fn run(engine: &GeoEngine, args: TreeArgs, format: OutputFormat) -> Result<(), anyhow::Error> {
    let output = tree(engine, &args)?;
    output::write(&output, format)
}
