use anyhow::Context;
use clap::Args;
use geograph_core::{engine::GeoEngine, geopoint::GeoPoint, snap::Snap};
use geojson::{GeoJson, JsonObject};
use serde_json::json;

use crate::{
    output::{self, OutputFormat, ToGeoJson},
    parsers,
};

#[derive(Args)]
pub struct NearestArgs {
    /// Query point as LAT,LON
    #[arg(short, long, value_parser = parsers::parse_point, allow_hyphen_values = true)]
    point: GeoPoint,
}

impl ToGeoJson for Snap {
    fn to_geojson(&self) -> GeoJson {
        let mut properties = JsonObject::new();
        properties.insert("node_id".to_string(), json!(self.node_id()));
        properties.insert("distance".to_string(), json!(self.distance().value()));

        GeoJson::Feature(output::feature(output::point(self.coordinates()), properties))
    }
}

pub fn run(engine: &GeoEngine, args: NearestArgs, format: OutputFormat) -> Result<(), anyhow::Error> {
    let snap = engine
        .nearest_node(&args.point)
        .context("network has no nodes")?;

    output::write(&snap, format)
}
