use clap::Args;
use geograph_core::{
    engine::{GeoEngine, WaypointTree},
    geopoint::GeoPoint,
};
use geojson::{GeoJson, JsonObject};
use serde_json::json;

use crate::{
    output::{self, OutputFormat, ToGeoJson},
    parsers,
};

#[derive(Args)]
pub struct WaypointsArgs {
    /// Waypoint as LAT,LON, repeat for each waypoint
    #[arg(
        short,
        long = "point",
        value_parser = parsers::parse_point,
        allow_hyphen_values = true,
        required = true
    )]
    pub points: Vec<GeoPoint>,
}

impl ToGeoJson for WaypointTree {
    fn to_geojson(&self) -> GeoJson {
        let features = self
            .segments
            .iter()
            .map(|segment| {
                let mut properties = JsonObject::new();
                properties.insert("from_waypoint".to_string(), json!(segment.from_waypoint));
                properties.insert("to_waypoint".to_string(), json!(segment.to_waypoint));
                properties.insert("weight".to_string(), json!(segment.weight.value()));

                output::feature(output::line_string(&segment.path), properties)
            })
            .collect();

        output::feature_collection(features)
    }
}

pub fn run(
    engine: &GeoEngine,
    args: WaypointsArgs,
    format: OutputFormat,
) -> Result<(), anyhow::Error> {
    let tree = engine.waypoint_tree(&args.points)?;
    output::write(&tree, format)
}
