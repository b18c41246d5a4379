use anyhow::bail;
use clap::Args;
use geograph_core::{
    engine::{GeoEngine, RouteResult},
    geopoint::GeoPoint,
};
use geojson::{GeoJson, JsonObject};
use serde_json::json;
use tracing::info;

use crate::{
    output::{self, OutputFormat, ToGeoJson},
    parsers,
};

/// Either two node ids or two coordinates, each snapped to its nearest node.
#[derive(Args)]
pub struct RouteArgs {
    /// Start node id
    #[arg(long, requires = "to", conflicts_with = "from_point")]
    pub from: Option<String>,

    /// End node id
    #[arg(long, requires = "from", conflicts_with = "to_point")]
    pub to: Option<String>,

    /// Start point as LAT,LON
    #[arg(
        long,
        value_parser = parsers::parse_point,
        allow_hyphen_values = true,
        requires = "to_point",
        required_unless_present = "from"
    )]
    pub from_point: Option<GeoPoint>,

    /// End point as LAT,LON
    #[arg(
        long,
        value_parser = parsers::parse_point,
        allow_hyphen_values = true,
        requires = "from_point",
        required_unless_present = "to"
    )]
    pub to_point: Option<GeoPoint>,
}

impl ToGeoJson for RouteResult {
    fn to_geojson(&self) -> GeoJson {
        let mut properties = JsonObject::new();
        properties.insert("distance".to_string(), json!(self.distance.value()));

        GeoJson::Feature(output::feature(output::line_string(&self.path), properties))
    }
}

fn route_nodes(engine: &GeoEngine, from: &str, to: &str) -> Result<RouteResult, anyhow::Error> {
    let graph = engine.graph();
    let path = graph.checked_shortest_path(from, to)?;

    Ok(RouteResult {
        path: graph.project_path(&path)?,
        distance: path.distance(),
    })
}

pub fn route(engine: &GeoEngine, args: &RouteArgs) -> Result<RouteResult, anyhow::Error> {
    let result = match (&args.from, &args.to, args.from_point, args.to_point) {
        (Some(from), Some(to), _, _) => route_nodes(engine, from, to)?,
        (_, _, Some(from), Some(to)) => engine.route_between(from, to)?,
        _ => bail!("route needs --from and --to, or --from-point and --to-point"),
    };

    info!(
        nodes = result.path.len(),
        distance = %result.distance,
        "route"
    );

    Ok(result)
}

pub fn run(engine: &GeoEngine, args: RouteArgs, format: OutputFormat) -> Result<(), anyhow::Error> {
    let result = route(engine, &args)?;
    output::write(&result, format)
}
