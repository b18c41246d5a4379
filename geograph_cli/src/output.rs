use std::io::Write;

use clap::ValueEnum;
use geo_types::{Coord, LineString, Point};
use geograph_core::geopoint::GeoPoint;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde::Serialize;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Json,
    Geojson,
}

/// Rendering of a query result as GeoJSON features.
pub trait ToGeoJson {
    fn to_geojson(&self) -> GeoJson;
}

pub fn line_string(points: &[GeoPoint]) -> Geometry {
    let line: LineString = points
        .iter()
        .map(Coord::<f64>::from)
        .collect::<Vec<_>>()
        .into();
    Geometry::new(Value::from(&line))
}

pub fn point(point: GeoPoint) -> Geometry {
    Geometry::new(Value::from(&Point::from(point)))
}

pub fn feature(geometry: Geometry, properties: JsonObject) -> Feature {
    Feature {
        bbox: None,
        geometry: Some(geometry),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

pub fn feature_collection(features: Vec<Feature>) -> GeoJson {
    GeoJson::FeatureCollection(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

pub fn write_to<W, T>(writer: &mut W, value: &T, format: OutputFormat) -> Result<(), anyhow::Error>
where
    W: Write,
    T: Serialize + ToGeoJson,
{
    match format {
        OutputFormat::Json => serde_json::to_writer_pretty(&mut *writer, value)?,
        OutputFormat::Geojson => serde_json::to_writer_pretty(&mut *writer, &value.to_geojson())?,
    }
    writeln!(writer)?;

    Ok(())
}

pub fn write<T>(value: &T, format: OutputFormat) -> Result<(), anyhow::Error>
where
    T: Serialize + ToGeoJson,
{
    let mut stdout = std::io::stdout().lock();
    write_to(&mut stdout, value, format)
}
