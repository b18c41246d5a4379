use geograph_core::geopoint::GeoPoint;

/// Parses `"lat,lon"` in degrees.
pub fn parse_point(input: &str) -> Result<GeoPoint, String> {
    let Some((lat, lon)) = input.split_once(',') else {
        return Err(format!("expected LAT,LON, got {input:?}"));
    };

    let lat = lat
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid latitude {lat:?}"))?;
    let lon = lon
        .trim()
        .parse::<f64>()
        .map_err(|_| format!("invalid longitude {lon:?}"))?;

    let point = GeoPoint::new(lat, lon);
    if !point.is_valid() {
        return Err(format!("coordinates out of range: {lat},{lon}"));
    }

    Ok(point)
}
