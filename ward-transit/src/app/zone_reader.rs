use super::WardTransitAppError;
use crate::config::ZonePropertyConfig;
use crate::model::zone::{Zone, ZoneId};
use geojson::{Feature, FeatureCollection, GeoJson, JsonValue};
use std::io::Read;

/// reads zone boundaries from a GeoJSON FeatureCollection of Polygon or MultiPolygon
/// features with coordinates in (lon, lat) order.
///
/// unlike routes and travel times, a single bad zone fails the whole read, since a
/// missing boundary would silently change how every route resolves.
pub fn read_zones<R: Read>(
    mut reader: R,
    properties: &ZonePropertyConfig,
) -> Result<Vec<Zone>, WardTransitAppError> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    let geojson = contents.parse::<GeoJson>()?;
    let collection = FeatureCollection::try_from(geojson)?;
    let zones = collection
        .features
        .into_iter()
        .enumerate()
        .map(|(row, feature)| read_feature(row, feature, properties))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("read {} zones", zones.len());
    Ok(zones)
}

fn read_feature(
    row: usize,
    feature: Feature,
    properties: &ZonePropertyConfig,
) -> Result<Zone, WardTransitAppError> {
    let id_property = &properties.id_property;
    let id_value = feature
        .property(id_property)
        .and_then(integer_value)
        .ok_or_else(|| {
            WardTransitAppError::record(row, format!("missing integer property '{id_property}'"))
        })?;
    let zone_id = ZoneId::try_from(id_value).map_err(|e| WardTransitAppError::record(row, e))?;

    let name_property = &properties.name_property;
    let name = match feature.property(name_property) {
        Some(JsonValue::String(s)) => s.clone(),
        Some(JsonValue::Number(n)) => n.to_string(),
        _ => {
            return Err(WardTransitAppError::record(
                row,
                format!("missing property '{name_property}' for zone {zone_id}"),
            ))
        }
    };

    let movement_id = match &properties.movement_id_property {
        None => None,
        Some(movement_property) => match feature.property(movement_property) {
            None | Some(JsonValue::Null) => None,
            Some(value) => {
                let movement_id = integer_value(value)
                    .and_then(|i| u32::try_from(i).ok())
                    .ok_or_else(|| {
                        WardTransitAppError::record(
                            row,
                            format!("property '{movement_property}' of zone {zone_id} is not a non-negative integer"),
                        )
                    })?;
                Some(movement_id)
            }
        },
    };

    let geometry = feature.geometry.ok_or_else(|| {
        WardTransitAppError::record(row, format!("zone {zone_id} has no geometry"))
    })?;
    let geometry =
        geo::Geometry::<f64>::try_from(geometry).map_err(|e| WardTransitAppError::record(row, e))?;
    let zone = Zone::try_from_geometry(zone_id, name, geometry)
        .map_err(|e| WardTransitAppError::record(row, e))?;
    match movement_id {
        Some(m) => Ok(zone.with_movement_id(m)),
        None => Ok(zone),
    }
}

/// integer from a JSON number or numeric string, as found in ward datasets.
fn integer_value(value: &JsonValue) -> Option<i64> {
    match value {
        JsonValue::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        JsonValue::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::zone::{Coordinate, ZoneIndex, ZoneResolver};

    const WARDS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": { "WARD_NO": "150", "WARD_NAME": "Bellandur", "MOVEMENT_ID": "17" },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[77.64, 12.90], [77.70, 12.90], [77.70, 12.95], [77.64, 12.95], [77.64, 12.90]]]
                }
            },
            {
                "type": "Feature",
                "properties": { "WARD_NO": 151, "WARD_NAME": "Koramangala" },
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[77.60, 12.92], [77.64, 12.92], [77.64, 12.95], [77.60, 12.95], [77.60, 12.92]]]]
                }
            }
        ]
    }"#;

    #[test]
    fn test_read_wards() {
        let zones = read_zones(WARDS.as_bytes(), &ZonePropertyConfig::default()).expect("valid GeoJSON");
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].id, ZoneId(150));
        assert_eq!(zones[0].name, "Bellandur");
        assert_eq!(zones[0].movement_id, Some(17));
        assert_eq!(zones[1].id, ZoneId(151));
        assert_eq!(zones[1].movement_id, None);

        // GeoJSON (lon, lat) boundaries against (lat, lon) stops
        let index = ZoneIndex::try_new(zones).expect("unique zone ids");
        let stop = Coordinate::new(12.93, 77.62).expect("valid coordinate");
        assert_eq!(index.resolve(&stop).zone_id(), Some(ZoneId(151)));
    }

    #[test]
    fn test_missing_id_property() {
        let conf = ZonePropertyConfig {
            id_property: String::from("ward_id"),
            ..Default::default()
        };
        let result = read_zones(WARDS.as_bytes(), &conf);
        assert!(matches!(
            result,
            Err(WardTransitAppError::RecordError { row: 0, .. })
        ));
    }

    #[test]
    fn test_point_feature_rejected() {
        let geojson = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": { "WARD_NO": 1, "WARD_NAME": "A" },
                "geometry": { "type": "Point", "coordinates": [77.6, 12.9] }
            }]
        }"#;
        let result = read_zones(geojson.as_bytes(), &ZonePropertyConfig::default());
        assert!(matches!(
            result,
            Err(WardTransitAppError::RecordError { row: 0, .. })
        ));
    }
}
