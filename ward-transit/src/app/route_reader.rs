use super::WardTransitAppError;
use crate::model::route::{DeclaredDuration, Route, Stop};
use crate::model::zone::Coordinate;
use serde::Deserialize;
use std::io::Read;

/// a row of the operator's route dataset.
///
/// CSV rows as expected:
/// route_no,time,map_json_content
/// where `time` is the declared trip duration and `map_json_content` is a JSON list of
/// stops, each with a `latlons` pair in (lat, lon) order and an optional `busstop` name.
#[derive(Deserialize, Debug)]
struct RouteRow {
    #[serde(alias = "route_id")]
    route_no: String,
    #[serde(default, alias = "duration")]
    time: Option<String>,
    #[serde(default)]
    map_json_content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct StopRecord {
    #[serde(default, alias = "name")]
    busstop: Option<String>,
    latlons: Vec<LatLonValue>,
}

/// stop coordinates come either as JSON numbers or as numeric strings
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum LatLonValue {
    Number(f64),
    Text(String),
}

impl LatLonValue {
    fn as_f64(&self) -> Result<f64, String> {
        match self {
            LatLonValue::Number(n) => Ok(*n),
            LatLonValue::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| format!("'{s}' is not a number: {e}")),
        }
    }
}

/// reads operator routes from CSV. each row yields its own result so that a malformed
/// route is reported without stopping the others.
pub fn read_routes<R: Read>(reader: R) -> Vec<Result<Route, WardTransitAppError>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let rows = csv_reader
        .deserialize::<RouteRow>()
        .enumerate()
        .map(|(row, result)| {
            let route_row = result.map_err(|e| WardTransitAppError::record(row, e))?;
            let route_id = route_row.route_no.clone();
            to_route(route_row).map_err(|msg| WardTransitAppError::RouteRecordError {
                row,
                route_id,
                msg,
            })
        })
        .collect::<Vec<_>>();
    log::info!(
        "read {} route rows, {} malformed",
        rows.len(),
        rows.iter().filter(|r| r.is_err()).count()
    );
    rows
}

fn to_route(row: RouteRow) -> Result<Route, String> {
    let route_id = row.route_no;
    let declared_duration = match row.time.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(s) => Some(s.parse::<DeclaredDuration>().map_err(|e| e.to_string())?),
    };
    let stops_json = row
        .map_json_content
        .ok_or_else(|| String::from("missing stop list"))?;
    let records: Vec<StopRecord> = serde_json::from_str(&stops_json)
        .map_err(|e| format!("failure decoding stop list: {e}"))?;
    let stops = records
        .into_iter()
        .enumerate()
        .map(|(idx, record)| {
            to_stop(record).map_err(|e| format!("stop {idx}: {e}"))
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Route::new(route_id, declared_duration, stops))
}

fn to_stop(record: StopRecord) -> Result<Stop, String> {
    let [lat, lon] = record.latlons.as_slice() else {
        return Err(format!(
            "expected a [lat, lon] pair, found {} values",
            record.latlons.len()
        ));
    };
    let coordinate =
        Coordinate::new(lat.as_f64()?, lon.as_f64()?).map_err(|e| e.to_string())?;
    Ok(Stop::new(coordinate, record.busstop.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_of(rows: &[(&str, &str, &str)]) -> String {
        let mut writer = csv::Writer::from_writer(vec![]);
        writer
            .write_record(["route_no", "time", "map_json_content"])
            .expect("write header");
        for row in rows {
            writer
                .write_record([row.0, row.1, row.2])
                .expect("write row");
        }
        String::from_utf8(writer.into_inner().expect("flush")).expect("utf8")
    }

    #[test]
    fn test_read_route() {
        let data = csv_of(&[(
            "500D",
            "1:30",
            r#"[{"busstop": "Hebbal", "latlons": ["13.0358", "77.5970"]}, {"busstop": "Silk Board", "latlons": [12.9177, 77.6238]}]"#,
        )]);
        let routes = read_routes(data.as_bytes());
        assert_eq!(routes.len(), 1);
        let route = routes[0].as_ref().expect("valid route");
        assert_eq!(route.route_id, "500D");
        assert_eq!(route.declared_duration, Some(DeclaredDuration::from_minutes(90)));
        assert_eq!(route.stops.len(), 2);
        assert_eq!(route.stops[0].label, "Hebbal");
        assert_eq!(route.stops[0].coordinate.lat(), 13.0358);
        assert_eq!(route.stops[1].coordinate.lon(), 77.6238);
    }

    #[test]
    fn test_malformed_rows_are_isolated() {
        let data = csv_of(&[
            ("1", "0:40", r#"[{"latlons": [12.9, 77.6]}]"#),
            ("2", "0:40", r#"[{"latlons": [120.0, 77.6]}]"#),
            ("3", "", ""),
            ("4", "later", r#"[{"latlons": [12.9, 77.6]}]"#),
            ("5", "", r#"[{"latlons": ["abc", 77.6]}]"#),
            ("6", "", r#"[{"latlons": [12.9]}]"#),
            ("7", "", "[]"),
        ]);
        let routes = read_routes(data.as_bytes());
        let ok = routes.iter().map(|r| r.is_ok()).collect::<Vec<_>>();
        assert_eq!(ok, vec![true, false, false, false, false, false, true]);
        assert!(matches!(
            routes[1],
            Err(WardTransitAppError::RouteRecordError { row: 1, .. })
        ));
        let failed_ids = routes
            .iter()
            .filter_map(|r| r.as_ref().err().and_then(|e| e.route_id()))
            .collect::<Vec<_>>();
        assert_eq!(failed_ids, vec!["2", "3", "4", "5", "6"]);
        let empty = routes[6].as_ref().expect("empty stop list is a valid route");
        assert!(empty.stops.is_empty());
        assert_eq!(empty.declared_duration, None);
    }
}
