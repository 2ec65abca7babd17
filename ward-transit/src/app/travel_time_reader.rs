use super::WardTransitAppError;
use crate::config::ObservationZoneKey;
use crate::model::{
    travel_time::TravelTimeObservation,
    zone::{ZoneId, ZoneIndex},
};
use serde::Deserialize;
use std::io::Read;

/// a row of the provider's zone-to-zone travel time dataset.
///
/// CSV rows as expected:
/// sourceid,dstid,hod,mean_travel_time[,...]
/// with `hod` optional and travel times in seconds. any other columns are ignored.
#[derive(Deserialize, Debug)]
struct TravelTimeRow {
    sourceid: i64,
    dstid: i64,
    #[serde(default)]
    hod: Option<i64>,
    mean_travel_time: f64,
}

/// reads travel time observations from CSV, translating provider zone keys into zone
/// ids. each row yields its own result so malformed rows can be reported and skipped.
pub fn read_travel_times<R: Read>(
    reader: R,
    zone_key: ObservationZoneKey,
    zones: &ZoneIndex,
) -> Vec<Result<TravelTimeObservation, WardTransitAppError>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    csv_reader
        .deserialize::<TravelTimeRow>()
        .enumerate()
        .map(|(row, result)| {
            let r = result.map_err(|e| WardTransitAppError::record(row, e))?;
            let src = to_zone_id(r.sourceid, zone_key, zones)
                .map_err(|e| WardTransitAppError::record(row, e))?;
            let dst = to_zone_id(r.dstid, zone_key, zones)
                .map_err(|e| WardTransitAppError::record(row, e))?;
            TravelTimeObservation::new(src, dst, r.mean_travel_time, r.hod)
                .map_err(|e| WardTransitAppError::record(row, e))
        })
        .collect()
}

fn to_zone_id(key: i64, zone_key: ObservationZoneKey, zones: &ZoneIndex) -> Result<ZoneId, String> {
    match zone_key {
        ObservationZoneKey::ZoneId => ZoneId::try_from(key).map_err(|e| e.to_string()),
        ObservationZoneKey::MovementId => u32::try_from(key)
            .ok()
            .and_then(|movement_id| zones.get_by_movement_id(movement_id))
            .map(|zone| zone.id)
            .ok_or_else(|| format!("movement id {key} does not match any zone")),
    }
}
