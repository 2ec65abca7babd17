use crate::model::{zone::ZoneId, EstimationError};
use serde::{Deserialize, Serialize};

/// one provider travel time sample from a source zone to a destination zone.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TravelTimeObservation {
    src_zone_id: ZoneId,
    dst_zone_id: ZoneId,
    duration_seconds: f64,
    hour_of_day: Option<u8>,
}

impl TravelTimeObservation {
    /// creates an observation. durations must be finite and strictly positive, and
    /// an hour of day, when present, must be in [0, 23].
    pub fn new(
        src_zone_id: ZoneId,
        dst_zone_id: ZoneId,
        duration_seconds: f64,
        hour_of_day: Option<i64>,
    ) -> Result<TravelTimeObservation, EstimationError> {
        if !duration_seconds.is_finite() || duration_seconds <= 0.0 {
            return Err(EstimationError::InvalidTravelTime(duration_seconds));
        }
        let hour_of_day = match hour_of_day {
            None => None,
            Some(h) => match u8::try_from(h) {
                Ok(hour) if hour < 24 => Some(hour),
                _ => return Err(EstimationError::InvalidHourOfDay(h)),
            },
        };
        Ok(TravelTimeObservation {
            src_zone_id,
            dst_zone_id,
            duration_seconds,
            hour_of_day,
        })
    }

    pub fn src_zone_id(&self) -> ZoneId {
        self.src_zone_id
    }

    pub fn dst_zone_id(&self) -> ZoneId {
        self.dst_zone_id
    }

    pub fn duration_seconds(&self) -> f64 {
        self.duration_seconds
    }

    pub fn hour_of_day(&self) -> Option<u8> {
        self.hour_of_day
    }
}
