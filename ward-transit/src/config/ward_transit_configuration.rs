use super::{ObservationZoneKey, SpatialIndexType, ZonePropertyConfig};
use crate::{
    app::WardTransitAppError,
    model::{travel_time::HourOfDayFilter, EstimationError},
};
use serde::{Deserialize, Serialize};

/// defines behaviors for a route duration estimation run
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct WardTransitConfiguration {
    pub zone_properties: ZonePropertyConfig,
    pub observation_zone_key: ObservationZoneKey,
    /// when set, only travel times for these hours of the day are loaded
    pub hours_of_day: Option<Vec<i64>>,
    pub spatial_index: SpatialIndexType,
    /// size of the thread pool used to estimate routes
    pub parallelism: usize,
    pub overwrite: bool,
}

impl Default for WardTransitConfiguration {
    fn default() -> Self {
        Self {
            zone_properties: ZonePropertyConfig::default(),
            observation_zone_key: ObservationZoneKey::default(),
            hours_of_day: None,
            spatial_index: SpatialIndexType::default(),
            parallelism: 1,
            overwrite: false,
        }
    }
}

impl WardTransitConfiguration {
    pub fn hour_of_day_filter(&self) -> Result<HourOfDayFilter, EstimationError> {
        match &self.hours_of_day {
            None => Ok(HourOfDayFilter::AllHours),
            Some(hours) => HourOfDayFilter::try_from_hours(hours),
        }
    }
}

impl TryFrom<&String> for WardTransitConfiguration {
    type Error = WardTransitAppError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let read = |f: &String| {
            std::fs::read_to_string(f).map_err(|e| {
                WardTransitAppError::ConfigurationError(format!("failure reading {f}: {e}"))
            })
        };
        let conf: WardTransitConfiguration = if f.ends_with(".toml") {
            toml::from_str(&read(f)?).map_err(|e| {
                WardTransitAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            serde_json::from_str(&read(f)?).map_err(|e| {
                WardTransitAppError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(WardTransitAppError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        if conf.parallelism == 0 {
            return Err(WardTransitAppError::ConfigurationError(String::from(
                "parallelism must be at least 1",
            )));
        }
        conf.hour_of_day_filter()?;
        Ok(conf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let conf: WardTransitConfiguration = toml::from_str(
            r#"
            observation_zone_key = "zone_id"
            hours_of_day = [8, 9]

            [zone_properties]
            id_property = "ward_id"
            "#,
        )
        .expect("valid configuration");
        assert_eq!(conf.observation_zone_key, ObservationZoneKey::ZoneId);
        assert_eq!(conf.zone_properties.id_property, "ward_id");
        assert_eq!(conf.zone_properties.name_property, "WARD_NAME");
        assert_eq!(conf.spatial_index, SpatialIndexType::Rtree);
        assert_eq!(conf.parallelism, 1);
        assert_eq!(
            conf.hour_of_day_filter(),
            HourOfDayFilter::try_from_hours(&[8, 9])
        );
    }

    #[test]
    fn test_json_configuration() {
        let conf: WardTransitConfiguration =
            serde_json::from_str(r#"{"spatial_index": "linear", "parallelism": 4}"#)
                .expect("valid configuration");
        assert_eq!(conf.spatial_index, SpatialIndexType::Linear);
        assert_eq!(conf.parallelism, 4);
        assert_eq!(conf.hour_of_day_filter(), Ok(HourOfDayFilter::AllHours));
    }

    #[test]
    fn test_unsupported_extension() {
        let result = WardTransitConfiguration::try_from(&String::from("conf.yaml"));
        assert!(matches!(
            result,
            Err(WardTransitAppError::ConfigurationError(_))
        ));
    }
}
