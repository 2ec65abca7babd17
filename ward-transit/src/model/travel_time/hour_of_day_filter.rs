use crate::model::EstimationError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// selects which provider time buckets are loaded into a travel time table.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum HourOfDayFilter {
    /// every observation is admitted, tagged with an hour or not
    #[default]
    AllHours,
    /// only observations tagged with one of these hours are admitted
    Hours { hours: BTreeSet<u8> },
}

impl HourOfDayFilter {
    pub fn try_from_hours(hours: &[i64]) -> Result<HourOfDayFilter, EstimationError> {
        let hours = hours
            .iter()
            .map(|h| match u8::try_from(*h) {
                Ok(hour) if hour < 24 => Ok(hour),
                _ => Err(EstimationError::InvalidHourOfDay(*h)),
            })
            .collect::<Result<BTreeSet<_>, _>>()?;
        Ok(HourOfDayFilter::Hours { hours })
    }

    pub fn admits(&self, hour_of_day: Option<u8>) -> bool {
        match self {
            HourOfDayFilter::AllHours => true,
            HourOfDayFilter::Hours { hours } => hour_of_day.is_some_and(|h| hours.contains(&h)),
        }
    }
}
