use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use crate::model::EstimationError;

/// trip duration published by the transit operator, in whole minutes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DeclaredDuration {
    minutes: u32,
}

impl DeclaredDuration {
    pub fn from_minutes(minutes: u32) -> DeclaredDuration {
        DeclaredDuration { minutes }
    }

    pub fn total_minutes(&self) -> u32 {
        self.minutes
    }
}

impl FromStr for DeclaredDuration {
    type Err = EstimationError;

    /// accepts "H:MM:SS", "H:MM" or a whole number of minutes. hours are not capped at 24,
    /// seconds are truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(minutes) = trimmed.parse::<u32>() {
            return Ok(DeclaredDuration::from_minutes(minutes));
        }
        parse_clock_duration(trimmed)
            .and_then(|d| u32::try_from(d.num_minutes()).ok())
            .map(DeclaredDuration::from_minutes)
            .ok_or_else(|| EstimationError::InvalidDeclaredDuration(s.to_string()))
    }
}

/// "H:MM" or "H:MM:SS" as an elapsed duration.
fn parse_clock_duration(s: &str) -> Option<Duration> {
    let parts = s
        .split(':')
        .map(|p| p.trim().parse::<i64>().ok().filter(|v| *v >= 0))
        .collect::<Option<Vec<_>>>()?;
    let (hours, minutes, seconds) = match parts.as_slice() {
        [h, m] => (*h, *m, 0),
        [h, m, sec] => (*h, *m, *sec),
        _ => return None,
    };
    if minutes >= 60 || seconds >= 60 {
        return None;
    }
    Duration::try_hours(hours)?
        .checked_add(&Duration::try_minutes(minutes)?)?
        .checked_add(&Duration::try_seconds(seconds)?)
}

impl Display for DeclaredDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}
