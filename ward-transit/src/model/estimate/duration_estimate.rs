use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// estimated trip duration along with a flag telling whether any hop lacked data.
///
/// when `has_missing_data` is true the estimate only sums the hops that had data and
/// is therefore a lower bound on what complete data would give.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DurationEstimate {
    pub hours: u64,
    pub minutes: u64,
    pub has_missing_data: bool,
}

impl DurationEstimate {
    /// truncates the total to whole minutes (fractional seconds and leftover seconds
    /// are dropped) and splits it into hours and minutes.
    pub fn from_seconds(total_seconds: f64, has_missing_data: bool) -> DurationEstimate {
        let whole_minutes = (total_seconds.max(0.0) / 60.0).floor() as u64;
        DurationEstimate {
            hours: whole_minutes / 60,
            minutes: whole_minutes % 60,
            has_missing_data,
        }
    }

    pub fn total_minutes(&self) -> u64 {
        self.hours * 60 + self.minutes
    }
}

impl Display for DurationEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let suffix = if self.has_missing_data {
            " (missing data)"
        } else {
            ""
        };
        write!(f, "{}:{:02}{}", self.hours, self.minutes, suffix)
    }
}
