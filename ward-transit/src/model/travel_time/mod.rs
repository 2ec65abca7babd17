mod hour_of_day_filter;
mod travel_time_observation;
mod travel_time_table;

pub use hour_of_day_filter::HourOfDayFilter;
pub use travel_time_observation::TravelTimeObservation;
pub use travel_time_table::TravelTimeTable;
