use crate::model::EstimationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WardTransitAppError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("malformed input: {source}")]
    EstimationError {
        #[from]
        source: EstimationError,
    },
    #[error("row {row}: {msg}")]
    RecordError { row: usize, msg: String },
    #[error("row {row}, route {route_id}: {msg}")]
    RouteRecordError {
        row: usize,
        route_id: String,
        msg: String,
    },
    #[error("failure reading file: {source}")]
    StdIoError {
        #[from]
        source: std::io::Error,
    },
    #[error("failure reading CSV: {source}")]
    CsvError {
        #[from]
        source: csv::Error,
    },
    #[error("failure decoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure decoding GeoJSON: {source}")]
    GeoJsonError {
        #[from]
        source: geojson::Error,
    },
    #[error("failure building thread pool: {source}")]
    ThreadPoolError {
        #[from]
        source: rayon::ThreadPoolBuildError,
    },
    #[error("{0}")]
    OtherError(String),
}

impl WardTransitAppError {
    /// wraps any displayable failure as an error for a single input row.
    pub fn record(row: usize, e: impl std::fmt::Display) -> WardTransitAppError {
        WardTransitAppError::RecordError {
            row,
            msg: e.to_string(),
        }
    }

    /// the route a failure belongs to, when the failing row identified one.
    pub fn route_id(&self) -> Option<&str> {
        match self {
            WardTransitAppError::RouteRecordError { route_id, .. } => Some(route_id),
            _ => None,
        }
    }
}

