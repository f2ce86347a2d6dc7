use crate::{
    args,
    geo_3d,
    report,
};

/// Error-type enum for the `planar` crate.
/// Wraps the error of each module.
#[derive(Debug)]
pub enum PlanarError {
    ArgError(args::ArgError),
    GeoError(geo_3d::GeoError),
    ReportError(report::ReportError),
    StringOnly(String),
}
impl std::fmt::Display for PlanarError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanarError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            PlanarError::GeoError(error) => write!(f, "! GEOMETRY ERROR:\n- {}", error),
            PlanarError::ReportError(error) => write!(f, "! REPORT ERROR:\n{}", error),
            PlanarError::StringOnly(error) => write!(f, "! PLANAR ERROR:\n- {}", error),
        }
    }
}
impl From<String> for PlanarError {
    fn from(error: String) -> Self {
        PlanarError::StringOnly(error)
    }
}
impl From<args::ArgError> for PlanarError {
    fn from(error: args::ArgError) -> Self {
        PlanarError::ArgError(error)
    }
}
impl From<geo_3d::GeoError> for PlanarError {
    fn from(error: geo_3d::GeoError) -> Self {
        PlanarError::GeoError(error)
    }
}
impl From<report::ReportError> for PlanarError {
    fn from(error: report::ReportError) -> Self {
        PlanarError::ReportError(error)
    }
}

/// Result type for the `planar` crate.
pub type PlanarResult<T> = std::result::Result<T, PlanarError>;

/// Create a `PlanarResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::PlanarError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> PlanarResult<T> {
    Err(PlanarError::StringOnly(error_str.to_string()))
}
