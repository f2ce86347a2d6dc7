/// Geometry error type.
#[derive(Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Every element of a searched sequence is within the near-zero tolerance.
    /// Callers treat this as an expected outcome, not a fault.
    NoNonzeroElements,
    /// Vector length does not match what the operation requires.
    DimensionMismatch{expected: usize, found: usize},
    /// Operation is undefined for a zero vector (normalising, projecting).
    ZeroVector,
    /// Text could not be parsed as a decimal.
    ParseDecimal(String),
    /// Decimal has no finite `f64` value.
    NotRepresentable(String),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for GeoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeoError::NoNonzeroElements => write!(f, "No nonzero elements found"),
            GeoError::DimensionMismatch{expected, found} => write!(f, "Dimension mismatch: expected {}, found {}", expected, found),
            GeoError::ZeroVector => write!(f, "Operation is undefined for the zero vector"),
            GeoError::ParseDecimal(text) => write!(f, "Could not parse \"{}\" as a decimal", text),
            GeoError::NotRepresentable(text) => write!(f, "Decimal {} has no finite f64 value", text),
            GeoError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<String> for GeoError {
    fn from(error: String) -> Self {
        GeoError::StringOnly(error)
    }
}

/// Result type for the `geo_3d` module.
pub type ProcResult<T> = std::result::Result<T, GeoError>;

/// Create a `GeoError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(GeoError::StringOnly(error_str.to_string()))
}
