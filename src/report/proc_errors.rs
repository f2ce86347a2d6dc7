use crate::io::IoError;

/// Report process error type.
#[derive(Debug)]
pub enum ReportError {
    /// IO error.
    IoError(IoError),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportError::IoError(error) => write!(f, "IO Error:\n{}", error),
            ReportError::StringOnly(error) => write!(f, "{}", error),
        }
    }
}
impl From<IoError> for ReportError {
    fn from(error: IoError) -> Self {
        ReportError::IoError(error)
    }
}
impl From<String> for ReportError {
    fn from(error: String) -> Self {
        ReportError::StringOnly(error)
    }
}

/// Result type for the `report` module.
pub type ProcResult<T> = std::result::Result<T, ReportError>;

/// Create a `ReportError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(ReportError::StringOnly(error_str.to_string()))
}
