use std::fmt::{self, Display, Formatter};
use std::io;

/// Error type for everything that can go wrong before a simulation starts.
///
/// `Validation` and `Config` abort a run before any graph or state is built;
/// neither is recoverable mid-run, so the step/run loop itself never produces
/// an error.
#[derive(Debug)]
pub enum EpiError {
    IoError(io::Error),
    CsvError(csv::Error),
    JsonError(serde_json::Error),
    /// A malformed or incomplete input record. The message names the
    /// offending field and value.
    Validation(String),
    /// A simulation parameter outside its documented range.
    Config(String),
}

impl EpiError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        EpiError::Validation(message.into())
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        EpiError::Config(message.into())
    }
}

impl From<io::Error> for EpiError {
    fn from(error: io::Error) -> Self {
        EpiError::IoError(error)
    }
}

impl From<csv::Error> for EpiError {
    fn from(error: csv::Error) -> Self {
        EpiError::CsvError(error)
    }
}

impl From<serde_json::Error> for EpiError {
    fn from(error: serde_json::Error) -> Self {
        EpiError::JsonError(error)
    }
}

impl Display for EpiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EpiError::IoError(error) => write!(f, "IO error: {error}"),
            EpiError::CsvError(error) => write!(f, "CSV error: {error}"),
            EpiError::JsonError(error) => write!(f, "JSON error: {error}"),
            EpiError::Validation(message) => write!(f, "invalid record: {message}"),
            EpiError::Config(message) => write!(f, "invalid configuration: {message}"),
        }
    }
}

impl std::error::Error for EpiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EpiError::IoError(error) => Some(error),
            EpiError::CsvError(error) => Some(error),
            EpiError::JsonError(error) => Some(error),
            EpiError::Validation(_) | EpiError::Config(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_names_the_field() {
        let error = EpiError::validation("Person_ID is missing");
        assert_eq!(error.to_string(), "invalid record: Person_ID is missing");
    }

    #[test]
    fn io_error_keeps_its_source() {
        use std::error::Error;
        let error = EpiError::from(io::Error::new(io::ErrorKind::NotFound, "no such file"));
        assert!(error.source().is_some());
    }
}
