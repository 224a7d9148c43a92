// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Location(LocationError),
}

/// Reasons a location string cannot be turned into a [`crate::location::Location`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationError {
    /// The path does not match `/` or `/p/<index>`.
    UnknownPath(String),

    /// The photo index is not a non-negative integer.
    InvalidIndex(String),
}

impl LocationError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LocationError::UnknownPath(_) => "error-location-unknown-path",
            LocationError::InvalidIndex(_) => "error-location-invalid-index",
        }
    }
}

impl fmt::Display for LocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationError::UnknownPath(path) => write!(f, "Unknown path: {}", path),
            LocationError::InvalidIndex(raw) => write!(f, "Invalid photo index: {}", raw),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Location(e) => write!(f, "Location Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LocationError> for Error {
    fn from(err: LocationError) -> Self {
        Error::Location(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn location_error_wraps_into_error() {
        let err: Error = LocationError::UnknownPath("/albums".into()).into();
        assert_eq!(format!("{}", err), "Location Error: Unknown path: /albums");
    }

    #[test]
    fn location_error_i18n_keys() {
        assert_eq!(
            LocationError::UnknownPath(String::new()).i18n_key(),
            "error-location-unknown-path"
        );
        assert_eq!(
            LocationError::InvalidIndex(String::new()).i18n_key(),
            "error-location-invalid-index"
        );
    }
}
