// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Translation(TranslationError),
}

/// Reasons a translation bundle could not be loaded.
///
/// None of these are fatal: the locale search falls through to the next
/// candidate, or to the built-in text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationError {
    /// No bundle exists at the requested virtual path.
    NotFound(String),

    /// The bundle exists but is not valid UTF-8.
    InvalidEncoding(String),

    /// The bundle is not valid Fluent syntax.
    Parse { path: String, errors: usize },
}

impl fmt::Display for TranslationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationError::NotFound(path) => write!(f, "no bundle at {}", path),
            TranslationError::InvalidEncoding(path) => {
                write!(f, "bundle at {} is not valid UTF-8", path)
            }
            TranslationError::Parse { path, errors } => {
                write!(f, "bundle at {} has {} syntax error(s)", path, errors)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Translation(e) => write!(f, "Translation Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<TranslationError> for Error {
    fn from(err: TranslationError) -> Self {
        Error::Translation(err)
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
    fn translation_error_wraps_into_error() {
        let err: Error = TranslationError::NotFound(":/i18n/AddressBook_xx-XX.ftl".into()).into();
        assert_eq!(
            format!("{}", err),
            "Translation Error: no bundle at :/i18n/AddressBook_xx-XX.ftl"
        );
    }

    #[test]
    fn parse_error_reports_error_count() {
        let err = TranslationError::Parse {
            path: ":/i18n/AddressBook_fr-FR.ftl".into(),
            errors: 2,
        };
        assert!(format!("{}", err).contains("2 syntax error(s)"));
    }
}
