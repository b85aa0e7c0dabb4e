// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Only failures a caller can act on are errors: unreadable or unwritable
//! preference files, inconsistent screen setups, and requests naming a
//! screen that does not exist. Requests that are merely not applicable in
//! the current state are reported as [`crate::shell::Outcome::Ignored`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Reading or writing the preference file failed.
    Io(String),
    /// Malformed preference file or invalid screen setup.
    Config(String),
    /// A transition targeted a screen that was never registered.
    UnknownScreen(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(reason) => write!(f, "preference I/O failed: {reason}"),
            Error::Config(reason) => write!(f, "invalid configuration: {reason}"),
            Error::UnknownScreen(id) => write!(f, "no screen registered as `{id}`"),
        }
    }
}

impl std::error::Error for Error {}

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
    fn io_failures_keep_the_os_message() {
        let err: Error = std::io::Error::other("read-only file system").into();
        assert_eq!(
            err,
            Error::Io("read-only file system".to_string())
        );
        assert_eq!(
            err.to_string(),
            "preference I/O failed: read-only file system"
        );
    }

    #[test]
    fn unknown_screen_names_the_id() {
        let err = Error::UnknownScreen("browser".into());
        assert_eq!(err.to_string(), "no screen registered as `browser`");
    }

    #[test]
    fn toml_parse_error_maps_to_config() {
        let parse: std::result::Result<toml::Table, _> = toml::from_str("not = valid = toml");
        let err: Error = parse.unwrap_err().into();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().starts_with("invalid configuration: "));
    }
}
