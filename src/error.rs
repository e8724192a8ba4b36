// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type. Nothing here is fatal once the window is up;
//! callers turn errors into notifications.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Reading or writing a file.
    Io(String),
    /// `settings.toml` could not be parsed or serialized.
    Config(String),
    /// The embedded site content is malformed.
    Content(String),
}

/// Failures that can happen while generating or saving the résumé file.
/// Used to pick a user-facing notification message.
#[derive(Debug, Clone, PartialEq)]
pub enum ResumeError {
    /// No download directory could be determined on this platform.
    NoDownloadDirectory,

    /// The generated document was empty.
    EmptyDocument,

    /// Writing the file failed.
    WriteFailed(String),
}

impl ResumeError {
    /// Fluent key of the error notification.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ResumeError::NoDownloadDirectory => "notification-resume-no-directory",
            ResumeError::EmptyDocument => "notification-resume-empty",
            ResumeError::WriteFailed(_) => "notification-resume-write-error",
        }
    }
}

impl fmt::Display for ResumeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResumeError::NoDownloadDirectory => f.write_str("no download directory"),
            ResumeError::EmptyDocument => f.write_str("generated document is empty"),
            ResumeError::WriteFailed(reason) => write!(f, "could not write file: {reason}"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "file error: {e}"),
            Error::Config(e) => write!(f, "invalid settings: {e}"),
            Error::Content(e) => write!(f, "invalid site content: {e}"),
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
    fn io_failures_keep_their_reason() {
        let err: Error = std::io::Error::other("disk full").into();
        assert_eq!(err, Error::Io("disk full".to_string()));
        assert_eq!(err.to_string(), "file error: disk full");
    }

    #[test]
    fn toml_failures_are_config_errors() {
        let parse_error = toml::from_str::<toml::Table>("a = = b").unwrap_err();
        assert!(matches!(Error::from(parse_error), Error::Config(_)));
    }

    #[test]
    fn each_resume_failure_has_its_own_message() {
        let errors = [
            ResumeError::NoDownloadDirectory,
            ResumeError::EmptyDocument,
            ResumeError::WriteFailed("denied".into()),
        ];
        for (i, a) in errors.iter().enumerate() {
            for b in &errors[i + 1..] {
                assert_ne!(a.i18n_key(), b.i18n_key());
            }
        }
    }

    #[test]
    fn write_failure_keeps_its_reason() {
        let err = ResumeError::WriteFailed("denied".into());
        assert_eq!(err.to_string(), "could not write file: denied");
    }
}
