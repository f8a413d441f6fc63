//! Error types for streamctl
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for streamctl operations
pub type ShellResult<T> = Result<T, ShellError>;

/// Main error type for streamctl operations
#[derive(Error, Debug)]
pub enum ShellError {
    /// Two mutually exclusive deployment-property sources were given
    #[error("option --{first} and option --{second} cannot both be specified")]
    ConflictingOptions {
        first: &'static str,
        second: &'static str,
    },

    /// An inline deployment property token is not of the form key=value
    #[error("malformed deployment property '{token}' - expected key=value")]
    MalformedProperty { token: String },

    /// Properties file missing, unreadable, or syntactically invalid
    #[error("cannot read properties file {path}")]
    PropertiesFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration file
    #[error("invalid config {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Transport-level failure talking to the server; never retried here
    #[error("remote operation failed")]
    Remote(#[from] reqwest::Error),

    /// Server rejected the request; body is preserved verbatim
    #[error("server returned {status}: {message}")]
    Server { status: u16, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_conflicting_options() {
        let err = ShellError::ConflictingOptions {
            first: "properties",
            second: "properties-file",
        };
        assert_eq!(
            err.to_string(),
            "option --properties and option --properties-file cannot both be specified"
        );
    }

    #[test]
    fn test_error_display_malformed_property() {
        let err = ShellError::MalformedProperty {
            token: "bad".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed deployment property 'bad' - expected key=value"
        );
    }

    #[test]
    fn test_properties_file_error_preserves_cause() {
        let err = ShellError::PropertiesFile {
            path: PathBuf::from("deploy.properties"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(
            err.to_string(),
            "cannot read properties file deploy.properties"
        );
        let source = std::error::Error::source(&err).expect("wrapped IO cause");
        assert!(source.to_string().contains("no such file"));
    }
}
