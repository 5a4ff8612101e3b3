//! CLI-specific error types and mappings.
//!
//! Library errors are mapped to exit codes and user-facing messages here.

use mbngs_ws::MbError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument the web service would reject.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Missing or inconsistent client configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The server rejected the credentials.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The requested resource does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The web service failed or answered with something unusable.
    #[error("Web service error: {0}")]
    Service(String),

    /// IO error (writing output or an image file).
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 66,       // EX_NOINPUT
            Self::Service(_) => 69,        // EX_UNAVAILABLE
            Self::Io(_) => 74,             // EX_IOERR
            Self::Authentication(_) => 77, // EX_NOPERM
            Self::Config(_) => 78,         // EX_CONFIG
        }
    }
}

impl From<MbError> for CliError {
    fn from(err: MbError) -> Self {
        match err {
            MbError::MissingUserAgent
            | MbError::InvalidUserAgent
            | MbError::CredentialsRequired
            | MbError::InvalidRateLimit { .. }
            | MbError::InvalidUrl(_) => Self::Config(err.to_string()),
            MbError::Authentication { .. } => Self::Authentication(err.to_string()),
            _ if err.is_not_found() => Self::NotFound(err.to_string()),
            _ if err.is_usage_error() => Self::Arguments(err.to_string()),
            _ => Self::Service(err.to_string()),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_errors_are_argument_errors() {
        let err = CliError::from(MbError::EmptyQuery);
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_missing_credentials_is_config() {
        let err = CliError::from(MbError::CredentialsRequired);
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_bad_host_is_config() {
        let parse_error = mbngs_ws::build_ws_url(
            &mbngs_ws::ClientConfig::new().with_hostname("bad host", true),
            "artist/x",
            &std::collections::BTreeMap::new(),
        )
        .unwrap_err();
        let err = CliError::from(parse_error);
        assert!(matches!(err, CliError::Config(_)));
        assert_eq!(err.exit_code(), 78);
    }

    #[test]
    fn test_xml_write_is_argument_error() {
        let err = CliError::from(MbError::XmlWrite("invalid character".to_string()));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_not_found() {
        let err = CliError::from(MbError::ApiRequestFailed {
            status: 404,
            url: "https://musicbrainz.org/ws/2/artist/x".to_string(),
            message: Some("Not Found".to_string()),
        });
        assert!(matches!(err, CliError::NotFound(_)));
        assert_eq!(err.exit_code(), 66);
    }

    #[test]
    fn test_server_failure() {
        let err = CliError::from(MbError::ApiRequestFailed {
            status: 503,
            url: "https://musicbrainz.org/ws/2/artist/x".to_string(),
            message: None,
        });
        assert_eq!(err.exit_code(), 69);
    }

    #[test]
    fn test_authentication() {
        let err = CliError::from(MbError::Authentication {
            url: "https://musicbrainz.org/ws/2/collection".to_string(),
        });
        assert_eq!(err.exit_code(), 77);
    }
}
