//! Error types for MusicBrainz web service operations.
//!
//! Errors fall into two families: usage errors, raised before anything is
//! sent over the network, and web service errors, raised while talking to
//! the server or interpreting its reply.

use thiserror::Error;

/// Result type alias for MusicBrainz operations.
pub type MbResult<T> = Result<T, MbError>;

/// Errors related to MusicBrainz web service operations.
#[derive(Debug, Error)]
pub enum MbError {
    /// An include is not valid for the requested entity.
    #[error("Bad includes: {include} is not a valid include for {entity}")]
    InvalidInclude {
        /// Entity the include was requested for
        entity: String,
        /// The offending include
        include: String,
    },

    /// A release status or type filter is unknown or cannot be used here.
    #[error("Invalid filter: {message}")]
    InvalidFilter {
        /// Description of the filter problem
        message: String,
    },

    /// A search field is not valid for the searched entity.
    #[error("{field} is not a valid search field for {entity}")]
    InvalidSearchField {
        /// Searched entity
        entity: String,
        /// The offending field
        field: String,
    },

    /// An entity cannot be browsed through the given linked entity.
    #[error("Can't browse {entity} by {link}")]
    InvalidBrowseLink {
        /// Browsed entity
        entity: String,
        /// Linked entity name
        link: String,
    },

    /// A search produced no query terms.
    #[error("at least one query term is required")]
    EmptyQuery,

    /// No user agent was configured before making a request.
    #[error(
        "set a proper user-agent with an application name, application version and contact info"
    )]
    MissingUserAgent,

    /// The user agent application name or version was empty.
    #[error("App and version can not be empty")]
    InvalidUserAgent,

    /// The request needs credentials but none are configured.
    #[error("authorization required; configure credentials first")]
    CredentialsRequired,

    /// Rate limit parameters were out of range.
    #[error("Invalid rate limit: {message}")]
    InvalidRateLimit {
        /// Which parameter was wrong
        message: String,
    },

    /// A rating was outside 0..=100.
    #[error("Rating {rating} for {id} is out of range (0-100)")]
    InvalidRating {
        /// Entity MBID
        id: String,
        /// The rejected rating
        rating: u8,
    },

    /// A submission names an entity type that cannot be tagged or rated.
    #[error("Can't submit {operation} for {entity}")]
    InvalidSubmission {
        /// What was submitted ("tags", "ratings")
        operation: String,
        /// The offending entity type
        entity: String,
    },

    /// The server replied with an HTTP error status.
    #[error("MusicBrainz request failed with status {status}: {url}{}", server_message(.message))]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
        /// Error text sent by the server, if any
        message: Option<String>,
    },

    /// The server rejected our credentials (HTTP 401).
    #[error("Authentication failed for {url}")]
    Authentication {
        /// The URL that was requested
        url: String,
    },

    /// The server returned a body we could not interpret.
    #[error("Invalid response from MusicBrainz: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// A submission body could not be written.
    #[error("Failed to build XML request body: {0}")]
    XmlWrite(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl MbError {
    /// True for errors caused by misuse of the client API.
    pub const fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInclude { .. }
                | Self::InvalidFilter { .. }
                | Self::InvalidSearchField { .. }
                | Self::InvalidBrowseLink { .. }
                | Self::EmptyQuery
                | Self::MissingUserAgent
                | Self::InvalidUserAgent
                | Self::CredentialsRequired
                | Self::InvalidRateLimit { .. }
                | Self::InvalidRating { .. }
                | Self::InvalidSubmission { .. }
                | Self::XmlWrite(_)
                | Self::InvalidUrl(_)
        )
    }

    /// True for errors raised while talking to the server.
    pub const fn is_web_service_error(&self) -> bool {
        matches!(
            self,
            Self::ApiRequestFailed { .. }
                | Self::Authentication { .. }
                | Self::InvalidResponse { .. }
                | Self::Network(_)
                | Self::JsonParse(_)
        )
    }

    /// True when the server answered 404.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiRequestFailed { status: 404, .. })
    }

    pub(crate) fn invalid_filter(message: impl Into<String>) -> Self {
        Self::InvalidFilter {
            message: message.into(),
        }
    }
}

fn server_message(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(" ({m})"))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_include_message() {
        let error = MbError::InvalidInclude {
            entity: "artist".to_string(),
            include: "foo".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("foo is not a valid include"));
        assert!(error.is_usage_error());
        assert!(!error.is_web_service_error());
    }

    #[test]
    fn test_api_request_failed_message() {
        let error = MbError::ApiRequestFailed {
            status: 404,
            url: "https://musicbrainz.org/ws/2/artist/x".to_string(),
            message: Some("Not Found".to_string()),
        };
        let msg = error.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("musicbrainz.org"));
        assert!(msg.contains("(Not Found)"));
        assert!(error.is_not_found());
        assert!(error.is_web_service_error());
    }

    #[test]
    fn test_api_request_failed_without_message() {
        let error = MbError::ApiRequestFailed {
            status: 503,
            url: "https://musicbrainz.org/ws/2/release/".to_string(),
            message: None,
        };
        assert!(!error.to_string().contains('('));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_bad_url_and_xml_are_usage_errors() {
        let error = MbError::from(url::Url::parse("https://").unwrap_err());
        assert!(error.is_usage_error());
        assert!(!error.is_web_service_error());

        let error = MbError::XmlWrite("invalid character".to_string());
        assert!(error.is_usage_error());
        assert!(!error.is_web_service_error());
    }

    #[test]
    fn test_authentication_is_web_service_error() {
        let error = MbError::Authentication {
            url: "https://musicbrainz.org/ws/2/collection/".to_string(),
        };
        assert!(error.is_web_service_error());
        assert!(!error.is_usage_error());
    }

    #[test]
    fn test_rate_limit_message_names_parameter() {
        let error = MbError::InvalidRateLimit {
            message: "requests can't be zero".to_string(),
        };
        assert!(error.to_string().contains("requests"));
    }
}
