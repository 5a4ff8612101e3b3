//! Public configuration for the MusicBrainz client.
//!
//! A client owns its configuration; there is no process-wide state. Build
//! one with the `with_*` methods and hand it to
//! [`DefaultMusicBrainzClient::new`](crate::DefaultMusicBrainzClient::new).

use std::fmt;
use std::num::NonZeroU32;
use std::time::Duration;

use crate::error::{MbError, MbResult};

/// Default MusicBrainz host.
pub const DEFAULT_HOSTNAME: &str = "musicbrainz.org";

/// Default Cover Art Archive host.
pub const DEFAULT_COVER_ART_HOSTNAME: &str = "coverartarchive.org";

/// Identification sent with every request.
///
/// MusicBrainz asks every application to identify itself with a name,
/// version and a way to contact its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAgent {
    app: String,
    version: String,
    contact: Option<String>,
}

impl UserAgent {
    /// Create a user agent. Fails if `app` or `version` is empty.
    pub fn new(
        app: impl Into<String>,
        version: impl Into<String>,
        contact: Option<String>,
    ) -> MbResult<Self> {
        let app = app.into();
        let version = version.into();
        if app.trim().is_empty() || version.trim().is_empty() {
            return Err(MbError::InvalidUserAgent);
        }
        let user_agent = Self {
            app,
            version,
            contact: contact.filter(|c| !c.trim().is_empty()),
        };
        tracing::debug!(user_agent = %user_agent.header_value(), "set user-agent");
        Ok(user_agent)
    }

    /// Value of the `User-Agent` header.
    pub fn header_value(&self) -> String {
        let base = format!(
            "{}/{} mbngs/{}",
            self.app,
            self.version,
            env!("CARGO_PKG_VERSION")
        );
        match &self.contact {
            Some(contact) => format!("{base} ( {contact} )"),
            None => base,
        }
    }

    /// Value of the `client` query parameter sent with submissions.
    pub fn client_id(&self) -> String {
        format!("{}-{}", self.app, self.version)
    }
}

/// Username and password for the MusicBrainz account.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub(crate) username: String,
    pub(crate) password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// How fast the client may send requests.
///
/// The limit is a bucket of `requests` tokens refilled over `interval`, so a
/// burst of up to `requests` calls goes out immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimit {
    /// Never wait.
    Disabled,
    /// At most `requests` requests per `interval`.
    Enabled {
        interval: Duration,
        requests: NonZeroU32,
    },
}

impl RateLimit {
    /// Validate and build an enabled rate limit.
    pub fn new(interval: Duration, requests: u32) -> MbResult<Self> {
        if interval.is_zero() {
            return Err(MbError::InvalidRateLimit {
                message: "interval can't be zero".to_string(),
            });
        }
        let requests = NonZeroU32::new(requests).ok_or_else(|| MbError::InvalidRateLimit {
            message: "requests can't be zero".to_string(),
        })?;
        Ok(Self::Enabled { interval, requests })
    }
}

impl Default for RateLimit {
    fn default() -> Self {
        Self::Enabled {
            interval: Duration::from_secs(1),
            requests: NonZeroU32::MIN,
        }
    }
}

/// Response format asked of the web service for raw requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WsFormat {
    /// The service's native format.
    #[default]
    Xml,
    /// JSON (`fmt=json`).
    Json,
}

impl WsFormat {
    /// Value of the `fmt` query parameter, if any.
    pub const fn as_param(self) -> Option<&'static str> {
        match self {
            Self::Xml => None,
            Self::Json => Some("json"),
        }
    }
}

/// Configuration for the MusicBrainz client.
///
/// # Example
///
/// ```
/// use mbngs_ws::{ClientConfig, UserAgent};
/// use std::time::Duration;
///
/// let config = ClientConfig::new()
///     .with_user_agent(UserAgent::new("my-tagger", "0.3", None).unwrap())
///     .with_timeout(Duration::from_secs(20));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host (and optional port) of the web service
    pub(crate) hostname: String,
    /// Whether to use https
    pub(crate) use_https: bool,
    /// Identification sent with every request
    pub(crate) user_agent: Option<UserAgent>,
    /// Account used for authenticated requests
    pub(crate) credentials: Option<Credentials>,
    /// Request throttling
    pub(crate) rate_limit: RateLimit,
    /// Request timeout
    pub(crate) timeout: Duration,
    /// Maximum number of retry attempts for transient errors
    pub(crate) max_retries: u8,
    /// Base delay for exponential backoff
    pub(crate) retry_base_delay: Duration,
    /// Host of the Cover Art Archive
    pub(crate) cover_art_hostname: String,
    /// Whether to use https for the Cover Art Archive
    pub(crate) cover_art_use_https: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            use_https: true,
            user_agent: None,
            credentials: None,
            rate_limit: RateLimit::default(),
            timeout: Duration::from_secs(60),
            max_retries: 8,
            retry_base_delay: Duration::from_secs(2),
            cover_art_hostname: DEFAULT_COVER_ART_HOSTNAME.to_string(),
            cover_art_use_https: true,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the user agent. Requests fail until one is set.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: UserAgent) -> Self {
        self.user_agent = Some(user_agent);
        self
    }

    /// Point the client at another MusicBrainz server.
    ///
    /// The hostname may carry a port, e.g. `localhost:5000`.
    #[must_use]
    pub fn with_hostname(mut self, hostname: impl Into<String>, use_https: bool) -> Self {
        self.hostname = hostname.into();
        self.use_https = use_https;
        self
    }

    /// Set the account used for requests that need authentication.
    #[must_use]
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set optional credentials.
    #[must_use]
    pub fn with_optional_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    /// Set the rate limit. Defaults to one request per second.
    #[must_use]
    pub const fn with_rate_limit(mut self, rate_limit: RateLimit) -> Self {
        self.rate_limit = rate_limit;
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 60 seconds.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retry attempts for transient errors.
    ///
    /// Defaults to 8 retries.
    #[must_use]
    pub const fn with_max_retries(mut self, retries: u8) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the base delay for exponential backoff retries.
    ///
    /// Defaults to 2 seconds.
    #[must_use]
    pub const fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Point Cover Art Archive requests at another host.
    ///
    /// Independent of [`with_hostname`](Self::with_hostname).
    #[must_use]
    pub fn with_cover_art_hostname(mut self, hostname: impl Into<String>, use_https: bool) -> Self {
        self.cover_art_hostname = hostname.into();
        self.cover_art_use_https = use_https;
        self
    }

    pub fn user_agent(&self) -> Option<&UserAgent> {
        self.user_agent.as_ref()
    }

    pub const fn rate_limit(&self) -> RateLimit {
        self.rate_limit
    }

    pub(crate) const fn scheme(&self) -> &'static str {
        if self.use_https { "https" } else { "http" }
    }

    pub(crate) const fn cover_art_scheme(&self) -> &'static str {
        if self.cover_art_use_https { "https" } else { "http" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_default_config() {
        let config = ClientConfig::new();
        assert_eq!(config.hostname, "musicbrainz.org");
        assert!(config.use_https);
        assert!(config.user_agent.is_none());
        assert!(config.credentials.is_none());
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert_eq!(config.max_retries, 8);
        assert_eq!(config.retry_base_delay, Duration::from_secs(2));
        assert_eq!(config.scheme(), "https");
        assert_eq!(config.cover_art_scheme(), "https");
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::new()
            .with_hostname("localhost:5000", false)
            .with_credentials(Credentials::new("user", "secret"))
            .with_rate_limit(RateLimit::Disabled)
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(2)
            .with_cover_art_hostname("caa.local", false);

        assert_eq!(config.hostname, "localhost:5000");
        assert_eq!(config.scheme(), "http");
        assert_eq!(config.credentials.as_ref().map(Credentials::username), Some("user"));
        assert_eq!(config.rate_limit, RateLimit::Disabled);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 2);
        assert_eq!(config.cover_art_hostname, "caa.local");
        assert_eq!(config.cover_art_scheme(), "http");
    }

    #[test]
    fn test_hostname_leaves_cover_art_scheme_alone() {
        let config = ClientConfig::new().with_hostname("localhost:5000", false);
        assert_eq!(config.scheme(), "http");
        assert_eq!(config.cover_art_scheme(), "https");
        assert_eq!(config.cover_art_hostname, DEFAULT_COVER_ART_HOSTNAME);
    }

    #[test]
    fn test_user_agent_header() {
        let ua = UserAgent::new("test", "1", None).unwrap();
        assert_eq!(
            ua.header_value(),
            format!("test/1 mbngs/{}", env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(ua.client_id(), "test-1");

        let ua = UserAgent::new("tagger", "0.2", Some("me@example.org".to_string())).unwrap();
        assert!(ua.header_value().ends_with("( me@example.org )"));
    }

    #[test]
    fn test_user_agent_rejects_empty_parts() {
        assert!(matches!(
            UserAgent::new("", "1", None),
            Err(MbError::InvalidUserAgent)
        ));
        assert!(matches!(
            UserAgent::new("app", "  ", None),
            Err(MbError::InvalidUserAgent)
        ));
    }

    #[test]
    fn test_rate_limit_validation() {
        let err = assert_err!(RateLimit::new(Duration::ZERO, 1));
        assert!(err.to_string().contains("interval"));

        let err = assert_err!(RateLimit::new(Duration::from_secs(1), 0));
        assert!(err.to_string().contains("requests"));

        let limit = assert_ok!(RateLimit::new(Duration::from_secs(3), 3));
        assert!(matches!(limit, RateLimit::Enabled { requests, .. } if requests.get() == 3));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("user", "hunter2");
        let debug = format!("{creds:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_format_param() {
        assert_eq!(WsFormat::Xml.as_param(), None);
        assert_eq!(WsFormat::Json.as_param(), Some("json"));
    }
}
