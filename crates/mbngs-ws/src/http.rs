//! HTTP backend abstraction for the MusicBrainz web service.
//!
//! The client builds fully resolved [`WsRequest`]s and hands them to an
//! [`HttpBackend`]. The production backend uses reqwest, retries transient
//! failures with exponential backoff and answers digest authentication
//! challenges. Tests substitute their own backend.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, USER_AGENT, WWW_AUTHENTICATE};
use url::Url;

use crate::config::{ClientConfig, Credentials};
use crate::error::{MbError, MbResult};
use crate::parsing::server_error_message;

/// Statuses worth another attempt.
const RETRY_STATUSES: [u16; 3] = [500, 502, 503];

/// Content type of submission bodies.
const XML_CONTENT_TYPE: &str = "application/xml; charset=UTF-8";

// ============================================================================
// Requests and responses
// ============================================================================

/// HTTP methods the web service accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }

    /// POST submissions create edits and are never re-sent.
    pub const fn is_retryable(self) -> bool {
        !matches!(self, Self::Post)
    }

    const fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request ready to be sent.
#[derive(Debug, Clone)]
pub struct WsRequest {
    pub method: Method,
    pub url: Url,
    /// XML body, for submissions
    pub body: Option<String>,
    /// Set when the request must authenticate
    pub credentials: Option<Credentials>,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

impl WsRequest {
    pub fn get(url: Url, user_agent: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            url,
            body: None,
            credentials: None,
            user_agent: user_agent.into(),
        }
    }

    #[must_use]
    pub const fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_credentials(mut self, credentials: Option<Credentials>) -> Self {
        self.credentials = credentials;
        self
    }

    pub const fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }
}

/// A successful response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WsResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl WsResponse {
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Sends requests to the web service.
///
/// Implementations return `Ok` only for successful (2xx) responses and map
/// every failure to an [`MbError`]: `Authentication` for 401,
/// `ApiRequestFailed` for other error statuses, `Network` for transport
/// errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HttpBackend: Send + Sync {
    async fn execute(&self, request: &WsRequest) -> MbResult<WsResponse>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest with retry logic.
pub struct ReqwestBackend {
    client: reqwest::Client,
    max_retries: u8,
    retry_base_delay: Duration,
}

impl ReqwestBackend {
    /// Create a backend with the timeout and retry policy of `config`.
    pub fn new(config: &ClientConfig) -> MbResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            max_retries: config.max_retries,
            retry_base_delay: config.retry_base_delay,
        })
    }

    fn build_request(
        &self,
        request: &WsRequest,
        authorization: Option<&str>,
    ) -> reqwest::RequestBuilder {
        let mut builder = self
            .client
            .request(request.method.to_reqwest(), request.url.as_str())
            .header(USER_AGENT, request.user_agent.as_str());
        builder = match &request.body {
            Some(body) => builder
                .header(CONTENT_TYPE, XML_CONTENT_TYPE)
                .body(body.clone()),
            None => builder.header(CONTENT_LENGTH, "0"),
        };
        if let Some(authorization) = authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }
        builder
    }

    /// Send once, answering a digest challenge if credentials are attached.
    async fn send(&self, request: &WsRequest) -> MbResult<reqwest::Response> {
        let response = self.build_request(request, None).send().await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }
        let Some(credentials) = &request.credentials else {
            return Ok(response);
        };
        let Some(challenge) = response
            .headers()
            .get(WWW_AUTHENTICATE)
            .and_then(|h| h.to_str().ok())
        else {
            return Ok(response);
        };

        tracing::debug!(url = %request.url, user = credentials.username(), "answering digest challenge");
        let authorization = digest_authorization(request, credentials, challenge)?;
        Ok(self
            .build_request(request, Some(&authorization))
            .send()
            .await?)
    }

    /// Send with automatic retry for transient errors.
    async fn execute_with_retry(&self, request: &WsRequest) -> MbResult<WsResponse> {
        let mut last_error: Option<MbError> = None;
        let max_retries = if request.method.is_retryable() {
            self.max_retries
        } else {
            0
        };

        for attempt in 0..=max_retries {
            if attempt > 0 {
                let delay = self
                    .retry_base_delay
                    .saturating_mul(2u32.saturating_pow(u32::from(attempt) - 1));
                tracing::warn!(
                    url = %request.url,
                    attempt,
                    ?delay,
                    error = ?last_error,
                    "retrying request"
                );
                tokio::time::sleep(delay).await;
            }

            match self.send(request).await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if response.status().is_success() {
                        let body = response.bytes().await?.to_vec();
                        return Ok(WsResponse { status, body });
                    }

                    if status == 401 {
                        return Err(MbError::Authentication {
                            url: request.url.to_string(),
                        });
                    }

                    let body = response.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
                    let error = MbError::ApiRequestFailed {
                        status,
                        url: request.url.to_string(),
                        message: server_error_message(&body),
                    };
                    if RETRY_STATUSES.contains(&status) && attempt < max_retries {
                        last_error = Some(error);
                        continue;
                    }
                    return Err(error);
                }
                // Network errors are retryable
                Err(MbError::Network(e)) if attempt < max_retries => {
                    last_error = Some(MbError::Network(e));
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| MbError::InvalidResponse {
            message: "Unknown error during request".to_string(),
        }))
    }
}

/// `Authorization` header value answering a digest challenge.
fn digest_authorization(
    request: &WsRequest,
    credentials: &Credentials,
    challenge: &str,
) -> MbResult<String> {
    let uri = &request.url[url::Position::BeforePath..];
    let context = digest_auth::AuthContext::new_with_method(
        credentials.username.as_str(),
        credentials.password.as_str(),
        uri,
        request.body.as_deref().map(str::as_bytes),
        digest_auth::HttpMethod::from(request.method.as_str()),
    );
    let mut prompt = digest_auth::parse(challenge).map_err(|e| MbError::InvalidResponse {
        message: format!("bad authentication challenge: {e}"),
    })?;
    let answer = prompt
        .respond(&context)
        .map_err(|e| MbError::InvalidResponse {
            message: format!("cannot answer authentication challenge: {e}"),
        })?;
    Ok(answer.to_header_string())
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn execute(&self, request: &WsRequest) -> MbResult<WsResponse> {
        tracing::debug!(method = %request.method, url = %request.url, "web service request");
        self.execute_with_retry(request).await
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
