//! MusicBrainz web service client.
//!
//! Every request goes through [`MusicBrainzClient::request`]: it checks the
//! user agent, attaches credentials when needed, waits for the rate limiter
//! and hands the request to the HTTP backend.

mod browse;
mod collection;
mod coverart;
mod lookup;
mod search;
mod submit;

pub use coverart::CoverArtEntity;

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::{ClientConfig, Credentials, WsFormat};
use crate::entity::EntityType;
use crate::error::{MbError, MbResult};
use crate::http::{HttpBackend, Method, ReqwestBackend, WsRequest, WsResponse};
use crate::parsing::parse_json;
use crate::query::LookupOptions;
use crate::rate_limit::RequestLimiter;
use crate::url::{build_ws_url, entity_path};
use crate::validation::{
    AuthRequirement, auth_requirement, check_filter_and_make_params, check_includes,
};

// ============================================================================
// Type Aliases
// ============================================================================

/// Client using the reqwest HTTP backend.
pub type DefaultMusicBrainzClient = MusicBrainzClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the MusicBrainz web service and the Cover Art Archive.
///
/// Generic over the HTTP backend so tests can substitute their own. Clones
/// share the rate limiter.
pub struct MusicBrainzClient<B: HttpBackend> {
    pub(crate) backend: Arc<B>,
    pub(crate) config: ClientConfig,
    pub(crate) limiter: Arc<RequestLimiter>,
}

impl<B: HttpBackend> Clone for MusicBrainzClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            config: self.config.clone(),
            limiter: Arc::clone(&self.limiter),
        }
    }
}

impl DefaultMusicBrainzClient {
    /// Create a client talking to the configured host.
    pub fn new(config: ClientConfig) -> MbResult<Self> {
        let backend = ReqwestBackend::new(&config)?;
        Ok(Self::with_backend(config, backend))
    }
}

impl<B: HttpBackend> MusicBrainzClient<B> {
    /// Create a client with a custom backend.
    pub fn with_backend(config: ClientConfig, backend: B) -> Self {
        let limiter = Arc::new(RequestLimiter::new(config.rate_limit));
        Self {
            backend: Arc::new(backend),
            config,
            limiter,
        }
    }

    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Credentials for a request with the given requirement.
    fn credentials_for(&self, auth: AuthRequirement) -> MbResult<Option<Credentials>> {
        match auth {
            AuthRequirement::None => Ok(None),
            AuthRequirement::IfSet => Ok(self.config.credentials.clone()),
            AuthRequirement::Required => self
                .config
                .credentials
                .clone()
                .map(Some)
                .ok_or(MbError::CredentialsRequired),
        }
    }

    /// Send one request to `/ws/2/{path}`.
    ///
    /// `client_required` adds the `client=` parameter that identifies the
    /// application on submissions.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        mut params: BTreeMap<String, String>,
        auth: AuthRequirement,
        client_required: bool,
        body: Option<String>,
    ) -> MbResult<WsResponse> {
        let user_agent = self
            .config
            .user_agent
            .as_ref()
            .ok_or(MbError::MissingUserAgent)?;
        if client_required {
            params.insert("client".to_string(), user_agent.client_id());
        }
        let credentials = self.credentials_for(auth)?;
        let url = build_ws_url(&self.config, path, &params)?;

        let mut request = WsRequest::get(url, user_agent.header_value())
            .with_method(method)
            .with_credentials(credentials);
        if let Some(body) = body {
            request = request.with_body(body);
        }

        self.limiter.until_ready().await;
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            authenticated = request.is_authenticated(),
            "MusicBrainz request"
        );
        self.backend.execute(&request).await
    }

    /// GET `{entity}/{id}` with validated includes.
    ///
    /// An empty `id` addresses the entity's collection endpoint (searches,
    /// browses, the user's collections).
    pub(crate) async fn do_query(
        &self,
        entity: EntityType,
        id: &str,
        includes: &[String],
        params: BTreeMap<String, String>,
        format: WsFormat,
    ) -> MbResult<WsResponse> {
        check_includes(entity, includes)?;
        self.get_with_includes(entity, id, includes, params, format)
            .await
    }

    /// GET without re-checking includes; callers validate them first.
    pub(crate) async fn get_with_includes(
        &self,
        entity: EntityType,
        id: &str,
        includes: &[String],
        params: BTreeMap<String, String>,
        format: WsFormat,
    ) -> MbResult<WsResponse> {
        let auth = auth_requirement(entity, id, includes);
        self.get_with_auth(entity, id, includes, params, format, auth)
            .await
    }

    pub(crate) async fn get_with_auth(
        &self,
        entity: EntityType,
        id: &str,
        includes: &[String],
        mut params: BTreeMap<String, String>,
        format: WsFormat,
        auth: AuthRequirement,
    ) -> MbResult<WsResponse> {
        if !includes.is_empty() {
            params.insert("inc".to_string(), includes.join(" "));
        }
        if let Some(fmt) = format.as_param() {
            params.insert("fmt".to_string(), fmt.to_string());
        }
        let path = entity_path(entity.as_str(), Some(id));
        self.request(Method::Get, &path, params, auth, false, None)
            .await
    }

    /// Look up one entity with includes and release filters.
    pub(crate) async fn lookup_entity<T: DeserializeOwned>(
        &self,
        entity: EntityType,
        id: &str,
        options: &LookupOptions,
    ) -> MbResult<T> {
        let params = check_filter_and_make_params(
            entity,
            &options.includes,
            &options.release_status,
            &options.release_type,
        )?;
        let response = self
            .do_query(entity, id, &options.includes, params, WsFormat::Json)
            .await?;
        parse_json(&response.body)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::{RateLimit, UserAgent};
    use crate::http::testing::{CannedResponse, FakeBackend};
    use serde_json::json;

    pub fn test_config() -> ClientConfig {
        ClientConfig::new()
            .with_user_agent(UserAgent::new("test-app", "0.1", Some("test@example.org".to_string())).unwrap())
            .with_rate_limit(RateLimit::Disabled)
    }

    pub fn recorded_urls(backend: &FakeBackend) -> Vec<String> {
        backend
            .requests()
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.to_string())
            .collect()
    }

    #[test]
    fn test_default_client_creation() {
        let _client = DefaultMusicBrainzClient::new(test_config()).unwrap();
    }

    #[tokio::test]
    async fn test_missing_user_agent() {
        let backend = FakeBackend::new().with_json("artist", json!({}));
        let config = ClientConfig::new().with_rate_limit(RateLimit::Disabled);
        let client = MusicBrainzClient::with_backend(config, backend);
        let err = client
            .request(Method::Get, "artist/x", BTreeMap::new(), AuthRequirement::None, false, None)
            .await
            .unwrap_err();
        assert!(matches!(err, MbError::MissingUserAgent));
    }

    #[tokio::test]
    async fn test_user_agent_header_sent() {
        let backend = FakeBackend::new().with_json("area", json!({"id": "x", "name": "Here"}));
        let requests = backend.requests();
        let client = MusicBrainzClient::with_backend(test_config(), backend);
        client
            .request(Method::Get, "area/x", BTreeMap::new(), AuthRequirement::None, false, None)
            .await
            .unwrap();
        let seen = requests.lock().unwrap();
        assert!(seen[0].user_agent.starts_with("test-app/0.1 mbngs/"));
        assert!(seen[0].user_agent.ends_with("( test@example.org )"));
        assert!(!seen[0].is_authenticated());
    }

    #[tokio::test]
    async fn test_required_auth_without_credentials() {
        let backend = FakeBackend::new();
        let requests = backend.requests();
        let client = MusicBrainzClient::with_backend(test_config(), backend);
        let err = client
            .request(Method::Get, "collection", BTreeMap::new(), AuthRequirement::Required, false, None)
            .await
            .unwrap_err();
        assert!(matches!(err, MbError::CredentialsRequired));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_if_set_auth_uses_configured_credentials() {
        let backend = FakeBackend::new().with_default(CannedResponse::Body(b"{}".to_vec()));
        let requests = backend.requests();
        let config = test_config().with_credentials(Credentials::new("user", "pass"));
        let client = MusicBrainzClient::with_backend(config, backend);
        client
            .request(Method::Get, "collection/c1/releases", BTreeMap::new(), AuthRequirement::IfSet, false, None)
            .await
            .unwrap();
        client
            .request(Method::Get, "artist/a", BTreeMap::new(), AuthRequirement::None, false, None)
            .await
            .unwrap();
        let seen = requests.lock().unwrap();
        assert!(seen[0].is_authenticated());
        assert!(!seen[1].is_authenticated());
    }

    #[tokio::test]
    async fn test_client_param_added() {
        let backend = FakeBackend::new().with_default(CannedResponse::Body(b"<ok/>".to_vec()));
        let client = MusicBrainzClient::with_backend(
            test_config().with_credentials(Credentials::new("user", "pass")),
            backend,
        );
        client
            .request(Method::Post, "tag", BTreeMap::new(), AuthRequirement::Required, true, Some("<metadata/>".to_string()))
            .await
            .unwrap();
        let urls = recorded_urls(&client.backend);
        assert_eq!(urls, vec!["https://musicbrainz.org/ws/2/tag?client=test-app-0.1"]);
    }

    #[tokio::test]
    async fn test_server_error_propagates() {
        let backend = FakeBackend::new().with_response(
            "artist/missing",
            CannedResponse::Status(404, br#"{"error":"Not Found"}"#.to_vec()),
        );
        let client = MusicBrainzClient::with_backend(test_config(), backend);
        let err = client
            .lookup_entity::<serde_json::Value>(EntityType::Artist, "missing", &LookupOptions::new())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Not Found"));
    }

    #[tokio::test]
    async fn test_invalid_include_not_sent() {
        let backend = FakeBackend::new();
        let requests = backend.requests();
        let client = MusicBrainzClient::with_backend(test_config(), backend);
        let err = client
            .lookup_entity::<serde_json::Value>(
                EntityType::Artist,
                "a",
                &LookupOptions::new().include("labels"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, MbError::InvalidInclude { .. }));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_limiter() {
        let client = MusicBrainzClient::with_backend(test_config(), FakeBackend::new());
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.limiter, &clone.limiter));
    }
}
