//! Requests built through the public API, observed by a recording backend.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mbngs_ws::{
    BrowseLink, BrowseOptions, ClientConfig, Credentials, DiscIdResult, EntityType, HttpBackend,
    LookupOptions, MbError, MbResult, Method, MusicBrainzClient, RateLimit, SearchQuery,
    TagSubmission, UserAgent, WsRequest, WsResponse,
};
use serde_json::json;

/// Answers every request with the same body and keeps what it was sent.
#[derive(Clone)]
struct RecordingBackend {
    body: Vec<u8>,
    seen: Arc<Mutex<Vec<WsRequest>>>,
}

impl RecordingBackend {
    fn answering(body: &serde_json::Value) -> Self {
        Self {
            body: body.to_string().into_bytes(),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn urls(&self) -> Vec<String> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.to_string())
            .collect()
    }
}

#[async_trait]
impl HttpBackend for RecordingBackend {
    async fn execute(&self, request: &WsRequest) -> MbResult<WsResponse> {
        self.seen.lock().unwrap().push(request.clone());
        Ok(WsResponse::ok(self.body.clone()))
    }
}

fn config() -> ClientConfig {
    ClientConfig::new()
        .with_user_agent(UserAgent::new("integration", "1.0", None).unwrap())
        .with_rate_limit(RateLimit::Disabled)
}

#[tokio::test]
async fn lookup_against_custom_host() {
    let backend = RecordingBackend::answering(&json!({"id": "a", "name": "Portishead", "type": "Group"}));
    let client = MusicBrainzClient::with_backend(
        config().with_hostname("localhost:5000", false),
        backend.clone(),
    );
    let artist = client
        .get_artist_by_id("a", &LookupOptions::new().includes(["aliases", "tags"]))
        .await
        .unwrap();
    assert_eq!(artist.name, "Portishead");
    assert_eq!(artist.artist_type.as_deref(), Some("Group"));
    assert_eq!(
        backend.urls(),
        vec!["http://localhost:5000/ws/2/artist/a?fmt=json&inc=aliases+tags"]
    );
}

#[tokio::test]
async fn search_escapes_lucene_syntax() {
    let backend = RecordingBackend::answering(&json!({"count": 0, "offset": 0, "recordings": []}));
    let client = MusicBrainzClient::with_backend(config(), backend.clone());
    let page = client
        .search_recordings(&SearchQuery::new("").field("recording", "AC/DC: Live!"))
        .await
        .unwrap();
    assert!(page.is_empty());
    let urls = backend.urls();
    assert!(urls[0].starts_with("https://musicbrainz.org/ws/2/recording?fmt=json&query="));
    assert!(urls[0].contains("%5C%2F"));
}

#[tokio::test]
async fn validation_errors_send_nothing() {
    let backend = RecordingBackend::answering(&json!({}));
    let client = MusicBrainzClient::with_backend(config(), backend.clone());

    let err = client
        .get_place_by_id("p", &LookupOptions::new().include("isrcs"))
        .await
        .unwrap_err();
    assert!(err.is_usage_error());

    let err = client
        .browse_release_groups(&BrowseLink::Label("l".to_string()), &BrowseOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, MbError::InvalidBrowseLink { .. }));

    assert!(backend.urls().is_empty());
}

#[tokio::test]
async fn discid_stub_result() {
    let backend = RecordingBackend::answering(&json!({
        "id": "stub1", "title": "Home Burnt", "artist": "Someone", "track-count": 2,
        "tracks": [{"title": "One", "length": 1000}, {"title": "Two", "length": 2000}]
    }));
    let client = MusicBrainzClient::with_backend(config(), backend.clone());
    let result = client
        .get_releases_by_discid("xyz", &mbngs_ws::DiscIdOptions::new())
        .await
        .unwrap();
    match result {
        DiscIdResult::CdStub(stub) => assert_eq!(stub.tracks.len(), 2),
        other => panic!("expected a CD stub, got {other:?}"),
    }
}

#[tokio::test]
async fn tag_submission_is_authenticated_post() {
    let backend = RecordingBackend::answering(&json!({}));
    let client = MusicBrainzClient::with_backend(
        config().with_credentials(Credentials::new("editor", "secret")),
        backend.clone(),
    );
    client
        .submit_tags(&TagSubmission::new().tags(EntityType::Recording, "r", ["trip-hop"]))
        .await
        .unwrap();
    let seen = backend.seen.lock().unwrap();
    assert_eq!(seen[0].method, Method::Post);
    assert!(seen[0].is_authenticated());
    assert_eq!(
        seen[0].url.as_str(),
        "https://musicbrainz.org/ws/2/tag?client=integration-1.0"
    );
}

#[tokio::test]
async fn collection_edits_are_batched() {
    let backend = RecordingBackend::answering(&json!({}));
    let client = MusicBrainzClient::with_backend(
        config().with_credentials(Credentials::new("editor", "secret")),
        backend.clone(),
    );
    let releases: Vec<String> = (0..401).map(|i| format!("{i:04}")).collect();
    client
        .add_releases_to_collection("c", &releases)
        .await
        .unwrap();
    let urls = backend.urls();
    assert_eq!(urls.len(), 2);
    assert!(urls[1].ends_with("/collection/c/releases/0400?client=integration-1.0"));
}

#[tokio::test]
async fn submitted_barcodes_in_mbid_order() {
    let backend = RecordingBackend::answering(&json!({}));
    let client = MusicBrainzClient::with_backend(
        config().with_credentials(Credentials::new("editor", "secret")),
        backend.clone(),
    );
    let barcodes = BTreeMap::from([
        ("b".to_string(), "2".to_string()),
        ("a".to_string(), "1".to_string()),
    ]);
    client.submit_barcodes(&barcodes).await.unwrap();
    let seen = backend.seen.lock().unwrap();
    let body = seen[0].body.as_deref().unwrap();
    let first = body.find("id=\"a\"").unwrap();
    let second = body.find("id=\"b\"").unwrap();
    assert!(first < second);
}
