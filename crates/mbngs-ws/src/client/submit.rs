//! Submissions: barcodes, ISRCs, tags and ratings.
//!
//! All of them need credentials and send the `client=` parameter. The
//! server's reply is returned as text.

use std::collections::BTreeMap;

use crate::error::MbResult;
use crate::http::{HttpBackend, Method};
use crate::submission::{RatingSubmission, TagSubmission, barcode_request, isrc_request};
use crate::validation::AuthRequirement;

use super::MusicBrainzClient;

impl<B: HttpBackend> MusicBrainzClient<B> {
    /// Submit barcodes keyed by release MBID.
    pub async fn submit_barcodes(
        &self,
        release_barcodes: &BTreeMap<String, String>,
    ) -> MbResult<String> {
        let body = barcode_request(release_barcodes)?;
        self.post("release", body).await
    }

    /// Submit ISRCs keyed by recording MBID.
    pub async fn submit_isrcs(
        &self,
        recording_isrcs: &BTreeMap<String, Vec<String>>,
    ) -> MbResult<String> {
        let body = isrc_request(recording_isrcs)?;
        self.post("recording", body).await
    }

    pub async fn submit_tags(&self, tags: &TagSubmission) -> MbResult<String> {
        let body = tags.to_xml()?;
        self.post("tag", body).await
    }

    pub async fn submit_ratings(&self, ratings: &RatingSubmission) -> MbResult<String> {
        let body = ratings.to_xml()?;
        self.post("rating", body).await
    }

    async fn post(&self, path: &str, body: String) -> MbResult<String> {
        let response = self
            .request(
                Method::Post,
                path,
                BTreeMap::new(),
                AuthRequirement::Required,
                true,
                Some(body),
            )
            .await?;
        Ok(response.text())
    }
}

#[cfg(test)]
mod tests {
    use super::super::tests::test_config;
    use super::*;
    use crate::config::Credentials;
    use crate::entity::EntityType;
    use crate::error::MbError;
    use crate::http::testing::{CannedResponse, FakeBackend};

    const OK: &[u8] = b"<?xml version=\"1.0\"?><metadata><message><text>OK</text></message></metadata>";

    fn authenticated_client(backend: FakeBackend) -> MusicBrainzClient<FakeBackend> {
        let config = test_config().with_credentials(Credentials::new("user", "pass"));
        MusicBrainzClient::with_backend(config, backend)
    }

    #[tokio::test]
    async fn test_submit_tags() {
        let backend = FakeBackend::new().with_response("tag?", CannedResponse::Body(OK.to_vec()));
        let requests = backend.requests();
        let client = authenticated_client(backend);
        let reply = client
            .submit_tags(&TagSubmission::new().tags(EntityType::Artist, "a1", ["grunge", "rock"]))
            .await
            .unwrap();
        assert!(reply.contains("OK"));

        let seen = requests.lock().unwrap();
        assert_eq!(seen[0].method, Method::Post);
        assert_eq!(
            seen[0].url.as_str(),
            "https://musicbrainz.org/ws/2/tag?client=test-app-0.1"
        );
        let body = seen[0].body.as_deref().unwrap();
        assert!(body.contains("<artist id=\"a1\">"));
        assert!(body.contains("<name>grunge</name>"));
    }

    #[tokio::test]
    async fn test_submit_ratings() {
        let backend = FakeBackend::new().with_default(CannedResponse::Body(OK.to_vec()));
        let requests = backend.requests();
        let client = authenticated_client(backend);
        client
            .submit_ratings(&RatingSubmission::new().rating(EntityType::Recording, "r1", 80))
            .await
            .unwrap();
        let seen = requests.lock().unwrap();
        assert!(seen[0].url.path().ends_with("/rating"));
        assert!(seen[0].body.as_deref().unwrap().contains("<user-rating>80</user-rating>"));
    }

    #[tokio::test]
    async fn test_invalid_rating_not_sent() {
        let backend = FakeBackend::new();
        let requests = backend.requests();
        let client = authenticated_client(backend);
        let err = client
            .submit_ratings(&RatingSubmission::new().rating(EntityType::Artist, "a1", 101))
            .await
            .unwrap_err();
        assert!(matches!(err, MbError::InvalidRating { rating: 101, .. }));
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_barcodes_and_isrcs() {
        let backend = FakeBackend::new().with_default(CannedResponse::Body(OK.to_vec()));
        let requests = backend.requests();
        let client = authenticated_client(backend);

        let barcodes = BTreeMap::from([("r1".to_string(), "4006381333931".to_string())]);
        client.submit_barcodes(&barcodes).await.unwrap();
        let isrcs = BTreeMap::from([("rec1".to_string(), vec!["USSM18900468".to_string()])]);
        client.submit_isrcs(&isrcs).await.unwrap();

        let seen = requests.lock().unwrap();
        assert!(seen[0].url.path().ends_with("/release"));
        assert!(seen[0].body.as_deref().unwrap().contains("<barcode>4006381333931</barcode>"));
        assert!(seen[1].url.path().ends_with("/recording"));
        assert!(seen[1].body.as_deref().unwrap().contains("<isrc id=\"USSM18900468\"/>"));
        assert!(seen.iter().all(|r| r.is_authenticated()));
    }

    #[tokio::test]
    async fn test_submission_requires_credentials() {
        let client = MusicBrainzClient::with_backend(test_config(), FakeBackend::new());
        let err = client
            .submit_tags(&TagSubmission::new().tags(EntityType::Label, "l1", ["indie"]))
            .await
            .unwrap_err();
        assert!(matches!(err, MbError::CredentialsRequired));
    }
}
