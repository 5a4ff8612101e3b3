//! Cover Art Archive access.
//!
//! The archive lives on its own host but shares the client's user agent and
//! rate limiter.

use std::fmt;

use crate::error::{MbError, MbResult};
use crate::http::{HttpBackend, WsRequest, WsResponse};
use crate::models::{ImageList, ImageSize};
use crate::parsing::parse_json;
use crate::url::build_cover_art_url;

use super::MusicBrainzClient;

/// Entities the archive holds images for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CoverArtEntity {
    #[default]
    Release,
    ReleaseGroup,
}

impl CoverArtEntity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
        }
    }
}

impl fmt::Display for CoverArtEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<B: HttpBackend> MusicBrainzClient<B> {
    async fn cover_art_request(
        &self,
        entity: CoverArtEntity,
        mbid: &str,
        cover: Option<&str>,
        size: ImageSize,
    ) -> MbResult<WsResponse> {
        let user_agent = self
            .config
            .user_agent
            .as_ref()
            .ok_or(MbError::MissingUserAgent)?;
        let url = build_cover_art_url(&self.config, entity.as_str(), mbid, cover, size)?;
        let request = WsRequest::get(url, user_agent.header_value());

        self.limiter.until_ready().await;
        tracing::debug!(url = %request.url, "Cover Art Archive request");
        self.backend.execute(&request).await
    }

    /// All images of a release.
    pub async fn get_image_list(&self, release: &str) -> MbResult<ImageList> {
        let response = self
            .cover_art_request(CoverArtEntity::Release, release, None, ImageSize::Original)
            .await?;
        parse_json(&response.body)
    }

    /// Images of a release group; in practice its chosen front cover.
    pub async fn get_release_group_image_list(&self, release_group: &str) -> MbResult<ImageList> {
        let response = self
            .cover_art_request(
                CoverArtEntity::ReleaseGroup,
                release_group,
                None,
                ImageSize::Original,
            )
            .await?;
        parse_json(&response.body)
    }

    /// Download one image.
    ///
    /// `cover` is `front`, `back` or an image id from the listing.
    pub async fn get_image(
        &self,
        entity: CoverArtEntity,
        mbid: &str,
        cover: &str,
        size: ImageSize,
    ) -> MbResult<Vec<u8>> {
        let response = self
            .cover_art_request(entity, mbid, Some(cover), size)
            .await?;
        Ok(response.body)
    }

    pub async fn get_image_front(&self, release: &str, size: ImageSize) -> MbResult<Vec<u8>> {
        self.get_image(CoverArtEntity::Release, release, "front", size)
            .await
    }

    pub async fn get_image_back(&self, release: &str, size: ImageSize) -> MbResult<Vec<u8>> {
        self.get_image(CoverArtEntity::Release, release, "back", size)
            .await
    }

    pub async fn get_release_group_image_front(
        &self,
        release_group: &str,
        size: ImageSize,
    ) -> MbResult<Vec<u8>> {
        self.get_image(CoverArtEntity::ReleaseGroup, release_group, "front", size)
            .await
    }
}
