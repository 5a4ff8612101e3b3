//! Browsing: listing entities linked to another entity.

use serde::de::DeserializeOwned;

use crate::config::WsFormat;
use crate::entity::EntityType;
use crate::error::MbResult;
use crate::http::HttpBackend;
use crate::models::{Artist, Event, Label, Page, Place, Recording, Release, ReleaseGroup, Url, Work};
use crate::parsing::{parse_json, parse_page};
use crate::query::{BrowseLink, BrowseOptions};
use crate::validation::{
    AuthRequirement, auth_requirement, check_filter_and_make_params, check_includes_impl,
    valid_browse_includes,
};

use super::MusicBrainzClient;

/// Page size used when fetching every page.
pub const BROWSE_PAGE_SIZE: u32 = 100;

/// Upper bound on pages fetched by [`MusicBrainzClient::browse_all`].
pub const MAX_BROWSE_PAGES: u32 = 100;

impl<B: HttpBackend> MusicBrainzClient<B> {
    /// Browse `entity` through `link` and parse one page.
    pub async fn browse<T: DeserializeOwned>(
        &self,
        entity: EntityType,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<T>> {
        link.check(entity)?;
        let includes = &options.lookup.includes;
        let valid = valid_browse_includes(entity).unwrap_or_default();
        check_includes_impl(entity, includes, &valid)?;

        let mut params = check_filter_and_make_params(
            entity,
            includes,
            &options.lookup.release_status,
            &options.lookup.release_type,
        )?;
        params.insert(link.key().to_string(), link.value().to_string());
        if let Some(limit) = options.limit.filter(|l| *l > 0) {
            params.insert("limit".to_string(), limit.to_string());
        }
        if let Some(offset) = options.offset.filter(|o| *o > 0) {
            params.insert("offset".to_string(), offset.to_string());
        }

        // Private collections are readable by their owner only
        let auth = match (auth_requirement(entity, "", includes), link) {
            (AuthRequirement::None, BrowseLink::Collection(_)) => AuthRequirement::IfSet,
            (auth, _) => auth,
        };

        let response = self
            .get_with_auth(entity, "", includes, params, WsFormat::Json, auth)
            .await?;
        parse_page(entity, parse_json(&response.body)?)
    }

    /// Follow offsets until every linked entity is fetched.
    ///
    /// Starts at `options.offset` and stops after [`MAX_BROWSE_PAGES`]
    /// pages. The page size is 100 unless `options.limit` is set.
    pub async fn browse_all<T: DeserializeOwned>(
        &self,
        entity: EntityType,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Vec<T>> {
        let mut options = options.clone();
        options.limit = Some(options.limit.unwrap_or(BROWSE_PAGE_SIZE));
        let mut items = Vec::new();

        for page_number in 0..MAX_BROWSE_PAGES {
            let page: Page<T> = self.browse(entity, link, &options).await?;
            let next = page.next_offset();
            tracing::debug!(%entity, %link, page = page_number, count = page.count, "browsed page");
            items.extend(page.items);
            match next {
                Some(offset) => options.offset = Some(offset),
                None => return Ok(items),
            }
        }

        tracing::warn!(%entity, %link, fetched = items.len(), "stopped browsing at page limit");
        Ok(items)
    }

    /// Artists linked to a recording, release, release group, work or collection.
    pub async fn browse_artists(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Artist>> {
        self.browse(EntityType::Artist, link, options).await
    }

    /// Events linked to an area, artist, place or collection.
    pub async fn browse_events(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Event>> {
        self.browse(EntityType::Event, link, options).await
    }

    pub async fn browse_labels(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Label>> {
        self.browse(EntityType::Label, link, options).await
    }

    pub async fn browse_places(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Place>> {
        self.browse(EntityType::Place, link, options).await
    }

    pub async fn browse_recordings(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Recording>> {
        self.browse(EntityType::Recording, link, options).await
    }

    /// Releases linked to an artist, track artist, label, recording,
    /// release group or collection.
    pub async fn browse_releases(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Release>> {
        self.browse(EntityType::Release, link, options).await
    }

    pub async fn browse_release_groups(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<ReleaseGroup>> {
        self.browse(EntityType::ReleaseGroup, link, options).await
    }

    /// URL entities for a resource string.
    pub async fn browse_urls(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Url>> {
        self.browse(EntityType::Url, link, options).await
    }

    pub async fn browse_works(
        &self,
        link: &BrowseLink,
        options: &BrowseOptions,
    ) -> MbResult<Page<Work>> {
        self.browse(EntityType::Work, link, options).await
    }
}
