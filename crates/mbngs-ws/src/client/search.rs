//! Searches against the MusicBrainz search server.

use serde::de::DeserializeOwned;

use crate::config::WsFormat;
use crate::entity::EntityType;
use crate::error::MbResult;
use crate::http::HttpBackend;
use crate::models::{
    Annotation, Area, Artist, Event, Instrument, Label, Page, Place, Recording, Release,
    ReleaseGroup, Series, Work,
};
use crate::parsing::{parse_json, parse_page};
use crate::query::SearchQuery;

use super::MusicBrainzClient;

impl<B: HttpBackend> MusicBrainzClient<B> {
    /// Search `entity` and parse one page of hits.
    pub async fn search<T: DeserializeOwned>(
        &self,
        entity: EntityType,
        query: &SearchQuery,
    ) -> MbResult<Page<T>> {
        let params = query.params(entity)?;
        let response = self
            .do_query(entity, "", &[], params, WsFormat::Json)
            .await?;
        parse_page(entity, parse_json(&response.body)?)
    }

    pub async fn search_annotations(&self, query: &SearchQuery) -> MbResult<Page<Annotation>> {
        self.search(EntityType::Annotation, query).await
    }

    pub async fn search_areas(&self, query: &SearchQuery) -> MbResult<Page<Area>> {
        self.search(EntityType::Area, query).await
    }

    pub async fn search_artists(&self, query: &SearchQuery) -> MbResult<Page<Artist>> {
        self.search(EntityType::Artist, query).await
    }

    pub async fn search_events(&self, query: &SearchQuery) -> MbResult<Page<Event>> {
        self.search(EntityType::Event, query).await
    }

    pub async fn search_instruments(&self, query: &SearchQuery) -> MbResult<Page<Instrument>> {
        self.search(EntityType::Instrument, query).await
    }

    pub async fn search_labels(&self, query: &SearchQuery) -> MbResult<Page<Label>> {
        self.search(EntityType::Label, query).await
    }

    pub async fn search_places(&self, query: &SearchQuery) -> MbResult<Page<Place>> {
        self.search(EntityType::Place, query).await
    }

    pub async fn search_recordings(&self, query: &SearchQuery) -> MbResult<Page<Recording>> {
        self.search(EntityType::Recording, query).await
    }

    pub async fn search_releases(&self, query: &SearchQuery) -> MbResult<Page<Release>> {
        self.search(EntityType::Release, query).await
    }

    pub async fn search_release_groups(
        &self,
        query: &SearchQuery,
    ) -> MbResult<Page<ReleaseGroup>> {
        self.search(EntityType::ReleaseGroup, query).await
    }

    pub async fn search_series(&self, query: &SearchQuery) -> MbResult<Page<Series>> {
        self.search(EntityType::Series, query).await
    }

    pub async fn search_works(&self, query: &SearchQuery) -> MbResult<Page<Work>> {
        self.search(EntityType::Work, query).await
    }
}
