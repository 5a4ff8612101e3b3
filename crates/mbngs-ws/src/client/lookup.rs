//! Lookups of single entities and identifier lookups.

use std::collections::BTreeMap;

use crate::config::WsFormat;
use crate::entity::EntityType;
use crate::error::MbResult;
use crate::http::HttpBackend;
use crate::models::{
    Area, Artist, DiscIdResult, Event, Instrument, IsrcResult, Label, Page, Place, Recording,
    Release, ReleaseGroup, Series, Url, Work,
};
use crate::parsing::{parse_discid_result, parse_json, parse_page};
use crate::query::{DiscIdOptions, LookupOptions};
use crate::validation::check_filter_and_make_params;

use super::MusicBrainzClient;

impl<B: HttpBackend> MusicBrainzClient<B> {
    pub async fn get_area_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Area> {
        self.lookup_entity(EntityType::Area, id, options).await
    }

    pub async fn get_artist_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Artist> {
        self.lookup_entity(EntityType::Artist, id, options).await
    }

    pub async fn get_instrument_by_id(
        &self,
        id: &str,
        options: &LookupOptions,
    ) -> MbResult<Instrument> {
        self.lookup_entity(EntityType::Instrument, id, options)
            .await
    }

    pub async fn get_label_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Label> {
        self.lookup_entity(EntityType::Label, id, options).await
    }

    pub async fn get_place_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Place> {
        self.lookup_entity(EntityType::Place, id, options).await
    }

    pub async fn get_event_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Event> {
        self.lookup_entity(EntityType::Event, id, options).await
    }

    pub async fn get_recording_by_id(
        &self,
        id: &str,
        options: &LookupOptions,
    ) -> MbResult<Recording> {
        self.lookup_entity(EntityType::Recording, id, options)
            .await
    }

    pub async fn get_release_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Release> {
        self.lookup_entity(EntityType::Release, id, options).await
    }

    pub async fn get_release_group_by_id(
        &self,
        id: &str,
        options: &LookupOptions,
    ) -> MbResult<ReleaseGroup> {
        self.lookup_entity(EntityType::ReleaseGroup, id, options)
            .await
    }

    /// Series lookups take no release filters; any given are ignored.
    pub async fn get_series_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Series> {
        self.lookup_entity(EntityType::Series, id, &options.without_filters())
            .await
    }

    /// Work lookups take no release filters; any given are ignored.
    pub async fn get_work_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Work> {
        self.lookup_entity(EntityType::Work, id, &options.without_filters())
            .await
    }

    /// URL lookups take no release filters; any given are ignored.
    pub async fn get_url_by_id(&self, id: &str, options: &LookupOptions) -> MbResult<Url> {
        self.lookup_entity(EntityType::Url, id, &options.without_filters())
            .await
    }

    // ========================================================================
    // Identifier lookups
    // ========================================================================

    /// Look up a disc id.
    ///
    /// With a TOC, an unknown disc id falls back to fuzzy matching and the
    /// result is a release list. CD stubs are returned unless disabled.
    pub async fn get_releases_by_discid(
        &self,
        id: &str,
        options: &DiscIdOptions,
    ) -> MbResult<DiscIdResult> {
        let no_filters: &[String] = &[];
        let mut params =
            check_filter_and_make_params(EntityType::DiscId, &options.includes, no_filters, no_filters)?;
        params.extend(options.params());
        let response = self
            .do_query(EntityType::DiscId, id, &options.includes, params, WsFormat::Json)
            .await?;
        parse_discid_result(parse_json(&response.body)?)
    }

    /// Recordings carrying an ISRC.
    pub async fn get_recordings_by_isrc(
        &self,
        isrc: &str,
        options: &LookupOptions,
    ) -> MbResult<IsrcResult> {
        self.lookup_entity(EntityType::Isrc, isrc, options).await
    }

    /// Works carrying an ISWC.
    pub async fn get_works_by_iswc(
        &self,
        iswc: &str,
        options: &LookupOptions,
    ) -> MbResult<Page<Work>> {
        let options = options.without_filters();
        let response = self
            .do_query(
                EntityType::Iswc,
                iswc,
                &options.includes,
                BTreeMap::new(),
                WsFormat::Json,
            )
            .await?;
        parse_page(EntityType::Work, parse_json(&response.body)?)
    }

    // ========================================================================
    // Untyped access
    // ========================================================================

    /// Any lookup as untyped JSON.
    ///
    /// An empty `id` queries the entity's root (e.g. the user's collections).
    pub async fn lookup_json(
        &self,
        entity: EntityType,
        id: &str,
        options: &LookupOptions,
    ) -> MbResult<serde_json::Value> {
        self.lookup_entity(entity, id, options).await
    }

    /// Any lookup as the body text in the requested format.
    pub async fn fetch_raw(
        &self,
        entity: EntityType,
        id: &str,
        options: &LookupOptions,
        format: WsFormat,
    ) -> MbResult<String> {
        let params = check_filter_and_make_params(
            entity,
            &options.includes,
            &options.release_status,
            &options.release_type,
        )?;
        let response = self
            .do_query(entity, id, &options.includes, params, format)
            .await?;
        Ok(response.text())
    }
}
