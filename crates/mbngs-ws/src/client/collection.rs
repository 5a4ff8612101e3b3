//! The authenticated user's collections.

use std::collections::BTreeMap;

use crate::config::WsFormat;
use crate::entity::EntityType;
use crate::error::MbResult;
use crate::http::{HttpBackend, Method};
use crate::models::{Artist, Collection, Event, Page, Place, Recording, Release, Work};
use crate::parsing::{parse_json, parse_page};
use crate::query::{BrowseLink, BrowseOptions};
use crate::url::collection_releases_path;
use crate::validation::AuthRequirement;

use super::MusicBrainzClient;

/// Releases per add/remove request; more would exceed the URI length limit.
pub const MAX_RELEASES_PER_REQUEST: usize = 400;

impl<B: HttpBackend> MusicBrainzClient<B> {
    /// Collections of the authenticated user.
    pub async fn get_collections(
        &self,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> MbResult<Page<Collection>> {
        let mut params = BTreeMap::new();
        if let Some(limit) = limit.filter(|l| *l > 0) {
            params.insert("limit".to_string(), limit.to_string());
        }
        if let Some(offset) = offset.filter(|o| *o > 0) {
            params.insert("offset".to_string(), offset.to_string());
        }
        let response = self
            .do_query(EntityType::Collection, "", &[], params, WsFormat::Json)
            .await?;
        parse_page(EntityType::Collection, parse_json(&response.body)?)
    }

    /// Artists in a collection, read through the browse endpoint;
    /// `options` includes and paging apply.
    pub async fn get_artists_in_collection(
        &self,
        collection: &str,
        options: &BrowseOptions,
    ) -> MbResult<Page<Artist>> {
        self.browse_artists(&BrowseLink::Collection(collection.to_string()), options)
            .await
    }

    /// Events in a collection, read through the browse endpoint;
    /// `options` includes and paging apply.
    pub async fn get_events_in_collection(
        &self,
        collection: &str,
        options: &BrowseOptions,
    ) -> MbResult<Page<Event>> {
        self.browse_events(&BrowseLink::Collection(collection.to_string()), options)
            .await
    }

    /// Places in a collection, read through the browse endpoint;
    /// `options` includes and paging apply.
    pub async fn get_places_in_collection(
        &self,
        collection: &str,
        options: &BrowseOptions,
    ) -> MbResult<Page<Place>> {
        self.browse_places(&BrowseLink::Collection(collection.to_string()), options)
            .await
    }

    /// Recordings in a collection, read through the browse endpoint;
    /// `options` includes and paging apply.
    pub async fn get_recordings_in_collection(
        &self,
        collection: &str,
        options: &BrowseOptions,
    ) -> MbResult<Page<Recording>> {
        self.browse_recordings(&BrowseLink::Collection(collection.to_string()), options)
            .await
    }

    /// Releases in a collection, read through the browse endpoint;
    /// `options` includes, paging and release status/type filters apply.
    pub async fn get_releases_in_collection(
        &self,
        collection: &str,
        options: &BrowseOptions,
    ) -> MbResult<Page<Release>> {
        self.browse_releases(&BrowseLink::Collection(collection.to_string()), options)
            .await
    }

    /// Works in a collection, read through the browse endpoint;
    /// `options` includes and paging apply.
    pub async fn get_works_in_collection(
        &self,
        collection: &str,
        options: &BrowseOptions,
    ) -> MbResult<Page<Work>> {
        self.browse_works(&BrowseLink::Collection(collection.to_string()), options)
            .await
    }

    /// Add releases to a collection. Nothing is sent for an empty list.
    pub async fn add_releases_to_collection<S: AsRef<str> + Sync>(
        &self,
        collection: &str,
        releases: &[S],
    ) -> MbResult<()> {
        self.edit_collection(Method::Put, collection, releases).await
    }

    /// Remove releases from a collection. Nothing is sent for an empty list.
    pub async fn remove_releases_from_collection<S: AsRef<str> + Sync>(
        &self,
        collection: &str,
        releases: &[S],
    ) -> MbResult<()> {
        self.edit_collection(Method::Delete, collection, releases)
            .await
    }

    async fn edit_collection<S: AsRef<str> + Sync>(
        &self,
        method: Method,
        collection: &str,
        releases: &[S],
    ) -> MbResult<()> {
        for chunk in releases.chunks(MAX_RELEASES_PER_REQUEST) {
            let path = collection_releases_path(collection, chunk);
            self.request(
                method,
                &path,
                BTreeMap::new(),
                AuthRequirement::Required,
                true,
                None,
            )
            .await?;
        }
        Ok(())
    }
}
