use serde::{Deserialize, Serialize};

use super::{Alias, ArtistCredit, Genre, Rating, Relation, Release, Tag};

/// A distinct audio recording, possibly appearing on many releases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Recording {
    pub id: String,
    pub title: String,
    pub disambiguation: Option<String>,
    /// Length in milliseconds
    pub length: Option<u64>,
    pub video: Option<bool>,
    pub first_release_date: Option<String>,
    pub artist_credit: Vec<ArtistCredit>,
    pub isrcs: Vec<String>,
    pub releases: Vec<Release>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

/// Recordings carrying one ISRC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IsrcResult {
    pub isrc: String,
    pub recordings: Vec<Recording>,
}
