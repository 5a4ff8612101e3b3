//! Artists and artist credits.

use serde::{Deserialize, Serialize};

use super::{
    Alias, Area, Genre, LifeSpan, Rating, Recording, Relation, Release, ReleaseGroup, Tag, Work,
};

/// A musician, group, orchestra or other music professional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub sort_name: Option<String>,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub artist_type: Option<String>,
    pub type_id: Option<String>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub area: Option<Area>,
    pub begin_area: Option<Area>,
    pub end_area: Option<Area>,
    pub life_span: Option<LifeSpan>,
    pub ipis: Vec<String>,
    pub isnis: Vec<String>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub recordings: Vec<Recording>,
    pub releases: Vec<Release>,
    pub release_groups: Vec<ReleaseGroup>,
    pub works: Vec<Work>,
    /// Search relevance (0-100), only set on search results
    pub score: Option<u32>,
}

/// One name in an artist credit, e.g. "Simon" + " & " in "Simon & Garfunkel".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtistCredit {
    /// Name as credited
    pub name: String,
    /// Text joining this name to the next one
    pub joinphrase: String,
    pub artist: Artist,
}

/// The credit as it is printed: every name followed by its join phrase.
pub fn artist_credit_phrase(credits: &[ArtistCredit]) -> String {
    credits
        .iter()
        .map(|c| {
            let name = if c.name.is_empty() {
                c.artist.name.as_str()
            } else {
                c.name.as_str()
            };
            format!("{name}{}", c.joinphrase)
        })
        .collect()
}
