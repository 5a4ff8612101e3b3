//! Disc id lookup results.

use serde::{Deserialize, Serialize};

use super::{Page, Release};

/// A disc id known to MusicBrainz, with the releases it belongs to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Disc {
    pub id: String,
    pub sectors: Option<u64>,
    pub offset_count: Option<u32>,
    /// Start sector of every track
    pub offsets: Vec<u64>,
    pub releases: Vec<Release>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CdStubTrack {
    pub title: String,
    pub artist: Option<String>,
    pub length: Option<u64>,
}

/// An unreviewed disc listing submitted by a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CdStub {
    pub id: String,
    pub title: String,
    pub artist: Option<String>,
    pub barcode: Option<String>,
    pub disambiguation: Option<String>,
    pub track_count: Option<u32>,
    pub tracks: Vec<CdStubTrack>,
}

/// What a disc id lookup found.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DiscIdResult {
    /// The disc id is known.
    Disc(Disc),
    /// Only a CD stub matched.
    CdStub(CdStub),
    /// No disc id matched but the TOC fuzzy-matched these releases.
    Releases(Page<Release>),
}

impl DiscIdResult {
    /// Releases found, whichever way the lookup matched.
    pub fn releases(&self) -> &[Release] {
        match self {
            Self::Disc(disc) => &disc.releases,
            Self::Releases(page) => &page.items,
            Self::CdStub(_) => &[],
        }
    }
}
