//! Web service resources.

use std::fmt;

/// A resource of the `/ws/2` web service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    Annotation,
    Area,
    Artist,
    Collection,
    DiscId,
    Event,
    Instrument,
    Isrc,
    Iswc,
    Label,
    Place,
    Recording,
    Release,
    ReleaseGroup,
    Series,
    Url,
    Work,
}

impl EntityType {
    /// All resources, in path order.
    pub const ALL: [Self; 17] = [
        Self::Annotation,
        Self::Area,
        Self::Artist,
        Self::Collection,
        Self::DiscId,
        Self::Event,
        Self::Instrument,
        Self::Isrc,
        Self::Iswc,
        Self::Label,
        Self::Place,
        Self::Recording,
        Self::Release,
        Self::ReleaseGroup,
        Self::Series,
        Self::Url,
        Self::Work,
    ];

    /// Path segment under `/ws/2/`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annotation => "annotation",
            Self::Area => "area",
            Self::Artist => "artist",
            Self::Collection => "collection",
            Self::DiscId => "discid",
            Self::Event => "event",
            Self::Instrument => "instrument",
            Self::Isrc => "isrc",
            Self::Iswc => "iswc",
            Self::Label => "label",
            Self::Place => "place",
            Self::Recording => "recording",
            Self::Release => "release",
            Self::ReleaseGroup => "release-group",
            Self::Series => "series",
            Self::Url => "url",
            Self::Work => "work",
        }
    }

    /// Key holding the item array in JSON list responses.
    pub const fn list_key(self) -> &'static str {
        match self {
            Self::Annotation => "annotations",
            Self::Area => "areas",
            Self::Artist => "artists",
            Self::Collection => "collections",
            Self::DiscId => "discids",
            Self::Event => "events",
            Self::Instrument => "instruments",
            Self::Isrc => "isrcs",
            Self::Iswc => "iswcs",
            Self::Label => "labels",
            Self::Place => "places",
            Self::Recording => "recordings",
            Self::Release => "releases",
            Self::ReleaseGroup => "release-groups",
            Self::Series => "series",
            Self::Url => "urls",
            Self::Work => "works",
        }
    }

    /// Parse a path segment (`release-group`, `release_group`, ...).
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|e| e.as_str() == name)
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
