//! Request options for lookups, searches and browses.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::entity::EntityType;
use crate::error::{MbError, MbResult};
use crate::validation::valid_search_fields;

/// Characters with a meaning in Lucene query syntax.
static LUCENE_SPECIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([+\-&|!(){}\[\]\^"~*?:\\/])"#).expect("lucene pattern is valid")
});

/// Backslash-escape Lucene special characters.
pub fn escape_lucene(value: &str) -> String {
    LUCENE_SPECIAL.replace_all(value, r"\$1").into_owned()
}

// ============================================================================
// Lookup
// ============================================================================

/// Includes and release filters for a lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOptions {
    pub includes: Vec<String>,
    pub release_status: Vec<String>,
    pub release_type: Vec<String>,
}

impl LookupOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one include (`aliases`, `url-rels`, ...).
    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    /// Add several includes.
    #[must_use]
    pub fn includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(includes.into_iter().map(Into::into));
        self
    }

    /// Only list releases with this status.
    #[must_use]
    pub fn release_status(mut self, status: impl Into<String>) -> Self {
        self.release_status.push(status.into());
        self
    }

    /// Only list releases (or release groups) of this type.
    #[must_use]
    pub fn release_type(mut self, release_type: impl Into<String>) -> Self {
        self.release_type.push(release_type.into());
        self
    }

    pub(crate) fn without_filters(&self) -> Self {
        Self {
            includes: self.includes.clone(),
            ..Self::default()
        }
    }
}

// ============================================================================
// Search
// ============================================================================

/// A full-text search against the MusicBrainz search server.
///
/// Free text is passed through as a Lucene query when no fields are given.
/// With fields, every term is escaped; strict searches quote the terms and
/// require all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: String,
    pub fields: Vec<(String, String)>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub strict: bool,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Add a `field:value` term. Field order is kept.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((field.into(), value.into()));
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    #[must_use]
    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Build the Lucene query string for a search of `entity`.
    pub fn lucene_query(&self, entity: EntityType) -> MbResult<String> {
        let mut parts = Vec::new();

        if !self.query.is_empty() {
            if self.fields.is_empty() {
                parts.push(self.query.clone());
            } else {
                let clean = escape_lucene(&self.query);
                if self.strict {
                    parts.push(format!("\"{clean}\""));
                } else {
                    parts.push(clean.to_lowercase());
                }
            }
        }

        let valid = valid_search_fields(entity).unwrap_or_default();
        for (key, value) in &self.fields {
            if !valid.contains(&key.as_str()) {
                return Err(MbError::InvalidSearchField {
                    entity: entity.to_string(),
                    field: key.clone(),
                });
            }
            let value = escape_lucene(value);
            if value.is_empty() {
                continue;
            }
            if self.strict {
                parts.push(format!("{key}:\"{value}\""));
            } else {
                // lower-case so "and"/"or" in values aren't read as operators
                parts.push(format!("{key}:({})", value.to_lowercase()));
            }
        }

        let separator = if self.strict { " AND " } else { " " };
        let full = parts.join(separator).trim().to_string();
        if full.is_empty() {
            return Err(MbError::EmptyQuery);
        }
        Ok(full)
    }

    /// Query parameters for a search of `entity`.
    pub fn params(&self, entity: EntityType) -> MbResult<BTreeMap<String, String>> {
        let mut params = BTreeMap::new();
        params.insert("query".to_string(), self.lucene_query(entity)?);
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            params.insert("limit".to_string(), limit.to_string());
        }
        if let Some(offset) = self.offset.filter(|o| *o > 0) {
            params.insert("offset".to_string(), offset.to_string());
        }
        Ok(params)
    }
}

// ============================================================================
// Browse
// ============================================================================

/// The entity a browse request is anchored on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseLink {
    Area(String),
    Artist(String),
    Collection(String),
    Label(String),
    Place(String),
    Recording(String),
    Release(String),
    ReleaseGroup(String),
    /// Releases with at least one track credited to this artist.
    TrackArtist(String),
    Work(String),
    /// A URL string, for browsing URL entities.
    Resource(String),
}

impl BrowseLink {
    /// Query parameter name.
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Area(_) => "area",
            Self::Artist(_) => "artist",
            Self::Collection(_) => "collection",
            Self::Label(_) => "label",
            Self::Place(_) => "place",
            Self::Recording(_) => "recording",
            Self::Release(_) => "release",
            Self::ReleaseGroup(_) => "release-group",
            Self::TrackArtist(_) => "track_artist",
            Self::Work(_) => "work",
            Self::Resource(_) => "resource",
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Self::Area(v)
            | Self::Artist(v)
            | Self::Collection(v)
            | Self::Label(v)
            | Self::Place(v)
            | Self::Recording(v)
            | Self::Release(v)
            | Self::ReleaseGroup(v)
            | Self::TrackArtist(v)
            | Self::Work(v)
            | Self::Resource(v) => v,
        }
    }

    /// Parse `key=value`, as typed on a command line.
    pub fn parse(spec: &str) -> Option<Self> {
        let (key, value) = spec.split_once('=')?;
        let value = value.trim().to_string();
        if value.is_empty() {
            return None;
        }
        let link = match key.trim().replace('_', "-").as_str() {
            "area" => Self::Area(value),
            "artist" => Self::Artist(value),
            "collection" => Self::Collection(value),
            "label" => Self::Label(value),
            "place" => Self::Place(value),
            "recording" => Self::Recording(value),
            "release" => Self::Release(value),
            "release-group" => Self::ReleaseGroup(value),
            "track-artist" => Self::TrackArtist(value),
            "work" => Self::Work(value),
            "resource" => Self::Resource(value),
            _ => return None,
        };
        Some(link)
    }

    /// Check that `entity` can be browsed through this link.
    pub fn check(&self, entity: EntityType) -> MbResult<()> {
        let allowed: &[&str] = match entity {
            EntityType::Artist => &["recording", "release", "release-group", "work", "collection"],
            EntityType::Event => &["area", "artist", "place", "collection"],
            EntityType::Label => &["release", "collection"],
            EntityType::Place => &["area", "collection"],
            EntityType::Recording => &["artist", "release", "collection"],
            EntityType::Release => &[
                "artist",
                "track_artist",
                "label",
                "recording",
                "release-group",
                "collection",
            ],
            EntityType::ReleaseGroup => &["artist", "release", "collection"],
            EntityType::Url => &["resource"],
            EntityType::Work => &["artist", "collection"],
            _ => &[],
        };
        if allowed.contains(&self.key()) {
            Ok(())
        } else {
            Err(MbError::InvalidBrowseLink {
                entity: entity.to_string(),
                link: self.key().to_string(),
            })
        }
    }
}

impl fmt::Display for BrowseLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key(), self.value())
    }
}

/// Includes, paging and release filters for a browse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseOptions {
    pub lookup: LookupOptions,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl BrowseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.lookup = self.lookup.include(include);
        self
    }

    #[must_use]
    pub fn includes<I, S>(mut self, includes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lookup = self.lookup.includes(includes);
        self
    }

    #[must_use]
    pub fn release_status(mut self, status: impl Into<String>) -> Self {
        self.lookup = self.lookup.release_status(status);
        self
    }

    #[must_use]
    pub fn release_type(mut self, release_type: impl Into<String>) -> Self {
        self.lookup = self.lookup.release_type(release_type);
        self
    }

    /// Results per page (the service caps this at 100).
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

// ============================================================================
// Disc ids
// ============================================================================

/// Options for a disc id lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscIdOptions {
    pub includes: Vec<String>,
    /// Table of contents for fuzzy matching when the disc id is unknown
    pub toc: Option<String>,
    /// Whether CD stubs may be returned
    pub cdstubs: bool,
    /// Medium format to match (`all` for every format); the server's
    /// default is CD only
    pub media_format: Option<String>,
}

impl Default for DiscIdOptions {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            toc: None,
            cdstubs: true,
            media_format: None,
        }
    }
}

impl DiscIdOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.includes.push(include.into());
        self
    }

    #[must_use]
    pub fn toc(mut self, toc: impl Into<String>) -> Self {
        self.toc = Some(toc.into());
        self
    }

    #[must_use]
    pub const fn cdstubs(mut self, cdstubs: bool) -> Self {
        self.cdstubs = cdstubs;
        self
    }

    #[must_use]
    pub fn media_format(mut self, media_format: impl Into<String>) -> Self {
        self.media_format = Some(media_format.into());
        self
    }

    /// Query parameters besides `inc`.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let Some(toc) = self.toc.as_deref().filter(|t| !t.is_empty()) {
            params.insert("toc".to_string(), toc.to_string());
        }
        if !self.cdstubs {
            params.insert("cdstubs".to_string(), "no".to_string());
        }
        if let Some(format) = self.media_format.as_deref().filter(|f| !f.is_empty()) {
            params.insert("media-format".to_string(), format.to_string());
        }
        params
    }
}
