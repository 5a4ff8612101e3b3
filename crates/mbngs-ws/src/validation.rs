//! Allowed includes, filters and search fields, and the checks that use them.
//!
//! These tables mirror what the `/ws/2` service accepts. Checking locally
//! turns a typo into a usage error instead of a 400 from the server.

use std::collections::BTreeMap;

use crate::entity::EntityType;
use crate::error::{MbError, MbResult};

/// Entity types that can appear on either side of a relationship.
pub const RELATABLE_TYPES: &[&str] = &[
    "area",
    "artist",
    "label",
    "place",
    "event",
    "recording",
    "release",
    "release-group",
    "series",
    "url",
    "work",
    "instrument",
];

/// `{type}-rels` for every relatable type.
pub const RELATION_INCLUDES: &[&str] = &[
    "area-rels",
    "artist-rels",
    "label-rels",
    "place-rels",
    "event-rels",
    "recording-rels",
    "release-rels",
    "release-group-rels",
    "series-rels",
    "url-rels",
    "work-rels",
    "instrument-rels",
];

pub const TAG_INCLUDES: &[&str] = &["tags", "user-tags", "genres", "user-genres"];

pub const RATING_INCLUDES: &[&str] = &["ratings", "user-ratings"];

/// Includes that only make sense for the authenticated user.
pub const AUTH_REQUIRED_INCLUDES: &[&str] = &["user-tags", "user-ratings", "user-genres"];

/// Release types usable as a `type` filter.
pub const VALID_RELEASE_TYPES: &[&str] = &[
    "nat",
    // primary types
    "album",
    "single",
    "ep",
    "broadcast",
    "other",
    // secondary types
    "compilation",
    "soundtrack",
    "spokenword",
    "interview",
    "audiobook",
    "live",
    "remix",
    "dj-mix",
    "mixtape/street",
    "audio drama",
];

/// Release statuses usable as a `status` filter.
pub const VALID_RELEASE_STATUSES: &[&str] = &["official", "promotion", "bootleg", "pseudo-release"];

const RELEASE_LIKE_INCLUDES: &[&str] = &[
    "artists",
    "labels",
    "recordings",
    "release-groups",
    "media",
    "artist-credits",
    "discids",
    "isrcs",
    "recording-level-rels",
    "work-level-rels",
    "annotation",
    "aliases",
];

fn concat(parts: &[&[&'static str]]) -> Vec<&'static str> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

/// Includes accepted by a lookup of `entity`.
pub fn valid_includes(entity: EntityType) -> Vec<&'static str> {
    use EntityType as E;
    match entity {
        E::Area | E::Place | E::Instrument => concat(&[
            &["aliases", "annotation"],
            RELATION_INCLUDES,
            TAG_INCLUDES,
        ]),
        E::Artist => concat(&[
            &[
                "recordings",
                "releases",
                "release-groups",
                "works",
                "various-artists",
                "discids",
                "media",
                "isrcs",
                "aliases",
                "annotation",
            ],
            RELATION_INCLUDES,
            TAG_INCLUDES,
            RATING_INCLUDES,
        ]),
        E::Annotation => Vec::new(),
        E::Label => concat(&[
            &["releases", "discids", "media", "aliases", "annotation"],
            RELATION_INCLUDES,
            TAG_INCLUDES,
            RATING_INCLUDES,
        ]),
        E::Event => concat(&[
            &["aliases"],
            RELATION_INCLUDES,
            TAG_INCLUDES,
            RATING_INCLUDES,
        ]),
        E::Recording => concat(&[
            &[
                "artists",
                "releases",
                "discids",
                "media",
                "artist-credits",
                "isrcs",
                "work-level-rels",
                "annotation",
                "aliases",
            ],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        E::Release => concat(&[RELEASE_LIKE_INCLUDES, TAG_INCLUDES, RELATION_INCLUDES]),
        E::ReleaseGroup => concat(&[
            &[
                "artists",
                "releases",
                "discids",
                "media",
                "artist-credits",
                "annotation",
                "aliases",
            ],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        E::Series => concat(&[&["annotation", "aliases"], RELATION_INCLUDES, TAG_INCLUDES]),
        E::Work => concat(&[
            &["aliases", "annotation"],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        E::Url => RELATION_INCLUDES.to_vec(),
        E::DiscId => concat(&[RELEASE_LIKE_INCLUDES, RELATION_INCLUDES]),
        E::Isrc => vec!["artists", "releases", "isrcs"],
        E::Iswc => vec!["artists"],
        E::Collection => vec!["releases"],
    }
}

/// Includes accepted when browsing `entity`, or `None` if it can't be browsed.
pub fn valid_browse_includes(entity: EntityType) -> Option<Vec<&'static str>> {
    use EntityType as E;
    let includes = match entity {
        E::Artist | E::Event | E::Label => concat(&[
            &["aliases"],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        E::Recording => concat(&[
            &["artist-credits", "isrcs", "work-level-rels"],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        E::Release => concat(&[
            &[
                "artist-credits",
                "labels",
                "recordings",
                "isrcs",
                "release-groups",
                "media",
                "discids",
            ],
            RELATION_INCLUDES,
        ]),
        E::Place => concat(&[&["aliases"], TAG_INCLUDES, RELATION_INCLUDES]),
        E::ReleaseGroup => concat(&[
            &["artist-credits"],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        E::Url => RELATION_INCLUDES.to_vec(),
        E::Work => concat(&[
            &["aliases", "annotation"],
            TAG_INCLUDES,
            RATING_INCLUDES,
            RELATION_INCLUDES,
        ]),
        _ => return None,
    };
    Some(includes)
}

/// Fields accepted by a search of `entity`, or `None` if it can't be searched.
pub const fn valid_search_fields(entity: EntityType) -> Option<&'static [&'static str]> {
    use EntityType as E;
    let fields: &[&str] = match entity {
        E::Annotation => &["entity", "name", "text", "type"],
        E::Area => &[
            "aid", "alias", "area", "areaaccent", "begin", "comment", "end", "ended", "iso",
            "iso1", "iso2", "iso3", "sortname", "tag", "type",
        ],
        E::Artist => &[
            "alias",
            "area",
            "arid",
            "artist",
            "artistaccent",
            "begin",
            "beginarea",
            "comment",
            "country",
            "end",
            "endarea",
            "ended",
            "gender",
            "ipi",
            "isni",
            "primary_alias",
            "sortname",
            "tag",
            "type",
        ],
        E::Event => &[
            "aid", "alias", "area", "arid", "artist", "begin", "comment", "eid", "end", "ended",
            "event", "eventaccent", "pid", "place", "tag", "type",
        ],
        E::Instrument => &[
            "alias",
            "comment",
            "description",
            "iid",
            "instrument",
            "instrumentaccent",
            "tag",
            "type",
        ],
        E::Label => &[
            "alias",
            "area",
            "begin",
            "code",
            "comment",
            "country",
            "end",
            "ended",
            "ipi",
            "label",
            "labelaccent",
            "laid",
            "release_count",
            "sortname",
            "tag",
            "type",
        ],
        E::Place => &[
            "address",
            "alias",
            "area",
            "begin",
            "comment",
            "end",
            "ended",
            "lat",
            "long",
            "pid",
            "place",
            "placeaccent",
            "type",
        ],
        E::Recording => &[
            "alias",
            "arid",
            "artist",
            "artistname",
            "comment",
            "country",
            "creditname",
            "date",
            "dur",
            "format",
            "isrc",
            "number",
            "position",
            "primarytype",
            "qdur",
            "recording",
            "recordingaccent",
            "reid",
            "release",
            "rgid",
            "rid",
            "secondarytype",
            "status",
            "tag",
            "tid",
            "tnum",
            "tracks",
            "tracksrelease",
            "type",
            "video",
        ],
        E::ReleaseGroup => &[
            "alias",
            "arid",
            "artist",
            "artistname",
            "comment",
            "creditname",
            "primarytype",
            "reid",
            "release",
            "releasegroup",
            "releasegroupaccent",
            "releases",
            "rgid",
            "secondarytype",
            "status",
            "tag",
            "type",
        ],
        E::Release => &[
            "alias",
            "arid",
            "artist",
            "artistname",
            "asin",
            "barcode",
            "catno",
            "comment",
            "country",
            "creditname",
            "date",
            "discids",
            "discidsmedium",
            "format",
            "label",
            "laid",
            "lang",
            "mediums",
            "primarytype",
            "quality",
            "reid",
            "release",
            "releaseaccent",
            "rgid",
            "script",
            "secondarytype",
            "status",
            "tag",
            "tracks",
            "tracksmedium",
            "type",
        ],
        E::Series => &[
            "alias",
            "comment",
            "orderingattribute",
            "series",
            "seriesaccent",
            "sid",
            "tag",
            "type",
        ],
        E::Work => &[
            "alias",
            "arid",
            "artist",
            "comment",
            "iswc",
            "lang",
            "recording",
            "recording_count",
            "rid",
            "tag",
            "type",
            "wid",
            "work",
            "workaccent",
        ],
        _ => return None,
    };
    Some(fields)
}

/// Whether a request must, may, or must not carry credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRequirement {
    /// Never authenticate.
    None,
    /// Authenticate when credentials are configured.
    IfSet,
    /// Fail without credentials.
    Required,
}

pub(crate) fn check_includes_impl<S: AsRef<str>>(
    entity: EntityType,
    includes: &[S],
    valid: &[&str],
) -> MbResult<()> {
    match includes.iter().find(|i| !valid.contains(&i.as_ref())) {
        Some(bad) => Err(MbError::InvalidInclude {
            entity: entity.to_string(),
            include: bad.as_ref().to_string(),
        }),
        None => Ok(()),
    }
}

/// Check that every include is valid for a lookup of `entity`.
pub fn check_includes<S: AsRef<str>>(entity: EntityType, includes: &[S]) -> MbResult<()> {
    check_includes_impl(entity, includes, &valid_includes(entity))
}

fn check_filter<S: AsRef<str>>(values: &[S], valid: &[&str]) -> MbResult<()> {
    match values.iter().find(|v| !valid.contains(&v.as_ref())) {
        Some(bad) => Err(MbError::invalid_filter(bad.as_ref())),
        None => Ok(()),
    }
}

/// Validate release status and type filters and turn them into parameters.
///
/// A status filter needs `releases` included (unless `entity` is a release);
/// a type filter needs `releases` or `release-groups` included (unless
/// `entity` is a release or release group).
pub fn check_filter_and_make_params<S: AsRef<str>>(
    entity: EntityType,
    includes: &[S],
    release_status: &[S],
    release_type: &[S],
) -> MbResult<BTreeMap<String, String>> {
    check_filter(release_status, VALID_RELEASE_STATUSES)?;
    check_filter(release_type, VALID_RELEASE_TYPES)?;

    let included = |name: &str| includes.iter().any(|i| i.as_ref() == name);

    if !release_status.is_empty() && !included("releases") && entity != EntityType::Release {
        return Err(MbError::invalid_filter(
            "Can't have a status with no release include",
        ));
    }
    if !release_type.is_empty()
        && !included("release-groups")
        && !included("releases")
        && !matches!(entity, EntityType::ReleaseGroup | EntityType::Release)
    {
        return Err(MbError::invalid_filter(
            "Can't have a release type with no releases or release-groups involved",
        ));
    }

    let join = |values: &[S]| {
        values
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("|")
    };

    let mut params = BTreeMap::new();
    if !release_status.is_empty() {
        params.insert("status".to_string(), join(release_status));
    }
    if !release_type.is_empty() {
        params.insert("type".to_string(), join(release_type));
    }
    Ok(params)
}

/// Decide whether a GET of `entity/id` with `includes` needs credentials.
pub fn auth_requirement<S: AsRef<str>>(
    entity: EntityType,
    id: &str,
    includes: &[S],
) -> AuthRequirement {
    if includes
        .iter()
        .any(|i| AUTH_REQUIRED_INCLUDES.contains(&i.as_ref()))
    {
        AuthRequirement::Required
    } else if entity == EntityType::Collection {
        if id.is_empty() {
            AuthRequirement::Required
        } else {
            AuthRequirement::IfSet
        }
    } else {
        AuthRequirement::None
    }
}
