#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod entity;
mod error;
mod http;
mod models;
mod parsing;
mod query;
mod rate_limit;
mod submission;
mod url;
mod validation;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{CoverArtEntity, DefaultMusicBrainzClient, MusicBrainzClient};

// Configuration
pub use config::{
    ClientConfig, Credentials, DEFAULT_COVER_ART_HOSTNAME, DEFAULT_HOSTNAME, RateLimit, UserAgent,
    WsFormat,
};

// Errors
pub use error::{MbError, MbResult};

// HTTP seam
pub use http::{HttpBackend, Method, ReqwestBackend, WsRequest, WsResponse};

// Entities and validation tables
pub use entity::EntityType;
pub use validation::{
    AUTH_REQUIRED_INCLUDES, AuthRequirement, RELATABLE_TYPES, RELATION_INCLUDES, VALID_RELEASE_STATUSES,
    VALID_RELEASE_TYPES, auth_requirement, check_filter_and_make_params, check_includes,
    valid_browse_includes, valid_includes, valid_search_fields,
};

// Requests
pub use query::{BrowseLink, BrowseOptions, DiscIdOptions, LookupOptions, SearchQuery, escape_lucene};
pub use submission::{
    MMD_NAMESPACE, RATABLE_ENTITIES, RatingSubmission, TAGGABLE_ENTITIES, TagSubmission,
    barcode_request, isrc_request,
};
pub use self::url::{build_cover_art_url, build_ws_url, collection_releases_path, entity_path};

// Responses
pub use models::*;
pub use parsing::{parse_discid_result, parse_json, parse_page, server_error_message};

// Silence unused dev-dependency warnings
#[cfg(test)]
use mockall as _;
