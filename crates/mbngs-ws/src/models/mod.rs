//! Typed web service responses.
//!
//! Every struct mirrors the `fmt=json` representation of an entity. All
//! fields are defaulted, so partial responses (search hits, embedded
//! entities, missing includes) deserialise without error.

mod artist;
mod collection;
mod common;
mod coverart;
mod disc;
mod place;
mod recording;
mod relation;
mod release;
mod work;

pub use artist::{Artist, ArtistCredit, artist_credit_phrase};
pub use collection::Collection;
pub use common::{Alias, Annotation, Coordinates, Genre, LifeSpan, Rating, Tag, TextRepresentation};
pub use coverart::{CoverArtImage, ImageId, ImageList, ImageSize};
pub use disc::{CdStub, CdStubTrack, Disc, DiscIdResult};
pub use place::{Area, Event, Instrument, Label, Place, Series, Url};
pub use recording::{IsrcResult, Recording};
pub use relation::{Relation, RelationAttribute, relations_of_type};
pub use release::{
    CoverArtArchiveSummary, LabelInfo, Medium, MediumDisc, Release, ReleaseGroup, Track,
};
pub use work::{Work, WorkAttribute};

use serde::Serialize;

/// One page of search or browse results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    /// Total number of results on the server
    pub count: u32,
    /// Offset of the first item of this page
    pub offset: u32,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    /// Offset of the page following this one, if any.
    pub fn next_offset(&self) -> Option<u32> {
        let len = u32::try_from(self.items.len()).ok()?;
        let next = self.offset.checked_add(len)?;
        (len > 0 && next < self.count).then_some(next)
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            count: 0,
            offset: 0,
            items: Vec::new(),
        }
    }
}
