//! Relationships between entities.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{
    Area, Artist, Event, Instrument, Label, Place, Recording, Release, ReleaseGroup, Series, Url,
    Work,
};

/// A relationship from the looked-up entity to a target entity.
///
/// Only the field matching `target_type` is set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Relation {
    #[serde(rename = "type")]
    pub relation_type: String,
    pub type_id: Option<String>,
    pub target_type: Option<String>,
    pub direction: Option<String>,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub ended: Option<bool>,
    pub ordering_key: Option<u32>,
    /// Name the target is credited with in this relationship
    pub target_credit: Option<String>,
    /// Name the source is credited with in this relationship
    pub source_credit: Option<String>,
    pub attributes: Vec<String>,
    pub attribute_ids: BTreeMap<String, String>,
    pub attribute_values: BTreeMap<String, String>,
    pub attribute_credits: BTreeMap<String, String>,

    pub area: Option<Box<Area>>,
    pub artist: Option<Box<Artist>>,
    pub event: Option<Box<Event>>,
    pub instrument: Option<Box<Instrument>>,
    pub label: Option<Box<Label>>,
    pub place: Option<Box<Place>>,
    pub recording: Option<Box<Recording>>,
    pub release: Option<Box<Release>>,
    #[serde(rename = "release_group")]
    pub release_group: Option<Box<ReleaseGroup>>,
    pub series: Option<Box<Series>>,
    pub url: Option<Box<Url>>,
    pub work: Option<Box<Work>>,
}

/// One relationship attribute with everything known about it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RelationAttribute {
    pub attribute: String,
    pub type_id: Option<String>,
    pub credited_as: Option<String>,
    pub value: Option<String>,
}

impl Relation {
    /// Attributes joined with their type ids, credits and values.
    pub fn attribute_details(&self) -> Vec<RelationAttribute> {
        self.attributes
            .iter()
            .map(|attribute| RelationAttribute {
                attribute: attribute.clone(),
                type_id: self.attribute_ids.get(attribute).cloned(),
                credited_as: self.attribute_credits.get(attribute).cloned(),
                value: self.attribute_values.get(attribute).cloned(),
            })
            .collect()
    }

    /// MBID (or URL) of the target entity.
    pub fn target(&self) -> Option<&str> {
        let id = self
            .area
            .as_ref()
            .map(|e| &e.id)
            .or_else(|| self.artist.as_ref().map(|e| &e.id))
            .or_else(|| self.event.as_ref().map(|e| &e.id))
            .or_else(|| self.instrument.as_ref().map(|e| &e.id))
            .or_else(|| self.label.as_ref().map(|e| &e.id))
            .or_else(|| self.place.as_ref().map(|e| &e.id))
            .or_else(|| self.recording.as_ref().map(|e| &e.id))
            .or_else(|| self.release.as_ref().map(|e| &e.id))
            .or_else(|| self.release_group.as_ref().map(|e| &e.id))
            .or_else(|| self.series.as_ref().map(|e| &e.id))
            .or_else(|| self.work.as_ref().map(|e| &e.id));
        match id {
            Some(id) => Some(id.as_str()),
            None => self.url.as_ref().map(|u| u.resource.as_str()),
        }
    }
}

/// Relations of one target type.
pub fn relations_of_type<'a>(
    relations: &'a [Relation],
    target_type: &'a str,
) -> impl Iterator<Item = &'a Relation> + 'a {
    relations
        .iter()
        .filter(move |r| r.target_type.as_deref() == Some(target_type))
}
