//! XML request bodies for submissions.
//!
//! Barcodes, ISRCs, tags and ratings are posted as `<metadata>` documents in
//! the MusicBrainz metadata namespace. Maps are ordered, so the same input
//! always produces the same document.

use std::collections::BTreeMap;
use std::fmt;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::entity::EntityType;
use crate::error::{MbError, MbResult};

/// Namespace of the MusicBrainz metadata schema.
pub const MMD_NAMESPACE: &str = "http://musicbrainz.org/ns/mmd-2.0#";

/// Entities users can tag.
pub const TAGGABLE_ENTITIES: &[EntityType] = &[
    EntityType::Area,
    EntityType::Artist,
    EntityType::Event,
    EntityType::Instrument,
    EntityType::Label,
    EntityType::Place,
    EntityType::Recording,
    EntityType::Release,
    EntityType::ReleaseGroup,
    EntityType::Series,
    EntityType::Work,
];

/// Entities users can rate.
pub const RATABLE_ENTITIES: &[EntityType] = &[
    EntityType::Artist,
    EntityType::Event,
    EntityType::Label,
    EntityType::Place,
    EntityType::Recording,
    EntityType::ReleaseGroup,
    EntityType::Work,
];

// ============================================================================
// Submission sets
// ============================================================================

/// The user's tags for a set of entities.
///
/// Tags replace whatever the user tagged the entity with before; an empty
/// list removes all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagSubmission {
    entities: BTreeMap<EntityType, BTreeMap<String, Vec<String>>>,
}

impl TagSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tags of one entity.
    #[must_use]
    pub fn tags<I, S>(mut self, entity: EntityType, mbid: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entities
            .entry(entity)
            .or_default()
            .insert(mbid.into(), tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Build the request body.
    pub fn to_xml(&self) -> MbResult<String> {
        check_entities("tags", self.entities.keys(), TAGGABLE_ENTITIES)?;
        let mut body = XmlBody::new()?;
        for (entity, items) in &self.entities {
            let name = entity.as_str();
            body.start(&format!("{name}-list"), &[])?;
            for (mbid, tags) in items {
                body.start(name, &[("id", mbid.as_str())])?;
                body.start("user-tag-list", &[])?;
                for tag in tags {
                    body.start("user-tag", &[])?;
                    body.text_element("name", tag)?;
                    body.end("user-tag")?;
                }
                body.end("user-tag-list")?;
                body.end(name)?;
            }
            body.end(&format!("{name}-list"))?;
        }
        body.finish()
    }
}

/// The user's ratings (0-100, 20 per star) for a set of entities.
///
/// A rating of 0 removes the user's rating.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingSubmission {
    entities: BTreeMap<EntityType, BTreeMap<String, u8>>,
}

impl RatingSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn rating(mut self, entity: EntityType, mbid: impl Into<String>, rating: u8) -> Self {
        self.entities
            .entry(entity)
            .or_default()
            .insert(mbid.into(), rating);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Build the request body. Fails on ratings above 100.
    pub fn to_xml(&self) -> MbResult<String> {
        check_entities("ratings", self.entities.keys(), RATABLE_ENTITIES)?;
        for (mbid, rating) in self.entities.values().flatten() {
            if *rating > 100 {
                return Err(MbError::InvalidRating {
                    id: mbid.clone(),
                    rating: *rating,
                });
            }
        }

        let mut body = XmlBody::new()?;
        for (entity, items) in &self.entities {
            let name = entity.as_str();
            body.start(&format!("{name}-list"), &[])?;
            for (mbid, rating) in items {
                body.start(name, &[("id", mbid.as_str())])?;
                body.text_element("user-rating", &rating.to_string())?;
                body.end(name)?;
            }
            body.end(&format!("{name}-list"))?;
        }
        body.finish()
    }
}

/// Body submitting barcodes, keyed by release MBID.
pub fn barcode_request(release_barcodes: &BTreeMap<String, String>) -> MbResult<String> {
    let mut body = XmlBody::new()?;
    body.start("release-list", &[])?;
    for (release, barcode) in release_barcodes {
        body.start("release", &[("id", release.as_str())])?;
        body.text_element("barcode", barcode)?;
        body.end("release")?;
    }
    body.end("release-list")?;
    body.finish()
}

/// Body submitting ISRCs, keyed by recording MBID.
pub fn isrc_request(recording_isrcs: &BTreeMap<String, Vec<String>>) -> MbResult<String> {
    let mut body = XmlBody::new()?;
    body.start("recording-list", &[])?;
    for (recording, isrcs) in recording_isrcs {
        body.start("recording", &[("id", recording.as_str())])?;
        let count = isrcs.len().to_string();
        body.start("isrc-list", &[("count", count.as_str())])?;
        for isrc in isrcs {
            body.empty("isrc", &[("id", isrc.as_str())])?;
        }
        body.end("isrc-list")?;
        body.end("recording")?;
    }
    body.end("recording-list")?;
    body.finish()
}

fn check_entities<'a>(
    operation: &str,
    entities: impl Iterator<Item = &'a EntityType>,
    allowed: &[EntityType],
) -> MbResult<()> {
    for entity in entities {
        if !allowed.contains(entity) {
            return Err(MbError::InvalidSubmission {
                operation: operation.to_string(),
                entity: entity.to_string(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// Writer
// ============================================================================

fn xml_error(error: impl fmt::Display) -> MbError {
    MbError::XmlWrite(error.to_string())
}

/// A `<metadata>` document being written.
struct XmlBody {
    writer: Writer<Vec<u8>>,
}

impl XmlBody {
    fn new() -> MbResult<Self> {
        let mut writer = Writer::new(Vec::new());
        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(xml_error)?;
        writer
            .write_event(Event::Start(
                BytesStart::new("metadata").with_attributes([("xmlns", MMD_NAMESPACE)]),
            ))
            .map_err(xml_error)?;
        Ok(Self { writer })
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> MbResult<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer
            .write_event(Event::Start(element))
            .map_err(xml_error)
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> MbResult<()> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer
            .write_event(Event::Empty(element))
            .map_err(xml_error)
    }

    fn end(&mut self, name: &str) -> MbResult<()> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_error)
    }

    fn text_element(&mut self, name: &str, text: &str) -> MbResult<()> {
        self.start(name, &[])?;
        self.writer
            .write_event(Event::Text(BytesText::new(text)))
            .map_err(xml_error)?;
        self.end(name)
    }

    fn finish(mut self) -> MbResult<String> {
        self.end("metadata")?;
        String::from_utf8(self.writer.into_inner()).map_err(xml_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?><metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#">"#;

    #[test]
    fn test_barcode_request() {
        let mut barcodes = BTreeMap::new();
        barcodes.insert("r2".to_string(), "0602527012489".to_string());
        barcodes.insert("r1".to_string(), "720642442524".to_string());
        let xml = barcode_request(&barcodes).unwrap();
        assert_eq!(
            xml,
            format!(
                "{HEADER}<release-list>\
                 <release id=\"r1\"><barcode>720642442524</barcode></release>\
                 <release id=\"r2\"><barcode>0602527012489</barcode></release>\
                 </release-list></metadata>"
            )
        );
    }

    #[test]
    fn test_isrc_request() {
        let mut isrcs = BTreeMap::new();
        isrcs.insert(
            "rec".to_string(),
            vec!["USSM18900468".to_string(), "GBAYE0000351".to_string()],
        );
        let xml = isrc_request(&isrcs).unwrap();
        assert_eq!(
            xml,
            format!(
                "{HEADER}<recording-list><recording id=\"rec\"><isrc-list count=\"2\">\
                 <isrc id=\"USSM18900468\"/><isrc id=\"GBAYE0000351\"/>\
                 </isrc-list></recording></recording-list></metadata>"
            )
        );
    }

    #[test]
    fn test_tag_request_escapes_text() {
        let tags = TagSubmission::new()
            .tags(EntityType::ReleaseGroup, "rg", ["rock & roll", "grunge"])
            .tags(EntityType::Artist, "a", Vec::<String>::new());
        let xml = tags.to_xml().unwrap();
        assert_eq!(
            xml,
            format!(
                "{HEADER}<artist-list><artist id=\"a\"><user-tag-list></user-tag-list></artist></artist-list>\
                 <release-group-list><release-group id=\"rg\"><user-tag-list>\
                 <user-tag><name>rock &amp; roll</name></user-tag>\
                 <user-tag><name>grunge</name></user-tag>\
                 </user-tag-list></release-group></release-group-list></metadata>"
            )
        );
    }

    #[test]
    fn test_tags_rejected_for_untaggable_entity() {
        let tags = TagSubmission::new().tags(EntityType::Url, "u", ["x"]);
        assert!(matches!(
            tags.to_xml(),
            Err(MbError::InvalidSubmission { ref entity, .. }) if entity == "url"
        ));
    }

    #[test]
    fn test_rating_request() {
        let ratings = RatingSubmission::new()
            .rating(EntityType::Recording, "rec", 80)
            .rating(EntityType::Artist, "a", 0);
        let xml = ratings.to_xml().unwrap();
        assert_eq!(
            xml,
            format!(
                "{HEADER}<artist-list><artist id=\"a\"><user-rating>0</user-rating></artist></artist-list>\
                 <recording-list><recording id=\"rec\"><user-rating>80</user-rating></recording></recording-list>\
                 </metadata>"
            )
        );
    }

    #[test]
    fn test_rating_out_of_range() {
        let ratings = RatingSubmission::new().rating(EntityType::Work, "w", 101);
        assert!(matches!(
            ratings.to_xml(),
            Err(MbError::InvalidRating { rating: 101, .. })
        ));
    }

    #[test]
    fn test_release_cannot_be_rated() {
        let ratings = RatingSubmission::new().rating(EntityType::Release, "r", 20);
        assert!(matches!(ratings.to_xml(), Err(MbError::InvalidSubmission { .. })));
    }
}
