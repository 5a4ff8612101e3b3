//! Releases, release groups, media and tracks.

use serde::{Deserialize, Serialize};

use super::{
    Alias, ArtistCredit, Genre, Label, Rating, Recording, Relation, Tag, TextRepresentation,
};

/// A release group: the abstract "album" a set of releases belong to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReleaseGroup {
    pub id: String,
    pub title: String,
    pub disambiguation: Option<String>,
    pub primary_type: Option<String>,
    pub primary_type_id: Option<String>,
    pub secondary_types: Vec<String>,
    pub first_release_date: Option<String>,
    pub artist_credit: Vec<ArtistCredit>,
    pub releases: Vec<Release>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

/// A label's catalog entry for a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LabelInfo {
    pub catalog_number: Option<String>,
    pub label: Option<Label>,
}

/// Cover Art Archive summary embedded in a release.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverArtArchiveSummary {
    pub artwork: bool,
    pub count: u32,
    pub front: bool,
    pub back: bool,
    pub darkened: bool,
}

/// A track on a medium.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Track {
    pub id: String,
    /// Label printed on the sleeve ("1", "A", "B2", or empty)
    pub number: String,
    /// Sequential index on the medium, 0 for a pregap track
    pub position: u32,
    pub title: String,
    /// Length in milliseconds
    pub length: Option<u64>,
    pub artist_credit: Vec<ArtistCredit>,
    pub recording: Option<Recording>,
}

impl Track {
    /// The track's own credit, or the recording's when the track has none.
    pub fn effective_artist_credit(&self) -> &[ArtistCredit] {
        if !self.artist_credit.is_empty() {
            return &self.artist_credit;
        }
        match &self.recording {
            Some(recording) => &recording.artist_credit,
            None => &[],
        }
    }

    pub fn track_or_recording_length(&self) -> Option<u64> {
        self.length
            .or_else(|| self.recording.as_ref().and_then(|r| r.length))
    }
}

/// A disc id attached to a medium.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MediumDisc {
    pub id: String,
    pub sectors: Option<u64>,
    pub offsets: Vec<u64>,
    pub offset_count: Option<u32>,
}

/// One medium (CD, vinyl side pair, digital media) of a release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Medium {
    pub position: u32,
    pub title: Option<String>,
    pub format: Option<String>,
    pub format_id: Option<String>,
    pub track_count: u32,
    pub track_offset: Option<u32>,
    pub discs: Vec<MediumDisc>,
    /// Hidden track before track 1
    pub pregap: Option<Track>,
    pub tracks: Vec<Track>,
    /// Data tracks following the audio tracks
    pub data_tracks: Vec<Track>,
}

impl Medium {
    /// Pregap, audio and data tracks in playing order.
    pub fn all_tracks(&self) -> impl Iterator<Item = &Track> {
        self.pregap
            .iter()
            .chain(self.tracks.iter())
            .chain(self.data_tracks.iter())
    }
}

/// A release: one issue of a release group with its own tracklist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Release {
    pub id: String,
    pub title: String,
    pub disambiguation: Option<String>,
    pub status: Option<String>,
    pub status_id: Option<String>,
    pub packaging: Option<String>,
    pub quality: Option<String>,
    pub date: Option<String>,
    pub country: Option<String>,
    pub barcode: Option<String>,
    pub asin: Option<String>,
    pub text_representation: Option<TextRepresentation>,
    pub artist_credit: Vec<ArtistCredit>,
    pub release_group: Option<ReleaseGroup>,
    pub label_info: Vec<LabelInfo>,
    pub media: Vec<Medium>,
    pub track_count: Option<u32>,
    pub cover_art_archive: Option<CoverArtArchiveSummary>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

impl Release {
    /// Total number of tracks over all media, pregaps and data tracks included.
    pub fn total_tracks(&self) -> usize {
        self.media.iter().map(|m| m.all_tracks().count()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::artist_credit_phrase;
    use serde_json::json;

    fn pregap_release() -> Release {
        serde_json::from_value(json!({
            "id": "8eb2b179-643d-3507-b64c-29fcc6745156",
            "title": "Tongue N' Groove",
            "status": "Official",
            "media": [{
                "position": 1,
                "format": "CD",
                "track-count": 2,
                "pregap": {
                    "id": "p0", "number": "0", "position": 0, "title": "Pregap", "length": 35000,
                    "recording": {"id": "r0", "title": "Pregap", "length": 35000}
                },
                "tracks": [
                    {"id": "t1", "number": "1", "position": 1, "title": "One", "length": null,
                     "recording": {"id": "r1", "title": "One", "length": 240000,
                                   "artist-credit": [{"name": "Sigh", "joinphrase": "", "artist": {"id": "a", "name": "Sigh"}}]}},
                    {"id": "t2", "number": "", "position": 2, "title": "Two",
                     "artist-credit": [{"name": "Track Artist", "joinphrase": "", "artist": {"id": "b", "name": "Track Artist"}}]}
                ],
                "data-tracks": [
                    {"id": "d1", "number": "3", "position": 3, "title": "Video"}
                ]
            }]
        }))
        .unwrap()
    }

    #[test]
    fn test_pregap_and_data_tracks() {
        let release = pregap_release();
        let medium = &release.media[0];
        assert_eq!(medium.pregap.as_ref().unwrap().position, 0);
        assert_eq!(medium.tracks.len(), 2);
        assert_eq!(medium.data_tracks.len(), 1);
        assert_eq!(release.total_tracks(), 4);
        let positions: Vec<u32> = medium.all_tracks().map(|t| t.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_track_number_may_be_empty() {
        let release = pregap_release();
        assert_eq!(release.media[0].tracks[1].number, "");
        assert_eq!(release.media[0].tracks[1].position, 2);
    }

    #[test]
    fn test_track_or_recording_length() {
        let release = pregap_release();
        let tracks = &release.media[0].tracks;
        assert_eq!(tracks[0].track_or_recording_length(), Some(240_000));
        assert_eq!(tracks[1].track_or_recording_length(), None);
        let pregap = release.media[0].pregap.as_ref().unwrap();
        assert_eq!(pregap.track_or_recording_length(), Some(35_000));
    }

    #[test]
    fn test_effective_artist_credit() {
        let release = pregap_release();
        let tracks = &release.media[0].tracks;
        assert_eq!(artist_credit_phrase(tracks[0].effective_artist_credit()), "Sigh");
        assert_eq!(
            artist_credit_phrase(tracks[1].effective_artist_credit()),
            "Track Artist"
        );
        assert!(release.media[0].data_tracks[0].effective_artist_credit().is_empty());
    }

    #[test]
    fn test_release_group_types() {
        let rg: ReleaseGroup = serde_json::from_value(json!({
            "id": "rg",
            "title": "Nevermind",
            "primary-type": "Album",
            "secondary-types": ["Live"],
            "first-release-date": "1991-09-24"
        }))
        .unwrap();
        assert_eq!(rg.primary_type.as_deref(), Some("Album"));
        assert_eq!(rg.secondary_types, vec!["Live"]);
    }

    #[test]
    fn test_label_info_without_label() {
        let info: LabelInfo =
            serde_json::from_value(json!({"catalog-number": "DGC-24425", "label": null})).unwrap();
        assert_eq!(info.catalog_number.as_deref(), Some("DGC-24425"));
        assert!(info.label.is_none());
    }
}
