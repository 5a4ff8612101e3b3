use serde::{Deserialize, Serialize};

/// A user's collection of entities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub editor: Option<String>,
    #[serde(rename = "type")]
    pub collection_type: Option<String>,
    pub type_id: Option<String>,
    /// Kind of entity the collection holds ("release", "artist", ...)
    pub entity_type: Option<String>,
    pub area_count: Option<u32>,
    pub artist_count: Option<u32>,
    pub event_count: Option<u32>,
    pub instrument_count: Option<u32>,
    pub label_count: Option<u32>,
    pub place_count: Option<u32>,
    pub recording_count: Option<u32>,
    pub release_count: Option<u32>,
    pub release_group_count: Option<u32>,
    pub series_count: Option<u32>,
    pub work_count: Option<u32>,
}

impl Collection {
    /// Number of entities in the collection, whatever their kind.
    pub fn item_count(&self) -> u32 {
        [
            self.area_count,
            self.artist_count,
            self.event_count,
            self.instrument_count,
            self.label_count,
            self.place_count,
            self.recording_count,
            self.release_count,
            self.release_group_count,
            self.series_count,
            self.work_count,
        ]
        .into_iter()
        .flatten()
        .sum()
    }
}
