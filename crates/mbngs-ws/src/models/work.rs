//! Works (compositions) and their attributes.

use serde::{Deserialize, Serialize};

use super::{Alias, Genre, Rating, Relation, Tag};

/// A typed attribute of a work, e.g. a key or a catalogue number.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct WorkAttribute {
    #[serde(rename = "type")]
    pub attribute_type: String,
    pub type_id: Option<String>,
    pub value: String,
    pub value_id: Option<String>,
}

/// A distinct intellectual or artistic creation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Work {
    pub id: String,
    pub title: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub work_type: Option<String>,
    pub type_id: Option<String>,
    pub language: Option<String>,
    pub languages: Vec<String>,
    pub iswcs: Vec<String>,
    pub attributes: Vec<WorkAttribute>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

impl Work {
    /// Values of all attributes of one type.
    pub fn attribute_values<'a>(&'a self, attribute_type: &'a str) -> impl Iterator<Item = &'a str> {
        self.attributes
            .iter()
            .filter(move |a| a.attribute_type == attribute_type)
            .map(|a| a.value.as_str())
    }
}
