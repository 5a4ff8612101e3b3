//! Small value types shared by several entities.

use serde::{Deserialize, Serialize};

/// Begin and end of an entity's existence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LifeSpan {
    pub begin: Option<String>,
    pub end: Option<String>,
    pub ended: Option<bool>,
}

/// Alternative name of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Alias {
    pub name: String,
    pub sort_name: Option<String>,
    pub locale: Option<String>,
    #[serde(rename = "type")]
    pub alias_type: Option<String>,
    pub type_id: Option<String>,
    pub primary: Option<bool>,
    pub begin: Option<String>,
    pub end: Option<String>,
    pub ended: Option<bool>,
}

impl Alias {
    /// True for the primary alias of its locale.
    pub fn is_primary(&self) -> bool {
        self.primary.unwrap_or(false)
    }
}

/// Folksonomy tag with its vote count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub count: i32,
}

/// Genre with its vote count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    pub id: String,
    pub name: String,
    pub count: i32,
    pub disambiguation: Option<String>,
}

/// Average community rating (0-5) and number of votes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Rating {
    pub value: Option<f64>,
    pub votes_count: u32,
}

/// Geographic position of a place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Language and script of a release's text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRepresentation {
    pub language: Option<String>,
    pub script: Option<String>,
}

/// Annotation returned by an annotation search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotation {
    /// Entity type the annotation belongs to
    #[serde(rename = "type")]
    pub entity_type: Option<String>,
    /// MBID of the annotated entity
    pub entity: String,
    pub name: Option<String>,
    pub text: Option<String>,
    pub score: Option<u32>,
}
