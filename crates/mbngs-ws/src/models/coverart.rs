//! Cover Art Archive image listings.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Requested size of a cover art image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ImageSize {
    /// 250px thumbnail
    Small,
    /// 500px thumbnail
    Large,
    /// 1200px thumbnail
    Huge,
    /// Original upload
    #[default]
    Original,
}

impl ImageSize {
    /// Suffix appended to the image path, `None` for the original.
    pub const fn suffix(self) -> Option<&'static str> {
        match self {
            Self::Small => Some("250"),
            Self::Large => Some("500"),
            Self::Huge => Some("1200"),
            Self::Original => None,
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "250" | "small" => Some(Self::Small),
            "500" | "large" => Some(Self::Large),
            "1200" | "huge" => Some(Self::Huge),
            "original" | "full" | "" => Some(Self::Original),
            _ => None,
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix().unwrap_or("original"))
    }
}

/// Image identifier; older listings send it as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageId {
    Number(u64),
    Text(String),
}

impl Default for ImageId {
    fn default() -> Self {
        Self::Number(0)
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One image in a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverArtImage {
    pub id: ImageId,
    /// URL of the original upload
    pub image: String,
    pub types: Vec<String>,
    pub front: bool,
    pub back: bool,
    pub approved: bool,
    pub comment: String,
    pub edit: Option<u64>,
    /// Thumbnail URLs keyed by size ("250", "500", "1200", "small", "large")
    pub thumbnails: BTreeMap<String, String>,
}

impl CoverArtImage {
    /// URL of this image at `size`, if the archive has it.
    pub fn url(&self, size: ImageSize) -> Option<&str> {
        match size.suffix() {
            None => Some(self.image.as_str()),
            Some(suffix) => self.thumbnails.get(suffix).map(String::as_str),
        }
    }
}

/// All images of a release or release group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageList {
    pub images: Vec<CoverArtImage>,
    /// Release page the images belong to
    pub release: String,
}

impl ImageList {
    pub fn front(&self) -> Option<&CoverArtImage> {
        self.images.iter().find(|i| i.front)
    }

    pub fn back(&self) -> Option<&CoverArtImage> {
        self.images.iter().find(|i| i.back)
    }
}
