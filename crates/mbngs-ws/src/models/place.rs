//! Areas, places, events, labels, instruments, series and URLs.

use serde::{Deserialize, Serialize};

use super::{Alias, Coordinates, Genre, LifeSpan, Rating, Relation, Release, Tag};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Area {
    pub id: String,
    pub name: String,
    pub sort_name: Option<String>,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub area_type: Option<String>,
    pub type_id: Option<String>,
    pub iso_3166_1_codes: Vec<String>,
    pub iso_3166_2_codes: Vec<String>,
    pub life_span: Option<LifeSpan>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

/// A venue, studio or other physical location.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Place {
    pub id: String,
    pub name: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub place_type: Option<String>,
    pub type_id: Option<String>,
    pub address: Option<String>,
    pub area: Option<Area>,
    pub coordinates: Option<Coordinates>,
    pub life_span: Option<LifeSpan>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

/// An organised event (concert, festival, award ceremony).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Event {
    pub id: String,
    pub name: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub type_id: Option<String>,
    pub time: Option<String>,
    pub setlist: Option<String>,
    pub cancelled: Option<bool>,
    pub life_span: Option<LifeSpan>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Label {
    pub id: String,
    pub name: String,
    pub sort_name: Option<String>,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub label_type: Option<String>,
    pub type_id: Option<String>,
    pub label_code: Option<u32>,
    pub country: Option<String>,
    pub area: Option<Area>,
    pub life_span: Option<LifeSpan>,
    pub ipis: Vec<String>,
    pub isnis: Vec<String>,
    pub releases: Vec<Release>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub rating: Option<Rating>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Instrument {
    pub id: String,
    pub name: String,
    pub disambiguation: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub instrument_type: Option<String>,
    pub type_id: Option<String>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

/// An ordered sequence of entities (a catalogue, a tour, an award).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Series {
    pub id: String,
    pub name: String,
    pub disambiguation: Option<String>,
    #[serde(rename = "type")]
    pub series_type: Option<String>,
    pub type_id: Option<String>,
    pub aliases: Vec<Alias>,
    pub tags: Vec<Tag>,
    pub genres: Vec<Genre>,
    pub annotation: Option<String>,
    pub relations: Vec<Relation>,
    pub score: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Url {
    pub id: String,
    pub resource: String,
    pub relations: Vec<Relation>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_place_coordinates() {
        let place: Place = serde_json::from_value(json!({
            "id": "0c79cdbb-acd6-4e30-aaa3-a5c8d6b36a48",
            "name": "Abbey Road Studios",
            "type": "Studio",
            "address": "3 Abbey Road, St John's Wood, London, NW8 9AY",
            "coordinates": {"latitude": 51.5321, "longitude": -0.1781}
        }))
        .unwrap();
        let coordinates = place.coordinates.unwrap();
        assert!((coordinates.latitude - 51.5321).abs() < f64::EPSILON);
        assert!((coordinates.longitude + 0.1781).abs() < f64::EPSILON);
        assert_eq!(place.place_type.as_deref(), Some("Studio"));
    }

    #[test]
    fn test_event_cancelled_and_setlist() {
        let event: Event = serde_json::from_value(json!({
            "id": "e",
            "name": "Concert",
            "cancelled": false,
            "setlist": "* [e1] Song",
            "life-span": {"begin": "2015-05-03", "end": "2015-05-03"}
        }))
        .unwrap();
        assert_eq!(event.cancelled, Some(false));
        assert!(event.setlist.unwrap().contains("Song"));
    }

    #[test]
    fn test_area_iso_codes() {
        let area: Area = serde_json::from_value(json!({
            "id": "a",
            "name": "United Kingdom",
            "iso-3166-1-codes": ["GB"]
        }))
        .unwrap();
        assert_eq!(area.iso_3166_1_codes, vec!["GB"]);
    }
}
