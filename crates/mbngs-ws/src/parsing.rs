//! Conversion of raw response bodies into typed results.
//!
//! Everything here is synchronous and works on bytes or `serde_json::Value`,
//! so it can be tested without a backend.

use quick_xml::Reader;
use quick_xml::events::Event;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::entity::EntityType;
use crate::error::{MbError, MbResult};
use crate::models::{CdStub, Disc, DiscIdResult, Page, Release};

// ============================================================================
// Entities and pages
// ============================================================================

/// Deserialize a JSON body into `T`.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> MbResult<T> {
    Ok(serde_json::from_slice(body)?)
}

fn read_u32(json: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .find_map(|key| json.get(*key).and_then(Value::as_u64))
        .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}

/// Parse a search or browse list of `entity`.
///
/// Searches report `count`/`offset`; browses report
/// `{entity}-count`/`{entity}-offset`. Either is accepted.
pub fn parse_page<T: DeserializeOwned>(entity: EntityType, mut json: Value) -> MbResult<Page<T>> {
    let count_key = format!("{}-count", entity.as_str());
    let offset_key = format!("{}-offset", entity.as_str());

    let items = match json.get_mut(entity.list_key()).map(Value::take) {
        Some(Value::Array(items)) => items
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<T>, _>>()?,
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            return Err(MbError::InvalidResponse {
                message: format!(
                    "expected '{}' to be a list, got {}",
                    entity.list_key(),
                    json_kind(&other)
                ),
            });
        }
    };

    let count = read_u32(&json, &["count", count_key.as_str()])
        .unwrap_or_else(|| u32::try_from(items.len()).unwrap_or(u32::MAX));
    let offset = read_u32(&json, &["offset", offset_key.as_str()]).unwrap_or(0);

    Ok(Page {
        count,
        offset,
        items,
    })
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

// ============================================================================
// Disc ids
// ============================================================================

/// Work out which kind of disc id answer the server sent.
pub fn parse_discid_result(json: Value) -> MbResult<DiscIdResult> {
    if json.get("offsets").is_some() || json.get("sectors").is_some() {
        let disc: Disc = serde_json::from_value(json)?;
        return Ok(DiscIdResult::Disc(disc));
    }
    if json.get("releases").is_some() {
        let page: Page<Release> = parse_page(EntityType::Release, json)?;
        return Ok(DiscIdResult::Releases(page));
    }
    if json.get("tracks").is_some() || json.get("title").is_some() {
        let stub: CdStub = serde_json::from_value(json)?;
        return Ok(DiscIdResult::CdStub(stub));
    }
    Err(MbError::InvalidResponse {
        message: "disc id response has neither a disc, a CD stub nor a release list".to_string(),
    })
}

// ============================================================================
// Error bodies
// ============================================================================

/// Error text from a failed request's body.
///
/// JSON errors look like `{"error": "Not Found", "help": "..."}`, XML ones
/// like `<error><text>Not Found</text>...</error>`. The first message wins.
pub fn server_error_message(body: &[u8]) -> Option<String> {
    if let Ok(json) = serde_json::from_slice::<Value>(body) {
        return json
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string)
            .filter(|s| !s.is_empty());
    }
    first_xml_text(body)
}

fn first_xml_text(body: &[u8]) -> Option<String> {
    let mut reader = Reader::from_reader(body);
    reader.config_mut().trim_text(true);
    let mut buf = Vec::new();
    let mut in_text = false;
    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) if e.name().as_ref() == b"text" => in_text = true,
            Ok(Event::End(e)) if e.name().as_ref() == b"text" => in_text = false,
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().ok()?.into_owned();
                if !text.is_empty() {
                    return Some(text);
                }
            }
            Ok(Event::Eof) | Err(_) => return None,
            Ok(_) => {}
        }
        buf.clear();
    }
}
