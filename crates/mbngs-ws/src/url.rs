//! URL construction for the web service and the Cover Art Archive.
//!
//! Pure functions: the same configuration and arguments always produce the
//! same URL, with query parameters in key order.

use std::collections::BTreeMap;

use url::Url;
use url::form_urlencoded;

use crate::config::ClientConfig;
use crate::error::MbResult;
use crate::models::ImageSize;

/// Root path of version 2 of the web service.
const WS_ROOT: &str = "ws/2";

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// Form-encode parameters in key order (`inc=artists+recordings`).
pub fn encode_query(params: &BTreeMap<String, String>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish()
}

/// Build `{scheme}://{host}/ws/2/{path}?{params}`.
///
/// `path` must already be encoded; see [`encode_segment`].
pub fn build_ws_url(
    config: &ClientConfig,
    path: &str,
    params: &BTreeMap<String, String>,
) -> MbResult<Url> {
    let mut url = Url::parse(&format!(
        "{}://{}/{WS_ROOT}/{}",
        config.scheme(),
        config.hostname,
        path.trim_start_matches('/')
    ))?;
    if !params.is_empty() {
        url.set_query(Some(&encode_query(params)));
    }
    Ok(url)
}

/// Path of one entity: `{entity}/{id}`, or just `{entity}` without an id.
pub fn entity_path(entity: &str, id: Option<&str>) -> String {
    match id {
        Some(id) if !id.is_empty() => format!("{entity}/{}", encode_segment(id)),
        _ => entity.to_string(),
    }
}

/// Path adding or removing releases: `collection/{id}/releases/{a;b;c}`.
pub fn collection_releases_path<S: AsRef<str>>(collection: &str, releases: &[S]) -> String {
    let releases = releases
        .iter()
        .map(|r| encode_segment(r.as_ref()))
        .collect::<Vec<_>>()
        .join(";");
    format!("collection/{}/releases/{releases}", encode_segment(collection))
}

/// Build a Cover Art Archive URL.
///
/// `{caa_scheme}://{caa_host}/{entity}/{mbid}` lists images; with `cover` it names
/// one image (`front`, `back` or an image id), optionally at a thumbnail size.
pub fn build_cover_art_url(
    config: &ClientConfig,
    entity: &str,
    mbid: &str,
    cover: Option<&str>,
    size: ImageSize,
) -> MbResult<Url> {
    let mut path = format!("{entity}/{}", encode_segment(mbid));
    if let Some(cover) = cover {
        path.push('/');
        path.push_str(&encode_segment(cover));
        if let Some(suffix) = size.suffix() {
            path.push('-');
            path.push_str(suffix);
        }
    }
    Ok(Url::parse(&format!(
        "{}://{}/{path}",
        config.cover_art_scheme(),
        config.cover_art_hostname
    ))?)
}
