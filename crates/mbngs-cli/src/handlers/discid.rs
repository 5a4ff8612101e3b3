//! Disc id command handler.

use std::io::Write;

use mbngs_ws::{DiscIdOptions, DiscIdResult, HttpBackend, MusicBrainzClient};

use crate::commands::DiscIdArgs;
use crate::error::CliError;
use crate::presentation::write_json;

fn discid_options(args: &DiscIdArgs) -> DiscIdOptions {
    let mut options = DiscIdOptions::new().cdstubs(!args.no_cdstubs);
    for include in &args.includes {
        options = options.include(include);
    }
    if let Some(toc) = &args.toc {
        options = options.toc(toc);
    }
    if args.all_media {
        options = options.media_format("all");
    }
    options
}

/// Execute the disc id command.
///
/// The output's `kind` tells a matched disc, a CD stub and a fuzzy
/// TOC match apart.
pub async fn execute<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &DiscIdArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let result = client
        .get_releases_by_discid(&args.id, &discid_options(args))
        .await?;
    if let DiscIdResult::Releases(page) = &result {
        tracing::debug!(matches = page.count, "disc id matched by TOC");
    }
    write_json(out, &result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{StaticBackend, client, output};
    use serde_json::json;

    #[tokio::test]
    async fn test_disc_found() {
        let (client, urls) = client(StaticBackend::json(&json!({
            "id": "arIS30RPWowvwNEqsqdDnZzDGhk-",
            "sectors": 207_000,
            "offsets": [150, 15_000],
            "releases": [{"id": "r1", "title": "Album"}]
        })));
        let args = DiscIdArgs {
            id: "arIS30RPWowvwNEqsqdDnZzDGhk-".to_string(),
            toc: None,
            no_cdstubs: true,
            all_media: true,
            includes: vec!["artists".to_string()],
        };
        let mut out = Vec::new();
        execute(&client, &args, &mut out).await.unwrap();

        let printed = output(out);
        assert_eq!(printed["kind"], "disc");
        assert_eq!(printed["sectors"], 207_000);
        assert_eq!(
            urls.lock().unwrap().as_slice(),
            ["https://musicbrainz.org/ws/2/discid/arIS30RPWowvwNEqsqdDnZzDGhk-?cdstubs=no&fmt=json&inc=artists&media-format=all"]
        );
    }
}
