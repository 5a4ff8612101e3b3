//! Cover art command handler.

use std::io::Write;

use mbngs_ws::{CoverArtEntity, HttpBackend, MusicBrainzClient};

use crate::commands::CoverArtArgs;
use crate::error::CliError;
use crate::presentation::{default_image_path, save_file, write_json};

/// Execute the cover-art command.
///
/// Without `--front`, `--back` or `--image` the image listing is printed;
/// otherwise the chosen image is saved to `--output` (or a file named after
/// the MBID in the current directory).
pub async fn execute<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &CoverArtArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let entity = if args.release_group {
        CoverArtEntity::ReleaseGroup
    } else {
        CoverArtEntity::Release
    };

    let Some(cover) = args.cover() else {
        let list = match entity {
            CoverArtEntity::Release => client.get_image_list(&args.mbid).await?,
            CoverArtEntity::ReleaseGroup => client.get_release_group_image_list(&args.mbid).await?,
        };
        return write_json(out, &list);
    };

    let bytes = client
        .get_image(entity, &args.mbid, cover, args.size)
        .await?;
    let path = args
        .output
        .clone()
        .unwrap_or_else(|| default_image_path(&args.mbid, cover, args.size));
    save_file(&path, &bytes)?;
    eprintln!("Saved {} bytes to {}", bytes.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{StaticBackend, client, output};
    use mbngs_ws::ImageSize;
    use serde_json::json;

    fn args(mbid: &str) -> CoverArtArgs {
        CoverArtArgs {
            mbid: mbid.to_string(),
            release_group: false,
            front: false,
            back: false,
            image: None,
            size: ImageSize::Original,
            output: None,
        }
    }

    #[tokio::test]
    async fn test_listing() {
        let (client, urls) = client(StaticBackend::json(&json!({
            "release": "https://musicbrainz.org/release/r1",
            "images": [{"id": 1, "image": "http://coverartarchive.org/release/r1/1.jpg", "front": true}]
        })));
        let mut out = Vec::new();
        execute(&client, &args("r1"), &mut out).await.unwrap();

        assert_eq!(output(out)["images"][0]["front"], true);
        assert_eq!(
            urls.lock().unwrap().as_slice(),
            ["https://coverartarchive.org/release/r1"]
        );
    }

    #[tokio::test]
    async fn test_download_front() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("front.jpg");
        let (client, urls) = client(StaticBackend::bytes(vec![0xFF, 0xD8]));
        let mut args = args("rg1");
        args.release_group = true;
        args.front = true;
        args.size = ImageSize::Small;
        args.output = Some(path.clone());

        let mut out = Vec::new();
        execute(&client, &args, &mut out).await.unwrap();

        assert!(out.is_empty());
        assert_eq!(std::fs::read(&path).unwrap(), vec![0xFF, 0xD8]);
        assert_eq!(
            urls.lock().unwrap().as_slice(),
            ["https://coverartarchive.org/release-group/rg1/front-250"]
        );
    }

    #[tokio::test]
    async fn test_missing_cover() {
        let (client, _) = client(StaticBackend::status(404));
        let mut args = args("r1");
        args.back = true;
        let err = execute(&client, &args, &mut Vec::new()).await.unwrap_err();
        assert!(matches!(err, CliError::NotFound(_)));
    }
}
