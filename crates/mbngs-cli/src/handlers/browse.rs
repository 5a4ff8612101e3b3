//! Browse command handler.

use std::io::Write;

use mbngs_ws::{BrowseOptions, HttpBackend, MusicBrainzClient, Page};
use serde_json::Value;

use super::lookup::lookup_options;
use crate::commands::BrowseArgs;
use crate::error::CliError;
use crate::presentation::write_json;

/// Execute the browse command.
///
/// Prints one page, or with `--all` a plain array of every linked entity.
pub async fn execute<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &BrowseArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let options = BrowseOptions {
        lookup: lookup_options(&args.includes, &args.release_status, &args.release_type),
        limit: args.limit,
        offset: args.offset,
    };

    if args.all {
        let items: Vec<Value> = client.browse_all(args.entity, &args.link, &options).await?;
        tracing::debug!(entity = %args.entity, link = %args.link, fetched = items.len(), "browsed all pages");
        return write_json(out, &items);
    }

    let page: Page<Value> = client.browse(args.entity, &args.link, &options).await?;
    write_json(out, &page)
}
