//! Collections command handler.

use std::io::Write;

use mbngs_ws::{HttpBackend, MusicBrainzClient};

use crate::commands::CollectionsArgs;
use crate::error::CliError;
use crate::presentation::write_json;

/// Print the authenticated user's collections.
pub async fn execute<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &CollectionsArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let page = client.get_collections(args.limit, args.offset).await?;
    write_json(out, &page)
}
