//! ISRC and ISWC command handlers.

use std::io::Write;

use mbngs_ws::{HttpBackend, LookupOptions, MusicBrainzClient};

use crate::commands::{IsrcArgs, IswcArgs};
use crate::error::CliError;
use crate::presentation::write_json;

/// Print the recordings carrying an ISRC.
pub async fn isrc<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &IsrcArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let options = LookupOptions::new().includes(&args.includes);
    let result = client.get_recordings_by_isrc(&args.isrc, &options).await?;
    write_json(out, &result)
}

/// Print the works carrying an ISWC.
pub async fn iswc<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &IswcArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let page = client
        .get_works_by_iswc(&args.iswc, &LookupOptions::new())
        .await?;
    write_json(out, &page)
}
