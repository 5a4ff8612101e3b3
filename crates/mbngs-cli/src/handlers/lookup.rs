//! Lookup command handler.

use std::io::Write;

use mbngs_ws::{HttpBackend, LookupOptions, MusicBrainzClient, WsFormat};

use crate::commands::LookupArgs;
use crate::error::CliError;
use crate::presentation::{write_json, write_text};

pub(crate) fn lookup_options(includes: &[String], status: &[String], types: &[String]) -> LookupOptions {
    let mut options = LookupOptions::new().includes(includes);
    for s in status {
        options = options.release_status(s);
    }
    for t in types {
        options = options.release_type(t);
    }
    options
}

/// Execute the lookup command.
///
/// Prints the entity as JSON, or the server's XML with `--xml`.
pub async fn execute<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &LookupArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let options = lookup_options(&args.includes, &args.release_status, &args.release_type);
    if args.xml {
        let body = client
            .fetch_raw(args.entity, &args.id, &options, WsFormat::Xml)
            .await?;
        return write_text(out, &body);
    }
    let value = client.lookup_json(args.entity, &args.id, &options).await?;
    write_json(out, &value)
}
