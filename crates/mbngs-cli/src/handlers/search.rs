//! Search command handler.

use std::io::Write;

use mbngs_ws::{HttpBackend, MusicBrainzClient, Page, SearchQuery};
use serde_json::Value;

use crate::commands::SearchArgs;
use crate::error::CliError;
use crate::presentation::write_json;

fn search_query(args: &SearchArgs) -> SearchQuery {
    let mut query = SearchQuery::new(args.query.clone().unwrap_or_default()).strict(args.strict);
    for (field, value) in &args.fields {
        query = query.field(field, value);
    }
    if let Some(limit) = args.limit {
        query = query.limit(limit);
    }
    if let Some(offset) = args.offset {
        query = query.offset(offset);
    }
    query
}

/// Execute the search command, printing one page of hits.
pub async fn execute<B: HttpBackend, W: Write>(
    client: &MusicBrainzClient<B>,
    args: &SearchArgs,
    out: &mut W,
) -> Result<(), CliError> {
    let page: Page<Value> = client.search(args.entity, &search_query(args)).await?;
    tracing::debug!(entity = %args.entity, count = page.count, shown = page.items.len(), "search results");
    write_json(out, &page)
}
