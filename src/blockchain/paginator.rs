use log::debug;

use crate::error::ApiError;
use crate::indexer::{IndexerApi, RawTransaction};
use crate::metrics::TX_PAGES_FETCHED;

// Collects every transaction of a block through the paginated search
// endpoint, independent of the service's per-call result limit.
//
// Expressed as a loop with an accumulator and a continuation-token variable
// so memory and stack stay bounded for arbitrarily large blocks. The
// terminator is an empty page: the service may report a continuation token
// even on the final page, so the token's presence means nothing on its own.
pub async fn fetch_all_transactions(
    api: &dyn IndexerApi,
    round: u64,
    limit: u64,
) -> Result<Vec<RawTransaction>, ApiError> {
    let mut collected: Vec<RawTransaction> = Vec::new();
    let mut next: Option<String> = None;

    loop {
        // Any page failure aborts the whole pagination; no partial results
        let page = api.search_transactions(round, limit, next.as_deref()).await?;
        if page.transactions.is_empty() {
            break;
        }
        TX_PAGES_FETCHED.inc();
        collected.extend(page.transactions);

        // A non-empty page without a token cannot be resumed; re-issuing the
        // unanchored query would replay the first page forever
        match page.next_token {
            Some(token) => next = Some(token),
            None => break,
        }
    }

    debug!(
        "Paginated {} transactions for round {} (page size {})",
        collected.len(),
        round,
        limit
    );
    Ok(collected)
}
