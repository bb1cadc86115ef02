use dashmap::DashMap;
use futures::future::join_all;
use log::{debug, info};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::assembler;
use super::classifier;
use super::paginator;
use super::resolver::{self, PollPolicy};
use crate::config::Config;
use crate::error::ApiError;
use crate::indexer::{IndexerApi, IndexerClient, RawBlock};
use crate::metrics::{BLOCKS_FETCHED, BLOCK_FETCH_TIME, LOOKAHEAD_HITS};
use crate::models::Block;

// Public entry point of the fetch layer: turns a set of rounds into fully
// assembled, hash-resolved blocks.
pub struct BlockFetcher {
    api: Arc<dyn IndexerApi>,
    // Blocks retrieved by hash-resolution lookahead, parked for a later
    // fetch of the same round. Consumed on first use.
    lookahead: DashMap<u64, RawBlock>,
    page_limit: u64,
    poll: PollPolicy,
}

impl BlockFetcher {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let api = Arc::new(IndexerClient::new(config)?);
        Ok(Self::with_api(api, config))
    }

    // Transport seam; tests substitute a mock service
    pub fn with_api(api: Arc<dyn IndexerApi>, config: &Config) -> Self {
        BlockFetcher {
            api,
            lookahead: DashMap::new(),
            page_limit: config.page_limit,
            poll: PollPolicy {
                interval: Duration::from_millis(config.poll_interval_ms),
                timeout: Duration::from_secs(config.poll_timeout_secs),
            },
        }
    }

    /// Fetches one block per requested round. The returned list's order
    /// corresponds to `rounds`, independent of network completion order.
    /// Either every requested block is fully assembled or the first failure
    /// is propagated; no partial batches.
    pub async fn fetch_blocks(&self, rounds: &[u64]) -> Result<Vec<Block>, ApiError> {
        let start = Instant::now();

        // Fan out one lookup per round. join_all lets every in-flight lookup
        // settle; one round's failure does not cancel the others.
        let results = join_all(rounds.iter().map(|round| self.fetch_raw(*round))).await;
        let raws = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        // Blocks fetched in this batch double as hash-resolution siblings
        let siblings: HashMap<u64, String> = raws
            .iter()
            .map(|raw| (raw.round, raw.previous_block_hash.clone()))
            .collect();

        let mut blocks = Vec::with_capacity(raws.len());
        for raw in raws {
            let round = raw.round;
            let hash = resolver::resolve_block_hash(
                self.api.as_ref(),
                round,
                &siblings,
                &self.lookahead,
                self.poll,
            )
            .await?;
            let mut block = assembler::assemble(raw);
            block.hash = Some(hash);
            blocks.push(block);
        }

        BLOCKS_FETCHED.inc_by(blocks.len() as f64);
        BLOCK_FETCH_TIME.observe(start.elapsed().as_secs_f64());
        info!(
            "Fetched {} blocks in {:.2}s",
            blocks.len(),
            start.elapsed().as_secs_f64()
        );
        Ok(blocks)
    }

    async fn fetch_raw(&self, round: u64) -> Result<RawBlock, ApiError> {
        // Consume a block parked by an earlier lookahead
        if let Some((_, cached)) = self.lookahead.remove(&round) {
            LOOKAHEAD_HITS.inc();
            debug!("Lookahead cache hit for round {}", round);
            return Ok(cached);
        }

        match self.api.lookup_block(round).await {
            Ok(raw) => Ok(raw),
            Err(err) if classifier::is_oversized(&err) => {
                // The block exceeds the per-call limit: fetch the header and
                // the paginated transaction list concurrently, then merge
                debug!("Round {} over the result limit, paginating", round);
                let (mut header, transactions) = tokio::try_join!(
                    self.api.lookup_block_header(round),
                    paginator::fetch_all_transactions(self.api.as_ref(), round, self.page_limit)
                )?;
                header.transactions = transactions;
                Ok(header)
            }
            Err(err) => Err(err),
        }
    }
}
