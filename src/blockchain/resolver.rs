use backoff::future::retry;
use backoff::ExponentialBackoff;
use dashmap::DashMap;
use log::{debug, warn};
use std::collections::HashMap;
use std::time::Duration;

use crate::error::ApiError;
use crate::indexer::{IndexerApi, RawBlock};

// Polling policy for the chain-tip wait loop
#[derive(Clone, Copy, Debug)]
pub struct PollPolicy {
    pub interval: Duration,
    pub timeout: Duration,
}

/// Determines a block's own hash from the next block's parent-hash
/// back-reference. The service never returns a block's hash directly.
///
/// `siblings` maps round -> parent hash for the blocks already fetched in the
/// current batch, so a batch containing `round + 1` resolves without any
/// network call. A fresh lookahead result is parked in `lookahead` for the
/// fetcher to consume when that round is requested later.
pub async fn resolve_block_hash(
    api: &dyn IndexerApi,
    round: u64,
    siblings: &HashMap<u64, String>,
    lookahead: &DashMap<u64, RawBlock>,
    poll: PollPolicy,
) -> Result<String, ApiError> {
    let target = round + 1;

    // Prefer a sibling from the same batch
    if let Some(parent) = siblings.get(&target) {
        debug!("Resolved hash of round {} from batch sibling {}", round, target);
        return Ok(parent.clone());
    }

    match api.lookup_block(target).await {
        Ok(next) => {
            let hash = next.previous_block_hash.clone();
            lookahead.insert(target, next);
            Ok(hash)
        }
        Err(err) => {
            // The lookup may have failed only because the next block does not
            // exist yet. Check where the chain actually is.
            let health = api.health().await?;
            if health.round >= target {
                // The chain already has the block; this was a genuine failure
                return Err(err);
            }

            warn!(
                "Round {} not yet produced (chain at {}), polling for it",
                target, health.round
            );
            wait_for_round(api, target, poll).await?;

            // The chain has caught up; re-attempt the lookahead once
            let next = api.lookup_block(target).await?;
            let hash = next.previous_block_hash.clone();
            lookahead.insert(target, next);
            Ok(hash)
        }
    }
}

// Polls the health endpoint at a fixed interval until the chain reaches
// `target`, bounded by the policy's timeout
async fn wait_for_round(
    api: &dyn IndexerApi,
    target: u64,
    poll: PollPolicy,
) -> Result<(), ApiError> {
    let policy = ExponentialBackoff {
        initial_interval: poll.interval,
        max_interval: poll.interval,
        multiplier: 1.0,
        randomization_factor: 0.0,
        max_elapsed_time: Some(poll.timeout),
        ..Default::default()
    };

    retry(policy, || async move {
        // Health failures propagate unchanged rather than being retried
        let health = api.health().await.map_err(backoff::Error::permanent)?;
        if health.round >= target {
            Ok(())
        } else {
            Err(backoff::Error::transient(ApiError::new(
                "NotYetProduced",
                format!(
                    "round {} not yet produced; chain at round {}",
                    target, health.round
                ),
            )))
        }
    })
    .await
    .map_err(|err| {
        if err.name == "NotYetProduced" {
            ApiError::new(
                "HashResolveTimeout",
                format!("timed out waiting for round {} to be produced", target),
            )
        } else {
            err
        }
    })
}
