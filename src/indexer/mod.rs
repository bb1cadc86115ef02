pub mod client;
pub mod types;

pub use client::IndexerClient;
pub use types::{Health, RawBlock, RawTransaction, TransactionPage};

use async_trait::async_trait;

use crate::error::ApiError;

/// Remote ledger-indexing service surface consumed by the fetch layer.
/// Implemented over HTTP by [`IndexerClient`]; tests substitute mocks.
#[async_trait]
pub trait IndexerApi: Send + Sync {
    /// Full block lookup. Fails with an oversized-response error when the
    /// block's transaction list exceeds the service's per-call limit.
    async fn lookup_block(&self, round: u64) -> Result<RawBlock, ApiError>;

    /// Block lookup without the transaction list.
    async fn lookup_block_header(&self, round: u64) -> Result<RawBlock, ApiError>;

    /// One page of the transaction search scoped to `round`, resuming at
    /// `next` when given.
    async fn search_transactions(
        &self,
        round: u64,
        limit: u64,
        next: Option<&str>,
    ) -> Result<TransactionPage, ApiError>;

    /// Service health, including the current chain round.
    async fn health(&self) -> Result<Health, ApiError>;
}
